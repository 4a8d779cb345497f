use std::{any::Any, fmt};

use sdk::{Arc, Duration, EmbedAuthor, EmbedDocument, EmbedField, EmbedFooter, EmbedMedia, SmolStr, Timestamp};
use serde_json::Value;

use crate::{
    color::{self, Color3},
    config::{Config, ConfigError, Limits},
    schema::{self, Strictness},
    validate, Error, ValidationError,
};

/// `0001-01-01T00:00:00Z`
const MIN_UNIX_TIMESTAMP: i64 = -62_135_596_800;

/// `9999-12-31T23:59:59Z`
const MAX_UNIX_TIMESTAMP: i64 = 253_402_300_799;

/// Incrementally builds a single [`EmbedDocument`].
///
/// Every setter validates its input before writing, so a rejected value never enters the document
/// and the builder is left exactly as it was. Setters return `&mut Self` to allow chaining:
///
/// ```
/// # use webhook_builder::EmbedBuilder;
/// let mut embed = EmbedBuilder::new();
/// embed
///     .set_title("Deploy finished")?
///     .set_url("https://ci.example.com/runs/42")?
///     .add_field("duration", "3m 12s", true)?;
/// # Ok::<(), webhook_builder::Error>(())
/// ```
#[derive(Default, Debug, Clone, PartialEq)]
pub struct EmbedBuilder {
    embed: EmbedDocument,
    limits: Limits,
}

impl EmbedBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fails if any limit is above its platform maximum.
    pub fn with_limits(limits: Limits) -> Result<Self, ConfigError> {
        limits.check()?;

        Ok(EmbedBuilder {
            embed: EmbedDocument::default(),
            limits,
        })
    }

    pub fn from_config(config: &Config) -> Self {
        EmbedBuilder {
            embed: EmbedDocument::default(),
            limits: config.limits(),
        }
    }

    /// Adopts a raw embed mapping, checking its text against `limits` as well as the strict schema.
    ///
    /// A whole-second timestamp is normalized.
    pub fn from_value(value: Value, limits: Limits) -> Result<Self, Error> {
        if !value.is_object() {
            return Err(Error::TypeError(
                format!("expected an embed object, found {}", schema::kind_of(&value)).into(),
            ));
        }

        limits.check()?;
        schema::check_embed(&value, Strictness::Strict)?;

        let mut embed: EmbedDocument = serde_json::from_value(value)?;

        validate::check_embed_lengths(&limits, &embed)?;

        if let Some(timestamp) = embed.timestamp.take() {
            embed.timestamp = Some(validate::normalize_timestamp(&timestamp)?);
        }

        Ok(EmbedBuilder { embed, limits })
    }

    /// Test if `value` was produced by this builder type
    pub fn is(value: &dyn Any) -> bool {
        value.is::<EmbedBuilder>()
    }

    #[inline]
    pub fn document(&self) -> &EmbedDocument {
        &self.embed
    }

    #[inline]
    pub fn into_document(self) -> EmbedDocument {
        self.embed
    }

    /// Snapshot of the current author, unaffected by later setter calls
    pub fn author(&self) -> Option<Arc<EmbedAuthor>> {
        self.embed.author.clone()
    }

    /// Snapshot of the current footer, unaffected by later setter calls
    pub fn footer(&self) -> Option<Arc<EmbedFooter>> {
        self.embed.footer.clone()
    }

    pub fn set_title(&mut self, title: impl Into<SmolStr>) -> Result<&mut Self, Error> {
        let title = title.into();
        validate::check_length("title", &title, self.limits.title)?;

        self.embed.title = Some(title);
        Ok(self)
    }

    pub fn set_title_utf8(&mut self, title: &[u8]) -> Result<&mut Self, Error> {
        let title = validate::check_text_bytes("title", title, self.limits.title)?;

        self.embed.title = Some(title.into());
        Ok(self)
    }

    pub fn set_description(&mut self, description: impl Into<SmolStr>) -> Result<&mut Self, Error> {
        let description = description.into();
        validate::check_length("description", &description, self.limits.description)?;

        self.embed.description = Some(description);
        Ok(self)
    }

    pub fn set_description_utf8(&mut self, description: &[u8]) -> Result<&mut Self, Error> {
        let description = validate::check_text_bytes("description", description, self.limits.description)?;

        self.embed.description = Some(description.into());
        Ok(self)
    }

    pub fn set_url(&mut self, url: impl Into<SmolStr>) -> Result<&mut Self, Error> {
        let url = url.into();
        validate::check_url("url", &url)?;

        self.embed.url = Some(url);
        Ok(self)
    }

    #[inline]
    pub fn set_body_url(&mut self, url: impl Into<SmolStr>) -> Result<&mut Self, Error> {
        self.set_url(url)
    }

    pub fn set_color(&mut self, color: u32) -> &mut Self {
        self.embed.color = Some(color);
        self
    }

    pub fn set_color_from_color3(&mut self, color: Color3) -> Result<&mut Self, Error> {
        match color.to_hex() {
            Some(hex) => Ok(self.set_color(hex)),
            None => Err(Error::ConversionError(
                format!("{color:?} does not convert to an RGB value").into(),
            )),
        }
    }

    pub fn set_color_from_css(&mut self, color: &str) -> Result<&mut Self, Error> {
        match color::parse_css_color(color) {
            Some(hex) => Ok(self.set_color(hex)),
            None => Err(Error::ConversionError(format!("\"{color}\" is not a CSS color").into())),
        }
    }

    /// Replaces the author with a modified copy, leaving any outstanding snapshot untouched.
    fn update_author(&mut self, f: impl FnOnce(&mut EmbedAuthor)) {
        let mut author = self.embed.author.as_deref().cloned().unwrap_or_default();
        f(&mut author);
        self.embed.author = Some(Arc::new(author));
    }

    fn update_footer(&mut self, f: impl FnOnce(&mut EmbedFooter)) {
        let mut footer = self.embed.footer.as_deref().cloned().unwrap_or_default();
        f(&mut footer);
        self.embed.footer = Some(Arc::new(footer));
    }

    /// Sets the author name and, if given, its URL and icon.
    ///
    /// All values are validated before any is written.
    pub fn set_author(
        &mut self,
        name: impl Into<SmolStr>,
        url: Option<&str>,
        icon_url: Option<&str>,
    ) -> Result<&mut Self, Error> {
        let name = name.into();
        validate::check_length("author.name", &name, self.limits.author_name)?;

        if let Some(url) = url {
            validate::check_url("author.url", url)?;
        }

        if let Some(icon_url) = icon_url {
            validate::check_url("author.icon_url", icon_url)?;
        }

        self.update_author(|author| {
            author.name = Some(name);

            if let Some(url) = url {
                author.url = Some(url.into());
            }

            if let Some(icon_url) = icon_url {
                author.icon_url = Some(icon_url.into());
            }
        });

        Ok(self)
    }

    pub fn set_author_name(&mut self, name: impl Into<SmolStr>) -> Result<&mut Self, Error> {
        let name = name.into();
        validate::check_length("author.name", &name, self.limits.author_name)?;

        self.update_author(|author| author.name = Some(name));
        Ok(self)
    }

    pub fn set_author_url(&mut self, url: impl Into<SmolStr>) -> Result<&mut Self, Error> {
        let url = url.into();
        validate::check_url("author.url", &url)?;

        self.update_author(|author| author.url = Some(url));
        Ok(self)
    }

    pub fn set_author_icon_url(&mut self, icon_url: impl Into<SmolStr>) -> Result<&mut Self, Error> {
        let icon_url = icon_url.into();
        validate::check_url("author.icon_url", &icon_url)?;

        self.update_author(|author| author.icon_url = Some(icon_url));
        Ok(self)
    }

    /// Sets the footer text and, if given, its icon. Both are validated before either is written.
    pub fn set_footer(&mut self, text: impl Into<SmolStr>, icon_url: Option<&str>) -> Result<&mut Self, Error> {
        let text = text.into();
        validate::check_length("footer.text", &text, self.limits.footer_text)?;

        if let Some(icon_url) = icon_url {
            validate::check_url("footer.icon_url", icon_url)?;
        }

        self.update_footer(|footer| {
            footer.text = Some(text);

            if let Some(icon_url) = icon_url {
                footer.icon_url = Some(icon_url.into());
            }
        });

        Ok(self)
    }

    pub fn set_footer_text(&mut self, text: impl Into<SmolStr>) -> Result<&mut Self, Error> {
        let text = text.into();
        validate::check_length("footer.text", &text, self.limits.footer_text)?;

        self.update_footer(|footer| footer.text = Some(text));
        Ok(self)
    }

    pub fn set_footer_icon_url(&mut self, icon_url: impl Into<SmolStr>) -> Result<&mut Self, Error> {
        let icon_url = icon_url.into();
        validate::check_url("footer.icon_url", &icon_url)?;

        self.update_footer(|footer| footer.icon_url = Some(icon_url));
        Ok(self)
    }

    /// Accepts `YYYY-MM-DDTHH:MM:SSZ` or `YYYY-MM-DDTHH:MM:SS.sssZ`, always storing the latter.
    pub fn set_timestamp(&mut self, timestamp: &str) -> Result<&mut Self, Error> {
        self.embed.timestamp = Some(validate::normalize_timestamp(timestamp)?);
        Ok(self)
    }

    pub fn set_timestamp_from_datetime(&mut self, timestamp: Timestamp) -> Result<&mut Self, Error> {
        self.set_timestamp(&timestamp.format())
    }

    pub fn set_timestamp_from_unix_timestamp(&mut self, seconds: i64) -> Result<&mut Self, Error> {
        if !(MIN_UNIX_TIMESTAMP..=MAX_UNIX_TIMESTAMP).contains(&seconds) {
            return Err(Error::ConversionError(
                format!("Unix timestamp {seconds} is outside of years 1-9999").into(),
            ));
        }

        self.set_timestamp_from_datetime(Timestamp::UNIX_EPOCH + Duration::seconds(seconds))
    }

    pub fn set_timestamp_from_unix_timestamp_millis(&mut self, millis: i64) -> Result<&mut Self, Error> {
        if !(MIN_UNIX_TIMESTAMP..=MAX_UNIX_TIMESTAMP).contains(&millis.div_euclid(1000)) {
            return Err(Error::ConversionError(
                format!("Unix timestamp {millis}ms is outside of years 1-9999").into(),
            ));
        }

        self.set_timestamp_from_datetime(Timestamp::UNIX_EPOCH + Duration::milliseconds(millis))
    }

    /// Appends a field. Fields are never replaced or removed.
    pub fn add_field(
        &mut self,
        name: impl Into<SmolStr>,
        value: impl Into<SmolStr>,
        inline: bool,
    ) -> Result<&mut Self, Error> {
        let field = EmbedField {
            name: name.into(),
            value: value.into(),
            inline,
        };

        validate::check_field(&self.limits, &field)?;

        self.embed.fields.push(field);
        Ok(self)
    }

    /// Same as [`add_field`](Self::add_field), it appends rather than replaces.
    #[inline]
    pub fn set_field(
        &mut self,
        name: impl Into<SmolStr>,
        value: impl Into<SmolStr>,
        inline: bool,
    ) -> Result<&mut Self, Error> {
        self.add_field(name, value, inline)
    }

    /// Appends every field, or none of them if any fails validation.
    pub fn add_fields(&mut self, fields: impl IntoIterator<Item = EmbedField>) -> Result<&mut Self, Error> {
        let fields: Vec<EmbedField> = fields.into_iter().collect();

        for (index, field) in fields.iter().enumerate() {
            if let Err(reason) = validate::check_field(&self.limits, field) {
                return Err(ValidationError::InvalidField {
                    index,
                    reason: Box::new(reason),
                }
                .into());
            }
        }

        self.embed.fields.extend(fields);
        Ok(self)
    }

    #[inline]
    pub fn set_fields(&mut self, fields: impl IntoIterator<Item = EmbedField>) -> Result<&mut Self, Error> {
        self.add_fields(fields)
    }

    pub fn set_image(&mut self, url: impl Into<SmolStr>) -> Result<&mut Self, Error> {
        let url = url.into();
        validate::check_url("image.url", &url)?;

        self.embed.image = Some(EmbedMedia::with_url(url));
        Ok(self)
    }

    #[inline]
    pub fn add_image(&mut self, url: impl Into<SmolStr>) -> Result<&mut Self, Error> {
        self.set_image(url)
    }

    pub fn set_thumbnail(&mut self, url: impl Into<SmolStr>) -> Result<&mut Self, Error> {
        let url = url.into();
        validate::check_url("thumbnail.url", &url)?;

        self.embed.thumbnail = Some(EmbedMedia::with_url(url));
        Ok(self)
    }

    #[inline]
    pub fn add_thumbnail(&mut self, url: impl Into<SmolStr>) -> Result<&mut Self, Error> {
        self.set_thumbnail(url)
    }

    /// Checks the shape and JSON types of the current document
    pub fn assert_is_valid_embed_data(&self) -> Result<(), Error> {
        schema::check_embed(&self.serialize()?, Strictness::Lenient)?;
        Ok(())
    }

    /// Checks the shape of the current document, every URL, the timestamp and all lengths
    pub fn assert_is_strict_valid_embed_data(&self) -> Result<(), Error> {
        schema::check_embed(&self.serialize()?, Strictness::Strict)?;
        Ok(())
    }

    pub fn serialize(&self) -> Result<Value, Error> {
        trace!("Serializing embed");

        Ok(serde_json::to_value(&self.embed)?)
    }

    pub fn serialize_as_json(&self) -> Result<String, Error> {
        Ok(serde_json::to_string(&self.embed)?)
    }

    #[inline]
    pub fn to_json(&self) -> Result<String, Error> {
        self.serialize_as_json()
    }
}

impl fmt::Display for EmbedBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.serialize_as_json() {
            Ok(json) => f.write_str(&json),
            Err(_) => Err(fmt::Error),
        }
    }
}

/// Adopts a raw embed mapping under the platform limits, see [`EmbedBuilder::from_value`].
impl TryFrom<Value> for EmbedBuilder {
    type Error = Error;

    #[inline]
    fn try_from(value: Value) -> Result<Self, Self::Error> {
        EmbedBuilder::from_value(value, Limits::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_title_boundary() {
        assert!(EmbedBuilder::new().set_title("x".repeat(256)).is_ok());

        let mut embed = EmbedBuilder::new();
        let err = embed.set_title("x".repeat(300)).unwrap_err();

        assert_eq!(
            err.validation(),
            Some(&ValidationError::TooLong { field: "title", max: 256, len: 300 })
        );
        assert!(embed.document().title.is_none());
    }

    #[test]
    fn test_rejected_value_leaves_previous() {
        let mut embed = EmbedBuilder::new();
        embed.set_description("first").unwrap();

        assert!(embed.set_description("y".repeat(4097)).is_err());
        assert_eq!(embed.document().description.as_deref(), Some("first"));

        assert!(embed.set_description("y".repeat(4096)).is_ok());
        assert_eq!(embed.document().description.as_deref().map(str::len), Some(4096));
    }

    #[test]
    fn test_multibyte_title() {
        let title = "é".repeat(256);

        let mut embed = EmbedBuilder::new();
        embed.set_title(title.as_str()).unwrap();

        assert_eq!(embed.document().title.as_deref(), Some(title.as_str()));
    }

    #[test]
    fn test_utf8_setters() {
        let mut embed = EmbedBuilder::new();

        embed.set_title_utf8("héllo".as_bytes()).unwrap();
        assert_eq!(embed.document().title.as_deref(), Some("héllo"));

        let err = embed.set_description_utf8(&[0xC3, 0x28]).unwrap_err();
        assert_eq!(
            err.validation(),
            Some(&ValidationError::InvalidEncoding { field: "description" })
        );
        assert!(embed.document().description.is_none());
    }

    #[test]
    fn test_urls() {
        let mut embed = EmbedBuilder::new();

        embed.set_url("https://example.com").unwrap();
        embed.set_body_url("http://example.org").unwrap();
        assert_eq!(embed.document().url.as_deref(), Some("http://example.org"));

        assert!(embed.set_url("example.com").is_err());
        assert!(embed.set_image("data:image/png;base64,AAAA").is_err());
        assert!(embed.set_thumbnail("/relative.png").is_err());
        assert_eq!(embed.document().url.as_deref(), Some("http://example.org"));
    }

    #[test]
    fn test_colors() {
        let mut embed = EmbedBuilder::new();

        embed.set_color(0x00FF00);
        assert_eq!(embed.document().color, Some(0x00FF00));

        embed.set_color_from_color3(Color3::new(1.0, 0.0, 0.0)).unwrap();
        assert_eq!(embed.document().color, Some(0xFF0000));

        embed.set_color_from_css("#123456").unwrap();
        assert_eq!(embed.document().color, Some(0x123456));

        let err = embed.set_color_from_color3(Color3::new(f32::NAN, 0.0, 0.0)).unwrap_err();
        assert!(matches!(err, Error::ConversionError(_)));

        let err = embed.set_color_from_css("bluish").unwrap_err();
        assert!(matches!(err, Error::ConversionError(_)));

        assert_eq!(embed.document().color, Some(0x123456));
    }

    #[test]
    fn test_author_copy_on_write() {
        let mut embed = EmbedBuilder::new();
        embed.set_author_url("https://example.com/me").unwrap();

        let before = embed.author().unwrap();

        embed.set_author_name("me").unwrap();
        embed.set_author_url("https://example.com/other").unwrap();

        assert_eq!(before.url.as_deref(), Some("https://example.com/me"));
        assert!(before.name.is_none());

        let current = embed.author().unwrap();
        assert_eq!(current.name.as_deref(), Some("me"));
        assert_eq!(current.url.as_deref(), Some("https://example.com/other"));
    }

    #[test]
    fn test_set_author_composite() {
        let mut embed = EmbedBuilder::new();

        embed.set_author("me", None, Some("https://example.com/icon.png")).unwrap();

        let author = embed.author().unwrap();
        assert_eq!(author.name.as_deref(), Some("me"));
        assert!(author.url.is_none());
        assert_eq!(author.icon_url.as_deref(), Some("https://example.com/icon.png"));

        // a bad icon rejects the whole call
        let err = embed.set_author("you", Some("https://example.com"), Some("icon.png")).unwrap_err();
        assert_eq!(
            err.validation(),
            Some(&ValidationError::InvalidUrl { field: "author.icon_url" })
        );
        assert!(Arc::ptr_eq(&author, &embed.author().unwrap()));

        assert!(embed.set_author_name("n".repeat(257)).is_err());
    }

    #[test]
    fn test_footer_copy_on_write() {
        let mut embed = EmbedBuilder::new();
        embed.set_footer("v1", None).unwrap();

        let before = embed.footer().unwrap();

        embed.set_footer_icon_url("https://example.com/f.png").unwrap();
        embed.set_footer_text("v2").unwrap();

        assert_eq!(before.text.as_deref(), Some("v1"));
        assert!(before.icon_url.is_none());

        let current = embed.footer().unwrap();
        assert_eq!(current.text.as_deref(), Some("v2"));
        assert_eq!(current.icon_url.as_deref(), Some("https://example.com/f.png"));

        assert!(embed.set_footer("t".repeat(2049), None).is_err());
        assert!(embed.set_footer("t".repeat(2048), None).is_ok());
    }

    #[test]
    fn test_timestamps() {
        let mut embed = EmbedBuilder::new();

        embed.set_timestamp("2023-07-25T11:12:30Z").unwrap();
        assert_eq!(embed.document().timestamp.as_deref(), Some("2023-07-25T11:12:30.000Z"));

        embed.set_timestamp("2023-07-25T11:12:30.500Z").unwrap();
        assert_eq!(embed.document().timestamp.as_deref(), Some("2023-07-25T11:12:30.500Z"));

        let err = embed.set_timestamp("25/07/2023").unwrap_err();
        assert!(matches!(err.validation(), Some(ValidationError::InvalidTimestamp(_))));
        assert_eq!(embed.document().timestamp.as_deref(), Some("2023-07-25T11:12:30.500Z"));
    }

    #[test]
    fn test_timestamp_conversions() {
        let mut embed = EmbedBuilder::new();

        embed.set_timestamp_from_unix_timestamp(1_690_000_000).unwrap();
        assert_eq!(embed.document().timestamp.as_deref(), Some("2023-07-22T04:26:40.000Z"));

        embed.set_timestamp_from_unix_timestamp_millis(1_690_000_000_123).unwrap();
        assert_eq!(embed.document().timestamp.as_deref(), Some("2023-07-22T04:26:40.123Z"));

        embed.set_timestamp_from_datetime(Timestamp::UNIX_EPOCH).unwrap();
        assert_eq!(embed.document().timestamp.as_deref(), Some("1970-01-01T00:00:00.000Z"));

        let err = embed.set_timestamp_from_unix_timestamp(i64::MAX).unwrap_err();
        assert!(matches!(err, Error::ConversionError(_)));

        let err = embed.set_timestamp_from_unix_timestamp_millis(i64::MIN).unwrap_err();
        assert!(matches!(err, Error::ConversionError(_)));
    }

    #[test]
    fn test_fields_append_in_order() {
        let mut embed = EmbedBuilder::new();

        embed
            .add_field("a", "1", false)
            .unwrap()
            .set_field("a", "2", true)
            .unwrap()
            .add_fields([EmbedField::new("b", "3"), EmbedField::inline("c", "4")])
            .unwrap()
            .set_fields(vec![EmbedField::new("d", "5")])
            .unwrap();

        let names: Vec<&str> = embed.document().fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["a", "a", "b", "c", "d"]);
        assert!(embed.document().fields[1].inline);
    }

    #[test]
    fn test_add_fields_is_all_or_nothing() {
        let mut embed = EmbedBuilder::new();
        embed.add_field("kept", "yes", false).unwrap();

        let err = embed
            .add_fields([
                EmbedField::new("ok", "ok"),
                EmbedField::new("bad", "v".repeat(1025)),
                EmbedField::new("n".repeat(257), "also bad"),
            ])
            .unwrap_err();

        assert!(matches!(
            err.validation(),
            Some(ValidationError::InvalidField { index: 1, .. })
        ));
        assert_eq!(embed.document().fields.len(), 1);

        assert!(embed.add_field("n".repeat(257), "v", false).is_err());
        assert_eq!(embed.document().fields.len(), 1);
    }

    #[test]
    fn test_media_last_write_wins() {
        let mut embed = EmbedBuilder::new();

        embed.set_image("https://example.com/1.png").unwrap();
        embed.add_image("https://example.com/2.png").unwrap();
        embed.set_thumbnail("https://example.com/t1.png").unwrap();
        embed.add_thumbnail("https://example.com/t2.png").unwrap();

        assert_eq!(embed.serialize().unwrap(), json!({
            "image": { "url": "https://example.com/2.png" },
            "thumbnail": { "url": "https://example.com/t2.png" }
        }));
    }

    #[test]
    fn test_assertions() {
        let mut embed = EmbedBuilder::new();
        embed
            .set_title("title")
            .unwrap()
            .set_timestamp("2023-07-25T11:12:30Z")
            .unwrap()
            .set_author("me", Some("https://example.com"), None)
            .unwrap()
            .add_field("a", "b", false)
            .unwrap();

        assert!(embed.assert_is_valid_embed_data().is_ok());
        assert!(embed.assert_is_strict_valid_embed_data().is_ok());

        // a colour past 0xFFFFFF is representable but not strictly valid
        embed.set_color(0x1000000);
        assert!(embed.assert_is_valid_embed_data().is_ok());
        assert!(matches!(
            embed.assert_is_strict_valid_embed_data().unwrap_err().validation(),
            Some(ValidationError::Schema(_))
        ));
    }

    #[test]
    fn test_serialize_is_repeatable() {
        let mut embed = EmbedBuilder::new();
        embed.set_title("t").unwrap().set_color(5).add_field("a", "b", true).unwrap();

        let first = embed.serialize_as_json().unwrap();
        let second = embed.to_json().unwrap();

        assert_eq!(first, second);
        assert_eq!(first, embed.to_string());
        assert_eq!(first, r#"{"title":"t","color":5,"fields":[{"name":"a","value":"b","inline":true}]}"#);

        embed.set_description("d").unwrap();
        assert_ne!(embed.to_json().unwrap(), first);
    }

    #[test]
    fn test_is() {
        let embed = EmbedBuilder::new();

        assert!(EmbedBuilder::is(&embed));
        assert!(!EmbedBuilder::is(&json!({})));
        assert!(!EmbedBuilder::is(&"embed"));
    }

    #[test]
    fn test_try_from_value() {
        let embed = EmbedBuilder::try_from(json!({
            "title": "parsed",
            "timestamp": "2023-07-25T11:12:30Z",
            "footer": { "text": "f" }
        }))
        .unwrap();

        assert_eq!(embed.document().title.as_deref(), Some("parsed"));
        assert_eq!(embed.document().timestamp.as_deref(), Some("2023-07-25T11:12:30.000Z"));
        assert_eq!(embed.footer().unwrap().text.as_deref(), Some("f"));

        let err = EmbedBuilder::try_from(json!(["title"])).unwrap_err();
        assert!(matches!(err, Error::TypeError(_)));

        let err = EmbedBuilder::try_from(json!({ "title": "x".repeat(257) })).unwrap_err();
        assert!(matches!(err.validation(), Some(ValidationError::Schema(_))));
    }

    #[test]
    fn test_with_limits_rejects_raised_limits() {
        let err = EmbedBuilder::with_limits(Limits {
            title: 1000,
            ..Limits::default()
        })
        .unwrap_err();

        assert!(matches!(
            err,
            ConfigError::LimitTooLarge { name: "title", value: 1000, max: 256 }
        ));

        let mut embed = EmbedBuilder::with_limits(Limits {
            title: 5,
            ..Limits::default()
        })
        .unwrap();

        assert!(embed.set_title("12345").is_ok());
        assert!(embed.set_title("123456").is_err());
    }

    #[test]
    fn test_from_config() {
        let config = Config::from_toml_str("[limits]\nfooter_text = 3").unwrap();
        let mut embed = EmbedBuilder::from_config(&config);

        assert!(embed.set_footer_text("abc").is_ok());
        assert!(embed.set_footer("abcd", None).is_err());
        assert_eq!(embed.footer().unwrap().text.as_deref(), Some("abc"));
    }

    #[test]
    fn test_from_value_applies_limits() {
        let limits = Limits {
            title: 10,
            field_value: 3,
            ..Limits::default()
        };

        let err = EmbedBuilder::from_value(json!({ "title": "x".repeat(200) }), limits).unwrap_err();
        assert_eq!(
            err.validation(),
            Some(&ValidationError::TooLong { field: "title", max: 10, len: 200 })
        );

        let err = EmbedBuilder::from_value(
            json!({ "fields": [{ "name": "a", "value": "abc" }, { "name": "b", "value": "abcd" }] }),
            limits,
        )
        .unwrap_err();
        assert!(matches!(
            err.validation(),
            Some(ValidationError::InvalidField { index: 1, .. })
        ));

        // the adopted builder keeps the limits for later setters
        let mut embed = EmbedBuilder::from_value(json!({ "title": "short" }), limits).unwrap();
        assert!(embed.set_title("x".repeat(11)).is_err());
        assert_eq!(embed.document().title.as_deref(), Some("short"));

        let err = EmbedBuilder::from_value(
            json!({}),
            Limits {
                content: 4000,
                ..Limits::default()
            },
        )
        .unwrap_err();
        assert!(matches!(err, Error::ConfigError(ConfigError::LimitTooLarge { .. })));
    }
}
