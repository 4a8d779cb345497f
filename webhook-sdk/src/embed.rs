use super::*;

/// A rich-content block attached to a webhook message.
///
/// Every field is optional and skipped when serializing if absent. The `author` and `footer`
/// sub-objects are shared behind an [`Arc`] and are replaced wholesale on update, never mutated
/// in place, so a handle obtained earlier keeps its original contents.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmbedDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<SmolStr>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<SmolStr>,

    /// URL the embed title links to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<SmolStr>,

    /// Accent color, as `0xRRGGBB`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<Arc<EmbedAuthor>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub footer: Option<Arc<EmbedFooter>>,

    #[serde(default, skip_serializing_if = "MaybeThinVec::is_empty")]
    pub fields: MaybeThinVec<EmbedField>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<EmbedMedia>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<EmbedMedia>,

    /// ISO-8601 timestamp with millisecond precision, e.g. `2023-07-25T11:12:30.000Z`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<SmolStr>,
}

impl EmbedDocument {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.url.is_none()
            && self.color.is_none()
            && EmbedAuthor::is_none(&self.author)
            && EmbedFooter::is_none(&self.footer)
            && self.fields.is_empty()
            && self.image.is_none()
            && self.thumbnail.is_none()
            && self.timestamp.is_none()
    }
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbedAuthor {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<SmolStr>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<SmolStr>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<SmolStr>,
}

impl EmbedAuthor {
    pub fn is_none(this: &Option<Arc<Self>>) -> bool {
        match this {
            Some(ref this) => this.name.is_none() && this.url.is_none() && this.icon_url.is_none(),
            None => true,
        }
    }
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbedFooter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<SmolStr>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<SmolStr>,
}

impl EmbedFooter {
    pub fn is_none(this: &Option<Arc<Self>>) -> bool {
        match this {
            Some(ref this) => this.text.is_none() && this.icon_url.is_none(),
            None => true,
        }
    }
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbedField {
    pub name: SmolStr,
    pub value: SmolStr,

    /// Display this field side-by-side with its neighbours
    #[serde(default, skip_serializing_if = "is_false")]
    pub inline: bool,
}

impl EmbedField {
    pub fn new(name: impl Into<SmolStr>, value: impl Into<SmolStr>) -> Self {
        EmbedField {
            name: name.into(),
            value: value.into(),
            inline: false,
        }
    }

    pub fn inline(name: impl Into<SmolStr>, value: impl Into<SmolStr>) -> Self {
        EmbedField {
            inline: true,
            ..EmbedField::new(name, value)
        }
    }
}

/// Image or thumbnail wrapper
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbedMedia {
    pub url: SmolStr,
}

impl EmbedMedia {
    #[inline]
    pub fn with_url(url: impl Into<SmolStr>) -> Self {
        EmbedMedia { url: url.into() }
    }
}
