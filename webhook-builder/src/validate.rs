//! Set-time predicates shared by the builders.
//!
//! Lengths are counted in Unicode scalar values, never bytes.

use std::sync::LazyLock;

use regex::Regex;
use sdk::{EmbedDocument, EmbedField, SmolStr};

use crate::{config::Limits, ValidationError};

static URL_PREFIX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^https?://").unwrap());

static TIMESTAMP_SECONDS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}T[0-9]{2}:[0-9]{2}:[0-9]{2}Z$").unwrap());

static TIMESTAMP_MILLIS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}T[0-9]{2}:[0-9]{2}:[0-9]{2}\.[0-9]{3}Z$").unwrap());

pub fn check_length(field: &'static str, text: &str, max: usize) -> Result<(), ValidationError> {
    let len = text.chars().count();

    if len > max {
        debug!(field, len, max, "Rejected text exceeding length limit");

        return Err(ValidationError::TooLong { field, max, len });
    }

    Ok(())
}

/// Decode `bytes` as UTF-8 and check its length.
pub fn check_text_bytes<'a>(field: &'static str, bytes: &'a [u8], max: usize) -> Result<&'a str, ValidationError> {
    let Ok(text) = core::str::from_utf8(bytes) else {
        debug!(field, "Rejected malformed UTF-8");

        return Err(ValidationError::InvalidEncoding { field });
    };

    check_length(field, text, max)?;

    Ok(text)
}

#[inline]
pub fn is_url(value: &str) -> bool {
    URL_PREFIX.is_match(value)
}

pub fn check_url(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if !is_url(value) {
        debug!(field, value, "Rejected URL without http(s) scheme");

        return Err(ValidationError::InvalidUrl { field });
    }

    Ok(())
}

/// Either the whole-second or the millisecond ISO-8601 shape
pub fn is_timestamp(value: &str) -> bool {
    TIMESTAMP_MILLIS.is_match(value) || TIMESTAMP_SECONDS.is_match(value)
}

/// Rewrites `YYYY-MM-DDTHH:MM:SSZ` into `YYYY-MM-DDTHH:MM:SS.000Z`.
///
/// The result always has millisecond precision, anything else is rejected.
pub fn normalize_timestamp(value: &str) -> Result<SmolStr, ValidationError> {
    let normalized = match value.strip_suffix('Z') {
        Some(prefix) if TIMESTAMP_SECONDS.is_match(value) => SmolStr::from(format!("{prefix}.000Z")),
        _ => SmolStr::from(value),
    };

    if !TIMESTAMP_MILLIS.is_match(&normalized) {
        debug!(value, "Rejected malformed timestamp");

        return Err(ValidationError::InvalidTimestamp(SmolStr::from(value)));
    }

    Ok(normalized)
}

pub fn check_field(limits: &Limits, field: &EmbedField) -> Result<(), ValidationError> {
    check_length("field.name", &field.name, limits.field_name)?;
    check_length("field.value", &field.value, limits.field_value)
}

/// Checks every text length of an already built document, e.g. one adopted from raw JSON.
pub fn check_embed_lengths(limits: &Limits, embed: &EmbedDocument) -> Result<(), ValidationError> {
    if let Some(ref title) = embed.title {
        check_length("title", title, limits.title)?;
    }

    if let Some(ref description) = embed.description {
        check_length("description", description, limits.description)?;
    }

    if let Some(name) = embed.author.as_ref().and_then(|author| author.name.as_ref()) {
        check_length("author.name", name, limits.author_name)?;
    }

    if let Some(text) = embed.footer.as_ref().and_then(|footer| footer.text.as_ref()) {
        check_length("footer.text", text, limits.footer_text)?;
    }

    for (index, field) in embed.fields.iter().enumerate() {
        if let Err(reason) = check_field(limits, field) {
            return Err(ValidationError::InvalidField {
                index,
                reason: Box::new(reason),
            });
        }
    }

    Ok(())
}
