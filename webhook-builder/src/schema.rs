//! Whole-document structural checks, run on demand rather than at set time.

use std::sync::LazyLock;

use jsonschema::{Draft, JSONSchema};
use serde_json::Value;

use crate::ValidationError;

const LENIENT_EMBED_SCHEMA: &str = include_str!("../schemas/embed.lenient.json");
const STRICT_EMBED_SCHEMA: &str = include_str!("../schemas/embed.strict.json");

static LENIENT: LazyLock<JSONSchema> = LazyLock::new(|| compile(LENIENT_EMBED_SCHEMA));
static STRICT: LazyLock<JSONSchema> = LazyLock::new(|| compile(STRICT_EMBED_SCHEMA));

fn compile(schema: &str) -> JSONSchema {
    let schema: Value = serde_json::from_str(schema).expect("bundled embed schema is not valid JSON");

    JSONSchema::options()
        .with_draft(Draft::Draft7)
        .compile(&schema)
        .expect("bundled embed schema failed to compile")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strictness {
    /// Shapes and JSON types only
    Lenient,

    /// Additionally checks URL schemes, timestamp shape and maximum lengths
    Strict,
}

pub fn check_embed(embed: &Value, strictness: Strictness) -> Result<(), ValidationError> {
    let schema = match strictness {
        Strictness::Lenient => &*LENIENT,
        Strictness::Strict => &*STRICT,
    };

    if let Err(errors) = schema.validate(embed) {
        let messages: Vec<String> = errors.map(|error| format!("{} at {}", error, error.instance_path)).collect();

        debug!(?strictness, "Embed failed schema check: {messages:?}");

        return Err(ValidationError::Schema(messages.join(", ")));
    }

    Ok(())
}

/// JSON type name, for error messages
pub(crate) fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
