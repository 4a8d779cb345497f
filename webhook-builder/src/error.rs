use sdk::SmolStr;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Validation Error: {0}")]
    ValidationError(#[from] ValidationError),

    #[error("Type Error: {0}")]
    TypeError(SmolStr),

    #[error("Conversion Error: {0}")]
    ConversionError(SmolStr),

    #[error("Value Error: {0}")]
    ValueError(SmolStr),

    #[error("JSON Error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Config Error: {0}")]
    ConfigError(#[from] crate::config::ConfigError),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{field} must be at most {max} characters, got {len}")]
    TooLong {
        field: &'static str,
        max: usize,
        len: usize,
    },

    #[error("{field} is not valid UTF-8")]
    InvalidEncoding { field: &'static str },

    #[error("{field} must start with http:// or https://")]
    InvalidUrl { field: &'static str },

    #[error("Invalid timestamp \"{0}\", expected YYYY-MM-DDTHH:MM:SS.sssZ")]
    InvalidTimestamp(SmolStr),

    #[error("Invalid field at index {index}: {reason}")]
    InvalidField {
        index: usize,
        reason: Box<ValidationError>,
    },

    #[error("Schema violation: {0}")]
    Schema(String),
}

impl Error {
    pub fn validation(&self) -> Option<&ValidationError> {
        match self {
            Error::ValidationError(ref err) => Some(err),
            _ => None,
        }
    }
}
