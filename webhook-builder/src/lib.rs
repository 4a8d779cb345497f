//! Fluent, validating builders for webhook message payloads.
//!
//! Both builders check every value at the call that introduces it and serialize to the JSON body of
//! a webhook execution request. Sending the request is left to the caller.

#[macro_use]
extern crate serde;

#[macro_use]
extern crate tracing as log;

pub mod color;
pub mod config;
pub mod content;
pub mod embed;
pub mod error;
pub mod markup;
pub mod schema;
pub mod validate;

pub use color::Color3;
pub use config::{Config, ConfigError, Limits};
pub use content::ContentBuilder;
pub use embed::EmbedBuilder;
pub use error::{Error, ValidationError};
pub use markup::{
    create_timestamp_for_datetime, create_timestamp_for_now, create_timestamp_for_unix_timestamp, TimestampStyle,
};

pub use sdk;
pub use sdk::{EmbedAuthor, EmbedDocument, EmbedField, EmbedFooter, EmbedMedia, MessageDocument, MessageFlags};
