use std::{any::Any, fmt};

use sdk::{MessageDocument, MessageFlags, SmolStr};
use serde_json::Value;

use crate::{
    config::{Config, ConfigError, Limits},
    embed::EmbedBuilder,
    validate, Error,
};

/// Builds the top-level body of a webhook execution request.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct ContentBuilder {
    message: MessageDocument,
    limits: Limits,
}

impl ContentBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fails if any limit is above its platform maximum.
    pub fn with_limits(limits: Limits) -> Result<Self, ConfigError> {
        limits.check()?;

        Ok(ContentBuilder {
            message: MessageDocument::default(),
            limits,
        })
    }

    pub fn from_config(config: &Config) -> Self {
        ContentBuilder {
            message: MessageDocument::default(),
            limits: config.limits(),
        }
    }

    /// Test if `value` was produced by this builder type
    pub fn is(value: &dyn Any) -> bool {
        value.is::<ContentBuilder>()
    }

    #[inline]
    pub fn document(&self) -> &MessageDocument {
        &self.message
    }

    #[inline]
    pub fn into_document(self) -> MessageDocument {
        self.message
    }

    #[inline]
    pub fn flags(&self) -> MessageFlags {
        self.message.flags
    }

    pub fn set_username(&mut self, username: impl Into<SmolStr>) -> Result<&mut Self, Error> {
        let username = username.into();
        validate::check_length("username", &username, self.limits.username)?;

        self.message.username = Some(username);
        Ok(self)
    }

    pub fn set_avatar_url(&mut self, avatar_url: impl Into<SmolStr>) -> Result<&mut Self, Error> {
        let avatar_url = avatar_url.into();
        validate::check_url("avatar_url", &avatar_url)?;

        self.message.avatar_url = Some(avatar_url);
        Ok(self)
    }

    pub fn set_content(&mut self, content: impl Into<SmolStr>) -> Result<&mut Self, Error> {
        let content = content.into();
        validate::check_length("content", &content, self.limits.content)?;

        self.message.content = Some(content);
        Ok(self)
    }

    pub fn set_thread(&mut self, thread_name: impl Into<SmolStr>) -> Result<&mut Self, Error> {
        let thread_name = thread_name.into();
        validate::check_length("thread_name", &thread_name, self.limits.thread_name)?;

        self.message.thread_name = Some(thread_name);
        Ok(self)
    }

    /// Adding a flag that is already set only logs a warning.
    pub fn add_flag(&mut self, flag: MessageFlags) -> &mut Self {
        if flag.is_empty() {
            return self;
        }

        if self.message.flags.contains(flag) {
            warn!(?flag, "Message flag is already set, ignoring");
            return self;
        }

        self.message.flags.insert(flag);
        self
    }

    /// Appends a snapshot of the embed as it is now. Later changes to `embed` are not reflected.
    pub fn add_embed(&mut self, embed: &EmbedBuilder) -> &mut Self {
        self.message.embeds.push(embed.document().clone());
        self
    }

    /// Appends a raw embed mapping after checking it against this builder's limits,
    /// see [`EmbedBuilder::from_value`].
    pub fn add_embed_json(&mut self, embed: Value) -> Result<&mut Self, Error> {
        let embed = EmbedBuilder::from_value(embed, self.limits)?;

        self.message.embeds.push(embed.into_document());
        Ok(self)
    }

    /// Accepts either an [`EmbedBuilder`] or a raw JSON [`Value`], anything else is a type error.
    pub fn add_any_embed(&mut self, embed: &dyn Any) -> Result<&mut Self, Error> {
        if let Some(embed) = embed.downcast_ref::<EmbedBuilder>() {
            return Ok(self.add_embed(embed));
        }

        match embed.downcast_ref::<Value>() {
            Some(value) => self.add_embed_json(value.clone()),
            None => Err(Error::TypeError("expected an EmbedBuilder".into())),
        }
    }

    /// Appends a new embed holding only `image` and a body `url`.
    pub fn add_image(&mut self, image: impl Into<SmolStr>, body_url: impl Into<SmolStr>) -> Result<&mut Self, Error> {
        let mut embed = EmbedBuilder::new();
        embed.set_image(image)?.set_url(body_url)?;

        Ok(self.add_embed(&embed))
    }

    pub fn serialize(&self) -> Result<Value, Error> {
        trace!(embeds = self.message.embeds.len(), "Serializing message");

        Ok(serde_json::to_value(&self.message)?)
    }

    pub fn serialize_as_json(&self) -> Result<String, Error> {
        Ok(serde_json::to_string(&self.message)?)
    }

    #[inline]
    pub fn to_json(&self) -> Result<String, Error> {
        self.serialize_as_json()
    }
}

impl fmt::Display for ContentBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.serialize_as_json() {
            Ok(json) => f.write_str(&json),
            Err(_) => Err(fmt::Error),
        }
    }
}
