use std::{io, path::Path};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Limit {name} = {value} exceeds the platform maximum of {max}")]
    LimitTooLarge {
        name: &'static str,
        value: usize,
        max: usize,
    },

    #[error("Unable to read config file: {0}")]
    Io(#[from] io::Error),

    #[error("Unable to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Maximum lengths, in characters, applied by the builders at set time.
///
/// Defaults are the platform maximums. Limits may be lowered but never raised past them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize)]
#[serde(default)]
pub struct Limits {
    pub title: usize,
    pub description: usize,
    pub author_name: usize,
    pub footer_text: usize,
    pub field_name: usize,
    pub field_value: usize,
    pub username: usize,
    pub content: usize,
    pub thread_name: usize,
}

#[rustfmt::skip]
mod defaults {
    pub const fn title() -> usize { 256 }
    pub const fn description() -> usize { 4096 }
    pub const fn author_name() -> usize { 256 }
    pub const fn footer_text() -> usize { 2048 }
    pub const fn field_name() -> usize { 256 }
    pub const fn field_value() -> usize { 1024 }
    pub const fn username() -> usize { 80 }
    pub const fn content() -> usize { 2000 }
    pub const fn thread_name() -> usize { 100 }
}

impl Limits {
    pub const PLATFORM: Limits = Limits {
        title: defaults::title(),
        description: defaults::description(),
        author_name: defaults::author_name(),
        footer_text: defaults::footer_text(),
        field_name: defaults::field_name(),
        field_value: defaults::field_value(),
        username: defaults::username(),
        content: defaults::content(),
        thread_name: defaults::thread_name(),
    };

    fn entries(&self) -> [(&'static str, usize, usize); 9] {
        let max = Limits::PLATFORM;

        [
            ("title", self.title, max.title),
            ("description", self.description, max.description),
            ("author_name", self.author_name, max.author_name),
            ("footer_text", self.footer_text, max.footer_text),
            ("field_name", self.field_name, max.field_name),
            ("field_value", self.field_value, max.field_value),
            ("username", self.username, max.username),
            ("content", self.content, max.content),
            ("thread_name", self.thread_name, max.thread_name),
        ]
    }

    pub fn check(&self) -> Result<(), ConfigError> {
        for (name, value, max) in self.entries() {
            if value > max {
                return Err(ConfigError::LimitTooLarge { name, value, max });
            }
        }

        Ok(())
    }
}

impl Default for Limits {
    #[inline]
    fn default() -> Self {
        Limits::PLATFORM
    }
}

#[derive(Default, Debug, Clone, serde::Deserialize)]
pub struct ParsedConfig {
    #[serde(default)]
    pub limits: Limits,
}

#[derive(Default, Debug, Clone)]
pub struct Config {
    pub parsed: ParsedConfig,
}

impl ParsedConfig {
    pub fn build(self) -> Result<Config, ConfigError> {
        self.limits.check()?;

        Ok(Config { parsed: self })
    }
}

impl Config {
    pub fn from_toml_str(config_file: &str) -> Result<Config, ConfigError> {
        toml::de::from_str::<ParsedConfig>(config_file)?.build()
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
        Config::from_toml_str(&std::fs::read_to_string(path)?)
    }

    /// Loads the file named by `WEBHOOK_CONFIG_PATH` (default `./webhook.toml`),
    /// falling back to the platform limits if it does not exist.
    pub fn from_env() -> Result<Config, ConfigError> {
        let config_path = std::env::var("WEBHOOK_CONFIG_PATH").unwrap_or_else(|_| "./webhook.toml".to_owned());

        match std::fs::read_to_string(&config_path) {
            Ok(config_file) => Config::from_toml_str(&config_file),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(%config_path, "No config file found, using platform limits");

                Ok(Config::default())
            }
            Err(e) => Err(e.into()),
        }
    }

    #[inline]
    pub fn limits(&self) -> Limits {
        self.parsed.limits
    }
}
