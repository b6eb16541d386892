use crate::config::{MAX_TICK_MS, MIN_TICK_MS};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    ReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write config file {path}: {source}")]
    WriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("failed to serialize config: {0}")]
    SerializeError(#[from] toml::ser::Error),

    #[error("could not determine a config directory")]
    NoConfigDir,

    #[error("invalid value for {name}: {value:?}")]
    InvalidEnvVar { name: &'static str, value: String },

    #[error("tick_ms must be between {min} and {max}, got {0}", min = MIN_TICK_MS, max = MAX_TICK_MS)]
    InvalidTickInterval(u64),
}

impl ConfigError {
    /// Variant name, for test assertions on the error class.
    pub fn kind(&self) -> &'static str {
        match self {
            ConfigError::ReadError { .. } => "ReadError",
            ConfigError::WriteError { .. } => "WriteError",
            ConfigError::ParseError(_) => "ParseError",
            ConfigError::SerializeError(_) => "SerializeError",
            ConfigError::NoConfigDir => "NoConfigDir",
            ConfigError::InvalidEnvVar { .. } => "InvalidEnvVar",
            ConfigError::InvalidTickInterval(_) => "InvalidTickInterval",
        }
    }
}
