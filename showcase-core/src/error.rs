use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config from {origin}")]
    Parse {
        origin: String,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid duration '{value}' for {key}")]
    InvalidDuration {
        key: String,
        value: String,
        #[source]
        source: humantime::DurationError,
    },
    #[error("invalid boolean '{value}' for {key}")]
    InvalidBool { key: String, value: String },
    #[error("slider interval must be greater than zero")]
    ZeroInterval,
    #[error("touch threshold must be a finite, non-negative pixel count")]
    InvalidTouchThreshold,
    #[error("slide ids must be unique, {id} appears more than once")]
    DuplicateSlideId { id: u32 },
    #[error(transparent)]
    EnvFile(#[from] dotenvy::Error),
}

#[derive(Debug, Error)]
pub enum CatalogLoadError {
    #[error("failed to read catalog items from {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse catalog items from {origin}")]
    Parse {
        origin: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("catalog item {index} ('{name}') has an empty category")]
    EmptyCategory { index: usize, name: String },
}

pub type Result<T> = std::result::Result<T, ConfigError>;
