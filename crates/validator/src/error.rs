//! Host-facing error types
//!
//! Validation outcomes are data ([`FieldError`](crate::context::FieldError)),
//! never `Err`. The types here cover the operations that can genuinely fail:
//! loading message bundles and configuration.

use thiserror::Error;

/// Failure to load a message bundle into the catalog.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CatalogError {
    /// The JSON bundle is malformed or is not an object of strings.
    #[error("invalid JSON message bundle: {0}")]
    Json(#[from] serde_json::Error),

    /// The TOML bundle is malformed or is not a table of strings.
    #[cfg(feature = "toml")]
    #[error("invalid TOML message bundle: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Failure to load a [`ValidatorConfig`](crate::config::ValidatorConfig).
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The file extension names no supported format.
    #[error("unsupported config format: {0}")]
    UnsupportedFormat(String),

    #[error("invalid JSON config: {0}")]
    Json(#[from] serde_json::Error),

    #[cfg(feature = "toml")]
    #[error("invalid TOML config: {0}")]
    Toml(#[from] toml::de::Error),
}
