//! Engine configuration

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::message::Locale;

/// Settings for a [`Validator`](crate::engine::Validator).
///
/// Every field has a default, so a config file only lists what it changes.
///
/// ```
/// use ruleval_validator::config::ValidatorConfig;
/// use ruleval_validator::message::Locale;
///
/// let config = ValidatorConfig::from_json(r#"{ "default_locale": "zh" }"#).unwrap();
/// assert_eq!(config.default_locale, Locale::ZH);
/// assert!(!config.zero_is_missing);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ValidatorConfig {
    /// Locale used when a call does not choose one.
    pub default_locale: Locale,

    /// Whether `required` also rejects numeric zero and `false`.
    ///
    /// Off by default: absence is modelled with `Option`, so `0` is a real
    /// value.
    pub zero_is_missing: bool,

    /// Upper bound on distinct rule strings kept parsed. `None` is unbounded.
    pub rule_cache_capacity: Option<usize>,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            default_locale: Locale::EN,
            zero_is_missing: false,
            rule_cache_capacity: None,
        }
    }
}

impl ValidatorConfig {
    /// Parses a JSON document.
    pub fn from_json(source: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(source)?)
    }

    /// Parses a TOML document.
    #[cfg(feature = "toml")]
    pub fn from_toml(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    /// Reads a config file, picking the format from its extension.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::from_json(&source),
            #[cfg(feature = "toml")]
            Some("toml") => Self::from_toml(&source),
            other => Err(ConfigError::UnsupportedFormat(
                other.unwrap_or_default().to_owned(),
            )),
        }
    }

    /// Sets the default locale.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_default_locale(mut self, locale: impl Into<Locale>) -> Self {
        self.default_locale = locale.into();
        self
    }

    /// Sets whether `required` treats zero values as missing.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_zero_is_missing(mut self, enabled: bool) -> Self {
        self.zero_is_missing = enabled;
        self
    }

    /// Bounds the rule cache.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_rule_cache_capacity(mut self, capacity: usize) -> Self {
        self.rule_cache_capacity = Some(capacity);
        self
    }
}
