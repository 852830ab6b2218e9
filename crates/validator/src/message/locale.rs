//! Locale identifiers

use std::borrow::{Borrow, Cow};
use std::fmt;

use serde::{Deserialize, Serialize};

/// A message locale tag such as `en` or `zh`.
///
/// Tags are compared verbatim; no BCP 47 canonicalization is applied.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Locale(Cow<'static, str>);

impl Locale {
    /// English, the built-in default.
    pub const EN: Self = Self(Cow::Borrowed("en"));
    /// Simplified Chinese.
    pub const ZH: Self = Self(Cow::Borrowed("zh"));

    /// Creates a locale from any tag.
    pub fn new(tag: impl Into<Cow<'static, str>>) -> Self {
        Self(tag.into())
    }

    /// The tag text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::EN
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for Locale {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&'static str> for Locale {
    fn from(tag: &'static str) -> Self {
        Self(Cow::Borrowed(tag))
    }
}

impl From<String> for Locale {
    fn from(tag: String) -> Self {
        Self(Cow::Owned(tag))
    }
}
