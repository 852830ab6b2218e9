//! Message templates and the per-locale catalog
//!
//! - [`Template`]: a phrase with explicit label-prefix / limit-suffix flags
//! - [`MessageCatalog`]: `(locale, key) -> Template` tables with fallback
//! - [`Locale`]: locale tag
//! - [`keys`]: template keys used by the built-in checkers

mod builtin;
mod catalog;
mod locale;
mod template;

pub use catalog::MessageCatalog;
pub use locale::Locale;
pub use template::{FIELD_TOKEN, LIMIT_TOKEN, Template};

/// Template keys.
///
/// Checker keys equal the checker name. Keys starting with `_` belong to the
/// engine's own error kinds.
pub mod keys {
    pub const REQUIRED: &str = "required";
    pub const MIN: &str = "min";
    pub const MAX: &str = "max";
    pub const MIN_LEN: &str = "minlen";
    pub const MAX_LEN: &str = "maxlen";
    pub const ALPHA: &str = "alpha";
    pub const ALPHANUMERIC: &str = "alphanumeric";
    pub const ALPHA_DASH: &str = "alphadash";
    pub const USERNAME: &str = "username";
    pub const FIRST_CHAR_ALPHA: &str = "firstCharAlpha";
    pub const LAST_UNDERLINE: &str = "lastUnderline";
    pub const EMAIL: &str = "email";
    pub const IPV4: &str = "ipv4";
    pub const MOBILE: &str = "mobile";
    pub const TEL: &str = "tel";
    pub const PHONE: &str = "phone";
    pub const ID_CARD: &str = "idcard";
    pub const EQUAL: &str = "equal";
    pub const LIST: &str = "list";

    /// Dispatch found no checker under the rule's name.
    pub const CHECKER_NOT_FOUND: &str = "_checkerNotFound";
    /// Fallback for keys missing from a table. Always present.
    pub const UNKNOWN: &str = "_unknown";
    /// Rule parameters are missing or malformed.
    pub const PARAM_ERROR: &str = "_paramError";
    /// The checker cannot handle the value's runtime type.
    pub const VALUE_TYPE_ERROR: &str = "_valueTypeError";
    /// A cross-field rule names a field the record does not have.
    pub const FIELD_NOT_FOUND: &str = "_fieldNotFound";
    /// Error text returned by a record-level check.
    pub const RECORD: &str = "_record";
}
