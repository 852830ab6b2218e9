//! Message templates
//!
//! A template is a phrase plus two placement flags. By default the field
//! label is prepended and the limit value (if any) appended, so most
//! templates are plain suffix phrases such as `must not be empty`. Templates
//! that need the label or limit elsewhere use the `{field}` / `{limit}`
//! tokens and switch the implicit placement off.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Token replaced by the field label.
pub const FIELD_TOKEN: &str = "{field}";
/// Token replaced by the rendered limit value.
pub const LIMIT_TOKEN: &str = "{limit}";

const OPEN_MARKER: &str = "{{";
const CLOSE_MARKER: &str = "}}";

/// A message template with explicit placement flags.
///
/// # Examples
///
/// ```
/// use ruleval_validator::message::Template;
///
/// let min = Template::new("should be greater than");
/// assert_eq!(min.render("Score", Some("0"), " "), "Score should be greater than 0");
///
/// let missing = Template::new("field {limit} does not exist").without_label().without_limit();
/// assert_eq!(missing.render("Repeat", Some("Password"), " "), "field Password does not exist");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Template {
    text: String,
    suppress_label_prefix: bool,
    suppress_limit_suffix: bool,
}

impl Template {
    /// Creates a template that gets the label prepended and the limit appended.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            suppress_label_prefix: false,
            suppress_limit_suffix: false,
        }
    }

    /// Parses the marker notation used in bundles: a leading `{{` switches
    /// the label prefix off, a trailing `}}` switches the limit suffix off.
    /// The markers are stripped.
    ///
    /// ```
    /// use ruleval_validator::message::Template;
    ///
    /// let t = Template::parse_marked("{{invalid rule parameters}}");
    /// assert!(t.suppresses_label_prefix());
    /// assert!(t.suppresses_limit_suffix());
    /// assert_eq!(t.text(), "invalid rule parameters");
    /// ```
    #[must_use]
    pub fn parse_marked(raw: &str) -> Self {
        let (text, suppress_label_prefix) = match raw.strip_prefix(OPEN_MARKER) {
            Some(rest) => (rest, true),
            None => (raw, false),
        };
        // `{limit}}` is a token followed by a stray brace, not a marker.
        let (text, suppress_limit_suffix) = match text.strip_suffix(CLOSE_MARKER) {
            Some(rest) if !rest.ends_with("{limit") && !rest.ends_with("{field") => (rest, true),
            _ => (text, false),
        };

        Self {
            text: text.to_owned(),
            suppress_label_prefix,
            suppress_limit_suffix,
        }
    }

    /// Switches the implicit label prefix off.
    #[must_use = "builder methods must be chained or built"]
    pub fn without_label(mut self) -> Self {
        self.suppress_label_prefix = true;
        self
    }

    /// Switches the implicit limit suffix off.
    #[must_use = "builder methods must be chained or built"]
    pub fn without_limit(mut self) -> Self {
        self.suppress_limit_suffix = true;
        self
    }

    /// The phrase, without markers.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether the label is not prepended.
    #[must_use]
    pub const fn suppresses_label_prefix(&self) -> bool {
        self.suppress_label_prefix
    }

    /// Whether the limit is not appended.
    #[must_use]
    pub const fn suppresses_limit_suffix(&self) -> bool {
        self.suppress_limit_suffix
    }

    /// Renders the final message.
    ///
    /// Tokens are substituted first, then the implicit prefix and suffix are
    /// applied. `separator` joins label, phrase and limit; an empty label or
    /// a missing limit adds nothing, separator included.
    #[must_use]
    pub fn render(&self, label: &str, limit: Option<&str>, separator: &str) -> String {
        let mut body = self.text.replace(FIELD_TOKEN, label);
        if body.contains(LIMIT_TOKEN) {
            body = body.replace(LIMIT_TOKEN, limit.unwrap_or_default());
        }

        let mut out = String::with_capacity(label.len() + body.len() + 16);
        if !self.suppress_label_prefix && !label.is_empty() {
            out.push_str(label);
            if !body.is_empty() {
                out.push_str(separator);
            }
        }
        out.push_str(&body);
        if !self.suppress_limit_suffix
            && let Some(limit) = limit
        {
            if !out.is_empty() {
                out.push_str(separator);
            }
            out.push_str(limit);
        }
        out
    }

    /// Writes the marker notation back out.
    #[must_use]
    pub fn to_marked(&self) -> String {
        let mut out = String::with_capacity(self.text.len() + 4);
        if self.suppress_label_prefix {
            out.push_str(OPEN_MARKER);
        }
        out.push_str(&self.text);
        if self.suppress_limit_suffix {
            out.push_str(CLOSE_MARKER);
        }
        out
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_marked())
    }
}

impl From<&str> for Template {
    fn from(raw: &str) -> Self {
        Self::parse_marked(raw)
    }
}

impl From<String> for Template {
    fn from(raw: String) -> Self {
        Self::parse_marked(&raw)
    }
}

impl Serialize for Template {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_marked())
    }
}

impl<'de> Deserialize<'de> for Template {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::parse_marked(&raw))
    }
}

// ============================================================================
// TESTS
// ============================================================================
