//! Rule grammar
//!
//! A raw rule string is a `;`-separated list of directives. Each directive is
//! either a bare checker name (`required`) or `name:arg1,arg2` where only the
//! first colon separates the name from its comma-separated parameters.
//!
//! Parsing never fails. Empty directives and directives with an empty name
//! are dropped; `name:` yields a single empty parameter. Unknown names are
//! left for the registry to report at dispatch time.

use std::fmt;
use std::sync::Arc;

use dashmap::DashMap;
use smallvec::SmallVec;

/// Inline storage for rule parameters; most rules take zero or one.
pub type Params = SmallVec<[String; 2]>;

// ============================================================================
// RULE
// ============================================================================

/// One parsed directive: a checker name and its parameters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Rule {
    /// Registry key of the checker.
    pub checker: String,
    /// Parameters in declaration order. Empty for bare directives.
    pub params: Params,
}

impl Rule {
    /// Creates a rule from a checker name and parameters.
    pub fn new<I, S>(checker: impl Into<String>, params: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            checker: checker.into(),
            params: params.into_iter().map(Into::into).collect(),
        }
    }

    /// Creates a rule without parameters.
    pub fn bare(checker: impl Into<String>) -> Self {
        Self {
            checker: checker.into(),
            params: Params::new(),
        }
    }

    /// Returns the only parameter, or `None` when there are zero or several.
    #[must_use]
    pub fn single_param(&self) -> Option<&str> {
        match self.params.as_slice() {
            [param] => Some(param),
            _ => None,
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.checker)?;
        if !self.params.is_empty() {
            write!(f, ":{}", self.params.join(","))?;
        }
        Ok(())
    }
}

// ============================================================================
// PARSER
// ============================================================================

/// Parses a raw rule string into its directives.
///
/// # Examples
///
/// ```
/// use ruleval_validator::rule::{Rule, parse_rules};
///
/// let rules = parse_rules("required;min:0;;list:a,b");
/// assert_eq!(rules, vec![
///     Rule::bare("required"),
///     Rule::new("min", ["0"]),
///     Rule::new("list", ["a", "b"]),
/// ]);
/// assert!(parse_rules(":orphan").is_empty());
/// ```
#[must_use]
pub fn parse_rules(raw: &str) -> Vec<Rule> {
    raw.split(';').filter_map(parse_directive).collect()
}

fn parse_directive(segment: &str) -> Option<Rule> {
    if segment.is_empty() {
        return None;
    }

    match segment.split_once(':') {
        Some(("", _)) => None,
        Some((name, args)) => Some(Rule::new(name, args.split(','))),
        None => Some(Rule::bare(segment)),
    }
}

// ============================================================================
// CACHE
// ============================================================================

/// Memoizes parsed rule lists by their raw string.
///
/// Fields of a repeated sub-record share identical rule text, so a record
/// with many rows parses each distinct string once. Population races are
/// harmless because parsing is pure; the map itself is a `DashMap`.
#[derive(Debug, Default)]
pub struct RuleCache {
    entries: DashMap<String, Arc<[Rule]>>,
    capacity: Option<usize>,
}

impl RuleCache {
    /// Creates an unbounded cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a cache that stops admitting new strings once it holds
    /// `capacity` entries. Strings beyond that are parsed on every call.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: DashMap::with_capacity(capacity),
            capacity: Some(capacity),
        }
    }

    /// Returns the parsed rules for `raw`, parsing on first sight.
    pub fn get_or_parse(&self, raw: &str) -> Arc<[Rule]> {
        if let Some(hit) = self.entries.get(raw) {
            return Arc::clone(hit.value());
        }

        let parsed: Arc<[Rule]> = parse_rules(raw).into();
        if self.capacity.is_some_and(|cap| self.entries.len() >= cap) {
            return parsed;
        }

        tracing::debug!(raw, rules = parsed.len(), "cached parsed rule string");
        Arc::clone(
            self.entries
                .entry(raw.to_owned())
                .or_insert(parsed)
                .value(),
        )
    }

    /// Number of cached rule strings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been cached yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drops every cached entry.
    pub fn clear(&self) {
        self.entries.clear();
    }
}

// ============================================================================
// TESTS
// ============================================================================
