//! Character-class checkers
//!
//! Classes are ASCII-only: `é` is not a letter here.

use crate::context::{CheckContext, FieldError};
use crate::message::keys;
use crate::registry::Checker;
use crate::value::Value;

crate::checker! {
    /// ASCII letters only.
    pub Alpha => "alpha";
    rule(text) { text.bytes().all(|b| b.is_ascii_alphabetic()) }
}

crate::checker! {
    /// ASCII letters and digits only.
    pub Alphanumeric => "alphanumeric";
    rule(text) { text.bytes().all(|b| b.is_ascii_alphanumeric()) }
}

crate::checker! {
    /// ASCII letters, digits and underscores.
    pub AlphaDash => "alphadash";
    rule(text) { text.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_') }
}

// ============================================================================
// USERNAME
// ============================================================================

/// A user name: [`AlphaDash`], starting with a letter, not ending with `_`.
///
/// The three sub-checks run in that order and stop at the first failure, so
/// a field gets at most one error from this checker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Username;

impl Username {
    /// Registry name.
    pub const NAME: &'static str = keys::USERNAME;
}

impl Checker for Username {
    fn check(&self, ctx: &CheckContext<'_>) -> Option<FieldError> {
        let text = match ctx.value() {
            Value::Nil => return None,
            Value::Str(text) if text.is_empty() => return None,
            Value::Str(text) => text,
            _ => return Some(ctx.type_error()),
        };

        if !AlphaDash::matches(text) {
            return Some(ctx.violation().with_template(keys::ALPHA_DASH).finish());
        }

        let first = text.chars().next().map(String::from).unwrap_or_default();
        if Alpha.check(&ctx.with_value(first)).is_some() {
            return Some(ctx.violation().with_template(keys::FIRST_CHAR_ALPHA).finish());
        }

        if text.ends_with('_') {
            return Some(ctx.violation().with_template(keys::LAST_UNDERLINE).finish());
        }
        None
    }
}

// ============================================================================
// TESTS
// ============================================================================
