//! Presence checker

use crate::context::{CheckContext, FieldError};
use crate::message::keys;
use crate::registry::Checker;
use crate::value::Value;

/// Fails on nil, the empty string and empty sequences.
///
/// Numeric zero and `false` also fail when
/// [`ValidatorConfig::zero_is_missing`](crate::config::ValidatorConfig::zero_is_missing)
/// is set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Required;

impl Required {
    /// Registry name and template key.
    pub const NAME: &'static str = keys::REQUIRED;
}

impl Checker for Required {
    fn check(&self, ctx: &CheckContext<'_>) -> Option<FieldError> {
        let missing = match ctx.value() {
            Value::Nil => true,
            Value::Str(text) => text.is_empty(),
            Value::Seq(items) => items.is_empty(),
            other => ctx.config().zero_is_missing && other.is_zero(),
        };
        missing.then(|| ctx.violation().finish())
    }
}
