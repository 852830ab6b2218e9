//! Cross-field and enumeration checkers

use crate::context::{CheckContext, FieldError};
use crate::message::keys;
use crate::registry::Checker;

/// Equal to a sibling field, compared as rendered text: `equal:<field>`.
///
/// The sibling is looked up in the field's own record, so a rule on a
/// nested field never sees the outer record. An empty value is compared
/// like any other, so a blank confirmation never matches a filled sibling.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Equal;

impl Equal {
    /// Registry name and template key.
    pub const NAME: &'static str = keys::EQUAL;
}

impl Checker for Equal {
    fn check(&self, ctx: &CheckContext<'_>) -> Option<FieldError> {
        let Some(name) = ctx.rule().single_param() else {
            return Some(ctx.param_error());
        };
        let Some(sibling) = ctx.sibling(name) else {
            return Some(ctx.field_not_found(name));
        };

        if ctx.value().to_text() == sibling.to_text() {
            None
        } else {
            Some(ctx.violation().finish())
        }
    }
}

/// One of a fixed set of literals: `list:a,b,c`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct List;

impl List {
    /// Registry name and template key.
    pub const NAME: &'static str = keys::LIST;
}

impl Checker for List {
    fn check(&self, ctx: &CheckContext<'_>) -> Option<FieldError> {
        if ctx.params().is_empty() {
            return Some(ctx.param_error());
        }
        if ctx.value().is_blank() {
            return None;
        }

        let text = ctx.value().to_text();
        if ctx.params().iter().any(|allowed| *allowed == *text) {
            None
        } else {
            Some(ctx.violation().finish())
        }
    }
}
