//! Built-in checkers
//!
//! Shared conventions: a nil value or empty string is "not provided" and
//! passes every checker except `required`; a value of a kind the checker
//! cannot handle fails with `_valueTypeError`.
//!
//! # Categories
//!
//! - **Presence**: [`Required`]
//! - **Bounds**: [`Min`], [`Max`], [`MinLen`], [`MaxLen`]
//! - **Character classes**: [`Alpha`], [`Alphanumeric`], [`AlphaDash`], [`Username`]
//! - **Formats**: [`Email`], [`Ipv4`], [`Mobile`], [`Tel`], [`Phone`], [`IdCard`]
//! - **Relations**: [`Equal`], [`List`]

mod bounds;
mod charset;
mod format;
mod presence;
mod relation;

pub use bounds::{Max, MaxLen, Min, MinLen};
pub use charset::{Alpha, AlphaDash, Alphanumeric, Username};
pub use format::{Email, IdCard, Ipv4, Mobile, Phone, Tel};
pub use presence::Required;
pub use relation::{Equal, List};

use crate::context::{CheckContext, FieldError};
use crate::registry::CheckerRegistry;
use crate::value::Value;

/// Registers every built-in checker under its rule name.
pub fn register_builtins(registry: &CheckerRegistry) {
    registry.register(Required::NAME, Required);
    registry.register(Min::NAME, Min);
    registry.register(Max::NAME, Max);
    registry.register(MinLen::NAME, MinLen);
    registry.register(MaxLen::NAME, MaxLen);
    registry.register(Alpha::NAME, Alpha);
    registry.register(Alphanumeric::NAME, Alphanumeric);
    registry.register(AlphaDash::NAME, AlphaDash);
    registry.register(Username::NAME, Username);
    registry.register(Email::NAME, Email);
    registry.register(Ipv4::NAME, Ipv4);
    registry.register(Mobile::NAME, Mobile);
    registry.register(Tel::NAME, Tel);
    registry.register(Phone::NAME, Phone);
    registry.register(IdCard::NAME, IdCard);
    registry.register(Equal::NAME, Equal);
    registry.register(List::NAME, List);
}

/// Applies a text predicate with the shared conventions.
///
/// Used by [`checker!`](crate::checker); public only for that macro.
#[doc(hidden)]
pub fn check_text(ctx: &CheckContext<'_>, matches: impl Fn(&str) -> bool) -> Option<FieldError> {
    match ctx.value() {
        Value::Nil => None,
        Value::Str(text) if text.is_empty() || matches(text) => None,
        Value::Str(_) => Some(ctx.violation().finish()),
        _ => Some(ctx.type_error()),
    }
}
