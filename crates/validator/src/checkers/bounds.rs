//! Numeric and length bound checkers
//!
//! Bounds are inclusive: a value equal to the limit passes in both
//! directions. The limit is parsed according to the field's declared kind,
//! so `min:1.5` on an integer field is a parameter error, not a failure, and
//! a malformed limit is reported even when the value is absent.

use std::str::FromStr;

use crate::context::{CheckContext, FieldError};
use crate::message::keys;
use crate::registry::Checker;
use crate::value::{Value, ValueKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Bound {
    Lower,
    Upper,
}

impl Bound {
    fn holds<T: PartialOrd>(self, value: &T, limit: &T) -> bool {
        match self {
            Self::Lower => value >= limit,
            Self::Upper => value <= limit,
        }
    }
}

// ============================================================================
// NUMERIC BOUNDS
// ============================================================================

/// Numeric lower bound: `min:<n>`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Min;

impl Min {
    /// Registry name and template key.
    pub const NAME: &'static str = keys::MIN;
}

impl Checker for Min {
    fn check(&self, ctx: &CheckContext<'_>) -> Option<FieldError> {
        check_number(ctx, Bound::Lower)
    }
}

/// Numeric upper bound: `max:<n>`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Max;

impl Max {
    /// Registry name and template key.
    pub const NAME: &'static str = keys::MAX;
}

impl Checker for Max {
    fn check(&self, ctx: &CheckContext<'_>) -> Option<FieldError> {
        check_number(ctx, Bound::Upper)
    }
}

fn check_number(ctx: &CheckContext<'_>, bound: Bound) -> Option<FieldError> {
    let Some(param) = ctx.rule().single_param() else {
        return Some(ctx.param_error());
    };

    // The declared kind picks the arithmetic; an undeclared kind falls back
    // to the runtime variant.
    let declared = ctx.field().kind();
    let category = if declared.is_numeric() {
        declared
    } else {
        ctx.value().kind()
    };

    match category {
        ValueKind::Int => compare_integer::<i64>(ctx, bound, param),
        ValueKind::Uint => compare_integer::<u64>(ctx, bound, param),
        ValueKind::Float => compare_float(ctx, bound, param),
        ValueKind::Nil => match param.trim().parse::<f64>() {
            Ok(_) => None,
            Err(_) => Some(ctx.param_error()),
        },
        ValueKind::Bool | ValueKind::Str | ValueKind::Seq => {
            if ctx.value().is_nil() {
                None
            } else {
                Some(ctx.type_error())
            }
        }
    }
}

/// Signed and unsigned limits share one comparison over `i128`, which holds
/// both ranges.
fn compare_integer<T>(ctx: &CheckContext<'_>, bound: Bound, param: &str) -> Option<FieldError>
where
    T: FromStr + Copy + Into<i128> + Into<Value>,
{
    let Ok(limit) = param.trim().parse::<T>() else {
        return Some(ctx.param_error());
    };
    let value = match ctx.value() {
        Value::Nil => return None,
        Value::Int(n) => i128::from(*n),
        Value::Uint(n) => i128::from(*n),
        Value::Float(_) | Value::Bool(_) | Value::Str(_) | Value::Seq(_) => {
            return Some(ctx.type_error());
        }
    };

    if bound.holds(&value, &Into::<i128>::into(limit)) {
        None
    } else {
        Some(ctx.violation().with_limit(limit).finish())
    }
}

fn compare_float(ctx: &CheckContext<'_>, bound: Bound, param: &str) -> Option<FieldError> {
    let Ok(limit) = param.trim().parse::<f64>() else {
        return Some(ctx.param_error());
    };
    let value = match ctx.value() {
        Value::Nil => return None,
        Value::Int(n) => *n as f64,
        Value::Uint(n) => *n as f64,
        Value::Float(n) => *n,
        Value::Bool(_) | Value::Str(_) | Value::Seq(_) => return Some(ctx.type_error()),
    };

    if bound.holds(&value, &limit) {
        None
    } else {
        Some(ctx.violation().with_limit(limit).finish())
    }
}

// ============================================================================
// LENGTH BOUNDS
// ============================================================================

/// Minimum length in characters (text) or elements (sequences): `minlen:<n>`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct MinLen;

impl MinLen {
    /// Registry name and template key.
    pub const NAME: &'static str = keys::MIN_LEN;
}

impl Checker for MinLen {
    fn check(&self, ctx: &CheckContext<'_>) -> Option<FieldError> {
        check_length(ctx, Bound::Lower)
    }
}

/// Maximum length in characters (text) or elements (sequences): `maxlen:<n>`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct MaxLen;

impl MaxLen {
    /// Registry name and template key.
    pub const NAME: &'static str = keys::MAX_LEN;
}

impl Checker for MaxLen {
    fn check(&self, ctx: &CheckContext<'_>) -> Option<FieldError> {
        check_length(ctx, Bound::Upper)
    }
}

fn check_length(ctx: &CheckContext<'_>, bound: Bound) -> Option<FieldError> {
    let Some(limit) = ctx
        .rule()
        .single_param()
        .and_then(|param| param.trim().parse::<i64>().ok())
    else {
        return Some(ctx.param_error());
    };

    // Code points, not bytes: "日本語の" is four long.
    let length = match ctx.value() {
        Value::Nil => return None,
        Value::Str(text) if text.is_empty() => return None,
        Value::Seq(items) if items.is_empty() => return None,
        Value::Str(text) => text.chars().count(),
        Value::Seq(items) => items.len(),
        Value::Bool(_) | Value::Int(_) | Value::Uint(_) | Value::Float(_) => {
            return Some(ctx.type_error());
        }
    };
    let length = i64::try_from(length).unwrap_or(i64::MAX);

    if bound.holds(&length, &limit) {
        None
    } else {
        Some(ctx.violation().with_limit(limit).finish())
    }
}

// ============================================================================
// TESTS
// ============================================================================
