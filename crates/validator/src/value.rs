//! Runtime field values
//!
//! Checkers never inspect host types directly. Every field value is lowered
//! into [`Value`], a closed tagged union, and checkers pattern-match on it.
//! [`ValueKind`] carries the declared category of a field separately, so an
//! absent `Option<u32>` still reports itself as [`ValueKind::Uint`].

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

// ============================================================================
// VALUE
// ============================================================================

/// The runtime value of a field.
///
/// # Examples
///
/// ```
/// use ruleval_validator::value::Value;
///
/// assert_eq!(Value::from(-5).to_string(), "-5");
/// assert_eq!(Value::from(vec!["a", "b"]).to_string(), "[a b]");
/// assert!(Value::from(None::<i32>).is_nil());
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Absent value.
    #[default]
    Nil,
    /// Boolean.
    Bool(bool),
    /// Signed integer of any width.
    Int(i64),
    /// Unsigned integer of any width.
    Uint(u64),
    /// Floating point of any width.
    Float(f64),
    /// Text.
    Str(String),
    /// Ordered sequence.
    Seq(Vec<Value>),
}

impl Value {
    /// Returns the category of this value.
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Nil => ValueKind::Nil,
            Self::Bool(_) => ValueKind::Bool,
            Self::Int(_) => ValueKind::Int,
            Self::Uint(_) => ValueKind::Uint,
            Self::Float(_) => ValueKind::Float,
            Self::Str(_) => ValueKind::Str,
            Self::Seq(_) => ValueKind::Seq,
        }
    }

    /// Returns true for [`Value::Nil`].
    #[must_use]
    pub const fn is_nil(&self) -> bool {
        matches!(self, Self::Nil)
    }

    /// Returns true when the value counts as "not provided" for optional
    /// fields: nil or the empty string.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Nil => true,
            Self::Str(s) => s.is_empty(),
            _ => false,
        }
    }

    /// Returns true when the value equals the zero value of its kind.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        match self {
            Self::Nil => true,
            Self::Bool(b) => !b,
            Self::Int(n) => *n == 0,
            Self::Uint(n) => *n == 0,
            Self::Float(n) => *n == 0.0,
            Self::Str(s) => s.is_empty(),
            Self::Seq(items) => items.is_empty(),
        }
    }

    /// Borrows the text of a [`Value::Str`].
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Renders the value as text, borrowing when it already is text.
    #[must_use]
    pub fn to_text(&self) -> Cow<'_, str> {
        match self {
            Self::Str(s) => Cow::Borrowed(s),
            other => Cow::Owned(other.to_string()),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nil => f.write_str("<nil>"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(n) => write!(f, "{n}"),
            Self::Uint(n) => write!(f, "{n}"),
            Self::Float(n) => write!(f, "{n}"),
            Self::Str(s) => f.write_str(s),
            Self::Seq(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
        }
    }
}

// ============================================================================
// VALUE KIND
// ============================================================================

/// Declared category of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    /// No static category known.
    Nil,
    /// `bool`
    Bool,
    /// Signed integers.
    Int,
    /// Unsigned integers.
    Uint,
    /// `f32` / `f64`
    Float,
    /// Text.
    Str,
    /// Sequences, including sequences of nested records.
    Seq,
}

impl ValueKind {
    /// Returns true for the three numeric categories.
    #[must_use]
    pub const fn is_numeric(self) -> bool {
        matches!(self, Self::Int | Self::Uint | Self::Float)
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Nil => "nil",
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Uint => "uint",
            Self::Float => "float",
            Self::Str => "string",
            Self::Seq => "sequence",
        };
        f.write_str(name)
    }
}

// ============================================================================
// CONVERSIONS
// ============================================================================

/// Lowers a host value into a [`Value`] together with its declared kind.
///
/// Implemented for primitives, strings, `Option<T>` and sequences. The
/// record builder and the derive macro go through this trait, so any type
/// implementing it can carry rules.
pub trait IntoValue {
    /// Converts a borrowed host value.
    fn to_value(&self) -> Value;

    /// The declared kind, independent of the current value.
    fn kind() -> ValueKind
    where
        Self: Sized;
}

macro_rules! impl_into_value {
    ($variant:ident, $kind:ident, $conv:ty => $($ty:ty),+) => {
        $(
            impl IntoValue for $ty {
                fn to_value(&self) -> Value {
                    Value::$variant(<$conv>::from(*self))
                }

                fn kind() -> ValueKind {
                    ValueKind::$kind
                }
            }

            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::$variant(<$conv>::from(value))
                }
            }
        )+
    };
}

impl_into_value!(Int, Int, i64 => i8, i16, i32, i64);
impl_into_value!(Uint, Uint, u64 => u8, u16, u32, u64);
impl_into_value!(Float, Float, f64 => f32, f64);
impl_into_value!(Bool, Bool, bool => bool);

impl IntoValue for isize {
    fn to_value(&self) -> Value {
        Value::Int(*self as i64)
    }

    fn kind() -> ValueKind {
        ValueKind::Int
    }
}

impl From<isize> for Value {
    fn from(value: isize) -> Self {
        Self::Int(value as i64)
    }
}

impl IntoValue for usize {
    fn to_value(&self) -> Value {
        Value::Uint(*self as u64)
    }

    fn kind() -> ValueKind {
        ValueKind::Uint
    }
}

impl From<usize> for Value {
    fn from(value: usize) -> Self {
        Self::Uint(value as u64)
    }
}

impl IntoValue for char {
    fn to_value(&self) -> Value {
        Value::Str(self.to_string())
    }

    fn kind() -> ValueKind {
        ValueKind::Str
    }
}

impl From<char> for Value {
    fn from(value: char) -> Self {
        Self::Str(value.to_string())
    }
}

impl IntoValue for String {
    fn to_value(&self) -> Value {
        Value::Str(self.clone())
    }

    fn kind() -> ValueKind {
        ValueKind::Str
    }
}

impl IntoValue for &str {
    fn to_value(&self) -> Value {
        Value::Str((*self).to_owned())
    }

    fn kind() -> ValueKind {
        ValueKind::Str
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Str(value.to_owned())
    }
}

impl From<Cow<'_, str>> for Value {
    fn from(value: Cow<'_, str>) -> Self {
        Self::Str(value.into_owned())
    }
}

impl<T: IntoValue> IntoValue for Option<T> {
    fn to_value(&self) -> Value {
        self.as_ref().map_or(Value::Nil, IntoValue::to_value)
    }

    fn kind() -> ValueKind {
        T::kind()
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Nil, Into::into)
    }
}

impl<T: IntoValue> IntoValue for Vec<T> {
    fn to_value(&self) -> Value {
        Value::Seq(self.iter().map(IntoValue::to_value).collect())
    }

    fn kind() -> ValueKind {
        ValueKind::Seq
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(value: Vec<T>) -> Self {
        Self::Seq(value.into_iter().map(Into::into).collect())
    }
}

impl IntoValue for Value {
    fn to_value(&self) -> Value {
        self.clone()
    }

    fn kind() -> ValueKind {
        ValueKind::Nil
    }
}

// ============================================================================
// TESTS
// ============================================================================
