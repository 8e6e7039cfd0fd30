use core::fmt;

use crate::Type;

/// A dynamically typed input value.
///
/// Only [`Value::Int`] and [`Value::BigInt`] are accepted as rectangle
/// dimensions, every other variant is rejected with a type error.
///
/// # Examples
///
/// ```
/// use shape::{Type, Value};
///
/// assert_eq!(Value::Int(5).ty(), Type::INT);
/// assert_eq!(Value::BigInt("99999999999999999999999999999999999999999").ty(), Type::INT);
/// assert_eq!(Value::Float(3.0).ty(), Type::FLOAT);
/// assert_eq!(Value::Str("five").ty(), Type::STRING);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value<'a> {
    /// A signed integer.
    Int(i128),
    /// An integer spelled out in decimal which is too large to be held by
    /// [`Value::Int`].
    BigInt(&'a str),
    /// A floating-point number.
    Float(f64),
    /// A boolean.
    Bool(bool),
    /// A string.
    Str(&'a str),
}

impl Value<'_> {
    /// Get the type of the value.
    #[inline]
    pub const fn ty(&self) -> Type {
        match self {
            Value::Int(..) | Value::BigInt(..) => Type::INT,
            Value::Float(..) => Type::FLOAT,
            Value::Bool(..) => Type::BOOL,
            Value::Str(..) => Type::STRING,
        }
    }

    /// Get the integer stored in the value, if it is one that fits in an
    /// `i128`.
    #[inline]
    pub const fn as_int(&self) -> Option<i128> {
        match *self {
            Value::Int(value) => Some(value),
            _ => None,
        }
    }
}

impl fmt::Display for Value<'_> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(value) => fmt::Display::fmt(value, f),
            Value::BigInt(value) => f.write_str(value),
            Value::Float(value) => fmt::Debug::fmt(value, f),
            Value::Bool(value) => fmt::Display::fmt(value, f),
            Value::Str(value) => write!(f, "{value:?}"),
        }
    }
}

impl From<i64> for Value<'_> {
    #[inline]
    fn from(value: i64) -> Self {
        Value::Int(i128::from(value))
    }
}

impl From<i32> for Value<'_> {
    #[inline]
    fn from(value: i32) -> Self {
        Value::Int(i128::from(value))
    }
}

impl From<u64> for Value<'_> {
    #[inline]
    fn from(value: u64) -> Self {
        Value::Int(i128::from(value))
    }
}

impl From<f64> for Value<'_> {
    #[inline]
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<bool> for Value<'_> {
    #[inline]
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl<'a> From<&'a str> for Value<'a> {
    #[inline]
    fn from(value: &'a str) -> Self {
        Value::Str(value)
    }
}
