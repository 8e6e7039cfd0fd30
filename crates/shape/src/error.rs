use core::fmt;

use crate::{Field, Type};

/// An error raised while constructing a [`Rectangle`].
///
/// [`Rectangle`]: crate::Rectangle
#[non_exhaustive]
pub struct Error {
    kind: ErrorKind,
}

impl Error {
    /// Create a new `Error` with the specified kind.
    #[inline]
    pub(crate) fn new(kind: ErrorKind) -> Self {
        Self { kind }
    }

    /// Get the kind of error.
    #[inline]
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// Get the field the error refers to.
    #[inline]
    pub fn field(&self) -> Field {
        match self.kind {
            ErrorKind::Expected { field, .. } => field,
            ErrorKind::NotPositive { field, .. } => field,
            ErrorKind::OutOfRange { field } => field,
        }
    }

    /// Test if the error is caused by an input of the wrong type.
    ///
    /// # Examples
    ///
    /// ```
    /// use shape::{Rectangle, Value};
    ///
    /// let error = Rectangle::from_values(Value::Int(5), Value::Float(3.0)).unwrap_err();
    /// assert!(error.is_type());
    /// assert!(!error.is_value());
    /// ```
    #[inline]
    pub fn is_type(&self) -> bool {
        matches!(self.kind, ErrorKind::Expected { .. })
    }

    /// Test if the error is caused by an integer that is out of range, either
    /// because it is not strictly positive or because it is too large.
    ///
    /// # Examples
    ///
    /// ```
    /// use shape::Rectangle;
    ///
    /// let error = Rectangle::new(0, 3).unwrap_err();
    /// assert!(error.is_value());
    /// assert!(!error.is_type());
    /// ```
    #[inline]
    pub fn is_value(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::NotPositive { .. } | ErrorKind::OutOfRange { .. }
        )
    }
}

/// The kind of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The field was not given an integer.
    Expected {
        field: Field,
        expected: Type,
        actual: Type,
    },
    /// The field was given an integer which is not strictly positive.
    NotPositive { field: Field, value: i128 },
    /// The field was given an integer too large in magnitude to be held as a
    /// dimension, which can be at most [`u64::MAX`].
    OutOfRange { field: Field },
}

#[cfg(test)]
impl PartialEq<ErrorKind> for &ErrorKind {
    #[inline]
    fn eq(&self, other: &ErrorKind) -> bool {
        **self == *other
    }
}

impl core::error::Error for Error {}

impl fmt::Debug for Error {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.kind, f)
    }
}

impl fmt::Display for Error {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ErrorKind::Expected {
                field,
                expected,
                actual,
            } => {
                write!(f, "Expected {field} to be {expected}, but found {actual}")
            }
            ErrorKind::NotPositive { field, value } => {
                write!(f, "Expected {field} to be positive, but found {value}")
            }
            ErrorKind::OutOfRange { field } => {
                write!(f, "Expected {field} to be in 1..={}", u64::MAX)
            }
        }
    }
}
