use core::fmt;
use core::num::NonZeroU64;

use tracing::Level;

use crate::error::ErrorKind;
use crate::{Dimensions, Error, Field, Type, Value};

/// A rectangle defined by its length and width.
///
/// Both dimensions are strictly positive integers. The rectangle can't be
/// modified once constructed.
///
/// # Examples
///
/// ```
/// use shape::Rectangle;
///
/// let rect = Rectangle::new(5, 3)?;
/// assert_eq!(rect.to_string(), "Rectangle(length=5, width=3)");
///
/// let items = rect.into_iter().map(|d| d.to_string()).collect::<Vec<_>>();
/// assert_eq!(items, ["{'length': 5}", "{'width': 3}"]);
/// # Ok::<_, shape::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rectangle {
    length: NonZeroU64,
    width: NonZeroU64,
}

impl Rectangle {
    /// Construct a new rectangle.
    ///
    /// Lengths and widths above `i64::MAX` can't be expressed here, use
    /// [`Rectangle::from_u64`] for the full range.
    ///
    /// # Errors
    ///
    /// Errors if either `length` or `width` is not strictly positive.
    ///
    /// # Examples
    ///
    /// ```
    /// use shape::Rectangle;
    ///
    /// let rect = Rectangle::new(5, 3)?;
    /// assert_eq!(rect.length(), 5);
    /// assert_eq!(rect.width(), 3);
    ///
    /// assert!(Rectangle::new(0, 3).is_err());
    /// assert!(Rectangle::new(5, -3).is_err());
    /// # Ok::<_, shape::Error>(())
    /// ```
    #[tracing::instrument(level = Level::TRACE, ret)]
    pub fn new(length: i64, width: i64) -> Result<Self, Error> {
        let length = positive(Field::Length, i128::from(length))?;
        let width = positive(Field::Width, i128::from(width))?;
        Ok(Self { length, width })
    }

    /// Construct a new rectangle from unsigned dimensions.
    ///
    /// # Errors
    ///
    /// Errors if either `length` or `width` is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use shape::Rectangle;
    ///
    /// let rect = Rectangle::from_u64(u64::MAX, 1)?;
    /// assert_eq!(rect.length(), u64::MAX);
    ///
    /// assert!(Rectangle::from_u64(5, 0).is_err());
    /// # Ok::<_, shape::Error>(())
    /// ```
    #[tracing::instrument(level = Level::TRACE, ret)]
    pub fn from_u64(length: u64, width: u64) -> Result<Self, Error> {
        let length = positive(Field::Length, i128::from(length))?;
        let width = positive(Field::Width, i128::from(width))?;
        Ok(Self { length, width })
    }

    /// Construct a new rectangle from dynamically typed values.
    ///
    /// The type of both values is checked before either is checked for
    /// being in range.
    ///
    /// # Errors
    ///
    /// Errors if either value is not an integer, or if either integer is not
    /// strictly positive or is larger than [`u64::MAX`].
    ///
    /// # Examples
    ///
    /// ```
    /// use shape::{Rectangle, Value};
    ///
    /// let rect = Rectangle::from_values(Value::Int(5), Value::Int(3))?;
    /// assert_eq!(rect, Rectangle::new(5, 3)?);
    ///
    /// let error = Rectangle::from_values(Value::Int(0), Value::Str("3")).unwrap_err();
    /// assert!(error.is_type());
    ///
    /// let error = Rectangle::from_values(Value::Int(5), Value::BigInt("123456789012345678901234567890123456789012")).unwrap_err();
    /// assert!(error.is_value());
    /// # Ok::<_, shape::Error>(())
    /// ```
    pub fn from_values(length: Value<'_>, width: Value<'_>) -> Result<Self, Error> {
        let length = integer(Field::Length, length)?;
        let width = integer(Field::Width, width)?;
        let length = in_range(Field::Length, length)?;
        let width = in_range(Field::Width, width)?;
        Ok(Self { length, width })
    }

    /// Get the length of the rectangle.
    #[inline]
    pub const fn length(&self) -> u64 {
        self.length.get()
    }

    /// Get the width of the rectangle.
    #[inline]
    pub const fn width(&self) -> u64 {
        self.width.get()
    }

    /// Iterate over the dimensions of the rectangle.
    ///
    /// Every call starts over from the length.
    ///
    /// # Examples
    ///
    /// ```
    /// use shape::Rectangle;
    ///
    /// let rect = Rectangle::new(5, 3)?;
    ///
    /// let mut it = rect.dimensions();
    /// assert_eq!(it.next().map(|d| d.as_pair()), Some(("length", 5)));
    /// assert_eq!(it.next().map(|d| d.as_pair()), Some(("width", 3)));
    /// assert_eq!(it.next(), None);
    ///
    /// assert_eq!(rect.dimensions().count(), 2);
    /// # Ok::<_, shape::Error>(())
    /// ```
    #[inline]
    pub fn dimensions(&self) -> Dimensions {
        Dimensions::new(self.length(), self.width())
    }
}

impl fmt::Display for Rectangle {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rectangle(length={}, width={})", self.length, self.width)
    }
}

impl IntoIterator for Rectangle {
    type Item = crate::Dimension;
    type IntoIter = Dimensions;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.dimensions()
    }
}

impl IntoIterator for &Rectangle {
    type Item = crate::Dimension;
    type IntoIter = Dimensions;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.dimensions()
    }
}

/// Check that the value is an integer, `None` means it is too large to be
/// held natively.
fn integer(field: Field, value: Value<'_>) -> Result<Option<i128>, Error> {
    match value {
        Value::Int(value) => Ok(Some(value)),
        Value::BigInt(..) => Ok(None),
        value => {
            let actual = value.ty();
            tracing::debug!(%field, %actual, "Rejected dimension of wrong type");

            Err(Error::new(ErrorKind::Expected {
                field,
                expected: Type::INT,
                actual,
            }))
        }
    }
}

fn in_range(field: Field, value: Option<i128>) -> Result<NonZeroU64, Error> {
    match value {
        Some(value) => positive(field, value),
        None => {
            tracing::debug!(%field, "Rejected dimension out of range");
            Err(Error::new(ErrorKind::OutOfRange { field }))
        }
    }
}

fn positive(field: Field, value: i128) -> Result<NonZeroU64, Error> {
    if value <= 0 {
        tracing::debug!(%field, %value, "Rejected non-positive dimension");
        return Err(Error::new(ErrorKind::NotPositive { field, value }));
    }

    match u64::try_from(value).ok().and_then(NonZeroU64::new) {
        Some(value) => Ok(value),
        None => {
            tracing::debug!(%field, %value, "Rejected dimension out of range");
            Err(Error::new(ErrorKind::OutOfRange { field }))
        }
    }
}
