use core::array;
use core::fmt;
use core::iter::FusedIterator;

#[cfg(feature = "alloc")]
use alloc::collections::BTreeMap;

use crate::Field;

/// A single named dimension of a [`Rectangle`], behaving like a one-entry
/// mapping from the field name to its value.
///
/// # Examples
///
/// ```
/// use shape::{Field, Rectangle};
///
/// let rect = Rectangle::new(5, 3)?;
/// let first = rect.dimensions().next().unwrap();
///
/// assert_eq!(first.field(), Field::Length);
/// assert_eq!(first.as_pair(), ("length", 5));
/// assert_eq!(first.to_string(), "{'length': 5}");
/// # Ok::<_, shape::Error>(())
/// ```
///
/// [`Rectangle`]: crate::Rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dimension {
    field: Field,
    value: u64,
}

impl Dimension {
    #[inline]
    pub(crate) const fn new(field: Field, value: u64) -> Self {
        Self { field, value }
    }

    /// The field this dimension describes.
    #[inline]
    pub const fn field(&self) -> Field {
        self.field
    }

    /// The key of the entry.
    #[inline]
    pub const fn key(&self) -> &'static str {
        self.field.name()
    }

    /// The value of the entry.
    #[inline]
    pub const fn value(&self) -> u64 {
        self.value
    }

    /// Get the entry as a key-value pair.
    #[inline]
    pub const fn as_pair(&self) -> (&'static str, u64) {
        (self.key(), self.value)
    }

    /// Materialize the dimension as a one-entry map.
    ///
    /// # Examples
    ///
    /// ```
    /// use shape::Rectangle;
    ///
    /// let rect = Rectangle::new(5, 3)?;
    /// let maps = rect.dimensions().map(|d| d.to_map()).collect::<Vec<_>>();
    ///
    /// assert_eq!(maps.len(), 2);
    /// assert_eq!(maps[0].get("length"), Some(&5));
    /// assert_eq!(maps[1].get("width"), Some(&3));
    /// # Ok::<_, shape::Error>(())
    /// ```
    #[cfg(feature = "alloc")]
    pub fn to_map(&self) -> BTreeMap<&'static str, u64> {
        let mut map = BTreeMap::new();
        map.insert(self.key(), self.value);
        map
    }
}

impl fmt::Display for Dimension {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{'{}': {}}}", self.key(), self.value)
    }
}

impl From<Dimension> for (&'static str, u64) {
    #[inline]
    fn from(dimension: Dimension) -> Self {
        dimension.as_pair()
    }
}

/// Iterator over the dimensions of a [`Rectangle`].
///
/// Always yields the length followed by the width.
///
/// See [`Rectangle::dimensions`].
///
/// [`Rectangle`]: crate::Rectangle
/// [`Rectangle::dimensions`]: crate::Rectangle::dimensions
#[derive(Debug, Clone)]
pub struct Dimensions {
    iter: array::IntoIter<Dimension, 2>,
}

impl Dimensions {
    #[inline]
    pub(crate) fn new(length: u64, width: u64) -> Self {
        let dimensions = [
            Dimension::new(Field::Length, length),
            Dimension::new(Field::Width, width),
        ];

        Self {
            iter: dimensions.into_iter(),
        }
    }
}

impl Iterator for Dimensions {
    type Item = Dimension;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl DoubleEndedIterator for Dimensions {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.iter.next_back()
    }
}

impl ExactSizeIterator for Dimensions {
    #[inline]
    fn len(&self) -> usize {
        self.iter.len()
    }
}

impl FusedIterator for Dimensions {}
