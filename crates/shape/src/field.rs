use core::fmt;

/// A named attribute of a [`Rectangle`].
///
/// [`Rectangle`]: crate::Rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// The `length` attribute.
    Length,
    /// The `width` attribute.
    Width,
}

impl Field {
    /// The key the field is reported under.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            Field::Length => "length",
            Field::Width => "width",
        }
    }
}

impl fmt::Display for Field {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
