//! A validated rectangle whose dimensions can be traversed as one-entry
//! mappings.
//!
//! ```
//! use shape::Rectangle;
//!
//! let rect = Rectangle::new(5, 3)?;
//!
//! for dimension in &rect {
//!     println!("{dimension}");
//! }
//! # Ok::<_, shape::Error>(())
//! ```

#![no_std]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

#[cfg(all(test, feature = "alloc"))]
mod tests;

mod ty;
pub use self::ty::Type;

mod value;
pub use self::value::Value;

mod field;
pub use self::field::Field;

mod error;
pub use self::error::{Error, ErrorKind};

mod rectangle;
pub use self::rectangle::Rectangle;

mod dimension;
pub use self::dimension::{Dimension, Dimensions};
