#![doc = include_str!("../README.md")]

pub mod config;
pub mod error;
pub mod picture;

// --- High-level re-exports -------------------------------------------------

pub use crate::error::{PictureError, Result};
pub use crate::picture::{OutputFormat, Picture, Transposed};

// --- Prelude ---------------------------------------------------------------

/// Everything needed to read, write and transpose pictures.
///
/// ```no_run
/// use seamfinding::prelude::*;
///
/// # fn main() -> seamfinding::Result<()> {
/// let mut pic = Picture::new(3, 2)?;
/// pic.set(2, 0, 0xFF0000);
///
/// let view = pic.transposed();
/// assert_eq!(view.get(0, 2), 0xFF0000);
/// assert_eq!(view.width(), 2);
///
/// pic.save("out.png")?;
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::picture::rgb;
    pub use crate::picture::{PictureView, PictureViewMut, Transpose};
    pub use crate::{OutputFormat, Picture, PictureError, Transposed};
}
