pub mod format;
pub mod grid;
pub mod io;
pub mod rgb;
pub mod traits;
pub mod transposed;

pub use self::format::OutputFormat;
pub use self::grid::Picture;
pub use self::traits::{PictureView, PictureViewMut, Transpose};
pub use self::transposed::Transposed;
