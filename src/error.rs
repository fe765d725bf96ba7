//! Error type shared by every fallible picture operation.
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PictureError {
    /// A picture must have at least one column and one row.
    #[error("picture dimensions must be positive, got {width}x{height}")]
    InvalidArgument { width: u32, height: u32 },

    #[error("failed to decode {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Only `.jpg` and `.png` targets can be written.
    #[error(
        "cannot save {}: extension {} is not jpg or png",
        path.display(),
        extension.as_deref().unwrap_or("<none>")
    )]
    UnsupportedFormat {
        path: PathBuf,
        extension: Option<String>,
    },

    #[error("failed to encode {}: {source}", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("pixel ({x}, {y}) is outside a {width}x{height} picture")]
    OutOfRange {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },
}

pub type Result<T> = std::result::Result<T, PictureError>;
