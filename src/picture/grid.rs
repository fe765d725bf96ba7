//! Owned RGB picture backed by an `image::RgbImage`.
use super::format::OutputFormat;
use super::rgb;
use super::traits::{PictureView, PictureViewMut, Transpose};
use super::transposed::Transposed;
use crate::error::{PictureError, Result};
use image::{DynamicImage, Rgb, RgbImage};
use log::debug;
use rayon::prelude::*;
use std::path::Path;

/// A picture of 24-bit RGB pixels addressed as `(x, y)`.
///
/// Dimensions are fixed for the lifetime of the value. Pixel access outside
/// `0..width` x `0..height` panics; use [`PictureView::try_get`] or
/// [`PictureViewMut::try_set`] for a recoverable check.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Picture {
    image: RgbImage,
}

impl Picture {
    /// Construct a black picture of size `width x height`.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(PictureError::InvalidArgument { width, height });
        }
        Ok(Self {
            image: RgbImage::new(width, height),
        })
    }

    /// Decode a picture from disk. Any format `image` can read is accepted.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let decoded = image::open(path).map_err(|source| PictureError::Decode {
            path: path.to_path_buf(),
            source,
        })?;
        let picture = Self::from_dynamic(decoded)?;
        debug!(
            "Picture::open {} -> {}x{}",
            path.display(),
            picture.width(),
            picture.height()
        );
        Ok(picture)
    }

    /// Wrap an already decoded RGB buffer without copying it.
    pub fn from_image(image: RgbImage) -> Result<Self> {
        let (width, height) = image.dimensions();
        if width == 0 || height == 0 {
            return Err(PictureError::InvalidArgument { width, height });
        }
        Ok(Self { image })
    }

    /// Wrap a decoded image of any color type, converting it to RGB8.
    pub fn from_dynamic(image: DynamicImage) -> Result<Self> {
        Self::from_image(image.into_rgb8())
    }

    /// Copy any view into a new contiguous picture, filling rows in parallel.
    pub fn from_view<V: PictureView + Sync + ?Sized>(view: &V) -> Result<Self> {
        let (width, height) = view.dimensions();
        let mut picture = Self::new(width, height)?;
        let row_len = width as usize * 3;
        let buffer: &mut [u8] = &mut picture.image;
        buffer
            .par_chunks_mut(row_len)
            .enumerate()
            .for_each(|(y, row)| {
                for (x, px) in row.chunks_exact_mut(3).enumerate() {
                    px.copy_from_slice(&rgb::unpack(view.get(x as u32, y as u32)));
                }
            });
        debug!("Picture::from_view materialized {width}x{height}");
        Ok(picture)
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    #[inline]
    pub fn get(&self, x: u32, y: u32) -> u32 {
        let [r, g, b] = self.image.get_pixel(x, y).0;
        rgb::pack(r, g, b)
    }

    #[inline]
    pub fn set(&mut self, x: u32, y: u32, rgb: u32) {
        self.image.put_pixel(x, y, Rgb(rgb::unpack(rgb)));
    }

    /// Paint every pixel with `rgb`.
    pub fn fill(&mut self, rgb: u32) {
        let px = Rgb(rgb::unpack(rgb));
        self.image.pixels_mut().for_each(|p| *p = px);
    }

    /// Write the picture to `path`, replacing any existing file.
    ///
    /// The format follows the extension (`jpg` or `png`, any case). Other
    /// extensions fail with [`PictureError::UnsupportedFormat`] before the
    /// file system is touched.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let format = OutputFormat::from_path(path)?;
        self.image
            .save_with_format(path, format.into())
            .map_err(|source| PictureError::Encode {
                path: path.to_path_buf(),
                source,
            })?;
        debug!(
            "Picture::save {}x{} -> {} ({:?})",
            self.width(),
            self.height(),
            path.display(),
            format
        );
        Ok(())
    }

    /// Live view with x and y exchanged. No pixels are copied.
    pub fn transposed(&self) -> Transposed<&Self> {
        Transposed::new(self)
    }

    /// Writable view with x and y exchanged; writes land in `self`.
    pub fn transposed_mut(&mut self) -> Transposed<&mut Self> {
        Transposed::new(self)
    }

    pub fn as_image(&self) -> &RgbImage {
        &self.image
    }

    pub fn into_image(self) -> RgbImage {
        self.image
    }
}

impl PictureView for Picture {
    #[inline]
    fn width(&self) -> u32 {
        Picture::width(self)
    }
    #[inline]
    fn height(&self) -> u32 {
        Picture::height(self)
    }
    #[inline]
    fn get(&self, x: u32, y: u32) -> u32 {
        Picture::get(self, x, y)
    }
}

impl PictureViewMut for Picture {
    #[inline]
    fn set(&mut self, x: u32, y: u32, rgb: u32) {
        Picture::set(self, x, y, rgb)
    }
}

impl<'a> Transpose for &'a Picture {
    type Output = Transposed<&'a Picture>;

    fn transposed(self) -> Self::Output {
        Transposed::new(self)
    }
}

impl<'a> Transpose for &'a mut Picture {
    type Output = Transposed<&'a mut Picture>;

    fn transposed(self) -> Self::Output {
        Transposed::new(self)
    }
}
