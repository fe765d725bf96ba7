use crate::error::{PictureError, Result};

/// Read access to a grid of packed RGB pixels.
///
/// Implemented by [`Picture`](super::Picture), by
/// [`Transposed`](super::Transposed) views, and by references to either, so
/// consumers can be written once and run on both orientations.
pub trait PictureView {
    fn width(&self) -> u32;
    fn height(&self) -> u32;

    /// Packed `0x00RRGGBB` value at `(x, y)`.
    ///
    /// Panics when `(x, y)` lies outside the picture.
    fn get(&self, x: u32, y: u32) -> u32;

    fn dimensions(&self) -> (u32, u32) {
        (self.width(), self.height())
    }

    fn contains(&self, x: u32, y: u32) -> bool {
        x < self.width() && y < self.height()
    }

    /// Bounds-checked [`get`](PictureView::get).
    fn try_get(&self, x: u32, y: u32) -> Result<u32> {
        check_bounds(self, x, y)?;
        Ok(self.get(x, y))
    }
}

pub trait PictureViewMut: PictureView {
    /// Overwrite `(x, y)` with `rgb`; bits above the low 24 are dropped.
    ///
    /// Panics when `(x, y)` lies outside the picture.
    fn set(&mut self, x: u32, y: u32, rgb: u32);

    /// Bounds-checked [`set`](PictureViewMut::set).
    fn try_set(&mut self, x: u32, y: u32, rgb: u32) -> Result<()> {
        check_bounds(self, x, y)?;
        self.set(x, y, rgb);
        Ok(())
    }
}

/// Swap the roles of x and y.
///
/// Transposing a transposed view hands back the value it was built from, so
/// the operation is its own inverse.
pub trait Transpose {
    type Output;

    fn transposed(self) -> Self::Output;
}

fn check_bounds<V: PictureView + ?Sized>(view: &V, x: u32, y: u32) -> Result<()> {
    if view.contains(x, y) {
        Ok(())
    } else {
        let (width, height) = view.dimensions();
        Err(PictureError::OutOfRange {
            x,
            y,
            width,
            height,
        })
    }
}

impl<V: PictureView + ?Sized> PictureView for &V {
    #[inline]
    fn width(&self) -> u32 {
        (**self).width()
    }
    #[inline]
    fn height(&self) -> u32 {
        (**self).height()
    }
    #[inline]
    fn get(&self, x: u32, y: u32) -> u32 {
        (**self).get(x, y)
    }
}

impl<V: PictureView + ?Sized> PictureView for &mut V {
    #[inline]
    fn width(&self) -> u32 {
        (**self).width()
    }
    #[inline]
    fn height(&self) -> u32 {
        (**self).height()
    }
    #[inline]
    fn get(&self, x: u32, y: u32) -> u32 {
        (**self).get(x, y)
    }
}

impl<V: PictureViewMut + ?Sized> PictureViewMut for &mut V {
    #[inline]
    fn set(&mut self, x: u32, y: u32, rgb: u32) {
        (**self).set(x, y, rgb)
    }
}
