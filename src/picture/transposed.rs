use super::grid::Picture;
use super::traits::{PictureView, PictureViewMut, Transpose};
use crate::error::Result;

/// View over `P` with x and y exchanged.
///
/// Holds whatever it was built from (usually `&Picture` or `&mut Picture`)
/// and owns no pixels; reads and writes go straight to the underlying
/// storage. `width`/`height` report the inner view's `height`/`width`.
#[derive(Clone, Copy, Debug)]
pub struct Transposed<P> {
    inner: P,
}

impl<P> Transposed<P> {
    pub fn new(inner: P) -> Self {
        Self { inner }
    }

    /// Undo the transposition, returning the original view.
    pub fn transposed(self) -> P {
        self.inner
    }
}

impl<P: PictureView + Sync> Transposed<P> {
    /// Copy the view into a new picture laid out in transposed order.
    pub fn to_picture(&self) -> Result<Picture> {
        Picture::from_view(self)
    }
}

impl<P: PictureView> PictureView for Transposed<P> {
    #[inline]
    fn width(&self) -> u32 {
        self.inner.height()
    }
    #[inline]
    fn height(&self) -> u32 {
        self.inner.width()
    }
    #[inline]
    fn get(&self, x: u32, y: u32) -> u32 {
        self.inner.get(y, x)
    }
}

impl<P: PictureViewMut> PictureViewMut for Transposed<P> {
    #[inline]
    fn set(&mut self, x: u32, y: u32, rgb: u32) {
        self.inner.set(y, x, rgb)
    }
}

impl<P> Transpose for Transposed<P> {
    type Output = P;

    fn transposed(self) -> P {
        self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PictureError;

    fn numbered(width: u32, height: u32) -> Picture {
        let mut pic = Picture::new(width, height).unwrap();
        for y in 0..height {
            for x in 0..width {
                pic.set(x, y, y * width + x);
            }
        }
        pic
    }

    #[test]
    fn view_swaps_coordinates_and_dimensions() {
        let pic = numbered(5, 3);
        let view = pic.transposed();
        assert_eq!(view.dimensions(), (3, 5));
        for y in 0..5 {
            for x in 0..3 {
                assert_eq!(view.get(x, y), pic.get(y, x));
            }
        }
    }

    #[test]
    fn double_transpose_returns_same_picture() {
        let pic = numbered(4, 2);
        assert!(std::ptr::eq(pic.transposed().transposed(), &pic));
        assert!(std::ptr::eq(Transpose::transposed(pic.transposed()), &pic));
    }

    #[test]
    fn writes_through_view_reach_owner() {
        let mut pic = Picture::new(3, 2).unwrap();
        {
            let mut view = pic.transposed_mut();
            view.set(1, 2, 0x00AB_CDEF);
            assert_eq!(view.get(1, 2), 0x00AB_CDEF);
        }
        assert_eq!(pic.get(2, 1), 0x00AB_CDEF);
    }

    #[test]
    fn view_bounds_follow_swapped_dimensions() {
        let pic = Picture::new(4, 1).unwrap();
        let view = pic.transposed();
        assert!(view.try_get(0, 3).is_ok());
        assert!(matches!(
            view.try_get(3, 0),
            Err(PictureError::OutOfRange {
                width: 1,
                height: 4,
                ..
            })
        ));
    }

    #[test]
    fn to_picture_materializes_transposed_layout() {
        let pic = numbered(3, 2);
        let copy = pic.transposed().to_picture().unwrap();
        assert_eq!((copy.width(), copy.height()), (2, 3));
        assert_eq!(copy.get(1, 2), pic.get(2, 1));
        assert_eq!(Picture::from_view(&copy.transposed()).unwrap(), pic);
    }
}
