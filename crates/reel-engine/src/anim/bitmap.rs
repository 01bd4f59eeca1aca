use image::RgbaImage;

use crate::coords::Size;

/// Owned RGBA8 pixel buffer for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Bitmap(RgbaImage);

impl Bitmap {
    /// A 0x0 bitmap.
    pub fn empty() -> Self {
        Self(RgbaImage::new(0, 0))
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.0.width()
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.0.height()
    }

    #[inline]
    pub fn size(&self) -> Size {
        Size::from_pixels(self.0.width(), self.0.height())
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.width() == 0 || self.0.height() == 0
    }

    /// Raw RGBA8 samples, row-major.
    #[inline]
    pub fn as_raw(&self) -> &[u8] {
        self.0.as_raw()
    }

    #[inline]
    pub fn as_image(&self) -> &RgbaImage {
        &self.0
    }

    #[inline]
    pub fn into_image(self) -> RgbaImage {
        self.0
    }
}

impl From<RgbaImage> for Bitmap {
    fn from(image: RgbaImage) -> Self {
        Self(image)
    }
}
