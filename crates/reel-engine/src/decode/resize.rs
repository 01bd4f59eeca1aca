use image::imageops::{self, FilterType};

use crate::anim::{Bitmap, Resize};
use crate::coords::Size;

/// Scales bitmaps to the target size with `image::imageops::resize`.
///
/// Bitmaps already at the target pixel size pass through untouched, as do
/// all bitmaps when the target is empty or not finite.
#[derive(Debug, Copy, Clone)]
pub struct ImageResizer {
    pub filter: FilterType,
}

impl ImageResizer {
    pub fn new(filter: FilterType) -> Self {
        Self { filter }
    }
}

impl Default for ImageResizer {
    fn default() -> Self {
        Self::new(FilterType::Triangle)
    }
}

impl Resize for ImageResizer {
    fn resize(&self, bitmap: Bitmap, target: Size) -> Bitmap {
        let Some((w, h)) = target.to_pixels() else {
            log::warn!("ignoring invalid resize target {target:?}");
            return bitmap;
        };
        if bitmap.is_empty() || (bitmap.width(), bitmap.height()) == (w, h) {
            return bitmap;
        }
        Bitmap::from(imageops::resize(bitmap.as_image(), w, h, self.filter))
    }
}

/// Leaves every bitmap at its decoded size.
#[derive(Debug, Default, Copy, Clone)]
pub struct KeepSize;

impl Resize for KeepSize {
    fn resize(&self, bitmap: Bitmap, _target: Size) -> Bitmap {
        bitmap
    }
}
