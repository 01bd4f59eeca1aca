use super::Bitmap;
use crate::coords::Size;

/// A decoded, multi-frame image as produced by a codec.
///
/// Indices are in `[0, frame_count())`. Implementations must not panic for an
/// index outside that range; they return a zero duration and an empty bitmap.
pub trait ImageSource {
    fn frame_count(&self) -> usize;

    /// Display duration of frame `index`, in seconds. May be degenerate
    /// (zero, negative); the frame store coerces it.
    fn duration(&self, index: usize) -> f32;

    /// Full-canvas pixels of frame `index`.
    fn bitmap(&self, index: usize) -> Bitmap;
}

/// Normalizes a frame bitmap to a logical target size.
pub trait Resize {
    fn resize(&self, bitmap: Bitmap, target: Size) -> Bitmap;
}

impl<T: ImageSource + ?Sized> ImageSource for &T {
    fn frame_count(&self) -> usize {
        (**self).frame_count()
    }

    fn duration(&self, index: usize) -> f32 {
        (**self).duration(index)
    }

    fn bitmap(&self, index: usize) -> Bitmap {
        (**self).bitmap(index)
    }
}

impl<F> Resize for F
where
    F: Fn(Bitmap, Size) -> Bitmap,
{
    fn resize(&self, bitmap: Bitmap, target: Size) -> Bitmap {
        self(bitmap, target)
    }
}
