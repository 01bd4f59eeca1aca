use super::Bitmap;
use crate::coords::Size;

/// Shortest duration a frame may have, in seconds.
///
/// Non-positive or non-finite durations are coerced to this value so the
/// playback clock always consumes time when it advances.
pub const MIN_FRAME_DURATION: f32 = 0.01;

/// One decoded bitmap plus how long it stays visible.
#[derive(Debug, Clone)]
pub struct Frame {
    image: Bitmap,
    duration: f32,
}

impl Frame {
    /// Creates a frame, coercing a degenerate `duration` (seconds) to
    /// [`MIN_FRAME_DURATION`].
    pub fn new(image: Bitmap, duration: f32) -> Self {
        Self {
            image,
            duration: sanitize_duration(duration),
        }
    }

    #[inline]
    pub fn image(&self) -> &Bitmap {
        &self.image
    }

    /// Display duration in seconds, always positive.
    #[inline]
    pub fn duration(&self) -> f32 {
        self.duration
    }

    #[inline]
    pub fn size(&self) -> Size {
        self.image.size()
    }

    #[inline]
    pub fn into_image(self) -> Bitmap {
        self.image
    }
}

fn sanitize_duration(duration: f32) -> f32 {
    if duration.is_finite() && duration > 0.0 {
        duration
    } else {
        log::warn!("frame duration {duration} is not positive, using {MIN_FRAME_DURATION}s");
        MIN_FRAME_DURATION
    }
}
