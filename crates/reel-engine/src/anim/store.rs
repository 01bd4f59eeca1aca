use super::{Frame, ImageSource, Resize};
use crate::coords::Size;
use crate::decode::{DecodedImage, ImageResizer, KeepSize};
use crate::error::DecodeError;

/// Immutable, ordered frames of one animation plus their summed duration.
///
/// Built once (the expensive full decode) and never patched afterwards; a new
/// image means a new store. Share it behind an `Arc` to drive several
/// independently-clocked views from the same frames.
#[derive(Debug, Clone, Default)]
pub struct FrameStore {
    frames: Vec<Frame>,
    total_duration: f32,
}

impl FrameStore {
    /// A store without frames. Never animated.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a store from `source`, in source index order, normalizing each
    /// bitmap to `target` through `resizer`.
    pub fn build<S, R>(source: &S, target: Size, resizer: &R) -> Self
    where
        S: ImageSource + ?Sized,
        R: Resize + ?Sized,
    {
        let count = source.frame_count();
        let mut frames = Vec::with_capacity(count);

        for index in 0..count {
            let duration = source.duration(index);
            let bitmap = resizer.resize(source.bitmap(index), target);
            frames.push(Frame::new(bitmap, duration));
        }

        let store = Self::from_frames(frames);
        log::debug!(
            "built frame store: {} frames, {:.3}s total, animated={}",
            store.frame_count(),
            store.total_duration,
            store.is_animated()
        );
        store
    }

    /// Decodes `bytes` and builds a store from every frame.
    ///
    /// With `target = None` bitmaps keep their decoded size.
    pub fn decode(bytes: &[u8], target: Option<Size>) -> Result<Self, DecodeError> {
        let source = DecodedImage::open(bytes)?;
        let store = match target {
            Some(size) => Self::build(&source, size, &ImageResizer::default()),
            None => Self::build(&source, source.canvas_size(), &KeepSize),
        };
        Ok(store)
    }

    /// Wraps already-decoded frames, keeping their order.
    pub fn from_frames(frames: Vec<Frame>) -> Self {
        let total_duration = frames.iter().map(Frame::duration).sum();
        Self {
            frames,
            total_duration,
        }
    }

    /// Frame at `index`, or `None` past the end.
    #[inline]
    pub fn frame_at(&self, index: usize) -> Option<&Frame> {
        self.frames.get(index)
    }

    #[inline]
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    #[inline]
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Frame> {
        self.frames.iter()
    }

    /// Sum of all frame durations, in seconds.
    #[inline]
    pub fn total_duration(&self) -> f32 {
        self.total_duration
    }

    /// Whether playback can ever advance: more than one frame and a non-zero
    /// total duration. Single-frame and empty stores are static.
    #[inline]
    pub fn is_animated(&self) -> bool {
        self.frames.len() > 1 && self.total_duration != 0.0
    }

    /// Size of frame 0, or [`Size::ZERO`] for an empty store.
    pub fn logical_size(&self) -> Size {
        self.frames.first().map_or(Size::ZERO, Frame::size)
    }
}
