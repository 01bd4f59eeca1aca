//! Frame store and playback clock.
//!
//! Decode-then-drive:
//! - [`FrameStore`] is built once from an [`ImageSource`] and never mutated
//! - [`PlaybackClock`] owns the current-frame pointer, consumes elapsed time
//!   per refresh tick and notifies a [`RedrawSink`] when the frame changes
//! - [`AnimatedView`] composes the two for a display host

mod bitmap;
mod clock;
mod frame;
mod sink;
mod source;
mod store;
mod view;

pub use bitmap::Bitmap;
pub use clock::{DEFAULT_MAX_TIME_STEP, PlaybackClock, PlaybackConfig, PlaybackState};
pub use frame::{Frame, MIN_FRAME_DURATION};
pub use sink::{NoRedraw, RedrawSink};
pub use source::{ImageSource, Resize};
pub use store::FrameStore;
pub use view::AnimatedView;
