//! Reel engine crate.
//!
//! Decodes animated raster images into timed frames and advances a visible
//! frame in step with a display refresh signal. Rendering, windowing and file
//! loading belong to the host.

pub mod anim;
pub mod coords;
pub mod decode;
pub mod error;
pub mod logging;
pub mod time;

pub use anim::{AnimatedView, Frame, FrameStore, PlaybackClock, RedrawSink};
pub use error::DecodeError;
