//! Geometry types shared by the frame store and its hosts.
//!
//! Sizes are logical: the core never sees a display scale factor. Hosts that
//! render at a different density convert before handing a target size in.

mod size;

pub use size::Size;
