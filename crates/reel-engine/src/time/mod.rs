//! Time subsystem.
//!
//! Stands in for the platform display-refresh signal without coupling to a
//! windowing runtime. Intended usage:
//! - one `RefreshClock` per driving loop
//! - call `tick()` once per refresh and feed `RefreshTick::elapsed` to the
//!   playback clocks that loop owns

mod refresh_clock;

pub use refresh_clock::{RefreshClock, RefreshTick};
