use std::sync::Arc;

use super::{Bitmap, FrameStore, PlaybackClock, PlaybackConfig, RedrawSink};
use crate::coords::Size;
use crate::time::RefreshTick;

/// Display-side component: holds a frame store through its playback clock and
/// answers "what should be drawn now".
///
/// Hosts call [`on_refresh`](Self::on_refresh) from their refresh callback and
/// draw [`current_bitmap`](Self::current_bitmap) when the sink fires.
pub struct AnimatedView<S> {
    clock: PlaybackClock<S>,
}

impl<S: RedrawSink> AnimatedView<S> {
    pub fn new(store: Arc<FrameStore>, sink: S) -> Self {
        Self {
            clock: PlaybackClock::new(store, sink),
        }
    }

    pub fn with_config(store: Arc<FrameStore>, sink: S, config: PlaybackConfig) -> Self {
        Self {
            clock: PlaybackClock::with_config(store, sink, config),
        }
    }

    /// Bitmap to draw, `None` when the store has no frames.
    pub fn current_bitmap(&self) -> Option<&Bitmap> {
        self.clock.current_frame().map(|f| f.image())
    }

    #[inline]
    pub fn current_index(&self) -> usize {
        self.clock.current_index()
    }

    /// Size of the first frame; zero for an empty store.
    pub fn logical_size(&self) -> Size {
        self.clock.store().logical_size()
    }

    pub fn is_animated(&self) -> bool {
        self.clock.store().is_animated()
    }

    pub fn start_animating(&mut self) {
        self.clock.resume();
    }

    pub fn stop_animating(&mut self) {
        self.clock.pause();
    }

    pub fn is_animating(&self) -> bool {
        self.clock.is_playing()
    }

    /// Feeds one refresh sample to the clock. Returns `true` if a redraw was
    /// requested.
    pub fn on_refresh(&mut self, tick: &RefreshTick) -> bool {
        self.clock.tick(tick.elapsed)
    }

    /// Replaces the displayed image.
    ///
    /// The clock restarts at frame 0 with the same sink and config. Playback
    /// resumes only if it was running before and the new store is animated.
    pub fn set_store(&mut self, store: Arc<FrameStore>) {
        let was_playing = self.clock.is_playing();
        self.clock.rebind(store);
        if was_playing {
            self.clock.resume();
        }
    }

    pub fn clock(&self) -> &PlaybackClock<S> {
        &self.clock
    }

    pub fn store(&self) -> &Arc<FrameStore> {
        self.clock.store()
    }
}
