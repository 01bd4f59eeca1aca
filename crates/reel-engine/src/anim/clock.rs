use std::sync::Arc;

use super::{Frame, FrameStore, RedrawSink};

/// Default catch-up clamp for a single tick, in seconds.
pub const DEFAULT_MAX_TIME_STEP: f32 = 1.0;

/// Playback tuning.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PlaybackConfig {
    /// Largest elapsed sample one tick will consume, in seconds. Bounds the
    /// jump after the tick source stalled or the host was suspended.
    pub max_time_step: f32,
}

impl PlaybackConfig {
    fn sanitized(self) -> Self {
        if self.max_time_step.is_finite() && self.max_time_step > 0.0 {
            self
        } else {
            log::warn!(
                "invalid max_time_step {}, using {DEFAULT_MAX_TIME_STEP}s",
                self.max_time_step
            );
            Self::default()
        }
    }
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            max_time_step: DEFAULT_MAX_TIME_STEP,
        }
    }
}

/// Playback state. Only meaningful for animated stores.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum PlaybackState {
    Paused,
    Playing,
}

/// Advances a current-frame pointer over a [`FrameStore`] from elapsed-time
/// samples.
///
/// Starts paused at frame 0. Each [`tick`](Self::tick) advances at most one
/// frame; unconsumed time stays in the accumulator and is worked off by later
/// ticks, one frame per tick. The redraw sink is notified once per tick that
/// changes the visible frame.
///
/// One clock per driving loop; it is not meant to be shared across threads.
pub struct PlaybackClock<S> {
    store: Arc<FrameStore>,
    sink: S,
    config: PlaybackConfig,
    current: usize,
    accumulator: f32,
    paused: bool,
}

impl<S: RedrawSink> PlaybackClock<S> {
    /// Binds a paused clock to `store`, notifying `sink` on frame changes.
    pub fn new(store: Arc<FrameStore>, sink: S) -> Self {
        Self::with_config(store, sink, PlaybackConfig::default())
    }

    pub fn with_config(store: Arc<FrameStore>, sink: S, config: PlaybackConfig) -> Self {
        Self {
            store,
            sink,
            config: config.sanitized(),
            current: 0,
            accumulator: 0.0,
            paused: true,
        }
    }

    /// Consumes `elapsed` seconds of refresh time.
    ///
    /// Returns `true` when the visible frame changed (and the sink was
    /// notified). No-op for static stores and while paused; a paused clock
    /// does not accumulate time.
    pub fn tick(&mut self, elapsed: f32) -> bool {
        if !self.store.is_animated() || self.paused {
            return false;
        }

        // Negative or NaN samples carry no time.
        let step = if elapsed > 0.0 {
            elapsed.min(self.config.max_time_step)
        } else {
            0.0
        };
        self.accumulator += step;

        // `current` stays below frame_count: the store is immutable and every
        // write to `current` below is reduced modulo frame_count.
        let frames = self.store.frames();
        let duration = frames[self.current].duration();
        if self.accumulator < duration {
            return false;
        }

        self.accumulator -= duration;
        self.current = (self.current + 1) % frames.len();
        log::trace!(
            "advanced to frame {} (carry {:.4}s)",
            self.current,
            self.accumulator
        );

        self.sink.invalidate();
        true
    }

    /// Freezes progress at the current position. Idempotent.
    pub fn pause(&mut self) {
        if !self.paused {
            log::trace!("pause at frame {}", self.current);
        }
        self.paused = true;
    }

    /// Continues from where playback was paused. No-op for static stores.
    pub fn resume(&mut self) {
        if !self.store.is_animated() {
            return;
        }
        if self.paused {
            log::trace!("resume at frame {}", self.current);
        }
        self.paused = false;
    }

    /// Binds the clock to a new store, back at frame 0 and paused.
    ///
    /// The sink is notified once since the visible image changed.
    pub fn rebind(&mut self, store: Arc<FrameStore>) {
        self.store = store;
        self.current = 0;
        self.accumulator = 0.0;
        self.paused = true;
        self.sink.invalidate();
    }

    #[inline]
    pub fn is_playing(&self) -> bool {
        !self.paused
    }

    pub fn state(&self) -> PlaybackState {
        if self.paused {
            PlaybackState::Paused
        } else {
            PlaybackState::Playing
        }
    }

    #[inline]
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Frame currently visible, `None` for an empty store.
    pub fn current_frame(&self) -> Option<&Frame> {
        self.store.frame_at(self.current)
    }

    /// Unconsumed elapsed time, in seconds.
    #[inline]
    pub fn accumulator(&self) -> f32 {
        self.accumulator
    }

    #[inline]
    pub fn store(&self) -> &Arc<FrameStore> {
        &self.store
    }

    #[inline]
    pub fn config(&self) -> PlaybackConfig {
        self.config
    }
}

impl<S> std::fmt::Debug for PlaybackClock<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlaybackClock")
            .field("frames", &self.store.frame_count())
            .field("current", &self.current)
            .field("accumulator", &self.accumulator)
            .field("paused", &self.paused)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
