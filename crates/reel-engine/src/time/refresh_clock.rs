use std::time::{Duration, Instant};

/// One display-refresh sample.
#[derive(Debug, Copy, Clone)]
pub struct RefreshTick {
    /// Time since the previous refresh, in seconds.
    pub elapsed: f32,

    /// Monotonic timestamp taken at the tick.
    pub now: Instant,

    /// Monotonic refresh counter.
    pub index: u64,
}

/// Periodic refresh source producing `RefreshTick` samples.
///
/// The clock does not sleep on its own; a host loop paces itself with
/// [`RefreshClock::remaining`] and then calls [`RefreshClock::tick`].
///
/// Elapsed time is clamped so a debugger pause or a suspended process does not
/// report a pathological gap. Consumers may clamp again with their own policy.
#[derive(Debug, Clone)]
pub struct RefreshClock {
    last: Instant,
    index: u64,
    interval: Duration,
    dt_min: Duration,
    dt_max: Duration,
}

impl RefreshClock {
    /// Creates a clock refreshing every `interval`, with default clamps.
    ///
    /// Clamp rationale:
    /// - minimum prevents zero-elapsed ticks from tight loops on some platforms
    /// - maximum bounds the gap reported after long stalls
    pub fn new(interval: Duration) -> Self {
        Self::with_clamps(interval, Duration::from_micros(100), Duration::from_millis(250))
    }

    /// Creates a clock refreshing at `hz` times per second.
    ///
    /// Rates whose period is not a positive, representable duration (zero,
    /// negative, NaN, subnormal) fall back to 60 Hz.
    pub fn from_hz(hz: f32) -> Self {
        let interval = Duration::try_from_secs_f32(1.0 / hz)
            .ok()
            .filter(|d| !d.is_zero())
            .unwrap_or_else(|| Duration::from_secs_f32(1.0 / 60.0));
        Self::new(interval)
    }

    /// Creates a clock with custom elapsed-time clamps.
    pub fn with_clamps(interval: Duration, dt_min: Duration, dt_max: Duration) -> Self {
        debug_assert!(dt_min <= dt_max);
        Self {
            last: Instant::now(),
            index: 0,
            interval,
            dt_min,
            dt_max,
        }
    }

    /// Nominal refresh interval.
    #[inline]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Resets the clock baseline.
    ///
    /// Useful when resuming from suspension.
    pub fn reset(&mut self) {
        self.last = Instant::now();
    }

    /// Time left until the next refresh is due, zero if already overdue.
    pub fn remaining(&self) -> Duration {
        self.remaining_at(Instant::now())
    }

    /// Like [`remaining`](Self::remaining) against an explicit timestamp.
    pub fn remaining_at(&self, now: Instant) -> Duration {
        let spent = now.saturating_duration_since(self.last);
        self.interval.saturating_sub(spent)
    }

    /// Advances the clock and returns a new `RefreshTick`.
    pub fn tick(&mut self) -> RefreshTick {
        self.tick_at(Instant::now())
    }

    /// Advances the clock to `now`.
    ///
    /// Timestamps earlier than the previous tick count as zero elapsed time
    /// (then clamped up to the minimum).
    pub fn tick_at(&mut self, now: Instant) -> RefreshTick {
        let dt = now
            .saturating_duration_since(self.last)
            .clamp(self.dt_min, self.dt_max);

        self.last = now;

        let tick = RefreshTick {
            elapsed: dt.as_secs_f32(),
            now,
            index: self.index,
        };

        self.index = self.index.wrapping_add(1);

        tick
    }
}

impl Default for RefreshClock {
    /// 60 Hz refresh.
    fn default() -> Self {
        Self::from_hz(60.0)
    }
}
