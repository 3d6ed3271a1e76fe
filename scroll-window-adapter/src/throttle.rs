//! Fixed-cadence, trailing-edge rate limiting for high-frequency events.
//!
//! The throttle is driven by the adapter: call [`Throttle::push`] for every incoming event and
//! [`Throttle::poll`] once per frame/timer tick. Time is passed in explicitly as `now_ms`, so
//! the same code works with a wall clock, a frame counter or a test script.
//!
//! Semantics:
//! - The first event of a burst opens a window of `interval_ms`. Nothing is emitted until the
//!   window ends.
//! - At the end of each window the most recent pending value is emitted (never an aggregate),
//!   and the next window ends one interval after that emission, so emissions are always at
//!   least `interval_ms` apart even when `poll` runs late.
//! - A window that ends with nothing pending returns the throttle to idle.
//! - The last value of a burst is always delivered by a later `poll` (or `flush`).

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ThrottleConfig {
    /// Minimum distance between two emissions. `0` forwards every value immediately.
    pub interval_ms: u64,
}

impl Default for ThrottleConfig {
    fn default() -> Self {
        // One frame at 60Hz.
        Self { interval_ms: 16 }
    }
}

#[derive(Clone, Debug)]
pub struct Throttle<T> {
    config: ThrottleConfig,
    pending: Option<T>,
    window_end_ms: Option<u64>,
    emitted: u64,
}

impl<T> Throttle<T> {
    pub fn new(config: ThrottleConfig) -> Self {
        Self {
            config,
            pending: None,
            window_end_ms: None,
            emitted: 0,
        }
    }

    pub fn with_interval_ms(interval_ms: u64) -> Self {
        Self::new(ThrottleConfig { interval_ms })
    }

    pub fn config(&self) -> ThrottleConfig {
        self.config
    }

    pub fn set_config(&mut self, config: ThrottleConfig) {
        self.config = config;
    }

    pub fn is_idle(&self) -> bool {
        self.window_end_ms.is_none() && self.pending.is_none()
    }

    pub fn pending(&self) -> Option<&T> {
        self.pending.as_ref()
    }

    /// When the pending value becomes due, if any.
    pub fn next_deadline(&self) -> Option<u64> {
        self.pending.as_ref().and(self.window_end_ms)
    }

    /// Number of values emitted since construction.
    pub fn emitted_count(&self) -> u64 {
        self.emitted
    }

    /// Records an event. Returns the value to act on if the current window just ended.
    pub fn push(&mut self, value: T, now_ms: u64) -> Option<T> {
        self.expire_idle_window(now_ms);
        self.pending = Some(value);

        if self.config.interval_ms == 0 {
            return self.emit(now_ms);
        }
        match self.window_end_ms {
            None => {
                let end = now_ms.saturating_add(self.config.interval_ms);
                wtrace!(now_ms, window_end_ms = end, "Throttle: window opened");
                self.window_end_ms = Some(end);
                None
            }
            Some(end) if now_ms >= end => self.emit(now_ms),
            Some(_) => None,
        }
    }

    /// Emits the pending value once its window has ended.
    pub fn poll(&mut self, now_ms: u64) -> Option<T> {
        let end = self.window_end_ms?;
        if now_ms < end {
            return None;
        }
        if self.pending.is_none() {
            self.window_end_ms = None;
            return None;
        }
        self.emit(now_ms)
    }

    /// Emits the pending value immediately, regardless of the window.
    pub fn flush(&mut self) -> Option<T> {
        let value = self.pending.take()?;
        self.emitted = self.emitted.saturating_add(1);
        Some(value)
    }

    /// Drops the pending value and returns to idle.
    pub fn cancel(&mut self) {
        self.pending = None;
        self.window_end_ms = None;
    }

    fn expire_idle_window(&mut self, now_ms: u64) {
        if self.pending.is_none() && self.window_end_ms.is_some_and(|end| now_ms >= end) {
            self.window_end_ms = None;
        }
    }

    fn emit(&mut self, now_ms: u64) -> Option<T> {
        let value = self.pending.take()?;
        let interval = self.config.interval_ms;
        self.window_end_ms = (interval > 0).then(|| now_ms.saturating_add(interval));
        self.emitted = self.emitted.saturating_add(1);
        wtrace!(now_ms, emitted = self.emitted, "Throttle: emit");
        Some(value)
    }
}

impl<T> Default for Throttle<T> {
    fn default() -> Self {
        Self::new(ThrottleConfig::default())
    }
}
