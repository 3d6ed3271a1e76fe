/// Debounce settings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DebounceConfig {
    /// Quiet period required before a value is delivered.
    pub delay_ms: u64,
    /// Upper bound on how long a burst can postpone delivery.
    pub max_wait_ms: Option<u64>,
}

impl Default for DebounceConfig {
    fn default() -> Self {
        Self {
            delay_ms: 150,
            max_wait_ms: None,
        }
    }
}

/// Delivers the last value of a burst once input has been quiet for `delay_ms`.
///
/// Like [`crate::Throttle`], this is adapter-driven: `push` on every event, `poll` on every tick.
#[derive(Clone, Debug)]
pub struct Debounce<T> {
    config: DebounceConfig,
    pending: Option<T>,
    deadline_ms: Option<u64>,
    burst_start_ms: Option<u64>,
}

impl<T> Debounce<T> {
    pub fn new(config: DebounceConfig) -> Self {
        Self {
            config,
            pending: None,
            deadline_ms: None,
            burst_start_ms: None,
        }
    }

    pub fn with_delay_ms(delay_ms: u64) -> Self {
        Self::new(DebounceConfig {
            delay_ms,
            max_wait_ms: None,
        })
    }

    pub fn config(&self) -> DebounceConfig {
        self.config
    }

    pub fn pending(&self) -> Option<&T> {
        self.pending.as_ref()
    }

    pub fn next_deadline(&self) -> Option<u64> {
        self.deadline_ms
    }

    pub fn push(&mut self, value: T, now_ms: u64) {
        self.pending = Some(value);
        let burst_start = *self.burst_start_ms.get_or_insert(now_ms);
        let mut deadline = now_ms.saturating_add(self.config.delay_ms);
        if let Some(max_wait) = self.config.max_wait_ms {
            deadline = deadline.min(burst_start.saturating_add(max_wait));
        }
        self.deadline_ms = Some(deadline);
        wtrace!(now_ms, deadline_ms = deadline, "Debounce: push");
    }

    pub fn poll(&mut self, now_ms: u64) -> Option<T> {
        let deadline = self.deadline_ms?;
        if now_ms < deadline {
            return None;
        }
        wtrace!(now_ms, deadline_ms = deadline, "Debounce: emit");
        self.flush()
    }

    /// Delivers the pending value immediately.
    pub fn flush(&mut self) -> Option<T> {
        self.deadline_ms = None;
        self.burst_start_ms = None;
        self.pending.take()
    }

    pub fn cancel(&mut self) {
        self.pending = None;
        self.deadline_ms = None;
        self.burst_start_ms = None;
    }
}

impl<T> Default for Debounce<T> {
    fn default() -> Self {
        Self::new(DebounceConfig::default())
    }
}
