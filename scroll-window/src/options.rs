use alloc::sync::Arc;

use crate::windower::Windower;

/// A callback fired when a windower state update occurs.
///
/// The second argument is `is_scrolling`.
pub type OnChangeCallback = Arc<dyn Fn(&Windower, bool) + Send + Sync>;

/// Initial scroll offset configuration.
#[derive(Clone)]
pub enum InitialOffset {
    /// A fixed initial offset.
    Value(u64),
    /// A lazily evaluated initial offset provider (called by `Windower::new`).
    Provider(Arc<dyn Fn() -> u64 + Send + Sync>),
}

impl InitialOffset {
    pub(crate) fn resolve(&self) -> u64 {
        match self {
            Self::Value(v) => *v,
            Self::Provider(f) => f(),
        }
    }
}

impl Default for InitialOffset {
    fn default() -> Self {
        Self::Value(0)
    }
}

impl core::fmt::Debug for InitialOffset {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Value(v) => f.debug_tuple("Value").field(v).finish(),
            Self::Provider(_) => f.write_str("Provider(..)"),
        }
    }
}

/// Configuration for [`crate::Windower`].
///
/// Cloning is cheap: callbacks are stored in `Arc`s, so adapters can tweak a field and call
/// `Windower::set_options` every frame.
#[derive(Clone)]
pub struct WindowOptions {
    pub count: usize,
    /// Height of every item in the scroll axis. Must be non-zero.
    pub item_height: u32,
    /// Rows rendered above and below the visible window.
    pub overscan: usize,
    /// Viewport height used until the adapter reports a measurement.
    pub initial_viewport_height: u32,
    pub initial_offset: InitialOffset,
    /// Optional callback fired when the windower's state changes.
    pub on_change: Option<OnChangeCallback>,
    /// How long after the last scroll event `is_scrolling` stays set.
    pub is_scrolling_reset_delay_ms: u64,
}

impl WindowOptions {
    pub fn new(count: usize, item_height: u32) -> Self {
        debug_assert!(item_height > 0, "item_height must be non-zero");
        Self {
            count,
            item_height,
            overscan: 0,
            initial_viewport_height: 0,
            initial_offset: InitialOffset::default(),
            on_change: None,
            is_scrolling_reset_delay_ms: 150,
        }
    }

    pub fn with_overscan(mut self, overscan: usize) -> Self {
        self.overscan = overscan;
        self
    }

    pub fn with_initial_viewport_height(mut self, height: u32) -> Self {
        self.initial_viewport_height = height;
        self
    }

    pub fn with_initial_offset(mut self, initial_offset: InitialOffset) -> Self {
        self.initial_offset = initial_offset;
        self
    }

    pub fn with_initial_offset_value(mut self, initial_offset: u64) -> Self {
        self.initial_offset = InitialOffset::Value(initial_offset);
        self
    }

    pub fn with_initial_offset_provider(
        mut self,
        initial_offset: impl Fn() -> u64 + Send + Sync + 'static,
    ) -> Self {
        self.initial_offset = InitialOffset::Provider(Arc::new(initial_offset));
        self
    }

    pub fn with_on_change(
        mut self,
        on_change: Option<impl Fn(&Windower, bool) + Send + Sync + 'static>,
    ) -> Self {
        self.on_change = on_change.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_is_scrolling_reset_delay_ms(mut self, delay_ms: u64) -> Self {
        self.is_scrolling_reset_delay_ms = delay_ms;
        self
    }
}

impl core::fmt::Debug for WindowOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("WindowOptions")
            .field("count", &self.count)
            .field("item_height", &self.item_height)
            .field("overscan", &self.overscan)
            .field("initial_viewport_height", &self.initial_viewport_height)
            .field("initial_offset", &self.initial_offset)
            .field(
                "is_scrolling_reset_delay_ms",
                &self.is_scrolling_reset_delay_ms,
            )
            .finish_non_exhaustive()
    }
}
