use scroll_window::{VisibleWindow, WindowOptions, Windower};

use crate::{Throttle, ThrottleConfig};

/// A framework-neutral controller that wraps a [`Windower`] and throttles scroll events.
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `on_viewport_height` / `on_scroll` when UI events occur
/// - `tick(now_ms)` each frame/timer tick (trailing scroll delivery and `is_scrolling` reset)
///
/// Every returned [`VisibleWindow`] is a recomputation; render it and position the items at
/// `offset_y` inside a container of `total_height`.
#[derive(Clone, Debug)]
pub struct ScrollController {
    w: Windower,
    throttle: Throttle<u64>,
    recomputes: u64,
}

impl ScrollController {
    pub fn new(options: WindowOptions, config: ThrottleConfig) -> Self {
        Self::from_windower(Windower::new(options), config)
    }

    pub fn from_windower(w: Windower, config: ThrottleConfig) -> Self {
        Self {
            w,
            throttle: Throttle::new(config),
            recomputes: 0,
        }
    }

    pub fn windower(&self) -> &Windower {
        &self.w
    }

    pub fn windower_mut(&mut self) -> &mut Windower {
        &mut self.w
    }

    pub fn into_windower(self) -> Windower {
        self.w
    }

    pub fn throttle(&self) -> &Throttle<u64> {
        &self.throttle
    }

    /// Number of window recomputations so far.
    pub fn recompute_count(&self) -> u64 {
        self.recomputes
    }

    /// Applies a viewport resize immediately and returns the new window.
    ///
    /// A taller viewport can shrink `max_scroll_offset`; the offset is re-clamped in the same
    /// update. An unchanged height is not a recomputation.
    pub fn on_viewport_height(&mut self, height: u32) -> VisibleWindow {
        if self.w.viewport_height() == height {
            return self.w.window();
        }
        self.w.batch_update(|w| {
            w.set_viewport_height(height);
            w.set_scroll_offset_clamped(w.scroll_offset());
        });
        self.recomputes = self.recomputes.saturating_add(1);
        self.w.window()
    }

    /// Call this when the UI reports a scroll offset change (e.g. user wheel/drag).
    ///
    /// Returns the recomputed window when the throttle lets the event through.
    pub fn on_scroll(&mut self, scroll_offset: u64, now_ms: u64) -> Option<VisibleWindow> {
        let offset = self.throttle.push(scroll_offset, now_ms)?;
        Some(self.apply(offset, now_ms))
    }

    /// Advances the controller.
    ///
    /// - Delivers a due trailing scroll offset and returns the recomputed window.
    /// - Runs `is_scrolling` reset.
    pub fn tick(&mut self, now_ms: u64) -> Option<VisibleWindow> {
        let out = self
            .throttle
            .poll(now_ms)
            .map(|offset| self.apply(offset, now_ms));
        self.w.update_scrolling(now_ms);
        out
    }

    /// Applies any pending scroll offset immediately.
    pub fn flush(&mut self, now_ms: u64) -> Option<VisibleWindow> {
        let offset = self.throttle.flush()?;
        Some(self.apply(offset, now_ms))
    }

    /// Drops any pending scroll offset; call when the hosting component goes away.
    pub fn teardown(&mut self) {
        self.throttle.cancel();
        self.w.set_is_scrolling(false);
    }

    fn apply(&mut self, offset: u64, now_ms: u64) -> VisibleWindow {
        wtrace!(offset, now_ms, "ScrollController: recompute");
        self.w.apply_scroll_event_clamped(offset, now_ms);
        self.recomputes = self.recomputes.saturating_add(1);
        self.w.window()
    }
}
