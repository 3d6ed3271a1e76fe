use alloc::sync::Arc;
use alloc::vec::Vec;
use core::cell::Cell;
use core::cmp;

use crate::window::{compute_window, compute_window_with_overscan};
use crate::{
    Align, FrameState, InitialOffset, ScrollDirection, ScrollState, ViewportState, VisibleWindow,
    WindowItem, WindowOptions,
};

/// A headless windowing engine for fixed-height lists.
///
/// This type is intentionally UI-agnostic:
/// - It does not hold any UI objects.
/// - Your adapter drives it by providing viewport height and scroll offsets.
/// - Rendering is exposed via the [`VisibleWindow`] and zero-allocation iteration
///   (`for_each_window_item`).
///
/// For throttled event handling, see the `scroll-window-adapter` crate.
#[derive(Clone, Debug)]
pub struct Windower {
    options: WindowOptions,
    viewport_height: u32,
    scroll_offset: u64,
    is_scrolling: bool,
    scroll_direction: Option<ScrollDirection>,
    last_scroll_event_ms: Option<u64>,

    notify_depth: Cell<usize>,
    notify_pending: Cell<bool>,
}

impl Windower {
    /// Creates a new windower from options.
    ///
    /// `options.initial_viewport_height` and `options.initial_offset` are applied immediately.
    pub fn new(options: WindowOptions) -> Self {
        wdebug!(
            count = options.count,
            item_height = options.item_height,
            overscan = options.overscan,
            "Windower::new"
        );
        Self {
            viewport_height: options.initial_viewport_height,
            scroll_offset: options.initial_offset.resolve(),
            is_scrolling: false,
            scroll_direction: None,
            last_scroll_event_ms: None,
            options,
            notify_depth: Cell::new(0),
            notify_pending: Cell::new(false),
        }
    }

    pub fn options(&self) -> &WindowOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: WindowOptions) {
        debug_assert!(options.item_height > 0, "item_height must be non-zero");
        self.options = options;
        wtrace!(
            count = self.options.count,
            item_height = self.options.item_height,
            overscan = self.options.overscan,
            "Windower::set_options"
        );
        self.notify();
    }

    /// Clones the current options, applies `f`, then delegates to `set_options`.
    pub fn update_options(&mut self, f: impl FnOnce(&mut WindowOptions)) {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_options(next);
    }

    pub fn set_on_change(
        &mut self,
        on_change: Option<impl Fn(&Windower, bool) + Send + Sync + 'static>,
    ) {
        self.options.on_change = on_change.map(|f| Arc::new(f) as _);
        self.notify();
    }

    /// Configuration only: read when a windower is built from these options, no `on_change`.
    pub fn set_initial_offset(&mut self, initial_offset: u64) {
        self.options.initial_offset = InitialOffset::Value(initial_offset);
    }

    /// Configuration only: read by the next `update_scrolling`, no `on_change`.
    pub fn set_is_scrolling_reset_delay_ms(&mut self, delay_ms: u64) {
        self.options.is_scrolling_reset_delay_ms = delay_ms;
    }

    fn notify_now(&self) {
        if let Some(cb) = &self.options.on_change {
            cb(self, self.is_scrolling);
        }
    }

    fn notify(&self) {
        if self.notify_depth.get() > 0 {
            self.notify_pending.set(true);
            return;
        }
        self.notify_now();
    }

    /// Batches multiple updates into a single `on_change` notification.
    ///
    /// On a typical frame an adapter updates the viewport height, the scroll offset and the
    /// `is_scrolling` state together. Without batching each setter triggers `on_change`.
    pub fn batch_update(&mut self, f: impl FnOnce(&mut Self)) {
        let depth = self.notify_depth.get();
        self.notify_depth.set(depth.saturating_add(1));

        f(self);

        let depth = self.notify_depth.get();
        debug_assert!(depth > 0, "notify_depth underflow");
        let next = depth.saturating_sub(1);
        self.notify_depth.set(next);

        if next == 0 && self.notify_pending.replace(false) {
            self.notify_now();
        }
    }

    pub fn count(&self) -> usize {
        self.options.count
    }

    pub fn set_count(&mut self, count: usize) {
        if self.options.count == count {
            return;
        }
        self.options.count = count;
        self.notify();
    }

    pub fn item_height(&self) -> u32 {
        self.options.item_height
    }

    pub fn set_item_height(&mut self, item_height: u32) {
        debug_assert!(item_height > 0, "item_height must be non-zero");
        if self.options.item_height == item_height {
            return;
        }
        self.options.item_height = item_height;
        self.notify();
    }

    pub fn overscan(&self) -> usize {
        self.options.overscan
    }

    pub fn set_overscan(&mut self, overscan: usize) {
        if self.options.overscan == overscan {
            return;
        }
        self.options.overscan = overscan;
        self.notify();
    }

    pub fn is_scrolling(&self) -> bool {
        self.is_scrolling
    }

    pub fn scroll_direction(&self) -> Option<ScrollDirection> {
        self.scroll_direction
    }

    pub fn set_is_scrolling(&mut self, is_scrolling: bool) {
        if self.is_scrolling == is_scrolling {
            return;
        }
        self.is_scrolling = is_scrolling;
        if !is_scrolling {
            self.scroll_direction = None;
            self.last_scroll_event_ms = None;
        }
        self.notify();
    }

    pub fn notify_scroll_event(&mut self, now_ms: u64) {
        self.last_scroll_event_ms = Some(now_ms);
        self.set_is_scrolling(true);
    }

    /// Clears `is_scrolling` once the reset delay has passed since the last scroll event.
    pub fn update_scrolling(&mut self, now_ms: u64) {
        if !self.is_scrolling {
            return;
        }
        let Some(last) = self.last_scroll_event_ms else {
            return;
        };
        if now_ms.saturating_sub(last) >= self.options.is_scrolling_reset_delay_ms {
            self.set_is_scrolling(false);
        }
    }

    pub fn viewport_height(&self) -> u32 {
        self.viewport_height
    }

    pub fn set_viewport_height(&mut self, height: u32) {
        if self.viewport_height == height {
            return;
        }
        self.viewport_height = height;
        self.notify();
    }

    pub fn scroll_offset(&self) -> u64 {
        self.scroll_offset
    }

    pub fn set_scroll_offset(&mut self, offset: u64) {
        if self.scroll_offset == offset {
            return;
        }
        let prev = self.scroll_offset;
        self.scroll_offset = offset;
        self.scroll_direction = match offset.cmp(&prev) {
            cmp::Ordering::Greater => Some(ScrollDirection::Forward),
            cmp::Ordering::Less => Some(ScrollDirection::Backward),
            cmp::Ordering::Equal => self.scroll_direction,
        };
        self.notify();
    }

    pub fn set_scroll_offset_clamped(&mut self, offset: u64) {
        let clamped = self.clamp_scroll_offset(offset);
        self.set_scroll_offset(clamped);
    }

    pub fn set_viewport_and_scroll(&mut self, viewport_height: u32, scroll_offset: u64) {
        self.batch_update(|w| {
            w.set_viewport_height(viewport_height);
            w.set_scroll_offset(scroll_offset);
        });
    }

    pub fn set_viewport_and_scroll_clamped(&mut self, viewport_height: u32, scroll_offset: u64) {
        self.batch_update(|w| {
            w.set_viewport_height(viewport_height);
            w.set_scroll_offset_clamped(scroll_offset);
        });
    }

    /// Applies a scroll offset reported by the UI layer (e.g. wheel/drag) and marks the
    /// windower as scrolling.
    pub fn apply_scroll_event(&mut self, offset: u64, now_ms: u64) {
        wtrace!(offset, now_ms, "apply_scroll_event");
        self.batch_update(|w| {
            w.set_scroll_offset(offset);
            w.notify_scroll_event(now_ms);
        });
    }

    /// Same as `apply_scroll_event`, but clamps the offset.
    pub fn apply_scroll_event_clamped(&mut self, offset: u64, now_ms: u64) {
        wtrace!(offset, now_ms, "apply_scroll_event_clamped");
        self.batch_update(|w| {
            w.set_scroll_offset_clamped(offset);
            w.notify_scroll_event(now_ms);
        });
    }

    /// Returns the measurements the window is computed from.
    pub fn viewport_state(&self) -> ViewportState {
        ViewportState::new(
            self.scroll_offset,
            self.viewport_height,
            self.options.item_height,
        )
    }

    pub fn scroll_state(&self) -> ScrollState {
        ScrollState {
            offset: self.scroll_offset,
            is_scrolling: self.is_scrolling,
        }
    }

    pub fn frame_state(&self) -> FrameState {
        FrameState {
            viewport_height: self.viewport_height,
            scroll: self.scroll_state(),
        }
    }

    /// Restores scroll state from a previously captured snapshot.
    ///
    /// When `scroll.is_scrolling` is `true`, this behaves like a scroll event at `now_ms`.
    pub fn restore_scroll_state(&mut self, scroll: ScrollState, now_ms: u64) {
        if scroll.is_scrolling {
            self.apply_scroll_event_clamped(scroll.offset, now_ms);
            return;
        }
        self.batch_update(|w| {
            w.set_scroll_offset_clamped(scroll.offset);
            w.set_is_scrolling(false);
        });
    }

    /// Restores viewport height and scroll state from a previously captured snapshot.
    pub fn restore_frame_state(&mut self, frame: FrameState, now_ms: u64) {
        self.batch_update(|w| {
            w.set_viewport_height(frame.viewport_height);
            w.restore_scroll_state(frame.scroll, now_ms);
        });
    }

    pub fn total_height(&self) -> u64 {
        (self.options.count as u64).saturating_mul(self.row())
    }

    pub fn max_scroll_offset(&self) -> u64 {
        self.total_height().saturating_sub(self.viewport_height as u64)
    }

    pub fn clamp_scroll_offset(&self, offset: u64) -> u64 {
        offset.min(self.max_scroll_offset())
    }

    /// The window to render: visible rows plus `overscan` on both sides.
    pub fn window(&self) -> VisibleWindow {
        self.window_for(self.scroll_offset, self.viewport_height)
    }

    /// The visible rows only (no overscan).
    pub fn visible_window(&self) -> VisibleWindow {
        if self.viewport_height == 0 {
            return self.empty_window();
        }
        compute_window(self.viewport_state(), self.options.count)
    }

    /// Computes the overscanned window for a hypothetical scroll offset and viewport height.
    pub fn window_for(&self, scroll_offset: u64, viewport_height: u32) -> VisibleWindow {
        if viewport_height == 0 {
            return self.empty_window();
        }
        let viewport = ViewportState::new(scroll_offset, viewport_height, self.options.item_height);
        compute_window_with_overscan(viewport, self.options.count, self.options.overscan)
    }

    fn empty_window(&self) -> VisibleWindow {
        VisibleWindow {
            start_index: 0,
            end_index: 0,
            offset_y: 0,
            total_height: self.total_height(),
        }
    }

    pub fn for_each_window_item(&self, mut f: impl FnMut(WindowItem)) {
        for i in self.window().indexes() {
            f(self.item(i));
        }
    }

    /// Collects the window's items into `out` (clears `out` first).
    ///
    /// This is a convenience wrapper around [`Self::for_each_window_item`]. For maximum
    /// performance, prefer `for_each_window_item` and reuse a scratch buffer in your adapter.
    pub fn collect_window_items(&self, out: &mut Vec<WindowItem>) {
        out.clear();
        self.for_each_window_item(|it| out.push(it));
    }

    /// Maps an offset to the item covering it, clamping past the end to the last item.
    pub fn index_at_offset(&self, offset: u64) -> Option<usize> {
        let count = self.options.count;
        if count == 0 {
            return None;
        }
        let index = usize::try_from(offset / self.row()).unwrap_or(usize::MAX);
        Some(index.min(count - 1))
    }

    pub fn item_start(&self, index: usize) -> Option<u64> {
        (index < self.options.count).then(|| self.item(index).start)
    }

    pub fn item_end(&self, index: usize) -> Option<u64> {
        (index < self.options.count).then(|| self.item(index).end())
    }

    /// Programmatically scrolls to an index (no animation).
    ///
    /// This does **not** mark the windower as scrolling. Returns the applied (clamped) offset.
    pub fn scroll_to_index(&mut self, index: usize, align: Align) -> u64 {
        let offset = self.scroll_to_index_offset(index, align);
        self.set_scroll_offset(offset);
        offset
    }

    pub fn scroll_to_index_offset(&self, index: usize, align: Align) -> u64 {
        if self.options.count == 0 {
            return 0;
        }
        let index = index.min(self.options.count - 1);
        let item = self.item(index);
        let view = self.viewport_height as u64;

        let target = match align {
            Align::Start => item.start,
            Align::End => item.end().saturating_sub(view),
            Align::Center => {
                let center = item.start.saturating_add(item.size as u64 / 2);
                center.saturating_sub(view / 2)
            }
            Align::Auto => {
                let cur = self.scroll_offset;
                let cur_end = cur.saturating_add(view);
                if item.start >= cur && item.end() <= cur_end {
                    cur
                } else if item.start < cur {
                    item.start
                } else {
                    item.end().saturating_sub(view)
                }
            }
        };

        self.clamp_scroll_offset(target)
    }

    fn item(&self, index: usize) -> WindowItem {
        WindowItem {
            index,
            start: (index as u64).saturating_mul(self.row()),
            size: self.options.item_height,
        }
    }

    fn row(&self) -> u64 {
        self.options.item_height.max(1) as u64
    }
}
