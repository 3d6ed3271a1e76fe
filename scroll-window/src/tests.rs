use crate::*;

use alloc::sync::Arc;
use alloc::vec::Vec;
use core::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

#[derive(Clone, Copy, Debug)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u64(&mut self) -> u64 {
        // Deterministic, dependency-free PRNG for tests.
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0
    }

    fn gen_range_u64(&mut self, start: u64, end_exclusive: u64) -> u64 {
        debug_assert!(start < end_exclusive);
        let span = end_exclusive - start;
        start + (self.next_u64() % span)
    }

    fn gen_range_usize(&mut self, start: usize, end_exclusive: usize) -> usize {
        self.gen_range_u64(start as u64, end_exclusive as u64) as usize
    }

    fn gen_range_u32(&mut self, start: u32, end_exclusive: u32) -> u32 {
        self.gen_range_u64(start as u64, end_exclusive as u64) as u32
    }
}

/// Walks rows one by one instead of dividing.
fn expected_window(viewport: ViewportState, count: usize, overscan: usize) -> VisibleWindow {
    let h = viewport.item_height as u64;

    let mut start = 0usize;
    while start < count && (start as u64 + 1) * h <= viewport.scroll_offset {
        start += 1;
    }
    let mut rows = 0usize;
    while (rows as u64) * h < viewport.viewport_height as u64 {
        rows += 1;
    }
    let end = core::cmp::min(start + rows + 1, count);

    let start = start.saturating_sub(overscan);
    let end = core::cmp::min(end + overscan, count);
    VisibleWindow {
        start_index: start,
        end_index: end,
        offset_y: start as u64 * h,
        total_height: count as u64 * h,
    }
}

fn counting_options(count: usize, item_height: u32, calls: Arc<AtomicUsize>) -> WindowOptions {
    WindowOptions::new(count, item_height).with_on_change(Some(move |_: &Windower, _: bool| {
        calls.fetch_add(1, Ordering::SeqCst);
    }))
}

#[test]
fn reference_example_window() {
    let w = compute_window(ViewportState::new(520, 300, 50), 100);
    assert_eq!(
        w,
        VisibleWindow {
            start_index: 10,
            end_index: 17,
            offset_y: 500,
            total_height: 5000,
        }
    );
    assert_eq!(w.len(), 7);
    assert!(w.contains(16));
    assert!(!w.contains(17));
}

#[test]
fn offset_on_row_boundary_starts_at_that_row() {
    let w = compute_window(ViewportState::new(500, 300, 50), 100);
    assert_eq!(w.start_index, 10);
    assert_eq!(w.end_index, 17);
    assert_eq!(w.offset_y, 500);
}

#[test]
fn window_at_top_includes_one_extra_row() {
    // 30 / 10 = 3 rows exactly, plus the partially visible one.
    let w = compute_window(ViewportState::new(0, 30, 10), 100);
    assert_eq!(w.indexes(), 0..4);
    assert_eq!(w.offset_y, 0);
}

#[test]
fn window_is_clamped_to_the_end_of_the_list() {
    let w = compute_window(ViewportState::new(95, 30, 10), 10);
    assert_eq!(w.start_index, 9);
    assert_eq!(w.end_index, 10);

    // Scrolled past the end: empty window anchored at `count`.
    let w = compute_window(ViewportState::new(500, 30, 10), 10);
    assert_eq!(w.start_index, 10);
    assert_eq!(w.end_index, 10);
    assert!(w.is_empty());
    assert_eq!(w.offset_y, 100);
    assert_eq!(w.total_height, 100);
}

#[test]
fn empty_list_yields_empty_window() {
    let w = compute_window(ViewportState::new(0, 300, 50), 0);
    assert_eq!(w, VisibleWindow::default());
}

#[test]
fn overscan_widens_both_sides() {
    let w = compute_window_with_overscan(ViewportState::new(520, 300, 50), 100, 2);
    assert_eq!(w.start_index, 8);
    assert_eq!(w.end_index, 19);
    assert_eq!(w.offset_y, 400);
    assert_eq!(w.total_height, 5000);
}

#[test]
fn overscan_saturates_at_list_edges() {
    let top = compute_window_with_overscan(ViewportState::new(0, 30, 10), 100, 5);
    assert_eq!(top.indexes(), 0..9);

    let bottom = compute_window_with_overscan(ViewportState::new(970, 30, 10), 100, 5);
    assert_eq!(bottom.indexes(), 92..100);
    assert_eq!(bottom.offset_y, 920);
}

#[test]
fn huge_offsets_do_not_overflow() {
    let viewport = ViewportState::new(u64::MAX, u32::MAX, 1);
    let w = compute_window_with_overscan(viewport, usize::MAX, 3);
    assert!(w.start_index <= w.end_index);
    assert_eq!(w.end_index, usize::MAX);
}

#[cfg(debug_assertions)]
#[test]
#[should_panic(expected = "item_height must be non-zero")]
fn zero_item_height_is_a_contract_violation() {
    let _ = compute_window(ViewportState::new(0, 10, 0), 10);
}

#[test]
fn try_new_rejects_degenerate_measurements() {
    assert_eq!(
        ViewportState::try_new(0, 100, 0),
        Err(WindowError::ZeroItemHeight)
    );
    assert_eq!(
        ViewportState::try_new(0, 0, 10),
        Err(WindowError::ZeroViewportHeight)
    );
    assert_eq!(
        ViewportState::try_new(7, 100, 10),
        Ok(ViewportState::new(7, 100, 10))
    );
    assert_eq!(
        std::format!("{}", WindowError::ZeroItemHeight),
        "item height must be greater than zero"
    );
}

#[test]
fn randomized_windows_match_row_walk() {
    let mut rng = Lcg::new(0x5eed_0001);
    for _ in 0..500 {
        let count = rng.gen_range_usize(0, 300);
        let item_height = rng.gen_range_u32(1, 40);
        let viewport_height = rng.gen_range_u32(1, 400);
        let total = count as u64 * item_height as u64;
        let scroll_offset = rng.gen_range_u64(0, total + 2);
        let overscan = rng.gen_range_usize(0, 4);

        let viewport = ViewportState::new(scroll_offset, viewport_height, item_height);
        assert_eq!(
            compute_window_with_overscan(viewport, count, overscan),
            expected_window(viewport, count, overscan),
            "viewport={viewport:?} count={count} overscan={overscan}"
        );
    }
}

#[test]
fn windower_window_tracks_scroll_and_viewport() {
    let mut w = Windower::new(WindowOptions::new(100, 10));
    // Not measured yet.
    assert!(w.window().is_empty());
    assert_eq!(w.window().total_height, 1000);

    w.set_viewport_height(50);
    assert_eq!(w.window().indexes(), 0..6);

    w.set_scroll_offset(200);
    assert_eq!(w.window().indexes(), 20..26);
    assert_eq!(w.window().offset_y, 200);
    assert_eq!(w.total_height(), 1000);
    assert_eq!(w.max_scroll_offset(), 950);
}

#[test]
fn windower_overscan_applies_to_window_but_not_visible_window() {
    let mut w = Windower::new(
        WindowOptions::new(100, 10)
            .with_overscan(2)
            .with_initial_viewport_height(50),
    );
    w.set_scroll_offset(200);
    assert_eq!(w.window().indexes(), 18..28);
    assert_eq!(w.window().offset_y, 180);
    assert_eq!(w.visible_window().indexes(), 20..26);
    assert_eq!(w.window_for(0, 50).indexes(), 0..8);
    assert!(w.window_for(0, 0).is_empty());
}

#[test]
fn window_items_are_positioned_absolutely() {
    let mut w = Windower::new(WindowOptions::new(100, 10));
    w.set_viewport_and_scroll(25, 15);

    let mut items = Vec::new();
    w.collect_window_items(&mut items);
    let indexes: Vec<usize> = items.iter().map(|it| it.index).collect();
    assert_eq!(indexes, [1, 2, 3, 4]);
    assert_eq!(items[0].start, w.window().offset_y);
    assert_eq!(items[3].start, 40);
    assert_eq!(items[3].end(), 50);
    assert!(items.iter().all(|it| it.size == 10));
}

#[test]
fn index_and_item_lookups() {
    let w = Windower::new(WindowOptions::new(100, 10));
    assert_eq!(w.index_at_offset(0), Some(0));
    assert_eq!(w.index_at_offset(9), Some(0));
    assert_eq!(w.index_at_offset(10), Some(1));
    assert_eq!(w.index_at_offset(5_000), Some(99));
    assert_eq!(w.item_start(3), Some(30));
    assert_eq!(w.item_end(3), Some(40));
    assert_eq!(w.item_start(100), None);
    assert_eq!(w.item_end(100), None);

    let empty = Windower::new(WindowOptions::new(0, 10));
    assert_eq!(empty.index_at_offset(0), None);
    assert_eq!(empty.max_scroll_offset(), 0);
}

#[test]
fn scroll_to_index_offset_respects_alignment() {
    let mut w = Windower::new(WindowOptions::new(100, 10).with_initial_viewport_height(50));
    assert_eq!(w.scroll_to_index_offset(30, Align::Start), 300);
    assert_eq!(w.scroll_to_index_offset(30, Align::End), 260);
    assert_eq!(w.scroll_to_index_offset(30, Align::Center), 280);
    // Clamped to max scroll offset.
    assert_eq!(w.scroll_to_index_offset(99, Align::Start), 950);
    assert_eq!(w.scroll_to_index_offset(1_000, Align::Start), 950);

    w.set_scroll_offset(300);
    // Fully visible: stay put.
    assert_eq!(w.scroll_to_index_offset(32, Align::Auto), 300);
    // Before the viewport: align to start.
    assert_eq!(w.scroll_to_index_offset(10, Align::Auto), 100);
    // After the viewport: align to end.
    assert_eq!(w.scroll_to_index_offset(40, Align::Auto), 360);

    let empty = Windower::new(WindowOptions::new(0, 10));
    assert_eq!(empty.scroll_to_index_offset(5, Align::Center), 0);
}

#[test]
fn scroll_to_index_does_not_mark_scrolling() {
    let mut w = Windower::new(WindowOptions::new(100, 10).with_initial_viewport_height(50));
    assert_eq!(w.scroll_to_index(40, Align::Start), 400);
    assert_eq!(w.scroll_offset(), 400);
    assert!(!w.is_scrolling());
    assert_eq!(w.scroll_direction(), Some(ScrollDirection::Forward));
}

#[test]
fn scroll_events_drive_direction_and_is_scrolling() {
    let mut w = Windower::new(
        WindowOptions::new(100, 10)
            .with_initial_viewport_height(50)
            .with_is_scrolling_reset_delay_ms(150),
    );
    w.apply_scroll_event(100, 1_000);
    assert!(w.is_scrolling());
    assert_eq!(w.scroll_direction(), Some(ScrollDirection::Forward));

    w.apply_scroll_event(40, 1_050);
    assert_eq!(w.scroll_direction(), Some(ScrollDirection::Backward));

    w.update_scrolling(1_150);
    assert!(w.is_scrolling());
    w.update_scrolling(1_200);
    assert!(!w.is_scrolling());
    assert_eq!(w.scroll_direction(), None);
}

#[test]
fn clamped_scroll_event_stays_in_bounds() {
    let mut w = Windower::new(WindowOptions::new(10, 10).with_initial_viewport_height(30));
    w.apply_scroll_event_clamped(10_000, 0);
    assert_eq!(w.scroll_offset(), 70);
    assert_eq!(w.window().indexes(), 7..10);
}

#[test]
fn batch_update_coalesces_notifications() {
    let calls = Arc::new(AtomicUsize::new(0));
    let mut w = Windower::new(counting_options(100, 10, Arc::clone(&calls)));
    assert_eq!(calls.load(Ordering::SeqCst), 0);

    w.apply_scroll_event(100, 0);
    assert_eq!(calls.load(Ordering::SeqCst), 1);

    w.set_viewport_and_scroll(50, 10);
    assert_eq!(calls.load(Ordering::SeqCst), 2);

    w.batch_update(|w| {
        w.set_overscan(3);
        w.batch_update(|w| w.set_count(200));
        w.set_item_height(20);
    });
    assert_eq!(calls.load(Ordering::SeqCst), 3);
    assert_eq!(w.total_height(), 4_000);
}

#[test]
fn unchanged_setters_do_not_notify() {
    let calls = Arc::new(AtomicUsize::new(0));
    let mut w = Windower::new(counting_options(100, 10, Arc::clone(&calls)));
    w.set_count(100);
    w.set_item_height(10);
    w.set_overscan(0);
    w.set_viewport_height(0);
    w.set_scroll_offset(0);
    w.set_is_scrolling(false);
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn on_change_reports_is_scrolling() {
    let seen = Arc::new(AtomicBool::new(false));
    let mut w = Windower::new(WindowOptions::new(100, 10));
    let seen_cb = Arc::clone(&seen);
    w.set_on_change(Some(move |_: &Windower, is_scrolling: bool| {
        seen_cb.store(is_scrolling, Ordering::SeqCst);
    }));

    w.apply_scroll_event(30, 0);
    assert!(seen.load(Ordering::SeqCst));
    w.update_scrolling(1_000);
    assert!(!seen.load(Ordering::SeqCst));
}

#[test]
fn reset_delay_is_configuration_only() {
    let calls = Arc::new(AtomicUsize::new(0));
    let mut w = Windower::new(counting_options(100, 10, Arc::clone(&calls)));
    w.apply_scroll_event(100, 0);
    assert_eq!(calls.load(Ordering::SeqCst), 1);

    w.set_is_scrolling_reset_delay_ms(500);
    w.set_initial_offset(40);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(w.scroll_offset(), 100);

    w.update_scrolling(150);
    assert!(w.is_scrolling());
    w.update_scrolling(500);
    assert!(!w.is_scrolling());
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[test]
fn update_options_replaces_configuration() {
    let mut w = Windower::new(WindowOptions::new(100, 10).with_initial_viewport_height(50));
    w.update_options(|o| {
        o.count = 20;
        o.item_height = 25;
        o.overscan = 1;
    });
    assert_eq!(w.count(), 20);
    assert_eq!(w.item_height(), 25);
    assert_eq!(w.overscan(), 1);
    assert_eq!(w.total_height(), 500);
    assert_eq!(w.window().indexes(), 0..4);
}

#[test]
fn initial_offset_and_viewport_are_applied() {
    let w = Windower::new(
        WindowOptions::new(100, 10)
            .with_initial_offset_provider(|| 70)
            .with_initial_viewport_height(20),
    );
    assert_eq!(w.scroll_offset(), 70);
    assert_eq!(w.viewport_height(), 20);
    assert_eq!(w.window().indexes(), 7..10);

    let w = Windower::new(WindowOptions::new(100, 10).with_initial_offset_value(33));
    assert_eq!(w.scroll_offset(), 33);
}

#[test]
fn frame_state_round_trips_through_restore() {
    let mut a = Windower::new(WindowOptions::new(100, 10));
    a.set_viewport_and_scroll(50, 120);
    let frame = a.frame_state();
    assert_eq!(frame.viewport_height, 50);
    assert_eq!(
        frame.scroll,
        ScrollState {
            offset: 120,
            is_scrolling: false,
        }
    );

    let mut b = Windower::new(WindowOptions::new(100, 10));
    b.restore_frame_state(frame, 0);
    assert_eq!(b.window(), a.window());
    assert!(!b.is_scrolling());

    b.restore_scroll_state(
        ScrollState {
            offset: 10_000,
            is_scrolling: true,
        },
        5,
    );
    assert_eq!(b.scroll_offset(), 950);
    assert!(b.is_scrolling());
}
