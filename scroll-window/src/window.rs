//! Pure window math for lists where every item has the same height.

use crate::{ViewportState, VisibleWindow};

/// Computes the visible slice of a `count`-item list.
///
/// - `start_index = floor(scroll_offset / item_height)`, clamped to `count`
/// - `end_index = min(start_index + ceil(viewport_height / item_height) + 1, count)`
/// - `offset_y = start_index * item_height`
/// - `total_height = count * item_height`
///
/// The extra row in `end_index` covers the partially visible row at the bottom edge.
/// `item_height` must be non-zero; a zero height is treated as `1` in release builds.
pub fn compute_window(viewport: ViewportState, count: usize) -> VisibleWindow {
    compute_window_with_overscan(viewport, count, 0)
}

/// Same as [`compute_window`], widened by `overscan` rows on both sides.
pub fn compute_window_with_overscan(
    viewport: ViewportState,
    count: usize,
    overscan: usize,
) -> VisibleWindow {
    if viewport.item_height == 0 {
        wwarn!("compute_window: zero item_height");
    }
    debug_assert!(viewport.item_height > 0, "item_height must be non-zero");
    let item_height = viewport.item_height.max(1) as u64;

    let first = viewport.scroll_offset / item_height;
    let start = usize::try_from(first).unwrap_or(usize::MAX).min(count);
    let rows = (viewport.viewport_height as u64).div_ceil(item_height);
    let rows = usize::try_from(rows).unwrap_or(usize::MAX);
    let end = start.saturating_add(rows).saturating_add(1).min(count);

    let start = start.saturating_sub(overscan);
    let end = end.saturating_add(overscan).min(count);

    VisibleWindow {
        start_index: start,
        end_index: end,
        offset_y: (start as u64).saturating_mul(item_height),
        total_height: (count as u64).saturating_mul(item_height),
    }
}
