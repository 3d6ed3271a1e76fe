// Example: minimal usage and scroll-to helper.
use scroll_window::{Align, ViewportState, WindowOptions, Windower, compute_window};

fn main() {
    let w = compute_window(ViewportState::new(520, 300, 50), 100);
    println!("pure window={w:?}");

    let mut w = Windower::new(WindowOptions::new(1_000_000, 20).with_overscan(3));
    w.set_viewport_and_scroll(600, 123_456);

    let mut items = Vec::new();
    w.collect_window_items(&mut items);
    println!("total_height={}", w.total_height());
    println!("window={:?}", w.window());
    println!("first_rendered={:?}", items.first());

    let off = w.scroll_to_index_offset(999_999, Align::End);
    w.set_scroll_offset_clamped(off);
    println!("after scroll_to_index: offset={}", w.scroll_offset());
}
