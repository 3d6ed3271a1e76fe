// Example: a 60fps frame loop fed by a noisy scroll wheel.
use scroll_window::WindowOptions;
use scroll_window_adapter::{ScrollController, ThrottleConfig};

fn main() {
    let mut c = ScrollController::new(
        WindowOptions::new(50_000, 18).with_overscan(4),
        ThrottleConfig::default(),
    );
    c.on_viewport_height(540);

    // Wheel events every 3ms, 40px each, for half a second.
    let mut offset = 0u64;
    for now_ms in 0..600u64 {
        if now_ms < 500 && now_ms % 3 == 0 {
            offset += 40;
            if let Some(w) = c.on_scroll(offset, now_ms) {
                println!("t={now_ms}ms scroll window={:?}", w.indexes());
            }
        }
        if let Some(w) = c.tick(now_ms) {
            println!("t={now_ms}ms tick window={:?} offset_y={}", w.indexes(), w.offset_y);
        }
    }

    println!(
        "recomputes={} final_offset={} scrolling={}",
        c.recompute_count(),
        c.windower().scroll_offset(),
        c.windower().is_scrolling()
    );
}
