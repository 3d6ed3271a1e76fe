// Example: persisting scroll position across sessions.
use scroll_window::{WindowOptions, Windower};

fn main() {
    let mut w = Windower::new(WindowOptions::new(10_000, 24));
    w.set_viewport_and_scroll(480, 36_000);
    let frame = w.frame_state();
    println!("saved frame={frame:?}");

    // The list shrank while the app was closed; restoring clamps the offset.
    let mut restored = Windower::new(WindowOptions::new(500, 24));
    restored.restore_frame_state(frame, 0);
    println!(
        "restored offset={} window={:?}",
        restored.scroll_offset(),
        restored.window()
    );
}
