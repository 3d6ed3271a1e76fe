// Example: debounce keystrokes before filtering a list.
use scroll_window_adapter::{Debounce, DebounceConfig};

fn main() {
    let mut d = Debounce::new(DebounceConfig {
        delay_ms: 200,
        max_wait_ms: Some(600),
    });

    let keystrokes = [(0u64, "r"), (80, "ru"), (150, "rus"), (260, "rust")];
    let mut next = 0;
    for now_ms in 0..1_000u64 {
        while next < keystrokes.len() && keystrokes[next].0 == now_ms {
            d.push(keystrokes[next].1, now_ms);
            next += 1;
        }
        if let Some(query) = d.poll(now_ms) {
            println!("t={now_ms}ms search {query:?}");
        }
    }
}
