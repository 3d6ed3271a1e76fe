//! A headless windowing engine for virtual scrolling over fixed-height lists.
//!
//! For throttled scroll handling and a frame-driven controller, see the
//! `scroll-window-adapter` crate.
//!
//! Rendering a list of a million rows only needs the handful of rows that intersect the
//! viewport. This crate computes that slice: the visible index range, the offset at which the
//! slice starts, and the full height of the scroll container.
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to provide:
//! - the item count and item height
//! - viewport height
//! - scroll offset
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod error;
mod options;
mod state;
mod types;
mod window;
mod windower;

#[cfg(test)]
mod tests;

pub use error::WindowError;
pub use options::{InitialOffset, OnChangeCallback, WindowOptions};
pub use state::{FrameState, ScrollState};
pub use types::{Align, ScrollDirection, ViewportState, VisibleWindow, WindowItem};
pub use window::{compute_window, compute_window_with_overscan};
pub use windower::Windower;
