//! Adapter utilities for the `scroll-window` crate.
//!
//! The `scroll-window` crate is UI-agnostic and focuses on the window math and state. This
//! crate provides small, framework-neutral helpers adapters need to feed it:
//!
//! - A trailing-edge [`Throttle`] that bounds how often scroll events trigger recomputation
//! - A [`Debounce`] for "settled" events (search input, resize end)
//! - A [`ScrollController`] tying a throttle to a `Windower`
//!
//! This crate is intentionally framework-agnostic (no DOM/ratatui/egui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod controller;
mod debounce;
mod throttle;


pub use controller::ScrollController;
pub use debounce::{Debounce, DebounceConfig};
pub use throttle::{Throttle, ThrottleConfig};
