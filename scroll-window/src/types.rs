use core::ops::Range;

use crate::WindowError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Align {
    Start,
    Center,
    End,
    Auto,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollDirection {
    Forward,
    Backward,
}

/// Viewport measurements for a single render pass.
///
/// All values are in the same unit (pixels for GUIs, rows for TUIs).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewportState {
    pub scroll_offset: u64,
    pub viewport_height: u32,
    pub item_height: u32,
}

impl ViewportState {
    /// Builds a viewport without validation. `item_height` must be non-zero.
    pub const fn new(scroll_offset: u64, viewport_height: u32, item_height: u32) -> Self {
        Self {
            scroll_offset,
            viewport_height,
            item_height,
        }
    }

    /// Builds a viewport from untrusted measurements.
    pub fn try_new(
        scroll_offset: u64,
        viewport_height: u32,
        item_height: u32,
    ) -> Result<Self, WindowError> {
        if item_height == 0 {
            return Err(WindowError::ZeroItemHeight);
        }
        if viewport_height == 0 {
            return Err(WindowError::ZeroViewportHeight);
        }
        Ok(Self::new(scroll_offset, viewport_height, item_height))
    }
}

/// The slice of the list to render for one viewport.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisibleWindow {
    pub start_index: usize,
    pub end_index: usize, // exclusive
    /// Offset of `start_index` from the top of the list.
    pub offset_y: u64,
    /// Height of the full scroll container.
    pub total_height: u64,
}

impl VisibleWindow {
    pub fn is_empty(&self) -> bool {
        self.start_index >= self.end_index
    }

    pub fn len(&self) -> usize {
        self.end_index.saturating_sub(self.start_index)
    }

    pub fn indexes(&self) -> Range<usize> {
        self.start_index..self.end_index
    }

    pub fn contains(&self, index: usize) -> bool {
        self.start_index <= index && index < self.end_index
    }
}

/// Absolute placement of one rendered item.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WindowItem {
    pub index: usize,
    pub start: u64,
    pub size: u32,
}

impl WindowItem {
    pub fn end(&self) -> u64 {
        self.start.saturating_add(self.size as u64)
    }
}
