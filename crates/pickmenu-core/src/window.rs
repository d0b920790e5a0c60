#![forbid(unsafe_code)]

//! Fixed-row virtual window arithmetic.
//!
//! All heights are in abstract units: pixels for a GUI host, cells for a
//! terminal host. Every size computation shares one fixed per-row height;
//! headings occupy exactly one row slot. The window never renders a
//! partial trailing row's worth of empty space: the effective viewport is
//! floored to the nearest row multiple that fits the host's height
//! budget.

use std::ops::Range;

use crate::rows::HeadingIndex;

/// Where a heading paints during the current frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingPlacement {
    /// Not yet due to stick: paint at its absolute content offset so it
    /// scrolls with the rows.
    Scrolling {
        /// Absolute offset of the heading from the top of the content.
        top: u32,
    },
    /// At or past the viewport top: paint pinned at the viewport top,
    /// stacking above normal rows.
    Pinned,
}

/// What a viewport coordinate resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowHit {
    /// A heading row (pinned or in normal flow).
    Heading(usize),
    /// An option row.
    Row(usize),
}

/// Viewport state for a fixed-row virtualized list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VirtualWindow {
    row_count: usize,
    row_height: u32,
    max_height: u32,
    overscan: usize,
    scroll_offset: u32,
}

impl VirtualWindow {
    /// Create a window over `row_count` rows of `row_height` units each,
    /// with `max_height` units of viewport budget.
    #[must_use]
    pub fn new(row_count: usize, row_height: u32, max_height: u32) -> Self {
        Self {
            row_count,
            row_height: row_height.max(1),
            max_height,
            overscan: 2,
            scroll_offset: 0,
        }
    }

    /// Set the overscan row count.
    #[must_use]
    pub fn with_overscan(mut self, overscan: usize) -> Self {
        self.overscan = overscan;
        self
    }

    /// Total number of rows.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.row_count
    }

    /// The shared fixed row height.
    #[must_use]
    pub fn row_height(&self) -> u32 {
        self.row_height
    }

    /// Whether there are no rows at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.row_count == 0
    }

    /// Current scroll offset in height units.
    #[must_use]
    pub fn scroll_offset(&self) -> u32 {
        self.scroll_offset
    }

    /// Full content height: `row_count * row_height`.
    #[must_use]
    pub fn content_height(&self) -> u32 {
        let total = self.row_count as u64 * self.row_height as u64;
        total.min(u32::MAX as u64) as u32
    }

    /// Effective rendered height: the content height, capped at the
    /// largest row multiple that fits the budget.
    #[must_use]
    pub fn viewport_height(&self) -> u32 {
        let floored = self.max_height - self.max_height % self.row_height;
        self.content_height().min(floored)
    }

    /// Largest valid scroll offset.
    #[must_use]
    pub fn max_scroll(&self) -> u32 {
        self.content_height().saturating_sub(self.viewport_height())
    }

    /// Set the scroll offset, clamped to the valid range.
    pub fn set_scroll(&mut self, offset: u32) {
        self.scroll_offset = offset.min(self.max_scroll());
    }

    /// Scroll by a signed delta in height units.
    pub fn scroll_by(&mut self, delta: i64) {
        let next = (self.scroll_offset as i64 + delta).max(0) as u64;
        self.scroll_offset = next.min(self.max_scroll() as u64) as u32;
    }

    /// Rows intersecting the viewport.
    #[must_use]
    pub fn visible_range(&self) -> Range<usize> {
        let viewport = self.viewport_height();
        if self.row_count == 0 || viewport == 0 {
            return 0..0;
        }
        let start = (self.scroll_offset / self.row_height) as usize;
        let bottom = self.scroll_offset as u64 + viewport as u64;
        let end = bottom.div_ceil(self.row_height as u64) as usize;
        start..end.min(self.row_count)
    }

    /// Visible rows widened by the overscan on both sides.
    #[must_use]
    pub fn render_range(&self) -> Range<usize> {
        let visible = self.visible_range();
        let start = visible.start.saturating_sub(self.overscan);
        let end = (visible.end + self.overscan).min(self.row_count);
        start..end
    }

    /// Placement of the heading at `index` for the current frame.
    ///
    /// A heading whose absolute top is still below the viewport top
    /// scrolls normally; once the viewport top reaches or passes it, it
    /// pins.
    #[must_use]
    pub fn heading_placement(&self, index: usize) -> HeadingPlacement {
        let top = (index as u64 * self.row_height as u64).min(u32::MAX as u64) as u32;
        if top > self.scroll_offset {
            HeadingPlacement::Scrolling { top }
        } else {
            HeadingPlacement::Pinned
        }
    }

    /// The heading currently pinned to the viewport top, if any.
    #[must_use]
    pub fn pinned_heading(&self, headings: &HeadingIndex) -> Option<usize> {
        headings
            .indices()
            .iter()
            .copied()
            .take_while(|&index| {
                matches!(self.heading_placement(index), HeadingPlacement::Pinned)
            })
            .last()
    }

    /// Scroll the minimum amount needed to bring `row` fully into view.
    ///
    /// A row already fully visible leaves the offset untouched.
    pub fn scroll_to_row(&mut self, row: usize) {
        if self.row_count == 0 {
            return;
        }
        let row = row.min(self.row_count - 1);
        let top = row as u64 * self.row_height as u64;
        let bottom = top + self.row_height as u64;
        let viewport = self.viewport_height() as u64;
        let offset = self.scroll_offset as u64;

        if top < offset {
            self.scroll_offset = top as u32;
        } else if bottom > offset + viewport {
            self.set_scroll(bottom.saturating_sub(viewport) as u32);
        }
    }

    /// The row index under a viewport-relative y coordinate, ignoring
    /// the pinned heading overlay.
    #[must_use]
    pub fn row_at(&self, viewport_y: u32) -> Option<usize> {
        if viewport_y >= self.viewport_height() {
            return None;
        }
        let index = ((self.scroll_offset as u64 + viewport_y as u64) / self.row_height as u64)
            as usize;
        (index < self.row_count).then_some(index)
    }

    /// Resolve a viewport-relative y coordinate to the row that would
    /// receive a click: the pinned heading if it covers the coordinate,
    /// otherwise the underlying flattened row.
    #[must_use]
    pub fn hit_test(&self, viewport_y: u32, headings: &HeadingIndex) -> Option<RowHit> {
        if viewport_y >= self.viewport_height() {
            return None;
        }
        if viewport_y < self.row_height
            && let Some(pinned) = self.pinned_heading(headings)
        {
            return Some(RowHit::Heading(pinned));
        }
        let index = self.row_at(viewport_y)?;
        if headings.contains(index) {
            Some(RowHit::Heading(index))
        } else {
            Some(RowHit::Row(index))
        }
    }
}
