#![forbid(unsafe_code)]

//! The virtualized menu list.
//!
//! Renders only the rows intersecting the scroll viewport, at one shared
//! fixed row height. Heading rows are excluded from the normal flow and
//! painted by a trailing overlay pass: a heading whose absolute position
//! is still below the viewport top scrolls with its group, and pins to
//! the top once the group scrolls past. Painting in ascending index
//! order makes the most recent heading win the pinned slot.

use pickmenu_core::{
    HeadingIndex, HeadingPlacement, MenuSession, Rect, Row, RowFlags, RowHit, SelectOption,
    SelectionSnapshot, VirtualWindow,
};

use crate::group_heading::GroupHeading;
use crate::option_row::OptionRow;
use crate::style::Style;
use crate::{Buffer, StatefulWidget, Widget};

/// The shared fixed row height, in cells.
pub const DEFAULT_ROW_HEIGHT: u16 = 1;

/// Mutable state for a [`MenuList`]: scroll position plus the focus the
/// previous render saw.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuListState {
    /// Scroll offset in height units; clamped during render.
    pub scroll_offset: u32,
    last_focused: Option<usize>,
}

impl MenuListState {
    /// Scroll by a signed delta in height units. The next render clamps
    /// to the valid range.
    pub fn scroll_by(&mut self, delta: i64) {
        let next = (self.scroll_offset as i64 + delta).max(0);
        self.scroll_offset = next.min(u32::MAX as i64) as u32;
    }
}

/// The virtualized, sticky-heading option list.
#[derive(Debug)]
pub struct MenuList<'a, T> {
    rows: &'a [Row<'a, T>],
    headings: &'a HeadingIndex,
    value: &'a [T],
    session: &'a MenuSession,
    focused: Option<usize>,
    row_height: u16,
    style: Style,
    highlight_style: Style,
}

impl<'a, T> MenuList<'a, T>
where
    T: SelectOption + PartialEq,
{
    /// Create a list over a flattened row sequence and its heading index.
    pub fn new(
        rows: &'a [Row<'a, T>],
        headings: &'a HeadingIndex,
        value: &'a [T],
        session: &'a MenuSession,
    ) -> Self {
        Self {
            rows,
            headings,
            value,
            session,
            focused: None,
            row_height: DEFAULT_ROW_HEIGHT,
            style: Style::default(),
            highlight_style: Style::default(),
        }
    }

    /// Set the index of the keyboard-focused row, if any.
    #[must_use]
    pub fn focused(mut self, focused: Option<usize>) -> Self {
        self.focused = focused;
        self
    }

    /// Set the fixed row height shared by every size computation.
    #[must_use]
    pub fn row_height(mut self, height: u16) -> Self {
        self.row_height = height.max(1);
        self
    }

    /// Set the base style.
    #[must_use]
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Set the style merged over the focused row.
    #[must_use]
    pub fn highlight_style(mut self, style: Style) -> Self {
        self.highlight_style = style;
        self
    }

    /// The virtual window this list would render with.
    #[must_use]
    pub fn window(&self, area: Rect, state: &MenuListState) -> VirtualWindow {
        let mut window =
            VirtualWindow::new(self.rows.len(), self.row_height as u32, area.height as u32);
        window.set_scroll(state.scroll_offset);
        window
    }

    /// Resolve a buffer coordinate to the row that would receive a
    /// click, honoring the pinned heading band.
    #[must_use]
    pub fn hit_test(&self, area: Rect, state: &MenuListState, x: u16, y: u16) -> Option<RowHit> {
        if !area.contains(x, y) {
            return None;
        }
        self.window(area, state)
            .hit_test((y - area.y) as u32, self.headings)
    }
}

impl<T> StatefulWidget for MenuList<'_, T>
where
    T: SelectOption + PartialEq,
{
    type State = MenuListState;

    fn render(&self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "widget_render",
            widget = "MenuList",
            x = area.x,
            y = area.y,
            w = area.width,
            h = area.height,
            rows = self.rows.len()
        )
        .entered();

        if area.is_empty() || self.rows.is_empty() {
            return;
        }

        let mut window = self.window(area, state);

        // Scroll-into-view on focus change only; an unfocused list keeps
        // whatever scroll position the user left it at.
        if self.focused != state.last_focused {
            if let Some(row) = self.focused {
                window.scroll_to_row(row);
            }
            state.last_focused = self.focused;
        }
        state.scroll_offset = window.scroll_offset();

        let viewport = window.viewport_height();
        if viewport == 0 {
            return;
        }
        let scroll = window.scroll_offset() as i64;
        let height = self.row_height as i64;

        for index in window.render_range() {
            // Heading slots render nothing in the normal flow; the
            // overlay below owns them.
            if self.headings.contains(index) {
                continue;
            }
            let Row::Option { option, .. } = self.rows[index] else {
                continue;
            };

            let top = index as i64 * height - scroll;
            if top < 0 || top >= viewport as i64 {
                continue;
            }
            let visible = (viewport as i64 - top).min(height) as u16;
            let row_area = Rect::new(area.x, area.y + top as u16, area.width, visible);

            let mut flags = RowFlags::empty();
            if self.value.contains(option) {
                flags |= RowFlags::SELECTED;
            }
            if option.is_disabled() {
                flags |= RowFlags::DISABLED;
            }
            if self.focused == Some(index) {
                flags |= RowFlags::FOCUSED;
            }

            OptionRow::new(option.label())
                .multi(self.session.is_multi())
                .flags(flags)
                .style(self.style)
                .highlight_style(self.highlight_style)
                .render(row_area, buf);
        }

        // Sticky overlay: headings scroll at their absolute offset until
        // the viewport top reaches them; of the headings already passed,
        // the most recent one owns the pinned slot. Painted after the
        // normal flow so it stacks above the rows.
        let paint_heading = |index: usize, top: i64, buf: &mut Buffer| {
            let Row::Heading { group, .. } = self.rows[index] else {
                return;
            };
            let visible = (viewport as i64 - top).min(height) as u16;
            let heading_area = Rect::new(area.x, area.y + top as u16, area.width, visible);
            let group_state = SelectionSnapshot::of_group(group, self.value, self.session.filter())
                .state();
            GroupHeading::new(group.label())
                .multi(self.session.is_multi())
                .state(group_state)
                .disabled(self.session.show_selected())
                .render(heading_area, buf);
        };

        for &index in self.headings.indices() {
            if let HeadingPlacement::Scrolling { top } = window.heading_placement(index) {
                let rel = top as i64 - scroll;
                if rel >= viewport as i64 {
                    break;
                }
                paint_heading(index, rel, buf);
            }
        }
        if let Some(index) = window.pinned_heading(self.headings) {
            paint_heading(index, 0, buf);
        }
    }
}
