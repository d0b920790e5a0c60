#![forbid(unsafe_code)]

//! Group heading render slot.
//!
//! Multi-select headings are interactive group checkboxes; single-select
//! headings are plain labels over a divider rule.

use pickmenu_core::{Rect, SelectionState};

use crate::indicator::indicator_glyph;
use crate::style::{Style, StyleFlags};
use crate::{Buffer, Widget, draw_text_span, fill_area};

/// One group heading row of the menu list.
#[derive(Debug, Clone)]
pub struct GroupHeading<'a> {
    label: &'a str,
    state: SelectionState,
    multi: bool,
    disabled: bool,
    style: Style,
    disabled_style: Style,
}

impl<'a> GroupHeading<'a> {
    /// Create a heading for the given group label.
    pub fn new(label: &'a str) -> Self {
        Self {
            label,
            state: SelectionState::NoneSelected,
            multi: false,
            disabled: false,
            style: Style::new().attrs(StyleFlags::BOLD),
            disabled_style: Style::new().attrs(StyleFlags::DIM),
        }
    }

    /// Set the group's aggregate selection state.
    #[must_use]
    pub fn state(mut self, state: SelectionState) -> Self {
        self.state = state;
        self
    }

    /// Enable multi-select rendering (group checkbox).
    #[must_use]
    pub fn multi(mut self, multi: bool) -> Self {
        self.multi = multi;
        self
    }

    /// Render the checkbox as inert (show-selected mode is active).
    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set the base style.
    #[must_use]
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }
}

impl Widget for GroupHeading<'_> {
    fn render(&self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }

        let style = if self.multi && self.disabled {
            self.disabled_style.merge(&self.style)
        } else {
            self.style
        };
        // Headings paint opaquely: as the sticky overlay they must cover
        // whatever row scrolled underneath.
        fill_area(buf, area, style);

        let mut x = area.x;
        if self.multi {
            x = draw_text_span(
                buf,
                x,
                area.y,
                indicator_glyph(self.state),
                style,
                area.right(),
            );
            x = draw_text_span(buf, x, area.y, " ", style, area.right());
            draw_text_span(buf, x, area.y, self.label, style, area.right());
        } else {
            x = draw_text_span(buf, x, area.y, self.label, style, area.right());
            x = draw_text_span(buf, x, area.y, " ", style, area.right());
            // Divider rule to the row's right edge.
            while x < area.right() {
                x = draw_text_span(buf, x, area.y, "─", style, area.right());
            }
        }
    }
}
