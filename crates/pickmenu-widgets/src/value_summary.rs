#![forbid(unsafe_code)]

//! Value summary render slot.
//!
//! A multi-select with anything selected shows `"<n> selected"` instead
//! of enumerating chips; otherwise the slot renders nothing and the host
//! paints its own placeholder or single value.

use pickmenu_core::Rect;

use crate::style::Style;
use crate::{Buffer, Widget, draw_text_span};

/// The `"<n> selected"` summary.
#[derive(Debug, Clone)]
pub struct ValueSummary {
    selected_count: usize,
    multi: bool,
    style: Style,
}

impl ValueSummary {
    /// Create a summary for the current selection size.
    pub fn new(selected_count: usize, multi: bool) -> Self {
        Self {
            selected_count,
            multi,
            style: Style::default(),
        }
    }

    /// Set the text style.
    #[must_use]
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }
}

impl Widget for ValueSummary {
    fn render(&self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() || !self.multi || self.selected_count == 0 {
            return;
        }
        let text = format!("{} selected", self.selected_count);
        draw_text_span(buf, area.x, area.y, &text, self.style, area.right());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::buffer_lines;

    fn render(summary: ValueSummary, width: u16) -> String {
        let mut buf = Buffer::new(width, 1);
        summary.render(Rect::from_size(width, 1), &mut buf);
        buffer_lines(&buf).remove(0)
    }

    #[test]
    fn counts_selected_options() {
        assert_eq!(render(ValueSummary::new(3, true), 12).trim_end(), "3 selected");
        assert_eq!(render(ValueSummary::new(1, true), 12).trim_end(), "1 selected");
    }

    #[test]
    fn empty_selection_renders_nothing() {
        assert_eq!(render(ValueSummary::new(0, true), 12).trim_end(), "");
    }

    #[test]
    fn single_select_renders_nothing() {
        assert_eq!(render(ValueSummary::new(2, false), 12).trim_end(), "");
    }
}
