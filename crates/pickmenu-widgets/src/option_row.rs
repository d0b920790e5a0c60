#![forbid(unsafe_code)]

//! Option row render slot.
//!
//! In multi-select mode every row carries a checkbox reflecting value
//! membership; in single-select mode the selected row gets a check-mark
//! prefix and the rest render bare labels.

use pickmenu_core::{Rect, RowFlags, SelectionState};

use crate::indicator::{SINGLE_CHECK, indicator_glyph};
use crate::style::{Style, StyleFlags};
use crate::{Buffer, Widget, draw_text_span, set_style_area};

/// One option row of the menu list.
#[derive(Debug, Clone)]
pub struct OptionRow<'a> {
    label: &'a str,
    flags: RowFlags,
    multi: bool,
    style: Style,
    highlight_style: Style,
    disabled_style: Style,
}

impl<'a> OptionRow<'a> {
    /// Create a row for the given label.
    pub fn new(label: &'a str) -> Self {
        Self {
            label,
            flags: RowFlags::empty(),
            multi: false,
            style: Style::default(),
            highlight_style: Style::new().attrs(StyleFlags::REVERSE),
            disabled_style: Style::new().attrs(StyleFlags::DIM),
        }
    }

    /// Set the row's render state flags.
    #[must_use]
    pub fn flags(mut self, flags: RowFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Enable multi-select rendering (checkbox per row).
    #[must_use]
    pub fn multi(mut self, multi: bool) -> Self {
        self.multi = multi;
        self
    }

    /// Set the base style.
    #[must_use]
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Set the style merged over focused rows.
    #[must_use]
    pub fn highlight_style(mut self, style: Style) -> Self {
        self.highlight_style = style;
        self
    }

    /// Set the style merged over disabled rows.
    #[must_use]
    pub fn disabled_style(mut self, style: Style) -> Self {
        self.disabled_style = style;
        self
    }
}

impl Widget for OptionRow<'_> {
    fn render(&self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }

        let mut style = self.style;
        if self.flags.contains(RowFlags::DISABLED) {
            style = self.disabled_style.merge(&style);
        }
        if self.flags.contains(RowFlags::FOCUSED) {
            style = self.highlight_style.merge(&style);
        }
        set_style_area(buf, area, style);

        let mut x = area.x;
        if self.multi {
            let state = if self.flags.contains(RowFlags::SELECTED) {
                SelectionState::AllSelected
            } else {
                SelectionState::NoneSelected
            };
            x = draw_text_span(buf, x, area.y, indicator_glyph(state), style, area.right());
            x = draw_text_span(buf, x, area.y, " ", style, area.right());
        } else if self.flags.contains(RowFlags::SELECTED) {
            x = draw_text_span(buf, x, area.y, SINGLE_CHECK, style, area.right());
        }

        draw_text_span(buf, x, area.y, self.label, style, area.right());
    }
}
