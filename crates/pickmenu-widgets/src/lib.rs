#![forbid(unsafe_code)]

//! Menu widgets for pickmenu.
//!
//! Render slots for a host select component: the menu container with its
//! select-all / show-selected toolbar, the virtualized menu list with
//! sticky group headings, option rows, group headings, and the value
//! summary. All painting goes into the char-cell [`Buffer`]; selection
//! semantics live in `pickmenu-core`.

pub mod buffer;
pub mod group_heading;
pub mod indicator;
pub mod menu;
pub mod menu_list;
pub mod option_row;
pub mod style;
pub mod value_summary;

pub use buffer::{Buffer, Cell};
pub use group_heading::GroupHeading;
pub use menu::{Menu, MenuHit, MenuState};
pub use menu_list::{DEFAULT_ROW_HEIGHT, MenuList, MenuListState};
pub use option_row::OptionRow;
pub use style::{Color, Style, StyleFlags};
pub use value_summary::ValueSummary;

use pickmenu_core::Rect;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// A `Widget` is a renderable component.
///
/// Widgets render themselves into a `Buffer` within a given `Rect`.
pub trait Widget {
    /// Render the widget into the buffer at the given area.
    fn render(&self, area: Rect, buf: &mut Buffer);
}

/// A `StatefulWidget` is a widget that renders based on mutable state.
pub trait StatefulWidget {
    type State;

    /// Render the widget into the buffer with mutable state.
    fn render(&self, area: Rect, buf: &mut Buffer, state: &mut Self::State);
}

/// Helper to apply style to a cell.
pub(crate) fn apply_style(cell: &mut Cell, style: Style) {
    if let Some(fg) = style.fg {
        cell.style.fg = Some(fg);
    }
    if let Some(bg) = style.bg {
        cell.style.bg = Some(bg);
    }
    if let Some(attrs) = style.attrs {
        let merged = cell.style.attrs.unwrap_or_default() | attrs;
        cell.style.attrs = Some(merged);
    }
}

/// Apply a style to all cells in a rectangular area.
///
/// This modifies existing cells, preserving their content.
pub(crate) fn set_style_area(buf: &mut Buffer, area: Rect, style: Style) {
    if style.is_empty() {
        return;
    }
    for y in area.y..area.bottom() {
        for x in area.x..area.right() {
            if let Some(cell) = buf.get_mut(x, y) {
                apply_style(cell, style);
            }
        }
    }
}

/// Overwrite every cell in an area with a styled blank.
///
/// Unlike [`set_style_area`] this erases prior content; the sticky
/// heading overlay uses it to paint opaquely over scrolled rows.
pub(crate) fn fill_area(buf: &mut Buffer, area: Rect, style: Style) {
    for y in area.y..area.bottom() {
        for x in area.x..area.right() {
            let mut cell = Cell::from_char(' ');
            apply_style(&mut cell, style);
            buf.set(x, y, cell);
        }
    }
}

/// Draw a text span into a buffer at the given position.
///
/// Returns the x position after the last drawn character.
/// Stops at `max_x` (exclusive).
pub(crate) fn draw_text_span(
    buf: &mut Buffer,
    mut x: u16,
    y: u16,
    content: &str,
    style: Style,
    max_x: u16,
) -> u16 {
    for grapheme in content.graphemes(true) {
        if x >= max_x {
            break;
        }
        let w = UnicodeWidthStr::width(grapheme);
        if w == 0 {
            continue;
        }
        if x + w as u16 > max_x {
            break;
        }
        if let Some(c) = grapheme.chars().next() {
            let mut cell = Cell::from_char(c);
            apply_style(&mut cell, style);
            buf.set(x, y, cell);
        }
        x = x.saturating_add(w as u16);
    }
    x
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use pickmenu_core::{MenuOptions, OptionGroup, SelectOption};

    /// Collect the buffer's characters into one string per row.
    pub(crate) fn buffer_lines(buf: &Buffer) -> Vec<String> {
        (0..buf.height())
            .map(|y| {
                (0..buf.width())
                    .map(|x| buf.get(x, y).map(|c| c.ch()).unwrap_or(' '))
                    .collect()
            })
            .collect()
    }

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub(crate) struct Opt {
        pub name: &'static str,
        pub disabled: bool,
    }

    impl Opt {
        pub fn new(name: &'static str) -> Self {
            Self {
                name,
                disabled: false,
            }
        }

        pub fn disabled(name: &'static str) -> Self {
            Self {
                name,
                disabled: true,
            }
        }
    }

    impl SelectOption for Opt {
        fn label(&self) -> &str {
            self.name
        }

        fn is_disabled(&self) -> bool {
            self.disabled
        }
    }

    pub(crate) fn flat_options(names: &[&'static str]) -> MenuOptions<Opt> {
        MenuOptions::Flat(names.iter().map(|&name| Opt::new(name)).collect())
    }

    pub(crate) fn grouped_options() -> MenuOptions<Opt> {
        MenuOptions::Grouped(vec![
            OptionGroup::new("Citrus", vec![Opt::new("Lemon"), Opt::new("Lime")]),
            OptionGroup::new(
                "Berries",
                vec![Opt::new("Blueberry"), Opt::new("Cranberry"), Opt::new("Mulberry")],
            ),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{Color, StyleFlags};

    #[test]
    fn apply_style_sets_fg_and_preserves_content() {
        let mut cell = Cell::from_char('Z');
        apply_style(&mut cell, Style::new().fg(Color::rgb(255, 0, 0)));
        assert_eq!(cell.style.fg, Some(Color::rgb(255, 0, 0)));
        assert_eq!(cell.ch(), 'Z');
    }

    #[test]
    fn apply_style_accumulates_attrs() {
        let mut cell = Cell::default();
        apply_style(&mut cell, Style::new().attrs(StyleFlags::BOLD));
        apply_style(&mut cell, Style::new().attrs(StyleFlags::DIM));
        assert_eq!(cell.style.attrs, Some(StyleFlags::BOLD | StyleFlags::DIM));
    }

    #[test]
    fn set_style_area_applies_to_all_cells() {
        let mut buf = Buffer::new(3, 2);
        set_style_area(
            &mut buf,
            Rect::new(0, 0, 3, 2),
            Style::new().bg(Color::rgb(10, 20, 30)),
        );
        for y in 0..2 {
            for x in 0..3 {
                assert_eq!(buf.get(x, y).unwrap().style.bg, Some(Color::rgb(10, 20, 30)));
            }
        }
    }

    #[test]
    fn set_style_area_empty_style_is_noop() {
        let mut buf = Buffer::new(2, 1);
        buf.set(0, 0, Cell::from_char('A'));
        set_style_area(&mut buf, Rect::new(0, 0, 2, 1), Style::default());
        assert_eq!(buf.get(0, 0).unwrap().style, Style::default());
    }

    #[test]
    fn draw_text_span_basic() {
        let mut buf = Buffer::new(10, 1);
        let end_x = draw_text_span(&mut buf, 0, 0, "ABC", Style::default(), 10);
        assert_eq!(end_x, 3);
        assert_eq!(buf.get(0, 0).unwrap().ch(), 'A');
        assert_eq!(buf.get(1, 0).unwrap().ch(), 'B');
        assert_eq!(buf.get(2, 0).unwrap().ch(), 'C');
    }

    #[test]
    fn draw_text_span_clipped_at_max_x() {
        let mut buf = Buffer::new(10, 1);
        let end_x = draw_text_span(&mut buf, 0, 0, "ABCDEF", Style::default(), 3);
        assert_eq!(end_x, 3);
        assert_eq!(buf.get(2, 0).unwrap().ch(), 'C');
        assert!(buf.get(3, 0).unwrap().is_blank());
    }

    #[test]
    fn draw_text_span_starts_at_offset() {
        let mut buf = Buffer::new(10, 1);
        let end_x = draw_text_span(&mut buf, 5, 0, "XY", Style::default(), 10);
        assert_eq!(end_x, 7);
        assert_eq!(buf.get(5, 0).unwrap().ch(), 'X');
        assert!(buf.get(4, 0).unwrap().is_blank());
    }

    #[test]
    fn draw_text_span_wide_grapheme_advances_two() {
        let mut buf = Buffer::new(10, 1);
        let end_x = draw_text_span(&mut buf, 0, 0, "宽x", Style::default(), 10);
        assert_eq!(end_x, 3);
        assert_eq!(buf.get(0, 0).unwrap().ch(), '宽');
        assert_eq!(buf.get(2, 0).unwrap().ch(), 'x');
    }

    #[test]
    fn draw_text_span_empty_string() {
        let mut buf = Buffer::new(5, 1);
        assert_eq!(draw_text_span(&mut buf, 0, 0, "", Style::default(), 5), 0);
    }
}
