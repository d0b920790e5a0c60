#![forbid(unsafe_code)]

//! The menu container.
//!
//! In multi-select mode the first row slot is a toolbar with the
//! select-all control (indicator from the whole-menu selection state)
//! and the show-selected toggle; the rest of the area is the virtualized
//! list. Single-select menus are just the list.
//!
//! The menu is presentational: interactions arrive from the host as
//! [`MenuHit`] values (via [`Menu::hit_test`]) and leave as
//! [`ValueEdit`] proposals; the host remains the sole mutator of the
//! authoritative value.

use pickmenu_core::{
    EditAction, HeadingIndex, MenuOptions, MenuSession, Rect, Row, RowHit, SelectOption,
    SelectionSnapshot, ValueEdit, actions, flatten_rows_where,
};
use unicode_width::UnicodeWidthStr;

use crate::indicator::{indicator_glyph, toggle_glyph};
use crate::menu_list::{DEFAULT_ROW_HEIGHT, MenuList, MenuListState};
use crate::style::{Style, StyleFlags};
use crate::{Buffer, StatefulWidget, draw_text_span, set_style_area};

const SELECT_ALL_LABEL: &str = "Select all";
const SHOW_SELECTED_LABEL: &str = "Show selected";

/// What a menu coordinate resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuHit {
    /// The select-all toolbar control.
    SelectAll,
    /// The show-selected toolbar toggle.
    ShowSelected,
    /// A list row (heading or option).
    List(RowHit),
}

/// Mutable state for a [`Menu`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuState {
    /// State of the inner virtualized list.
    pub list: MenuListState,
}

/// The menu container widget.
#[derive(Debug)]
pub struct Menu<'a, T> {
    options: &'a MenuOptions<T>,
    value: &'a [T],
    session: &'a MenuSession,
    focused: Option<usize>,
    row_height: u16,
    style: Style,
    highlight_style: Style,
}

impl<'a, T> Menu<'a, T>
where
    T: SelectOption + PartialEq,
{
    /// Create a menu over the host's options, value, and session.
    pub fn new(options: &'a MenuOptions<T>, value: &'a [T], session: &'a MenuSession) -> Self {
        Self {
            options,
            value,
            session,
            focused: None,
            row_height: DEFAULT_ROW_HEIGHT,
            style: Style::default(),
            highlight_style: Style::new().attrs(StyleFlags::REVERSE),
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

    /// The flattened row sequence for the current render pass: the
    /// host's filter predicate applied to option rows, headings kept.
    #[must_use]
    pub fn visible_rows(&self) -> Vec<Row<'a, T>> {
        flatten_rows_where(self.options, |option| {
            self.session.matches(option, self.value)
        })
    }

    fn toolbar_height(&self) -> u16 {
        if self.session.is_multi() {
            self.row_height
        } else {
            0
        }
    }

    fn list_area(&self, area: Rect) -> Rect {
        let toolbar = self.toolbar_height().min(area.height);
        Rect::new(area.x, area.y + toolbar, area.width, area.height - toolbar)
    }

    /// Resolve a buffer coordinate to a menu region.
    #[must_use]
    pub fn hit_test(&self, area: Rect, state: &MenuState, x: u16, y: u16) -> Option<MenuHit> {
        if !area.contains(x, y) {
            return None;
        }
        let toolbar = self.toolbar_height().min(area.height);
        if toolbar > 0 && y < area.y + toolbar {
            return Some(if x < area.x + area.width / 2 {
                MenuHit::SelectAll
            } else {
                MenuHit::ShowSelected
            });
        }

        let rows = self.visible_rows();
        let headings = HeadingIndex::scan(&rows);
        MenuList::new(&rows, &headings, self.value, self.session)
            .row_height(self.row_height)
            .hit_test(self.list_area(area), &state.list, x, y)
            .map(MenuHit::List)
    }

    fn render_toolbar(&self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        set_style_area(buf, area, self.style);

        // Select-all renders inert while show-selected is on.
        let select_all_style = if self.session.show_selected() {
            Style::new().attrs(StyleFlags::DIM).merge(&self.style)
        } else {
            self.style
        };
        let snapshot =
            SelectionSnapshot::of_menu(self.options, self.value, self.session.filter());
        let mut x = area.x;
        x = draw_text_span(
            buf,
            x,
            area.y,
            indicator_glyph(snapshot.state()),
            select_all_style,
            area.right(),
        );
        x = draw_text_span(buf, x, area.y, " ", select_all_style, area.right());
        draw_text_span(
            buf,
            x,
            area.y,
            SELECT_ALL_LABEL,
            select_all_style,
            area.right(),
        );

        let toggle = toggle_glyph(self.session.show_selected());
        let width =
            UnicodeWidthStr::width(toggle) + 1 + UnicodeWidthStr::width(SHOW_SELECTED_LABEL);
        let mut x = area.right().saturating_sub(width as u16).max(area.x);
        x = draw_text_span(buf, x, area.y, toggle, self.style, area.right());
        x = draw_text_span(buf, x, area.y, " ", self.style, area.right());
        draw_text_span(buf, x, area.y, SHOW_SELECTED_LABEL, self.style, area.right());
    }
}

impl<'a, T> Menu<'a, T>
where
    T: SelectOption + PartialEq + Clone,
{
    /// The select-all transition, if the control is active.
    ///
    /// Returns `None` in single-select mode and while show-selected is
    /// on (the toolbar renders the control inert then).
    #[must_use]
    pub fn select_all_edit(&self) -> Option<ValueEdit<T>> {
        if !self.session.is_multi() || self.session.show_selected() {
            return None;
        }
        let snapshot =
            SelectionSnapshot::of_menu(self.options, self.value, self.session.filter());
        Some(actions::select_all(&snapshot))
    }

    /// Map an activated list row to its value transition.
    ///
    /// Heading rows toggle their group (multi-select only, inert while
    /// show-selected is on); option rows toggle membership in
    /// multi-select mode and replace the value in single-select mode.
    /// Disabled options produce no edit.
    #[must_use]
    pub fn activate(&self, hit: RowHit) -> Option<ValueEdit<T>> {
        let rows = self.visible_rows();
        match hit {
            RowHit::Heading(index) => {
                let Row::Heading { group, .. } = *rows.get(index)? else {
                    return None;
                };
                if !self.session.is_multi() || self.session.show_selected() {
                    return None;
                }
                Some(actions::toggle_group(
                    group,
                    self.value,
                    self.session.filter(),
                ))
            }
            RowHit::Row(index) => {
                let Row::Option { option, .. } = *rows.get(index)? else {
                    return None;
                };
                if option.is_disabled() {
                    return None;
                }
                if self.session.is_multi() {
                    Some(actions::toggle_option(option, self.value))
                } else {
                    Some(ValueEdit {
                        value: vec![option.clone()],
                        action: EditAction::SelectOption,
                        option: Some(option.clone()),
                    })
                }
            }
        }
    }
}

impl<T> StatefulWidget for Menu<'_, T>
where
    T: SelectOption + PartialEq,
{
    type State = MenuState;

    fn render(&self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "widget_render",
            widget = "Menu",
            x = area.x,
            y = area.y,
            w = area.width,
            h = area.height
        )
        .entered();

        if area.is_empty() {
            return;
        }

        if self.session.is_multi() {
            let toolbar = Rect::new(
                area.x,
                area.y,
                area.width,
                self.row_height.min(area.height),
            );
            self.render_toolbar(toolbar, buf);
        }

        let rows = self.visible_rows();
        let headings = HeadingIndex::scan(&rows);
        MenuList::new(&rows, &headings, self.value, self.session)
            .focused(self.focused)
            .row_height(self.row_height)
            .style(self.style)
            .highlight_style(self.highlight_style)
            .render(self.list_area(area), buf, &mut state.list);
    }
}
