#![forbid(unsafe_code)]

//! Per-menu-instance session state.
//!
//! The session owns the two pieces of mutable state the engine keeps
//! between renders: the show-selected flag and the filter text. Both are
//! exclusive to one menu instance; everything else is re-derived. The
//! host's menu-close hook must call [`MenuSession::handle_menu_close`] so
//! reopening always starts with show-selected off; the filter text is
//! deliberately left alone.

use crate::options::SelectOption;

/// Mutable session state for one menu instance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuSession {
    multi: bool,
    show_selected: bool,
    filter: String,
}

impl MenuSession {
    /// Create a session; `multi` selects multi- or single-select mode.
    #[must_use]
    pub fn new(multi: bool) -> Self {
        Self {
            multi,
            show_selected: false,
            filter: String::new(),
        }
    }

    /// Whether the menu is in multi-select mode.
    #[must_use]
    pub fn is_multi(&self) -> bool {
        self.multi
    }

    /// Whether the show-selected toggle is active.
    #[must_use]
    pub fn show_selected(&self) -> bool {
        self.show_selected
    }

    /// Flip the show-selected toggle.
    pub fn toggle_show_selected(&mut self) {
        self.show_selected = !self.show_selected;
        #[cfg(feature = "tracing")]
        tracing::trace!(show_selected = self.show_selected);
    }

    /// The current filter text.
    #[must_use]
    pub fn filter(&self) -> &str {
        &self.filter
    }

    /// Replace the filter text. This is the single mutation point for
    /// the filter; hosts forward only genuine input edits here.
    pub fn set_filter(&mut self, text: impl Into<String>) {
        self.filter = text.into();
    }

    /// React to the menu closing: show-selected is force-cleared, the
    /// filter text survives.
    pub fn handle_menu_close(&mut self) {
        self.show_selected = false;
    }

    /// The filter predicate the host's own option-filtering pass
    /// consumes.
    ///
    /// While show-selected is active in multi-select mode, visibility is
    /// driven by value membership; the text filter stays visually
    /// present but inert until the flag clears.
    #[must_use]
    pub fn matches<T>(&self, option: &T, value: &[T]) -> bool
    where
        T: SelectOption + PartialEq,
    {
        if self.multi && self.show_selected {
            return value.contains(option);
        }
        option
            .label()
            .to_lowercase()
            .contains(&self.filter.to_lowercase())
    }
}
