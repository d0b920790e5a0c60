#![forbid(unsafe_code)]

//! Checkbox indicator glyphs shared by the toolbar, option rows, and
//! group headings.

use pickmenu_core::SelectionState;

/// Check-mark prefix for the selected option in single-select mode.
pub const SINGLE_CHECK: &str = "✓ ";

/// Drawn width of an indicator glyph plus its trailing space.
pub const INDICATOR_WIDTH: u16 = 4;

/// The three-state checkbox glyph for a selection scope.
#[must_use]
pub fn indicator_glyph(state: SelectionState) -> &'static str {
    match state {
        SelectionState::AllSelected => "[x]",
        SelectionState::NoneSelected => "[ ]",
        SelectionState::SomeSelected => "[-]",
    }
}

/// The two-state glyph for a plain on/off toggle.
#[must_use]
pub fn toggle_glyph(on: bool) -> &'static str {
    if on { "[x]" } else { "[ ]" }
}
