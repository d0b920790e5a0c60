#![forbid(unsafe_code)]

//! Selection transitions.
//!
//! Every transition is a pure function from the current (host-owned)
//! value to a [`ValueEdit`] proposal. Nothing is mutated in place; the
//! host applies the proposal (or doesn't) and re-renders.

use crate::options::{OptionGroup, SelectOption};
use crate::snapshot::SelectionSnapshot;

/// What kind of change a [`ValueEdit`] represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditAction {
    /// Options were added to the value.
    SelectOption,
    /// Options were removed from the value.
    DeselectOption,
    /// The whole value was cleared.
    Clear,
}

/// A proposed replacement value.
///
/// `option` carries the primary affected option when there is a single
/// natural one (the toggled option, or the first option of a bulk
/// select), mirroring the action metadata hosts typically forward to
/// change listeners.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueEdit<T> {
    /// The complete replacement value, in selection order.
    pub value: Vec<T>,
    /// The kind of change.
    pub action: EditAction,
    /// The primary affected option, if any.
    pub option: Option<T>,
}

/// Select-all for the whole-menu scope.
///
/// If every selectable option is already selected the value is cleared
/// outright; the clear is global, not limited to the selectable subset.
/// Otherwise the value becomes exactly the selectable set: previously
/// selected options that fail the active filter are dropped from the
/// replacement, so hosts must expect select-all under an active filter
/// to discard hidden selections. A fully filtered-out scope is vacuously
/// all-selected, so clicking select-all there clears too.
pub fn select_all<T>(snapshot: &SelectionSnapshot<'_, T>) -> ValueEdit<T>
where
    T: SelectOption + PartialEq + Clone,
{
    if snapshot.all_selected() {
        #[cfg(feature = "tracing")]
        tracing::trace!(action = "select_all", outcome = "clear");
        return ValueEdit {
            value: Vec::new(),
            action: EditAction::Clear,
            option: None,
        };
    }

    let value: Vec<T> = snapshot.selectable().iter().map(|o| (*o).clone()).collect();
    #[cfg(feature = "tracing")]
    tracing::trace!(action = "select_all", selected = value.len());
    ValueEdit {
        option: value.first().cloned(),
        action: EditAction::SelectOption,
        value,
    }
}

/// Toggle one group's selection.
///
/// If the group is all-selected, exactly that group's options are removed
/// (identity set-difference); selections in other groups are untouched.
/// Otherwise the group's selectable options are unioned into the value,
/// de-duplicating so the value never holds the same option twice.
pub fn toggle_group<T>(group: &OptionGroup<T>, value: &[T], filter: &str) -> ValueEdit<T>
where
    T: SelectOption + PartialEq + Clone,
{
    let snapshot = SelectionSnapshot::of_group(group, value, filter);

    if snapshot.all_selected() {
        let remaining: Vec<T> = value
            .iter()
            .filter(|v| !group.options().contains(*v))
            .cloned()
            .collect();
        #[cfg(feature = "tracing")]
        tracing::trace!(action = "deselect_group", group = group.label());
        return ValueEdit {
            value: remaining,
            action: EditAction::DeselectOption,
            option: None,
        };
    }

    let mut merged: Vec<T> = value.to_vec();
    for option in snapshot.selectable() {
        if !merged.contains(*option) {
            merged.push((*option).clone());
        }
    }
    #[cfg(feature = "tracing")]
    tracing::trace!(action = "select_group", group = group.label());
    ValueEdit {
        value: merged,
        action: EditAction::SelectOption,
        option: None,
    }
}

/// Toggle a single option in or out of the value.
pub fn toggle_option<T>(option: &T, value: &[T]) -> ValueEdit<T>
where
    T: PartialEq + Clone,
{
    if value.contains(option) {
        let remaining: Vec<T> = value.iter().filter(|v| *v != option).cloned().collect();
        ValueEdit {
            value: remaining,
            action: EditAction::DeselectOption,
            option: Some(option.clone()),
        }
    } else {
        let mut extended = value.to_vec();
        extended.push(option.clone());
        ValueEdit {
            value: extended,
            action: EditAction::SelectOption,
            option: Some(option.clone()),
        }
    }
}
