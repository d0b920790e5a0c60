#![forbid(unsafe_code)]

//! Per-render selection snapshots.
//!
//! A snapshot is recomputed from the host-owned value on every render and
//! never cached across renders. Correctness comes from re-derivation, not
//! from keeping incremental state in sync.

use crate::options::{MenuOptions, OptionGroup, SelectOption, filter_selectable};

/// Aggregate selection state for a scope (the whole menu or one group).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionState {
    /// No option in the scope is selected. Indicator: unchecked.
    NoneSelected,
    /// Some but not all selectable options are selected. Indicator:
    /// indeterminate.
    SomeSelected,
    /// Every selectable option is selected (vacuously so when the
    /// selectable set is empty). Indicator: checked.
    AllSelected,
}

/// Derived selection data for one scope in one render pass.
///
/// Invariants: `selectable ⊆ all_options`, `selected ⊆ all_options`, and
/// `all_selected` holds exactly when every selectable option is in the
/// value.
#[derive(Debug, Clone)]
pub struct SelectionSnapshot<'a, T> {
    all_options: Vec<&'a T>,
    selectable: Vec<&'a T>,
    selected: Vec<&'a T>,
    all_selected: bool,
}

impl<'a, T> SelectionSnapshot<'a, T>
where
    T: SelectOption + PartialEq,
{
    /// Snapshot an arbitrary sequence of options against the value.
    pub fn take<I>(options: I, value: &'a [T], filter: &str) -> Self
    where
        I: IntoIterator<Item = &'a T>,
    {
        let all_options: Vec<&T> = options.into_iter().collect();
        let selectable = filter_selectable(all_options.iter().copied(), filter);
        let selected: Vec<&T> = all_options
            .iter()
            .copied()
            .filter(|option| value.contains(*option))
            .collect();
        let all_selected = selectable.iter().all(|option| value.contains(*option));

        Self {
            all_options,
            selectable,
            selected,
            all_selected,
        }
    }

    /// Snapshot the whole menu scope.
    pub fn of_menu(options: &'a MenuOptions<T>, value: &'a [T], filter: &str) -> Self {
        Self::take(options.all_options(), value, filter)
    }

    /// Snapshot a single group scope.
    pub fn of_group(group: &'a OptionGroup<T>, value: &'a [T], filter: &str) -> Self {
        Self::take(group.options(), value, filter)
    }

    /// Every option in the scope, in source order.
    #[must_use]
    pub fn all_options(&self) -> &[&'a T] {
        &self.all_options
    }

    /// Options that pass the disabled/text filter.
    #[must_use]
    pub fn selectable(&self) -> &[&'a T] {
        &self.selectable
    }

    /// Options currently present in the value, in scope order.
    #[must_use]
    pub fn selected(&self) -> &[&'a T] {
        &self.selected
    }

    /// Whether every selectable option is in the value.
    ///
    /// Vacuously `true` when the selectable set is empty, which makes
    /// select-all on a fully filtered-out scope clear rather than no-op.
    #[must_use]
    pub fn all_selected(&self) -> bool {
        self.all_selected
    }

    /// The aggregate state driving the checkbox indicator.
    #[must_use]
    pub fn state(&self) -> SelectionState {
        if self.all_selected {
            SelectionState::AllSelected
        } else if self.selected.is_empty() {
            SelectionState::NoneSelected
        } else {
            SelectionState::SomeSelected
        }
    }
}
