#![forbid(unsafe_code)]

//! Row flattening and the sticky-heading index.
//!
//! The renderable unit of the menu list is a flat sequence of rows:
//! option rows, and (for grouped option lists) one heading row per group
//! immediately preceding that group's options. Row kinds are a tagged
//! union resolved here, once, so downstream code never has to inspect
//! rendered output to tell a heading from an option.

use bitflags::bitflags;

use crate::options::{MenuOptions, OptionGroup, SelectOption};

bitflags! {
    /// Render state for a single option row.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct RowFlags: u8 {
        /// The option is present in the value.
        const SELECTED = 1 << 0;
        /// The option is disabled and never selectable.
        const DISABLED = 1 << 1;
        /// The option currently holds keyboard focus.
        const FOCUSED = 1 << 2;
    }
}

/// One addressable unit in the virtualized list's index space.
#[derive(Debug, PartialEq, Eq)]
pub enum Row<'a, T> {
    /// A group heading occupying one row slot.
    Heading {
        /// Index of the group within the grouped option list.
        group_index: usize,
        /// The group itself, for per-group selection derivation.
        group: &'a OptionGroup<T>,
    },
    /// An option row.
    Option {
        /// The option to render.
        option: &'a T,
        /// Index of the owning group, `None` for flat lists.
        group_index: Option<usize>,
    },
}

// Rows only hold references; copyable regardless of `T`.
impl<T> Clone for Row<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Row<'_, T> {}

impl<T> Row<'_, T> {
    /// Whether this row is a group heading.
    #[must_use]
    pub fn is_heading(&self) -> bool {
        matches!(self, Row::Heading { .. })
    }
}

/// Flatten an option list into the renderable row sequence.
///
/// Flat lists map one option to one row. Grouped lists emit, per group in
/// source order, one heading row followed by that group's option rows in
/// source order. A zero-option group still emits its heading row. The
/// result is deterministic for a given option list; the engine never
/// reorders what the host supplied.
pub fn flatten_rows<T: SelectOption>(options: &MenuOptions<T>) -> Vec<Row<'_, T>> {
    flatten_rows_where(options, |_| true)
}

/// Flatten an option list, emitting option rows only for options the
/// host's filtering pass left visible.
///
/// Heading rows always reference the full group, so per-group selection
/// derivation keeps seeing filtered-out members; a group whose options
/// are all hidden still emits its heading row.
pub fn flatten_rows_where<T, F>(options: &MenuOptions<T>, visible: F) -> Vec<Row<'_, T>>
where
    T: SelectOption,
    F: Fn(&T) -> bool,
{
    match options {
        MenuOptions::Flat(options) => options
            .iter()
            .filter(|&option| visible(option))
            .map(|option| Row::Option {
                option,
                group_index: None,
            })
            .collect(),
        MenuOptions::Grouped(groups) => {
            let total = groups.len() + groups.iter().map(|g| g.options().len()).sum::<usize>();
            let mut rows = Vec::with_capacity(total);
            for (group_index, group) in groups.iter().enumerate() {
                rows.push(Row::Heading { group_index, group });
                for option in group.options() {
                    if visible(option) {
                        rows.push(Row::Option {
                            option,
                            group_index: Some(group_index),
                        });
                    }
                }
            }
            rows
        }
    }
}

/// Ascending positions of heading rows within a flattened sequence.
///
/// Recomputed whenever the flattened sequence changes; not persisted
/// across renders.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeadingIndex {
    indices: Vec<usize>,
}

impl HeadingIndex {
    /// Scan a flattened row sequence once and record heading positions.
    pub fn scan<T>(rows: &[Row<'_, T>]) -> Self {
        Self {
            indices: rows
                .iter()
                .enumerate()
                .filter(|(_, row)| row.is_heading())
                .map(|(index, _)| index)
                .collect(),
        }
    }

    /// The heading positions, strictly ascending.
    #[must_use]
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Whether the given row index is a heading.
    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        self.indices.binary_search(&index).is_ok()
    }

    /// Number of headings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Whether there are no headings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::fixtures::{Item, fruit_groups};

    #[test]
    fn flat_rows_are_exactly_the_options() {
        let options = MenuOptions::Flat(vec![Item::new("A"), Item::new("B")]);
        let rows = flatten_rows(&options);
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|row| !row.is_heading()));
    }

    #[test]
    fn grouped_rows_interleave_headings() {
        let options = fruit_groups();
        let rows = flatten_rows(&options);

        // 2 groups + 5 options.
        assert_eq!(rows.len(), 7);
        assert!(rows[0].is_heading());
        assert!(rows[4].is_heading());

        let Row::Option { option, group_index } = rows[1] else {
            panic!("expected option row");
        };
        assert_eq!(option.label(), "Lemon");
        assert_eq!(group_index, Some(0));

        let Row::Option { option, group_index } = rows[5] else {
            panic!("expected option row");
        };
        assert_eq!(option.label(), "Blueberry");
        assert_eq!(group_index, Some(1));
    }

    #[test]
    fn empty_group_still_emits_heading() {
        let options = MenuOptions::Grouped(vec![
            OptionGroup::new("Empty", Vec::<Item>::new()),
            OptionGroup::new("Full", vec![Item::new("A")]),
        ]);
        let rows = flatten_rows(&options);
        assert_eq!(rows.len(), 3);
        assert!(rows[0].is_heading());
        assert!(rows[1].is_heading());
        assert!(!rows[2].is_heading());
    }

    #[test]
    fn heading_index_matches_headings() {
        let options = fruit_groups();
        let rows = flatten_rows(&options);
        let headings = HeadingIndex::scan(&rows);

        assert_eq!(headings.indices(), &[0, 4]);
        assert!(headings.contains(0));
        assert!(headings.contains(4));
        assert!(!headings.contains(1));
        assert_eq!(headings.len(), 2);
    }

    #[test]
    fn filtered_flatten_keeps_headings_and_drops_hidden_options() {
        let options = fruit_groups();
        let rows = flatten_rows_where(&options, |option| option.label().contains("Blue"));

        // Both headings survive even though Citrus has no visible rows.
        assert_eq!(rows.len(), 3);
        assert!(rows[0].is_heading());
        assert!(rows[1].is_heading());
        let Row::Option { option, .. } = rows[2] else {
            panic!("expected option row");
        };
        assert_eq!(option.label(), "Blueberry");
    }

    #[test]
    fn flat_list_has_no_headings() {
        let options = MenuOptions::Flat(vec![Item::new("A")]);
        let rows = flatten_rows(&options);
        let headings = HeadingIndex::scan(&rows);
        assert!(headings.is_empty());
    }

    mod property {
        use super::*;
        use proptest::prelude::*;

        const NAMES: [&str; 12] = [
            "a", "b", "c", "d", "e", "f", "g", "h", "i", "j", "k", "l",
        ];

        fn arb_grouping() -> impl Strategy<Value = MenuOptions<Item>> {
            proptest::collection::vec(0usize..NAMES.len(), 1..5).prop_map(|sizes| {
                let mut next = 0usize;
                let groups = sizes
                    .iter()
                    .enumerate()
                    .map(|(i, &size)| {
                        let options = (0..size)
                            .map(|_| {
                                let item = Item::new(NAMES[next % NAMES.len()]);
                                next += 1;
                                item
                            })
                            .collect();
                        OptionGroup::new(format!("g{i}"), options)
                    })
                    .collect();
                MenuOptions::Grouped(groups)
            })
        }

        proptest! {
            #[test]
            fn flatten_has_g_plus_n_rows(options in arb_grouping()) {
                let rows = flatten_rows(&options);
                prop_assert_eq!(rows.len(), options.group_count() + options.option_count());
            }

            #[test]
            fn heading_indices_are_ascending_and_complete(options in arb_grouping()) {
                let rows = flatten_rows(&options);
                let headings = HeadingIndex::scan(&rows);

                prop_assert_eq!(headings.len(), options.group_count());
                for pair in headings.indices().windows(2) {
                    prop_assert!(pair[0] < pair[1]);
                }
                for (index, row) in rows.iter().enumerate() {
                    prop_assert_eq!(headings.contains(index), row.is_heading());
                }
            }

            #[test]
            fn headings_precede_their_groups(options in arb_grouping()) {
                let rows = flatten_rows(&options);
                let MenuOptions::Grouped(groups) = &options else {
                    unreachable!();
                };

                let mut cursor = 0usize;
                for (group_index, group) in groups.iter().enumerate() {
                    let Row::Heading { group_index: at, .. } = rows[cursor] else {
                        panic!("expected heading at {cursor}");
                    };
                    prop_assert_eq!(at, group_index);
                    cursor += 1;
                    for option in group.options() {
                        let Row::Option { option: row_option, group_index: owner } = rows[cursor] else {
                            panic!("expected option at {cursor}");
                        };
                        prop_assert_eq!(row_option, option);
                        prop_assert_eq!(owner, Some(group_index));
                        cursor += 1;
                    }
                }
                prop_assert_eq!(cursor, rows.len());
            }
        }
    }
}
