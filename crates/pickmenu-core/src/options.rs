#![forbid(unsafe_code)]

//! Option and group model.
//!
//! Options are host-supplied values implementing [`SelectOption`]. Option
//! identity is the host's `PartialEq`; the engine never invents its own
//! keys. The host must keep identity stable across renders: an option
//! that compares unequal to its previous incarnation is a different
//! option, and its selection silently "sticks" to the old one.

/// A selectable item supplied by the host.
///
/// The engine needs a display label for text filtering and a disabled
/// flag; everything else about the item is opaque.
pub trait SelectOption {
    /// Display label, also the target of text filtering.
    fn label(&self) -> &str;

    /// Disabled options are never selectable.
    fn is_disabled(&self) -> bool {
        false
    }
}

/// A named, ordered collection of options rendered under one heading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionGroup<T> {
    label: String,
    options: Vec<T>,
}

impl<T> OptionGroup<T> {
    /// Create a new group.
    pub fn new(label: impl Into<String>, options: Vec<T>) -> Self {
        Self {
            label: label.into(),
            options,
        }
    }

    /// The group heading label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The group's options in source order.
    pub fn options(&self) -> &[T] {
        &self.options
    }
}

/// The top-level option list: either flat or grouped, never mixed.
///
/// The flat/grouped decision is carried by the variant itself, so one
/// render pass cannot accidentally mix interpretations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuOptions<T> {
    /// A plain sequence of options.
    Flat(Vec<T>),
    /// A sequence of groups; the union of their options is the option set.
    Grouped(Vec<OptionGroup<T>>),
}

impl<T> MenuOptions<T> {
    /// Whether the list is grouped.
    #[must_use]
    pub fn is_grouped(&self) -> bool {
        matches!(self, MenuOptions::Grouped(_))
    }

    /// Number of groups (zero for a flat list).
    #[must_use]
    pub fn group_count(&self) -> usize {
        match self {
            MenuOptions::Flat(_) => 0,
            MenuOptions::Grouped(groups) => groups.len(),
        }
    }

    /// Every option in order: group order first, then in-group order.
    ///
    /// No deduplication: an option that appears in two groups appears
    /// twice, exactly as the host supplied it.
    pub fn all_options(&self) -> impl Iterator<Item = &T> {
        let (flat, grouped) = match self {
            MenuOptions::Flat(options) => (Some(options.iter()), None),
            MenuOptions::Grouped(groups) => {
                (None, Some(groups.iter().flat_map(|g| g.options.iter())))
            }
        };
        flat.into_iter().flatten().chain(grouped.into_iter().flatten())
    }

    /// Total option count across all groups.
    #[must_use]
    pub fn option_count(&self) -> usize {
        match self {
            MenuOptions::Flat(options) => options.len(),
            MenuOptions::Grouped(groups) => groups.iter().map(|g| g.options.len()).sum(),
        }
    }

    /// Whether there are no options at all (an empty grouped list with
    /// zero groups counts as empty; groups with zero options do not make
    /// the list non-empty option-wise but still render headings).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            MenuOptions::Flat(options) => options.is_empty(),
            MenuOptions::Grouped(groups) => groups.is_empty(),
        }
    }
}

/// Filter a sequence of options down to the selectable ones.
///
/// Drops disabled options and options whose case-folded label does not
/// contain the case-folded `filter` as a substring. An empty filter
/// matches everything.
pub fn filter_selectable<'a, T, I>(options: I, filter: &str) -> Vec<&'a T>
where
    T: SelectOption,
    I: IntoIterator<Item = &'a T>,
{
    let needle = filter.to_lowercase();
    options
        .into_iter()
        .filter(|option| {
            !option.is_disabled() && option.label().to_lowercase().contains(&needle)
        })
        .collect()
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct Item {
        pub name: &'static str,
        pub disabled: bool,
    }

    impl Item {
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

    impl SelectOption for Item {
        fn label(&self) -> &str {
            self.name
        }

        fn is_disabled(&self) -> bool {
            self.disabled
        }
    }

    pub fn fruit_groups() -> MenuOptions<Item> {
        MenuOptions::Grouped(vec![
            OptionGroup::new(
                "Citrus",
                vec![Item::new("Lemon"), Item::new("Lime"), Item::new("Orange")],
            ),
            OptionGroup::new(
                "Berries",
                vec![Item::new("Blueberry"), Item::disabled("Wolfberry")],
            ),
        ])
    }
}
