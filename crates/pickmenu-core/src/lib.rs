#![forbid(unsafe_code)]

//! Headless engine for the pickmenu select widget.
//!
//! Everything in this crate is pure, synchronous computation over
//! host-supplied data: the option/group model, per-render selection
//! snapshots, selection transitions, row flattening with a sticky-heading
//! index, and fixed-row virtual window arithmetic. Nothing here paints or
//! performs I/O; the `pickmenu-widgets` crate consumes these types to
//! render a menu, and any other host can do the same.
//!
//! The authoritative selection (the "value") is owned by the host. The
//! engine only ever reads it and proposes replacements as [`ValueEdit`]
//! values; applying a proposal is the host's job.

pub mod actions;
pub mod geometry;
pub mod options;
pub mod rows;
pub mod session;
pub mod snapshot;
pub mod window;

pub use actions::{EditAction, ValueEdit, select_all, toggle_group, toggle_option};
pub use geometry::Rect;
pub use options::{MenuOptions, OptionGroup, SelectOption, filter_selectable};
pub use rows::{HeadingIndex, Row, RowFlags, flatten_rows, flatten_rows_where};
pub use session::MenuSession;
pub use snapshot::{SelectionSnapshot, SelectionState};
pub use window::{HeadingPlacement, RowHit, VirtualWindow};
