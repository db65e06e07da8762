//! # TUI Components
//!
//! Components follow the persistent state + transient wrapper pattern:
//! state structs survive across frames inside `TuiState`, while render
//! wrappers are rebuilt each frame with borrowed state and props. External
//! data arrives as props, never by reaching into global state, so each
//! component file is self-contained: state, events, rendering, tests.

pub mod entry_list;
pub mod profile_view;

pub use entry_list::{EntryList, EntryListState, ListEvent};
pub use profile_view::ProfileView;
