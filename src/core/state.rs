//! # Application State
//!
//! Core business state for PokéNav. This module contains domain logic only -
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── api: Arc<dyn PokeApi>      // HTTP read seam
//! ├── entries: Vec<ListEntry>    // append-only Pokémon list
//! ├── cursor: PageCursor         // offset/limit + server links
//! ├── is_loading: bool           // a page fetch is in flight
//! ├── profile: ProfileState      // detail overlay lifecycle
//! ├── status_message: String     // status bar text
//! └── base_url: String           // first-page URL construction
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! This keeps things predictable, so no surprise mutations.

use std::sync::Arc;

use crate::api::PokeApi;
use crate::core::config::ResolvedConfig;
use crate::core::model::{ListEntry, PageCursor, Profile};

/// Lifecycle of the detail overlay. Independent of pagination: the overlay
/// opens in `Loading`, and a fetch failure leaves it there with nothing to
/// show beyond the placeholder.
#[derive(Debug, Clone, PartialEq)]
pub enum ProfileState {
    Hidden,
    Loading,
    Loaded(Profile),
}

pub struct App {
    pub api: Arc<dyn PokeApi>,
    pub entries: Vec<ListEntry>,
    pub cursor: PageCursor,
    pub is_loading: bool,
    pub profile: ProfileState,
    pub status_message: String,
    pub base_url: String,
}

impl App {
    pub fn new(api: Arc<dyn PokeApi>, config: &ResolvedConfig) -> Self {
        Self {
            api,
            entries: Vec::new(),
            cursor: PageCursor::new(config.page_limit),
            is_loading: false,
            profile: ProfileState::Hidden,
            status_message: String::from("Welcome to PokéNav!"),
            base_url: config.base_url.clone(),
        }
    }

    /// Name of the entry the detail overlay belongs to, if any is selected.
    pub fn entry_name(&self, index: usize) -> &str {
        self.entries.get(index).map(|e| e.name.as_str()).unwrap_or("")
    }
}
