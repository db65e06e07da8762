//! # Actions
//!
//! Everything that can happen in PokéNav becomes an `Action`.
//! The first page request on startup? That's `Action::LoadFirstPage`.
//! A page fetch lands? That's `Action::PageLoaded(envelope)`.
//!
//! The `update()` function takes the current state and an action, mutates
//! the state, and returns an `Effect` describing the I/O the caller should
//! perform. No I/O happens here.
//!
//! ```text
//! State + Action  →  update()  →  Effect
//! ```
//!
//! This makes everything testable: apply actions, assert on the state and
//! the returned effect.

use log::{debug, warn};

use crate::api::page_url;
use crate::api::types::PageResponse;
use crate::core::model::{ListEntry, Profile};
use crate::core::state::{App, ProfileState};

#[derive(Debug)]
pub enum Action {
    /// Startup request for the first page.
    LoadFirstPage,
    /// The list cursor reached the end of the loaded entries.
    LoadNextPage,
    /// A page fetch finished.
    PageLoaded(PageResponse),
    /// A page fetch failed; the message is already formatted for the log.
    PageFailed(String),
    /// The user opened the detail overlay for `entries[index]`.
    SelectEntry(usize),
    /// A profile fetch finished.
    ProfileLoaded(Profile),
    /// A profile fetch failed.
    ProfileFailed(String),
    /// The user dismissed the detail overlay.
    CloseProfile,
    Quit,
}

/// I/O the event loop performs after an `update()` call.
#[derive(Debug, PartialEq)]
pub enum Effect {
    None,
    Quit,
    /// Spawn a list-page GET against the given URL.
    FetchPage(String),
    /// Spawn a detail GET against the given URL.
    FetchProfile(String),
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::LoadFirstPage => {
            app.is_loading = true;
            app.status_message = String::from("Loading the Pokédex...");
            Effect::FetchPage(page_url(
                &app.base_url,
                app.cursor.offset,
                app.cursor.limit,
            ))
        }

        Action::LoadNextPage => match app.cursor.next_url.clone() {
            Some(url) => {
                app.is_loading = true;
                app.status_message = String::from("Loading more...");
                Effect::FetchPage(url)
            }
            // End of the collection, or the first page hasn't landed yet.
            None => {
                debug!("Load-more requested with no next link");
                Effect::None
            }
        },

        Action::PageLoaded(page) => {
            app.cursor.advance(page.next, page.previous);
            app.entries
                .extend(page.results.into_iter().map(ListEntry::from));
            app.is_loading = false;
            app.status_message = format!("{} Pokémon loaded", app.entries.len());
            Effect::None
        }

        // Logged and swallowed. The loading flag stays set: there is no
        // retry path, so pagination makes no further progress afterwards.
        Action::PageFailed(msg) => {
            warn!("Page fetch failed: {}", msg);
            Effect::None
        }

        Action::SelectEntry(index) => match app.entries.get(index) {
            Some(entry) => {
                debug!("Opening profile for {} ({})", entry.name, entry.url);
                app.profile = ProfileState::Loading;
                Effect::FetchProfile(entry.url.clone())
            }
            None => Effect::None,
        },

        Action::ProfileLoaded(profile) => {
            // A result landing after the overlay closed is stale; drop it.
            if app.profile == ProfileState::Loading {
                app.profile = ProfileState::Loaded(profile);
            } else {
                debug!("Discarding profile for a dismissed overlay: {}", profile.name);
            }
            Effect::None
        }

        // The overlay keeps rendering its placeholder; nothing else changes.
        Action::ProfileFailed(msg) => {
            warn!("Profile fetch failed: {}", msg);
            Effect::None
        }

        Action::CloseProfile => {
            app.profile = ProfileState::Hidden;
            Effect::None
        }

        Action::Quit => Effect::Quit,
    }
}
