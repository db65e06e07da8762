//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! The event loop uses conditional redraw to avoid unnecessary work:
//!
//! - **Animating** (a fetch in flight): draws every ~80ms so the spinner
//!   keeps moving.
//! - **Idle**: sleeps up to 500ms, only redraws on events or terminal
//!   resize.

mod component;
pub mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;

use crate::api::{PokeApi, PokeApiClient};
use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::model::Profile;
use crate::core::state::{App, ProfileState};
use crate::tui::components::{EntryListState, ListEvent};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub entry_list: EntryListState,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            entry_list: EntryListState::new(),
        }
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        // Mouse capture lets the wheel drive the list cursor
        execute!(stdout(), EnableMouseCapture)?;
        info!("Terminal modes enabled (mouse capture)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture);
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let api: Arc<dyn PokeApi> = Arc::new(PokeApiClient::new());
    let mut app = App::new(api, &config);
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Channel for actions from background fetch tasks
    let (tx, rx) = mpsc::channel();

    // Startup fetch for the first page
    apply(&mut app, Action::LoadFirstPage, &tx);

    // Animation timer
    let start_time = std::time::Instant::now();
    let mut needs_redraw = true; // Force first frame

    loop {
        // A fetch in flight animates the spinner
        let animating = app.is_loading || app.profile == ProfileState::Loading;
        if animating {
            needs_redraw = true;
        }

        // Only draw when something changed
        if needs_redraw {
            let spinner_frame = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, spinner_frame))?;
            needs_redraw = false;
        }

        // Dynamic poll timeout: short when animating (~12fps), long when idle
        let timeout = if animating {
            std::time::Duration::from_millis(80)
        } else {
            std::time::Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            // Resize just needs a redraw (already flagged above)
            if matches!(event, TuiEvent::Resize) {
                continue;
            }

            // q / Ctrl+C always quits regardless of screen
            if matches!(event, TuiEvent::Quit) {
                if apply(&mut app, Action::Quit, &tx) == Effect::Quit {
                    should_quit = true;
                }
                continue;
            }

            // While the overlay is open it owns the keyboard
            if app.profile != ProfileState::Hidden {
                if matches!(event, TuiEvent::Escape) {
                    apply(&mut app, Action::CloseProfile, &tx);
                }
                continue;
            }

            // Esc on the list screen quits, same as q
            if matches!(event, TuiEvent::Escape) {
                if apply(&mut app, Action::Quit, &tx) == Effect::Quit {
                    should_quit = true;
                }
                continue;
            }

            if let Some(list_event) = tui.entry_list.handle_event(&event, app.entries.len()) {
                match list_event {
                    ListEvent::Open(index) => {
                        apply(&mut app, Action::SelectEntry(index), &tx);
                    }
                    // One page fetch at a time. A loading flag that never
                    // clears (failed fetch) also stops pagination here.
                    ListEvent::ReachedEnd => {
                        if !app.is_loading {
                            apply(&mut app, Action::LoadNextPage, &tx);
                        }
                    }
                }
            }
        }

        if should_quit {
            break;
        }

        // Handle results delivered by background fetch tasks
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            apply(&mut app, action, &tx);
        }
    }

    ratatui::restore();
    Ok(())
}

/// Runs `update()` and performs the returned effect. Fetch effects spawn a
/// tokio task that reports back through the action channel.
fn apply(app: &mut App, action: Action, tx: &mpsc::Sender<Action>) -> Effect {
    let effect = update(app, action);
    match &effect {
        Effect::FetchPage(url) => spawn_page_fetch(app.api.clone(), url.clone(), tx.clone()),
        Effect::FetchProfile(url) => spawn_profile_fetch(app.api.clone(), url.clone(), tx.clone()),
        Effect::Quit | Effect::None => {}
    }
    effect
}

fn spawn_page_fetch(api: Arc<dyn PokeApi>, url: String, tx: mpsc::Sender<Action>) {
    info!("Spawning page fetch: {}", url);
    tokio::spawn(async move {
        let action = match api.fetch_page(&url).await {
            Ok(page) => Action::PageLoaded(page),
            Err(e) => Action::PageFailed(e.to_string()),
        };
        if tx.send(action).is_err() {
            warn!("Failed to deliver page result: receiver dropped");
        }
    });
}

fn spawn_profile_fetch(api: Arc<dyn PokeApi>, url: String, tx: mpsc::Sender<Action>) {
    info!("Spawning profile fetch: {}", url);
    tokio::spawn(async move {
        let action = match api.fetch_profile(&url).await {
            Ok(body) => Action::ProfileLoaded(Profile::from(body)),
            Err(e) => Action::ProfileFailed(e.to_string()),
        };
        if tx.send(action).is_err() {
            warn!("Failed to deliver profile result: receiver dropped");
        }
    });
}
