use crossterm::event::{self, Event, KeyCode, KeyModifiers, MouseEventKind};

/// TUI-specific input events
pub enum TuiEvent {
    Quit,        // q or Ctrl+C
    Escape,      // dismiss the profile overlay (quits from the list screen)
    Submit,      // Enter - open the selected entry's profile
    CursorUp,
    CursorDown,
    PageUp,
    PageDown,
    JumpToStart, // Home key
    JumpToEnd,   // End key - also lands on the last loaded entry
    Resize,
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> Option<TuiEvent> {
    poll_event_timeout(std::time::Duration::ZERO)
}

/// Poll for an event, blocking up to `timeout`
pub fn poll_event_timeout(timeout: std::time::Duration) -> Option<TuiEvent> {
    if event::poll(timeout).unwrap() {
        match event::read().unwrap() {
            Event::Key(key_event) => {
                log::debug!(
                    "Key event: {:?} with modifiers {:?}",
                    key_event.code,
                    key_event.modifiers
                );
                match (key_event.modifiers, key_event.code) {
                    // Ctrl+C always quits
                    (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::Quit),
                    (_, KeyCode::Char('q')) => Some(TuiEvent::Quit),
                    (_, KeyCode::Esc) => Some(TuiEvent::Escape),
                    (_, KeyCode::Enter) => Some(TuiEvent::Submit),
                    // Vim-style navigation next to the arrow keys
                    (_, KeyCode::Up) | (_, KeyCode::Char('k')) => Some(TuiEvent::CursorUp),
                    (_, KeyCode::Down) | (_, KeyCode::Char('j')) => Some(TuiEvent::CursorDown),
                    (_, KeyCode::PageUp) => Some(TuiEvent::PageUp),
                    (_, KeyCode::PageDown) => Some(TuiEvent::PageDown),
                    (_, KeyCode::Home) => Some(TuiEvent::JumpToStart),
                    (_, KeyCode::End) => Some(TuiEvent::JumpToEnd),
                    _ => None,
                }
            }
            Event::Mouse(mouse_event) => match mouse_event.kind {
                MouseEventKind::ScrollUp => Some(TuiEvent::CursorUp),
                MouseEventKind::ScrollDown => Some(TuiEvent::CursorDown),
                _ => None,
            },
            Event::Resize(_, _) => Some(TuiEvent::Resize),
            _ => None,
        }
    } else {
        None
    }
}
