//! # Entry List Component
//!
//! The main screen: every fetched Pokémon in a scrollable list. Moving the
//! cursor onto the last loaded entry signals the event loop that the end
//! of the list was reached, which requests another page.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `EntryListState` lives in `TuiState`
//! - `EntryList` is created each frame with borrowed state

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Padding, Paragraph};

use crate::core::model::ListEntry;
use crate::tui::component::Component;
use crate::tui::event::TuiEvent;

/// Rows skipped by PageUp/PageDown.
const PAGE_JUMP: usize = 15;

/// Persistent cursor state for the entry list.
pub struct EntryListState {
    pub selected: usize,
    pub list_state: ListState,
}

impl EntryListState {
    pub fn new() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            selected: 0,
            list_state,
        }
    }

    /// Handle a key event against `len` loaded entries, returning a
    /// ListEvent when the event loop should act.
    pub fn handle_event(&mut self, event: &TuiEvent, len: usize) -> Option<ListEvent> {
        if len == 0 {
            return None;
        }
        match event {
            TuiEvent::CursorUp => {
                self.select(self.selected.saturating_sub(1));
                None
            }
            TuiEvent::CursorDown => self.move_down(1, len),
            TuiEvent::PageUp => {
                self.select(self.selected.saturating_sub(PAGE_JUMP));
                None
            }
            TuiEvent::PageDown => self.move_down(PAGE_JUMP, len),
            TuiEvent::JumpToStart => {
                self.select(0);
                None
            }
            TuiEvent::JumpToEnd => {
                self.select(len - 1);
                Some(ListEvent::ReachedEnd)
            }
            TuiEvent::Submit => Some(ListEvent::Open(self.selected)),
            _ => None,
        }
    }

    fn select(&mut self, index: usize) {
        self.selected = index;
        self.list_state.select(Some(index));
    }

    /// Moves down by `step`, reporting when the cursor lands on (or pushes
    /// against) the last loaded entry.
    fn move_down(&mut self, step: usize, len: usize) -> Option<ListEvent> {
        let last = len - 1;
        let target = (self.selected + step).min(last);
        self.select(target);
        if target == last {
            Some(ListEvent::ReachedEnd)
        } else {
            None
        }
    }
}

impl Default for EntryListState {
    fn default() -> Self {
        Self::new()
    }
}

/// Events emitted by the entry list.
#[derive(Debug, PartialEq)]
pub enum ListEvent {
    /// Open the detail overlay for the entry at this index.
    Open(usize),
    /// The cursor reached the end of the loaded entries.
    ReachedEnd,
}

/// Transient render wrapper for the entry list.
pub struct EntryList<'a> {
    state: &'a mut EntryListState,
    entries: &'a [ListEntry],
}

impl<'a> EntryList<'a> {
    pub fn new(state: &'a mut EntryListState, entries: &'a [ListEntry]) -> Self {
        Self { state, entries }
    }
}

impl Component for EntryList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Pokédex ")
            .title_alignment(Alignment::Left)
            .padding(Padding::horizontal(1));

        if self.entries.is_empty() {
            let empty = Paragraph::new("Nothing here yet.")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(empty, area);
            return;
        }

        let inner_width = area.width.saturating_sub(4) as usize; // borders + padding

        let items: Vec<ListItem> = self
            .entries
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                let number = format!("{:>4}  ", i + 1);
                let name_width = 20.min(inner_width.saturating_sub(number.len()));
                let name = truncate_str(&entry.name, name_width);
                let padded_name = format!("{:<width$}", name, width = name_width);

                let style = if i == self.state.selected {
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD | Modifier::REVERSED)
                } else {
                    Style::default().fg(Color::Gray)
                };
                let dim_style = if i == self.state.selected {
                    style
                } else {
                    Style::default().fg(Color::DarkGray)
                };

                ListItem::new(Line::from(vec![
                    Span::styled(number, dim_style),
                    Span::styled(padded_name, style),
                    Span::styled(format!("  {}", entry.url), dim_style),
                ]))
            })
            .collect();

        let list = List::new(items).block(block);

        frame.render_stateful_widget(list, area, &mut self.state.list_state);
    }
}

/// Truncate a string to fit within `max_width` chars, adding "..." if needed.
fn truncate_str(s: &str, max_width: usize) -> String {
    if s.len() <= max_width {
        s.to_string()
    } else if max_width <= 3 {
        ".".repeat(max_width)
    } else {
        format!("{}...", &s[..max_width - 3])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_down_emits_reached_end_on_last_entry() {
        let mut state = EntryListState::new();
        assert_eq!(state.handle_event(&TuiEvent::CursorDown, 3), None);
        assert_eq!(state.selected, 1);
        assert_eq!(
            state.handle_event(&TuiEvent::CursorDown, 3),
            Some(ListEvent::ReachedEnd)
        );
        assert_eq!(state.selected, 2);
        // Pushing past the end stays put but keeps signalling
        assert_eq!(
            state.handle_event(&TuiEvent::CursorDown, 3),
            Some(ListEvent::ReachedEnd)
        );
        assert_eq!(state.selected, 2);
    }

    #[test]
    fn test_submit_opens_selected_entry() {
        let mut state = EntryListState::new();
        state.handle_event(&TuiEvent::CursorDown, 5);
        assert_eq!(
            state.handle_event(&TuiEvent::Submit, 5),
            Some(ListEvent::Open(1))
        );
    }

    #[test]
    fn test_empty_list_ignores_events() {
        let mut state = EntryListState::new();
        assert_eq!(state.handle_event(&TuiEvent::Submit, 0), None);
        assert_eq!(state.handle_event(&TuiEvent::CursorDown, 0), None);
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn test_jump_to_end_selects_last_and_signals() {
        let mut state = EntryListState::new();
        assert_eq!(
            state.handle_event(&TuiEvent::JumpToEnd, 10),
            Some(ListEvent::ReachedEnd)
        );
        assert_eq!(state.selected, 9);
    }

    #[test]
    fn test_page_down_clamps_to_last_entry() {
        let mut state = EntryListState::new();
        assert_eq!(
            state.handle_event(&TuiEvent::PageDown, 5),
            Some(ListEvent::ReachedEnd)
        );
        assert_eq!(state.selected, 4);
    }

    #[test]
    fn test_truncate_str() {
        assert_eq!(truncate_str("bulbasaur", 20), "bulbasaur");
        assert_eq!(truncate_str("crabominable", 8), "crabo...");
    }
}
