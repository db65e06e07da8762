//! Frame composition: title bar, entry list, status footer, and the
//! profile overlay when one is open.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Color, Style};
use ratatui::text::Span;

use crate::core::state::{App, ProfileState};
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{EntryList, ProfileView};

pub const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(0), Length(1)]);
    let [title_area, main_area, status_area] = layout.areas(frame.area());

    // Title bar
    let title_text = if app.status_message.is_empty() {
        format!("PokéNav ({} loaded)", app.entries.len())
    } else {
        format!("PokéNav ({} loaded) | {}", app.entries.len(), app.status_message)
    };
    frame.render_widget(Span::raw(title_text), title_area);

    // Entry list fills the frame
    EntryList::new(&mut tui.entry_list, &app.entries).render(frame, main_area);

    // Status footer: in-flight indicator, otherwise key help
    let footer = if app.is_loading {
        Span::styled(
            format!(
                " {} Loading...",
                SPINNER_FRAMES[spinner_frame % SPINNER_FRAMES.len()]
            ),
            Style::default().fg(Color::Cyan),
        )
    } else {
        Span::styled(
            " ↑↓ Navigate  Enter Profile  q Quit",
            Style::default().fg(Color::DarkGray),
        )
    };
    frame.render_widget(footer, status_area);

    // Detail overlay above the list
    if app.profile != ProfileState::Hidden {
        let title = app.entry_name(tui.entry_list.selected);
        ProfileView::new(&app.profile, title, spinner_frame).render(frame, main_area);
    }
}
