//! # Profile Overlay
//!
//! Centered overlay showing the hydrated profile for the selected entry.
//! Opened with Enter, dismissed with Esc. The record is dropped on
//! dismissal and fetched fresh on the next visit; a fetch failure leaves
//! the placeholder on screen.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph};

use crate::core::state::ProfileState;
use crate::tui::component::Component;
use crate::tui::ui::SPINNER_FRAMES;

/// Transient render wrapper for the profile overlay.
pub struct ProfileView<'a> {
    profile: &'a ProfileState,
    title: &'a str,
    spinner_frame: usize,
}

impl<'a> ProfileView<'a> {
    pub fn new(profile: &'a ProfileState, title: &'a str, spinner_frame: usize) -> Self {
        Self {
            profile,
            title,
            spinner_frame,
        }
    }
}

impl Component for ProfileView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let overlay = centered_rect(60, 60, area);

        // Clear underlying content
        frame.render_widget(Clear, overlay);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(format!(" {} ", self.title))
            .title_alignment(Alignment::Left)
            .title_bottom(Line::from(" Esc Back ").centered())
            .padding(Padding::horizontal(1));

        let label_style = Style::default().fg(Color::DarkGray);

        match self.profile {
            // Never rendered while hidden; guard anyway
            ProfileState::Hidden => {}
            ProfileState::Loading => {
                let spinner = SPINNER_FRAMES[self.spinner_frame % SPINNER_FRAMES.len()];
                let waiting = Paragraph::new(format!("{spinner} Fetching profile..."))
                    .style(Style::default().fg(Color::Cyan))
                    .alignment(Alignment::Center)
                    .block(block);
                frame.render_widget(waiting, overlay);
            }
            ProfileState::Loaded(profile) => {
                let mut lines = vec![
                    Line::from(vec![
                        Span::styled(format!("{:<16}", "base experience"), label_style),
                        Span::raw(profile.base_experience.to_string()),
                    ]),
                    Line::from(vec![
                        Span::styled(format!("{:<16}", "height"), label_style),
                        // PokeAPI reports height in decimetres
                        Span::raw(format!("{} dm", profile.height)),
                    ]),
                    Line::default(),
                ];

                for stat in &profile.stats {
                    let bar_len = (stat.value as usize / 8).min(24);
                    lines.push(Line::from(vec![
                        Span::styled(format!("{:<16}", stat.name), label_style),
                        Span::raw(format!("{:>4}  ", stat.value)),
                        Span::styled("█".repeat(bar_len), Style::default().fg(Color::Cyan)),
                    ]));
                }

                let body = Paragraph::new(lines).block(block);
                frame.render_widget(body, overlay);
            }
        }
    }
}

/// Compute a centered rect using percentage of the outer rect.
fn centered_rect(percent_x: u16, percent_y: u16, outer: Rect) -> Rect {
    let [_, center_v, _] = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .areas(outer);
    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(center_v);
    center
}
