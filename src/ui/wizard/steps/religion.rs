//! Religion selection step rendering

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph},
    Frame,
};

use super::{render_footer, render_progress, step_frame};
use crate::booking::{BookingSession, BookingStep};
use crate::ui::wizard::WizardScreen;

impl WizardScreen {
    pub(crate) fn render_religion_step(&mut self, frame: &mut Frame, session: &BookingSession) {
        let inner = step_frame(frame, "Select Religion");

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(2)
            .constraints([
                Constraint::Length(1), // Progress
                Constraint::Length(1), // Spacer
                Constraint::Length(2), // Description
                Constraint::Min(6),    // Religion list
                Constraint::Length(1), // Spacer
                Constraint::Length(1), // Footer
            ])
            .split(inner);

        render_progress(frame, chunks[0], BookingStep::ReligionSelection);

        let desc = Paragraph::new(
            "Choose the faith tradition. Required ritual items are prepared automatically.",
        )
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Gray));
        frame.render_widget(desc, chunks[2]);

        let chosen_id = session.draft().religion.as_ref().map(|r| r.id.as_str());
        let items: Vec<ListItem> = session
            .catalog()
            .religions()
            .iter()
            .map(|religion| {
                let marker = if chosen_id == Some(religion.id.as_str()) {
                    Span::styled("(x) ", Style::default().fg(Color::Green))
                } else {
                    Span::styled("( ) ", Style::default().fg(Color::DarkGray))
                };
                ListItem::new(Line::from(vec![
                    marker,
                    Span::raw(format!("{} ", religion.icon)),
                    Span::styled(
                        religion.name.clone(),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                ]))
            })
            .collect();

        let list = List::new(items)
            .highlight_style(
                Style::default()
                    .add_modifier(Modifier::REVERSED)
                    .fg(Color::Cyan),
            )
            .highlight_symbol("> ");
        frame.render_stateful_widget(list, chunks[3], &mut self.religion_state);

        render_footer(
            frame,
            chunks[5],
            &[
                ("↑↓", "move"),
                ("Space", "select"),
                ("Enter", "continue"),
                ("Esc", "quit"),
            ],
        );
    }
}
