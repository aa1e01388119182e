//! Confirmation step rendering

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::{render_footer, step_frame};
use crate::booking::BookingSession;
use crate::ui::wizard::WizardScreen;

impl WizardScreen {
    pub(crate) fn render_confirmation_step(&mut self, frame: &mut Frame, session: &BookingSession) {
        let inner = step_frame(frame, "Booking Confirmed");

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(2)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(2),
                Constraint::Length(2),
                Constraint::Min(1),
                Constraint::Length(1),
            ])
            .split(inner);

        let title = Paragraph::new(Line::from(Span::styled(
            "✓ Booking Request Sent",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(title, chunks[0]);

        let name = &session.draft().personal_info.name;
        let thanks = Paragraph::new(format!(
            "Thank you{}{}. Our team will contact you shortly.",
            if name.trim().is_empty() { "" } else { ", " },
            name.trim()
        ))
        .alignment(Alignment::Center);
        frame.render_widget(thanks, chunks[1]);

        let note = Paragraph::new("We are here to support you in this difficult time.")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Gray));
        frame.render_widget(note, chunks[2]);

        render_footer(frame, chunks[4], &[("Enter", "exit"), ("q", "exit")]);
    }
}
