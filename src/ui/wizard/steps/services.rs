//! Additional services step rendering

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph},
    Frame,
};

use super::{price_span, render_footer, render_progress, step_frame};
use crate::booking::{BookingSession, BookingStep};
use crate::ui::wizard::WizardScreen;

impl WizardScreen {
    pub(crate) fn render_services_step(&mut self, frame: &mut Frame, session: &BookingSession) {
        let inner = step_frame(frame, "Additional Services");

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(2)
            .constraints([
                Constraint::Length(1), // Progress
                Constraint::Length(1), // Spacer
                Constraint::Length(2), // Description
                Constraint::Min(8),    // Service list
                Constraint::Length(2), // Highlighted service description
                Constraint::Length(1), // Subtotal
                Constraint::Length(1), // Footer
            ])
            .split(inner);

        render_progress(frame, chunks[0], BookingStep::ServiceSelection);

        let desc = Paragraph::new("All services are optional. You can continue without any.")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Gray));
        frame.render_widget(desc, chunks[2]);

        let items: Vec<ListItem> = session
            .catalog()
            .services()
            .iter()
            .map(|service| {
                let selected = session.draft().has_service(&service.id);
                let marker = if selected {
                    Span::styled("[x] ", Style::default().fg(Color::Green))
                } else {
                    Span::styled("[ ] ", Style::default().fg(Color::DarkGray))
                };
                let mut spans = vec![
                    marker,
                    Span::styled(
                        service.name.clone(),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::raw("  "),
                    price_span(service.price),
                ];
                if let Some(duration) = &service.duration {
                    spans.push(Span::styled(
                        format!("  ({duration})"),
                        Style::default().fg(Color::DarkGray),
                    ));
                }
                ListItem::new(Line::from(spans))
            })
            .collect();

        let list = List::new(items)
            .highlight_style(
                Style::default()
                    .add_modifier(Modifier::REVERSED)
                    .fg(Color::Cyan),
            )
            .highlight_symbol("> ");
        frame.render_stateful_widget(list, chunks[3], &mut self.service_state);

        if let Some(service) = self
            .service_state
            .selected()
            .and_then(|i| session.catalog().services().get(i))
        {
            let detail = Paragraph::new(service.description.as_str())
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::DarkGray));
            frame.render_widget(detail, chunks[4]);
        }

        let subtotal: u64 = session
            .draft()
            .selected_services
            .iter()
            .map(|s| s.price)
            .sum();
        let subtotal_line = Paragraph::new(Line::from(vec![
            Span::styled("Services subtotal: ", Style::default().fg(Color::Gray)),
            price_span(subtotal),
        ]))
        .alignment(Alignment::Center);
        frame.render_widget(subtotal_line, chunks[5]);

        render_footer(
            frame,
            chunks[6],
            &[
                ("↑↓", "move"),
                ("Space", "toggle"),
                ("Enter", "continue"),
                ("Esc", "back"),
            ],
        );
    }
}
