//! Order review and pending hand-off rendering

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use tracing::warn;

use super::{price_span, render_footer, render_progress, step_frame};
use crate::booking::{BookingSession, BookingStep};
use crate::ui::centered_rect;
use crate::ui::wizard::WizardScreen;

impl WizardScreen {
    pub(crate) fn render_review_step(&mut self, frame: &mut Frame, session: &BookingSession) {
        let inner = step_frame(frame, "Review Order");

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(2)
            .constraints([
                Constraint::Length(1), // Progress
                Constraint::Length(1), // Spacer
                Constraint::Min(10),   // Itemized order
                Constraint::Length(1), // Spacer
                Constraint::Length(1), // Footer
            ])
            .split(inner);

        render_progress(frame, chunks[0], BookingStep::Review);

        let composition = match session.compose() {
            Ok(c) => c,
            Err(e) => {
                warn!(error = %e, "Failed to compose order for review");
                let msg = Paragraph::new("Unable to prepare the order summary.")
                    .alignment(Alignment::Center)
                    .style(Style::default().fg(Color::Red));
                frame.render_widget(msg, chunks[2]);
                render_footer(frame, chunks[4], &[("q", "quit")]);
                return;
            }
        };

        let draft = session.draft();
        let mut lines = Vec::new();

        if let Some(religion) = &draft.religion {
            lines.push(Line::from(vec![
                Span::styled("Religion: ", Style::default().fg(Color::Gray)),
                Span::raw(format!("{} {}", religion.icon, religion.name)),
            ]));
            lines.push(Line::raw(""));
        }

        if !draft.selected_kit_items.is_empty() {
            lines.push(Line::from(Span::styled(
                "Ritual Kit",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )));
            for item in &draft.selected_kit_items {
                lines.push(Line::from(vec![
                    Span::raw(format!("  • {}  ", item.name)),
                    price_span(item.price),
                ]));
            }
            lines.push(Line::from(vec![
                Span::styled("  Subtotal  ", Style::default().fg(Color::Gray)),
                price_span(composition.kit_subtotal),
            ]));
            lines.push(Line::raw(""));
        }

        if !draft.selected_services.is_empty() {
            lines.push(Line::from(Span::styled(
                "Services",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )));
            for service in &draft.selected_services {
                let mut spans = vec![
                    Span::raw(format!("  • {}  ", service.name)),
                    price_span(service.price),
                ];
                if let Some(duration) = &service.duration {
                    spans.push(Span::styled(
                        format!("  ({duration})"),
                        Style::default().fg(Color::DarkGray),
                    ));
                }
                lines.push(Line::from(spans));
            }
            lines.push(Line::from(vec![
                Span::styled("  Subtotal  ", Style::default().fg(Color::Gray)),
                price_span(composition.services_subtotal),
            ]));
            lines.push(Line::raw(""));
        }

        lines.push(Line::from(Span::styled(
            "Contact",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::raw(format!("  {}", draft.personal_info.name)));
        for addr_line in draft.personal_info.address.lines() {
            lines.push(Line::raw(format!("  {addr_line}")));
        }
        lines.push(Line::raw(format!("  {}", draft.personal_info.phone)));
        lines.push(Line::raw(""));

        lines.push(Line::from(vec![
            Span::styled(
                "Grand Total  ",
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            price_span(composition.grand_total),
        ]));

        let order = Paragraph::new(lines)
            .block(
                Block::default()
                    .title(" Order Summary ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .wrap(Wrap { trim: false });
        frame.render_widget(order, chunks[2]);

        render_footer(
            frame,
            chunks[4],
            &[("Enter", "send via WhatsApp"), ("q", "quit")],
        );
    }

    /// Shown after the hand-off while waiting for the user to come back
    pub(crate) fn render_pending_step(&mut self, frame: &mut Frame) {
        let area = centered_rect(60, 40, frame.area());
        frame.render_widget(Clear, area);

        let block = Block::default()
            .title(" Sending via WhatsApp ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(2)
            .constraints([
                Constraint::Length(2),
                Constraint::Length(2),
                Constraint::Min(1),
                Constraint::Length(1),
            ])
            .split(inner);

        let msg = Paragraph::new("WhatsApp has been opened with your booking request.")
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: false });
        frame.render_widget(msg, chunks[0]);

        let hint = Paragraph::new("Send the message there, then return to this window.")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Gray))
            .wrap(Wrap { trim: false });
        frame.render_widget(hint, chunks[1]);

        render_footer(
            frame,
            chunks[3],
            &[("Enter", "I have sent it"), ("Esc", "back to review")],
        );
    }
}
