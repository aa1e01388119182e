//! Ritual kit step rendering

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
    pub(crate) fn render_kit_step(&mut self, frame: &mut Frame, session: &BookingSession) {
        let inner = step_frame(frame, "Ritual Kit");

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(2)
            .constraints([
                Constraint::Length(1), // Progress
                Constraint::Length(1), // Spacer
                Constraint::Length(2), // Description
                Constraint::Min(6),    // Kit item list
                Constraint::Length(2), // Highlighted item description
                Constraint::Length(1), // Subtotal
                Constraint::Length(1), // Footer
            ])
            .split(inner);

        render_progress(frame, chunks[0], BookingStep::KitSelection);

        let kit = session
            .draft()
            .religion
            .as_ref()
            .and_then(|r| session.catalog().kit_for(&r.id));

        let Some(kit) = kit else {
            let empty = Paragraph::new("No ritual kit is available for this selection.")
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::DarkGray));
            frame.render_widget(empty, chunks[3]);
            render_footer(frame, chunks[6], &[("Esc", "back"), ("q", "quit")]);
            return;
        };

        let desc = Paragraph::new("Required items are pre-selected and cannot be removed.")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Gray));
        frame.render_widget(desc, chunks[2]);

        let items: Vec<ListItem> = kit
            .items
            .iter()
            .map(|item| {
                let selected = session.draft().has_kit_item(&item.id);
                let marker = if selected {
                    Span::styled("[x] ", Style::default().fg(Color::Green))
                } else {
                    Span::styled("[ ] ", Style::default().fg(Color::DarkGray))
                };
                let mut spans = vec![
                    marker,
                    Span::styled(
                        item.name.clone(),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::raw("  "),
                    price_span(item.price),
                ];
                if item.required {
                    spans.push(Span::styled(
                        "  required",
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
        frame.render_stateful_widget(list, chunks[3], &mut self.kit_state);

        // Description of the highlighted item
        if let Some(item) = self.kit_state.selected().and_then(|i| kit.items.get(i)) {
            let detail = Paragraph::new(item.description.as_str())
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::DarkGray));
            frame.render_widget(detail, chunks[4]);
        }

        let subtotal: u64 = session
            .draft()
            .selected_kit_items
            .iter()
            .map(|i| i.price)
            .sum();
        let subtotal_line = Paragraph::new(Line::from(vec![
            Span::styled("Kit subtotal: ", Style::default().fg(Color::Gray)),
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
