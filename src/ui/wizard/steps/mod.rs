//! Per-step rendering for the booking wizard

mod confirmation;
mod contact;
mod kit;
mod religion;
mod review;
mod services;

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::booking::BookingStep;
use crate::ui::centered_rect;

/// Draw the shared wizard chrome and return the inner drawable area
pub(crate) fn step_frame(frame: &mut Frame, title: &str) -> Rect {
    let area = centered_rect(70, 80, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(Line::from(vec![
            Span::raw(" "),
            Span::styled(
                "Antim",
                Style::default()
                    .fg(Color::LightYellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!(" - {title} ")),
        ]))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

/// "Step N of 5" progress header shown on the pre-confirmation screens
pub(crate) fn render_progress(frame: &mut Frame, area: Rect, step: BookingStep) {
    let progress = Paragraph::new(Line::from(vec![
        Span::styled(
            format!("Step {} of 5", step.index() + 1),
            Style::default().fg(Color::Cyan),
        ),
        Span::styled(
            format!("  {}", step.label()),
            Style::default().fg(Color::DarkGray),
        ),
    ]))
    .alignment(Alignment::Center);
    frame.render_widget(progress, area);
}

/// Footer line with key hints, e.g. `[("Enter", "continue"), ("Esc", "back")]`
pub(crate) fn render_footer(frame: &mut Frame, area: Rect, hints: &[(&str, &str)]) {
    let mut spans = Vec::new();
    for (i, (key, action)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(*key, Style::default().fg(Color::Yellow)));
        spans.push(Span::raw(format!(" {action}")));
    }
    let footer = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
    frame.render_widget(footer, area);
}

/// Rupee price span, e.g. "₹500"
pub(crate) fn price_span(price: u64) -> Span<'static> {
    Span::styled(format!("₹{price}"), Style::default().fg(Color::Green))
}
