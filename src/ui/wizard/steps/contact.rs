//! Contact details step rendering

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::{render_footer, render_progress, step_frame};
use crate::booking::{BookingSession, BookingStep};
use crate::ui::wizard::WizardScreen;

impl WizardScreen {
    pub(crate) fn render_contact_step(&mut self, frame: &mut Frame, session: &BookingSession) {
        let inner = step_frame(frame, "Contact Details");

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(2)
            .constraints([
                Constraint::Length(1), // Progress
                Constraint::Length(1), // Spacer
                Constraint::Length(1), // Name label
                Constraint::Length(1), // Name field
                Constraint::Length(1), // Spacer
                Constraint::Length(1), // Address label
                Constraint::Length(5), // Address area
                Constraint::Length(1), // Spacer
                Constraint::Length(1), // Phone label
                Constraint::Length(1), // Phone field
                Constraint::Min(1),    // Spacer
                Constraint::Length(1), // Validation hint
                Constraint::Length(1), // Footer
            ])
            .split(inner);

        render_progress(frame, chunks[0], BookingStep::ContactInfo);

        let focused = self.contact.focused_index;
        render_label(frame, chunks[2], "Name", focused == 0);
        self.contact.name.render(frame, chunks[3], focused == 0);

        render_label(frame, chunks[5], "Address", focused == 1);
        self.contact.render_address(frame, chunks[6], focused == 1);

        render_label(frame, chunks[8], "Phone", focused == 2);
        self.contact.phone.render(frame, chunks[9], focused == 2);

        if !session.draft().personal_info.is_complete() {
            let hint = Paragraph::new("All three fields are needed before continuing.")
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::DarkGray));
            frame.render_widget(hint, chunks[11]);
        }

        render_footer(
            frame,
            chunks[12],
            &[
                ("Tab", "next field"),
                ("Enter", "continue"),
                ("Esc", "back"),
            ],
        );
    }
}

fn render_label(frame: &mut Frame, area: Rect, text: &str, focused: bool) {
    let style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::Gray)
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(text.to_string(), style))),
        area,
    );
}
