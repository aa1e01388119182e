//! The six-screen booking wizard

use crossterm::event::KeyCode;
use ratatui::{widgets::ListState, Frame};

use crate::booking::{BookingSession, BookingStep};
use crate::ui::form::ContactForm;

pub mod steps;

#[cfg(test)]
mod tests;

/// Outcome of a key press routed through the wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardResult {
    Continue,
    /// The user confirmed the order on the review screen
    SubmitRequested,
    Quit,
}

/// Presentation state for the wizard. All booking data lives in the
/// session; this only holds cursors and the contact form buffers.
pub struct WizardScreen {
    pub(crate) religion_state: ListState,
    pub(crate) kit_state: ListState,
    pub(crate) service_state: ListState,
    pub(crate) contact: ContactForm,
}

impl WizardScreen {
    pub fn new() -> Self {
        let mut religion_state = ListState::default();
        religion_state.select(Some(0));

        let mut kit_state = ListState::default();
        kit_state.select(Some(0));

        let mut service_state = ListState::default();
        service_state.select(Some(0));

        Self {
            religion_state,
            kit_state,
            service_state,
            contact: ContactForm::new(),
        }
    }

    /// Number of list rows on the current step
    fn list_len(&self, session: &BookingSession) -> usize {
        match session.step() {
            BookingStep::ReligionSelection => session.catalog().religions().len(),
            BookingStep::KitSelection => session
                .draft()
                .religion
                .as_ref()
                .and_then(|r| session.catalog().kit_for(&r.id))
                .map_or(0, |kit| kit.items.len()),
            BookingStep::ServiceSelection => session.catalog().services().len(),
            _ => 0,
        }
    }

    fn list_state_mut(&mut self, step: BookingStep) -> Option<&mut ListState> {
        match step {
            BookingStep::ReligionSelection => Some(&mut self.religion_state),
            BookingStep::KitSelection => Some(&mut self.kit_state),
            BookingStep::ServiceSelection => Some(&mut self.service_state),
            _ => None,
        }
    }

    /// Move to next item in the current step's list
    pub fn select_next(&mut self, session: &BookingSession) {
        let len = self.list_len(session);
        if len == 0 {
            return;
        }
        if let Some(state) = self.list_state_mut(session.step()) {
            let i = state.selected().map_or(0, |i| (i + 1) % len);
            state.select(Some(i));
        }
    }

    /// Move to previous item in the current step's list
    pub fn select_prev(&mut self, session: &BookingSession) {
        let len = self.list_len(session);
        if len == 0 {
            return;
        }
        if let Some(state) = self.list_state_mut(session.step()) {
            let i = state
                .selected()
                .map_or(0, |i| if i == 0 { len - 1 } else { i - 1 });
            state.select(Some(i));
        }
    }

    /// Act on the highlighted item (Space key)
    pub fn toggle_selection(&mut self, session: &mut BookingSession) {
        match session.step() {
            BookingStep::ReligionSelection => {
                let id = self
                    .religion_state
                    .selected()
                    .and_then(|i| session.catalog().religions().get(i))
                    .map(|r| r.id.clone());
                if let Some(id) = id {
                    session.select_religion(&id);
                    // Fresh kit list, start the cursor at the top
                    self.kit_state.select(Some(0));
                }
            }
            BookingStep::KitSelection => {
                let item = session
                    .draft()
                    .religion
                    .as_ref()
                    .and_then(|r| session.catalog().kit_for(&r.id))
                    .and_then(|kit| {
                        self.kit_state
                            .selected()
                            .and_then(|i| kit.items.get(i))
                            .cloned()
                    });
                if let Some(item) = item {
                    session.toggle_kit_item(&item);
                }
            }
            BookingStep::ServiceSelection => {
                let service = self
                    .service_state
                    .selected()
                    .and_then(|i| session.catalog().services().get(i))
                    .cloned();
                if let Some(service) = service {
                    session.toggle_service(&service);
                }
            }
            _ => {}
        }
    }

    /// Route a key press for the current step. Pending-submission keys are
    /// handled by the caller before reaching here.
    pub fn handle_key(&mut self, key: KeyCode, session: &mut BookingSession) -> WizardResult {
        if session.step() == BookingStep::ContactInfo {
            return self.handle_contact_key(key, session);
        }

        match key {
            KeyCode::Char('q') => WizardResult::Quit,
            KeyCode::Up | KeyCode::Char('k') => {
                self.select_prev(session);
                WizardResult::Continue
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.select_next(session);
                WizardResult::Continue
            }
            KeyCode::Char(' ') => {
                self.toggle_selection(session);
                WizardResult::Continue
            }
            KeyCode::Enter => match session.step() {
                BookingStep::Review => WizardResult::SubmitRequested,
                BookingStep::Confirmation => WizardResult::Quit,
                BookingStep::ReligionSelection => {
                    // Enter both picks the highlighted religion and moves on
                    if session.draft().religion.is_none() {
                        self.toggle_selection(session);
                    }
                    session.advance();
                    WizardResult::Continue
                }
                _ => {
                    if session.advance() == BookingStep::ContactInfo {
                        // Keep the form buffers in step with the draft
                        self.contact.set_from(&session.draft().personal_info);
                    }
                    WizardResult::Continue
                }
            },
            KeyCode::Esc => {
                match session.step() {
                    // The review screen has no back navigation
                    BookingStep::Review | BookingStep::Confirmation => {}
                    BookingStep::ReligionSelection => return WizardResult::Quit,
                    _ => {
                        session.retreat();
                    }
                }
                WizardResult::Continue
            }
            _ => WizardResult::Continue,
        }
    }

    /// Key routing on the contact step: most keys feed the focused field
    fn handle_contact_key(&mut self, key: KeyCode, session: &mut BookingSession) -> WizardResult {
        match key {
            KeyCode::Esc => {
                session.retreat();
                return WizardResult::Continue;
            }
            KeyCode::Tab => self.contact.next_field(),
            KeyCode::BackTab => self.contact.prev_field(),
            KeyCode::Enter => {
                // Enter inside the address area inserts a newline
                if self.contact.focused_index == 1 {
                    self.contact.handle_key(key);
                } else if self.contact.is_last_field() && session.can_advance() {
                    session.advance();
                    return WizardResult::Continue;
                } else {
                    self.contact.next_field();
                }
            }
            _ => {
                self.contact.handle_key(key);
            }
        }
        session.set_personal_info(self.contact.personal_info());
        WizardResult::Continue
    }

    /// Render the screen for the current step. `pending` swaps the review
    /// screen for the awaiting-hand-off panel.
    pub fn render(&mut self, frame: &mut Frame, session: &BookingSession, pending: bool) {
        match session.step() {
            BookingStep::ReligionSelection => self.render_religion_step(frame, session),
            BookingStep::KitSelection => self.render_kit_step(frame, session),
            BookingStep::ServiceSelection => self.render_services_step(frame, session),
            BookingStep::ContactInfo => self.render_contact_step(frame, session),
            BookingStep::Review => {
                if pending {
                    self.render_pending_step(frame);
                } else {
                    self.render_review_step(frame, session);
                }
            }
            BookingStep::Confirmation => self.render_confirmation_step(frame, session),
        }
    }
}

impl Default for WizardScreen {
    fn default() -> Self {
        Self::new()
    }
}
