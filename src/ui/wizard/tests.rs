//! Key-routing tests for the wizard screen

use std::sync::Arc;

use crossterm::event::KeyCode;

use super::{WizardResult, WizardScreen};
use crate::booking::{BookingSession, BookingStep};
use crate::catalog::Catalog;

fn session() -> BookingSession {
    BookingSession::new(Arc::new(Catalog::builtin().unwrap()))
}

fn type_str(wizard: &mut WizardScreen, session: &mut BookingSession, text: &str) {
    for c in text.chars() {
        wizard.handle_key(KeyCode::Char(c), session);
    }
}

/// Drive the wizard to the contact step with a hindu draft
fn to_contact_step(wizard: &mut WizardScreen, session: &mut BookingSession) {
    wizard.handle_key(KeyCode::Char(' '), session);
    wizard.handle_key(KeyCode::Enter, session);
    wizard.handle_key(KeyCode::Enter, session);
    wizard.handle_key(KeyCode::Enter, session);
    assert_eq!(session.step(), BookingStep::ContactInfo);
}

#[test]
fn space_selects_highlighted_religion() {
    let mut wizard = WizardScreen::new();
    let mut session = session();

    wizard.handle_key(KeyCode::Down, &mut session);
    wizard.handle_key(KeyCode::Char(' '), &mut session);

    let expected = &session.catalog().religions()[1].id.clone();
    assert_eq!(
        session.draft().religion.as_ref().map(|r| r.id.as_str()),
        Some(expected.as_str())
    );
    // Required kit items come with the selection
    assert!(!session.draft().selected_kit_items.is_empty());
}

#[test]
fn enter_on_first_step_selects_and_advances() {
    let mut wizard = WizardScreen::new();
    let mut session = session();

    wizard.handle_key(KeyCode::Enter, &mut session);
    assert!(session.draft().religion.is_some());
    assert_eq!(session.step(), BookingStep::KitSelection);
}

#[test]
fn enter_does_not_advance_past_an_unsatisfied_gate() {
    let mut wizard = WizardScreen::new();
    let mut session = session();
    to_contact_step(&mut wizard, &mut session);

    // Nothing typed yet, the contact gate must hold
    wizard.handle_key(KeyCode::Tab, &mut session);
    wizard.handle_key(KeyCode::Tab, &mut session);
    wizard.handle_key(KeyCode::Enter, &mut session);
    assert_eq!(session.step(), BookingStep::ContactInfo);
}

#[test]
fn kit_space_cannot_remove_required_items() {
    let mut wizard = WizardScreen::new();
    let mut session = session();
    wizard.handle_key(KeyCode::Enter, &mut session);

    let before = session.draft().selected_kit_items.len();
    // First kit item is required for every builtin religion
    wizard.handle_key(KeyCode::Char(' '), &mut session);
    assert_eq!(session.draft().selected_kit_items.len(), before);
}

#[test]
fn kit_space_toggles_an_optional_item() {
    let mut wizard = WizardScreen::new();
    let mut session = session();
    wizard.handle_key(KeyCode::Enter, &mut session);

    let kit = session.catalog().kit_for("hindu").unwrap().clone();
    let optional_index = kit.items.iter().position(|i| !i.required).unwrap();
    for _ in 0..optional_index {
        wizard.handle_key(KeyCode::Down, &mut session);
    }

    wizard.handle_key(KeyCode::Char(' '), &mut session);
    assert!(session.draft().has_kit_item(&kit.items[optional_index].id));

    wizard.handle_key(KeyCode::Char(' '), &mut session);
    assert!(!session.draft().has_kit_item(&kit.items[optional_index].id));
}

#[test]
fn service_selection_toggles_through_space() {
    let mut wizard = WizardScreen::new();
    let mut session = session();
    wizard.handle_key(KeyCode::Enter, &mut session);
    wizard.handle_key(KeyCode::Enter, &mut session);
    assert_eq!(session.step(), BookingStep::ServiceSelection);

    let first = session.catalog().services()[0].id.clone();
    wizard.handle_key(KeyCode::Char(' '), &mut session);
    assert!(session.draft().has_service(&first));
}

#[test]
fn contact_typing_flows_into_the_draft() {
    let mut wizard = WizardScreen::new();
    let mut session = session();
    to_contact_step(&mut wizard, &mut session);

    type_str(&mut wizard, &mut session, "Ravi Sharma");
    wizard.handle_key(KeyCode::Tab, &mut session);
    type_str(&mut wizard, &mut session, "12 Taj Road, Agra");
    wizard.handle_key(KeyCode::Tab, &mut session);
    type_str(&mut wizard, &mut session, "9876543210");

    let info = &session.draft().personal_info;
    assert_eq!(info.name, "Ravi Sharma");
    assert_eq!(info.address, "12 Taj Road, Agra");
    assert_eq!(info.phone, "9876543210");
    assert!(info.is_complete());

    // Enter on the last field advances to review
    wizard.handle_key(KeyCode::Enter, &mut session);
    assert_eq!(session.step(), BookingStep::Review);
}

#[test]
fn q_is_text_on_the_contact_step_not_quit() {
    let mut wizard = WizardScreen::new();
    let mut session = session();
    to_contact_step(&mut wizard, &mut session);

    let result = wizard.handle_key(KeyCode::Char('q'), &mut session);
    assert_eq!(result, WizardResult::Continue);
    assert_eq!(session.draft().personal_info.name, "q");
}

#[test]
fn review_enter_requests_submission() {
    let mut wizard = WizardScreen::new();
    let mut session = session();
    to_contact_step(&mut wizard, &mut session);

    type_str(&mut wizard, &mut session, "Ravi");
    wizard.handle_key(KeyCode::Tab, &mut session);
    type_str(&mut wizard, &mut session, "Agra");
    wizard.handle_key(KeyCode::Tab, &mut session);
    type_str(&mut wizard, &mut session, "9876543210");
    wizard.handle_key(KeyCode::Enter, &mut session);

    let result = wizard.handle_key(KeyCode::Enter, &mut session);
    assert_eq!(result, WizardResult::SubmitRequested);
    assert_eq!(session.step(), BookingStep::Review);
}

#[test]
fn review_has_no_back_navigation() {
    let mut wizard = WizardScreen::new();
    let mut session = session();
    to_contact_step(&mut wizard, &mut session);

    type_str(&mut wizard, &mut session, "Ravi");
    wizard.handle_key(KeyCode::Tab, &mut session);
    type_str(&mut wizard, &mut session, "Agra");
    wizard.handle_key(KeyCode::Tab, &mut session);
    type_str(&mut wizard, &mut session, "9876543210");
    wizard.handle_key(KeyCode::Enter, &mut session);

    wizard.handle_key(KeyCode::Esc, &mut session);
    assert_eq!(session.step(), BookingStep::Review);
}

#[test]
fn esc_retreats_and_selections_survive() {
    let mut wizard = WizardScreen::new();
    let mut session = session();
    wizard.handle_key(KeyCode::Enter, &mut session);
    let kit_before = session.draft().selected_kit_items.clone();

    wizard.handle_key(KeyCode::Esc, &mut session);
    assert_eq!(session.step(), BookingStep::ReligionSelection);
    assert_eq!(session.draft().selected_kit_items, kit_before);
}

#[test]
fn esc_on_first_step_quits() {
    let mut wizard = WizardScreen::new();
    let mut session = session();
    assert_eq!(
        wizard.handle_key(KeyCode::Esc, &mut session),
        WizardResult::Quit
    );
}

#[test]
fn list_cursor_wraps_around() {
    let mut wizard = WizardScreen::new();
    let session = session();
    let count = session.catalog().religions().len();

    for _ in 0..count {
        wizard.select_next(&session);
    }
    assert_eq!(wizard.religion_state.selected(), Some(0));

    wizard.select_prev(&session);
    assert_eq!(wizard.religion_state.selected(), Some(count - 1));
}
