use anyhow::Result;
use crossterm::{
    event::{self, DisableFocusChange, EnableFocusChange, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{info, warn};

use crate::booking::BookingSession;
use crate::catalog::Catalog;
use crate::config::Config;
use crate::gateway::{CompletionSignal, SubmissionGateway, SystemChannel};
use crate::ui::wizard::{WizardResult, WizardScreen};

pub struct App {
    config: Config,
    session: BookingSession,
    wizard: WizardScreen,
    gateway: SubmissionGateway<SystemChannel>,
    should_quit: bool,
}

impl App {
    pub fn new(config: Config, catalog: Arc<Catalog>) -> Self {
        let gateway = SubmissionGateway::new(
            SystemChannel,
            config.booking.contact_number.clone(),
            config.booking.settle_delay(),
        );
        Self {
            config,
            session: BookingSession::new(catalog),
            wizard: WizardScreen::new(),
            gateway,
            should_quit: false,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal. Focus change reporting drives the completion
        // detection after the WhatsApp hand-off.
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableFocusChange)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let tick_rate = Duration::from_millis(self.config.ui.refresh_rate_ms);

        while !self.should_quit {
            let pending = self.gateway.is_pending();
            terminal.draw(|f| {
                self.wizard.render(f, &self.session, pending);
            })?;

            if event::poll(tick_rate)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        self.handle_key(key.code);
                    }
                    Event::FocusGained => {
                        self.gateway
                            .notify_signal(CompletionSignal::FocusRegained, Instant::now());
                    }
                    _ => {}
                }
            }

            // Promote a settled hand-off to the confirmation screen
            if self.gateway.poll_complete(Instant::now()) {
                self.session.complete_submission();
            }
        }

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableFocusChange)?;
        terminal.show_cursor()?;

        info!("Wizard closed");
        Ok(())
    }

    fn handle_key(&mut self, key: KeyCode) {
        // While the hand-off is pending, only confirm and cancel apply
        if self.gateway.is_pending() {
            match key {
                KeyCode::Enter => {
                    self.gateway
                        .notify_signal(CompletionSignal::UserConfirmed, Instant::now());
                }
                KeyCode::Esc => self.gateway.cancel(),
                _ => {}
            }
            return;
        }

        match self.wizard.handle_key(key, &mut self.session) {
            WizardResult::Continue => {}
            WizardResult::Quit => self.should_quit = true,
            WizardResult::SubmitRequested => self.submit(),
        }
    }

    /// Compose the order and hand it to the external channel. Failures are
    /// logged and leave the user on the review screen.
    fn submit(&mut self) {
        if !self.session.can_submit() {
            return;
        }
        match self.session.compose() {
            Ok(composition) => {
                if let Err(e) = self.gateway.submit(&composition) {
                    warn!(error = %e, "Could not open the messaging channel");
                }
            }
            Err(e) => warn!(error = %e, "Could not compose the order message"),
        }
    }
}
