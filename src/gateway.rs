//! Submission gateway: hands the composed order to WhatsApp and tracks the
//! best-effort completion signal.
//!
//! The external channel only receives a URI; whether the user actually sends
//! the message cannot be observed. Completion is inferred from the terminal
//! regaining focus (or an explicit user confirmation), debounced by a
//! settling delay so transient focus flicker does not count. The gateway is
//! a polled one-shot: only the first qualifying signal after entering
//! Pending arms the delay, and completion fires at most once per submission.

use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::booking::OrderComposition;

#[derive(Debug, Error)]
pub enum ChannelError {
    #[error("Failed to open external channel: {0}")]
    OpenFailed(#[from] std::io::Error),
}

/// The external messaging hand-off, treated as a black box that accepts a
/// URI. Swapped for a recording mock in tests.
pub trait HandoffChannel {
    fn open(&self, uri: &str) -> Result<(), ChannelError>;
}

/// Opens the URI with the platform opener in a detached process
pub struct SystemChannel;

impl HandoffChannel for SystemChannel {
    fn open(&self, uri: &str) -> Result<(), ChannelError> {
        #[cfg(target_os = "macos")]
        let mut command = {
            let mut c = Command::new("open");
            c.arg(uri);
            c
        };

        #[cfg(target_os = "windows")]
        let mut command = {
            let mut c = Command::new("cmd");
            c.args(["/C", "start", "", uri]);
            c
        };

        #[cfg(not(any(target_os = "macos", target_os = "windows")))]
        let mut command = {
            let mut c = Command::new("xdg-open");
            c.arg(uri);
            c
        };

        command
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;

        debug!(uri_len = uri.len(), "Opened external channel");
        Ok(())
    }
}

/// Best-effort signs that the user came back from the external channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionSignal {
    /// The terminal regained input focus
    FocusRegained,
    /// The process returned to the foreground (resume after suspend)
    ForegroundVisible,
    /// The user explicitly confirmed they sent the message
    UserConfirmed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HandoffState {
    Idle,
    /// Waiting for the user to come back. `signal_at` is set by the first
    /// qualifying signal; later signals are ignored.
    Pending { signal_at: Option<Instant> },
}

/// Tracks one submission hand-off at a time
pub struct SubmissionGateway<C: HandoffChannel> {
    channel: C,
    contact_number: String,
    settle_delay: Duration,
    state: HandoffState,
}

impl<C: HandoffChannel> SubmissionGateway<C> {
    pub fn new(channel: C, contact_number: String, settle_delay: Duration) -> Self {
        Self {
            channel,
            contact_number,
            settle_delay,
            state: HandoffState::Idle,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.state, HandoffState::Pending { .. })
    }

    /// The wa.me URI carrying the encoded order message
    pub fn destination_uri(&self, composition: &OrderComposition) -> String {
        format!(
            "https://wa.me/{}?text={}",
            self.contact_number,
            composition.encoded_message()
        )
    }

    /// Open the external channel with the composed order and enter Pending
    pub fn submit(&mut self, composition: &OrderComposition) -> Result<(), ChannelError> {
        let uri = self.destination_uri(composition);
        self.channel.open(&uri)?;
        self.state = HandoffState::Pending { signal_at: None };
        info!(
            grand_total = composition.grand_total,
            "Submitted booking, awaiting return from external channel"
        );
        Ok(())
    }

    /// Record a completion signal. Only the first signal after entering
    /// Pending arms the settling delay.
    pub fn notify_signal(&mut self, signal: CompletionSignal, now: Instant) {
        match self.state {
            HandoffState::Pending { signal_at: None } => {
                debug!(?signal, "Completion signal received, settling");
                self.state = HandoffState::Pending {
                    signal_at: Some(now),
                };
            }
            HandoffState::Pending { signal_at: Some(_) } => {
                debug!(?signal, "Ignoring duplicate completion signal");
            }
            HandoffState::Idle => {}
        }
    }

    /// Returns true exactly once, when the settling delay has elapsed after
    /// the first signal. Called from the event loop tick.
    pub fn poll_complete(&mut self, now: Instant) -> bool {
        if let HandoffState::Pending {
            signal_at: Some(at),
        } = self.state
        {
            if now.duration_since(at) >= self.settle_delay {
                self.state = HandoffState::Idle;
                info!("Hand-off settled, booking confirmed");
                return true;
            }
        }
        false
    }

    /// Abandon the pending hand-off and return control to the review step
    pub fn cancel(&mut self) {
        if self.is_pending() {
            warn!("Pending hand-off cancelled by user");
            self.state = HandoffState::Idle;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct MockChannel {
        opened: RefCell<Vec<String>>,
    }

    impl MockChannel {
        fn new() -> Self {
            Self {
                opened: RefCell::new(Vec::new()),
            }
        }
    }

    impl HandoffChannel for MockChannel {
        fn open(&self, uri: &str) -> Result<(), ChannelError> {
            self.opened.borrow_mut().push(uri.to_string());
            Ok(())
        }
    }

    fn composition() -> OrderComposition {
        OrderComposition {
            kit_subtotal: 800,
            services_subtotal: 0,
            grand_total: 800,
            message: "booking request\ntotal ₹800".to_string(),
        }
    }

    fn gateway() -> SubmissionGateway<MockChannel> {
        SubmissionGateway::new(
            MockChannel::new(),
            "918273441052".to_string(),
            Duration::from_millis(1000),
        )
    }

    #[test]
    fn destination_uri_targets_fixed_contact_with_encoded_text() {
        let gateway = gateway();
        let uri = gateway.destination_uri(&composition());
        assert!(uri.starts_with("https://wa.me/918273441052?text="));
        assert!(!uri.contains(' '));
        assert!(!uri.contains('\n'));
    }

    #[test]
    fn submit_opens_channel_and_enters_pending() {
        let mut gateway = gateway();
        gateway.submit(&composition()).unwrap();
        assert!(gateway.is_pending());
        assert_eq!(gateway.channel.opened.borrow().len(), 1);
    }

    #[test]
    fn signal_does_not_complete_before_settle_delay() {
        let mut gateway = gateway();
        gateway.submit(&composition()).unwrap();

        let t0 = Instant::now();
        gateway.notify_signal(CompletionSignal::ForegroundVisible, t0);

        assert!(!gateway.poll_complete(t0));
        assert!(!gateway.poll_complete(t0 + Duration::from_millis(500)));
        assert!(gateway.is_pending());
    }

    #[test]
    fn completes_exactly_once_after_settle_delay() {
        let mut gateway = gateway();
        gateway.submit(&composition()).unwrap();

        let t0 = Instant::now();
        gateway.notify_signal(CompletionSignal::FocusRegained, t0);

        let settled = t0 + Duration::from_millis(1000);
        assert!(gateway.poll_complete(settled));
        assert!(!gateway.poll_complete(settled + Duration::from_millis(100)));
        assert!(!gateway.is_pending());
    }

    #[test]
    fn duplicate_signals_do_not_extend_the_delay() {
        let mut gateway = gateway();
        gateway.submit(&composition()).unwrap();

        let t0 = Instant::now();
        gateway.notify_signal(CompletionSignal::FocusRegained, t0);
        gateway.notify_signal(
            CompletionSignal::ForegroundVisible,
            t0 + Duration::from_millis(800),
        );

        // Still measured from the first signal
        assert!(gateway.poll_complete(t0 + Duration::from_millis(1000)));
    }

    #[test]
    fn signals_before_submission_are_ignored() {
        let mut gateway = gateway();
        gateway.notify_signal(CompletionSignal::FocusRegained, Instant::now());
        assert!(!gateway.poll_complete(Instant::now() + Duration::from_secs(5)));
    }

    #[test]
    fn cancel_clears_pending_without_completing() {
        let mut gateway = gateway();
        gateway.submit(&composition()).unwrap();

        let t0 = Instant::now();
        gateway.notify_signal(CompletionSignal::FocusRegained, t0);
        gateway.cancel();

        assert!(!gateway.is_pending());
        assert!(!gateway.poll_complete(t0 + Duration::from_secs(5)));
    }

    #[test]
    fn resubmission_arms_a_fresh_one_shot() {
        let mut gateway = gateway();
        gateway.submit(&composition()).unwrap();
        gateway.cancel();

        gateway.submit(&composition()).unwrap();
        assert!(gateway.is_pending());
        assert_eq!(gateway.channel.opened.borrow().len(), 2);

        let t0 = Instant::now();
        gateway.notify_signal(CompletionSignal::UserConfirmed, t0);
        assert!(gateway.poll_complete(t0 + Duration::from_millis(1000)));
    }
}
