use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use serde::{Deserialize, Serialize};

use crate::relay::RelayError;

pub static SENT_MESSAGE: &str = "Message sent successfully 🚀";
pub static FAILED_MESSAGE: &str = "Failed to send message 😢";

/// The three fields of the contact form, named after the relay template
/// variables they fill.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactFormPayload {
    pub from_name: String,
    pub from_email: String,
    pub message: String,
}

impl ContactFormPayload {
    pub fn new(
        from_name: impl Into<String>,
        from_email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            from_name: from_name.into(),
            from_email: from_email.into(),
            message: message.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.from_name.is_empty() && self.from_email.is_empty() && self.message.is_empty()
    }
}

/// Delivers a contact payload to whatever actually sends the email.
#[allow(async_fn_in_trait)]
pub trait EmailRelay {
    async fn send(&self, payload: &ContactFormPayload) -> Result<(), RelayError>;
}

/// User-facing outcome feedback.
pub trait Notifier {
    fn success(&self, message: &str);
    fn failure(&self, message: &str);
}

/// A rendered contact form.
pub trait FormHandle {
    fn payload(&self) -> ContactFormPayload;
    fn reset(&self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitState {
    Idle,
    Submitting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Sent,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitResult {
    /// No form was mounted, so nothing was sent.
    Unavailable,
    /// Another submission is still waiting on the relay.
    Busy,
    Settled(SubmissionOutcome),
}

/// Clears the in-flight flag when the submission finishes or is dropped.
struct InFlight<'a>(&'a AtomicBool);

impl<'a> InFlight<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Owns the lifecycle of a contact form submission: capture the fields, hand
/// them to the relay, report the outcome, and clear the form on success.
///
/// Clones share the in-flight flag, so a clone moved into an event handler
/// still refuses to double-submit.
#[derive(Clone)]
pub struct ContactController<R, N> {
    relay: R,
    notifier: N,
    in_flight: Arc<AtomicBool>,
}

impl<R, N> ContactController<R, N>
where
    R: EmailRelay,
    N: Notifier,
{
    pub fn new(relay: R, notifier: N) -> Self {
        Self {
            relay,
            notifier,
            in_flight: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn state(&self) -> SubmitState {
        if self.in_flight.load(Ordering::Acquire) {
            SubmitState::Submitting
        } else {
            SubmitState::Idle
        }
    }

    pub async fn submit<F: FormHandle>(&self, form: Option<&F>) -> SubmitResult {
        let Some(form) = form else {
            return SubmitResult::Unavailable;
        };
        let Some(_guard) = InFlight::acquire(&self.in_flight) else {
            log::debug!("contact form already submitting, ignoring");
            return SubmitResult::Busy;
        };

        let payload = form.payload();
        let outcome = match self.relay.send(&payload).await {
            Ok(()) => {
                self.notifier.success(SENT_MESSAGE);
                form.reset();
                SubmissionOutcome::Sent
            }
            Err(e) => {
                log::warn!("contact relay failed: {e}");
                self.notifier.failure(FAILED_MESSAGE);
                SubmissionOutcome::Failed
            }
        };
        SubmitResult::Settled(outcome)
    }
}
