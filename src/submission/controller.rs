//! Submission state machine.
//!
//! `submit` drives one attempt through `Sending` to a terminal state and
//! reports each state to a transition callback. `SubmissionController` owns
//! the single `SubmissionState`, publishes it on a watch channel and refuses
//! to start a second attempt while one is in flight.

use std::sync::Arc;

use reqwest::StatusCode;
use tokio::sync::watch;

use crate::submission::{ContactFields, FormEndpoint, SubmissionState, SubmitError};

/// Run one submission attempt.
///
/// `transition` sees `Sending` before the request is issued, then exactly one
/// terminal state, which is also returned.
pub async fn submit<E, F>(endpoint: &E, fields: &ContactFields, mut transition: F) -> SubmissionState
where
    E: FormEndpoint + ?Sized,
    F: FnMut(SubmissionState),
{
    transition(SubmissionState::sending());
    tracing::info!("Submitting contact form for {}", fields.email);

    let result = endpoint.post_form(fields).await.and_then(|response| {
        if response.status == StatusCode::OK {
            Ok(())
        } else {
            Err(SubmitError::rejected(response.status, response.body))
        }
    });

    let terminal = match result {
        Ok(()) => {
            tracing::info!("Contact form sent");
            SubmissionState::succeeded()
        }
        Err(e) => {
            match e.status() {
                Some(status) => tracing::warn!("Contact form rejected with status {}", status),
                None => tracing::error!("Contact form request failed: {}", e),
            }
            SubmissionState::failed(e.to_string())
        }
    };

    transition(terminal.clone());
    terminal
}

/// Result of asking the controller to submit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The attempt ran to this terminal state
    Completed(SubmissionState),
    /// Another attempt was already sending; nothing was sent
    Ignored,
}

/// Owner of the submission state
pub struct SubmissionController {
    endpoint: Arc<dyn FormEndpoint>,
    state_tx: watch::Sender<SubmissionState>,
}

impl SubmissionController {
    /// Create a controller in the `Idle` state
    pub fn new(endpoint: impl FormEndpoint + 'static) -> Self {
        Self::with_shared_endpoint(Arc::new(endpoint))
    }

    /// Create a controller around an endpoint shared with other owners
    pub fn with_shared_endpoint(endpoint: Arc<dyn FormEndpoint>) -> Self {
        let (state_tx, _) = watch::channel(SubmissionState::idle());
        Self { endpoint, state_tx }
    }

    /// Current state
    pub fn state(&self) -> SubmissionState {
        self.state_tx.borrow().clone()
    }

    /// Receive every state the controller publishes
    pub fn subscribe(&self) -> watch::Receiver<SubmissionState> {
        self.state_tx.subscribe()
    }

    /// Submit the fields unless an attempt is already sending
    pub async fn submit(&self, fields: ContactFields) -> SubmitOutcome {
        let started = self.state_tx.send_if_modified(|state| {
            if state.is_sending() {
                return false;
            }
            *state = SubmissionState::sending();
            true
        });

        if !started {
            tracing::debug!("Ignoring submit while a submission is in flight");
            return SubmitOutcome::Ignored;
        }

        let terminal = submit(self.endpoint.as_ref(), &fields, |next| self.publish(next)).await;
        SubmitOutcome::Completed(terminal)
    }

    /// Fail an attempt whose task died before reaching a terminal state
    pub fn abandon(&self, message: impl Into<String>) {
        let message = message.into();
        self.state_tx.send_if_modified(move |state| {
            if !state.is_sending() {
                return false;
            }
            *state = SubmissionState::failed(message);
            true
        });
    }

    fn publish(&self, next: SubmissionState) {
        self.state_tx.send_if_modified(|state| {
            if *state == next {
                return false;
            }
            *state = next;
            true
        });
    }
}
