//! Contact form state

use std::sync::Arc;

use eframe::egui;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::state::StateEvent;
use crate::submission::{
    ContactFields, SubmissionController, SubmissionPhase, SubmissionState, SubmitOutcome,
};
use crate::task::{poll_task, PollResult};

/// Form fields being edited plus the submission in flight
pub struct FormState {
    /// Values currently typed into the form
    pub fields: ContactFields,
    /// Last state observed from the controller
    pub submission: SubmissionState,
    controller: Arc<SubmissionController>,
    state_rx: watch::Receiver<SubmissionState>,
    /// Async task for the submission in flight
    task: Option<JoinHandle<SubmitOutcome>>,
}

impl FormState {
    pub fn new(controller: Arc<SubmissionController>) -> Self {
        let state_rx = controller.subscribe();
        let submission = controller.state();
        Self {
            fields: ContactFields::default(),
            submission,
            controller,
            state_rx,
            task: None,
        }
    }

    /// Check if a submission is in flight
    pub fn is_sending(&self) -> bool {
        self.task.is_some() || self.submission.is_sending()
    }

    /// Whether the submit button should be enabled
    pub fn can_submit(&self) -> bool {
        !self.is_sending() && self.fields.is_complete()
    }

    /// Start submitting a snapshot of the current fields.
    /// Returns a status message event if started.
    pub fn start(&mut self) -> Option<StateEvent> {
        if self.is_sending() {
            return None;
        }
        if let Some(problem) = self.fields.first_problem() {
            tracing::debug!("Submit blocked: {}", problem.hint());
            return None;
        }

        let controller = self.controller.clone();
        let fields = self.fields.clone();

        // Show Sending on this frame; the controller confirms it on the channel
        self.submission = SubmissionState::sending();
        self.task = Some(tokio::spawn(async move { controller.submit(fields).await }));

        Some(StateEvent::StatusMessage(
            SubmissionPhase::Sending.description().to_string(),
        ))
    }

    /// Poll the submission task, requesting repaints while it runs
    pub fn poll(&mut self, ctx: &egui::Context) -> Vec<StateEvent> {
        let events = self.poll_events();
        if self.task.is_some() {
            ctx.request_repaint();
        }
        events
    }

    fn poll_events(&mut self) -> Vec<StateEvent> {
        let mut events = Vec::new();

        if self.state_rx.has_changed().unwrap_or(false) {
            self.sync();
            events.push(StateEvent::StatusMessage(
                self.submission.phase().description().to_string(),
            ));
        }

        match poll_task(&mut self.task) {
            PollResult::Complete(Ok(SubmitOutcome::Completed(state))) => {
                self.sync();
                match state.error_message() {
                    None => events.push(StateEvent::LogInfo("Message sent".to_string())),
                    Some(msg) => events.push(StateEvent::LogError(format!("Sending failed: {}", msg))),
                }
            }
            PollResult::Complete(Ok(SubmitOutcome::Ignored)) => {
                self.sync();
            }
            PollResult::Complete(Err(e)) => {
                let msg = format!("Submission task panicked: {}", e);
                self.controller.abandon(msg.clone());
                self.sync();
                events.push(StateEvent::LogError(msg.clone()));
                events.push(StateEvent::StatusMessage(msg));
            }
            PollResult::Pending | PollResult::NoTask => {}
        }

        events
    }

    fn sync(&mut self) {
        self.submission = self.state_rx.borrow_and_update().clone();
    }
}
