//! Submission lifecycle state

use serde::Serialize;

/// Current phase of a contact form submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionPhase {
    #[default]
    Idle,
    Sending,
    Succeeded,
    Failed,
}

impl SubmissionPhase {
    /// Get a human-readable description of the current phase
    pub fn description(&self) -> &'static str {
        match self {
            SubmissionPhase::Idle => "Ready",
            SubmissionPhase::Sending => "Sending...",
            SubmissionPhase::Succeeded => "Message sent",
            SubmissionPhase::Failed => "Sending failed",
        }
    }

    /// Whether this phase ends a submission
    pub fn is_terminal(&self) -> bool {
        matches!(self, SubmissionPhase::Succeeded | SubmissionPhase::Failed)
    }
}

/// Snapshot of the submission state machine.
///
/// The error message only exists while the phase is `Failed`; the private
/// fields and the four constructors keep it that way.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct SubmissionState {
    phase: SubmissionPhase,
    error_message: Option<String>,
}

impl SubmissionState {
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn sending() -> Self {
        Self {
            phase: SubmissionPhase::Sending,
            error_message: None,
        }
    }

    pub fn succeeded() -> Self {
        Self {
            phase: SubmissionPhase::Succeeded,
            error_message: None,
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            phase: SubmissionPhase::Failed,
            error_message: Some(message.into()),
        }
    }

    pub fn phase(&self) -> SubmissionPhase {
        self.phase
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn is_sending(&self) -> bool {
        self.phase == SubmissionPhase::Sending
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_is_idle() {
        let state = SubmissionState::default();
        assert_eq!(state.phase(), SubmissionPhase::Idle);
        assert_eq!(state.error_message(), None);
        assert_eq!(state, SubmissionState::idle());
    }

    #[test]
    fn test_error_message_only_when_failed() {
        assert_eq!(SubmissionState::sending().error_message(), None);
        assert_eq!(SubmissionState::succeeded().error_message(), None);

        let failed = SubmissionState::failed("Mailer down");
        assert_eq!(failed.phase(), SubmissionPhase::Failed);
        assert_eq!(failed.error_message(), Some("Mailer down"));
    }

    #[test]
    fn test_phase_description() {
        assert_eq!(SubmissionPhase::Idle.description(), "Ready");
        assert_eq!(SubmissionPhase::Sending.description(), "Sending...");
        assert_eq!(SubmissionPhase::Succeeded.description(), "Message sent");
        assert_eq!(SubmissionPhase::Failed.description(), "Sending failed");
    }

    #[test]
    fn test_terminal_phases() {
        assert!(!SubmissionPhase::Idle.is_terminal());
        assert!(!SubmissionPhase::Sending.is_terminal());
        assert!(SubmissionPhase::Succeeded.is_terminal());
        assert!(SubmissionPhase::Failed.is_terminal());
    }

    #[test]
    fn test_state_serializes_for_cli_output() {
        let json = serde_json::to_value(SubmissionState::failed("Network unreachable")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "phase": "failed", "error_message": "Network unreachable" })
        );

        let json = serde_json::to_value(SubmissionState::succeeded()).unwrap();
        assert_eq!(json, serde_json::json!({ "phase": "succeeded", "error_message": null }));
    }
}
