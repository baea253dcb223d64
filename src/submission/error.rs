//! Submission failure taxonomy

use reqwest::StatusCode;
use thiserror::Error;

/// Why a submission ended in the `Failed` phase.
///
/// The `Display` text is exactly what the form shows to the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    /// The server answered with something other than 200
    #[error("An error occured: {body}")]
    Rejected { status: StatusCode, body: String },

    /// The request could not be completed
    #[error("{0}")]
    Transport(String),
}

impl SubmitError {
    /// Create a rejection from a response status and its text body
    pub fn rejected(status: StatusCode, body: impl Into<String>) -> Self {
        SubmitError::Rejected {
            status,
            body: body.into(),
        }
    }

    /// Create a transport failure from its description
    pub fn transport(description: impl Into<String>) -> Self {
        SubmitError::Transport(description.into())
    }

    /// HTTP status of a rejection, if the server answered at all
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            SubmitError::Rejected { status, .. } => Some(*status),
            SubmitError::Transport(_) => None,
        }
    }
}

impl From<reqwest::Error> for SubmitError {
    fn from(err: reqwest::Error) -> Self {
        SubmitError::Transport(err.to_string())
    }
}
