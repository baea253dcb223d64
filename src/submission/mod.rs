//! Contact form submission.
//!
//! This module handles:
//! - The field snapshot and its URL-encoded wire form
//! - Posting it to the mail endpoint
//! - The Idle → Sending → Succeeded/Failed state machine

mod controller;
mod endpoint;
mod error;
mod fields;
mod state;

pub use controller::{submit, SubmissionController, SubmitOutcome};
pub use endpoint::{EndpointResponse, FormEndpoint, HttpEndpoint};
pub use error::SubmitError;
pub use fields::{ContactField, ContactFields};
pub use state::{SubmissionPhase, SubmissionState};
