//! Headless message sending

use std::io::Read;

use anyhow::Result;
use clap::Args;

use crate::cli::output::{print_formatted, OutputFormat};
use crate::config::{Config, ServerConfig};
use crate::submission::{submit, ContactFields, HttpEndpoint, SubmissionState};

#[derive(Args, Debug)]
pub struct SendArgs {
    /// Your name
    #[arg(long)]
    pub name: String,

    /// Your email address
    #[arg(long)]
    pub email: String,

    /// Message subject
    #[arg(long)]
    pub subject: String,

    /// Message body, or "-" to read it from stdin
    #[arg(long)]
    pub message: String,

    /// Server base URL (overrides server.base_url)
    #[arg(long)]
    pub server: Option<String>,

    /// Request timeout in seconds (overrides server.timeout_secs)
    #[arg(long)]
    pub timeout: Option<u64>,
}

impl SendArgs {
    fn into_fields(self) -> Result<ContactFields> {
        let message = if self.message == "-" {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        } else {
            self.message
        };
        Ok(ContactFields::new(self.name, self.email, self.subject, message))
    }
}

pub async fn run(args: SendArgs, format: OutputFormat, quiet: bool) -> Result<()> {
    let mut server = Config::load()?.server;
    if let Some(url) = &args.server {
        server.base_url = url.clone();
    }
    if let Some(secs) = args.timeout {
        server.timeout_secs = Some(secs);
    }

    let fields = args.into_fields()?;
    let state = send(&fields, &server, format, quiet).await?;

    if state.error_message().is_some() {
        anyhow::bail!("Message was not sent");
    }
    Ok(())
}

/// Submit once, printing every state the submission passes through
async fn send(
    fields: &ContactFields,
    server: &ServerConfig,
    format: OutputFormat,
    quiet: bool,
) -> Result<SubmissionState> {
    if let Some(problem) = fields.first_problem() {
        anyhow::bail!("{}", problem.hint());
    }

    let endpoint = HttpEndpoint::from_config(server)?;
    tracing::info!("Posting message to {}", endpoint.url());

    Ok(submit(&endpoint, fields, |state| print_state(&state, format, quiet)).await)
}

fn print_state(state: &SubmissionState, format: OutputFormat, quiet: bool) {
    if quiet && format == OutputFormat::Text && !state.phase().is_terminal() {
        return;
    }

    print_formatted(state, format, |s| match s.error_message() {
        Some(message) => format!("{}: {}", s.phase().description(), message),
        None => s.phase().description().to_string(),
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::submission::SubmissionPhase;
    use wiremock::matchers::{body_string, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn sample() -> ContactFields {
        ContactFields::new("Jo", "jo@x.com", "Hi", "Hello")
    }

    fn server_config(server: &MockServer) -> ServerConfig {
        ServerConfig {
            base_url: server.uri(),
            ..ServerConfig::default()
        }
    }

    #[tokio::test]
    async fn test_send_success() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/send"))
            .and(body_string("name=Jo&email=jo%40x.com&subject=Hi&message=Hello"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let state = send(&sample(), &server_config(&server), OutputFormat::Json, false)
            .await
            .unwrap();

        assert_eq!(state, SubmissionState::succeeded());
    }

    #[tokio::test]
    async fn test_send_rejected() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500).set_body_string("Mailer down"))
            .mount(&server)
            .await;

        let state = send(&sample(), &server_config(&server), OutputFormat::Text, true)
            .await
            .unwrap();

        assert_eq!(state.phase(), SubmissionPhase::Failed);
        assert_eq!(state.error_message(), Some("An error occured: Mailer down"));
    }

    #[tokio::test]
    async fn test_send_refuses_incomplete_fields() {
        let server = MockServer::start().await;
        let mut fields = sample();
        fields.email = "not-an-email".to_string();

        let err = send(&fields, &server_config(&server), OutputFormat::Text, false)
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Please enter a valid email address.");
        assert!(server.received_requests().await.unwrap().is_empty());
    }

    #[test]
    fn test_inline_message_is_used_verbatim() {
        let args = SendArgs {
            name: "Jo".to_string(),
            email: "jo@x.com".to_string(),
            subject: "Hi".to_string(),
            message: "Hello\nthere".to_string(),
            server: None,
            timeout: None,
        };
        assert_eq!(args.into_fields().unwrap().message, "Hello\nthere");
    }
}
