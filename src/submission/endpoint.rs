//! Mail endpoint client.
//!
//! `FormEndpoint` is the single network seam of the submission flow. The
//! production implementation, `HttpEndpoint`, posts the URL-encoded fields
//! with reqwest; tests substitute scripted endpoints.

use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{StatusCode, Url};

use crate::config::ServerConfig;
use crate::submission::{ContactFields, SubmitError};

/// User agent for endpoint requests
const USER_AGENT: &str = concat!("Contact-Me/", env!("CARGO_PKG_VERSION"));

/// Content type of the request body
const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// What the server answered
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointResponse {
    pub status: StatusCode,
    /// Text body; only read for non-200 responses
    pub body: String,
}

impl EndpointResponse {
    pub fn new(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Something that accepts a contact form submission
#[async_trait]
pub trait FormEndpoint: Send + Sync {
    /// Send the fields once and report the server's answer.
    ///
    /// Returns `Err` only when no answer could be obtained.
    async fn post_form(&self, fields: &ContactFields) -> Result<EndpointResponse, SubmitError>;
}

/// HTTP implementation posting to `{base_url}{endpoint}`
#[derive(Debug, Clone)]
pub struct HttpEndpoint {
    client: reqwest::Client,
    url: Url,
}

impl HttpEndpoint {
    /// Create an endpoint client.
    ///
    /// `endpoint` is resolved against `base_url` the way a browser resolves a
    /// form action, so `/send` always lands at the server root. Without a
    /// timeout the request waits as long as the server does.
    pub fn new(base_url: &str, endpoint: &str, timeout: Option<Duration>) -> Result<Self> {
        let base = Url::parse(base_url)
            .map_err(|e| anyhow::anyhow!("Invalid server URL '{}': {}", base_url, e))?;
        let url = base
            .join(endpoint)
            .map_err(|e| anyhow::anyhow!("Invalid endpoint '{}': {}", endpoint, e))?;

        let mut builder = reqwest::Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self { client, url })
    }

    /// Create an endpoint client from the `[server]` config section
    pub fn from_config(config: &ServerConfig) -> Result<Self> {
        Self::new(&config.base_url, &config.endpoint, config.timeout())
    }

    /// Full URL submissions are posted to
    pub fn url(&self) -> &Url {
        &self.url
    }
}

#[async_trait]
impl FormEndpoint for HttpEndpoint {
    async fn post_form(&self, fields: &ContactFields) -> Result<EndpointResponse, SubmitError> {
        let response = self
            .client
            .post(self.url.clone())
            .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
            .body(fields.to_form_body())
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::OK {
            return Ok(EndpointResponse::new(status, ""));
        }

        let body = response.text().await?;
        Ok(EndpointResponse::new(status, body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_string, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn sample() -> ContactFields {
        ContactFields::new("Jo", "jo@x.com", "Hi", "Hello")
    }

    #[test]
    fn test_endpoint_url_resolution() {
        let endpoint = HttpEndpoint::new("http://localhost:3000", "/send", None).unwrap();
        assert_eq!(endpoint.url().as_str(), "http://localhost:3000/send");

        let endpoint = HttpEndpoint::new("https://example.com/contact/", "/send", None).unwrap();
        assert_eq!(endpoint.url().as_str(), "https://example.com/send");
    }

    #[test]
    fn test_invalid_base_url() {
        let err = HttpEndpoint::new("not a url", "/send", None).unwrap_err();
        assert!(err.to_string().contains("Invalid server URL"));
    }

    #[tokio::test]
    async fn test_post_form_sends_urlencoded_fields() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/send"))
            .and(header("content-type", FORM_CONTENT_TYPE))
            .and(body_string("name=Jo&email=jo%40x.com&subject=Hi&message=Hello"))
            .respond_with(ResponseTemplate::new(200).set_body_string("queued"))
            .expect(1)
            .mount(&server)
            .await;

        let endpoint = HttpEndpoint::new(&server.uri(), "/send", None).unwrap();
        let response = endpoint.post_form(&sample()).await.unwrap();

        assert_eq!(response.status, StatusCode::OK);
        assert!(response.body.is_empty(), "success body is not read");
    }

    #[tokio::test]
    async fn test_post_form_reads_body_on_rejection() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/send"))
            .respond_with(ResponseTemplate::new(500).set_body_string("Mailer down"))
            .mount(&server)
            .await;

        let endpoint = HttpEndpoint::new(&server.uri(), "/send", None).unwrap();
        let response = endpoint.post_form(&sample()).await.unwrap();

        assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response.body, "Mailer down");
    }

    #[tokio::test]
    async fn test_post_form_connection_refused() {
        // Bind then drop a listener to get a port nothing listens on
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let endpoint = HttpEndpoint::new(&format!("http://{}", addr), "/send", None).unwrap();
        let err = endpoint.post_form(&sample()).await.unwrap_err();

        assert!(matches!(err, SubmitError::Transport(_)));
        assert!(!err.to_string().is_empty());
    }

    #[tokio::test]
    async fn test_post_form_timeout() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(5)))
            .mount(&server)
            .await;

        let endpoint =
            HttpEndpoint::new(&server.uri(), "/send", Some(Duration::from_millis(100))).unwrap();
        let err = endpoint.post_form(&sample()).await.unwrap_err();

        assert!(matches!(err, SubmitError::Transport(_)));
    }
}
