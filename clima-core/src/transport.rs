use std::fmt::Debug;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::Value;

use crate::error::TransportError;

/// One HTTP exchange as seen by the lookup code: a status line plus a body
/// that can be parsed as JSON on demand.
#[derive(Debug, Clone)]
pub struct RawResponse {
    status: StatusCode,
    body: String,
}

impl RawResponse {
    pub fn new(status: StatusCode, body: impl Into<String>) -> Self {
        Self { status, body: body.into() }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    /// Parse the body as a loosely-typed JSON value.
    ///
    /// The parse error is handed back unmodified; callers decide what it
    /// means for them.
    pub fn json(&self) -> Result<Value, serde_json::Error> {
        serde_json::from_str(&self.body)
    }
}

/// Transport seam: everything above it runs against canned responses in
/// tests, everything below it is `reqwest`.
#[async_trait]
pub trait Transport: Send + Sync + Debug {
    /// Perform a single GET against `url`.
    async fn get(&self, url: &str) -> Result<RawResponse, TransportError>;
}

/// Production transport over a shared [`reqwest::Client`].
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self { client: Client::new() }
    }

    /// Wrap a caller-built client, e.g. one carrying its own timeout.
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, url: &str) -> Result<RawResponse, TransportError> {
        let res = self.client.get(url).send().await.map_err(classify)?;

        let status = res.status();
        let body = res.text().await.map_err(classify)?;

        Ok(RawResponse::new(status, body))
    }
}

// Deadline hits get their own variant; everything else passes through
// untouched.
fn classify(err: reqwest::Error) -> TransportError {
    if err.is_timeout() {
        TransportError::Timeout
    } else {
        TransportError::Http(err)
    }
}
