use thiserror::Error;

/// Failure raised by the HTTP transport itself, before any status or body
/// inspection takes place.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The request exceeded the transport's own deadline.
    #[error("request timed out")]
    Timeout,

    /// Any other client-side failure: connection refused, DNS, TLS, a body
    /// that could not be read, and so on.
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Failure raised while fetching or reshaping an API response.
///
/// Everything below the status-code check is fail-fast: a malformed body on
/// a 200 response surfaces as one of the variants below, never as a
/// defaulted field. A non-200 status is not an error at all; lookups report
/// it as an absent result instead.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("response body is not valid JSON")]
    BodyParse(#[source] serde_json::Error),

    #[error("response is missing required key `{0}`")]
    MissingKey(&'static str),

    #[error("response key `{0}` is null")]
    NullValue(&'static str),

    #[error("response array `{0}` is empty")]
    EmptyArray(&'static str),
}
