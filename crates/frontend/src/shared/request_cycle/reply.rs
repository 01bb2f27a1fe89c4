use serde::de::DeserializeOwned;
use thiserror::Error;

/// Anything below the application protocol: the request never produced a
/// usable body.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("failed to build request: {0}")]
    Request(String),

    #[error("request failed: {0}")]
    Network(String),

    #[error("malformed response body: {0}")]
    MalformedBody(String),
}

/// A settled HTTP exchange, body not yet interpreted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

impl HttpReply {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Parse the body. A body that does not match `T` is a transport failure,
    /// whatever the status code says.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, TransportError> {
        serde_json::from_str(&self.body).map_err(|e| TransportError::MalformedBody(e.to_string()))
    }
}

/// Classified outcome of one request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InteractionResult<T> {
    Success(T),
    Failure { reason: String },
    TransportFailure(TransportError),
}

impl<T> InteractionResult<T> {
    /// Fold the network result and a body classifier into one outcome
    pub fn settle(
        sent: Result<HttpReply, TransportError>,
        classify: impl FnOnce(&HttpReply) -> Result<Self, TransportError>,
    ) -> Self {
        match sent.and_then(|reply| classify(&reply)) {
            Ok(result) => result,
            Err(e) => Self::TransportFailure(e),
        }
    }
}

/// Server-supplied text, or `fallback` when absent or empty
pub fn server_message(field: Option<String>, fallback: &str) -> String {
    field
        .filter(|text| !text.is_empty())
        .unwrap_or_else(|| fallback.to_string())
}
