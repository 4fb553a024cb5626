//! Request descriptor and response types

use thiserror::Error;

/// SOAP-specific error type
#[derive(Debug, Error)]
pub enum SoapError {
    /// Transport-level failure, passed through from the HTTP client
    /// unchanged. No retry, no classification.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Result type for SOAP operations
pub type SoapResult<T> = Result<T, SoapError>;

/// One SOAP exchange. Constructed per call, not reused.
#[derive(Debug, Clone)]
pub struct SoapRequest {
    /// Target endpoint URL
    pub endpoint: String,

    /// Rendered XML payload, sent verbatim as the POST body
    pub payload: String,

    /// Bearer token; when set, sent as `Authorization: Bearer <token>`
    pub token: Option<String>,

    /// SOAPAction URI; sent as an empty string when unset
    pub action: Option<String>,

    /// Extra headers merged last, overriding any default header
    pub extra_headers: Vec<(String, String)>,
}

impl SoapRequest {
    pub fn new(endpoint: impl Into<String>, payload: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            payload: payload.into(),
            token: None,
            action: None,
            extra_headers: Vec::new(),
        }
    }

    pub fn bearer_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn action(mut self, action: impl Into<String>) -> Self {
        self.action = Some(action.into());
        self
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra_headers.push((name.into(), value.into()));
        self
    }
}

/// Transport response as handed back to the caller.
///
/// The client never retains or mutates it, and never interprets the status
/// code as success or failure; asserting on 4xx/5xx is the caller's job.
#[derive(Debug, Clone)]
pub struct SoapResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl SoapResponse {
    /// Look up a response header by name, case-insensitively
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}
