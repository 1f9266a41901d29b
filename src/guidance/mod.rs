//! Triage guidance: prompt → provider → JSON extraction → normalization.

pub mod client;
pub mod extract;
pub mod normalize;
pub mod prompt;
pub mod requester;
pub mod service;

pub use client::*;
pub use extract::*;
pub use normalize::*;
pub use prompt::*;
pub use requester::*;
pub use service::*;

use thiserror::Error;

/// Upstream generative-model failures. Never shown to end users.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    #[error("Guidance provider is not configured (missing {0})")]
    NotConfigured(&'static str),

    #[error("Cannot reach guidance provider: {0}")]
    Connection(String),

    #[error("Guidance provider timed out after {0}s")]
    Timeout(u64),

    #[error("Guidance provider returned error (status {status}): {body}")]
    Status { status: u16, body: String },

    #[error("Unreadable provider response: {0}")]
    ResponseParsing(String),

    #[error("No response text from guidance provider")]
    MissingText,

    #[error("HTTP client error: {0}")]
    HttpClient(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GuidanceError {
    /// Caller input failed a precondition. The message is user-facing.
    #[error("{0}")]
    Validation(String),

    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    #[error("Malformed guidance response: {0}")]
    MalformedResponse(String),
}

impl GuidanceError {
    /// Provider and malformed-response failures are hidden behind one
    /// generic message at the API boundary.
    pub fn is_upstream(&self) -> bool {
        matches!(self, Self::Provider(_) | Self::MalformedResponse(_))
    }
}
