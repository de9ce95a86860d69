//! Provider error kinds and error value helpers.
//!
//! ```rust
//! use oprovider::{ProviderError, ProviderErrorKind};
//!
//! let exhausted = ProviderError::attempts_exhausted("Authentication attempts exhausted");
//! assert_eq!(exhausted.kind, ProviderErrorKind::AttemptsExhausted);
//! assert_eq!(exhausted.to_string(), "AttemptsExhausted: Authentication attempts exhausted");
//! ```

use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderErrorKind {
    Authentication,
    AttemptsExhausted,
    OtpRequired,
    UnsupportedPrompt,
    NotFound,
    InvalidRequest,
    Timeout,
    Transport,
    Unavailable,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderError {
    pub kind: ProviderErrorKind,
    pub message: String,
    /// Low-level diagnostic context (page excerpts, response codes). Only
    /// surfaced to callers that explicitly asked for debug output.
    pub detail: Option<String>,
}

impl ProviderError {
    pub fn new(kind: ProviderErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            detail: None,
        }
    }

    pub fn authentication(message: impl Into<String>) -> Self {
        Self::new(ProviderErrorKind::Authentication, message)
    }

    pub fn attempts_exhausted(message: impl Into<String>) -> Self {
        Self::new(ProviderErrorKind::AttemptsExhausted, message)
    }

    pub fn otp_required(message: impl Into<String>) -> Self {
        Self::new(ProviderErrorKind::OtpRequired, message)
    }

    pub fn unsupported_prompt(message: impl Into<String>) -> Self {
        Self::new(ProviderErrorKind::UnsupportedPrompt, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ProviderErrorKind::NotFound, message)
    }

    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(ProviderErrorKind::InvalidRequest, message)
    }

    pub fn timeout(message: impl Into<String>) -> Self {
        Self::new(ProviderErrorKind::Timeout, message)
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::new(ProviderErrorKind::Transport, message)
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::new(ProviderErrorKind::Unavailable, message)
    }

    pub fn other(message: impl Into<String>) -> Self {
        Self::new(ProviderErrorKind::Other, message)
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

impl Display for ProviderError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.message)
    }
}

impl Error for ProviderError {}
