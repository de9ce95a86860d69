//! Authentication errors and their classification.
//!
//! ```rust
//! use osession::{AuthError, AuthErrorKind};
//!
//! let err = AuthError::not_authenticated("call amazon_login first");
//! assert_eq!(err.kind, AuthErrorKind::NotAuthenticated);
//! ```

use std::error::Error;
use std::fmt::{Display, Formatter};

use oprovider::{MissingCredentials, ProviderError, ProviderErrorKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthErrorKind {
    Config,
    OtpRequired,
    AuthFailed,
    NotAuthenticated,
    UnsupportedInteractivePrompt,
    LoginFailed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthError {
    pub kind: AuthErrorKind,
    pub message: String,
    pub detail: Option<String>,
}

impl AuthError {
    pub fn new(kind: AuthErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            detail: None,
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::new(AuthErrorKind::Config, message)
    }

    pub fn otp_required(message: impl Into<String>) -> Self {
        Self::new(AuthErrorKind::OtpRequired, message)
    }

    pub fn auth_failed(message: impl Into<String>) -> Self {
        Self::new(AuthErrorKind::AuthFailed, message)
    }

    pub fn not_authenticated(message: impl Into<String>) -> Self {
        Self::new(AuthErrorKind::NotAuthenticated, message)
    }

    pub fn unsupported_prompt(message: impl Into<String>) -> Self {
        Self::new(AuthErrorKind::UnsupportedInteractivePrompt, message)
    }

    pub fn login_failed(message: impl Into<String>) -> Self {
        Self::new(AuthErrorKind::LoginFailed, message)
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// Classifies a provider login failure that did not end in a clean OTP signal.
    pub fn from_login_failure(error: &ProviderError, otp_supplied: bool) -> Self {
        let classified = match error.kind {
            ProviderErrorKind::AttemptsExhausted => Self::auth_failed(format!(
                "Could not authenticate with Amazon.\n\
                 OTP code provided: {}\n\
                 Possible causes:\n\
                 1. Invalid username/password in environment variables\n\
                 2. Amazon is blocking automated login (CAPTCHA)\n\
                 3. 2FA is required - ASK THE USER for their current 6-digit OTP code",
                if otp_supplied { "yes" } else { "no" }
            )),
            ProviderErrorKind::UnsupportedPrompt => Self::unsupported_prompt(error.message.clone()),
            _ => Self::login_failed(error.message.clone()),
        };

        classified.with_detail(
            error
                .detail
                .clone()
                .map(|detail| format!("{error}\n{detail}"))
                .unwrap_or_else(|| format!("{error:?}")),
        )
    }
}

impl Display for AuthError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.message)
    }
}

impl Error for AuthError {}

impl From<MissingCredentials> for AuthError {
    fn from(value: MissingCredentials) -> Self {
        AuthError::config(value.to_string())
    }
}
