//! Non-blocking stand-in for the provider's interactive prompts.
//!
//! ```rust
//! use oprovider::{PromptError, PromptIo};
//! use osession::PromptInterceptor;
//!
//! let interceptor = PromptInterceptor::new(None);
//! assert_eq!(
//!     interceptor.prompt("Enter OTP").unwrap_err(),
//!     PromptError::OtpRequired
//! );
//! assert!(interceptor.otp_requested());
//! assert!(interceptor.otp_signalled());
//! ```

use std::sync::atomic::{AtomicBool, Ordering};

use oprovider::{PromptError, PromptIo, SecretString};

const OTP_MARKERS: [&str; 3] = ["otp", "code", "verification"];

pub fn is_otp_prompt(message: &str) -> bool {
    let message = message.to_lowercase();
    OTP_MARKERS.iter().any(|marker| message.contains(marker))
}

/// Built fresh for every login attempt.
#[derive(Debug)]
pub struct PromptInterceptor {
    otp_code: Option<SecretString>,
    otp_requested: AtomicBool,
    otp_signalled: AtomicBool,
}

impl PromptInterceptor {
    pub fn new(otp_code: Option<SecretString>) -> Self {
        Self {
            otp_code: otp_code.filter(|code| !code.is_empty()),
            otp_requested: AtomicBool::new(false),
            otp_signalled: AtomicBool::new(false),
        }
    }

    /// The provider asked for an OTP at least once during this attempt.
    pub fn otp_requested(&self) -> bool {
        self.otp_requested.load(Ordering::SeqCst)
    }

    /// An OTP was asked for while none was available to answer with.
    pub fn otp_signalled(&self) -> bool {
        self.otp_signalled.load(Ordering::SeqCst)
    }
}

impl PromptIo for PromptInterceptor {
    fn prompt(&self, message: &str) -> Result<String, PromptError> {
        if !is_otp_prompt(message) {
            return Err(PromptError::Unsupported(message.to_string()));
        }

        self.otp_requested.store(true, Ordering::SeqCst);
        match &self.otp_code {
            Some(code) => Ok(code.expose().to_string()),
            None => {
                self.otp_signalled.store(true, Ordering::SeqCst);
                Err(PromptError::OtpRequired)
            }
        }
    }

    fn echo(&self, message: &str) {
        tracing::trace!(phase = "auth", event = "provider_echo", message);
    }
}
