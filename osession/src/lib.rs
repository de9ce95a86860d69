//! OTP-aware login state machine for a single remote account session.
//!
//! The manager never blocks on interactive input: provider prompts go through a
//! [`PromptInterceptor`] that either answers with a caller-supplied OTP code or
//! turns the prompt into a [`LoginOutcome::OtpRequired`] the caller can act on.

mod error;
mod hooks;
mod interceptor;
mod manager;
mod state;

pub mod prelude {
    pub use crate::{
        AuthError, AuthErrorKind, AuthHooks, AuthManager, AuthState, LoginOutcome, LoginRequest,
        PromptInterceptor,
    };
}

pub use error::{AuthError, AuthErrorKind};
pub use hooks::{AuthHooks, NoopAuthHooks};
pub use interceptor::{PromptInterceptor, is_otp_prompt};
pub use manager::{AuthManager, AuthManagerBuilder, LoginOutcome, LoginRequest};
pub use state::AuthState;
