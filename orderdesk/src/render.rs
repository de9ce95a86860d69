//! Tagged text returned to the calling agent.
//!
//! Every failure starts with a fixed prefix so the agent can pattern-match on
//! it and decide whether to ask a human for a one-time password.

use osession::{AuthErrorKind, LoginOutcome};
use oquery::{QueryError, QueryErrorKind};

pub const NOT_LOGGED_IN: &str = "NOT_LOGGED_IN";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const AUTH_FAILED: &str = "AUTH_FAILED";
pub const OTP_REQUIRED: &str = "OTP_REQUIRED";
pub const ORDER_NOT_FOUND: &str = "ORDER_NOT_FOUND";

pub const LOGIN_SUCCESS: &str = "Successfully logged in to Amazon.";

const ASK_FOR_OTP: &str = "ASK THE USER for their current 6-digit OTP code from their authenticator app";

pub fn render_login_outcome(outcome: &LoginOutcome, debug: bool) -> String {
    match outcome {
        LoginOutcome::LoggedIn => LOGIN_SUCCESS.to_string(),
        LoginOutcome::OtpRequired => format!(
            "{OTP_REQUIRED}: Amazon 2FA is enabled and requires a one-time password. \
             {ASK_FOR_OTP}, then call amazon_login again with the otp_code parameter."
        ),
        LoginOutcome::Failed(error) => {
            let headline = match error.kind {
                AuthErrorKind::Config => format!("{CONFIG_ERROR}: {}", error.message),
                AuthErrorKind::AuthFailed => format!("{AUTH_FAILED}: {}", error.message),
                _ => format!("Login failed: {}", error.message),
            };

            match (&error.detail, debug) {
                (Some(detail), true) => format!("{headline}\n\nDebug info:\n{detail}"),
                _ => headline,
            }
        }
    }
}

/// Text for a query failure; `None` for argument errors, which the caller
/// reports as a malformed call instead.
pub fn render_query_error(error: &QueryError) -> Option<String> {
    let text = match error.kind {
        QueryErrorKind::NotLoggedIn => {
            format!("{NOT_LOGGED_IN}: You must call amazon_login first.")
        }
        QueryErrorKind::OtpPending => format!(
            "{NOT_LOGGED_IN}: You must call amazon_login first. \
             {ASK_FOR_OTP}, then call amazon_login with the otp_code parameter."
        ),
        QueryErrorKind::OrderNotFound => format!("{ORDER_NOT_FOUND}: {}", error.message),
        QueryErrorKind::Provider => format!("Error: {}", error.message),
        QueryErrorKind::InvalidRequest => return None,
    };

    Some(text)
}
