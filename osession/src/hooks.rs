//! Lifecycle hooks for login attempts and state transitions.
//!
//! ```rust
//! use osession::{AuthHooks, NoopAuthHooks};
//!
//! fn accepts_hooks(_hooks: &dyn AuthHooks) {}
//!
//! accepts_hooks(&NoopAuthHooks);
//! ```

use std::time::Duration;

use crate::{AuthState, LoginOutcome};

pub trait AuthHooks: Send + Sync {
    fn on_login_start(&self, _otp_supplied: bool) {}

    fn on_login_outcome(&self, _outcome: &LoginOutcome, _elapsed: Duration) {}

    fn on_state_change(&self, _from: AuthState, _to: AuthState) {}
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoopAuthHooks;

impl AuthHooks for NoopAuthHooks {}
