use std::fmt::{Display, Formatter};
use std::sync::Arc;

use oprovider::{AccountSession, OrderHistoryClient};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthState {
    #[default]
    LoggedOut,
    OtpPending,
    LoggedIn,
}

impl AuthState {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::LoggedOut => "logged_out",
            Self::OtpPending => "otp_pending",
            Self::LoggedIn => "logged_in",
        }
    }
}

impl Display for AuthState {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything guarded by the manager's lock; mutated only as a unit.
#[derive(Default)]
pub(crate) struct SessionSlot {
    pub(crate) state: AuthState,
    pub(crate) session: Option<Arc<dyn AccountSession>>,
    pub(crate) order_client: Option<Arc<dyn OrderHistoryClient>>,
}

impl SessionSlot {
    pub(crate) fn discard_handles(&mut self) {
        self.order_client = None;
        self.session = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_labels_are_stable() {
        assert_eq!(AuthState::default(), AuthState::LoggedOut);
        assert_eq!(AuthState::LoggedOut.to_string(), "logged_out");
        assert_eq!(AuthState::OtpPending.to_string(), "otp_pending");
        assert_eq!(AuthState::LoggedIn.to_string(), "logged_in");
    }
}
