//! Authentication state machine owning the cached session and order client.

use std::sync::Arc;
use std::time::{Duration, Instant};

use oprovider::{
    AccountSession, AccountSessionProvider, CredentialSource, Credentials, EnvCredentialSource,
    OrderHistoryClient, PromptIo, ProviderError, ProviderErrorKind, SecretString,
};
use tokio::sync::Mutex;

use crate::state::SessionSlot;
use crate::{AuthError, AuthHooks, AuthState, NoopAuthHooks, PromptInterceptor};

#[derive(Debug, Default)]
pub struct LoginRequest {
    pub otp_code: Option<SecretString>,
    pub debug: bool,
}

impl LoginRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_otp_code(mut self, otp_code: impl Into<String>) -> Self {
        self.otp_code = Some(SecretString::new(otp_code));
        self
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    LoggedIn,
    OtpRequired,
    Failed(AuthError),
}

impl LoginOutcome {
    pub fn is_logged_in(&self) -> bool {
        matches!(self, Self::LoggedIn)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::LoggedIn => "logged_in",
            Self::OtpRequired => "otp_required",
            Self::Failed(_) => "failed",
        }
    }
}

pub struct AuthManagerBuilder {
    provider: Arc<dyn AccountSessionProvider>,
    credentials: Arc<dyn CredentialSource>,
    hooks: Arc<dyn AuthHooks>,
    login_timeout: Option<Duration>,
}

impl AuthManagerBuilder {
    pub fn new(provider: Arc<dyn AccountSessionProvider>) -> Self {
        Self {
            provider,
            credentials: Arc::new(EnvCredentialSource),
            hooks: Arc::new(NoopAuthHooks),
            login_timeout: None,
        }
    }

    pub fn credentials(mut self, credentials: Arc<dyn CredentialSource>) -> Self {
        self.credentials = credentials;
        self
    }

    pub fn hooks(mut self, hooks: Arc<dyn AuthHooks>) -> Self {
        self.hooks = hooks;
        self
    }

    pub fn login_timeout(mut self, login_timeout: Option<Duration>) -> Self {
        self.login_timeout = login_timeout;
        self
    }

    pub fn build(self) -> AuthManager {
        AuthManager {
            provider: self.provider,
            credentials: self.credentials,
            hooks: self.hooks,
            login_timeout: self.login_timeout,
            slot: Mutex::new(SessionSlot::default()),
        }
    }
}

/// Single logical account session shared by every tool call.
///
/// `login` holds the lock across the provider call, so concurrent logins run
/// one after another and queries never observe a half-built session.
pub struct AuthManager {
    provider: Arc<dyn AccountSessionProvider>,
    credentials: Arc<dyn CredentialSource>,
    hooks: Arc<dyn AuthHooks>,
    login_timeout: Option<Duration>,
    slot: Mutex<SessionSlot>,
}

impl AuthManager {
    pub fn new(provider: Arc<dyn AccountSessionProvider>) -> Self {
        Self::builder(provider).build()
    }

    pub fn builder(provider: Arc<dyn AccountSessionProvider>) -> AuthManagerBuilder {
        AuthManagerBuilder::new(provider)
    }

    pub async fn state(&self) -> AuthState {
        self.slot.lock().await.state
    }

    /// Always performs a fresh provider login, discarding any cached session.
    pub async fn login(&self, request: LoginRequest) -> LoginOutcome {
        let mut slot = self.slot.lock().await;

        // Dropping this future past here leaves LoggedOut or OtpPending behind.
        slot.discard_handles();
        if slot.state == AuthState::LoggedIn {
            self.transition(&mut slot, AuthState::LoggedOut);
        }

        self.hooks.on_login_start(request.otp_code.is_some());
        let started = Instant::now();
        let outcome = self.attempt_login(&mut slot, request).await;
        self.hooks.on_login_outcome(&outcome, started.elapsed());

        outcome
    }

    /// Returns the cached order client without ever logging in implicitly.
    pub async fn ensure_authenticated(&self) -> Result<Arc<dyn OrderHistoryClient>, AuthError> {
        let mut guard = self.slot.lock().await;
        let slot = &mut *guard;

        match slot.state {
            AuthState::LoggedIn => {
                if let Some(client) = &slot.order_client {
                    return Ok(Arc::clone(client));
                }

                let session = slot.session.as_ref().ok_or_else(|| {
                    AuthError::not_authenticated("no active session; call amazon_login first")
                })?;
                let client = session.order_client();
                slot.order_client = Some(Arc::clone(&client));
                Ok(client)
            }
            AuthState::OtpPending => Err(AuthError::otp_required(
                "login is waiting for a one-time password; call amazon_login with otp_code",
            )),
            AuthState::LoggedOut => Err(AuthError::not_authenticated(
                "not logged in; call amazon_login first",
            )),
        }
    }

    async fn attempt_login(&self, slot: &mut SessionSlot, request: LoginRequest) -> LoginOutcome {
        let credentials = match self.credentials.read() {
            Ok(credentials) => credentials,
            Err(missing) => return LoginOutcome::Failed(missing.into()),
        };

        let otp_supplied = request.otp_code.is_some();
        let interceptor = PromptInterceptor::new(request.otp_code);

        match self
            .call_provider(&credentials, &interceptor, request.debug)
            .await
        {
            Ok(session) => {
                slot.session = Some(session);
                self.transition(slot, AuthState::LoggedIn);
                LoginOutcome::LoggedIn
            }
            Err(error)
                if interceptor.otp_signalled() || error.kind == ProviderErrorKind::OtpRequired =>
            {
                self.transition(slot, AuthState::OtpPending);
                LoginOutcome::OtpRequired
            }
            Err(error) => {
                // A failure after an OTP prompt stays retriable with a new code.
                let next = if interceptor.otp_requested() {
                    AuthState::OtpPending
                } else {
                    AuthState::LoggedOut
                };
                self.transition(slot, next);
                LoginOutcome::Failed(AuthError::from_login_failure(&error, otp_supplied))
            }
        }
    }

    async fn call_provider(
        &self,
        credentials: &Credentials,
        io: &dyn PromptIo,
        debug: bool,
    ) -> Result<Arc<dyn AccountSession>, ProviderError> {
        let attempt = self.provider.login(credentials, io, debug);

        match self.login_timeout {
            Some(limit) => tokio::time::timeout(limit, attempt)
                .await
                .unwrap_or_else(|_| {
                    Err(ProviderError::timeout(format!(
                        "provider login did not finish within {}s",
                        limit.as_secs()
                    )))
                }),
            None => attempt.await,
        }
    }

    fn transition(&self, slot: &mut SessionSlot, next: AuthState) {
        let previous = slot.state;
        slot.state = next;
        if previous != next {
            self.hooks.on_state_change(previous, next);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_request_builders_set_fields() {
        let request = LoginRequest::new().with_otp_code("654321").with_debug(true);

        assert!(request.debug);
        assert_eq!(
            request.otp_code.as_ref().map(SecretString::expose),
            Some("654321")
        );
        assert!(!format!("{request:?}").contains("654321"));
    }

    #[test]
    fn outcome_labels_are_stable() {
        assert_eq!(LoginOutcome::LoggedIn.label(), "logged_in");
        assert_eq!(LoginOutcome::OtpRequired.label(), "otp_required");
        assert_eq!(
            LoginOutcome::Failed(AuthError::config("missing")).label(),
            "failed"
        );
        assert!(LoginOutcome::LoggedIn.is_logged_in());
    }
}
