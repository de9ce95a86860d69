//! Query-layer errors and classification.

use std::error::Error;
use std::fmt::{Display, Formatter};

use oprovider::{ProviderError, ProviderErrorKind};
use osession::{AuthError, AuthErrorKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryErrorKind {
    NotLoggedIn,
    OtpPending,
    OrderNotFound,
    InvalidRequest,
    Provider,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryError {
    pub kind: QueryErrorKind,
    pub message: String,
}

impl QueryError {
    pub fn new(kind: QueryErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn not_logged_in(message: impl Into<String>) -> Self {
        Self::new(QueryErrorKind::NotLoggedIn, message)
    }

    pub fn otp_pending(message: impl Into<String>) -> Self {
        Self::new(QueryErrorKind::OtpPending, message)
    }

    pub fn order_not_found(message: impl Into<String>) -> Self {
        Self::new(QueryErrorKind::OrderNotFound, message)
    }

    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(QueryErrorKind::InvalidRequest, message)
    }

    pub fn provider(message: impl Into<String>) -> Self {
        Self::new(QueryErrorKind::Provider, message)
    }
}

impl Display for QueryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.message)
    }
}

impl Error for QueryError {}

impl From<AuthError> for QueryError {
    fn from(value: AuthError) -> Self {
        match value.kind {
            AuthErrorKind::OtpRequired => QueryError::otp_pending(value.message),
            _ => QueryError::not_logged_in(value.message),
        }
    }
}

impl From<ProviderError> for QueryError {
    fn from(value: ProviderError) -> Self {
        match value.kind {
            ProviderErrorKind::NotFound => QueryError::order_not_found(value.message),
            ProviderErrorKind::InvalidRequest => QueryError::invalid_request(value.message),
            _ => QueryError::provider(value.message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_errors_map_to_login_guidance_kinds() {
        let pending: QueryError = AuthError::otp_required("waiting for code").into();
        assert_eq!(pending.kind, QueryErrorKind::OtpPending);

        let logged_out: QueryError = AuthError::not_authenticated("call login").into();
        assert_eq!(logged_out.kind, QueryErrorKind::NotLoggedIn);
    }

    #[test]
    fn provider_not_found_maps_to_order_not_found() {
        let error: QueryError = ProviderError::not_found("order '1' not found").into();
        assert_eq!(error.kind, QueryErrorKind::OrderNotFound);

        let error: QueryError = ProviderError::transport("reset").into();
        assert_eq!(error.kind, QueryErrorKind::Provider);
    }
}
