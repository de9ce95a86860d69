use std::error::Error;
use std::fmt::{Display, Formatter};
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use crate::{Credentials, Order, OrderQuery, ProviderError};

pub type ProviderFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Answers for prompts a provider would otherwise show on a terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptError {
    OtpRequired,
    Unsupported(String),
}

impl Display for PromptError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OtpRequired => f.write_str("OTP_REQUIRED"),
            Self::Unsupported(message) => write!(f, "Interactive prompt required: {message}"),
        }
    }
}

impl Error for PromptError {}

impl From<PromptError> for ProviderError {
    fn from(value: PromptError) -> Self {
        match value {
            PromptError::OtpRequired => ProviderError::otp_required(value.to_string()),
            PromptError::Unsupported(_) => ProviderError::unsupported_prompt(value.to_string()),
        }
    }
}

/// The only interactive channel a provider may use during login.
pub trait PromptIo: Send + Sync {
    fn prompt(&self, message: &str) -> Result<String, PromptError>;

    fn echo(&self, message: &str);
}

pub trait AccountSessionProvider: Send + Sync {
    fn login<'a>(
        &'a self,
        credentials: &'a Credentials,
        io: &'a dyn PromptIo,
        debug: bool,
    ) -> ProviderFuture<'a, Result<Arc<dyn AccountSession>, ProviderError>>;
}

pub trait AccountSession: Send + Sync {
    fn order_client(&self) -> Arc<dyn OrderHistoryClient>;
}

pub trait OrderHistoryClient: Send + Sync {
    fn get_order_history<'a>(
        &'a self,
        query: OrderQuery,
    ) -> ProviderFuture<'a, Result<Vec<Order>, ProviderError>>;

    fn get_order<'a>(&'a self, order_id: &'a str)
    -> ProviderFuture<'a, Result<Order, ProviderError>>;
}
