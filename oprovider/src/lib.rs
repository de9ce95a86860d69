//! Contracts for the external account session provider and order-history client.
//!
//! The provider performs the actual network login and page scraping; this crate
//! only fixes the shapes that cross that boundary.

mod credentials;
mod error;
mod memory;
mod order;
mod provider;

pub mod prelude {
    pub use crate::{
        AccountSession, AccountSessionProvider, CredentialSource, Credentials, Order,
        OrderHistoryClient, OrderQuery, PromptError, PromptIo, ProviderError, ProviderErrorKind,
        ProviderFuture, TimeFilter, TimeSelection,
    };
}

pub use credentials::{
    ACCOUNT_ID_VAR, CredentialSource, Credentials, EnvCredentialSource, MissingCredentials,
    OTP_SEED_VAR, SECRET_VAR, SecretString, StaticCredentialSource,
};
pub use error::{ProviderError, ProviderErrorKind};
pub use memory::InMemoryOrderClient;
pub use order::{Item, Order, OrderQuery, Recipient, Seller, TimeFilter, TimeSelection};
pub use provider::{
    AccountSession, AccountSessionProvider, OrderHistoryClient, PromptError, PromptIo,
    ProviderFuture,
};
