//! MCP tool server for Amazon order history behind an OTP-aware login.
//!
//! The embedding application supplies an [`oprovider::AccountSessionProvider`]
//! that performs the real login and page scraping. This crate wires it to a
//! single [`osession::AuthManager`], exposes the `amazon_*` tools, and serves
//! them as line-delimited JSON-RPC on stdio.
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use orderdesk::prelude::*;
//!
//! # struct MyProvider;
//! # impl AccountSessionProvider for MyProvider {
//! #     fn login<'a>(&'a self, _: &'a Credentials, _: &'a dyn PromptIo, _: bool)
//! #         -> ProviderFuture<'a, Result<Arc<dyn AccountSession>, ProviderError>> {
//! #         Box::pin(async { Err(ProviderError::unavailable("not wired")) })
//! #     }
//! # }
//! #[tokio::main]
//! async fn main() -> Result<(), OrderDeskError> {
//!     orderdesk::run(Arc::new(MyProvider)).await
//! }
//! ```

mod error;
mod render;
mod settings;
mod tools;

pub mod mcp;
pub mod prelude;
pub mod runtime;
pub mod telemetry;

pub use oobserve;
pub use oprovider;
pub use oquery;
pub use osession;
pub use otooling;

pub use error::{OrderDeskError, OrderDeskErrorKind};
pub use oprovider::{
    AccountSession, AccountSessionProvider, CredentialSource, Credentials, EnvCredentialSource,
    InMemoryOrderClient, Item, Order, OrderHistoryClient, OrderQuery, PromptError, PromptIo,
    ProviderError, ProviderErrorKind, ProviderFuture, SecretString, StaticCredentialSource,
    TimeFilter, TimeSelection,
};
pub use oquery::{
    HistoryRequest, ItemRecord, OrderQueryService, OrderRecord, QueryError, QueryErrorKind,
    RecipientRecord, SearchRequest,
};
pub use osession::{
    AuthError, AuthErrorKind, AuthHooks, AuthManager, AuthManagerBuilder, AuthState,
    LoginOutcome, LoginRequest,
};
pub use otooling::{
    DefaultToolRuntime, ToolCall, ToolDefinition, ToolError, ToolErrorKind, ToolExecutionContext,
    ToolRegistry, ToolRuntime,
};
pub use render::{
    AUTH_FAILED, CONFIG_ERROR, LOGIN_SUCCESS, NOT_LOGGED_IN, ORDER_NOT_FOUND, OTP_REQUIRED,
    render_login_outcome, render_query_error,
};
pub use runtime::{OrderDesk, build_order_desk, build_order_desk_with, run};
pub use settings::Settings;
pub use tools::{
    GET_ORDER_TOOL, LOGIN_TOOL, ORDER_HISTORY_TOOL, SEARCH_ORDERS_TOOL, register_amazon_tools,
};
