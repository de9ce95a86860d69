//! Common imports for embedding the order server.

pub use crate::mcp::{McpServer, serve_stdio};
pub use crate::{
    AccountSession, AccountSessionProvider, AuthManager, AuthState, CredentialSource, Credentials,
    LoginOutcome, LoginRequest, Order, OrderDesk, OrderDeskError, OrderHistoryClient, OrderQuery,
    OrderQueryService, OrderRecord, PromptError, PromptIo, ProviderError, ProviderFuture,
    Settings, TimeFilter, ToolRegistry, build_order_desk, build_order_desk_with,
    register_amazon_tools, run,
};
