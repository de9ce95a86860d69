//! Wiring helpers that assemble the session, query, and tool layers.

use std::sync::Arc;

use oobserve::{
    FanoutHooks, MetricsObservabilityHooks, SafeAuthHooks, SafeToolHooks,
    TracingObservabilityHooks,
};
use oprovider::{AccountSessionProvider, CredentialSource, EnvCredentialSource};
use oquery::OrderQueryService;
use osession::AuthManager;
use otooling::{DefaultToolRuntime, ToolRegistry};

use crate::mcp::{McpServer, serve_stdio};
use crate::telemetry::init_tracing;
use crate::{OrderDeskError, Settings, register_amazon_tools};

type ObservabilityHooks = FanoutHooks<TracingObservabilityHooks, MetricsObservabilityHooks>;

fn observability_hooks() -> ObservabilityHooks {
    FanoutHooks::new(TracingObservabilityHooks, MetricsObservabilityHooks)
}

/// One server's worth of shared state: a single account session and the tools over it.
#[derive(Clone)]
pub struct OrderDesk {
    pub auth: Arc<AuthManager>,
    pub queries: Arc<OrderQueryService>,
    pub tools: DefaultToolRuntime,
}

impl OrderDesk {
    pub fn mcp_server(&self) -> McpServer {
        McpServer::new(self.tools.clone())
    }
}

pub fn build_order_desk(provider: Arc<dyn AccountSessionProvider>, settings: &Settings) -> OrderDesk {
    build_order_desk_with(provider, Arc::new(EnvCredentialSource), settings)
}

pub fn build_order_desk_with(
    provider: Arc<dyn AccountSessionProvider>,
    credentials: Arc<dyn CredentialSource>,
    settings: &Settings,
) -> OrderDesk {
    let auth = Arc::new(
        AuthManager::builder(provider)
            .credentials(credentials)
            .hooks(Arc::new(SafeAuthHooks::new(observability_hooks())))
            .login_timeout(settings.login_timeout)
            .build(),
    );
    let queries = Arc::new(OrderQueryService::new(Arc::clone(&auth)));

    let mut registry = ToolRegistry::new();
    register_amazon_tools(&mut registry, Arc::clone(&queries));
    let tools = DefaultToolRuntime::new(Arc::new(registry))
        .with_hooks(Arc::new(SafeToolHooks::new(observability_hooks())));

    OrderDesk {
        auth,
        queries,
        tools,
    }
}

/// Loads settings, installs logging, and serves MCP over stdio until stdin closes.
pub async fn run(provider: Arc<dyn AccountSessionProvider>) -> Result<(), OrderDeskError> {
    let settings = Settings::from_env()?;
    init_tracing(&settings)?;

    let desk = build_order_desk(provider, &settings);
    tracing::info!(
        phase = "transport",
        event = "serve_start",
        tools = desk.tools.registry().len() as u64,
        login_timeout_secs = settings.login_timeout.map(|limit| limit.as_secs())
    );

    serve_stdio(&desk.mcp_server()).await
}
