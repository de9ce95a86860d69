//! Observability hooks for login attempts, auth state transitions, and tool calls.
//!
//! ```rust
//! use oobserve::{FanoutHooks, MetricsObservabilityHooks, SafeAuthHooks, TracingObservabilityHooks};
//!
//! let _auth_hooks = SafeAuthHooks::new(TracingObservabilityHooks);
//! let _both = FanoutHooks::new(TracingObservabilityHooks, MetricsObservabilityHooks);
//! ```

mod fanout;
mod metrics_hooks;
mod safe_hooks;
mod tracing_hooks;

pub use fanout::FanoutHooks;
pub use metrics_hooks::MetricsObservabilityHooks;
pub use safe_hooks::{SafeAuthHooks, SafeToolHooks};
pub use tracing_hooks::TracingObservabilityHooks;

pub mod prelude {
    pub use crate::{
        FanoutHooks, MetricsObservabilityHooks, SafeAuthHooks, SafeToolHooks,
        TracingObservabilityHooks,
    };
}
