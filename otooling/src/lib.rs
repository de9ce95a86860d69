//! Capability layer for registering and executing named tools.
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use otooling::{DefaultToolRuntime, ToolDefinition, ToolRegistry};
//! use serde_json::json;
//!
//! let mut registry = ToolRegistry::new();
//! registry.register_fn(
//!     ToolDefinition::new("ping", "Replies pong", json!({ "type": "object" })),
//!     |_args, _ctx| async move { Ok("pong".to_string()) },
//! );
//!
//! let runtime = DefaultToolRuntime::new(Arc::new(registry));
//! assert!(runtime.registry().contains("ping"));
//! ```

mod args;
mod error;
mod hooks;
mod registry;
mod runtime;
mod tool;
mod types;

pub mod prelude {
    pub use crate::{
        DefaultToolRuntime, Tool, ToolCall, ToolDefinition, ToolError, ToolErrorKind,
        ToolExecutionContext, ToolExecutionResult, ToolFuture, ToolRegistry, ToolRuntime,
        ToolRuntimeHooks,
    };
}

pub use args::{
    ToolArgs, optional_bool, optional_i32, optional_string, parse_json_object, parse_json_value,
    required_string,
};
pub use error::{ToolError, ToolErrorKind};
pub use hooks::{NoopToolRuntimeHooks, ToolRuntimeHooks};
pub use registry::ToolRegistry;
pub use runtime::{DefaultToolRuntime, ToolRuntime};
pub use tool::{FunctionTool, Tool, ToolFuture};
pub use types::{ToolCall, ToolDefinition, ToolExecutionContext, ToolExecutionResult};
