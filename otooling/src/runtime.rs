//! Tool runtime trait and default registry-backed executor.

use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::time::Instant;

use futures_util::FutureExt;

use crate::{
    NoopToolRuntimeHooks, ToolCall, ToolError, ToolExecutionContext, ToolExecutionResult,
    ToolFuture, ToolRegistry, ToolRuntimeHooks,
};

pub trait ToolRuntime: Send + Sync {
    fn execute<'a>(
        &'a self,
        tool_call: ToolCall,
        context: ToolExecutionContext,
    ) -> ToolFuture<'a, Result<ToolExecutionResult, ToolError>>;
}

#[derive(Clone)]
pub struct DefaultToolRuntime {
    registry: Arc<ToolRegistry>,
    hooks: Arc<dyn ToolRuntimeHooks>,
}

impl DefaultToolRuntime {
    pub fn new(registry: Arc<ToolRegistry>) -> Self {
        Self {
            registry,
            hooks: Arc::new(NoopToolRuntimeHooks),
        }
    }

    pub fn with_hooks(mut self, hooks: Arc<dyn ToolRuntimeHooks>) -> Self {
        self.hooks = hooks;
        self
    }

    pub fn registry(&self) -> Arc<ToolRegistry> {
        Arc::clone(&self.registry)
    }

    async fn dispatch(
        &self,
        tool_call: &ToolCall,
        context: &ToolExecutionContext,
    ) -> Result<ToolExecutionResult, ToolError> {
        let tool = self.registry.get(&tool_call.name).ok_or_else(|| {
            ToolError::not_found(format!("tool '{}' is not registered", tool_call.name))
        })?;

        // A panicking handler must not take the server loop down with it.
        let output = AssertUnwindSafe(tool.invoke(&tool_call.arguments, context))
            .catch_unwind()
            .await
            .map_err(|_| ToolError::execution(format!("tool '{}' panicked", tool_call.name)))??;

        Ok(ToolExecutionResult::from_call(tool_call, output))
    }
}

impl ToolRuntime for DefaultToolRuntime {
    fn execute<'a>(
        &'a self,
        tool_call: ToolCall,
        context: ToolExecutionContext,
    ) -> ToolFuture<'a, Result<ToolExecutionResult, ToolError>> {
        Box::pin(async move {
            self.hooks.on_execution_start(&tool_call, &context);
            let started = Instant::now();

            match self.dispatch(&tool_call, &context).await {
                Ok(result) => {
                    self.hooks
                        .on_execution_success(&tool_call, &context, &result, started.elapsed());
                    Ok(result)
                }
                Err(error) => {
                    let error = error
                        .with_tool_name(tool_call.name.clone())
                        .with_call_id(tool_call.id.clone());
                    self.hooks
                        .on_execution_failure(&tool_call, &context, &error, started.elapsed());
                    Err(error)
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;
    use std::time::Duration;

    use serde_json::json;

    use super::*;
    use crate::{Tool, ToolDefinition, ToolErrorKind};

    #[derive(Debug)]
    struct EchoTool;

    impl Tool for EchoTool {
        fn definition(&self) -> ToolDefinition {
            ToolDefinition::new("echo", "Echoes arguments", json!({ "type": "object" }))
        }

        fn invoke<'a>(
            &'a self,
            args_json: &'a str,
            context: &'a ToolExecutionContext,
        ) -> ToolFuture<'a, Result<String, ToolError>> {
            Box::pin(async move {
                Ok(format!(
                    "request={} args={}",
                    context.request_id.as_deref().unwrap_or("-"),
                    args_json
                ))
            })
        }
    }

    #[derive(Debug)]
    struct BrokenTool;

    impl Tool for BrokenTool {
        fn definition(&self) -> ToolDefinition {
            ToolDefinition::new("broken", "Always fails", json!({ "type": "object" }))
        }

        fn invoke<'a>(
            &'a self,
            _args_json: &'a str,
            _context: &'a ToolExecutionContext,
        ) -> ToolFuture<'a, Result<String, ToolError>> {
            Box::pin(async move { Err(ToolError::execution("tool exploded")) })
        }
    }

    #[derive(Debug)]
    struct PanickingTool;

    impl Tool for PanickingTool {
        fn definition(&self) -> ToolDefinition {
            ToolDefinition::new("panics", "Panics when invoked", json!({ "type": "object" }))
        }

        fn invoke<'a>(
            &'a self,
            _args_json: &'a str,
            _context: &'a ToolExecutionContext,
        ) -> ToolFuture<'a, Result<String, ToolError>> {
            Box::pin(async move { panic!("handler bug") })
        }
    }

    #[derive(Default)]
    struct RecordingHooks {
        events: Mutex<Vec<String>>,
    }

    impl ToolRuntimeHooks for RecordingHooks {
        fn on_execution_start(&self, tool_call: &ToolCall, _context: &ToolExecutionContext) {
            self.events
                .lock()
                .expect("events lock")
                .push(format!("start:{}", tool_call.name));
        }

        fn on_execution_success(
            &self,
            tool_call: &ToolCall,
            _context: &ToolExecutionContext,
            _result: &ToolExecutionResult,
            elapsed: Duration,
        ) {
            assert!(elapsed < Duration::from_secs(5));
            self.events
                .lock()
                .expect("events lock")
                .push(format!("success:{}", tool_call.name));
        }

        fn on_execution_failure(
            &self,
            tool_call: &ToolCall,
            _context: &ToolExecutionContext,
            error: &ToolError,
            _elapsed: Duration,
        ) {
            self.events
                .lock()
                .expect("events lock")
                .push(format!("failure:{}:{:?}", tool_call.name, error.kind));
        }
    }

    fn runtime_with<T: Tool + 'static>(tool: T) -> DefaultToolRuntime {
        let mut registry = ToolRegistry::new();
        registry.register(tool);
        DefaultToolRuntime::new(Arc::new(registry))
    }

    #[tokio::test]
    async fn runtime_executes_registered_tool() {
        let runtime = runtime_with(EchoTool);

        let result = runtime
            .execute(
                ToolCall::new("call_1", "echo", "{\"x\":1}"),
                ToolExecutionContext::new().with_request_id("req-1"),
            )
            .await
            .expect("execution should succeed");

        assert_eq!(result.tool_call_id, "call_1");
        assert_eq!(result.tool_name, "echo");
        assert_eq!(result.output, "request=req-1 args={\"x\":1}");
    }

    #[tokio::test]
    async fn runtime_returns_not_found_for_unknown_tool() {
        let runtime = DefaultToolRuntime::new(Arc::new(ToolRegistry::new()));

        let error = runtime
            .execute(ToolCall::new("call_2", "missing", "{}"), ToolExecutionContext::new())
            .await
            .expect_err("execution should fail");

        assert_eq!(error.kind, ToolErrorKind::NotFound);
        assert_eq!(error.tool_name.as_deref(), Some("missing"));
        assert_eq!(error.call_id.as_deref(), Some("call_2"));
    }

    #[tokio::test]
    async fn runtime_propagates_tool_execution_error() {
        let runtime = runtime_with(BrokenTool);

        let error = runtime
            .execute(ToolCall::new("call_3", "broken", "{}"), ToolExecutionContext::new())
            .await
            .expect_err("execution should fail");

        assert_eq!(error.kind, ToolErrorKind::Execution);
        assert_eq!(error.message, "tool exploded");
    }

    #[tokio::test]
    async fn runtime_converts_handler_panics_into_execution_errors() {
        let runtime = runtime_with(PanickingTool);

        let error = runtime
            .execute(ToolCall::new("call_4", "panics", "{}"), ToolExecutionContext::new())
            .await
            .expect_err("panic should surface as error");

        assert_eq!(error.kind, ToolErrorKind::Execution);
        assert!(error.message.contains("panicked"));
    }

    #[tokio::test]
    async fn runtime_reports_lifecycle_to_hooks() {
        let hooks = Arc::new(RecordingHooks::default());
        let mut registry = ToolRegistry::new();
        registry.register(EchoTool);
        registry.register(BrokenTool);
        let runtime = DefaultToolRuntime::new(Arc::new(registry)).with_hooks(hooks.clone());

        let _ = runtime
            .execute(ToolCall::new("1", "echo", "{}"), ToolExecutionContext::new())
            .await;
        let _ = runtime
            .execute(ToolCall::new("2", "broken", "{}"), ToolExecutionContext::new())
            .await;

        let events = hooks.events.lock().expect("events lock").clone();
        assert_eq!(
            events,
            vec![
                "start:echo",
                "success:echo",
                "start:broken",
                "failure:broken:Execution"
            ]
        );
    }

    #[test]
    fn registry_lists_definitions_sorted_by_name() {
        let mut registry = ToolRegistry::new();
        assert!(registry.is_empty());

        registry.register(EchoTool);
        registry.register(BrokenTool);
        registry.register_fn(
            ToolDefinition::new("apply", "Applies", json!({ "type": "object" })),
            |_args, _ctx| async move { Ok(String::new()) },
        );

        assert_eq!(registry.len(), 3);
        assert!(registry.contains("echo"));
        let names: Vec<_> = registry
            .definitions()
            .into_iter()
            .map(|definition| definition.name)
            .collect();
        assert_eq!(names, vec!["apply", "broken", "echo"]);
        assert_eq!(registry.names(), names);
    }
}
