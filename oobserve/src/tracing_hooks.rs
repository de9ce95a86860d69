//! Tracing-based observability hooks for the auth session and tool runtime.
//!
//! Events never carry credentials or OTP codes; only whether a code was supplied.
//!
//! ```rust
//! use oobserve::TracingObservabilityHooks;
//! use osession::AuthHooks;
//!
//! fn accepts_auth_hooks(_hooks: &dyn AuthHooks) {}
//!
//! let hooks = TracingObservabilityHooks;
//! accepts_auth_hooks(&hooks);
//! ```

use std::time::Duration;

use osession::{AuthHooks, AuthState, LoginOutcome};
use otooling::{ToolCall, ToolError, ToolExecutionContext, ToolExecutionResult, ToolRuntimeHooks};

#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObservabilityHooks;

impl AuthHooks for TracingObservabilityHooks {
    fn on_login_start(&self, otp_supplied: bool) {
        tracing::info!(phase = "auth", event = "login_start", otp_supplied);
    }

    fn on_login_outcome(&self, outcome: &LoginOutcome, elapsed: Duration) {
        let elapsed_ms = elapsed.as_millis() as u64;
        match outcome {
            LoginOutcome::LoggedIn => {
                tracing::info!(phase = "auth", event = "login_success", elapsed_ms);
            }
            LoginOutcome::OtpRequired => {
                tracing::warn!(phase = "auth", event = "login_otp_required", elapsed_ms);
            }
            LoginOutcome::Failed(error) => {
                tracing::error!(
                    phase = "auth",
                    event = "login_failure",
                    elapsed_ms,
                    error_kind = ?error.kind,
                    error = %error
                );
            }
        }
    }

    fn on_state_change(&self, from: AuthState, to: AuthState) {
        tracing::info!(
            phase = "auth",
            event = "state_change",
            from = from.as_str(),
            to = to.as_str()
        );
    }
}

impl ToolRuntimeHooks for TracingObservabilityHooks {
    fn on_execution_start(&self, tool_call: &ToolCall, context: &ToolExecutionContext) {
        tracing::info!(
            phase = "tool",
            event = "execution_start",
            tool_name = tool_call.name,
            tool_call_id = tool_call.id,
            request_id = context.request_id.as_deref()
        );
    }

    fn on_execution_success(
        &self,
        tool_call: &ToolCall,
        context: &ToolExecutionContext,
        result: &ToolExecutionResult,
        elapsed: Duration,
    ) {
        tracing::info!(
            phase = "tool",
            event = "execution_success",
            tool_name = tool_call.name,
            tool_call_id = tool_call.id,
            request_id = context.request_id.as_deref(),
            output_bytes = result.output.len() as u64,
            elapsed_ms = elapsed.as_millis() as u64
        );
    }

    fn on_execution_failure(
        &self,
        tool_call: &ToolCall,
        context: &ToolExecutionContext,
        error: &ToolError,
        elapsed: Duration,
    ) {
        tracing::error!(
            phase = "tool",
            event = "execution_failure",
            tool_name = tool_call.name,
            tool_call_id = tool_call.id,
            request_id = context.request_id.as_deref(),
            elapsed_ms = elapsed.as_millis() as u64,
            error_kind = ?error.kind,
            error = %error
        );
    }
}
