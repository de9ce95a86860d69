//! Metrics-based observability hooks for the auth session and tool runtime.
//!
//! ```rust
//! use oobserve::MetricsObservabilityHooks;
//! use otooling::ToolRuntimeHooks;
//!
//! fn accepts_tool_hooks(_hooks: &dyn ToolRuntimeHooks) {}
//!
//! let hooks = MetricsObservabilityHooks;
//! accepts_tool_hooks(&hooks);
//! ```

use std::time::Duration;

use osession::{AuthHooks, AuthState, LoginOutcome};
use otooling::{ToolCall, ToolError, ToolExecutionContext, ToolExecutionResult, ToolRuntimeHooks};

#[derive(Debug, Clone, Copy, Default)]
pub struct MetricsObservabilityHooks;

impl AuthHooks for MetricsObservabilityHooks {
    fn on_login_start(&self, otp_supplied: bool) {
        metrics::counter!(
            "orderdesk_login_attempt_total",
            "otp_supplied" => otp_supplied.to_string()
        )
        .increment(1);
    }

    fn on_login_outcome(&self, outcome: &LoginOutcome, elapsed: Duration) {
        let error_kind = match outcome {
            LoginOutcome::Failed(error) => format!("{:?}", error.kind),
            _ => "none".to_string(),
        };

        metrics::counter!(
            "orderdesk_login_outcome_total",
            "outcome" => outcome.label(),
            "error_kind" => error_kind
        )
        .increment(1);
        metrics::histogram!(
            "orderdesk_login_duration_seconds",
            "outcome" => outcome.label()
        )
        .record(elapsed.as_secs_f64());
    }

    fn on_state_change(&self, from: AuthState, to: AuthState) {
        metrics::counter!(
            "orderdesk_auth_state_change_total",
            "from" => from.as_str(),
            "to" => to.as_str()
        )
        .increment(1);
    }
}

impl ToolRuntimeHooks for MetricsObservabilityHooks {
    fn on_execution_start(&self, tool_call: &ToolCall, _context: &ToolExecutionContext) {
        metrics::counter!(
            "orderdesk_tool_execution_start_total",
            "tool_name" => tool_call.name.clone()
        )
        .increment(1);
    }

    fn on_execution_success(
        &self,
        tool_call: &ToolCall,
        _context: &ToolExecutionContext,
        _result: &ToolExecutionResult,
        elapsed: Duration,
    ) {
        metrics::counter!(
            "orderdesk_tool_execution_success_total",
            "tool_name" => tool_call.name.clone()
        )
        .increment(1);
        metrics::histogram!(
            "orderdesk_tool_execution_duration_seconds",
            "tool_name" => tool_call.name.clone(),
            "status" => "success"
        )
        .record(elapsed.as_secs_f64());
    }

    fn on_execution_failure(
        &self,
        tool_call: &ToolCall,
        _context: &ToolExecutionContext,
        error: &ToolError,
        elapsed: Duration,
    ) {
        metrics::counter!(
            "orderdesk_tool_execution_failure_total",
            "tool_name" => tool_call.name.clone(),
            "error_kind" => format!("{:?}", error.kind)
        )
        .increment(1);
        metrics::histogram!(
            "orderdesk_tool_execution_duration_seconds",
            "tool_name" => tool_call.name.clone(),
            "status" => "failure"
        )
        .record(elapsed.as_secs_f64());
    }
}
