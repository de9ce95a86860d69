//! Forwards every callback to two hook sets, first then second.

use std::time::Duration;

use osession::{AuthHooks, AuthState, LoginOutcome};
use otooling::{ToolCall, ToolError, ToolExecutionContext, ToolExecutionResult, ToolRuntimeHooks};

#[derive(Debug, Clone, Copy, Default)]
pub struct FanoutHooks<A, B> {
    first: A,
    second: B,
}

impl<A, B> FanoutHooks<A, B> {
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<A, B> AuthHooks for FanoutHooks<A, B>
where
    A: AuthHooks,
    B: AuthHooks,
{
    fn on_login_start(&self, otp_supplied: bool) {
        self.first.on_login_start(otp_supplied);
        self.second.on_login_start(otp_supplied);
    }

    fn on_login_outcome(&self, outcome: &LoginOutcome, elapsed: Duration) {
        self.first.on_login_outcome(outcome, elapsed);
        self.second.on_login_outcome(outcome, elapsed);
    }

    fn on_state_change(&self, from: AuthState, to: AuthState) {
        self.first.on_state_change(from, to);
        self.second.on_state_change(from, to);
    }
}

impl<A, B> ToolRuntimeHooks for FanoutHooks<A, B>
where
    A: ToolRuntimeHooks,
    B: ToolRuntimeHooks,
{
    fn on_execution_start(&self, tool_call: &ToolCall, context: &ToolExecutionContext) {
        self.first.on_execution_start(tool_call, context);
        self.second.on_execution_start(tool_call, context);
    }

    fn on_execution_success(
        &self,
        tool_call: &ToolCall,
        context: &ToolExecutionContext,
        result: &ToolExecutionResult,
        elapsed: Duration,
    ) {
        self.first
            .on_execution_success(tool_call, context, result, elapsed);
        self.second
            .on_execution_success(tool_call, context, result, elapsed);
    }

    fn on_execution_failure(
        &self,
        tool_call: &ToolCall,
        context: &ToolExecutionContext,
        error: &ToolError,
        elapsed: Duration,
    ) {
        self.first
            .on_execution_failure(tool_call, context, error, elapsed);
        self.second
            .on_execution_failure(tool_call, context, error, elapsed);
    }
}
