use std::panic::{AssertUnwindSafe, catch_unwind};
use std::time::Duration;

use osession::{AuthHooks, AuthState, LoginOutcome};
use otooling::{ToolCall, ToolError, ToolExecutionContext, ToolExecutionResult, ToolRuntimeHooks};

pub struct SafeAuthHooks<H> {
    inner: H,
}

impl<H> SafeAuthHooks<H> {
    pub fn new(inner: H) -> Self {
        Self { inner }
    }
}

impl<H> AuthHooks for SafeAuthHooks<H>
where
    H: AuthHooks,
{
    fn on_login_start(&self, otp_supplied: bool) {
        let _ = catch_unwind(AssertUnwindSafe(|| self.inner.on_login_start(otp_supplied)));
    }

    fn on_login_outcome(&self, outcome: &LoginOutcome, elapsed: Duration) {
        let _ = catch_unwind(AssertUnwindSafe(|| {
            self.inner.on_login_outcome(outcome, elapsed)
        }));
    }

    fn on_state_change(&self, from: AuthState, to: AuthState) {
        let _ = catch_unwind(AssertUnwindSafe(|| self.inner.on_state_change(from, to)));
    }
}

pub struct SafeToolHooks<H> {
    inner: H,
}

impl<H> SafeToolHooks<H> {
    pub fn new(inner: H) -> Self {
        Self { inner }
    }
}

impl<H> ToolRuntimeHooks for SafeToolHooks<H>
where
    H: ToolRuntimeHooks,
{
    fn on_execution_start(&self, tool_call: &ToolCall, context: &ToolExecutionContext) {
        let _ = catch_unwind(AssertUnwindSafe(|| {
            self.inner.on_execution_start(tool_call, context)
        }));
    }

    fn on_execution_success(
        &self,
        tool_call: &ToolCall,
        context: &ToolExecutionContext,
        result: &ToolExecutionResult,
        elapsed: Duration,
    ) {
        let _ = catch_unwind(AssertUnwindSafe(|| {
            self.inner
                .on_execution_success(tool_call, context, result, elapsed)
        }));
    }

    fn on_execution_failure(
        &self,
        tool_call: &ToolCall,
        context: &ToolExecutionContext,
        error: &ToolError,
        elapsed: Duration,
    ) {
        let _ = catch_unwind(AssertUnwindSafe(|| {
            self.inner
                .on_execution_failure(tool_call, context, error, elapsed)
        }));
    }
}
