//! Tool dispatch errors and classifications.
//!
//! Domain failures (not logged in, order not found) are tool *output*; these
//! errors only cover calls that could not be dispatched at all.

use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolErrorKind {
    NotFound,
    InvalidArguments,
    Execution,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolError {
    pub kind: ToolErrorKind,
    pub message: String,
    pub tool_name: Option<String>,
    pub call_id: Option<String>,
}

impl ToolError {
    pub fn new(kind: ToolErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            tool_name: None,
            call_id: None,
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ToolErrorKind::NotFound, message)
    }

    pub fn invalid_arguments(message: impl Into<String>) -> Self {
        Self::new(ToolErrorKind::InvalidArguments, message)
    }

    pub fn execution(message: impl Into<String>) -> Self {
        Self::new(ToolErrorKind::Execution, message)
    }

    pub fn with_tool_name(mut self, tool_name: impl Into<String>) -> Self {
        self.tool_name = Some(tool_name.into());
        self
    }

    pub fn with_call_id(mut self, call_id: impl Into<String>) -> Self {
        self.call_id = Some(call_id.into());
        self
    }

    /// The call itself was wrong: unknown tool or unusable arguments.
    pub fn is_caller_error(&self) -> bool {
        matches!(
            self.kind,
            ToolErrorKind::InvalidArguments | ToolErrorKind::NotFound
        )
    }
}

impl Display for ToolError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match (&self.tool_name, &self.call_id) {
            (Some(tool_name), Some(call_id)) => write!(
                f,
                "{:?} [tool={}, call_id={}]: {}",
                self.kind, tool_name, call_id, self.message
            ),
            (Some(tool_name), None) => {
                write!(f, "{:?} [tool={}]: {}", self.kind, tool_name, self.message)
            }
            _ => write!(f, "{:?}: {}", self.kind, self.message),
        }
    }
}

impl Error for ToolError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caller_errors_are_flagged() {
        assert!(ToolError::invalid_arguments("bad args").is_caller_error());
        assert!(ToolError::not_found("missing").is_caller_error());
        assert!(!ToolError::execution("boom").is_caller_error());
    }

    #[test]
    fn context_fields_are_included_in_display() {
        let error = ToolError::invalid_arguments("order_id must be a string")
            .with_tool_name("amazon_get_order")
            .with_call_id("7");

        let rendered = error.to_string();
        assert!(rendered.contains("amazon_get_order"));
        assert!(rendered.contains("call_id=7"));
        assert!(rendered.contains("order_id must be a string"));
    }
}
