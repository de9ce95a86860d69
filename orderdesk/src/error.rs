//! Startup and transport errors for the server facade.

use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderDeskErrorKind {
    Settings,
    Telemetry,
    Transport,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderDeskError {
    pub kind: OrderDeskErrorKind,
    pub message: String,
}

impl OrderDeskError {
    pub fn new(kind: OrderDeskErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn settings(message: impl Into<String>) -> Self {
        Self::new(OrderDeskErrorKind::Settings, message)
    }

    pub fn telemetry(message: impl Into<String>) -> Self {
        Self::new(OrderDeskErrorKind::Telemetry, message)
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::new(OrderDeskErrorKind::Transport, message)
    }
}

impl Display for OrderDeskError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.message)
    }
}

impl Error for OrderDeskError {}

impl From<std::io::Error> for OrderDeskError {
    fn from(value: std::io::Error) -> Self {
        OrderDeskError::transport(value.to_string())
    }
}
