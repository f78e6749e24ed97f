//! Independently loading section of the dashboard.

use super::error::ClientError;

/// State of one panel. Loading and failure are mutually exclusive by construction.
#[derive(Debug, Clone, PartialEq)]
pub enum Panel<T> {
    Idle,
    Loading,
    Loaded(T),
    Failed(String),
}

impl<T> Default for Panel<T> {
    fn default() -> Self {
        Panel::Idle
    }
}

impl<T> Panel<T> {
    /// Settle a fetch result. Failures keep only the human message; the cause is logged.
    pub fn settle(panel: &'static str, result: Result<T, ClientError>, message: &str) -> Self {
        match result {
            Ok(data) => Panel::Loaded(data),
            Err(e) => {
                tracing::error!(panel, error = %e, "Dashboard panel fetch failed");
                Panel::Failed(message.to_string())
            }
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Panel::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Panel::Loaded(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Panel::Failed(message) => Some(message),
            _ => None,
        }
    }
}
