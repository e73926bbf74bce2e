// Failures raised while running a snippet body.
// These never leave the executor; they end up inside an ExecutionResult.

use serde::Serialize;
use std::any::Any;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SnippetFailure {
    /// The body returned an error
    #[error("error: {reason}")]
    Fault { reason: String },

    /// The body panicked
    #[error("panicked: {reason}")]
    Panic { reason: String },

    /// The body did not finish within its budget and was abandoned
    #[error("timeout after {limit_ms}ms")]
    Timeout { limit_ms: u64 },

    /// The worker went away without handing back a result
    #[error("worker exited without reporting")]
    Abandoned,
}

impl SnippetFailure {
    pub fn fault(reason: impl Into<String>) -> Self {
        Self::Fault {
            reason: reason.into(),
        }
    }

    pub fn panic(reason: impl Into<String>) -> Self {
        Self::Panic {
            reason: reason.into(),
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout { .. })
    }
}

/// Best-effort text of a panic payload
pub fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "non-string panic payload".to_string()
    }
}
