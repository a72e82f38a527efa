//! Error types for the video player

use serde::{Deserialize, Serialize};

/// Errors raised by the player core.
///
/// Browser-side failures (autoplay blocks, fullscreen denial) never reach this
/// type; adapters log them. Only invalid host input ends up here.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum PlayerError {
    /// Invalid time value
    #[error("Invalid time value: {time}")]
    InvalidTime { time: f64 },

    /// Configuration rejected during parsing or validation
    #[error("Invalid config: {reason}")]
    InvalidConfig { reason: String },

    /// DOM construction or lookup failed in a host adapter
    #[error("DOM error: {reason}")]
    Dom { reason: String },
}

impl PlayerError {
    /// Create a DOM error from anything printable
    pub fn dom(reason: impl Into<String>) -> Self {
        Self::Dom {
            reason: reason.into(),
        }
    }

    /// Get error category for logging
    #[inline]
    pub fn category(&self) -> &'static str {
        match self {
            Self::InvalidTime { .. } => "validation",
            Self::InvalidConfig { .. } => "config",
            Self::Dom { .. } => "dom",
        }
    }
}

impl From<serde_json::Error> for PlayerError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidConfig {
            reason: err.to_string(),
        }
    }
}
