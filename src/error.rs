//! Error types for body assembly and kernel configuration.

use thiserror::Error;

/// Result type alias for kernel operations.
pub type KernelResult<T> = Result<T, KernelError>;

/// Errors surfaced to the host. Physics itself never fails: out-of-bounds
/// bodies are destroyed and unresolved overlaps are reported as tick outcomes.
#[derive(Debug, Error)]
pub enum KernelError {
    #[error("position ({x}, {y}) is outside the {width}x{height} world")]
    OutOfBounds { x: i64, y: i64, width: u32, height: u32 },

    #[error("cell ({x}, {y}) is already occupied")]
    CellOccupied { x: u32, y: u32 },

    #[error("no body center within {radius} cells of ({x}, {y})")]
    NoCenterInRange { x: u32, y: u32, radius: u32 },

    /// Handle refers to a body that was destroyed (or never existed).
    #[error("body handle is stale")]
    StaleHandle,

    #[error("invalid settings: {0}")]
    InvalidSettings(String),

    #[error("settings json: {0}")]
    Json(#[from] serde_json::Error),
}

impl KernelError {
    pub fn invalid_settings(details: impl Into<String>) -> Self {
        Self::InvalidSettings(details.into())
    }
}
