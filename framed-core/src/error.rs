//! Error types of the host framework.

use thiserror::Error;

/// Errors raised by the host while creating screens or running frames.
#[derive(Error, Debug)]
pub enum AppError {
    /// The layout engine rejected the widget tree.
    #[error("Layout computation failed: {0}")]
    Layout(#[from] taffy::TaffyError),

    /// A screen failed to build its widget tree.
    #[error("Failed to create screen: {source}")]
    Screen {
        /// The underlying error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// An identifier was registered twice in the same widget tree.
    #[error("Widget id '{id}' is already in use")]
    DuplicateId {
        /// The offending identifier.
        id: String,
    },
}

/// Result type alias for host operations.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Create a screen error from any error type.
    pub fn screen(source: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self::Screen {
            source: source.into(),
        }
    }
}
