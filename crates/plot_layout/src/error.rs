//! Error types for the plot layout crate
//!
//! Layout passes themselves never fail. Errors only come from loading
//! configuration and scene descriptions.

use thiserror::Error;

/// Errors that can occur when loading layout inputs
#[derive(Error, Debug)]
pub enum LayoutError {
    /// Invalid layout configuration
    #[error("Invalid layout configuration: {0}")]
    Config(String),

    /// Invalid scene description
    #[error("Invalid scene description: {0}")]
    Scene(String),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for plot layout operations
pub type Result<T> = std::result::Result<T, LayoutError>;
