//! # Error Types
//!
//! This module defines error types used throughout the etiqueta library.
//!
//! Only configuration problems are errors. Content problems (an over-long
//! product name, a missing SKU, an unparseable price) are recovered where
//! they happen by truncating or skipping the affected instruction.

use thiserror::Error;

/// Main error type for etiqueta operations
#[derive(Debug, Error)]
pub enum EtiquetaError {
    /// Unsupported DPI, malformed preset, or otherwise unusable label geometry
    #[error("Config error: {0}")]
    Config(String),

    /// A preset key that the registry does not know
    #[error("Unknown preset '{0}'")]
    UnknownPreset(String),

    /// Malformed command stream or instruction parameter
    #[error("Invalid command: {0}")]
    InvalidCommand(String),

    /// JSON (de)serialization error wrapper
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand used across the crate.
pub type Result<T> = std::result::Result<T, EtiquetaError>;
