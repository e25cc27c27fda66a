//! The `error` module defines the error kinds surfaced by the `ejercicios` crate.
//!
//! Library operations return `Result<_, AppError>` and propagate with `?`;
//! nothing here is caught, retried, or logged.

use thiserror::Error;

use crate::exception::CustomError;

/// Message reported when a write is attempted on a handle that is not open.
pub const CLOSED_RESOURCE_MESSAGE: &str = "No se puede escribir en un archivo cerrado";

#[derive(Debug, Error)]
pub enum AppError {
    /// Application error raised with an arbitrary message.
    #[error(transparent)]
    Custom(#[from] CustomError),

    /// Write attempted on an output handle that is not open.
    #[error("No se puede escribir en un archivo cerrado")]
    ClosedResource,

    /// The underlying stream rejected the write.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}
