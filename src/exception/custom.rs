use thiserror::Error;

/// Message carried by the error returned from [`raise_custom_error`].
pub const RAISED_MESSAGE: &str = "Excepción personalizada lanzada";

/// Application-defined error carrying a human-readable message.
///
/// The message is fixed at construction and rendered unchanged by both
/// [`CustomError::message`] and `Display`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct CustomError {
    message: String,
}

impl CustomError {
    /// Creates a new error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Returns the message exactly as it was supplied.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Always fails with a [`CustomError`].
pub fn raise_custom_error() -> Result<(), CustomError> {
    Err(CustomError::new(RAISED_MESSAGE))
}
