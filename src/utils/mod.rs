//! The `utils` module holds the pieces shared across `ejercicios`:
//! the crate-wide error enum and logging initialisation.

pub mod error;
pub mod logging;

pub use error::{AppError, CLOSED_RESOURCE_MESSAGE};
