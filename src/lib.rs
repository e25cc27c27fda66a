//! # Ejercicios
//!
//! `ejercicios` collects two small exercises in error handling and file output.
//!
//! ## Core Modules
//!
//! - `exception`: a custom error type carrying a message, and a function that always raises it.
//! - `output`: output handles and a helper that writes a fixed greeting to an open handle.
//! - `config`: loads settings for the demo binary.
//! - `utils`: the crate-wide error enum and logging setup.

pub mod config;
pub mod exception;
pub mod output;
pub mod utils;

pub use exception::{CustomError, raise_custom_error};
pub use output::{GREETING, OutputFile, OutputHandle, write_greeting};
pub use utils::error::AppError;
