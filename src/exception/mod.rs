//! The `exception` module defines the application's custom error type.
//!
//! It provides `CustomError`, a message-carrying error that plugs into the
//! standard `std::error::Error` machinery, and `raise_custom_error`, a
//! function whose only purpose is to fail with it.

pub mod custom;

pub use custom::{CustomError, RAISED_MESSAGE, raise_custom_error};
