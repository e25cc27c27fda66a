//! The `output` module writes the fixed greeting to caller-owned output handles.
//!
//! `OutputHandle` is the seam: anything writable that can report whether it
//! is open. `OutputFile` is the filesystem-backed handle, which can be closed
//! by its owner and then refuses writes. `write_greeting` is the helper that
//! checks the handle before writing.

pub mod handle;
pub mod writer;

pub use handle::{OutputFile, OutputHandle};
pub use writer::{GREETING, write_greeting};
