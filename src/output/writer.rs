use tracing::debug;

use super::handle::OutputHandle;
use crate::utils::error::AppError;

/// Text written by [`write_greeting`].
pub const GREETING: &str = "Hola, mundo!";

/// Writes [`GREETING`] to an already-open handle.
///
/// Fails with [`AppError::ClosedResource`] without touching the handle when it
/// is not open. The handle is neither flushed nor closed; that stays with the
/// caller.
pub fn write_greeting<H: OutputHandle + ?Sized>(handle: &mut H) -> Result<(), AppError> {
    if !handle.is_open() {
        return Err(AppError::ClosedResource);
    }

    handle.write_all(GREETING.as_bytes())?;
    debug!(bytes = GREETING.len(), "greeting written");
    Ok(())
}
