//! Demo binary: raises the custom error, writes the greeting to the configured
//! file, then shows the failure on a closed handle.

use ejercicios::config::{Settings, load_config};
use ejercicios::utils::logging;
use ejercicios::{AppError, OutputFile, raise_custom_error, write_greeting};
use tracing::{error, info, warn};

fn main() {
    let _ = dotenvy::dotenv();

    let config = match load_config().map_err(AppError::from) {
        Ok(config) => config,
        Err(e) => {
            logging::init("info");
            error!("{}", e);
            std::process::exit(1);
        }
    };
    logging::init(&config.logging.level);

    if let Err(e) = run(&config) {
        error!("Demo failed: {}", e);
        std::process::exit(1);
    }
}

fn run(config: &Settings) -> Result<(), AppError> {
    match raise_custom_error() {
        Ok(()) => warn!("raise_custom_error returned without failing"),
        Err(e) => info!(reason = e.message(), "caught custom error"),
    }

    let mut file = OutputFile::create(&config.output.path)?;
    write_greeting(&mut file)?;
    file.close()?;
    info!(path = %config.output.path, "greeting written");

    if let Err(e) = write_greeting(&mut file) {
        info!("write on closed file rejected: {}", e);
    }

    Ok(())
}
