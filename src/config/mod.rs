mod settings;

use crate::config::settings::PartialSettings;
use config::{Config, ConfigError, Environment, File};

pub use settings::{LoggingSettings, OutputSettings, Settings};

/// Prefix for environment overrides, e.g. `EJERCICIOS_OUTPUT_PATH`.
pub const ENV_PREFIX: &str = "EJERCICIOS";

/// Loads the configuration from `config/default` and `EJERCICIOS_*` environment
/// variables, then fills anything missing from `Settings::default()`.
pub fn load_config() -> Result<Settings, ConfigError> {
    let builder = Config::builder()
        .add_source(File::with_name("config/default").required(false))
        .add_source(Environment::with_prefix(ENV_PREFIX).separator("_"));

    let config = builder.build()?;
    let partial: PartialSettings = config.try_deserialize()?;
    let default = Settings::default();

    Ok(Settings {
        output: OutputSettings {
            path: partial
                .output
                .as_ref()
                .and_then(|o| o.path.clone())
                .unwrap_or(default.output.path),
        },
        logging: LoggingSettings {
            level: partial
                .logging
                .as_ref()
                .and_then(|l| l.level.clone())
                .unwrap_or(default.logging.level),
        },
    })
}

#[cfg(test)]
mod tests;
