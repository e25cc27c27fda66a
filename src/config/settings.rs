use serde::Deserialize;

/// Top-level configuration settings for the demo binary.
#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub output: OutputSettings,
    pub logging: LoggingSettings,
}

/// Where the greeting gets written.
#[derive(Debug, Deserialize, Clone)]
pub struct OutputSettings {
    pub path: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingSettings {
    pub level: String,
}

/// Partial configuration settings loaded from files or environment.
///
/// Missing values are filled from `Settings::default()`.
#[derive(Debug, Deserialize)]
pub struct PartialSettings {
    pub output: Option<PartialOutputSettings>,
    pub logging: Option<PartialLoggingSettings>,
}

#[derive(Debug, Deserialize)]
pub struct PartialOutputSettings {
    pub path: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PartialLoggingSettings {
    pub level: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            output: OutputSettings {
                path: "salida.txt".to_string(),
            },
            logging: LoggingSettings {
                level: "info".to_string(),
            },
        }
    }
}
