use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub log: LogConfig,
    #[serde(default)]
    pub export: ExportConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LogConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    /// "pretty" for the console, "json" for log shipping
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct ExportConfig {
    #[serde(default = "default_escape_quotes")]
    pub escape_quotes: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            escape_quotes: default_escape_quotes(),
        }
    }
}

fn default_escape_quotes() -> bool {
    true
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (GROCER__LOG__LEVEL, etc.)
    /// 2. Config file given by path, GROCER_CONFIG, or config/default.toml
    /// 3. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder()
            .set_default("log.level", default_log_level())?
            .set_default("log.format", default_log_format())?
            .set_default("export.escape_quotes", default_escape_quotes())?;

        let config_file_path = config_path
            .or_else(|| env::var("GROCER_CONFIG").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // The file is optional
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("GROCER")
                .separator("__")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.log.level.trim().is_empty() {
            return Err("Log level must not be empty".to_string());
        }
        if !matches!(self.log.format.as_str(), "pretty" | "json") {
            return Err(format!(
                "Log format must be \"pretty\" or \"json\", got \"{}\"",
                self.log.format
            ));
        }
        Ok(())
    }
}
