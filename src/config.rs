use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::core::{scoring, suggest, EngineConfig};

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub inventory: InventorySettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8080 }

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    #[serde(default = "default_search_tolerance")]
    pub search_tolerance: f64,
    #[serde(default = "default_dashboard_tolerance")]
    pub dashboard_tolerance: f64,
    #[serde(default = "default_suggestion_count")]
    pub suggestion_count: usize,
    #[serde(default = "default_max_suggestions")]
    pub max_suggestions: usize,
    pub suggestion_seed: Option<u64>,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            search_tolerance: default_search_tolerance(),
            dashboard_tolerance: default_dashboard_tolerance(),
            suggestion_count: default_suggestion_count(),
            max_suggestions: default_max_suggestions(),
            suggestion_seed: None,
        }
    }
}

impl From<&MatchingSettings> for EngineConfig {
    fn from(settings: &MatchingSettings) -> Self {
        EngineConfig {
            search_tolerance: settings.search_tolerance,
            dashboard_tolerance: settings.dashboard_tolerance,
            suggestion_count: settings.suggestion_count,
            max_suggestions: settings.max_suggestions,
            suggestion_seed: settings.suggestion_seed,
        }
    }
}

fn default_search_tolerance() -> f64 { scoring::SEARCH_TOLERANCE }
fn default_dashboard_tolerance() -> f64 { scoring::DASHBOARD_TOLERANCE }
fn default_suggestion_count() -> usize { suggest::DEFAULT_SUGGESTION_COUNT }
fn default_max_suggestions() -> usize { 12 }

#[derive(Debug, Clone, Default, Deserialize)]
pub struct InventorySettings {
    /// JSON or TOML listing file loaded at startup
    pub path: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with HOMEMATCH)
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., HOMEMATCH__SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("HOMEMATCH")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("HOMEMATCH")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig::from(&self.matching)
    }
}
