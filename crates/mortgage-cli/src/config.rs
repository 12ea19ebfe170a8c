use serde::Deserialize;

/// Ambient settings read from `MORTGAGE_*` environment variables.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Default tracing filter when `RUST_LOG` is unset
    pub log_level: String,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: "error".to_string(),
        }
    }
}

impl CliConfig {
    /// Loads configuration from environment
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::Environment::with_prefix("MORTGAGE"))
            .build()?
            .try_deserialize()
    }
}
