use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default = "default_log_format")]
    pub log_format: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            log_level: default_log_level(),
            log_format: default_log_format(),
        }
    }
}

/// Catalog data source configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CatalogConfig {
    /// Path to a catalog JSON file. Unset means the embedded default
    /// dataset.
    #[serde(default)]
    pub path: Option<String>,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

/// Load configuration from an optional `config.toml` plus environment
/// overrides (`LLM_PRICING__SERVER__PORT=9000` style).
pub fn load_config(path: &Path) -> anyhow::Result<Config> {
    let config = config::Config::builder()
        .add_source(config::File::from(path.to_path_buf()).required(false))
        .add_source(config::Environment::with_prefix("LLM_PRICING").separator("__"))
        .build()?;

    let cfg: Config = config.try_deserialize()?;
    validate_config(&cfg)?;

    Ok(cfg)
}

fn validate_config(cfg: &Config) -> anyhow::Result<()> {
    const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
    if !LOG_LEVELS.contains(&cfg.server.log_level.as_str()) {
        anyhow::bail!(
            "Invalid log_level '{}', expected one of {:?}",
            cfg.server.log_level,
            LOG_LEVELS
        );
    }

    if cfg.server.log_format != "text" && cfg.server.log_format != "json" {
        anyhow::bail!(
            "Invalid log_format '{}', expected 'text' or 'json'",
            cfg.server.log_format
        );
    }

    if cfg.server.port == 0 {
        anyhow::bail!("Server port cannot be 0");
    }

    if let Some(path) = &cfg.catalog.path {
        if path.is_empty() {
            anyhow::bail!("catalog.path cannot be empty when set");
        }
    }

    Ok(())
}
