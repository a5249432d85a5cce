mod schema;

pub use schema::{Config, OutputConfig, ServerConfig};

use anyhow::{Context, Result};
use std::fs;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

/// Get the config directory path (~/.config/topsis/)
pub fn get_config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".config").join("topsis"))
}

/// Get the default config file path (~/.config/topsis/config.yaml)
pub fn get_config_path() -> Option<PathBuf> {
    get_config_dir().map(|dir| dir.join("config.yaml"))
}

/// Load configuration from a YAML file
///
/// With an explicit `path` the file must exist. Without one, the default path
/// is tried and built-in defaults are used when it is absent.
///
/// # Errors
///
/// Returns an error if:
/// - An explicitly requested config file does not exist
/// - The config file cannot be read
/// - The YAML cannot be parsed
pub fn load_config(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                anyhow::bail!("Config file not found at {}", p.display());
            }
            p
        }
        None => match get_config_path() {
            Some(p) if p.exists() => p,
            _ => return Ok(Config::default()),
        },
    };

    let config_content = fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file at {}", config_path.display()))?;

    let config: Config = serde_saphyr::from_str(&config_content).with_context(|| {
        format!("Failed to parse config: invalid YAML in {}", config_path.display())
    })?;

    Ok(config)
}

/// Validate configuration values.
/// Returns all validation errors at once (not just the first).
pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    let output = &config.output;
    if output.score_column.trim().is_empty() {
        errors.push("output.score_column: must not be empty".to_string());
    }
    if output.rank_column.trim().is_empty() {
        errors.push("output.rank_column: must not be empty".to_string());
    }
    if output.score_column == output.rank_column {
        errors.push(format!(
            "output: score_column and rank_column are both '{}'",
            output.score_column
        ));
    }

    let server = &config.server;
    if let Err(e) = server.bind.parse::<SocketAddr>() {
        errors.push(format!("server.bind: invalid address '{}' - {}", server.bind, e));
    }
    if server.upload_dir.trim().is_empty() {
        errors.push("server.upload_dir: must not be empty".to_string());
    }
    if server.result_dir.trim().is_empty() {
        errors.push("server.result_dir: must not be empty".to_string());
    }
    if server.max_upload_bytes == 0 {
        errors.push("server.max_upload_bytes: must be greater than zero".to_string());
    }
    if let Err(e) = humantime::parse_duration(&server.request_timeout) {
        errors.push(format!(
            "server.request_timeout: invalid duration '{}' - {}",
            server.request_timeout, e
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

impl ServerConfig {
    pub fn bind_addr(&self) -> Result<SocketAddr> {
        self.bind
            .parse()
            .with_context(|| format!("Invalid bind address '{}'", self.bind))
    }

    pub fn timeout(&self) -> Result<Duration> {
        humantime::parse_duration(&self.request_timeout)
            .with_context(|| format!("Invalid request timeout '{}'", self.request_timeout))
    }
}
