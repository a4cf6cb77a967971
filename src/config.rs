//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub data: DataConfig,

    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Input file configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DataConfig {
    #[serde(default = "default_geojson_path")]
    pub geojson_path: PathBuf,

    #[serde(default = "default_csv_path")]
    pub csv_path: PathBuf,
}

fn default_geojson_path() -> PathBuf {
    PathBuf::from("./data/geojson-counties-fips.json")
}

fn default_csv_path() -> PathBuf {
    PathBuf::from("./data/county_results.csv")
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            geojson_path: default_geojson_path(),
            csv_path: default_csv_path(),
        }
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Directory with the built UI bundle; served at `/`
    #[serde(default = "default_ui_dist_dir")]
    pub ui_dist_dir: PathBuf,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8050
}

fn default_ui_dist_dir() -> PathBuf {
    PathBuf::from("./countylens-ui/dist")
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            ui_dist_dir: default_ui_dist_dir(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("countylens").join("config.toml")),
            Some(PathBuf::from("/etc/countylens/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ];

        for path_opt in config_paths.iter().flatten() {
            if path_opt.exists() {
                match Self::load_with_env(path_opt) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path_opt);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path_opt, e);
                    }
                }
            }
        }

        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        // Data overrides
        if let Ok(path) = std::env::var("COUNTYLENS_GEOJSON") {
            self.data.geojson_path = PathBuf::from(path);
        }
        if let Ok(path) = std::env::var("COUNTYLENS_CSV") {
            self.data.csv_path = PathBuf::from(path);
        }

        // Server overrides
        if let Ok(host) = std::env::var("COUNTYLENS_HOST") {
            self.server.host = host;
        }
        if let Ok(port) = std::env::var("COUNTYLENS_PORT") {
            if let Ok(p) = port.parse() {
                self.server.port = p;
            }
        }
        if let Ok(dist) = std::env::var("COUNTYLENS_UI_DIST") {
            self.server.ui_dist_dir = PathBuf::from(dist);
        }

        // Logging overrides
        if let Ok(level) = std::env::var("COUNTYLENS_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("COUNTYLENS_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data: DataConfig::default(),
            server: ServerConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# countylens configuration
#
# Environment variables override these settings:
# - COUNTYLENS_GEOJSON
# - COUNTYLENS_CSV
# - COUNTYLENS_HOST
# - COUNTYLENS_PORT
# - COUNTYLENS_UI_DIST
# - COUNTYLENS_LOG_LEVEL
# - COUNTYLENS_LOG_FORMAT

[data]
# County polygon GeoJSON (properties.STATE + properties.COUNTY per feature)
geojson_path = "./data/geojson-counties-fips.json"

# County metric table with a COUNTY join column
csv_path = "./data/county_results.csv"

[server]
# Listening address
host = "127.0.0.1"
port = 8050

# Built UI bundle served at /
ui_dist_dir = "./countylens-ui/dist"

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.server.port, 8050);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "[server]\nport = 9000\n\n[data]\ncsv_path = \"/tmp/counties.csv\"\n"
        )
        .unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.data.csv_path, PathBuf::from("/tmp/counties.csv"));
        assert_eq!(config.data.geojson_path, default_geojson_path());
    }

    #[test]
    fn test_generated_default_parses() {
        let config: Config = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(config.server.port, 8050);
    }
}
