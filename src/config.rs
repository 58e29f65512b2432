//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub export: ExportConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Dashboard server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_cors_permissive")]
    pub cors_permissive: bool,

    #[serde(default = "default_enable_export")]
    pub enable_export: bool,

    /// Built `worldcup-ui` assets served at `/`
    #[serde(default = "default_ui_dir")]
    pub ui_dir: PathBuf,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8053
}

fn default_cors_permissive() -> bool {
    true
}

fn default_enable_export() -> bool {
    true
}

fn default_ui_dir() -> PathBuf {
    PathBuf::from("worldcup-ui/dist")
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_permissive: default_cors_permissive(),
            enable_export: default_enable_export(),
            ui_dir: default_ui_dir(),
        }
    }
}

impl ServerConfig {
    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Flat-file export configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ExportConfig {
    #[serde(default = "default_export_dir")]
    pub dir: String,
}

fn default_export_dir() -> String {
    ".".to_string()
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            dir: default_export_dir(),
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

impl LoggingConfig {
    /// Whether structured JSON output was requested
    pub fn is_json(&self) -> bool {
        self.format.eq_ignore_ascii_case("json")
    }

    /// Filter directive used when `RUST_LOG` is unset
    pub fn filter_directive(&self) -> String {
        format!("worldcup_history={},tower_http={}", self.level, self.level)
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
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

    /// First config file found in the standard locations
    pub fn find_config_file() -> Option<PathBuf> {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("worldcup").join("config.toml")),
            Some(PathBuf::from("/etc/worldcup/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ];

        first_existing(config_paths.into_iter().flatten())
    }

    /// Load `path` with env overrides, or env overrides over defaults when
    /// there is no file. A file that exists but does not parse is an error.
    pub fn load_from(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load_with_env(path),
            None => Ok(Self::from_env()),
        }
    }

    /// Load from default locations or environment
    pub fn load_default() -> Result<Self, ConfigError> {
        Self::load_from(Self::find_config_file().as_deref())
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(host) = lookup("WORLDCUP_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("WORLDCUP_PORT") {
            match port.parse() {
                Ok(p) => self.server.port = p,
                Err(_) => tracing::warn!(value = %port, "Ignoring invalid WORLDCUP_PORT"),
            }
        }

        if let Some(dir) = lookup("WORLDCUP_UI_DIR") {
            self.server.ui_dir = PathBuf::from(dir);
        }

        if let Some(dir) = lookup("WORLDCUP_EXPORT_DIR") {
            self.export.dir = dir;
        }

        if let Some(level) = lookup("WORLDCUP_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("WORLDCUP_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

fn first_existing(paths: impl IntoIterator<Item = PathBuf>) -> Option<PathBuf> {
    paths.into_iter().find(|p| p.exists())
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
    r#"# World Cup History Configuration
#
# Environment variables override these settings:
# - WORLDCUP_HOST
# - WORLDCUP_PORT
# - WORLDCUP_UI_DIR
# - WORLDCUP_EXPORT_DIR
# - WORLDCUP_LOG_LEVEL
# - WORLDCUP_LOG_FORMAT

[server]
# Dashboard host
host = "127.0.0.1"

# Dashboard port
port = 8053

# Allow cross-origin API requests from any origin
cors_permissive = true

# Serve /api/v1/export downloads
enable_export = true

# Built dashboard assets (trunk build output of worldcup-ui)
ui_dir = "worldcup-ui/dist"

[export]
# Directory the CLI writes world_cup_data.csv and world_cup_wins.csv into
dir = "."

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
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.server.port, 8053);
        assert_eq!(config.server.addr(), "127.0.0.1:8053");
        assert_eq!(config.logging.level, "info");
        assert!(!config.logging.is_json());
    }

    #[test]
    fn test_generated_config_parses() {
        let config = Config::parse(&generate_default_config()).unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8053);
        assert!(config.server.enable_export);
        assert_eq!(config.server.ui_dir, PathBuf::from("worldcup-ui/dist"));
        assert_eq!(config.export.dir, ".");
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config = Config::parse("[server]\nport = 9000\n").unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_overrides() {
        let env: HashMap<&str, &str> = [
            ("WORLDCUP_HOST", "0.0.0.0"),
            ("WORLDCUP_PORT", "9100"),
            ("WORLDCUP_LOG_FORMAT", "json"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config.apply_overrides(|k| env.get(k).map(|v| v.to_string()));

        assert_eq!(config.server.addr(), "0.0.0.0:9100");
        assert!(config.logging.is_json());
    }

    #[test]
    fn test_invalid_port_override_ignored() {
        let mut config = Config::default();
        config.apply_overrides(|k| (k == "WORLDCUP_PORT").then(|| "not-a-port".to_string()));
        assert_eq!(config.server.port, 8053);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[logging]\nlevel = \"debug\"").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_load_invalid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[server\nport = ").unwrap();

        let err = Config::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_malformed_file_in_search_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[server]\nport = \"eighty\"\n").unwrap();

        let found = first_existing([dir.path().join("missing.toml"), path.clone()]);
        assert_eq!(found.as_deref(), Some(path.as_path()));

        let err = Config::load_from(found.as_deref()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { path: p, .. } if p == path));
    }

    #[test]
    fn test_no_config_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        assert!(first_existing([dir.path().join("config.toml")]).is_none());

        let config = Config::load_from(None).unwrap();
        assert_eq!(config.server.host, Config::default().server.host);
    }
}
