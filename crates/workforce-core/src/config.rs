//! Configuration loading and typed config structures for the service.
//!
//! The configuration lives in `workforce-config.yaml` at the working
//! directory root (or wherever `WORKFORCE_CONFIG` points). Every field has
//! a default, so a missing file yields a usable configuration. A handful of
//! environment variables override the file for container deployments.

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Default configuration file name, resolved against the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "workforce-config.yaml";

/// Environment variable naming an alternate configuration file.
pub const CONFIG_PATH_ENV: &str = "WORKFORCE_CONFIG";

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },

    /// An override supplied through the environment could not be parsed.
    #[error("invalid value for {key}: {reason}")]
    InvalidValue {
        /// Name of the offending variable.
        key: &'static str,
        /// Why the value was rejected.
        reason: String,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level service configuration.
///
/// Mirrors the structure of `workforce-config.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ServiceConfig {
    /// Listener settings.
    #[serde(default)]
    pub server: ServerSection,

    /// Where the employee roster comes from.
    #[serde(default)]
    pub roster: RosterSection,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl ServiceConfig {
    /// Load configuration the way the server binary does.
    ///
    /// Reads the file named by `WORKFORCE_CONFIG`, or
    /// [`DEFAULT_CONFIG_PATH`] when it exists, falling back to defaults.
    /// Environment overrides are applied last.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file cannot be read or parsed, or an
    /// override is malformed.
    pub fn load() -> Result<Self, ConfigError> {
        let path = std::env::var(CONFIG_PATH_ENV)
            .ok()
            .map(PathBuf::from)
            .or_else(|| {
                let default_path = PathBuf::from(DEFAULT_CONFIG_PATH);
                default_path.exists().then_some(default_path)
            });
        match path {
            Some(path) => Self::from_file(&path),
            None => {
                let mut config = Self::default();
                config.apply_env_overrides()?;
                Ok(config)
            }
        }
    }

    /// Load configuration from a YAML file at the given path.
    ///
    /// Environment variables override YAML values (see
    /// [`ServiceConfig::apply_overrides`]).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if the content is not valid YAML.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::read_file(path)?;
        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Parse configuration from a YAML string without consulting the
    /// environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yml::from_str(yaml)?)
    }

    fn read_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Apply overrides from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for a malformed override.
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary key lookup.
    ///
    /// - `PORT` overrides `server.port`
    /// - `HOST` overrides `server.host`
    /// - `WORKFORCE_ROSTER` overrides `roster.path`
    /// - `LOG_FORMAT` overrides `logging.format` (`text` or `json`)
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] when `PORT` is not a valid
    /// port number or `LOG_FORMAT` is not a known format.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = lookup("PORT") {
            self.server.port = val.trim().parse().map_err(|e| ConfigError::InvalidValue {
                key: "PORT",
                reason: format!("{val:?}: {e}"),
            })?;
        }
        if let Some(val) = lookup("HOST") {
            self.server.host = val;
        }
        if let Some(val) = lookup("WORKFORCE_ROSTER") {
            self.roster.path = Some(PathBuf::from(val));
        }
        if let Some(val) = lookup("LOG_FORMAT") {
            self.logging.format = match val.trim().to_ascii_lowercase().as_str() {
                "text" => LogFormat::Text,
                "json" => LogFormat::Json,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        key: "LOG_FORMAT",
                        reason: format!("unknown log format {val:?}"),
                    });
                }
            };
        }
        Ok(())
    }
}

/// HTTP listener configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServerSection {
    /// Address to bind (e.g. `0.0.0.0`).
    #[serde(default = "default_host")]
    pub host: String,

    /// TCP port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Roster source configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RosterSection {
    /// YAML or JSON roster file. The built-in roster is used when absent.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Default filter directive (trace, debug, info, warn, error) used when
    /// `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format for log lines.
    #[serde(default)]
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

/// Log line format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable single-line output.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

// ---------------------------------------------------------------------------
// Default value functions (serde default requires named functions)
// ---------------------------------------------------------------------------

fn default_host() -> String {
    "0.0.0.0".to_owned()
}

const fn default_port() -> u16 {
    3000
}

fn default_log_level() -> String {
    "info".to_owned()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn default_config_is_valid() {
        let config = ServiceConfig::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.roster.path, None);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, LogFormat::Text);
    }

    #[test]
    fn parse_full_yaml() {
        let yaml = r#"
server:
  host: "127.0.0.1"
  port: 8080

roster:
  path: "data/staff.yaml"

logging:
  level: "debug"
  format: json
"#;
        let config = ServiceConfig::parse(yaml).unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.roster.path, Some(PathBuf::from("data/staff.yaml")));
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn shipped_config_file_parses() {
        let config = ServiceConfig::parse(include_str!("../../../workforce-config.yaml")).unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.roster.path, None);
        assert_eq!(config.logging.format, LogFormat::Text);
    }

    #[test]
    fn parse_partial_yaml_fills_defaults() {
        let config = ServiceConfig::parse("server:\n  port: 4000\n").unwrap();
        assert_eq!(config.server.port, 4000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.logging, LoggingConfig::default());
    }

    #[test]
    fn from_file_reports_missing_file() {
        let result = ServiceConfig::from_file(Path::new("/nonexistent/workforce-config.yaml"));
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }

    #[test]
    fn parse_rejects_malformed_yaml() {
        let result = ServiceConfig::parse("server: [unterminated");
        assert!(matches!(result, Err(ConfigError::Yaml { .. })));
    }

    #[test]
    fn overrides_replace_file_values() {
        let mut config = ServiceConfig::default();
        config
            .apply_overrides(lookup_from(&[
                ("PORT", "9090"),
                ("HOST", "127.0.0.1"),
                ("WORKFORCE_ROSTER", "/srv/roster.json"),
                ("LOG_FORMAT", "JSON"),
            ]))
            .unwrap();
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.roster.path, Some(PathBuf::from("/srv/roster.json")));
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn overrides_absent_keep_defaults() {
        let mut config = ServiceConfig::default();
        config.apply_overrides(lookup_from(&[])).unwrap();
        assert_eq!(config, ServiceConfig::default());
    }

    #[test]
    fn invalid_port_override_is_rejected() {
        let mut config = ServiceConfig::default();
        let err = config
            .apply_overrides(lookup_from(&[("PORT", "eighty")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { key: "PORT", .. }));
    }

    #[test]
    fn invalid_log_format_override_is_rejected() {
        let mut config = ServiceConfig::default();
        let err = config
            .apply_overrides(lookup_from(&[("LOG_FORMAT", "xml")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { key: "LOG_FORMAT", .. }));
    }
}
