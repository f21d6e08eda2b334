//! Configuration loading for ml-gatewayd.
//!
//! Configuration is loaded from TOML files with the following resolution order:
//! 1. `--config <path>` (CLI flag, must exist)
//! 2. `~/.ai4local/ml-gateway.toml` (user)
//! 3. `/etc/ai4local/ml-gateway.toml` (system)
//! 4. built-in defaults
//!
//! The `PORT` and `ENV` environment variables are applied on top.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::{GatewayError, Result};

/// Service configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub models: ModelsConfig,
}

/// Server network configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Interface to bind to (default: 0.0.0.0).
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on (default: 5000).
    #[serde(default = "default_port")]
    pub port: u16,
    /// Accept cross-origin requests from anywhere, with credentials
    /// (default: true). Restrict before exposing the service publicly.
    #[serde(default = "default_cors_permissive")]
    pub cors_permissive: bool,
    #[serde(default)]
    pub environment: Environment,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_permissive: default_cors_permissive(),
            environment: Environment::default(),
        }
    }
}

impl ServerConfig {
    /// `host:port` to bind.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_cors_permissive() -> bool {
    true
}

/// Deployment environment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Production,
    /// Verbose, human-readable logging.
    Development,
}

impl Environment {
    /// Parse the `ENV` variable; anything but `development` is production.
    pub fn from_env_value(value: &str) -> Self {
        if value == "development" {
            Environment::Development
        } else {
            Environment::Production
        }
    }

    pub fn is_development(&self) -> bool {
        *self == Environment::Development
    }

    /// Log filter used when `RUST_LOG` is unset.
    pub fn default_log_filter(&self) -> &'static str {
        match self {
            Environment::Production => "info",
            Environment::Development => "debug",
        }
    }
}

/// Models to load at startup.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ModelsConfig {
    /// Model names passed to the startup loader.
    #[serde(default)]
    pub preload: Vec<String>,
}

impl Config {
    /// Load configuration from the standard locations, then apply
    /// environment overrides.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        let mut config = match Self::resolve_config_path(explicit_path)? {
            Some(path) => Self::load_from_file(&path)?,
            None => Config::default(),
        };
        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Parse a config file.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            GatewayError::Configuration(format!("Failed to read config file {path:?}: {e}"))
        })?;
        toml::from_str(&content).map_err(|e| {
            GatewayError::Configuration(format!("Failed to parse config file {path:?}: {e}"))
        })
    }

    /// Apply `PORT` and `ENV` overrides read through `lookup`.
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(port) = lookup("PORT") {
            self.server.port = port.trim().parse().map_err(|e| {
                GatewayError::Configuration(format!("Invalid PORT {port:?}: {e}"))
            })?;
        }
        if let Some(env) = lookup("ENV") {
            self.server.environment = Environment::from_env_value(env.trim());
        }
        Ok(())
    }

    /// Resolve the config file path. `None` means use defaults.
    fn resolve_config_path(explicit: Option<&Path>) -> Result<Option<PathBuf>> {
        if let Some(path) = explicit {
            if path.exists() {
                return Ok(Some(path.to_path_buf()));
            }
            return Err(GatewayError::Configuration(format!(
                "Config file not found: {path:?}"
            )));
        }

        // User config
        if let Some(home) = dirs::home_dir() {
            let user_config = home.join(".ai4local").join("ml-gateway.toml");
            if user_config.exists() {
                return Ok(Some(user_config));
            }
        }

        // System config
        let system_config = PathBuf::from("/etc/ai4local/ml-gateway.toml");
        if system_config.exists() {
            return Ok(Some(system_config));
        }

        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn default_config_has_expected_values() {
        let config = Config::default();
        assert_eq!(config.server.address(), "0.0.0.0:5000");
        assert!(config.server.cors_permissive);
        assert_eq!(config.server.environment, Environment::Production);
        assert!(config.models.preload.is_empty());
    }

    #[test]
    fn parse_minimal_config() {
        let toml = r#"
            [server]
            port = 8080
        "#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.server.port, 8080);
        // Defaults preserved
        assert_eq!(config.server.host, "0.0.0.0");
        assert!(config.server.cors_permissive);
    }

    #[test]
    fn parse_full_config() {
        let toml = r#"
            [server]
            host = "127.0.0.1"
            port = 5001
            cors_permissive = false
            environment = "development"

            [models]
            preload = ["sentiment_fr", "sentiment_mg", "classifier"]
        "#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.server.address(), "127.0.0.1:5001");
        assert!(!config.server.cors_permissive);
        assert!(config.server.environment.is_development());
        assert_eq!(
            config.models.preload,
            vec!["sentiment_fr", "sentiment_mg", "classifier"]
        );
    }

    #[test]
    fn env_overrides_port_and_environment() {
        let mut config = Config::default();
        config
            .apply_env(env(&[("PORT", "9000"), ("ENV", "development")]))
            .unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.environment, Environment::Development);
    }

    #[test]
    fn env_other_than_development_is_production() {
        let mut config = Config::default();
        config.server.environment = Environment::Development;
        config.apply_env(env(&[("ENV", "staging")])).unwrap();
        assert_eq!(config.server.environment, Environment::Production);
    }

    #[test]
    fn invalid_port_is_a_configuration_error() {
        let mut config = Config::default();
        let err = config.apply_env(env(&[("PORT", "http")])).unwrap_err();
        assert!(matches!(err, GatewayError::Configuration(_)));
        assert!(err.to_string().contains("Invalid PORT"));
    }

    #[test]
    fn config_not_found_returns_error() {
        let result = Config::load(Some(Path::new("/nonexistent/ml-gateway.toml")));
        let err = result.unwrap_err().to_string();
        assert!(err.contains("Config file not found"));
    }

    #[test]
    fn load_from_file_reads_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[server]\nport = 7000").unwrap();
        let config = Config::load_from_file(file.path()).unwrap();
        assert_eq!(config.server.port, 7000);
    }

    #[test]
    fn malformed_file_is_a_configuration_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[server\nport = ").unwrap();
        let err = Config::load_from_file(file.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }
}
