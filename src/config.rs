//! Configuration loading and constants.
//!
//! Loads application configuration from a TOML file. Every section is optional;
//! a missing `[keywords]` section selects the built-in keyword set.
//! `AppConfig` is the root configuration struct containing all settings.

use serde::Deserialize;
use std::path::Path;

use crate::classifier::keywords::KeywordSetError;
use crate::classifier::KeywordSet;

// =============================================================================
// HTTP Response Headers
// =============================================================================

/// Classification results are per-request and must never be served from a cache
pub const CACHE_CONTROL_NO_STORE: &str = "no-store";

// =============================================================================
// Default Paths and Strings
// =============================================================================

/// Default configuration file path
pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Default log filter when RUST_LOG is not set
pub const DEFAULT_LOG_FILTER: &str = "maternal_risk=info,tower_http=info";

/// Default log format (text or json)
pub const DEFAULT_LOG_FORMAT: &str = "text";

/// Default bind host
pub const DEFAULT_HTTP_HOST: &str = "0.0.0.0";

/// Default bind port
pub const DEFAULT_HTTP_PORT: u16 = 8000;

/// Seconds to wait for in-flight requests after a shutdown signal
pub const DEFAULT_SHUTDOWN_GRACE_SECS: u64 = 30;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// HTTP server configuration
    #[serde(default)]
    pub http: HttpServerConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Keyword list override (built-in set when absent)
    #[serde(default)]
    pub keywords: Option<KeywordsConfig>,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct HttpServerConfig {
    #[serde(default = "HttpServerConfig::default_host")]
    pub host: String,
    #[serde(default = "HttpServerConfig::default_port")]
    pub port: u16,
    #[serde(default = "HttpServerConfig::default_shutdown_grace")]
    pub shutdown_grace_seconds: u64,
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: Self::default_host(),
            port: Self::default_port(),
            shutdown_grace_seconds: Self::default_shutdown_grace(),
        }
    }
}

impl HttpServerConfig {
    fn default_host() -> String {
        DEFAULT_HTTP_HOST.to_string()
    }

    fn default_port() -> u16 {
        DEFAULT_HTTP_PORT
    }

    fn default_shutdown_grace() -> u64 {
        DEFAULT_SHUTDOWN_GRACE_SECS
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log format: "text" (human-readable, default) or "json" (structured)
    #[serde(default = "LoggingConfig::default_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: DEFAULT_LOG_FORMAT.to_string(),
        }
    }
}

impl LoggingConfig {
    fn default_format() -> String {
        DEFAULT_LOG_FORMAT.to_string()
    }

    pub fn is_json(&self) -> bool {
        self.format.eq_ignore_ascii_case("json")
    }
}

/// Replacement keyword lists
#[derive(Debug, Clone, Deserialize)]
pub struct KeywordsConfig {
    /// Label logged at startup; defaults to "custom"
    #[serde(default = "KeywordsConfig::default_version")]
    pub version: String,
    pub high: Vec<String>,
    pub medium: Vec<String>,
}

impl KeywordsConfig {
    fn default_version() -> String {
        "custom".to_string()
    }
}

impl AppConfig {
    /// Load configuration from `path`.
    ///
    /// When `required` is false a missing file yields the defaults, so the
    /// service runs without any config file at the default location.
    pub fn load<P: AsRef<Path>>(path: P, required: bool) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if !required && e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Self::default());
            }
            Err(e) => return Err(e.into()),
        };

        let config: AppConfig = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let format = &self.logging.format;
        if !format.eq_ignore_ascii_case("text") && !format.eq_ignore_ascii_case("json") {
            return Err(ConfigError::Validation(format!(
                "logging.format must be \"text\" or \"json\", got {:?}",
                format
            )));
        }

        // Surface keyword errors at load time rather than at first request
        self.keyword_set()?;
        Ok(())
    }

    /// The keyword set the classifier should use.
    pub fn keyword_set(&self) -> Result<KeywordSet, ConfigError> {
        match &self.keywords {
            Some(k) => Ok(KeywordSet::new(k.version.clone(), &k.high, &k.medium)?),
            None => Ok(KeywordSet::default()),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Invalid keyword configuration: {0}")]
    Keywords(#[from] KeywordSetError),
    #[error("Configuration error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::KEYWORD_SET_VERSION;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn empty_file_uses_defaults() {
        let file = write_config("");
        let config = AppConfig::load(file.path(), true).unwrap();
        assert_eq!(config.http.host, DEFAULT_HTTP_HOST);
        assert_eq!(config.http.port, DEFAULT_HTTP_PORT);
        assert_eq!(config.http.shutdown_grace_seconds, DEFAULT_SHUTDOWN_GRACE_SECS);
        assert!(!config.logging.is_json());
        let set = config.keyword_set().unwrap();
        assert_eq!(set, KeywordSet::default());
        assert_eq!(set.version(), KEYWORD_SET_VERSION);
    }

    #[test]
    fn missing_optional_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load(dir.path().join("absent.toml"), false).unwrap();
        assert_eq!(config.http.port, DEFAULT_HTTP_PORT);
    }

    #[test]
    fn missing_required_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = AppConfig::load(dir.path().join("absent.toml"), true).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn parses_all_sections() {
        let file = write_config(
            r#"
            [http]
            host = "127.0.0.1"
            port = 9090
            shutdown_grace_seconds = 5

            [logging]
            format = "json"

            [keywords]
            version = "clinic-7"
            high = ["Bleeding", "seizure"]
            medium = ["cough"]
            "#,
        );
        let config = AppConfig::load(file.path(), true).unwrap();
        assert_eq!(config.http.host, "127.0.0.1");
        assert_eq!(config.http.port, 9090);
        assert_eq!(config.http.shutdown_grace_seconds, 5);
        assert!(config.logging.is_json());
        let set = config.keyword_set().unwrap();
        assert_eq!(set.version(), "clinic-7");
        assert_eq!(set.high(), ["bleeding", "seizure"]);
        assert_eq!(set.medium(), ["cough"]);
    }

    #[test]
    fn rejects_blank_keyword() {
        let file = write_config(
            r#"
            [keywords]
            high = ["bleeding", ""]
            medium = ["cough"]
            "#,
        );
        let err = AppConfig::load(file.path(), true).unwrap_err();
        assert!(matches!(err, ConfigError::Keywords(_)));
    }

    #[test]
    fn rejects_unknown_log_format() {
        let file = write_config("[logging]\nformat = \"xml\"\n");
        let err = AppConfig::load(file.path(), true).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn rejects_malformed_toml() {
        let file = write_config("[http\nport = 1");
        let err = AppConfig::load(file.path(), true).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
