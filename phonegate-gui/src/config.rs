use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing_subscriber::filter;

use phonegate::{form::FormPolicy, selector::SelectorPolicy};

pub const DEFAULT_AUTH_URL: &str = "https://auth.phonegate.io";
pub const DEFAULT_API_URL: &str = "https://api.phonegate.io";

const API_URL_VAR: &str = "PHONEGATE_API_URL";
const AUTH_URL_VAR: &str = "PHONEGATE_AUTH_URL";

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Config {
    /// log level, can be "info", "debug", "trace".
    pub log_level: Option<String>,
    /// Log at debug level when no `log_level` is set.
    pub debug: Option<bool>,
    #[serde(default = "default_auth_url")]
    pub auth_url: String,
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default)]
    pub client_id: String,
    #[serde(default)]
    pub client_secret: String,
    #[serde(default = "default_true")]
    pub auto_select_first: bool,
    #[serde(default = "default_true")]
    pub cap_digits: bool,
    #[serde(default)]
    pub reset_on_success: bool,
    #[serde(default = "default_true")]
    pub keep_search_on_close: bool,
}

fn default_auth_url() -> String {
    DEFAULT_AUTH_URL.to_string()
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: None,
            debug: None,
            auth_url: default_auth_url(),
            api_url: default_api_url(),
            client_id: String::new(),
            client_secret: String::new(),
            auto_select_first: true,
            cap_digits: true,
            reset_on_success: false,
            keep_search_on_close: true,
        }
    }
}

impl Config {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => ConfigError::NotFound,
            _ => ConfigError::ReadingFile(format!("Reading configuration file: {}", e)),
        })?;
        let config = toml::from_str::<Config>(&content)
            .map_err(|e| ConfigError::ReadingFile(format!("Parsing configuration file: {}", e)))?;

        // check if log_level field is valid
        config.log_level()?;
        Ok(config)
    }

    /// Reads the configuration file, falling back to defaults if there is none,
    /// then applies the environment overrides.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let config = match Self::from_file(path) {
            Ok(config) => config,
            Err(ConfigError::NotFound) => Self::default(),
            Err(e) => return Err(e),
        };
        Ok(config.with_overrides(
            std::env::var(API_URL_VAR).ok(),
            std::env::var(AUTH_URL_VAR).ok(),
        ))
    }

    pub fn with_overrides(mut self, api_url: Option<String>, auth_url: Option<String>) -> Self {
        if let Some(url) = api_url.filter(|u| !u.is_empty()) {
            self.api_url = url;
        }
        if let Some(url) = auth_url.filter(|u| !u.is_empty()) {
            self.auth_url = url;
        }
        self
    }

    pub fn log_level(&self) -> Result<filter::LevelFilter, ConfigError> {
        if let Some(level) = &self.log_level {
            match level.as_ref() {
                "error" => Ok(filter::LevelFilter::ERROR),
                "warn" => Ok(filter::LevelFilter::WARN),
                "info" => Ok(filter::LevelFilter::INFO),
                "debug" => Ok(filter::LevelFilter::DEBUG),
                "trace" => Ok(filter::LevelFilter::TRACE),
                _ => Err(ConfigError::InvalidField(
                    "log_level",
                    format!("Unknown value '{}'", level),
                )),
            }
        } else if let Some(true) = self.debug {
            Ok(filter::LevelFilter::DEBUG)
        } else {
            Ok(filter::LevelFilter::INFO)
        }
    }

    pub fn form_policy(&self) -> FormPolicy {
        FormPolicy {
            auto_select_first: self.auto_select_first,
            cap_digits: self.cap_digits,
            reset_on_success: self.reset_on_success,
        }
    }

    pub fn selector_policy(&self) -> SelectorPolicy {
        SelectorPolicy {
            clear_search_on_close: !self.keep_search_on_close,
        }
    }
}

#[derive(PartialEq, Eq, Debug, Clone)]
pub enum ConfigError {
    InvalidField(&'static str, String),
    NotFound,
    ReadingFile(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::NotFound => write!(f, "Config file not found"),
            Self::InvalidField(field, message) => {
                write!(f, "Config field {} is invalid: {}", field, message)
            }
            Self::ReadingFile(e) => write!(f, "Error while reading file: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(content: &str) -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("phonegate.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        (dir, path)
    }

    #[test]
    fn test_defaults_on_empty_file() {
        let (_dir, path) = write_config("");
        let config = Config::from_file(&path).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.log_level().unwrap(), filter::LevelFilter::INFO);
        assert_eq!(config.form_policy(), FormPolicy::default());
        assert!(!config.selector_policy().clear_search_on_close);
    }

    #[test]
    fn test_parse_config() {
        let (_dir, path) = write_config(
            r#"
            log_level = "debug"
            api_url = "http://localhost:8080"
            client_id = "phonegate-desktop"
            client_secret = "s3cr3t"
            cap_digits = false
            keep_search_on_close = false
            "#,
        );
        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.log_level().unwrap(), filter::LevelFilter::DEBUG);
        assert_eq!(config.api_url, "http://localhost:8080");
        assert_eq!(config.auth_url, DEFAULT_AUTH_URL);
        assert_eq!(config.client_id, "phonegate-desktop");
        assert!(!config.form_policy().cap_digits);
        assert!(config.form_policy().auto_select_first);
        assert!(config.selector_policy().clear_search_on_close);
    }

    #[test]
    fn test_invalid_log_level() {
        let (_dir, path) = write_config("log_level = \"loud\"");
        assert_eq!(
            Config::from_file(&path),
            Err(ConfigError::InvalidField(
                "log_level",
                "Unknown value 'loud'".to_string()
            ))
        );
    }

    #[test]
    fn test_debug_flag_sets_level() {
        let config = Config {
            debug: Some(true),
            ..Default::default()
        };
        assert_eq!(config.log_level().unwrap(), filter::LevelFilter::DEBUG);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("phonegate.toml");
        assert_eq!(Config::from_file(&path), Err(ConfigError::NotFound));
    }

    #[test]
    fn test_url_overrides() {
        let config = Config::default().with_overrides(
            Some("http://127.0.0.1:3000".to_string()),
            Some(String::new()),
        );
        assert_eq!(config.api_url, "http://127.0.0.1:3000");
        assert_eq!(config.auth_url, DEFAULT_AUTH_URL);
    }
}
