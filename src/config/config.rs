//! Config file handling
//!
//! ```toml
//! [defaults]
//! shell = "windows"
//! log_format = "json"
//! options = ["--debug"]
//! ```

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::cli::LogFormat;
use crate::errors::ReqcurlError;
use crate::models::ShellFlavor;

/// Environment variable that overrides the config directory
pub const CONFIG_DIR_ENV: &str = "REQCURL_CONFIG_DIR";

/// reqcurl configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub config_dir: PathBuf,
    /// Extra arguments inserted before the user's own
    pub default_options: Vec<String>,
    /// Shell flavor for generated commands when `--shell` is not given
    pub shell: Option<ShellFlavor>,
    pub log_format: Option<LogFormat>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            config_dir: Self::default_config_dir(),
            default_options: Vec::new(),
            shell: None,
            log_format: None,
        }
    }
}

impl Config {
    /// Load configuration from the config file (TOML format)
    pub fn load() -> Result<Self, ReqcurlError> {
        Self::load_from(&Self::default_config_dir())
    }

    /// Load `config.toml` from a specific directory
    pub fn load_from(config_dir: &Path) -> Result<Self, ReqcurlError> {
        let config_file = config_dir.join("config.toml");

        if !config_file.exists() {
            return Ok(Self {
                config_dir: config_dir.to_path_buf(),
                ..Self::default()
            });
        }

        let content = std::fs::read_to_string(&config_file)
            .map_err(|e| ReqcurlError::Config(format!("Failed to read config: {}", e)))?;

        let mut config = Self::parse(&content)?;
        config.config_dir = config_dir.to_path_buf();
        debug!(path = %config_file.display(), "Loaded config");
        Ok(config)
    }

    /// Parse config file contents
    pub fn parse(content: &str) -> Result<Self, ReqcurlError> {
        let toml_value: toml::Value = toml::from_str(content)
            .map_err(|e| ReqcurlError::Config(format!("Invalid config TOML: {}", e)))?;

        let defaults = toml_value.get("defaults");

        let default_options = defaults
            .and_then(|d| d.get("options"))
            .and_then(|v| v.as_array())
            .map(|arr| {
                arr.iter()
                    .filter_map(|v| v.as_str().map(String::from))
                    .collect()
            })
            .unwrap_or_default();

        let shell = defaults
            .and_then(|d| d.get("shell"))
            .and_then(|v| v.as_str())
            .map(str::parse::<ShellFlavor>)
            .transpose()
            .map_err(|e| ReqcurlError::Config(e.to_string()))?;

        let log_format = match defaults.and_then(|d| d.get("log_format")).and_then(|v| v.as_str()) {
            None => None,
            Some("text") => Some(LogFormat::Text),
            Some("json") => Some(LogFormat::Json),
            Some(other) => {
                return Err(ReqcurlError::Config(format!("Unknown log_format: {}", other)));
            }
        };

        Ok(Self {
            config_dir: Self::default_config_dir(),
            default_options,
            shell,
            log_format,
        })
    }

    /// Get the default config directory
    fn default_config_dir() -> PathBuf {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
            return PathBuf::from(dir);
        }
        dirs::config_dir()
            .map(|p| p.join("reqcurl"))
            .unwrap_or_else(|| PathBuf::from(".reqcurl"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full() {
        let config = Config::parse(
            r#"
            [defaults]
            shell = "windows"
            log_format = "json"
            options = ["--debug", "--traceback"]
            "#,
        )
        .unwrap();
        assert_eq!(config.shell, Some(ShellFlavor::Windows));
        assert_eq!(config.log_format, Some(LogFormat::Json));
        assert_eq!(config.default_options, vec!["--debug", "--traceback"]);
    }

    #[test]
    fn test_parse_empty() {
        let config = Config::parse("").unwrap();
        assert!(config.shell.is_none());
        assert!(config.log_format.is_none());
        assert!(config.default_options.is_empty());
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(Config::parse("[defaults"), Err(ReqcurlError::Config(_))));
        assert!(matches!(
            Config::parse("[defaults]\nshell = \"fish\""),
            Err(ReqcurlError::Config(_))
        ));
        assert!(matches!(
            Config::parse("[defaults]\nlog_format = \"xml\""),
            Err(ReqcurlError::Config(_))
        ));
    }

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(dir.path()).unwrap();
        assert_eq!(config.config_dir, dir.path());
        assert!(config.shell.is_none());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("config.toml"), "[defaults]\nshell = \"posix\"\n").unwrap();
        let config = Config::load_from(dir.path()).unwrap();
        assert_eq!(config.shell, Some(ShellFlavor::Posix));
    }
}
