//! Optional TOML configuration.
//!
//! Looked up at `$MANIFEST_MANAGER_CONFIG`, falling back to
//! `<config dir>/manifest-manager/config.toml`. A missing file is not an
//! error: every setting has a default.
//!
//! ```toml
//! [log]
//! level = "info"
//!
//! [glob]
//! case_sensitive = true
//! require_literal_separator = false
//! require_literal_leading_dot = false
//! ```

use anyhow::{Context, Result};
use glob::MatchOptions;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Environment variable naming an explicit config file
pub const CONFIG_ENV: &str = "MANIFEST_MANAGER_CONFIG";

/// Config file location relative to the platform config directory
pub const DEFAULT_CONFIG_PATH: &str = "manifest-manager/config.toml";

/// Settings read from the config file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Logging verbosity
    #[serde(default)]
    pub log: LogConfig,

    /// How add/delete patterns are matched
    #[serde(default)]
    pub glob: GlobConfig,
}

/// `[log]` section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct LogConfig {
    /// Threshold used when neither the flag nor the environment set one
    #[serde(default)]
    pub level: LogLevel,
}

/// Verbosity threshold, from least to most chatty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Nothing at all
    Off,
    /// Kept for existing `LOGLEVEL=fatal` setups; behaves like `error`
    Fatal,
    /// Failures only
    Error,
    /// Skipped glob matches and failures
    Warn,
    /// Operation summaries
    #[default]
    Info,
    /// Manifest contents before and after each operation
    Debug,
    /// Everything
    Trace,
}

impl LogLevel {
    /// Directive understood by `tracing_subscriber::EnvFilter`
    #[must_use]
    pub const fn as_directive(self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::Fatal | Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }
}

impl FromStr for LogLevel {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "off" => Ok(Self::Off),
            "fatal" => Ok(Self::Fatal),
            "error" => Ok(Self::Error),
            "warn" | "warning" => Ok(Self::Warn),
            "info" => Ok(Self::Info),
            "debug" => Ok(Self::Debug),
            "trace" => Ok(Self::Trace),
            other => Err(anyhow::anyhow!("Unknown log level: {other}")),
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Off => "off",
            Self::Fatal => "fatal",
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        };
        f.write_str(name)
    }
}

/// `[glob]` section, mapped onto `glob::MatchOptions`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobConfig {
    /// Match letters case-sensitively
    #[serde(default = "default_true")]
    pub case_sensitive: bool,
    /// `*` and `?` never match `/` when set
    #[serde(default)]
    pub require_literal_separator: bool,
    /// Hidden files only match patterns that spell out the leading dot
    #[serde(default)]
    pub require_literal_leading_dot: bool,
}

impl Default for GlobConfig {
    fn default() -> Self {
        Self {
            case_sensitive: true,
            require_literal_separator: false,
            require_literal_leading_dot: false,
        }
    }
}

impl GlobConfig {
    /// Options handed to the manifest engine for add/delete patterns
    #[must_use]
    pub const fn match_options(&self) -> MatchOptions {
        MatchOptions {
            case_sensitive: self.case_sensitive,
            require_literal_separator: self.require_literal_separator,
            require_literal_leading_dot: self.require_literal_leading_dot,
        }
    }
}

impl Config {
    /// Where the config file is expected, if a location can be determined
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        if let Ok(path) = std::env::var(CONFIG_ENV)
            && !path.is_empty()
        {
            return Some(PathBuf::from(path));
        }
        dirs::config_dir().map(|dir| dir.join(DEFAULT_CONFIG_PATH))
    }

    /// Load the config file from [`Self::default_path`], or defaults
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn discover() -> Result<Self> {
        match Self::default_path() {
            Some(path) => Self::load(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a file, falling back to defaults when it
    /// does not exist
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file exists but cannot be read
    /// - The file contains invalid TOML or unknown values
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Save configuration to a file
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Cannot create parent directories
    /// - Cannot write to the file
    /// - TOML serialization fails
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let toml_str = toml::to_string_pretty(self)?;
        std::fs::write(path, toml_str)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;
        Ok(())
    }
}

const fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_uses_defaults() -> Result<()> {
        let dir = tempdir()?;
        let config = Config::load(&dir.path().join("config.toml"))?;

        assert_eq!(config, Config::default());
        assert_eq!(config.log.level, LogLevel::Info);
        assert_eq!(config.glob.match_options(), MatchOptions::new());
        assert!(!dir.path().join("config.toml").exists());
        Ok(())
    }

    #[test]
    fn test_partial_file() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[glob]\ncase_sensitive = false\n")?;

        let config = Config::load(&path)?;

        assert_eq!(config.log.level, LogLevel::Info);
        assert!(!config.glob.case_sensitive);
        assert!(!config.glob.require_literal_separator);
        Ok(())
    }

    #[test]
    fn test_invalid_level_is_rejected() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[log]\nlevel = \"loud\"\n")?;

        let error = Config::load(&path).unwrap_err();
        assert!(format!("{error:#}").contains("Failed to parse config file"));
        Ok(())
    }

    #[test]
    fn test_save_and_reload() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("nested/config.toml");
        let mut config = Config::default();
        config.log.level = LogLevel::Debug;
        config.glob.require_literal_leading_dot = true;

        config.save(&path)?;

        assert_eq!(Config::load(&path)?, config);
        Ok(())
    }

    #[test]
    fn test_level_parsing() {
        assert_eq!("FATAL".parse::<LogLevel>().ok(), Some(LogLevel::Fatal));
        assert_eq!(" debug ".parse::<LogLevel>().ok(), Some(LogLevel::Debug));
        assert_eq!("warning".parse::<LogLevel>().ok(), Some(LogLevel::Warn));
        assert!("verbose".parse::<LogLevel>().is_err());
        assert_eq!(LogLevel::Fatal.as_directive(), "error");
        assert_eq!(LogLevel::Fatal.to_string(), "fatal");
    }

    #[test]
    #[serial]
    fn test_default_path_honors_env() {
        unsafe {
            std::env::set_var(CONFIG_ENV, "/tmp/mm-config.toml");
        }
        assert_eq!(
            Config::default_path(),
            Some(PathBuf::from("/tmp/mm-config.toml"))
        );
        unsafe {
            std::env::remove_var(CONFIG_ENV);
        }
    }
}
