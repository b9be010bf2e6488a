//! Configuration file support.
//!
//! This module reads interval defaults and rendering settings from TOML:
//!
//! ```toml
//! [interval]
//! default_boundary = "[)"
//!
//! [format]
//! datetime = "%Y-%m-%d %H:%M:%S"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use chrono::format::{Item, StrftimeItems};
use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::core::BoundaryType;
use crate::error::{PeriodError, PeriodResult};

/// Settings loaded from `period.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PeriodConfig {
    #[serde(default)]
    pub interval: IntervalSettings,
    #[serde(default)]
    pub format: FormatSettings,
}

/// Interval construction settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntervalSettings {
    #[serde(default = "default_boundary_token")]
    pub default_boundary: String,
}

/// Rendering settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FormatSettings {
    /// chrono `strftime` pattern for endpoints; RFC 3339 when absent.
    #[serde(default)]
    pub datetime: Option<String>,
}

fn default_boundary_token() -> String {
    BoundaryType::default().as_str().to_string()
}

impl Default for IntervalSettings {
    fn default() -> Self {
        Self {
            default_boundary: default_boundary_token(),
        }
    }
}

impl PeriodConfig {
    /// Load configuration from a TOML file.
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    /// * `Ok(PeriodConfig)` if the file was read, parsed and validated
    /// * `Err(PeriodError::Configuration)` otherwise
    pub fn from_file<P: AsRef<Path>>(path: P) -> PeriodResult<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            PeriodError::Configuration(format!("Failed to read config file: {}", e))
        })?;
        let config = Self::from_toml_str(&content)?;
        info!("Loaded interval configuration from {}", path.as_ref().display());
        Ok(config)
    }

    /// Parse and validate configuration from TOML text.
    pub fn from_toml_str(content: &str) -> PeriodResult<Self> {
        let config: PeriodConfig = toml::from_str(content).map_err(|e| {
            PeriodError::Configuration(format!("Failed to parse config file: {}", e))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from the default location.
    ///
    /// Searches for `period.toml` in:
    /// 1. Current directory
    /// 2. `config/` directory
    /// 3. Parent directory
    ///
    /// Falls back to the defaults when no file exists; a file that exists but
    /// does not parse is an error.
    pub fn from_default_location() -> PeriodResult<Self> {
        let search_paths = [
            PathBuf::from("period.toml"),
            PathBuf::from("config/period.toml"),
            PathBuf::from("../period.toml"),
        ];

        for path in &search_paths {
            if path.exists() {
                return Self::from_file(path);
            }
        }

        warn!("No period.toml found in standard locations, using defaults");
        Ok(Self::default())
    }

    /// Boundary type used by [`Interval::with_config`](crate::Interval::with_config).
    pub fn default_boundary(&self) -> PeriodResult<BoundaryType> {
        BoundaryType::parse_token(&self.interval.default_boundary)
    }

    pub fn datetime_format(&self) -> Option<&str> {
        self.format.datetime.as_deref()
    }

    fn validate(&self) -> PeriodResult<()> {
        self.default_boundary().map_err(|e| {
            PeriodError::Configuration(format!("Invalid 'interval.default_boundary': {}", e))
        })?;

        if let Some(pattern) = self.datetime_format() {
            if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
                return Err(PeriodError::Configuration(format!(
                    "Invalid 'format.datetime' pattern: {}",
                    pattern
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
[interval]
default_boundary = "(]"

[format]
datetime = "%Y-%m-%d"
"#;

        let config = PeriodConfig::from_toml_str(toml).unwrap();
        assert_eq!(
            config.default_boundary().unwrap(),
            BoundaryType::ExcludeStartIncludeEnd
        );
        assert_eq!(config.datetime_format(), Some("%Y-%m-%d"));
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = PeriodConfig::from_toml_str("").unwrap();
        assert_eq!(config.default_boundary().unwrap(), BoundaryType::default());
        assert_eq!(config.datetime_format(), None);
    }

    #[test]
    fn test_invalid_boundary_is_rejected() {
        let toml = r#"
[interval]
default_boundary = "<>"
"#;
        assert!(matches!(
            PeriodConfig::from_toml_str(toml),
            Err(PeriodError::Configuration(_))
        ));
    }

    #[test]
    fn test_invalid_pattern_is_rejected() {
        let toml = r#"
[format]
datetime = "%Y-%Q"
"#;
        assert!(PeriodConfig::from_toml_str(toml).is_err());
    }

    #[test]
    fn test_malformed_toml_is_rejected() {
        assert!(matches!(
            PeriodConfig::from_toml_str("[interval"),
            Err(PeriodError::Configuration(_))
        ));
    }
}
