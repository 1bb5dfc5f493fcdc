use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use crate::error::{LuhnixError, Result};
use crate::output::OutputFormat;

pub const CONFIG_FILE: &str = "luhnix.toml";

#[derive(Debug, Clone, Deserialize, Default)]
pub struct LuhnixConfig {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub range: RangeConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub profiles: HashMap<String, ProfileOverrides>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
    #[serde(default = "default_true")]
    pub color: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RangeConfig {
    /// Widest range `count --verify` will walk integer by integer.
    #[serde(default = "default_verify_limit")]
    pub verify_limit: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub format: LogFormat,
}

#[derive(Debug, Clone, Copy, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct ProfileOverrides {
    #[serde(default)]
    pub output: Option<PartialOutputConfig>,
    #[serde(default)]
    pub range: Option<PartialRangeConfig>,
    #[serde(default)]
    pub logging: Option<PartialLoggingConfig>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct PartialOutputConfig {
    pub format: Option<OutputFormat>,
    pub color: Option<bool>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct PartialRangeConfig {
    pub verify_limit: Option<u64>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct PartialLoggingConfig {
    pub level: Option<String>,
    pub format: Option<LogFormat>,
}

fn default_true() -> bool {
    true
}

fn default_verify_limit() -> u64 {
    100_000
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            color: default_true(),
        }
    }
}

impl Default for RangeConfig {
    fn default() -> Self {
        Self {
            verify_limit: default_verify_limit(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

impl LuhnixConfig {
    /// Reads `luhnix.toml` from the working directory, or returns defaults
    /// when there is none.
    pub fn load() -> Result<Self> {
        let config_path = Path::new(CONFIG_FILE);
        if !config_path.exists() {
            return Ok(Self::default());
        }
        Self::load_from(config_path)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(config_path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: LuhnixConfig =
            toml::from_str(content).map_err(|e| LuhnixError::Toml(e.to_string()))?;
        if config.logging.level.trim().is_empty() {
            return Err(LuhnixError::Config(
                "logging.level must not be empty".to_string(),
            ));
        }
        Ok(config)
    }

    /// Applies the named profile on top of the base settings. Errors when
    /// the profile does not exist.
    pub fn with_profile(mut self, profile_name: &str) -> Result<Self> {
        let Some(overrides) = self.profiles.get(profile_name).cloned() else {
            return Err(LuhnixError::Config(format!(
                "Unknown profile '{profile_name}'"
            )));
        };

        if let Some(output) = overrides.output {
            if let Some(v) = output.format {
                self.output.format = v;
            }
            if let Some(v) = output.color {
                self.output.color = v;
            }
        }
        if let Some(range) = overrides.range {
            if let Some(v) = range.verify_limit {
                self.range.verify_limit = v;
            }
        }
        if let Some(logging) = overrides.logging {
            if let Some(v) = logging.level {
                self.logging.level = v;
            }
            if let Some(v) = logging.format {
                self.logging.format = v;
            }
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LuhnixConfig::default();
        assert_eq!(config.output.format, OutputFormat::Terminal);
        assert!(config.output.color);
        assert_eq!(config.range.verify_limit, 100_000);
        assert_eq!(config.logging.level, "warn");
        assert_eq!(config.logging.format, LogFormat::Text);
    }

    #[test]
    fn test_load_from_valid_toml() {
        let temp = tempfile::TempDir::new().unwrap();
        let config_path = temp.path().join(CONFIG_FILE);
        std::fs::write(
            &config_path,
            r#"
[output]
format = "json"
color = false

[range]
verify_limit = 5000

[logging]
level = "luhnix=debug"
format = "json"
"#,
        )
        .unwrap();
        let config = LuhnixConfig::load_from(&config_path).unwrap();
        assert_eq!(config.output.format, OutputFormat::Json);
        assert!(!config.output.color);
        assert_eq!(config.range.verify_limit, 5000);
        assert_eq!(config.logging.level, "luhnix=debug");
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = LuhnixConfig::from_toml("[range]\nverify_limit = 10\n").unwrap();
        assert_eq!(config.range.verify_limit, 10);
        assert!(config.output.color);
        assert_eq!(config.output.format, OutputFormat::Terminal);
    }

    #[test]
    fn test_invalid_toml_rejected() {
        assert!(matches!(
            LuhnixConfig::from_toml("[output\nformat = 1"),
            Err(LuhnixError::Toml(_))
        ));
        assert!(matches!(
            LuhnixConfig::from_toml("[output]\nformat = \"yaml\"\n"),
            Err(LuhnixError::Toml(_))
        ));
    }

    #[test]
    fn test_empty_log_level_rejected() {
        assert!(matches!(
            LuhnixConfig::from_toml("[logging]\nlevel = \" \"\n"),
            Err(LuhnixError::Config(_))
        ));
    }

    #[test]
    fn test_profile_overrides() {
        let config = LuhnixConfig::from_toml(
            r#"
[output]
format = "terminal"

[profiles.ci]
output.format = "json"
output.color = false
range.verify_limit = 42
"#,
        )
        .unwrap()
        .with_profile("ci")
        .unwrap();
        assert_eq!(config.output.format, OutputFormat::Json);
        assert!(!config.output.color);
        assert_eq!(config.range.verify_limit, 42);
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_unknown_profile_is_error() {
        let result = LuhnixConfig::default().with_profile("nope");
        assert!(matches!(result, Err(LuhnixError::Config(_))));
    }

    #[test]
    fn test_load_from_missing_file_is_io_error() {
        let temp = tempfile::TempDir::new().unwrap();
        let result = LuhnixConfig::load_from(&temp.path().join("missing.toml"));
        assert!(matches!(result, Err(LuhnixError::Io(_))));
    }
}
