//! CLI configuration management
//!
//! Handles loading configuration from TOML files, environment variables and
//! command-line flags.
//!
//! Priority (highest to lowest):
//! 1. CLI arguments
//! 2. Environment variables (`OPTIONLAB_*`)
//! 3. Config file
//! 4. Default values

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// Config file read when `--config` is not given. Absence is not an error.
pub const DEFAULT_CONFIG_FILE: &str = "optionlab.toml";

const ENV_LOG_LEVEL: &str = "OPTIONLAB_LOG_LEVEL";
const ENV_MAX_STEPS: &str = "OPTIONLAB_MAX_STEPS";
const ENV_OUTPUT_FORMAT: &str = "OPTIONLAB_OUTPUT_FORMAT";

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid output format: {0}. Must be one of: table, json")]
    InvalidOutputFormat(String),

    #[error("Invalid {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("Configuration file error: {0}")]
    FileError(String),

    #[error("Environment variable error: {0}")]
    EnvError(String),
}

/// Log levels accepted by `--log-level`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

/// How command results are written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ConfigError::InvalidOutputFormat(s.to_string())),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// CLI configuration structure
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Log level when `RUST_LOG` is unset
    #[serde(deserialize_with = "deserialize_from_str")]
    pub log_level: LogLevel,
    /// Lattice depth when `--steps` is omitted
    pub default_steps: usize,
    /// Upper bound on lattice depth (latency guard)
    pub max_steps: usize,
    /// stdout format
    #[serde(deserialize_with = "deserialize_from_str")]
    pub output_format: OutputFormat,
    /// Number of strikes in a synthetic chain
    pub chain_strikes: usize,
    /// Moneyness of the first chain strike
    pub chain_start_moneyness: f64,
    /// Moneyness increment between chain strikes
    pub chain_moneyness_step: f64,
}

fn deserialize_from_str<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: FromStr<Err = ConfigError>,
{
    let s = String::deserialize(deserializer)?;
    T::from_str(&s).map_err(serde::de::Error::custom)
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Info,
            default_steps: 200,
            max_steps: 5000,
            output_format: OutputFormat::Table,
            chain_strikes: 16,
            chain_start_moneyness: 0.60,
            chain_moneyness_step: 0.05,
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileError(format!("Failed to read config file: {}", e)))?;

        let config: CliConfig = toml::from_str(&content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Override fields from an arbitrary variable lookup
    pub fn apply_env_with<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            self.log_level = LogLevel::from_str(&level)?;
        }

        if let Some(max_steps) = lookup(ENV_MAX_STEPS) {
            self.max_steps = max_steps.trim().parse().map_err(|_| {
                ConfigError::EnvError(format!("{} must be an integer, got {}", ENV_MAX_STEPS, max_steps))
            })?;
        }

        if let Some(format) = lookup(ENV_OUTPUT_FORMAT) {
            self.output_format = OutputFormat::from_str(&format)?;
        }

        Ok(())
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliArgs) {
        if let Some(level) = cli.log_level {
            self.log_level = level;
        }
        if let Some(format) = cli.output_format {
            self.output_format = format;
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_steps == 0 {
            return Err(ConfigError::InvalidValue {
                field: "max_steps",
                reason: "must be >= 1".to_string(),
            });
        }

        if self.default_steps == 0 || self.default_steps > self.max_steps {
            return Err(ConfigError::InvalidValue {
                field: "default_steps",
                reason: format!("must be in 1..={}, got {}", self.max_steps, self.default_steps),
            });
        }

        if self.chain_strikes == 0 {
            return Err(ConfigError::InvalidValue {
                field: "chain_strikes",
                reason: "must be >= 1".to_string(),
            });
        }

        if !(self.chain_start_moneyness.is_finite() && self.chain_start_moneyness > 0.0) {
            return Err(ConfigError::InvalidValue {
                field: "chain_start_moneyness",
                reason: format!("must be positive, got {}", self.chain_start_moneyness),
            });
        }

        if !(self.chain_moneyness_step.is_finite() && self.chain_moneyness_step > 0.0) {
            return Err(ConfigError::InvalidValue {
                field: "chain_moneyness_step",
                reason: format!("must be positive, got {}", self.chain_moneyness_step),
            });
        }

        Ok(())
    }
}

/// Configuration-relevant CLI arguments
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    /// Explicit config file path
    pub config_file: Option<PathBuf>,
    /// Log level override
    pub log_level: Option<LogLevel>,
    /// Output format override
    pub output_format: Option<OutputFormat>,
}

/// Build configuration from all sources.
///
/// An explicit `config_file` must exist; without one, [`DEFAULT_CONFIG_FILE`]
/// is read only if present.
pub fn build_config(cli: &CliArgs) -> Result<CliConfig, ConfigError> {
    build_config_with(cli, |key| std::env::var(key).ok())
}

/// [`build_config`] with an injectable environment lookup.
pub fn build_config_with<F>(cli: &CliArgs, lookup: F) -> Result<CliConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = match &cli.config_file {
        Some(path) => CliConfig::from_file(path)?,
        None => {
            let default_path = Path::new(DEFAULT_CONFIG_FILE);
            if default_path.exists() {
                CliConfig::from_file(default_path)?
            } else {
                CliConfig::default()
            }
        }
    };

    config.apply_env_with(lookup)?;
    config.merge_with_cli(cli);
    config.validate()?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = CliConfig::default();
        assert_eq!(config.log_level, LogLevel::Info);
        assert_eq!(config.default_steps, 200);
        assert_eq!(config.max_steps, 5000);
        assert_eq!(config.output_format, OutputFormat::Table);
        assert_eq!(config.chain_strikes, 16);
        assert_eq!(config.chain_start_moneyness, 0.60);
        assert_eq!(config.chain_moneyness_step, 0.05);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_log_level_parsing() {
        assert_eq!(LogLevel::from_str("trace").unwrap(), LogLevel::Trace);
        assert_eq!(LogLevel::from_str("DEBUG").unwrap(), LogLevel::Debug);
        assert_eq!(LogLevel::from_str("Info").unwrap(), LogLevel::Info);
        assert_eq!(LogLevel::from_str("WARN").unwrap(), LogLevel::Warn);
        assert_eq!(LogLevel::from_str("error").unwrap(), LogLevel::Error);

        assert!(LogLevel::from_str("invalid").is_err());
    }

    #[test]
    fn test_output_format_parsing() {
        assert_eq!(OutputFormat::from_str("table").unwrap(), OutputFormat::Table);
        assert_eq!(OutputFormat::from_str("JSON").unwrap(), OutputFormat::Json);
        assert!(OutputFormat::from_str("csv").is_err());
        assert_eq!(OutputFormat::Json.to_string(), "json");
    }

    #[test]
    fn test_toml_deserialization() {
        let toml_str = r#"
            log_level = "debug"
            default_steps = 100
            max_steps = 1000
            output_format = "json"
            chain_strikes = 8
            chain_start_moneyness = 0.8
            chain_moneyness_step = 0.05
        "#;

        let config: CliConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.default_steps, 100);
        assert_eq!(config.max_steps, 1000);
        assert_eq!(config.output_format, OutputFormat::Json);
        assert_eq!(config.chain_strikes, 8);
        assert_eq!(config.chain_start_moneyness, 0.8);
    }

    #[test]
    fn test_partial_toml_deserialization() {
        let config: CliConfig = toml::from_str("max_steps = 800").unwrap();
        // Should use defaults for unspecified fields
        assert_eq!(config.max_steps, 800);
        assert_eq!(config.default_steps, 200);
        assert_eq!(config.log_level, LogLevel::Info);
    }

    #[test]
    fn test_toml_rejects_unknown_level() {
        assert!(toml::from_str::<CliConfig>(r#"log_level = "loud""#).is_err());
    }

    #[test]
    fn test_env_overrides() {
        let mut config = CliConfig::default();
        config
            .apply_env_with(env(&[
                ("OPTIONLAB_LOG_LEVEL", "warn"),
                ("OPTIONLAB_MAX_STEPS", "750"),
                ("OPTIONLAB_OUTPUT_FORMAT", "json"),
            ]))
            .unwrap();

        assert_eq!(config.log_level, LogLevel::Warn);
        assert_eq!(config.max_steps, 750);
        assert_eq!(config.output_format, OutputFormat::Json);
    }

    #[test]
    fn test_env_invalid_max_steps() {
        let mut config = CliConfig::default();
        let result = config.apply_env_with(env(&[("OPTIONLAB_MAX_STEPS", "lots")]));
        assert!(matches!(result, Err(ConfigError::EnvError(_))));
    }

    #[test]
    fn test_cli_args_merge() {
        let mut config = CliConfig::default();
        let cli = CliArgs {
            config_file: None,
            log_level: Some(LogLevel::Trace),
            output_format: Some(OutputFormat::Json),
        };

        config.merge_with_cli(&cli);

        assert_eq!(config.log_level, LogLevel::Trace);
        assert_eq!(config.output_format, OutputFormat::Json);
    }

    #[test]
    fn test_cli_beats_env() {
        let cli = CliArgs {
            log_level: Some(LogLevel::Error),
            ..Default::default()
        };
        let config =
            build_config_with(&cli, env(&[("OPTIONLAB_LOG_LEVEL", "debug")])).unwrap();
        assert_eq!(config.log_level, LogLevel::Error);
    }

    #[test]
    fn test_build_config_with_defaults() {
        let config = build_config_with(&CliArgs::default(), env(&[])).unwrap();
        assert_eq!(config.max_steps, 5000);
        assert_eq!(config.output_format, OutputFormat::Table);
    }

    #[test]
    fn test_explicit_missing_file_is_error() {
        let cli = CliArgs {
            config_file: Some(PathBuf::from("/nonexistent/optionlab-test.toml")),
            ..Default::default()
        };
        assert!(matches!(
            build_config_with(&cli, env(&[])),
            Err(ConfigError::FileError(_))
        ));
    }

    #[test]
    fn test_from_file_and_env_layering() {
        let path = std::env::temp_dir().join(format!("optionlab-config-{}.toml", std::process::id()));
        std::fs::write(&path, "max_steps = 900\noutput_format = \"json\"\n").unwrap();

        let cli = CliArgs {
            config_file: Some(path.clone()),
            ..Default::default()
        };
        let config = build_config_with(&cli, env(&[("OPTIONLAB_MAX_STEPS", "400")])).unwrap();
        std::fs::remove_file(&path).unwrap();

        // env beats file, file beats default
        assert_eq!(config.max_steps, 400);
        assert_eq!(config.output_format, OutputFormat::Json);
    }

    #[test]
    fn test_validate_rejects_inconsistent_steps() {
        let config = CliConfig {
            default_steps: 600,
            max_steps: 500,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { field: "default_steps", .. })
        ));

        let config = CliConfig {
            chain_moneyness_step: 0.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::InvalidLogLevel("bad".to_string());
        assert!(err.to_string().contains("Invalid log level"));

        let err = ConfigError::InvalidValue {
            field: "max_steps",
            reason: "must be >= 1".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid max_steps: must be >= 1");
    }
}
