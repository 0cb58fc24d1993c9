//! # Configuration System
//!
//! YAML job files for the synthesis front end:
//!
//! - `filter`: the [`FilterSpec`] to synthesize
//! - `logging`: subscriber setup (see [`crate::observe`])
//! - `presets`: named filter specs, selected with [`AfsConfig::with_preset`]
//!
//! ## Configuration Search Path
//!
//! Configuration is loaded from the first file found:
//! 1. Path specified via `AFSYNTH_CONFIG` environment variable
//! 2. `./afsynth.yaml` (current directory)
//! 3. `~/.config/afsynth/config.yaml` (user config)
//! 4. `/etc/afsynth/config.yaml` (system config)
//!
//! ## Example Configuration
//!
//! ```yaml
//! filter:
//!   type: bandpass
//!   approximation: cauer
//!   passband_ripple_db: 0.5
//!   stopband_atten_db: 40.0
//!   lower_freq: 900.0
//!   upper_freq: 1100.0
//!   transition_width: 100.0
//!
//! logging:
//!   level: debug
//!   format: json
//! ```

use crate::observe::LogConfig;
use crate::types::{Approximation, FilterSpec, FilterType};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "AFSYNTH_CONFIG";

/// Error type for configuration operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// Configuration file or preset not found
    #[error("config not found: {0}")]
    NotFound(String),
    /// Failed to read configuration file
    #[error("failed to read config: {0}")]
    ReadError(String),
    /// Failed to parse configuration
    #[error("failed to parse config: {0}")]
    ParseError(String),
    /// Invalid configuration value
    #[error("invalid config: {0}")]
    ValidationError(String),
}

/// Complete job configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AfsConfig {
    /// Configuration version
    pub version: String,
    /// Filter to synthesize
    pub filter: FilterSpec,
    /// Logging configuration
    pub logging: LogConfig,
    /// Named filter specs (name -> spec)
    pub presets: BTreeMap<String, FilterSpec>,
}

impl Default for AfsConfig {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            filter: FilterSpec::default(),
            logging: LogConfig::default(),
            presets: BTreeMap::new(),
        }
    }
}

impl AfsConfig {
    /// Load configuration from the default search path.
    ///
    /// Returns default config if no file is found.
    pub fn load() -> Result<Self, ConfigError> {
        if let Ok(path) = std::env::var(CONFIG_ENV) {
            if Path::new(&path).exists() {
                return Self::load_from(Path::new(&path));
            }
        }

        for path in &Self::config_search_paths() {
            if path.exists() {
                return Self::load_from(path);
            }
        }

        Ok(Self::default())
    }

    /// Load configuration from a specific file.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ConfigError::NotFound(path.display().to_string())
            } else {
                ConfigError::ReadError(format!("{}: {}", path.display(), e))
            }
        })?;

        Self::parse(&content)
    }

    /// Parse configuration from a YAML string.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        serde_yaml::from_str(yaml).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// Save configuration to a file.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content =
            serde_yaml::to_string(self).map_err(|e| ConfigError::ParseError(e.to_string()))?;

        std::fs::write(path, content)
            .map_err(|e| ConfigError::ReadError(format!("{}: {}", path.display(), e)))
    }

    /// Replace the filter with a named preset.
    pub fn with_preset(&self, name: &str) -> Result<Self, ConfigError> {
        let preset = self
            .presets
            .get(name)
            .ok_or_else(|| ConfigError::NotFound(format!("preset '{}' not found", name)))?;

        let mut config = self.clone();
        config.filter = preset.clone();
        Ok(config)
    }

    /// Get configuration search paths.
    pub fn config_search_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from("./afsynth.yaml")];

        if let Some(dirs) = directories::ProjectDirs::from("", "", "afsynth") {
            paths.push(dirs.config_dir().join("config.yaml"));
        }

        paths.push(PathBuf::from("/etc/afsynth/config.yaml"));

        paths
    }

    /// Validate the filter section before synthesis.
    ///
    /// Only the fields the selected filter type and family read are checked.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_filter(&self.filter)
    }

    /// Generate example configuration YAML.
    pub fn example_yaml() -> String {
        let mut presets = BTreeMap::new();
        presets.insert(
            "anti_alias".to_string(),
            FilterSpec::lowpass(Approximation::Cauer, 20_000.0, 24_000.0)
                .with_ripple(0.1)
                .with_stopband_atten(80.0),
        );
        presets.insert(
            "hum_notch".to_string(),
            FilterSpec::bandstop(Approximation::Chebyshev, 55.0, 65.0, 20.0)
                .with_ripple(0.5)
                .with_stopband_atten(40.0),
        );
        presets.insert(
            "audio_delay".to_string(),
            FilterSpec::bessel(FilterType::LowPass, 6),
        );

        let config = Self {
            presets,
            ..Default::default()
        };

        serde_yaml::to_string(&config).unwrap_or_default()
    }
}

fn positive(name: &str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(format!(
            "{} must be positive, got {}",
            name, value
        )))
    }
}

fn validate_filter(spec: &FilterSpec) -> Result<(), ConfigError> {
    match spec.approximation {
        Approximation::Bessel => {
            if spec.requested_order < 1 {
                return Err(ConfigError::ValidationError(format!(
                    "requested_order must be >= 1 for bessel, got {}",
                    spec.requested_order
                )));
            }
            return Ok(());
        }
        Approximation::User => {
            if spec.transfer_function.is_missing() {
                return Err(ConfigError::ValidationError(
                    "transfer_function needs numerator and denominator".to_string(),
                ));
            }
            return Ok(());
        }
        Approximation::Butterworth => {
            if !spec.filter_type.is_band() {
                positive("passband_atten_db", spec.passband_atten_db)?;
            }
        }
        Approximation::Chebyshev | Approximation::Cauer => {
            positive("passband_ripple_db", spec.passband_ripple_db)?;
        }
        Approximation::InvChebyshev => {}
    }
    positive("stopband_atten_db", spec.stopband_atten_db)?;

    if spec.filter_type.is_band() {
        positive("lower_freq", spec.lower_freq)?;
        positive("upper_freq", spec.upper_freq)?;
        positive("transition_width", spec.transition_width)?;
        if spec.lower_freq == spec.upper_freq {
            return Err(ConfigError::ValidationError(
                "lower_freq and upper_freq must differ".to_string(),
            ));
        }
    } else {
        positive("cutoff_freq", spec.cutoff_freq)?;
        positive("stopband_freq", spec.stopband_freq)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observe::{LogFormat, LogLevel};

    #[test]
    fn test_default_config() {
        let config = AfsConfig::default();
        assert_eq!(config.filter.filter_type, FilterType::LowPass);
        assert_eq!(config.filter.approximation, Approximation::Butterworth);
        assert!(config.presets.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_yaml() {
        let yaml = r#"
filter:
  type: bandpass
  approximation: cauer
  passband_ripple_db: 0.5
  stopband_atten_db: 40.0
  lower_freq: 900.0
  upper_freq: 1100.0
  transition_width: 100.0

logging:
  level: debug
  format: json
"#;

        let config = AfsConfig::parse(yaml).unwrap();
        assert_eq!(config.filter.filter_type, FilterType::BandPass);
        assert_eq!(config.filter.approximation, Approximation::Cauer);
        assert_eq!(config.filter.passband_ripple_db, 0.5);
        assert_eq!(config.filter.upper_freq, 1100.0);
        assert_eq!(config.logging.level, LogLevel::Debug);
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn test_parse_partial_yaml() {
        let yaml = r#"
filter:
  approximation: chebyshev
  stopband_freq: 1500
"#;

        let config = AfsConfig::parse(yaml).unwrap();
        assert_eq!(config.filter.approximation, Approximation::Chebyshev);
        assert_eq!(config.filter.stopband_freq, 1500.0);
        // Defaults should be applied
        assert_eq!(config.filter.cutoff_freq, 1000.0);
        assert_eq!(config.filter.passband_atten_db, 3.0);
        assert_eq!(config.logging, LogConfig::default());
    }

    #[test]
    fn test_parse_user_transfer_function() {
        let yaml = r#"
filter:
  approximation: user
  transfer_function:
    numerator: [1.0]
    denominator: [1.0, 1.414, 1.0]
"#;

        let config = AfsConfig::parse(yaml).unwrap();
        assert_eq!(config.filter.transfer_function.denominator.len(), 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_unknown_enum_is_parse_error() {
        let yaml = "filter:\n  approximation: gaussian\n";
        assert!(matches!(
            AfsConfig::parse(yaml),
            Err(ConfigError::ParseError(_))
        ));
    }

    #[test]
    fn test_presets() {
        let yaml = r#"
presets:
  notch:
    type: bandstop
    approximation: invchebyshev
    lower_freq: 55
    upper_freq: 65
"#;

        let config = AfsConfig::parse(yaml).unwrap();
        let notch = config.with_preset("notch").unwrap();
        assert_eq!(notch.filter.filter_type, FilterType::BandStop);
        assert_eq!(notch.filter.approximation, Approximation::InvChebyshev);
        assert!(matches!(
            config.with_preset("missing"),
            Err(ConfigError::NotFound(_))
        ));
    }

    #[test]
    fn test_validation() {
        let mut config = AfsConfig::default();
        assert!(config.validate().is_ok());

        config.filter.cutoff_freq = -1.0;
        assert!(config.validate().is_err());

        config.filter.cutoff_freq = 1000.0;
        config.filter.stopband_atten_db = f64::NAN;
        assert!(config.validate().is_err());

        config.filter = FilterSpec::bessel(FilterType::LowPass, 0);
        assert!(config.validate().is_err());

        config.filter = FilterSpec::bandpass(Approximation::Chebyshev, 1000.0, 1000.0, 10.0);
        assert!(config.validate().is_err());

        // Band filters ignore the lowpass edges
        config.filter = FilterSpec::bandpass(Approximation::Chebyshev, 900.0, 1100.0, 10.0);
        config.filter.cutoff_freq = 0.0;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_example_yaml() {
        let yaml = AfsConfig::example_yaml();
        assert!(yaml.contains("filter:"));
        assert!(yaml.contains("presets:"));
        let parsed = AfsConfig::parse(&yaml).unwrap();
        assert_eq!(parsed.presets.len(), 3);
        assert!(parsed.with_preset("hum_notch").unwrap().validate().is_ok());
    }

    #[test]
    fn test_save_and_load() {
        let path = std::env::temp_dir().join(format!("afsynth-config-{}.yaml", std::process::id()));
        let mut config = AfsConfig::default();
        config.filter = FilterSpec::highpass(Approximation::InvChebyshev, 3000.0, 1000.0);
        config.save(&path).unwrap();
        let loaded = AfsConfig::load_from(&path).unwrap();
        let _ = std::fs::remove_file(&path);
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_missing_file() {
        let err = AfsConfig::load_from(Path::new("/nonexistent/afsynth.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(_)));
    }

    #[test]
    fn test_config_search_paths() {
        let paths = AfsConfig::config_search_paths();
        assert!(!paths.is_empty());
        assert!(paths[0].ends_with("afsynth.yaml"));
        assert!(paths.last().unwrap().ends_with("config.yaml"));
    }
}
