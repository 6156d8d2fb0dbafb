//! Board configuration.
//!
//! # Responsibility
//! - Describe input rules and the default log level.
//! - Load them from JSON with per-field defaults.
//!
//! # Invariants
//! - A config returned by `from_json_str`/`load` has passed `validate()`.
//! - `BoardConfig::default()` carries the stock input rules
//!   (description >= 5 chars, 1..=8 people).

use serde::Deserialize;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::Path;

const DEFAULT_DESCRIPTION_MIN_LENGTH: usize = 5;
const DEFAULT_PEOPLE_MIN: u32 = 1;
const DEFAULT_PEOPLE_MAX: u32 = 8;

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    Invalid(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "failed to read config: {err}"),
            Self::Parse(err) => write!(f, "failed to parse config: {err}"),
            Self::Invalid(details) => write!(f, "invalid config: {details}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Parse(err) => Some(err),
            Self::Invalid(_) => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

/// Rules the input collector applies before calling the store.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InputRules {
    pub title_max_length: Option<usize>,
    pub description_min_length: usize,
    pub description_max_length: Option<usize>,
    pub people_min: u32,
    pub people_max: u32,
}

impl Default for InputRules {
    fn default() -> Self {
        Self {
            title_max_length: None,
            description_min_length: DEFAULT_DESCRIPTION_MIN_LENGTH,
            description_max_length: None,
            people_min: DEFAULT_PEOPLE_MIN,
            people_max: DEFAULT_PEOPLE_MAX,
        }
    }
}

impl InputRules {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.people_min == 0 {
            return Err(ConfigError::Invalid(
                "people_min must be at least 1".to_string(),
            ));
        }
        if self.people_min > self.people_max {
            return Err(ConfigError::Invalid(format!(
                "people_min ({}) must be <= people_max ({})",
                self.people_min, self.people_max
            )));
        }
        if let Some(max) = self.description_max_length {
            if self.description_min_length > max {
                return Err(ConfigError::Invalid(format!(
                    "description_min_length ({}) must be <= description_max_length ({max})",
                    self.description_min_length
                )));
            }
        }
        if self.title_max_length == Some(0) {
            return Err(ConfigError::Invalid(
                "title_max_length must be at least 1 when set".to_string(),
            ));
        }
        Ok(())
    }
}

/// Top-level configuration for one board.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BoardConfig {
    /// One of `trace|debug|info|warn|error`; used when the host starts logging.
    pub log_level: String,
    pub input: InputRules,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            log_level: crate::logging::default_log_level().to_string(),
            input: InputRules::default(),
        }
    }
}

impl BoardConfig {
    /// Parses and validates a JSON document. Missing fields take defaults.
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        crate::logging::normalize_level(&self.log_level).map_err(ConfigError::Invalid)?;
        self.input.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::{BoardConfig, ConfigError, InputRules};

    #[test]
    fn empty_document_yields_defaults() {
        let config = BoardConfig::from_json_str("{}").expect("empty object is valid");
        assert_eq!(config, BoardConfig::default());
        assert_eq!(config.input.description_min_length, 5);
        assert_eq!(config.input.people_min, 1);
        assert_eq!(config.input.people_max, 8);
    }

    #[test]
    fn partial_input_section_keeps_other_defaults() {
        let config = BoardConfig::from_json_str(r#"{"input": {"people_max": 12}}"#)
            .expect("partial config is valid");
        assert_eq!(config.input.people_max, 12);
        assert_eq!(config.input.people_min, 1);
    }

    #[test]
    fn rejects_inverted_people_range() {
        let err = BoardConfig::from_json_str(r#"{"input": {"people_min": 5, "people_max": 2}}"#)
            .expect_err("inverted range must fail");
        assert!(matches!(err, ConfigError::Invalid(_)));
        assert!(err.to_string().contains("people_min (5)"));
    }

    #[test]
    fn rejects_zero_people_min() {
        let rules = InputRules {
            people_min: 0,
            ..InputRules::default()
        };
        assert!(matches!(rules.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn rejects_unknown_fields_and_bad_levels() {
        let err = BoardConfig::from_json_str(r#"{"colour": "blue"}"#)
            .expect_err("unknown field must fail");
        assert!(matches!(err, ConfigError::Parse(_)));

        let err = BoardConfig::from_json_str(r#"{"log_level": "loud"}"#)
            .expect_err("unknown level must fail");
        assert!(err.to_string().contains("unsupported log level"));
    }
}
