//! Builder configuration.
//!
//! Parsed from TOML with serde; every key is optional:
//!
//! ```toml
//! hard_limit = 3000
//! soft_limit = 1500
//! trailing_text = "keep"
//! ```
//!
//! The character limits are carried for chunk splitting further down the line
//! and never change how markup is parsed.

use std::path::Path;

use serde::Deserialize;

/// What happens to text after the last tag of the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrailingText {
    /// Flush it as a final text node.
    Keep,
    /// Discard it, reproducing the output of older builders.
    Drop,
}

impl Default for TrailingText {
    fn default() -> Self {
        TrailingText::Keep
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BuilderConfig {
    /// Maximum characters per chunk.
    pub hard_limit: usize,
    /// Preferred characters per chunk.
    pub soft_limit: usize,
    pub trailing_text: TrailingText,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            hard_limit: 3000,
            soft_limit: 1500,
            trailing_text: TrailingText::Keep,
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
}

impl BuilderConfig {
    pub fn new(hard_limit: usize, soft_limit: usize) -> Self {
        Self {
            hard_limit,
            soft_limit,
            ..Self::default()
        }
    }

    /// Parse and validate configuration from a TOML string.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: BuilderConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        tracing::debug!(path = %path.display(), "loading builder config");
        Self::from_toml_str(&text)
    }

    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if `hard_limit` is zero or `soft_limit` exceeds it.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.hard_limit == 0 {
            return Err(ConfigError::Validation("hard_limit must be greater than 0".to_owned()));
        }
        if self.soft_limit > self.hard_limit {
            return Err(ConfigError::Validation(format!(
                "soft_limit ({}) cannot exceed hard_limit ({})",
                self.soft_limit, self.hard_limit
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BuilderConfig::default();
        assert_eq!(config.hard_limit, 3000);
        assert_eq!(config.soft_limit, 1500);
        assert_eq!(config.trailing_text, TrailingText::Keep);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_empty_config() {
        let config = BuilderConfig::from_toml_str("").unwrap();
        assert_eq!(config, BuilderConfig::default());
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
hard_limit = 5000
soft_limit = 4000
trailing_text = "drop"
"#;
        let config = BuilderConfig::from_toml_str(toml).unwrap();
        assert_eq!(config.hard_limit, 5000);
        assert_eq!(config.soft_limit, 4000);
        assert_eq!(config.trailing_text, TrailingText::Drop);
    }

    #[test]
    fn test_soft_limit_above_hard_limit() {
        let err = BuilderConfig::from_toml_str("hard_limit = 10\nsoft_limit = 20").unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
        assert!(err.to_string().contains("soft_limit (20)"));
    }

    #[test]
    fn test_zero_hard_limit() {
        let err = BuilderConfig::new(0, 0).validate().unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_invalid_toml() {
        let err = BuilderConfig::from_toml_str("hard_limit = \"many\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        let err = BuilderConfig::from_toml_str("trailing_text = \"maybe\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        let err = BuilderConfig::from_toml_str("max_chars = 3").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let err = BuilderConfig::load(Path::new("/nonexistent/ssml_tree.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
