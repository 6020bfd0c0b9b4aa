//! Framework configuration
//!
//! Settings that tune the framework for a particular platform deployment,
//! loaded from YAML. Every field has a default, so an empty document is a
//! valid configuration.

use crate::error::{Error, Result, ResultExt};
use crate::i18n::{TranslationKeys, Translator, MAX_KEY_LENGTH};
use crate::piece::MINIMUM_SUPPORTED_RELEASE_AFTER_LATEST_CONTEXT_VERSION;
use crate::types::{Locale, Release};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

// ============================================================================
// Top-Level Config
// ============================================================================

/// Complete framework configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FrameworkConfig {
    /// Platform compatibility settings
    #[serde(default)]
    pub platform: PlatformConfig,

    /// Translation settings
    #[serde(default)]
    pub i18n: I18nConfig,
}

impl FrameworkConfig {
    /// Load configuration from a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::FileNotFound {
                path: path.display().to_string(),
            });
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file '{}'", path.display()))?;
        Self::from_str(&content)
    }

    /// Parse configuration from a YAML string
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        self.platform.minimum_release()?;

        if self.i18n.max_key_length == 0 {
            return Err(Error::config("i18n.max_key_length must be greater than 0"));
        }

        // Malformed extra paths
        self.i18n.translation_keys()?;
        Ok(())
    }

    /// Translator built from the i18n settings
    pub fn translator(&self) -> Result<Translator> {
        Ok(Translator::new(
            self.i18n.translation_keys()?,
            self.i18n.max_key_length,
        ))
    }
}

// ============================================================================
// Platform
// ============================================================================

/// Platform compatibility settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlatformConfig {
    /// Lowest release a context-versioned piece may declare
    #[serde(default = "default_minimum_release")]
    pub minimum_release_after_context_versioning: String,
}

impl Default for PlatformConfig {
    fn default() -> Self {
        Self {
            minimum_release_after_context_versioning: default_minimum_release(),
        }
    }
}

impl PlatformConfig {
    /// The configured release floor
    pub fn minimum_release(&self) -> Result<Release> {
        self.minimum_release_after_context_versioning
            .parse()
            .map_err(|e| {
                Error::config(format!(
                    "platform.minimum_release_after_context_versioning: {e}"
                ))
            })
    }
}

fn default_minimum_release() -> String {
    MINIMUM_SUPPORTED_RELEASE_AFTER_LATEST_CONTEXT_VERSION.to_string()
}

// ============================================================================
// I18n
// ============================================================================

/// Translation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct I18nConfig {
    /// Source strings are cut to this many characters before lookup
    #[serde(default = "default_max_key_length")]
    pub max_key_length: usize,

    /// Paths translated in addition to the default table
    #[serde(default)]
    pub extra_paths: Vec<String>,

    /// Locale used when a command is given none
    #[serde(default)]
    pub default_locale: Option<Locale>,
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            max_key_length: default_max_key_length(),
            extra_paths: Vec::new(),
            default_locale: None,
        }
    }
}

impl I18nConfig {
    /// The default path table plus `extra_paths`
    pub fn translation_keys(&self) -> Result<TranslationKeys> {
        let mut keys = TranslationKeys::default();
        keys.extend(&self.extra_paths)?;
        Ok(keys)
    }
}

fn default_max_key_length() -> usize {
    MAX_KEY_LENGTH
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = FrameworkConfig::from_str("").unwrap();
        assert_eq!(config.i18n.max_key_length, 512);
        assert!(config.i18n.extra_paths.is_empty());
        assert!(config.i18n.default_locale.is_none());
        assert_eq!(
            config.platform.minimum_release().unwrap(),
            Release::new(0, 73, 0)
        );
    }

    #[test]
    fn test_parse_full_config() {
        let yaml = r#"
platform:
  minimum_release_after_context_versioning: "0.80.0"
i18n:
  max_key_length: 256
  default_locale: zh-TW
  extra_paths:
    - "actions.*.props.*.options.placeholder"
"#;

        let config = FrameworkConfig::from_str(yaml).unwrap();
        assert_eq!(
            config.platform.minimum_release().unwrap(),
            Release::new(0, 80, 0)
        );
        assert_eq!(config.i18n.max_key_length, 256);
        assert_eq!(config.i18n.default_locale, Some(Locale::ChineseTraditional));

        let translator = config.translator().unwrap();
        assert_eq!(translator.max_key_length(), 256);
        assert_eq!(
            translator.keys().len(),
            TranslationKeys::default().len() + 1
        );
    }

    #[test]
    fn test_partial_section_keeps_defaults() {
        let config = FrameworkConfig::from_str("i18n:\n  max_key_length: 64\n").unwrap();
        assert_eq!(config.i18n.max_key_length, 64);
        assert_eq!(
            config.platform.minimum_release_after_context_versioning,
            "0.73.0"
        );
    }

    #[test]
    fn test_invalid_release_rejected() {
        let yaml = "platform:\n  minimum_release_after_context_versioning: \"next\"\n";
        let err = FrameworkConfig::from_str(yaml).unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }

    #[test]
    fn test_malformed_extra_path_rejected() {
        let yaml = "i18n:\n  extra_paths:\n    - \"actions..displayName\"\n";
        assert!(FrameworkConfig::from_str(yaml).is_err());
    }

    #[test]
    fn test_zero_key_length_rejected() {
        assert!(FrameworkConfig::from_str("i18n:\n  max_key_length: 0\n").is_err());
    }

    #[test]
    fn test_unknown_locale_rejected() {
        assert!(FrameworkConfig::from_str("i18n:\n  default_locale: xx\n").is_err());
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "i18n:\n  default_locale: de").unwrap();

        let config = FrameworkConfig::from_file(file.path()).unwrap();
        assert_eq!(config.i18n.default_locale, Some(Locale::German));
    }

    #[test]
    fn test_from_missing_file() {
        let err = FrameworkConfig::from_file("/nonexistent/pieces.yaml").unwrap_err();
        assert!(matches!(err, Error::FileNotFound { .. }));
    }
}
