//! Configuration management for Cosmic Folio
//!
//! Handles loading, saving, and validating application configuration.
//! Configuration is persisted as JSON in the user's config directory.

use crate::error::{ConfigError, ConfigResult, LocaleError};
use crate::i18n::{self, LocaleTag};
use crate::routing::HOME_PATH;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Application identifier following reverse-DNS convention
pub const APP_ID: &str = "com.cosmic.Folio";

/// Minimum window width in pixels
pub const MIN_WINDOW_WIDTH: f32 = 400.0;

/// Minimum window height in pixels
pub const MIN_WINDOW_HEIGHT: f32 = 300.0;

/// Prefix of the locale menu's list id
pub const LOCALE_MENU_ID: &str = "menu-locale";

/// Configuration file name inside the config directory
const CONFIG_FILE: &str = "config.json";

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Site configuration
    pub site: SiteConfig,

    /// UI configuration
    pub ui: UiConfig,
}

impl Config {
    /// Load configuration from disk or return defaults
    pub fn load() -> ConfigResult<Self> {
        let path = Self::config_file_path()?;

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path).map_err(|source| ConfigError::LoadError {
            path: path.clone(),
            source,
        })?;

        let config: Config = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to disk
    pub fn save(&self) -> ConfigResult<()> {
        let path = Self::config_file_path()?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| ConfigError::SaveError(e.to_string()))?;
        }

        let content = serde_json::to_string_pretty(self)?;

        std::fs::write(&path, content).map_err(|e| ConfigError::SaveError(e.to_string()))?;

        Ok(())
    }

    /// Get the configuration directory path
    pub fn config_dir() -> ConfigResult<PathBuf> {
        dirs::config_dir()
            .map(|p| p.join(APP_ID))
            .ok_or(ConfigError::DirectoryError)
    }

    fn config_file_path() -> ConfigResult<PathBuf> {
        Self::config_dir().map(|p| p.join(CONFIG_FILE))
    }

    /// Check that the site locales are usable
    pub fn validate(&self) -> ConfigResult<()> {
        self.site.locale_tags()?;
        self.site.default_locale_tag()?;
        if !self.site.start_path.starts_with('/') {
            return Err(ConfigError::InvalidValue {
                key: "site.start_path".to_string(),
                reason: "must start with '/'".to_string(),
            });
        }
        Ok(())
    }
}

/// Site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Locales the site is published in, in menu order
    pub locales: Vec<String>,

    /// Locale served without a path prefix
    pub default_locale: String,

    /// Page shown on startup
    pub start_path: String,

    /// Locale last picked in the language menu
    pub preferred_locale: Option<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            locales: vec!["en-US".to_string(), "fr".to_string(), "de".to_string()],
            default_locale: "en-US".to_string(),
            start_path: HOME_PATH.to_string(),
            preferred_locale: None,
        }
    }
}

impl SiteConfig {
    /// Parsed site locales
    pub fn locale_tags(&self) -> ConfigResult<Vec<LocaleTag>> {
        if self.locales.is_empty() {
            return Err(ConfigError::MissingValue {
                key: "site.locales".to_string(),
            });
        }
        i18n::parse_tags(self.locales.iter().map(String::as_str)).map_err(|e| {
            ConfigError::InvalidValue {
                key: "site.locales".to_string(),
                reason: e.to_string(),
            }
        })
    }

    /// Parsed default locale, which must be one of the site locales
    pub fn default_locale_tag(&self) -> ConfigResult<LocaleTag> {
        let invalid = |e: LocaleError| ConfigError::InvalidValue {
            key: "site.default_locale".to_string(),
            reason: e.to_string(),
        };
        let tag = LocaleTag::parse(&self.default_locale).map_err(invalid)?;
        if !self.locale_tags()?.contains(&tag) {
            return Err(invalid(LocaleError::NotAvailable {
                tag: tag.to_string(),
            }));
        }
        Ok(tag)
    }

    /// Locale to start in: the preferred one if still available
    pub fn start_locale(&self) -> ConfigResult<LocaleTag> {
        let tags = self.locale_tags()?;
        let preferred = self
            .preferred_locale
            .as_deref()
            .and_then(|p| LocaleTag::parse(p).ok())
            .filter(|p| tags.contains(p));
        match preferred {
            Some(tag) => Ok(tag),
            None => self.default_locale_tag(),
        }
    }
}

/// UI configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Theme preference (follows system by default)
    pub theme: ThemePreference,
}

/// Theme preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ThemePreference {
    /// Follow system theme
    #[default]
    System,
    /// Always use light theme
    Light,
    /// Always use dark theme
    Dark,
}

impl ThemePreference {
    /// Resolve against the desktop's current theme
    pub fn is_dark(self, system_is_dark: bool) -> bool {
        match self {
            ThemePreference::System => system_is_dark,
            ThemePreference::Light => false,
            ThemePreference::Dark => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.site.default_locale_tag().unwrap().as_str(), "en-US");
        assert_eq!(config.ui.theme, ThemePreference::System);
    }

    #[test]
    fn test_config_serialization() {
        let mut config = Config::default();
        config.site.preferred_locale = Some("de".to_string());
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.site.locales, config.site.locales);
        assert_eq!(deserialized.site.preferred_locale.as_deref(), Some("de"));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: Config = serde_json::from_str(r#"{"ui": {"theme": "Dark"}}"#).unwrap();
        assert_eq!(config.ui.theme, ThemePreference::Dark);
        assert_eq!(config.site.locales.len(), 3);
    }

    #[test]
    fn test_validate_rejects_bad_locales() {
        let mut config = Config::default();
        config.site.locales = vec!["en-US".to_string(), "french".to_string()];
        assert!(matches!(config.validate(), Err(ConfigError::InvalidValue { .. })));

        let mut config = Config::default();
        config.site.locales.clear();
        assert!(matches!(config.validate(), Err(ConfigError::MissingValue { .. })));

        let mut config = Config::default();
        config.site.default_locale = "it".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_start_locale_prefers_available_preference() {
        let mut site = SiteConfig::default();
        site.preferred_locale = Some("fr".to_string());
        assert_eq!(site.start_locale().unwrap().as_str(), "fr");

        site.preferred_locale = Some("it".to_string());
        assert_eq!(site.start_locale().unwrap().as_str(), "en-US");
    }

    #[test]
    fn test_theme_preference_resolution() {
        assert!(ThemePreference::System.is_dark(true));
        assert!(!ThemePreference::Light.is_dark(true));
        assert!(ThemePreference::Dark.is_dark(false));
    }
}
