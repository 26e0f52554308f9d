//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application configuration
//! in TOML format with platform-specific directory resolution.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::history::HISTORY_LIMIT;
use crate::models::{is_hex_color, BorderRadius, StylePreset, ThemeUpdate};

/// Environment variable that overrides the config directory.
pub const CONFIG_DIR_ENV: &str = "PAGESMITH_CONFIG_DIR";

/// Path configuration for file system locations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PathConfig {
    /// Directory holding saved projects (defaults to `<config dir>/projects`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub projects_dir: Option<PathBuf>,
}

/// Theme values applied to newly created projects.
///
/// Every field is optional; unset fields fall back to the built-in defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct DefaultsConfig {
    /// Accent color (`#RGB` or `#RRGGBB`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_color: Option<String>,
    /// Corner rounding token
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<BorderRadius>,
    /// Style family
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style_preset: Option<StylePreset>,
    /// Dark color scheme
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dark_mode: Option<bool>,
    /// Font family
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
}

impl DefaultsConfig {
    /// The configured defaults as a theme update.
    #[must_use]
    pub fn theme_update(&self) -> ThemeUpdate {
        ThemeUpdate {
            primary_color: self.primary_color.clone(),
            border_radius: self.border_radius,
            style_preset: self.style_preset,
            dark_mode: self.dark_mode,
            font_family: self.font_family.clone(),
        }
    }
}

/// Editing session preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Number of undo steps kept (1-30)
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,
}

/// Default undo depth
fn default_history_limit() -> usize {
    HISTORY_LIMIT
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            history_limit: default_history_limit(),
        }
    }
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/Pagesmith/config.toml`
/// - macOS: `~/Library/Application Support/Pagesmith/config.toml`
/// - Windows: `%APPDATA%\Pagesmith\config.toml`
///
/// `PAGESMITH_CONFIG_DIR` replaces the directory on every platform.
///
/// # Validation
///
/// - `defaults.primary_color` must be a hex color
/// - `defaults.font_family` must not be blank
/// - `editor.history_limit` must be between 1 and 30
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// File system paths
    #[serde(default)]
    pub paths: PathConfig,
    /// Theme defaults for new projects
    #[serde(default)]
    pub defaults: DefaultsConfig,
    /// Editing session settings
    #[serde(default)]
    pub editor: EditorConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks if the config file exists on disk.
    #[must_use]
    pub fn exists() -> bool {
        Self::config_file_path()
            .map(|path| path.exists())
            .unwrap_or(false)
    }

    /// Gets the config directory path.
    ///
    /// - `$PAGESMITH_CONFIG_DIR` if set
    /// - Linux: `~/.config/Pagesmith/`
    /// - macOS: `~/Library/Application Support/Pagesmith/`
    /// - Windows: `%APPDATA%\Pagesmith\`
    pub fn config_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|d| !d.is_empty()) {
            return Ok(PathBuf::from(dir));
        }

        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join("Pagesmith");

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Directory where projects are listed and created by name.
    pub fn projects_dir(&self) -> Result<PathBuf> {
        match &self.paths.projects_dir {
            Some(dir) => Ok(dir.clone()),
            None => Ok(Self::config_dir()?.join("projects")),
        }
    }

    /// Loads configuration from the config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_file_path()?;

        if !config_path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(&config_path).context(format!(
            "Failed to read config file: {}",
            config_path.display()
        ))?;

        Self::from_toml(&content).context(format!(
            "Failed to parse config file: {}",
            config_path.display()
        ))
    }

    /// Parses and validates configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Saves configuration to the config file using atomic write.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save(&self) -> Result<()> {
        self.validate()?;

        // Ensure config directory exists
        let config_dir = Self::config_dir()?;
        fs::create_dir_all(&config_dir).context(format!(
            "Failed to create config directory: {}",
            config_dir.display()
        ))?;

        // Serialize to TOML
        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        let config_path = Self::config_file_path()?;
        let temp_path = config_path.with_extension("toml.tmp");

        // Write to temp file
        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        // Atomic rename
        fs::rename(&temp_path, &config_path).context(format!(
            "Failed to rename temp config file to: {}",
            config_path.display()
        ))?;

        Ok(())
    }

    /// Validates configuration values.
    pub fn validate(&self) -> Result<()> {
        if let Some(color) = &self.defaults.primary_color {
            if !is_hex_color(color) {
                anyhow::bail!(
                    "Default primary color '{color}' is invalid. Expected #RGB or #RRGGBB"
                );
            }
        }

        if let Some(font) = &self.defaults.font_family {
            if font.trim().is_empty() {
                anyhow::bail!("Default font family cannot be empty");
            }
        }

        if !(1..=HISTORY_LIMIT).contains(&self.editor.history_limit) {
            anyhow::bail!(
                "History limit must be between 1 and {HISTORY_LIMIT} (got {})",
                self.editor.history_limit
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_new() {
        let config = Config::new();
        assert_eq!(config.paths.projects_dir, None);
        assert_eq!(config.defaults, DefaultsConfig::default());
        assert_eq!(config.editor.history_limit, 30);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validate_color() {
        let mut config = Config::new();
        config.defaults.primary_color = Some("red".to_string());
        assert!(config.validate().is_err());

        config.defaults.primary_color = Some("#f00".to_string());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validate_history_limit() {
        let mut config = Config::new();
        config.editor.history_limit = 0;
        assert!(config.validate().is_err());

        config.editor.history_limit = 31;
        assert!(config.validate().is_err());

        config.editor.history_limit = 10;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validate_blank_font() {
        let mut config = Config::new();
        config.defaults.font_family = Some("   ".to_string());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_toml_roundtrip() {
        let mut config = Config::new();
        config.paths.projects_dir = Some(PathBuf::from("/tmp/pages"));
        config.defaults.style_preset = Some(StylePreset::Macaron);
        config.defaults.border_radius = Some(BorderRadius::Pill);
        config.defaults.dark_mode = Some(true);

        let content = toml::to_string_pretty(&config).unwrap();
        assert!(content.contains("style_preset = \"macaron\""));
        assert!(content.contains("border_radius = \"99px\""));

        let loaded = Config::from_toml(&content).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_config_partial_file_uses_defaults() {
        let config = Config::from_toml("[defaults]\ndark_mode = true\n").unwrap();
        assert_eq!(config.defaults.dark_mode, Some(true));
        assert_eq!(config.editor.history_limit, 30);
        assert_eq!(config.paths.projects_dir, None);
    }

    #[test]
    fn test_config_invalid_file_rejected() {
        assert!(Config::from_toml("[editor]\nhistory_limit = 99\n").is_err());
        assert!(Config::from_toml("[defaults]\nstyle_preset = \"retro\"\n").is_err());
    }

    #[test]
    fn test_defaults_theme_update() {
        let defaults = DefaultsConfig {
            primary_color: Some("#000".to_string()),
            dark_mode: Some(true),
            ..DefaultsConfig::default()
        };
        let update = defaults.theme_update();
        assert_eq!(update.primary_color.as_deref(), Some("#000"));
        assert_eq!(update.dark_mode, Some(true));
        assert!(update.style_preset.is_none());
    }

    #[test]
    fn test_projects_dir_explicit() {
        let mut config = Config::new();
        config.paths.projects_dir = Some(PathBuf::from("/srv/pages"));
        assert_eq!(config.projects_dir().unwrap(), PathBuf::from("/srv/pages"));
    }
}
