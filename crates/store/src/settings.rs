//! Application settings management
//!
//! This module provides settings persistence, loading, and updating
//! for the badge maker.

use crate::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File name of the settings file inside the config directory
pub const SETTINGS_FILE_NAME: &str = "settings.json";

/// How many people a badge carries
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BadgeMode {
    /// One name/company pair
    OnePerson,
    /// Two name/company pairs
    #[default]
    TwoPeople,
}

impl BadgeMode {
    /// Whether the second person's fields are in use
    pub fn has_second_person(self) -> bool {
        self == BadgeMode::TwoPeople
    }
}

/// Badge maker settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BadgeSettings {
    /// Template to fill; resolved next to the executable when unset
    pub template_path: Option<PathBuf>,
    /// Where badges are written; the current directory when unset
    pub output_dir: Option<PathBuf>,
    /// Mode the form starts in
    pub default_mode: BadgeMode,
    /// Whether "space out characters" starts checked
    pub add_spaces: bool,
    /// Whether "open after generating" starts checked
    pub auto_open: bool,
}

impl Default for BadgeSettings {
    fn default() -> Self {
        Self {
            template_path: None,
            output_dir: None,
            default_mode: BadgeMode::TwoPeople,
            add_spaces: false,
            auto_open: true,
        }
    }
}

/// Settings manager for loading and saving badge settings
pub struct SettingsManager {
    /// Path to the settings file
    settings_path: PathBuf,
    /// Current settings (cached)
    current: BadgeSettings,
}

impl SettingsManager {
    /// Create a settings manager storing `settings.json` under `config_dir`
    pub fn new(config_dir: impl AsRef<Path>) -> Self {
        Self::with_path(config_dir.as_ref().join(SETTINGS_FILE_NAME))
    }

    /// Create a settings manager for an explicit settings file
    pub fn with_path(settings_path: impl Into<PathBuf>) -> Self {
        Self {
            settings_path: settings_path.into(),
            current: BadgeSettings::default(),
        }
    }

    /// Get the path to the settings file
    pub fn settings_path(&self) -> &Path {
        &self.settings_path
    }

    /// Load settings from disk, or fall back to defaults if the file is
    /// missing or cannot be parsed
    pub fn load(&mut self) -> Result<&BadgeSettings> {
        if self.settings_path.exists() {
            let content = std::fs::read_to_string(&self.settings_path)?;
            match serde_json::from_str::<BadgeSettings>(&content) {
                Ok(settings) => {
                    self.current = settings;
                }
                Err(e) => {
                    tracing::warn!(
                        "Failed to parse settings file {}, using defaults: {}",
                        self.settings_path.display(),
                        e
                    );
                    self.current = BadgeSettings::default();
                }
            }
        } else {
            tracing::debug!(
                "No settings file at {}, using defaults",
                self.settings_path.display()
            );
            self.current = BadgeSettings::default();
        }
        Ok(&self.current)
    }

    /// Save current settings to disk
    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.settings_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(&self.current)?;
        std::fs::write(&self.settings_path, content)?;
        Ok(())
    }

    /// Get current settings
    pub fn get(&self) -> &BadgeSettings {
        &self.current
    }

    /// Replace current settings (call [`SettingsManager::save`] to persist)
    pub fn update(&mut self, settings: BadgeSettings) {
        self.current = settings;
    }

    /// Reset settings to defaults
    pub fn reset(&mut self) {
        self.current = BadgeSettings::default();
    }
}
