//! Application configuration
//!
//! Only the shell is persisted (window geometry, appearance, the last
//! range selection). Telemetry is never written to disk; every session
//! starts from a fresh generation.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use cloud_insights_core::UiState;
use cloud_insights_types::RangeSelection;

/// Application-wide configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Version of the config format
    pub version: u32,
    /// Window dimensions
    pub window: WindowConfig,
    /// Shell appearance and selections
    #[serde(default)]
    pub shell: ShellConfig,
}

impl AppConfig {
    /// Load configuration from disk
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            return Ok(Self::default());
        }

        Self::load_from_path(&config_path)
    }

    /// Save configuration to disk
    pub fn save(&self) -> Result<()> {
        self.save_to_path(&Self::config_path()?)
    }

    /// Get the configuration file path
    fn config_path() -> Result<PathBuf> {
        let dirs = directories::ProjectDirs::from("com", "github.cloudinsights", "cloud-insights")
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        Ok(dirs.config_dir().join("config.json"))
    }

    /// Load configuration from a specific file path
    pub fn load_from_path(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a specific file path
    pub fn save_to_path(&self, path: &PathBuf) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Initial shell state for this configuration
    pub fn initial_ui_state(&self) -> UiState {
        UiState {
            dark_mode: self.shell.dark_mode,
            sidebar_open: self.shell.sidebar_open,
            range: self.shell.range,
            ..UiState::default()
        }
    }

    /// Fold the final shell state back into the configuration
    pub fn absorb_ui_state(&mut self, state: &UiState) {
        self.shell.dark_mode = state.dark_mode;
        self.shell.sidebar_open = state.sidebar_open;
        self.shell.range = state.range;
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            window: WindowConfig::default(),
            shell: ShellConfig::default(),
        }
    }
}

/// Window configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowConfig {
    pub width: i32,
    pub height: i32,
    /// Start in fullscreen mode
    #[serde(default)]
    pub fullscreen_enabled: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 840,
            fullscreen_enabled: false,
        }
    }
}

/// Persisted shell appearance and selections
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShellConfig {
    #[serde(default)]
    pub dark_mode: bool,
    #[serde(default = "default_sidebar_open")]
    pub sidebar_open: bool,
    #[serde(default)]
    pub range: RangeSelection,
}

fn default_sidebar_open() -> bool {
    true
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            dark_mode: false,
            sidebar_open: true,
            range: RangeSelection::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let mut config = AppConfig::default();
        config.shell.dark_mode = true;
        config.shell.range = RangeSelection::TwelveMonths;
        config.save_to_path(&path).unwrap();

        let loaded = AppConfig::load_from_path(&path).unwrap();
        assert!(loaded.shell.dark_mode);
        assert_eq!(loaded.shell.range, RangeSelection::TwelveMonths);
        assert_eq!(loaded.window.width, 1280);
    }

    #[test]
    fn test_missing_shell_section_defaults() {
        let json = r#"{"version":1,"window":{"width":800,"height":600}}"#;
        let config: AppConfig = serde_json::from_str(json).unwrap();
        assert!(!config.shell.dark_mode);
        assert_eq!(config.shell.range, RangeSelection::ThirtyDays);
    }

    #[test]
    fn test_ui_state_bridging() {
        let mut config = AppConfig::default();
        let mut state = config.initial_ui_state();
        assert!(!state.dark_mode);

        state.dark_mode = true;
        state.range = RangeSelection::TwelveMonths;
        config.absorb_ui_state(&state);
        assert!(config.shell.dark_mode);
        assert_eq!(config.shell.range, RangeSelection::TwelveMonths);
    }
}
