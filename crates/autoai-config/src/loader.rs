//! Loading and validating [`Settings`].

use std::path::Path;

use autoai_catalog::scenarios;
use autoai_contracts::error::{AutoAiError, AutoAiResult};
use tracing::{debug, info};

use crate::settings::Settings;

/// The settings document shipped with the crate.
pub const DEFAULT_SETTINGS: &str = include_str!("../config/autoai.toml");

impl Settings {
    /// Parse and validate a TOML settings document.
    ///
    /// Returns `AutoAiError::ConfigError` if the document is not valid TOML,
    /// names an unknown page or key, or fails [`Settings::validate`].
    pub fn from_toml_str(s: &str) -> AutoAiResult<Self> {
        let settings: Settings = toml::from_str(s).map_err(|e| AutoAiError::ConfigError {
            reason: format!("failed to parse settings TOML: {}", e),
        })?;
        settings.validate()?;
        debug!(
            initial_page = %settings.shell.initial_page,
            initial_scenario = %settings.voice_agent.initial_scenario,
            "settings parsed"
        );
        Ok(settings)
    }

    /// Read the file at `path` and parse it as a settings document.
    pub fn from_file(path: &Path) -> AutoAiResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| AutoAiError::ConfigError {
            reason: format!("failed to read settings file '{}': {}", path.display(), e),
        })?;
        let settings = Self::from_toml_str(&contents)?;
        info!(path = %path.display(), "settings loaded");
        Ok(settings)
    }

    /// Load from `path` when given, otherwise the shipped defaults.
    pub fn load(path: Option<&Path>) -> AutoAiResult<Self> {
        match path {
            Some(p) => Self::from_file(p),
            None => Self::from_toml_str(DEFAULT_SETTINGS),
        }
    }

    /// Check cross-field constraints serde cannot express.
    pub fn validate(&self) -> AutoAiResult<()> {
        if self.shell.tick_ms == 0 {
            return Err(AutoAiError::ConfigError {
                reason: "shell.tick_ms must be greater than zero".to_string(),
            });
        }
        let scenario = &self.voice_agent.initial_scenario;
        if !scenarios::ids().contains(&scenario.as_str()) {
            return Err(AutoAiError::ConfigError {
                reason: format!(
                    "voice_agent.initial_scenario '{}' is not one of: {}",
                    scenario,
                    scenarios::ids().join(", ")
                ),
            });
        }
        if self.voice_agent.timestamp_format.trim().is_empty() {
            return Err(AutoAiError::ConfigError {
                reason: "voice_agent.timestamp_format must not be empty".to_string(),
            });
        }
        Ok(())
    }
}
