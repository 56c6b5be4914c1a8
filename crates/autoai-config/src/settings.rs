//! Settings structures deserialized from TOML.

use std::time::Duration;

use autoai_contracts::page::Page;
use serde::{Deserialize, Serialize};

pub const DEFAULT_TICK_MS: u64 = 150;
pub const DEFAULT_SCENARIO: &str = "urgent";
pub const DEFAULT_REPLY_DELAY_MS: u64 = 1000;
pub const DEFAULT_ACKNOWLEDGEMENT: &str = "I understand your request. Let me check that for you...";
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%I:%M %p";

/// The top-level structure deserialized from a settings file.
///
/// Every table and key is optional; a missing value takes its default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    #[serde(default)]
    pub shell: ShellSettings,
    #[serde(default)]
    pub voice_agent: VoiceAgentSettings,
}

/// `[shell]`: page routing and the host event loop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ShellSettings {
    pub initial_page: Page,
    pub tick_ms: u64,
}

impl Default for ShellSettings {
    fn default() -> Self {
        Self {
            initial_page: Page::Landing,
            tick_ms: DEFAULT_TICK_MS,
        }
    }
}

impl ShellSettings {
    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }
}

/// `[voice_agent]`: scenario selection and the deferred acknowledgement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VoiceAgentSettings {
    pub initial_scenario: String,
    pub reply_delay_ms: u64,
    pub acknowledgement: String,
    pub timestamp_format: String,
}

impl Default for VoiceAgentSettings {
    fn default() -> Self {
        Self {
            initial_scenario: DEFAULT_SCENARIO.to_string(),
            reply_delay_ms: DEFAULT_REPLY_DELAY_MS,
            acknowledgement: DEFAULT_ACKNOWLEDGEMENT.to_string(),
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
        }
    }
}

impl VoiceAgentSettings {
    pub fn reply_delay(&self) -> Duration {
        Duration::from_millis(self.reply_delay_ms)
    }
}
