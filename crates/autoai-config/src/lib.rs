//! # autoai-config
//!
//! TOML settings for the AutoAI demo: which page the shell opens on, the
//! event-loop tick, the initial voice-agent scenario and the deferred
//! acknowledgement (delay, text, timestamp format).
//!
//! ```toml
//! [shell]
//! initial_page = "voice-agent"
//!
//! [voice_agent]
//! initial_scenario = "rca"
//! reply_delay_ms = 500
//! ```

pub mod loader;
pub mod settings;

pub use loader::DEFAULT_SETTINGS;
pub use settings::{Settings, ShellSettings, VoiceAgentSettings};

#[cfg(test)]
mod tests {
    use super::*;
    use autoai_contracts::error::AutoAiError;
    use autoai_contracts::page::Page;
    use std::time::Duration;

    fn expect_config_error(toml: &str) -> String {
        match Settings::from_toml_str(toml) {
            Err(AutoAiError::ConfigError { reason }) => reason,
            other => panic!("expected ConfigError, got {:?}", other),
        }
    }

    #[test]
    fn shipped_defaults_match_struct_defaults() {
        let shipped = Settings::from_toml_str(DEFAULT_SETTINGS).unwrap();
        assert_eq!(shipped, Settings::default());
        assert_eq!(shipped.shell.initial_page, Page::Landing);
        assert_eq!(shipped.voice_agent.reply_delay(), Duration::from_millis(1000));
        assert_eq!(shipped.shell.tick(), Duration::from_millis(150));
    }

    #[test]
    fn empty_document_uses_defaults() {
        let settings = Settings::from_toml_str("").unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let settings = Settings::from_toml_str(
            r#"
            [shell]
            initial_page = "voice-agent"

            [voice_agent]
            initial_scenario = "rca"
            "#,
        )
        .unwrap();
        assert_eq!(settings.shell.initial_page, Page::VoiceAgent);
        assert_eq!(settings.shell.tick_ms, 150);
        assert_eq!(settings.voice_agent.initial_scenario, "rca");
        assert_eq!(settings.voice_agent.timestamp_format, "%I:%M %p");
    }

    #[test]
    fn unknown_page_is_rejected() {
        let reason = expect_config_error("[shell]\ninitial_page = \"garage\"\n");
        assert!(reason.contains("failed to parse settings TOML"), "{}", reason);
    }

    #[test]
    fn unknown_scenario_is_rejected() {
        let reason = expect_config_error("[voice_agent]\ninitial_scenario = \"weekend\"\n");
        assert!(reason.contains("weekend"), "{}", reason);
        assert!(reason.contains("urgent, declined, fleet, rca"), "{}", reason);
    }

    #[test]
    fn zero_tick_is_rejected() {
        let reason = expect_config_error("[shell]\ntick_ms = 0\n");
        assert!(reason.contains("tick_ms"), "{}", reason);
    }

    #[test]
    fn blank_timestamp_format_is_rejected() {
        let reason = expect_config_error("[voice_agent]\ntimestamp_format = \"  \"\n");
        assert!(reason.contains("timestamp_format"), "{}", reason);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        expect_config_error("[shell]\ntheme = \"dark\"\n");
    }

    #[test]
    fn missing_file_is_a_config_error() {
        match Settings::from_file(std::path::Path::new("/nonexistent/autoai.toml")) {
            Err(AutoAiError::ConfigError { reason }) => {
                assert!(reason.contains("failed to read settings file"))
            }
            other => panic!("expected ConfigError, got {:?}", other),
        }
    }

    #[test]
    fn load_without_path_uses_shipped_defaults() {
        assert_eq!(Settings::load(None).unwrap(), Settings::default());
    }
}
