//! # autoai-contracts
//!
//! Shared record types, enumerations and errors for the AutoAI predictive
//! maintenance demo.
//!
//! All crates in the workspace import from here. No behavior lives in this
//! crate beyond labels, parsing and small classifications used by
//! renderers.

pub mod conversation;
pub mod error;
pub mod fleet;
pub mod page;
pub mod security;
pub mod showcase;
pub mod verify;

#[cfg(test)]
mod tests {
    use super::*;
    use conversation::{BehaviorLogEntry, LogIndicator, Message, MessageCategory, MessageRole, RiskLevel};
    use error::AutoAiError;
    use fleet::{ServiceAppointment, Vehicle};
    use page::Page;
    use security::{AlertRecord, AlertStatus};
    use verify::{VerificationFailure, VerificationReport};

    // ── Page ─────────────────────────────────────────────────────────────────

    #[test]
    fn page_ids_parse_back_to_the_same_page() {
        for page in Page::ALL {
            let parsed: Page = page.id().parse().unwrap();
            assert_eq!(parsed, page);
        }
    }

    #[test]
    fn page_unknown_id_is_an_error() {
        match "garage".parse::<Page>() {
            Err(AutoAiError::UnknownPage { name }) => assert_eq!(name, "garage"),
            other => panic!("expected UnknownPage, got {:?}", other),
        }
    }

    #[test]
    fn page_serializes_as_kebab_case() {
        let json = serde_json::to_string(&Page::VoiceAgent).unwrap();
        assert_eq!(json, "\"voice-agent\"");
        let decoded: Page = serde_json::from_str("\"security\"").unwrap();
        assert_eq!(decoded, Page::Security);
    }

    #[test]
    fn page_default_is_landing() {
        assert_eq!(Page::default(), Page::Landing);
    }

    #[test]
    fn page_index_matches_navigation_order() {
        for (i, page) in Page::ALL.iter().enumerate() {
            assert_eq!(page.index(), i);
            assert_eq!(Page::from_index(i), Some(*page));
        }
        assert_eq!(Page::from_index(6), None);
        assert_eq!(Page::Security.label(), "Security & UEBA");
    }

    // ── Conversation ─────────────────────────────────────────────────────────

    #[test]
    fn only_urgent_ueba_and_rca_have_banners() {
        assert_eq!(MessageCategory::Urgent.banner(), Some("CRITICAL ALERT"));
        assert_eq!(MessageCategory::Ueba.banner(), Some("UEBA SECURITY"));
        assert_eq!(MessageCategory::Rca.banner(), Some("RCA/CAPA ANALYSIS"));
        assert_eq!(MessageCategory::Info.banner(), None);
        assert_eq!(MessageCategory::Alert.banner(), None);
        assert_eq!(MessageCategory::Confirmation.banner(), None);
    }

    #[test]
    fn message_category_serializes_under_type_key() {
        let msg = Message::agent("1", "hello", "09:15 AM", MessageCategory::Rca);
        let value = serde_json::to_value(&msg).unwrap();
        assert_eq!(value["type"], "rca");
        assert_eq!(value["role"], "agent");

        let user = Message::user("2", "hi", "09:16 AM");
        let value = serde_json::to_value(&user).unwrap();
        assert!(value.get("type").is_none());
        assert_eq!(user.role, MessageRole::User);
    }

    #[test]
    fn settled_status_wins_over_risk() {
        let entry = BehaviorLogEntry::new("Tow dispatched", "confirmed", "09:18:40 AM", RiskLevel::Critical);
        assert_eq!(entry.indicator(), LogIndicator::Settled);
    }

    #[test]
    fn detected_status_is_flagged() {
        let entry = BehaviorLogEntry::new("Brake failure", "detected", "09:15:12 AM", RiskLevel::Critical);
        assert_eq!(entry.indicator(), LogIndicator::Flagged);
        let entry = BehaviorLogEntry::new("Pattern", "identified", "03:15:10 PM", RiskLevel::Medium);
        assert_eq!(entry.indicator(), LogIndicator::Flagged);
    }

    #[test]
    fn in_progress_entries_fall_back_to_risk() {
        let high = BehaviorLogEntry::new("RCA match", "matched", "t", RiskLevel::High);
        let medium = BehaviorLogEntry::new("UEBA", "monitoring", "t", RiskLevel::Medium);
        let low = BehaviorLogEntry::new("Alert", "sent", "t", RiskLevel::Low);
        assert_eq!(high.indicator(), LogIndicator::Elevated);
        assert_eq!(medium.indicator(), LogIndicator::Watch);
        assert_eq!(low.indicator(), LogIndicator::Neutral);
    }

    // ── Fleet & security ─────────────────────────────────────────────────────

    #[test]
    fn healthy_threshold_is_inclusive() {
        let mut v = Vehicle {
            id: "VH-1".to_string(),
            model: "Test".to_string(),
            location: "Pune".to_string(),
            health_score: 80,
            alerts: 0,
            next_service: "Nov 1".to_string(),
        };
        assert!(v.is_healthy());
        v.health_score = 79;
        assert!(!v.is_healthy());
    }

    #[test]
    fn appointment_day_label_drops_time_of_day() {
        let appt = ServiceAppointment {
            vehicle: "VH-2024-003".to_string(),
            service: "Brake Pad Replacement".to_string(),
            date: "Oct 18, 10:00 AM".to_string(),
            location: "Bangalore".to_string(),
        };
        assert_eq!(appt.day_label(), "Oct 18");
    }

    #[test]
    fn alert_risk_band_boundaries() {
        let mut alert = AlertRecord {
            time: "now".to_string(),
            title: "t".to_string(),
            description: "d".to_string(),
            action: "a".to_string(),
            risk_score: 70,
            status: AlertStatus::Resolved,
        };
        assert_eq!(alert.risk_band(), RiskLevel::High);
        alert.risk_score = 69;
        assert_eq!(alert.risk_band(), RiskLevel::Medium);
        alert.risk_score = 39;
        assert_eq!(alert.risk_band(), RiskLevel::Low);
    }

    // ── Verification report ──────────────────────────────────────────────────

    #[test]
    fn report_merge_tracks_pass_state() {
        let mut report = VerificationReport::from_failures(vec![]);
        assert!(report.passed);

        report.merge(VerificationReport::from_failures(vec![VerificationFailure {
            rule_id: "unique-id".to_string(),
            location: "vehicles[1]".to_string(),
            message: "duplicate id".to_string(),
        }]));
        assert!(!report.passed);
        assert_eq!(report.summary(), "[unique-id] vehicles[1]: duplicate id");
    }

    // ── AutoAiError display messages ─────────────────────────────────────────

    #[test]
    fn error_display_messages() {
        let err = AutoAiError::ConfigError {
            reason: "missing file".to_string(),
        };
        assert!(err.to_string().contains("configuration error"));
        assert!(err.to_string().contains("missing file"));

        let err = AutoAiError::UnknownScenario {
            id: "weekend".to_string(),
        };
        assert_eq!(err.to_string(), "unknown scenario 'weekend'");

        assert_eq!(AutoAiError::EmptyCatalog.to_string(), "scenario catalog is empty");

        let err = AutoAiError::VerificationFailed {
            reason: "[json-schema] vehicles[0]: out of range".to_string(),
        };
        assert!(err.to_string().contains("catalog verification failed"));
    }

    #[test]
    fn io_errors_become_terminal_errors() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "tty gone");
        let err: AutoAiError = io.into();
        assert!(matches!(err, AutoAiError::Terminal { ref reason } if reason.contains("tty gone")));
    }
}
