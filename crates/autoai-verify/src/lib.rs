//! # autoai-verify
//!
//! Checks that catalog records are well formed before anything renders
//! them: scores in range, identifiers present and unique, enumerated
//! fields within their sets.
//!
//! [`engine::SchemaVerifier`] runs a [`RecordSchema`] over records in two
//! phases, JSON Schema then semantic rules, plus uniqueness across a
//! collection. [`catalog::verify_catalog`] applies the built-in schemas to
//! a whole [`autoai_catalog::Catalog`].
//!
//! [`RecordSchema`]: autoai_contracts::verify::RecordSchema

pub mod catalog;
pub mod engine;

pub use catalog::{ensure_catalog_valid, verify_catalog};
pub use engine::SchemaVerifier;

#[cfg(test)]
mod tests {
    use super::*;
    use autoai_catalog::Catalog;
    use autoai_contracts::conversation::{Message, MessageCategory};
    use autoai_contracts::error::AutoAiError;

    #[test]
    fn builtin_catalog_passes() {
        let report = verify_catalog(&Catalog::builtin()).unwrap();
        assert!(report.passed, "failures: {}", report.summary());
        ensure_catalog_valid(&Catalog::builtin()).unwrap();
    }

    #[test]
    fn health_score_above_100_fails() {
        let mut catalog = Catalog::builtin();
        catalog.vehicles[2].health_score = 101;
        let report = verify_catalog(&catalog).unwrap();
        assert!(!report.passed);
        assert_eq!(report.failures[0].rule_id, "json-schema");
        assert_eq!(report.failures[0].location, "vehicles[2]");
    }

    #[test]
    fn empty_vehicle_id_fails() {
        let mut catalog = Catalog::builtin();
        catalog.vehicles[0].id = String::new();
        let report = verify_catalog(&catalog).unwrap();
        assert!(!report.passed);
        assert!(report.failures.iter().any(|f| f.rule_id == "vehicle-id"));
    }

    #[test]
    fn duplicate_vehicle_id_fails() {
        let mut catalog = Catalog::builtin();
        catalog.vehicles[5].id = catalog.vehicles[0].id.clone();
        let report = verify_catalog(&catalog).unwrap();
        let failure = report
            .failures
            .iter()
            .find(|f| f.rule_id == "unique-vehicle-id")
            .expect("uniqueness failure");
        assert_eq!(failure.location, "vehicles[5]");
    }

    #[test]
    fn duplicate_message_id_is_located_by_scenario() {
        let mut catalog = Catalog::builtin();
        let rca = catalog.scenarios.iter_mut().find(|s| s.id == "rca").unwrap();
        rca.messages.push(Message::agent("1", "again", "03:24 PM", MessageCategory::Info));
        let report = verify_catalog(&catalog).unwrap();
        assert!(report
            .failures
            .iter()
            .any(|f| f.rule_id == "unique-message-id" && f.location.starts_with("scenarios[rca].messages")));
    }

    #[test]
    fn scenario_opening_with_user_fails_custom_rule() {
        let mut catalog = Catalog::builtin();
        catalog.scenarios[1].messages.remove(0);
        let report = verify_catalog(&catalog).unwrap();
        let failure = report.failures.iter().find(|f| f.rule_id == "scenario-opening").unwrap();
        assert_eq!(failure.location, "scenarios[1]");
    }

    #[test]
    fn ensure_reports_summary() {
        let mut catalog = Catalog::builtin();
        catalog.alert_history[0].risk_score = 150;
        match ensure_catalog_valid(&catalog) {
            Err(AutoAiError::VerificationFailed { reason }) => {
                assert!(reason.contains("alertHistory[0]"), "{}", reason)
            }
            other => panic!("expected VerificationFailed, got {:?}", other),
        }
    }
}
