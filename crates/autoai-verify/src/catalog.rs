//! Schemas for the built-in catalog and the check that runs them.

use serde::Serialize;
use serde_json::{json, Value};
use tracing::{info, warn};

use autoai_catalog::Catalog;
use autoai_contracts::error::{AutoAiError, AutoAiResult};
use autoai_contracts::verify::{
    RecordSchema, VerificationReport, VerificationRule, VerificationRuleType,
};

use crate::engine::SchemaVerifier;

/// Name of the custom rule requiring a scenario to open with the agent.
pub const AGENT_OPENS_SCENARIO: &str = "agent-opens-scenario";

fn rule(rule_id: &str, description: &str, rule_type: VerificationRuleType) -> VerificationRule {
    VerificationRule {
        rule_id: rule_id.to_string(),
        description: description.to_string(),
        rule_type,
    }
}

fn required(rule_id: &str, field: &str) -> VerificationRule {
    rule(
        rule_id,
        &format!("{field} must be present and non-blank"),
        VerificationRuleType::RequiredField {
            field_path: field.to_string(),
        },
    )
}

fn unique(rule_id: &str, field: &str) -> VerificationRule {
    rule(
        rule_id,
        &format!("{field} must be unique within the collection"),
        VerificationRuleType::UniqueField {
            field_path: field.to_string(),
        },
    )
}

// ── Schemas ──────────────────────────────────────────────────────────────────

pub fn vehicle_schema() -> RecordSchema {
    RecordSchema {
        schema_id: "vehicle-v1".to_string(),
        json_schema: json!({
            "type": "object",
            "properties": {
                "id": { "type": "string", "minLength": 1 },
                "model": { "type": "string", "minLength": 1 },
                "location": { "type": "string" },
                "healthScore": { "type": "integer", "minimum": 0, "maximum": 100 },
                "alerts": { "type": "integer", "minimum": 0 },
                "nextService": { "type": "string", "minLength": 1 }
            },
            "required": ["id", "model", "location", "healthScore", "alerts", "nextService"]
        }),
        rules: vec![required("vehicle-id", "id"), unique("unique-vehicle-id", "id")],
    }
}

pub fn message_schema() -> RecordSchema {
    RecordSchema {
        schema_id: "message-v1".to_string(),
        json_schema: json!({
            "type": "object",
            "properties": {
                "id": { "type": "string", "minLength": 1 },
                "role": { "enum": ["agent", "user"] },
                "content": { "type": "string", "minLength": 1 },
                "timestamp": { "type": "string", "minLength": 1 },
                "type": { "enum": ["alert", "confirmation", "info", "urgent", "ueba", "rca"] }
            },
            "required": ["id", "role", "content", "timestamp"]
        }),
        rules: vec![
            required("message-content", "content"),
            unique("unique-message-id", "id"),
            rule(
                "no-template-placeholder",
                "message text must not contain unrendered placeholders",
                VerificationRuleType::ForbiddenPattern {
                    field_path: "content".to_string(),
                    pattern: "{{".to_string(),
                },
            ),
        ],
    }
}

pub fn behavior_log_schema() -> RecordSchema {
    RecordSchema {
        schema_id: "behavior-log-v1".to_string(),
        json_schema: json!({
            "type": "object",
            "properties": {
                "action": { "type": "string", "minLength": 1 },
                "status": { "type": "string", "minLength": 1 },
                "timestamp": { "type": "string", "minLength": 1 },
                "risk": { "enum": ["low", "medium", "high", "critical"] }
            },
            "required": ["action", "status", "timestamp", "risk"]
        }),
        rules: vec![],
    }
}

pub fn scenario_schema() -> RecordSchema {
    RecordSchema {
        schema_id: "scenario-v1".to_string(),
        json_schema: json!({
            "type": "object",
            "properties": {
                "id": { "type": "string", "minLength": 1 },
                "name": { "type": "string", "minLength": 1 },
                "icon": { "type": "string" },
                "messages": { "type": "array", "minItems": 1 },
                "behaviorLog": { "type": "array" }
            },
            "required": ["id", "name", "icon", "messages", "behaviorLog"]
        }),
        rules: vec![
            unique("unique-scenario-id", "id"),
            rule(
                "scenario-icon",
                "icon must be one of the selector glyphs",
                VerificationRuleType::AllowedValues {
                    field_path: "icon".to_string(),
                    allowed: vec![
                        json!("alert-triangle"),
                        json!("check-circle"),
                        json!("users"),
                        json!("trending-up"),
                    ],
                },
            ),
            rule(
                "scenario-opening",
                "the first message of a scenario comes from the agent",
                VerificationRuleType::Custom {
                    function_name: AGENT_OPENS_SCENARIO.to_string(),
                },
            ),
        ],
    }
}

pub fn alert_record_schema() -> RecordSchema {
    RecordSchema {
        schema_id: "alert-record-v1".to_string(),
        json_schema: json!({
            "type": "object",
            "properties": {
                "title": { "type": "string", "minLength": 1 },
                "riskScore": { "type": "integer", "minimum": 0, "maximum": 100 },
                "status": { "enum": ["verified", "cleared", "resolved"] }
            },
            "required": ["time", "title", "description", "action", "riskScore", "status"]
        }),
        rules: vec![],
    }
}

// ── Catalog check ────────────────────────────────────────────────────────────

/// A verifier with the catalog's custom rules registered.
pub fn catalog_verifier() -> SchemaVerifier {
    let mut verifier = SchemaVerifier::new();
    verifier.register_rule(
        AGENT_OPENS_SCENARIO,
        Box::new(|scenario| {
            let role = scenario.pointer("/messages/0/role").and_then(Value::as_str);
            match role {
                Some("agent") => None,
                other => Some(format!("scenario opens with role {:?}, expected agent", other)),
            }
        }),
    );
    verifier
}

fn to_values<T: Serialize>(collection: &str, records: &[T]) -> AutoAiResult<Vec<Value>> {
    records
        .iter()
        .map(|r| {
            serde_json::to_value(r).map_err(|e| AutoAiError::Serialization {
                reason: format!("could not serialize {collection}: {e}"),
            })
        })
        .collect()
}

/// Check every record in `catalog`. The report lists all failures.
///
/// Errors only when a record cannot be turned into JSON at all.
pub fn verify_catalog(catalog: &Catalog) -> AutoAiResult<VerificationReport> {
    let verifier = catalog_verifier();
    let mut report = VerificationReport::default();

    report.merge(verifier.verify_collection(
        "vehicles",
        &to_values("vehicles", &catalog.vehicles)?,
        &vehicle_schema(),
    ));
    report.merge(verifier.verify_collection(
        "scenarios",
        &to_values("scenarios", &catalog.scenarios)?,
        &scenario_schema(),
    ));
    for scenario in &catalog.scenarios {
        let prefix = format!("scenarios[{}]", scenario.id);
        report.merge(verifier.verify_collection(
            &format!("{prefix}.messages"),
            &to_values("messages", &scenario.messages)?,
            &message_schema(),
        ));
        report.merge(verifier.verify_collection(
            &format!("{prefix}.behaviorLog"),
            &to_values("behavior log", &scenario.behavior_log)?,
            &behavior_log_schema(),
        ));
    }
    report.merge(verifier.verify_collection(
        "alertHistory",
        &to_values("alert history", &catalog.alert_history)?,
        &alert_record_schema(),
    ));

    if report.passed {
        info!("catalog verification passed");
    } else {
        warn!(failure_count = report.failures.len(), "catalog verification failed");
    }
    Ok(report)
}

/// Like [`verify_catalog`], but a failed report becomes `VerificationFailed`.
pub fn ensure_catalog_valid(catalog: &Catalog) -> AutoAiResult<()> {
    let report = verify_catalog(catalog)?;
    if report.passed {
        Ok(())
    } else {
        Err(AutoAiError::VerificationFailed {
            reason: report.summary(),
        })
    }
}
