//! Schema-based record verifier.
//!
//! A record is checked in two phases:
//!
//! 1. **Structural**: its JSON form is validated against
//!    `RecordSchema::json_schema` with the `jsonschema` crate.
//! 2. **Semantic**: each `VerificationRule` is evaluated in order.
//!
//! Collections add a third pass for `UniqueField` rules, which only make
//! sense across records. Every failure is collected before returning.

use std::collections::{HashMap, HashSet};

use serde_json::Value;
use tracing::{debug, warn};

use autoai_contracts::verify::{
    RecordSchema, VerificationFailure, VerificationReport, VerificationRuleType,
};

/// A caller-supplied check on one record's JSON form.
///
/// Returns `Some(message)` on failure, `None` on success.
pub type CustomVerifierFn = Box<dyn Fn(&Value) -> Option<String> + Send + Sync>;

pub struct SchemaVerifier {
    custom_rules: HashMap<String, CustomVerifierFn>,
}

impl SchemaVerifier {
    pub fn new() -> Self {
        Self {
            custom_rules: HashMap::new(),
        }
    }

    /// Register a custom check under `name`, replacing any previous one.
    ///
    /// The name must match `VerificationRuleType::Custom::function_name`.
    pub fn register_rule(&mut self, name: impl Into<String>, f: CustomVerifierFn) {
        self.custom_rules.insert(name.into(), f);
    }

    /// Resolve a dotted path (e.g. `"icon"` or `"meta.id"`). `None` when a
    /// segment is missing or the value is JSON `null`.
    fn resolve_path<'v>(value: &'v Value, path: &str) -> Option<&'v Value> {
        let mut current = value;
        for segment in path.split('.') {
            match current.get(segment) {
                Some(v) if !v.is_null() => current = v,
                _ => return None,
            }
        }
        Some(current)
    }

    fn failure(rule_id: &str, location: &str, message: String) -> VerificationFailure {
        VerificationFailure {
            rule_id: rule_id.to_string(),
            location: location.to_string(),
            message,
        }
    }

    // ── Single record ────────────────────────────────────────────────────────

    /// Verify one record. `location` names it in failures, e.g. "vehicles[2]".
    pub fn verify(&self, record: &Value, location: &str, schema: &RecordSchema) -> VerificationReport {
        let mut failures = self.structural_failures(record, location, schema);

        for rule in &schema.rules {
            debug!(rule_id = %rule.rule_id, %location, "evaluating verification rule");

            let failure_msg: Option<String> = match &rule.rule_type {
                VerificationRuleType::RequiredField { field_path } => {
                    match Self::resolve_path(record, field_path) {
                        None => Some(format!("required field '{field_path}' is missing or null")),
                        Some(Value::String(s)) if s.trim().is_empty() => {
                            Some(format!("required field '{field_path}' is blank"))
                        }
                        Some(_) => None,
                    }
                }

                VerificationRuleType::AllowedValues { field_path, allowed } => {
                    match Self::resolve_path(record, field_path) {
                        None => Some(format!(
                            "field '{field_path}' is missing; cannot check allowed values"
                        )),
                        Some(actual) if allowed.contains(actual) => None,
                        Some(actual) => Some(format!(
                            "field '{field_path}' has value {actual} which is not in the allowed set"
                        )),
                    }
                }

                // Only string values are checked.
                VerificationRuleType::ForbiddenPattern { field_path, pattern } => {
                    match Self::resolve_path(record, field_path).and_then(Value::as_str) {
                        Some(s) if s.contains(pattern.as_str()) => Some(format!(
                            "field '{field_path}' contains forbidden pattern '{pattern}'"
                        )),
                        _ => None,
                    }
                }

                // Needs the whole collection; see `verify_collection`.
                VerificationRuleType::UniqueField { .. } => None,

                VerificationRuleType::Custom { function_name } => {
                    match self.custom_rules.get(function_name.as_str()) {
                        Some(f) => f(record),
                        None => Some(format!(
                            "no custom rule registered for function name '{function_name}'"
                        )),
                    }
                }
            };

            if let Some(message) = failure_msg {
                warn!(rule_id = %rule.rule_id, %location, %message, "semantic rule failed");
                failures.push(Self::failure(&rule.rule_id, location, message));
            }
        }

        VerificationReport::from_failures(failures)
    }

    fn structural_failures(
        &self,
        record: &Value,
        location: &str,
        schema: &RecordSchema,
    ) -> Vec<VerificationFailure> {
        // Null means no structural constraint.
        if schema.json_schema.is_null() {
            return Vec::new();
        }
        match jsonschema::validator_for(&schema.json_schema) {
            Ok(validator) => validator
                .iter_errors(record)
                .map(|error| {
                    let message = format!("JSON Schema violation at {}: {}", error.instance_path, error);
                    warn!(schema_id = %schema.schema_id, %location, %message, "structural validation failure");
                    Self::failure("json-schema", location, message)
                })
                .collect(),
            Err(e) => {
                let message = format!("invalid JSON Schema document: {e}");
                warn!(schema_id = %schema.schema_id, %message, "schema compilation failure");
                vec![Self::failure("json-schema", location, message)]
            }
        }
    }

    // ── Collection ───────────────────────────────────────────────────────────

    /// Verify every record in `records`, then the `UniqueField` rules across
    /// them. Records are located as `"{collection}[{index}]"`.
    pub fn verify_collection(
        &self,
        collection: &str,
        records: &[Value],
        schema: &RecordSchema,
    ) -> VerificationReport {
        let mut report = VerificationReport::default();
        for (index, record) in records.iter().enumerate() {
            report.merge(self.verify(record, &format!("{collection}[{index}]"), schema));
        }

        for rule in &schema.rules {
            let VerificationRuleType::UniqueField { field_path } = &rule.rule_type else {
                continue;
            };
            let mut seen: HashSet<String> = HashSet::new();
            let mut failures = Vec::new();
            for (index, record) in records.iter().enumerate() {
                let Some(value) = Self::resolve_path(record, field_path) else {
                    continue;
                };
                let key = value.to_string();
                if !seen.insert(key) {
                    let location = format!("{collection}[{index}]");
                    let message = format!("duplicate value {value} for field '{field_path}'");
                    warn!(rule_id = %rule.rule_id, %location, %message, "uniqueness rule failed");
                    failures.push(Self::failure(&rule.rule_id, &location, message));
                }
            }
            report.merge(VerificationReport::from_failures(failures));
        }

        debug!(
            schema_id = %schema.schema_id,
            %collection,
            records = records.len(),
            passed = report.passed,
            failure_count = report.failures.len(),
            "collection verified"
        );
        report
    }
}

impl Default for SchemaVerifier {
    fn default() -> Self {
        Self::new()
    }
}
