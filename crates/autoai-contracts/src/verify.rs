//! Catalog verification schema and report types.
//!
//! Renderers are only obliged to receive well-formed records: numbers in
//! range, non-empty strings, unique identifiers. A `RecordSchema` states
//! those expectations for one record kind, and the verifier reports every
//! record that misses them.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Expectations for one kind of catalog record (vehicle, message, …).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordSchema {
    /// Unique identifier for this schema (e.g. "vehicle-v1").
    pub schema_id: String,
    /// JSON Schema document every record of this kind must satisfy.
    pub json_schema: Value,
    /// Additional rules evaluated after structural validation.
    pub rules: Vec<VerificationRule>,
}

/// A single rule applied to a record, or to the collection it belongs to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationRule {
    /// Referenced in failure reports.
    pub rule_id: String,
    pub description: String,
    pub rule_type: VerificationRuleType,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum VerificationRuleType {
    /// The field at `field_path` must be present and non-null.
    RequiredField {
        /// Dotted path, e.g. "healthScore".
        field_path: String,
    },

    /// The field at `field_path` must equal one of `allowed`.
    AllowedValues {
        field_path: String,
        allowed: Vec<Value>,
    },

    /// The string at `field_path` must not contain `pattern`.
    ForbiddenPattern { field_path: String, pattern: String },

    /// No two records in the collection may share the value at
    /// `field_path`. Only evaluated when a whole collection is verified.
    UniqueField { field_path: String },

    /// Delegate to a function registered with the verifier under this name.
    Custom { function_name: String },
}

/// The outcome of verifying a record or a collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationReport {
    /// True only if every rule passed.
    pub passed: bool,
    /// Every failure found. Empty on pass.
    pub failures: Vec<VerificationFailure>,
}

impl Default for VerificationReport {
    fn default() -> Self {
        Self::from_failures(Vec::new())
    }
}

impl VerificationReport {
    /// Build a report from collected failures.
    pub fn from_failures(failures: Vec<VerificationFailure>) -> Self {
        Self {
            passed: failures.is_empty(),
            failures,
        }
    }

    /// Fold `other` into this report.
    pub fn merge(&mut self, other: VerificationReport) {
        self.failures.extend(other.failures);
        self.passed = self.failures.is_empty();
    }

    /// One line per failure, `[rule] location: message`.
    pub fn summary(&self) -> String {
        self.failures
            .iter()
            .map(|f| format!("[{}] {}: {}", f.rule_id, f.location, f.message))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// A single rule failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationFailure {
    /// The `rule_id` that failed, or "json-schema" for structural failures.
    pub rule_id: String,
    /// Which record failed, e.g. "vehicles[2]".
    pub location: String,
    pub message: String,
}
