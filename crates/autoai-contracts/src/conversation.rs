//! Conversation types for the voice/chat agent page.
//!
//! A `Scenario` pairs a canned message thread with an illustrative
//! behavior log. Messages carry a display timestamp string rather than a
//! clock value; insertion order is render order.

use serde::{Deserialize, Serialize};

/// Who authored a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    Agent,
    User,
}

/// Presentation category of an agent message.
///
/// Only styling depends on the category; no behavior does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageCategory {
    Alert,
    Confirmation,
    Info,
    Urgent,
    Ueba,
    Rca,
}

impl MessageCategory {
    /// Lowercase tag as it appears in exported JSON.
    pub fn tag(self) -> &'static str {
        match self {
            MessageCategory::Alert => "alert",
            MessageCategory::Confirmation => "confirmation",
            MessageCategory::Info => "info",
            MessageCategory::Urgent => "urgent",
            MessageCategory::Ueba => "ueba",
            MessageCategory::Rca => "rca",
        }
    }

    /// Banner rendered above the message body, for the categories that
    /// have one.
    pub fn banner(self) -> Option<&'static str> {
        match self {
            MessageCategory::Urgent => Some("CRITICAL ALERT"),
            MessageCategory::Ueba => Some("UEBA SECURITY"),
            MessageCategory::Rca => Some("RCA/CAPA ANALYSIS"),
            MessageCategory::Alert | MessageCategory::Confirmation | MessageCategory::Info => None,
        }
    }
}

/// A single entry in a conversation transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Unique within a transcript. Seed messages use "1", "2", …; locally
    /// composed messages use generated UUIDs.
    pub id: String,
    pub role: MessageRole,
    /// Body text. May contain `**bold**` markers and newlines.
    pub content: String,
    /// Display timestamp, e.g. "09:15 AM".
    pub timestamp: String,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub category: Option<MessageCategory>,
}

impl Message {
    /// Build an agent message.
    pub fn agent(
        id: impl Into<String>,
        content: impl Into<String>,
        timestamp: impl Into<String>,
        category: MessageCategory,
    ) -> Self {
        Self {
            id: id.into(),
            role: MessageRole::Agent,
            content: content.into(),
            timestamp: timestamp.into(),
            category: Some(category),
        }
    }

    /// Build an uncategorised user message.
    pub fn user(
        id: impl Into<String>,
        content: impl Into<String>,
        timestamp: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            role: MessageRole::User,
            content: content.into(),
            timestamp: timestamp.into(),
            category: None,
        }
    }
}

/// Risk label on a behavior-log entry or activity record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl RiskLevel {
    pub fn label(self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
            RiskLevel::Critical => "critical",
        }
    }
}

/// Status dot shown beside a behavior-log entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogIndicator {
    /// The action finished successfully.
    Settled,
    /// Something was detected or identified.
    Flagged,
    /// High or critical risk, still in progress.
    Elevated,
    /// Medium risk, still in progress.
    Watch,
    Neutral,
}

/// Statuses that mark an action as finished.
const SETTLED_STATUSES: [&str; 6] = [
    "completed",
    "confirmed",
    "delivered",
    "passed",
    "verified",
    "approved",
];

/// One line of a scenario's illustrative audit trail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BehaviorLogEntry {
    pub action: String,
    pub status: String,
    pub timestamp: String,
    pub risk: RiskLevel,
}

impl BehaviorLogEntry {
    pub fn new(
        action: impl Into<String>,
        status: impl Into<String>,
        timestamp: impl Into<String>,
        risk: RiskLevel,
    ) -> Self {
        Self {
            action: action.into(),
            status: status.into(),
            timestamp: timestamp.into(),
            risk,
        }
    }

    /// Classify this entry for its status dot.
    ///
    /// Status wins over risk: a settled or detected status decides the
    /// indicator before the risk level is consulted.
    pub fn indicator(&self) -> LogIndicator {
        let status = self.status.as_str();
        if SETTLED_STATUSES.contains(&status) {
            LogIndicator::Settled
        } else if status == "detected" || status == "identified" {
            LogIndicator::Flagged
        } else {
            match self.risk {
                RiskLevel::Critical | RiskLevel::High => LogIndicator::Elevated,
                RiskLevel::Medium => LogIndicator::Watch,
                RiskLevel::Low => LogIndicator::Neutral,
            }
        }
    }
}

/// Icon shown on a scenario's selector button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScenarioIcon {
    AlertTriangle,
    CheckCircle,
    Users,
    TrendingUp,
}

impl ScenarioIcon {
    /// Single-cell glyph for terminal rendering.
    pub fn glyph(self) -> &'static str {
        match self {
            ScenarioIcon::AlertTriangle => "⚠",
            ScenarioIcon::CheckCircle => "✔",
            ScenarioIcon::Users => "⚑",
            ScenarioIcon::TrendingUp => "↗",
        }
    }
}

/// A fixed demo conversation paired with its behavior log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    /// Short identifier, e.g. "urgent".
    pub id: String,
    /// Selector label, e.g. "Critical Failure".
    pub name: String,
    pub icon: ScenarioIcon,
    /// Seed transcript, in render order.
    pub messages: Vec<Message>,
    #[serde(rename = "behaviorLog")]
    pub behavior_log: Vec<BehaviorLogEntry>,
}
