//! Records for the Security & UEBA page.
//!
//! Everything here is illustrative text. No detection runs anywhere.

use serde::{Deserialize, Serialize};

use crate::conversation::RiskLevel;

/// One entry in the agent activity timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentActivity {
    /// Clock label, e.g. "14:32:15".
    pub time: String,
    pub agent: String,
    pub action: String,
    pub risk: RiskLevel,
}

/// How an historical alert was closed out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertStatus {
    Verified,
    Cleared,
    Resolved,
}

impl AlertStatus {
    pub fn label(self) -> &'static str {
        match self {
            AlertStatus::Verified => "verified",
            AlertStatus::Cleared => "cleared",
            AlertStatus::Resolved => "resolved",
        }
    }
}

/// A past UEBA alert and the action taken on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertRecord {
    pub time: String,
    pub title: String,
    pub description: String,
    pub action: String,
    /// 0–100.
    pub risk_score: u8,
    pub status: AlertStatus,
}

impl AlertRecord {
    /// Band used to colour the risk score.
    pub fn risk_band(&self) -> RiskLevel {
        match self.risk_score {
            70..=u8::MAX => RiskLevel::High,
            40..=69 => RiskLevel::Medium,
            _ => RiskLevel::Low,
        }
    }
}

/// A standing safeguard listed on the security page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreventiveAction {
    pub action: String,
    pub active: bool,
}

/// A headline number on the security page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecurityMetric {
    pub label: String,
    pub value: String,
}

/// The live anomaly banner at the top of the security page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiveAnomaly {
    pub title: String,
    pub timestamp: String,
    pub pattern: String,
    /// Observations about the trigger, source and window.
    pub signals: Vec<String>,
    /// Checks that cleared the anomaly.
    pub checks: Vec<String>,
    pub assessment: String,
}
