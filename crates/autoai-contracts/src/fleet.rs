//! Fleet records shown on the live dashboard.

use serde::{Deserialize, Serialize};

/// Health score at or above which a vehicle is shown as healthy.
pub const HEALTHY_THRESHOLD: u8 = 80;

/// A monitored vehicle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    pub id: String,
    pub model: String,
    pub location: String,
    /// 0–100.
    pub health_score: u8,
    /// Open alert count.
    pub alerts: u32,
    /// Display label, e.g. "Nov 15".
    pub next_service: String,
}

impl Vehicle {
    pub fn is_healthy(&self) -> bool {
        self.health_score >= HEALTHY_THRESHOLD
    }
}

/// A booked service visit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceAppointment {
    /// Vehicle identifier the visit is for.
    pub vehicle: String,
    pub service: String,
    /// Display label, e.g. "Oct 18, 10:00 AM".
    pub date: String,
    pub location: String,
}

impl ServiceAppointment {
    /// The date part of `date`, without the time of day.
    pub fn day_label(&self) -> &str {
        self.date.split(',').next().unwrap_or(&self.date)
    }
}

/// Severity of a dashboard security notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

/// A notice in the dashboard's security monitor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecurityAlert {
    /// Relative time label, e.g. "2 min ago".
    pub time: String,
    pub message: String,
    pub severity: Severity,
}

/// One sample of engine telemetry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnginePoint {
    /// Time-of-day label, e.g. "04:00".
    pub time: String,
    /// Coolant temperature in °C.
    pub temp: u16,
    pub rpm: u16,
    /// Battery voltage in volts.
    pub voltage: f64,
}

/// Role of an agent in the multi-agent network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentKind {
    Master,
    Diagnosis,
    Customer,
    Scheduling,
    Feedback,
    Manufacturing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentStatus {
    Active,
    Pending,
}

/// A node in an agent-network visualisation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentNode {
    pub name: String,
    pub kind: AgentKind,
    pub status: AgentStatus,
}
