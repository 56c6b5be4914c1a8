//! Records for the landing, manufacturing and innovation pages.

use serde::{Deserialize, Serialize};

/// A capability card on the landing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capability {
    pub title: String,
    pub summary: String,
}

/// Progress of a corrective/preventive action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CapaStatus {
    Open,
    InProgress,
    Closed,
}

impl CapaStatus {
    pub fn label(self) -> &'static str {
        match self {
            CapaStatus::Open => "open",
            CapaStatus::InProgress => "in progress",
            CapaStatus::Closed => "closed",
        }
    }
}

/// A recurring defect traced back to manufacturing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DefectRecord {
    pub code: String,
    pub component: String,
    pub affected_vehicles: u32,
    pub supplier: String,
    pub root_cause: String,
    pub capa_status: CapaStatus,
    pub report_id: String,
}

/// An entry on the innovation showcase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InnovationFeature {
    pub title: String,
    pub summary: String,
    /// e.g. "pilot", "live", "research".
    pub maturity: String,
}
