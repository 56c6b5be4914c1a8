//! Content for the landing, manufacturing and innovation pages.
//!
//! The manufacturing defects are the ones the scenarios raise, so the
//! codes and report ids line up with the conversation text.

use autoai_contracts::showcase::{Capability, CapaStatus, DefectRecord, InnovationFeature};

// ── Landing ──────────────────────────────────────────────────────────────────

pub const TAGLINE: &str = "Predictive Maintenance";

pub fn capabilities() -> Vec<Capability> {
    [
        (
            "Predictive Diagnostics",
            "Telematics and sensor streams scored continuously so failures are caught before the driver notices.",
        ),
        (
            "Voice Agent",
            "A conversational agent that explains faults, books service and confirms appointments end to end.",
        ),
        (
            "Multi-Agent Orchestration",
            "A master agent coordinates diagnosis, customer, scheduling, feedback and manufacturing agents.",
        ),
        (
            "Manufacturing Feedback",
            "Recurring defects are traced to root cause and routed to quality teams as RCA/CAPA reports.",
        ),
        (
            "UEBA Security",
            "Every agent and user action is baselined, and anomalies are verified before access is granted.",
        ),
    ]
    .into_iter()
    .map(|(title, summary)| Capability {
        title: title.to_string(),
        summary: summary.to_string(),
    })
    .collect()
}

// ── Manufacturing ────────────────────────────────────────────────────────────

pub fn defects() -> Vec<DefectRecord> {
    vec![
        DefectRecord {
            code: "INFO-FRZ-2024-Q4".to_string(),
            component: "10.4\" Touchscreen Infotainment Module".to_string(),
            affected_vehicles: 47,
            supplier: "TechDisplay Systems Ltd".to_string(),
            root_cause: "Insufficient RAM allocation in firmware v2.3.1".to_string(),
            capa_status: CapaStatus::InProgress,
            report_id: "RC-2024-334".to_string(),
        },
        DefectRecord {
            code: "BRK-ABS-2024-Q4".to_string(),
            component: "ABS Sensor Module (Part ABS-NK-2024-X7)".to_string(),
            affected_vehicles: 23,
            supplier: "Hero Brake Components".to_string(),
            root_cause: "Sensor failure with low brake fluid pressure in Nexon EV fleet".to_string(),
            capa_status: CapaStatus::Open,
            report_id: "BR-2024-089".to_string(),
        },
        DefectRecord {
            code: "AC-CMP-2024-Q3".to_string(),
            component: "AC Compressor (City Compact)".to_string(),
            affected_vehicles: 9,
            supplier: "CoolFlow Automotive".to_string(),
            root_cause: "Bearing wear producing compressor noise".to_string(),
            capa_status: CapaStatus::Closed,
            report_id: "RC-2024-281".to_string(),
        },
    ]
}

// ── Innovation ───────────────────────────────────────────────────────────────

pub fn innovation_features() -> Vec<InnovationFeature> {
    [
        (
            "Battery Digital Twin",
            "Per-pack degradation model forecasting EV battery health months ahead.",
            "pilot",
        ),
        (
            "Over-the-Air Fixes",
            "Firmware corrections pushed fleet-wide once a CAPA is approved.",
            "live",
        ),
        (
            "Fleet Downtime Optimizer",
            "Batches multi-vehicle service into single-day, multi-bay slots.",
            "live",
        ),
        (
            "Supplier Quality Graph",
            "Links field failures to supplier batches to flag at-risk lots early.",
            "research",
        ),
    ]
    .into_iter()
    .map(|(title, summary, maturity)| InnovationFeature {
        title: title.to_string(),
        summary: summary.to_string(),
        maturity: maturity.to_string(),
    })
    .collect()
}
