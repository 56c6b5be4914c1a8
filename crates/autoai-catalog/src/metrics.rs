//! Aggregate figures for the dashboard header cards.
//!
//! Stateless; renderers recompute these on every frame.

use autoai_contracts::fleet::Vehicle;
use serde::Serialize;

/// Agents-active ratio. The agent network is static, so this never changes.
pub const AGENTS_ACTIVE: &str = "6/6";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FleetSummary {
    pub vehicle_count: usize,
    pub active_alerts: u32,
    /// `None` when there are no vehicles.
    pub mean_health: Option<u8>,
    pub agents_active: &'static str,
}

pub fn fleet_summary(vehicles: &[Vehicle]) -> FleetSummary {
    FleetSummary {
        vehicle_count: vehicles.len(),
        active_alerts: total_alerts(vehicles),
        mean_health: mean_health_score(vehicles),
        agents_active: AGENTS_ACTIVE,
    }
}

pub fn total_alerts(vehicles: &[Vehicle]) -> u32 {
    vehicles.iter().map(|v| v.alerts).sum()
}

/// Mean health score rounded to the nearest integer, halves rounding up.
pub fn mean_health_score(vehicles: &[Vehicle]) -> Option<u8> {
    if vehicles.is_empty() {
        return None;
    }
    let n = vehicles.len() as u64;
    let sum: u64 = vehicles.iter().map(|v| u64::from(v.health_score)).sum();
    // Each score is at most 255, so the rounded mean fits in a u8.
    u8::try_from((2 * sum + n) / (2 * n)).ok()
}

/// Vehicles at or above the healthy threshold.
pub fn healthy_count(vehicles: &[Vehicle]) -> usize {
    vehicles.iter().filter(|v| v.is_healthy()).count()
}
