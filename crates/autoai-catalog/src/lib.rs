//! # autoai-catalog
//!
//! Immutable demo content for the AutoAI predictive maintenance demo:
//! the scripted voice-agent scenarios, fleet and telemetry records, the
//! security page, the landing/manufacturing/innovation showcase, plus the
//! aggregate metrics derived from them.
//!
//! All data is hardcoded and fictional. Nothing here talks to a vehicle,
//! a service center or a security system.

pub mod fleet;
pub mod metrics;
pub mod scenarios;
pub mod security;
pub mod showcase;

use autoai_contracts::conversation::Scenario;
use autoai_contracts::fleet::{AgentNode, EnginePoint, SecurityAlert, ServiceAppointment, Vehicle};
use autoai_contracts::security::{
    AgentActivity, AlertRecord, LiveAnomaly, PreventiveAction, SecurityMetric,
};
use autoai_contracts::showcase::{Capability, DefectRecord, InnovationFeature};
use serde::Serialize;
use tracing::debug;

/// Product name shown in the header.
pub const BRAND: &str = "AutoAI";

/// Every record the presentation layer can show, built once.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    pub scenarios: Vec<Scenario>,
    pub vehicles: Vec<Vehicle>,
    pub upcoming_services: Vec<ServiceAppointment>,
    pub security_alerts: Vec<SecurityAlert>,
    pub engine_telemetry: Vec<EnginePoint>,
    pub agent_nodes: Vec<AgentNode>,
    pub agent_activity: Vec<AgentActivity>,
    pub alert_history: Vec<AlertRecord>,
    pub preventive_actions: Vec<PreventiveAction>,
    pub security_metrics: Vec<SecurityMetric>,
    pub live_anomaly: LiveAnomaly,
    pub capabilities: Vec<Capability>,
    pub defects: Vec<DefectRecord>,
    pub innovation_features: Vec<InnovationFeature>,
}

impl Catalog {
    /// The built-in demo content.
    pub fn builtin() -> Self {
        let catalog = Catalog {
            scenarios: scenarios::all(),
            vehicles: fleet::vehicles(),
            upcoming_services: fleet::upcoming_services(),
            security_alerts: fleet::security_alerts(),
            engine_telemetry: fleet::engine_telemetry(),
            agent_nodes: fleet::agent_nodes(),
            agent_activity: security::agent_activity(),
            alert_history: security::alert_history(),
            preventive_actions: security::preventive_actions(),
            security_metrics: security::security_metrics(),
            live_anomaly: security::live_anomaly(),
            capabilities: showcase::capabilities(),
            defects: showcase::defects(),
            innovation_features: showcase::innovation_features(),
        };
        debug!(
            scenarios = catalog.scenarios.len(),
            vehicles = catalog.vehicles.len(),
            "built-in catalog loaded"
        );
        catalog
    }

    pub fn scenario(&self, id: &str) -> Option<&Scenario> {
        self.scenarios.iter().find(|s| s.id == id)
    }

    pub fn vehicle(&self, id: &str) -> Option<&Vehicle> {
        self.vehicles.iter().find(|v| v.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use autoai_contracts::conversation::{MessageCategory, MessageRole, RiskLevel};
    use autoai_contracts::fleet::AgentStatus;
    use std::collections::HashSet;

    // ── Helpers ──────────────────────────────────────────────────────────────

    fn vehicle_with(id: &str, health_score: u8, alerts: u32) -> Vehicle {
        Vehicle {
            id: id.to_string(),
            model: "Test Model".to_string(),
            location: "Pune, India".to_string(),
            health_score,
            alerts,
            next_service: "Nov 1".to_string(),
        }
    }

    // ── Scenarios ────────────────────────────────────────────────────────────

    #[test]
    fn four_scenarios_in_selector_order() {
        let ids: Vec<String> = scenarios::all().into_iter().map(|s| s.id).collect();
        assert_eq!(ids, vec!["urgent", "declined", "fleet", "rca"]);
        assert_eq!(scenarios::ids(), vec!["urgent", "declined", "fleet", "rca"]);
    }

    #[test]
    fn urgent_opens_with_critical_alert() {
        let urgent = scenarios::find("urgent").unwrap();
        assert_eq!(urgent.name, "Critical Failure");
        assert_eq!(urgent.messages[0].category, Some(MessageCategory::Urgent));
        assert_eq!(urgent.messages[0].role, MessageRole::Agent);
        assert_eq!(urgent.behavior_log[0].risk, RiskLevel::Critical);
    }

    #[test]
    fn find_unknown_scenario_is_none() {
        assert!(scenarios::find("weekend").is_none());
        assert!(Catalog::builtin().scenario("weekend").is_none());
    }

    #[test]
    fn message_ids_unique_within_each_scenario() {
        for scenario in scenarios::all() {
            let ids: HashSet<&str> = scenario.messages.iter().map(|m| m.id.as_str()).collect();
            assert_eq!(ids.len(), scenario.messages.len(), "scenario {}", scenario.id);
        }
    }

    #[test]
    fn user_messages_never_carry_a_category() {
        for scenario in scenarios::all() {
            for msg in &scenario.messages {
                if msg.role == MessageRole::User {
                    assert!(msg.category.is_none(), "{}#{}", scenario.id, msg.id);
                } else {
                    assert!(msg.category.is_some(), "{}#{}", scenario.id, msg.id);
                }
            }
        }
    }

    #[test]
    fn every_scenario_has_a_behavior_log() {
        for scenario in scenarios::all() {
            assert!(!scenario.behavior_log.is_empty(), "scenario {}", scenario.id);
        }
    }

    // ── Fleet ────────────────────────────────────────────────────────────────

    #[test]
    fn vehicle_health_scores_in_range() {
        for v in fleet::vehicles() {
            assert!(v.health_score <= 100, "{}", v.id);
        }
    }

    #[test]
    fn scheduling_agent_is_the_only_pending_node() {
        let pending: Vec<String> = fleet::agent_nodes()
            .into_iter()
            .filter(|n| n.status == AgentStatus::Pending)
            .map(|n| n.name)
            .collect();
        assert_eq!(pending, vec!["Scheduling"]);
    }

    #[test]
    fn upcoming_services_reference_known_vehicles() {
        let catalog = Catalog::builtin();
        for appt in &catalog.upcoming_services {
            assert!(catalog.vehicle(&appt.vehicle).is_some(), "{}", appt.vehicle);
        }
    }

    // ── Metrics ──────────────────────────────────────────────────────────────

    #[test]
    fn builtin_fleet_summary() {
        let summary = metrics::fleet_summary(&fleet::vehicles());
        assert_eq!(summary.vehicle_count, 6);
        assert_eq!(summary.active_alerts, 8);
        assert_eq!(summary.mean_health, Some(82));
        assert_eq!(summary.agents_active, "6/6");
    }

    #[test]
    fn mean_health_rounds_half_up() {
        let fleet = vec![vehicle_with("a", 80, 0), vehicle_with("b", 81, 0)];
        assert_eq!(metrics::mean_health_score(&fleet), Some(81));

        let fleet = vec![vehicle_with("a", 80, 0), vehicle_with("b", 80, 0), vehicle_with("c", 81, 0)];
        assert_eq!(metrics::mean_health_score(&fleet), Some(80));
    }

    #[test]
    fn mean_health_of_empty_fleet_is_none() {
        assert_eq!(metrics::mean_health_score(&[]), None);
        let summary = metrics::fleet_summary(&[]);
        assert_eq!(summary.vehicle_count, 0);
        assert_eq!(summary.active_alerts, 0);
    }

    #[test]
    fn healthy_count_uses_threshold() {
        assert_eq!(metrics::healthy_count(&fleet::vehicles()), 3);
    }

    // ── Security ─────────────────────────────────────────────────────────────

    #[test]
    fn alert_history_risk_bands() {
        let bands: Vec<RiskLevel> = security::alert_history().iter().map(|a| a.risk_band()).collect();
        assert_eq!(
            bands,
            vec![RiskLevel::Medium, RiskLevel::Low, RiskLevel::High, RiskLevel::Medium, RiskLevel::High]
        );
    }

    #[test]
    fn catalog_serializes_with_camel_case_keys() {
        let value = serde_json::to_value(Catalog::builtin()).unwrap();
        assert_eq!(value["vehicles"][0]["healthScore"], 92);
        assert_eq!(value["scenarios"][0]["behaviorLog"][0]["risk"], "critical");
        assert!(value["liveAnomaly"]["pattern"].as_str().unwrap().contains("C-2024-7845"));
    }
}
