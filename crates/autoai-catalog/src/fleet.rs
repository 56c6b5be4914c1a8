//! Fleet content for the live dashboard.

use autoai_contracts::fleet::{
    AgentKind, AgentNode, AgentStatus, EnginePoint, SecurityAlert, ServiceAppointment, Severity,
    Vehicle,
};

// ── Vehicles ─────────────────────────────────────────────────────────────────

pub fn vehicles() -> Vec<Vehicle> {
    [
        ("VH-2024-001", "Tesla Model S", "Mumbai, India", 92, 0, "Nov 15"),
        ("VH-2024-002", "Tata Nexon EV", "Pune, India", 78, 2, "Oct 20"),
        ("VH-2024-003", "Mahindra XUV700", "Bangalore, India", 65, 3, "Oct 18"),
        ("VH-2024-004", "Hyundai Ioniq 5", "Delhi, India", 95, 0, "Nov 25"),
        ("VH-2024-005", "MG ZS EV", "Chennai, India", 88, 1, "Nov 5"),
        ("VH-2024-006", "BYD Atto 3", "Hyderabad, India", 72, 2, "Oct 22"),
    ]
    .into_iter()
    .map(|(id, model, location, health_score, alerts, next_service)| Vehicle {
        id: id.to_string(),
        model: model.to_string(),
        location: location.to_string(),
        health_score,
        alerts,
        next_service: next_service.to_string(),
    })
    .collect()
}

// ── Upcoming services ────────────────────────────────────────────────────────

pub fn upcoming_services() -> Vec<ServiceAppointment> {
    [
        ("VH-2024-003", "Brake Pad Replacement", "Oct 18, 10:00 AM", "Hero Motors, Bangalore"),
        ("VH-2024-002", "Battery Check & Diagnostics", "Oct 20, 2:00 PM", "EV Care Center, Pune"),
        ("VH-2024-006", "Tire Rotation & Alignment", "Oct 22, 11:00 AM", "AutoTech Hub, Hyderabad"),
    ]
    .into_iter()
    .map(|(vehicle, service, date, location)| ServiceAppointment {
        vehicle: vehicle.to_string(),
        service: service.to_string(),
        date: date.to_string(),
        location: location.to_string(),
    })
    .collect()
}

// ── Security monitor ─────────────────────────────────────────────────────────

pub fn security_alerts() -> Vec<SecurityAlert> {
    [
        ("2 min ago", "Unusual data access pattern detected", Severity::Medium),
        ("15 min ago", "Agent behavior verified - all normal", Severity::Low),
        ("1 hour ago", "UEBA scan completed successfully", Severity::Low),
    ]
    .into_iter()
    .map(|(time, message, severity)| SecurityAlert {
        time: time.to_string(),
        message: message.to_string(),
        severity,
    })
    .collect()
}

// ── Engine telemetry ─────────────────────────────────────────────────────────

/// A day of samples at four-hour intervals, warming steadily.
pub fn engine_telemetry() -> Vec<EnginePoint> {
    [
        ("00:00", 85, 1200, 12.6),
        ("04:00", 88, 1500, 12.5),
        ("08:00", 92, 2200, 12.4),
        ("12:00", 95, 2800, 12.3),
        ("16:00", 98, 3200, 12.2),
        ("20:00", 102, 2900, 12.1),
        ("24:00", 105, 2400, 12.0),
    ]
    .into_iter()
    .map(|(time, temp, rpm, voltage)| EnginePoint {
        time: time.to_string(),
        temp,
        rpm,
        voltage,
    })
    .collect()
}

// ── Agent network ────────────────────────────────────────────────────────────

/// Nodes of the agent network, master first.
///
/// The security monitor runs as a diagnosis-class agent.
pub fn agent_nodes() -> Vec<AgentNode> {
    [
        ("Master", AgentKind::Master, AgentStatus::Active),
        ("Diagnosis", AgentKind::Diagnosis, AgentStatus::Active),
        ("Customer", AgentKind::Customer, AgentStatus::Active),
        ("Scheduling", AgentKind::Scheduling, AgentStatus::Pending),
        ("Feedback", AgentKind::Feedback, AgentStatus::Active),
        ("Manufacturing", AgentKind::Manufacturing, AgentStatus::Active),
        ("Security", AgentKind::Diagnosis, AgentStatus::Active),
    ]
    .into_iter()
    .map(|(name, kind, status)| AgentNode {
        name: name.to_string(),
        kind,
        status,
    })
    .collect()
}
