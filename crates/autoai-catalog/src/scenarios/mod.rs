//! The four scripted voice-agent conversations.
//!
//! Each scenario module exposes an `ID` and a `scenario()` constructor.
//! Message ids are unique within a scenario; the transcript view appends
//! generated UUIDs after them.

pub mod declined;
pub mod fleet_scheduling;
pub mod rca;
pub mod urgent;

use autoai_contracts::conversation::Scenario;

/// All scenarios in selector order.
pub fn all() -> Vec<Scenario> {
    vec![
        urgent::scenario(),
        declined::scenario(),
        fleet_scheduling::scenario(),
        rca::scenario(),
    ]
}

/// Look up a scenario by identifier.
pub fn find(id: &str) -> Option<Scenario> {
    all().into_iter().find(|s| s.id == id)
}

/// Scenario identifiers in selector order.
pub fn ids() -> Vec<&'static str> {
    vec![urgent::ID, declined::ID, fleet_scheduling::ID, rca::ID]
}
