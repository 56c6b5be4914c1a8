use autoai_contracts::conversation::Scenario;
use autoai_contracts::error::{AutoAiError, AutoAiResult};
use tracing::debug;

/// The fixed scenario set and which one is current.
#[derive(Debug, Clone)]
pub struct ScenarioSelector {
    scenarios: Vec<Scenario>,
    current: usize,
}

impl ScenarioSelector {
    /// Build a selector starting at `initial_id`.
    ///
    /// Fails with `EmptyCatalog` when `scenarios` is empty and with
    /// `UnknownScenario` when `initial_id` is not among them.
    pub fn new(scenarios: Vec<Scenario>, initial_id: &str) -> AutoAiResult<Self> {
        if scenarios.is_empty() {
            return Err(AutoAiError::EmptyCatalog);
        }
        let current = scenarios
            .iter()
            .position(|s| s.id == initial_id)
            .ok_or_else(|| AutoAiError::UnknownScenario {
                id: initial_id.to_string(),
            })?;
        Ok(Self { scenarios, current })
    }

    pub fn current(&self) -> &Scenario {
        &self.scenarios[self.current]
    }

    pub fn scenarios(&self) -> &[Scenario] {
        &self.scenarios
    }

    /// Make `id` current. Returns false, leaving the selection alone, when
    /// no scenario has that id.
    pub fn select(&mut self, id: &str) -> bool {
        match self.scenarios.iter().position(|s| s.id == id) {
            Some(index) => {
                self.current = index;
                debug!(scenario = %id, "scenario selected");
                true
            }
            None => {
                debug!(scenario = %id, "ignoring unknown scenario");
                false
            }
        }
    }

    /// Id of the scenario after the current one, wrapping.
    pub fn next_id(&self) -> &str {
        &self.scenarios[(self.current + 1) % self.scenarios.len()].id
    }

    /// Id of the scenario before the current one, wrapping.
    pub fn previous_id(&self) -> &str {
        let len = self.scenarios.len();
        &self.scenarios[(self.current + len - 1) % len].id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use autoai_catalog::scenarios;

    fn selector() -> ScenarioSelector {
        ScenarioSelector::new(scenarios::all(), "urgent").unwrap()
    }

    #[test]
    fn empty_scenario_set_is_an_error() {
        match ScenarioSelector::new(Vec::new(), "urgent") {
            Err(AutoAiError::EmptyCatalog) => {}
            other => panic!("expected EmptyCatalog, got {:?}", other),
        }
    }

    #[test]
    fn unknown_initial_id_is_an_error() {
        match ScenarioSelector::new(scenarios::all(), "weekend") {
            Err(AutoAiError::UnknownScenario { id }) => assert_eq!(id, "weekend"),
            other => panic!("expected UnknownScenario, got {:?}", other),
        }
    }

    #[test]
    fn select_known_id_replaces_current() {
        let mut sel = selector();
        assert!(sel.select("rca"));
        assert_eq!(sel.current().id, "rca");
        assert_eq!(sel.next_id(), "urgent");
    }

    #[test]
    fn select_unknown_id_is_a_no_op() {
        let mut sel = selector();
        sel.select("fleet");
        assert!(!sel.select("weekend"));
        assert_eq!(sel.current().id, "fleet");
    }

    #[test]
    fn neighbours_wrap_around() {
        let mut sel = selector();
        assert_eq!(sel.previous_id(), "rca");
        assert_eq!(sel.next_id(), "declined");
        sel.select("rca");
        assert_eq!(sel.next_id(), "urgent");
    }
}
