//! The voice-agent page: scenario selector, transcript and the
//! presentation toggles around them.

use std::sync::Arc;
use std::time::Instant;

use autoai_config::VoiceAgentSettings;
use autoai_contracts::conversation::{BehaviorLogEntry, Scenario};
use tracing::{debug, info};

use crate::selector::ScenarioSelector;
use crate::traits::Clock;
use crate::transcript::TranscriptViewModel;

#[derive(Debug)]
pub struct VoiceAgentView {
    selector: ScenarioSelector,
    transcript: TranscriptViewModel,
    show_behavior_log: bool,
    voice_mode: bool,
    listening: bool,
    speaking: bool,
}

impl VoiceAgentView {
    /// Mount the view on the selector's current scenario.
    pub fn new(selector: ScenarioSelector, settings: &VoiceAgentSettings, clock: Arc<dyn Clock>) -> Self {
        let seed = selector.current().messages.clone();
        debug!(scenario = %selector.current().id, "voice agent mounted");
        Self {
            selector,
            transcript: TranscriptViewModel::new(seed, settings, clock),
            show_behavior_log: false,
            voice_mode: false,
            listening: false,
            speaking: false,
        }
    }

    pub fn scenario(&self) -> &Scenario {
        self.selector.current()
    }

    pub fn scenarios(&self) -> &[Scenario] {
        self.selector.scenarios()
    }

    pub fn transcript(&self) -> &TranscriptViewModel {
        &self.transcript
    }

    pub fn transcript_mut(&mut self) -> &mut TranscriptViewModel {
        &mut self.transcript
    }

    pub fn behavior_log(&self) -> &[BehaviorLogEntry] {
        &self.selector.current().behavior_log
    }

    // ── Scenario switching ───────────────────────────────────────────────────

    /// Switch to scenario `id`.
    ///
    /// A known id cancels pending replies, reseeds the transcript and
    /// collapses the behavior log. An unknown id changes nothing and
    /// returns false.
    pub fn change_scenario(&mut self, id: &str) -> bool {
        if !self.selector.select(id) {
            return false;
        }
        let seed = self.selector.current().messages.clone();
        self.transcript.reset(seed);
        self.show_behavior_log = false;
        info!(scenario = %id, "scenario changed");
        true
    }

    pub fn next_scenario(&mut self) -> bool {
        let id = self.selector.next_id().to_string();
        self.change_scenario(&id)
    }

    pub fn previous_scenario(&mut self) -> bool {
        let id = self.selector.previous_id().to_string();
        self.change_scenario(&id)
    }

    // ── Toggles ──────────────────────────────────────────────────────────────

    pub fn show_behavior_log(&self) -> bool {
        self.show_behavior_log
    }

    pub fn toggle_behavior_log(&mut self) {
        self.show_behavior_log = !self.show_behavior_log;
    }

    pub fn voice_mode(&self) -> bool {
        self.voice_mode
    }

    /// Leaving voice mode also stops listening.
    pub fn toggle_voice_mode(&mut self) {
        self.voice_mode = !self.voice_mode;
        if !self.voice_mode {
            self.listening = false;
        }
    }

    pub fn listening(&self) -> bool {
        self.listening
    }

    /// Only has an effect in voice mode.
    pub fn toggle_listening(&mut self) {
        if self.voice_mode {
            self.listening = !self.listening;
        }
    }

    pub fn speaking(&self) -> bool {
        self.speaking
    }

    pub fn toggle_speaking(&mut self) {
        self.speaking = !self.speaking;
    }

    /// The avatar animates while listening or speaking.
    pub fn avatar_active(&self) -> bool {
        self.listening || self.speaking
    }

    // ── Host loop ────────────────────────────────────────────────────────────

    pub fn poll_replies(&mut self) -> usize {
        self.transcript.poll_replies()
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.transcript.next_deadline()
    }

    /// Called when the page is unmounted.
    pub fn teardown(&mut self) {
        let cancelled = self.transcript.cancel_pending();
        debug!(cancelled, "voice agent unmounted");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::ManualClock;
    use crate::transcript::ReplyState;
    use autoai_catalog::scenarios;
    use autoai_contracts::conversation::{MessageCategory, RiskLevel};
    use std::time::Duration;

    fn view() -> (VoiceAgentView, Arc<ManualClock>) {
        let clock = Arc::new(ManualClock::default());
        let selector = ScenarioSelector::new(scenarios::all(), "urgent").unwrap();
        let view = VoiceAgentView::new(selector, &VoiceAgentSettings::default(), clock.clone());
        (view, clock)
    }

    #[test]
    fn mounts_on_initial_scenario_with_log_collapsed() {
        let (v, _clock) = view();
        assert_eq!(v.scenario().id, "urgent");
        assert_eq!(v.transcript().messages()[0].category, Some(MessageCategory::Urgent));
        assert_eq!(v.behavior_log()[0].risk, RiskLevel::Critical);
        assert!(!v.show_behavior_log());
    }

    #[test]
    fn change_scenario_reseeds_and_collapses_log() {
        let (mut v, _clock) = view();
        v.toggle_behavior_log();
        v.transcript_mut().submit("hello");

        assert!(v.change_scenario("declined"));
        let expected = scenarios::find("declined").unwrap();
        assert_eq!(v.transcript().messages(), expected.messages.as_slice());
        assert_eq!(v.behavior_log(), expected.behavior_log.as_slice());
        assert!(!v.show_behavior_log());
    }

    #[test]
    fn unknown_scenario_changes_nothing() {
        let (mut v, _clock) = view();
        v.toggle_behavior_log();
        v.transcript_mut().submit("hello");
        let before = v.transcript().messages().to_vec();

        assert!(!v.change_scenario("weekend"));
        assert_eq!(v.scenario().id, "urgent");
        assert_eq!(v.transcript().messages(), before.as_slice());
        assert!(v.show_behavior_log());
        assert_eq!(v.transcript().state(), ReplyState::AwaitingResponse);
    }

    #[test]
    fn pending_reply_never_lands_after_scenario_change() {
        let (mut v, clock) = view();
        v.transcript_mut().submit("is it safe?");
        v.change_scenario("fleet");
        clock.advance(Duration::from_secs(2));
        assert_eq!(v.poll_replies(), 0);
        assert_eq!(v.transcript().len(), scenarios::find("fleet").unwrap().messages.len());
    }

    #[test]
    fn pending_reply_never_lands_after_teardown() {
        let (mut v, clock) = view();
        let before = v.transcript().len();
        v.transcript_mut().submit("hello");
        v.teardown();
        clock.advance(Duration::from_secs(2));
        assert_eq!(v.poll_replies(), 0);
        assert_eq!(v.transcript().len(), before + 1);
        assert_eq!(v.next_deadline(), None);
    }

    #[test]
    fn cycling_scenarios_wraps() {
        let (mut v, _clock) = view();
        v.previous_scenario();
        assert_eq!(v.scenario().id, "rca");
        v.next_scenario();
        v.next_scenario();
        assert_eq!(v.scenario().id, "declined");
    }

    #[test]
    fn listening_requires_voice_mode() {
        let (mut v, _clock) = view();
        v.toggle_listening();
        assert!(!v.listening());

        v.toggle_voice_mode();
        v.toggle_listening();
        assert!(v.listening());
        assert!(v.avatar_active());

        v.toggle_voice_mode();
        assert!(!v.listening());
        assert!(!v.avatar_active());
    }

    #[test]
    fn speaking_activates_avatar() {
        let (mut v, _clock) = view();
        v.toggle_speaking();
        assert!(v.speaking());
        assert!(v.avatar_active());
    }
}
