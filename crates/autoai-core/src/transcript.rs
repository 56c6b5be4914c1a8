//! The voice-agent conversation transcript.
//!
//! A transcript is seeded with a scenario's scripted messages and then only
//! grows. Submitting text appends a user message immediately and schedules
//! one agent acknowledgement `reply_delay` later. Deadlines live in the view
//! model itself; the host loop calls [`TranscriptViewModel::poll_replies`]
//! and uses [`TranscriptViewModel::next_deadline`] to size its wait. Nothing
//! runs in the background, so dropping or resetting the model is enough to
//! guarantee a cancelled reply never lands.

use std::collections::VecDeque;
use std::sync::Arc;
use std::time::{Duration, Instant};

use autoai_config::VoiceAgentSettings;
use autoai_contracts::conversation::{Message, MessageCategory};
use tracing::{debug, info};
use uuid::Uuid;

use crate::traits::Clock;

/// Whether an acknowledgement is still owed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyState {
    Idle,
    AwaitingResponse,
}

pub struct TranscriptViewModel {
    messages: Vec<Message>,
    composer: String,
    /// Reply deadlines, earliest first.
    pending: VecDeque<Instant>,
    reply_delay: Duration,
    acknowledgement: String,
    timestamp_format: String,
    clock: Arc<dyn Clock>,
}

impl TranscriptViewModel {
    pub fn new(seed: Vec<Message>, settings: &VoiceAgentSettings, clock: Arc<dyn Clock>) -> Self {
        Self {
            messages: seed,
            composer: String::new(),
            pending: VecDeque::new(),
            reply_delay: settings.reply_delay(),
            acknowledgement: settings.acknowledgement.clone(),
            timestamp_format: settings.timestamp_format.clone(),
            clock,
        }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn state(&self) -> ReplyState {
        if self.pending.is_empty() {
            ReplyState::Idle
        } else {
            ReplyState::AwaitingResponse
        }
    }

    pub fn pending_replies(&self) -> usize {
        self.pending.len()
    }

    // ── Composer ─────────────────────────────────────────────────────────────

    pub fn composer(&self) -> &str {
        &self.composer
    }

    pub fn set_composer(&mut self, text: impl Into<String>) {
        self.composer = text.into();
    }

    pub fn push_char(&mut self, c: char) {
        self.composer.push(c);
    }

    pub fn pop_char(&mut self) {
        self.composer.pop();
    }

    /// Submit whatever is in the composer.
    pub fn submit_composer(&mut self) -> bool {
        let text = self.composer.clone();
        self.submit(&text)
    }

    // ── Submission and replies ───────────────────────────────────────────────

    /// Append `text` as a user message and schedule the acknowledgement.
    ///
    /// Blank or whitespace-only text is ignored and returns false. On
    /// success the composer is cleared. Each submission schedules its own
    /// reply, so rapid submissions produce one acknowledgement apiece.
    pub fn submit(&mut self, text: &str) -> bool {
        if text.trim().is_empty() {
            return false;
        }
        let message = Message::user(
            Uuid::new_v4().to_string(),
            text,
            self.clock.display_time(&self.timestamp_format),
        );
        debug!(message_id = %message.id, len = text.len(), "user message submitted");
        self.messages.push(message);
        self.composer.clear();

        let deadline = self.clock.now() + self.reply_delay;
        let at = self.pending.partition_point(|d| *d <= deadline);
        self.pending.insert(at, deadline);
        true
    }

    /// Append every acknowledgement whose deadline has passed. Returns how
    /// many were appended.
    pub fn poll_replies(&mut self) -> usize {
        let now = self.clock.now();
        let mut fired = 0;
        while self.pending.front().is_some_and(|d| *d <= now) {
            self.pending.pop_front();
            let reply = Message::agent(
                Uuid::new_v4().to_string(),
                self.acknowledgement.clone(),
                self.clock.display_time(&self.timestamp_format),
                MessageCategory::Info,
            );
            debug!(message_id = %reply.id, "acknowledgement delivered");
            self.messages.push(reply);
            fired += 1;
        }
        fired
    }

    /// Earliest outstanding reply deadline.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.front().copied()
    }

    /// Drop every outstanding reply. Returns how many were dropped.
    pub fn cancel_pending(&mut self) -> usize {
        let cancelled = self.pending.len();
        if cancelled > 0 {
            info!(cancelled, "pending replies cancelled");
        }
        self.pending.clear();
        cancelled
    }

    /// Cancel outstanding replies and replace the transcript with `seed`.
    /// The composer keeps its text.
    pub fn reset(&mut self, seed: Vec<Message>) {
        self.cancel_pending();
        self.messages = seed;
    }
}

impl std::fmt::Debug for TranscriptViewModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TranscriptViewModel")
            .field("messages", &self.messages.len())
            .field("composer", &self.composer)
            .field("pending", &self.pending.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::ManualClock;
    use autoai_catalog::scenarios;
    use autoai_contracts::conversation::MessageRole;

    // ── Helpers ──────────────────────────────────────────────────────────────

    fn transcript() -> (TranscriptViewModel, Arc<ManualClock>) {
        let clock = Arc::new(ManualClock::default());
        let seed = scenarios::find("urgent").unwrap().messages;
        let model = TranscriptViewModel::new(seed, &VoiceAgentSettings::default(), clock.clone());
        (model, clock)
    }

    fn second() -> Duration {
        Duration::from_millis(1000)
    }

    // ── Submission ───────────────────────────────────────────────────────────

    #[test]
    fn submit_appends_user_message_then_acknowledgement() {
        let (mut t, clock) = transcript();
        let before = t.len();

        assert!(t.submit("Is my car safe?"));
        assert_eq!(t.len(), before + 1);
        let last = t.messages().last().unwrap();
        assert_eq!(last.role, MessageRole::User);
        assert_eq!(last.content, "Is my car safe?");
        assert_eq!(last.timestamp, "09:15 AM");
        assert!(last.category.is_none());
        assert_eq!(t.state(), ReplyState::AwaitingResponse);

        clock.advance(second());
        assert_eq!(t.poll_replies(), 1);
        assert_eq!(t.len(), before + 2);
        let reply = t.messages().last().unwrap();
        assert_eq!(reply.role, MessageRole::Agent);
        assert_eq!(reply.category, Some(MessageCategory::Info));
        assert_eq!(reply.content, "I understand your request. Let me check that for you...");
        assert_eq!(t.state(), ReplyState::Idle);
    }

    #[test]
    fn reply_waits_for_the_full_delay() {
        let (mut t, clock) = transcript();
        t.submit("hello");
        clock.advance(Duration::from_millis(999));
        assert_eq!(t.poll_replies(), 0);
        clock.advance(Duration::from_millis(1));
        assert_eq!(t.poll_replies(), 1);
        assert_eq!(t.poll_replies(), 0);
    }

    #[test]
    fn blank_submissions_are_ignored() {
        let (mut t, _clock) = transcript();
        let before = t.len();
        assert!(!t.submit(""));
        assert!(!t.submit("   "));
        assert!(!t.submit("\t\n"));
        assert_eq!(t.len(), before);
        assert_eq!(t.state(), ReplyState::Idle);
        assert_eq!(t.next_deadline(), None);
    }

    #[test]
    fn generated_ids_are_unique() {
        let (mut t, clock) = transcript();
        t.submit("one");
        t.submit("two");
        clock.advance(second());
        t.poll_replies();
        let ids: std::collections::HashSet<&str> = t.messages().iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids.len(), t.len());
    }

    #[test]
    fn overlapping_submissions_each_get_a_reply_in_order() {
        let (mut t, clock) = transcript();
        let before = t.len();
        t.submit("first");
        clock.advance(Duration::from_millis(400));
        t.submit("second");
        assert_eq!(t.pending_replies(), 2);

        clock.advance(Duration::from_millis(600));
        assert_eq!(t.poll_replies(), 1);
        assert_eq!(t.state(), ReplyState::AwaitingResponse);

        clock.advance(Duration::from_millis(400));
        assert_eq!(t.poll_replies(), 1);
        assert_eq!(t.len(), before + 4);
        assert_eq!(t.state(), ReplyState::Idle);
    }

    #[test]
    fn next_deadline_is_submit_time_plus_delay() {
        let (mut t, clock) = transcript();
        let start = clock.now();
        t.submit("hi");
        assert_eq!(t.next_deadline(), Some(start + second()));
    }

    // ── Composer ─────────────────────────────────────────────────────────────

    #[test]
    fn submit_composer_clears_only_on_success() {
        let (mut t, _clock) = transcript();
        t.set_composer("  ");
        assert!(!t.submit_composer());
        assert_eq!(t.composer(), "  ");

        t.set_composer("");
        for c in "ok".chars() {
            t.push_char(c);
        }
        t.push_char('!');
        t.pop_char();
        assert!(t.submit_composer());
        assert_eq!(t.composer(), "");
        assert_eq!(t.messages().last().unwrap().content, "ok");
    }

    // ── Cancellation ─────────────────────────────────────────────────────────

    #[test]
    fn reset_cancels_pending_and_reseeds() {
        let (mut t, clock) = transcript();
        t.submit("hello");
        let seed = scenarios::find("rca").unwrap().messages;
        t.reset(seed.clone());
        assert_eq!(t.messages(), seed.as_slice());
        assert_eq!(t.state(), ReplyState::Idle);

        clock.advance(second() * 5);
        assert_eq!(t.poll_replies(), 0);
        assert_eq!(t.messages(), seed.as_slice());
    }

    #[test]
    fn cancel_pending_reports_count() {
        let (mut t, _clock) = transcript();
        t.submit("a");
        t.submit("b");
        assert_eq!(t.cancel_pending(), 2);
        assert_eq!(t.cancel_pending(), 0);
    }

    #[test]
    fn custom_settings_drive_delay_and_text() {
        let clock = Arc::new(ManualClock::default());
        let settings = VoiceAgentSettings {
            reply_delay_ms: 250,
            acknowledgement: "On it.".to_string(),
            timestamp_format: "%H:%M".to_string(),
            ..VoiceAgentSettings::default()
        };
        let mut t = TranscriptViewModel::new(Vec::new(), &settings, clock.clone());
        t.submit("status?");
        assert_eq!(t.messages()[0].timestamp, "09:15");
        clock.advance(Duration::from_millis(250));
        t.poll_replies();
        assert_eq!(t.messages()[1].content, "On it.");
    }
}
