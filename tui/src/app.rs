//! Application state and key handling.

use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::debug;

use autoai_contracts::page::Page;
use autoai_core::Shell;

/// Whether keystrokes drive the UI or go into the message composer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Editing,
}

pub struct App {
    pub shell: Shell,
    pub input_mode: InputMode,
    /// Shown in the footer until the next key press.
    pub status: Option<String>,
}

impl App {
    pub fn new(shell: Shell) -> Self {
        Self {
            shell,
            input_mode: InputMode::Normal,
            status: None,
        }
    }

    /// Handle one key press. Returns `true` when the app should quit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }
        self.status = None;
        match self.input_mode {
            InputMode::Editing => {
                self.handle_editing(key);
                false
            }
            InputMode::Normal => self.handle_normal(key),
        }
    }

    fn handle_editing(&mut self, key: KeyEvent) {
        let Some(voice) = self.shell.voice_mut() else {
            self.input_mode = InputMode::Normal;
            return;
        };
        let transcript = voice.transcript_mut();
        match key.code {
            KeyCode::Esc => self.input_mode = InputMode::Normal,
            KeyCode::Enter => {
                if !transcript.submit_composer() {
                    debug!("ignoring blank submission");
                }
            }
            KeyCode::Backspace => transcript.pop_char(),
            KeyCode::Char(c) => transcript.push_char(c),
            _ => {}
        }
    }

    fn handle_normal(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => return true,

            // Navigation.
            KeyCode::Char(c @ '1'..='6') => {
                let index = c as usize - '1' as usize;
                if let Some(page) = Page::from_index(index) {
                    self.shell.select(page);
                }
            }
            KeyCode::Tab => self.shell.toggle_menu(),
            KeyCode::Esc if self.shell.menu_open() => self.shell.toggle_menu(),
            KeyCode::Char('h') => self.shell.home(),
            KeyCode::Char('v') => self.shell.quick_access(),

            _ => match self.shell.current_page() {
                Page::VoiceAgent => self.handle_voice_key(key),
                Page::Dashboard => self.handle_dashboard_key(key),
                _ => {}
            },
        }
        false
    }

    fn handle_voice_key(&mut self, key: KeyEvent) {
        let Some(voice) = self.shell.voice_mut() else {
            return;
        };
        match key.code {
            KeyCode::Left => {
                voice.previous_scenario();
            }
            KeyCode::Right => {
                voice.next_scenario();
            }
            KeyCode::Char('i') | KeyCode::Enter => self.input_mode = InputMode::Editing,
            KeyCode::Char('b') => voice.toggle_behavior_log(),
            KeyCode::Char('o') => voice.toggle_voice_mode(),
            KeyCode::Char(' ') => voice.toggle_listening(),
            KeyCode::Char('k') => voice.toggle_speaking(),
            _ => {}
        }
    }

    fn handle_dashboard_key(&mut self, key: KeyEvent) {
        let Some(dashboard) = self.shell.dashboard_mut() else {
            return;
        };
        match key.code {
            KeyCode::Char('f') => dashboard.toggle_mode(),
            KeyCode::Char('n') => dashboard.next_vehicle(),
            _ => {}
        }
    }

    /// How long the event loop may block: one tick, or less if a reply is due
    /// sooner.
    pub fn poll_timeout(&self, tick: Duration, now: Instant) -> Duration {
        match self.shell.next_deadline() {
            Some(deadline) => tick.min(deadline.saturating_duration_since(now)),
            None => tick,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use autoai_catalog::Catalog;
    use autoai_config::Settings;
    use autoai_contracts::conversation::MessageRole;
    use autoai_core::{Clock, ManualClock};

    // ── Helpers ──────────────────────────────────────────────────────────────

    fn app_on(page: Page) -> (App, Arc<ManualClock>) {
        let clock = Arc::new(ManualClock::default());
        let mut settings = Settings::default();
        settings.shell.initial_page = page;
        let shell = Shell::new(Catalog::builtin(), &settings, clock.clone()).unwrap();
        (App::new(shell), clock)
    }

    fn press(app: &mut App, code: KeyCode) -> bool {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    // ── Navigation ───────────────────────────────────────────────────────────

    #[test]
    fn digits_select_pages() {
        let (mut app, _clock) = app_on(Page::Landing);
        press(&mut app, KeyCode::Char('5'));
        assert_eq!(app.shell.current_page(), Page::Security);
        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.shell.current_page(), Page::Dashboard);
        press(&mut app, KeyCode::Char('h'));
        assert_eq!(app.shell.current_page(), Page::Landing);
        press(&mut app, KeyCode::Char('v'));
        assert_eq!(app.shell.current_page(), Page::VoiceAgent);
    }

    #[test]
    fn tab_toggles_menu_and_selection_closes_it() {
        let (mut app, _clock) = app_on(Page::Landing);
        press(&mut app, KeyCode::Tab);
        assert!(app.shell.menu_open());
        press(&mut app, KeyCode::Char('4'));
        assert!(!app.shell.menu_open());
        assert_eq!(app.shell.current_page(), Page::Manufacturing);
    }

    #[test]
    fn q_and_ctrl_c_quit() {
        let (mut app, _clock) = app_on(Page::Landing);
        assert!(press(&mut app, KeyCode::Char('q')));
        assert!(app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
    }

    // ── Voice agent ──────────────────────────────────────────────────────────

    #[test]
    fn compose_and_send_then_reply_arrives() {
        let (mut app, clock) = app_on(Page::VoiceAgent);
        let before = app.shell.voice().unwrap().transcript().len();

        press(&mut app, KeyCode::Char('i'));
        assert_eq!(app.input_mode, InputMode::Editing);
        type_text(&mut app, "quick question");
        assert!(!press(&mut app, KeyCode::Char('q')), "q is text while editing");
        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Enter);

        let transcript = app.shell.voice().unwrap().transcript();
        assert_eq!(transcript.len(), before + 1);
        assert_eq!(transcript.messages().last().unwrap().content, "quick question");
        assert_eq!(transcript.composer(), "");

        clock.advance(Duration::from_millis(1000));
        assert_eq!(app.shell.poll_replies(), 1);
        let last = app.shell.voice().unwrap().transcript().messages().last().unwrap().clone();
        assert_eq!(last.role, MessageRole::Agent);
    }

    #[test]
    fn enter_on_blank_composer_adds_nothing() {
        let (mut app, _clock) = app_on(Page::VoiceAgent);
        let before = app.shell.voice().unwrap().transcript().len();
        press(&mut app, KeyCode::Char('i'));
        type_text(&mut app, "   ");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.shell.voice().unwrap().transcript().len(), before);
    }

    #[test]
    fn esc_leaves_compose_mode() {
        let (mut app, _clock) = app_on(Page::VoiceAgent);
        press(&mut app, KeyCode::Char('i'));
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.input_mode, InputMode::Normal);
        assert!(press(&mut app, KeyCode::Char('q')));
    }

    #[test]
    fn arrows_cycle_scenarios() {
        let (mut app, _clock) = app_on(Page::VoiceAgent);
        press(&mut app, KeyCode::Right);
        assert_eq!(app.shell.voice().unwrap().scenario().id, "declined");
        press(&mut app, KeyCode::Left);
        press(&mut app, KeyCode::Left);
        assert_eq!(app.shell.voice().unwrap().scenario().id, "rca");
    }

    #[test]
    fn voice_toggles() {
        let (mut app, _clock) = app_on(Page::VoiceAgent);
        press(&mut app, KeyCode::Char('b'));
        press(&mut app, KeyCode::Char('o'));
        press(&mut app, KeyCode::Char(' '));
        let voice = app.shell.voice().unwrap();
        assert!(voice.show_behavior_log());
        assert!(voice.voice_mode());
        assert!(voice.listening());
    }

    #[test]
    fn poll_timeout_shrinks_for_pending_reply() {
        let (mut app, clock) = app_on(Page::VoiceAgent);
        let tick = Duration::from_millis(150);
        assert_eq!(app.poll_timeout(tick, clock.now()), tick);

        press(&mut app, KeyCode::Char('i'));
        type_text(&mut app, "hi");
        press(&mut app, KeyCode::Enter);
        clock.advance(Duration::from_millis(950));
        assert_eq!(app.poll_timeout(tick, clock.now()), Duration::from_millis(50));
    }

    // ── Dashboard ────────────────────────────────────────────────────────────

    #[test]
    fn dashboard_keys() {
        let (mut app, _clock) = app_on(Page::Dashboard);
        press(&mut app, KeyCode::Char('f'));
        press(&mut app, KeyCode::Char('n'));
        let dashboard = app.shell.dashboard().unwrap();
        assert_eq!(dashboard.mode(), autoai_core::dashboard::DashboardMode::Single);
        assert_eq!(dashboard.selected_vehicle().unwrap().id, "VH-2024-002");
    }
}
