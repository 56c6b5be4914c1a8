//! The application shell: the page router plus whichever page view is
//! mounted.
//!
//! Navigating away from a page discards its view. The voice agent's
//! pending replies are cancelled on the way out, and coming back mounts a
//! fresh view in its initial state.

use std::sync::Arc;
use std::time::Instant;

use autoai_catalog::Catalog;
use autoai_config::{Settings, VoiceAgentSettings};
use autoai_contracts::error::AutoAiResult;
use autoai_contracts::page::Page;
use tracing::{debug, info};

use crate::dashboard::DashboardView;
use crate::router::PageRouter;
use crate::selector::ScenarioSelector;
use crate::traits::Clock;
use crate::voice::VoiceAgentView;

/// The view mounted for the current page.
#[derive(Debug)]
pub enum PageView {
    /// Pages with no state of their own.
    Static(Page),
    Dashboard(DashboardView),
    VoiceAgent(VoiceAgentView),
}

impl PageView {
    pub fn page(&self) -> Page {
        match self {
            PageView::Static(page) => *page,
            PageView::Dashboard(_) => Page::Dashboard,
            PageView::VoiceAgent(_) => Page::VoiceAgent,
        }
    }
}

#[derive(Debug)]
pub struct Shell {
    router: PageRouter,
    view: PageView,
    catalog: Catalog,
    /// Selector a fresh voice view starts from.
    initial_selector: ScenarioSelector,
    voice_settings: VoiceAgentSettings,
    clock: Arc<dyn Clock>,
}

impl Shell {
    /// Build the shell on `settings.shell.initial_page`.
    ///
    /// Fails when the catalog has no scenarios or the configured initial
    /// scenario is not among them.
    pub fn new(catalog: Catalog, settings: &Settings, clock: Arc<dyn Clock>) -> AutoAiResult<Self> {
        let initial_selector = ScenarioSelector::new(
            catalog.scenarios.clone(),
            &settings.voice_agent.initial_scenario,
        )?;
        let initial_page = settings.shell.initial_page;
        let mut shell = Self {
            router: PageRouter::new(initial_page),
            view: PageView::Static(initial_page),
            catalog,
            initial_selector,
            voice_settings: settings.voice_agent.clone(),
            clock,
        };
        shell.view = shell.mount(initial_page);
        info!(page = %initial_page, "shell started");
        Ok(shell)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn current_page(&self) -> Page {
        self.router.current()
    }

    pub fn menu_open(&self) -> bool {
        self.router.menu_open()
    }

    pub fn toggle_menu(&mut self) {
        self.router.toggle_menu();
    }

    pub fn view(&self) -> &PageView {
        &self.view
    }

    pub fn voice(&self) -> Option<&VoiceAgentView> {
        match &self.view {
            PageView::VoiceAgent(v) => Some(v),
            _ => None,
        }
    }

    pub fn voice_mut(&mut self) -> Option<&mut VoiceAgentView> {
        match &mut self.view {
            PageView::VoiceAgent(v) => Some(v),
            _ => None,
        }
    }

    pub fn dashboard(&self) -> Option<&DashboardView> {
        match &self.view {
            PageView::Dashboard(d) => Some(d),
            _ => None,
        }
    }

    pub fn dashboard_mut(&mut self) -> Option<&mut DashboardView> {
        match &mut self.view {
            PageView::Dashboard(d) => Some(d),
            _ => None,
        }
    }

    // ── Navigation ───────────────────────────────────────────────────────────

    /// Show `page`. Selecting the page already showing only closes the
    /// menu; its view keeps its state.
    pub fn select(&mut self, page: Page) {
        let previous = self.router.current();
        self.router.select(page);
        if previous == page {
            return;
        }
        self.unmount();
        self.view = self.mount(page);
    }

    /// Jump straight to the voice agent.
    pub fn quick_access(&mut self) {
        self.select(Page::VoiceAgent);
    }

    /// Jump to the landing page.
    pub fn home(&mut self) {
        self.select(Page::Landing);
    }

    /// Tear down the mounted view before the shell goes away.
    pub fn shutdown(&mut self) {
        self.unmount();
        self.view = PageView::Static(self.router.current());
    }

    fn mount(&self, page: Page) -> PageView {
        debug!(page = %page, "mounting page view");
        match page {
            Page::Dashboard => PageView::Dashboard(DashboardView::new(self.catalog.vehicles.clone())),
            Page::VoiceAgent => PageView::VoiceAgent(VoiceAgentView::new(
                self.initial_selector.clone(),
                &self.voice_settings,
                Arc::clone(&self.clock),
            )),
            other => PageView::Static(other),
        }
    }

    fn unmount(&mut self) {
        if let PageView::VoiceAgent(voice) = &mut self.view {
            voice.teardown();
        }
    }

    // ── Host loop ────────────────────────────────────────────────────────────

    /// Deliver due replies on the mounted voice view, if any.
    pub fn poll_replies(&mut self) -> usize {
        self.voice_mut().map_or(0, VoiceAgentView::poll_replies)
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.voice().and_then(VoiceAgentView::next_deadline)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::DashboardMode;
    use crate::traits::ManualClock;
    use std::time::Duration;

    // ── Helpers ──────────────────────────────────────────────────────────────

    fn shell_on(page: Page) -> (Shell, Arc<ManualClock>) {
        let clock = Arc::new(ManualClock::default());
        let mut settings = Settings::default();
        settings.shell.initial_page = page;
        let shell = Shell::new(Catalog::builtin(), &settings, clock.clone()).unwrap();
        (shell, clock)
    }

    // ── Tests ────────────────────────────────────────────────────────────────

    #[test]
    fn starts_on_configured_page() {
        let (shell, _clock) = shell_on(Page::Security);
        assert_eq!(shell.current_page(), Page::Security);
        assert_eq!(shell.view().page(), Page::Security);
    }

    #[test]
    fn every_page_mounts_its_view() {
        let (mut shell, _clock) = shell_on(Page::Landing);
        for page in Page::ALL {
            shell.select(page);
            assert_eq!(shell.current_page(), page);
            assert_eq!(shell.view().page(), page);
        }
    }

    #[test]
    fn empty_catalog_is_rejected() {
        let mut catalog = Catalog::builtin();
        catalog.scenarios.clear();
        let clock: Arc<dyn Clock> = Arc::new(ManualClock::default());
        match Shell::new(catalog, &Settings::default(), clock) {
            Err(autoai_contracts::error::AutoAiError::EmptyCatalog) => {}
            other => panic!("expected EmptyCatalog, got {:?}", other.map(|s| s.current_page())),
        }
    }

    #[test]
    fn quick_access_and_home() {
        let (mut shell, _clock) = shell_on(Page::Manufacturing);
        shell.quick_access();
        assert!(shell.voice().is_some());
        shell.home();
        assert_eq!(shell.current_page(), Page::Landing);
        assert!(shell.voice().is_none());
    }

    #[test]
    fn navigating_away_cancels_pending_reply() {
        let (mut shell, clock) = shell_on(Page::VoiceAgent);
        let seed_len = shell.voice().unwrap().transcript().len();
        shell.voice_mut().unwrap().transcript_mut().submit("hello");
        assert!(shell.next_deadline().is_some());

        shell.select(Page::Dashboard);
        assert_eq!(shell.next_deadline(), None);
        clock.advance(Duration::from_secs(2));
        assert_eq!(shell.poll_replies(), 0);

        shell.select(Page::VoiceAgent);
        clock.advance(Duration::from_secs(2));
        assert_eq!(shell.poll_replies(), 0);
        assert_eq!(shell.voice().unwrap().transcript().len(), seed_len);
    }

    #[test]
    fn remount_starts_from_initial_state() {
        let (mut shell, _clock) = shell_on(Page::VoiceAgent);
        shell.voice_mut().unwrap().change_scenario("rca");
        shell.select(Page::Landing);
        shell.select(Page::VoiceAgent);
        assert_eq!(shell.voice().unwrap().scenario().id, "urgent");

        shell.select(Page::Dashboard);
        shell.dashboard_mut().unwrap().toggle_mode();
        shell.select(Page::Security);
        shell.select(Page::Dashboard);
        assert_eq!(shell.dashboard().unwrap().mode(), DashboardMode::Fleet);
    }

    #[test]
    fn reselecting_current_page_keeps_view_state() {
        let (mut shell, clock) = shell_on(Page::VoiceAgent);
        shell.voice_mut().unwrap().transcript_mut().submit("hello");
        shell.toggle_menu();
        shell.select(Page::VoiceAgent);
        assert!(!shell.menu_open());

        clock.advance(Duration::from_millis(1000));
        assert_eq!(shell.poll_replies(), 1);
    }

    #[test]
    fn shutdown_cancels_pending_reply() {
        let (mut shell, clock) = shell_on(Page::VoiceAgent);
        shell.voice_mut().unwrap().transcript_mut().submit("bye");
        shell.shutdown();
        clock.advance(Duration::from_secs(2));
        assert_eq!(shell.poll_replies(), 0);
    }
}
