use autoai_contracts::page::Page;
use tracing::debug;

/// Which top-level page is showing, and whether the navigation menu is open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRouter {
    current: Page,
    menu_open: bool,
}

impl PageRouter {
    pub fn new(initial: Page) -> Self {
        Self {
            current: initial,
            menu_open: false,
        }
    }

    pub fn current(&self) -> Page {
        self.current
    }

    /// Show `page` and close the menu.
    pub fn select(&mut self, page: Page) {
        if page != self.current {
            debug!(from = %self.current, to = %page, "page selected");
        }
        self.current = page;
        self.menu_open = false;
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }
}

impl Default for PageRouter {
    fn default() -> Self {
        Self::new(Page::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_then_current_round_trips_every_page() {
        let mut router = PageRouter::default();
        for page in Page::ALL {
            router.select(page);
            assert_eq!(router.current(), page);
        }
    }

    #[test]
    fn default_page_is_landing() {
        assert_eq!(PageRouter::default().current(), Page::Landing);
    }

    #[test]
    fn select_closes_the_menu() {
        let mut router = PageRouter::new(Page::Dashboard);
        router.toggle_menu();
        assert!(router.menu_open());
        router.select(Page::Security);
        assert!(!router.menu_open());
        assert_eq!(router.current(), Page::Security);
    }

    #[test]
    fn reselecting_current_page_still_closes_menu() {
        let mut router = PageRouter::new(Page::Landing);
        router.toggle_menu();
        router.select(Page::Landing);
        assert!(!router.menu_open());
    }
}
