//! Navigation pages.
//!
//! The shell shows exactly one page at a time. Pages are identified on the
//! command line and in configuration by their kebab-case id
//! (e.g. `voice-agent`).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AutoAiError;

/// One of the six pages reachable from the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Page {
    #[default]
    Landing,
    Dashboard,
    VoiceAgent,
    Manufacturing,
    Security,
    Innovation,
}

impl Page {
    /// Every page, in navigation-bar order.
    pub const ALL: [Page; 6] = [
        Page::Landing,
        Page::Dashboard,
        Page::VoiceAgent,
        Page::Manufacturing,
        Page::Security,
        Page::Innovation,
    ];

    /// Stable kebab-case identifier.
    pub fn id(self) -> &'static str {
        match self {
            Page::Landing => "landing",
            Page::Dashboard => "dashboard",
            Page::VoiceAgent => "voice-agent",
            Page::Manufacturing => "manufacturing",
            Page::Security => "security",
            Page::Innovation => "innovation",
        }
    }

    /// Label shown in the navigation bar.
    pub fn label(self) -> &'static str {
        match self {
            Page::Landing => "Home",
            Page::Dashboard => "Live Dashboard",
            Page::VoiceAgent => "Voice Agent",
            Page::Manufacturing => "Manufacturing",
            Page::Security => "Security & UEBA",
            Page::Innovation => "Innovation",
        }
    }

    /// Zero-based position in the navigation bar.
    pub fn index(self) -> usize {
        Page::ALL
            .iter()
            .position(|p| *p == self)
            .unwrap_or_default()
    }

    /// Page at a zero-based navigation position, if any.
    pub fn from_index(index: usize) -> Option<Page> {
        Page::ALL.get(index).copied()
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Page {
    type Err = AutoAiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Page::ALL
            .iter()
            .copied()
            .find(|p| p.id() == s)
            .ok_or_else(|| AutoAiError::UnknownPage {
                name: s.to_string(),
            })
    }
}
