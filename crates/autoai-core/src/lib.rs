//! # autoai-core
//!
//! View models behind the AutoAI demo screens.
//!
//! - [`shell::Shell`] owns the [`router::PageRouter`] and the mounted page
//!   view, tearing views down when the user navigates away.
//! - [`voice::VoiceAgentView`] combines a [`selector::ScenarioSelector`]
//!   with a [`transcript::TranscriptViewModel`], whose deferred
//!   acknowledgements are deadlines polled by the host loop.
//! - [`dashboard::DashboardView`] tracks the fleet/single toggle and the
//!   selected vehicle.
//!
//! Everything is single-threaded and synchronous. Time comes from a
//! [`traits::Clock`] so hosts and tests control it.

pub mod dashboard;
pub mod router;
pub mod selector;
pub mod shell;
pub mod traits;
pub mod transcript;
pub mod voice;

pub use shell::{PageView, Shell};
pub use traits::{Clock, SystemClock};
#[cfg(any(test, feature = "test-util"))]
pub use traits::ManualClock;
