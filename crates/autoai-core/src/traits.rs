//! Seams between the view models and the outside world.
//!
//! The only one today is time: the transcript stamps submitted messages
//! with a wall-clock label and schedules replies against a monotonic
//! instant. Both come from a [`Clock`] so tests can drive them.

use std::fmt::{Debug, Write};
#[cfg(any(test, feature = "test-util"))]
use std::sync::Mutex;
#[cfg(any(test, feature = "test-util"))]
use std::time::Duration;
use std::time::Instant;

use chrono::{Local, NaiveTime};

/// Source of the current instant and of display timestamps.
pub trait Clock: Debug + Send + Sync {
    /// Monotonic now, used for reply deadlines.
    fn now(&self) -> Instant;

    /// Wall-clock time of day rendered with a chrono `strftime` format.
    fn display_time(&self, format: &str) -> String;
}

/// Reads the system clocks. Display times use the local timezone.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }

    fn display_time(&self, format: &str) -> String {
        render_time(&Local::now().time(), format)
    }
}

/// A clock that only moves when told to.
///
/// Display times start at `start_of_day` and advance with the instant.
/// Available to other crates' tests through the `test-util` feature.
#[cfg(any(test, feature = "test-util"))]
#[derive(Debug)]
pub struct ManualClock {
    origin: Instant,
    elapsed: Mutex<Duration>,
    start_of_day: NaiveTime,
}

#[cfg(any(test, feature = "test-util"))]
impl ManualClock {
    pub fn new(start_of_day: NaiveTime) -> Self {
        Self {
            origin: Instant::now(),
            elapsed: Mutex::new(Duration::ZERO),
            start_of_day,
        }
    }

    /// Move the clock forward by `by`.
    pub fn advance(&self, by: Duration) {
        let mut elapsed = self.elapsed.lock().unwrap_or_else(|e| e.into_inner());
        *elapsed += by;
    }

    fn elapsed(&self) -> Duration {
        *self.elapsed.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[cfg(any(test, feature = "test-util"))]
impl Default for ManualClock {
    fn default() -> Self {
        Self::new(NaiveTime::from_hms_opt(9, 15, 0).unwrap_or(NaiveTime::MIN))
    }
}

#[cfg(any(test, feature = "test-util"))]
impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.origin + self.elapsed()
    }

    fn display_time(&self, format: &str) -> String {
        let offset = chrono::Duration::from_std(self.elapsed()).unwrap_or(chrono::Duration::zero());
        let (time, _) = self.start_of_day.overflowing_add_signed(offset);
        render_time(&time, format)
    }
}

/// chrono reports a malformed format through `fmt::Error`; fall back to
/// 24-hour time instead of panicking in `to_string`.
fn render_time(time: &NaiveTime, format: &str) -> String {
    let mut out = String::new();
    if write!(out, "{}", time.format(format)).is_err() {
        out.clear();
        let _ = write!(out, "{}", time.format("%H:%M"));
    }
    out
}
