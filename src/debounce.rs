//! Debounced digital input.
//!
//! Converts a noisy boolean signal into clean edge events. A transition
//! is accepted only after the raw signal has stayed unchanged for longer
//! than the settle window, so contact chatter produces no edges.

use embassy_time::{Duration, Instant};

/// Default settle window for mechanical push buttons.
pub const DEFAULT_DEBOUNCE_WINDOW: Duration = Duration::from_millis(50);

/// A debounce-confirmed signal transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    /// The signal settled at the active (pressed) level.
    Rising,
    /// The signal settled at the inactive (released) level.
    Falling,
}

/// Debounce state for one digital input.
///
/// All state lives in named fields so the filter can be driven and
/// inspected without a control loop around it.
#[derive(Debug, Clone)]
pub struct Debouncer {
    window: Duration,
    last_raw: bool,
    last_change: Instant,
    stable: bool,
}

impl Debouncer {
    /// Create a debouncer with a custom settle window.
    ///
    /// The signal is assumed inactive (`false`) at startup.
    pub const fn new(window: Duration) -> Self {
        Self {
            window,
            last_raw: false,
            last_change: Instant::from_millis(0),
            stable: false,
        }
    }

    /// The currently accepted stable level.
    pub const fn stable(&self) -> bool {
        self.stable
    }

    /// Feed one raw sample taken at `now`.
    ///
    /// Returns at most one edge per genuine transition: `Rising` when the
    /// stable level becomes active, `Falling` when it becomes inactive.
    /// Any flip of the raw signal restarts the settle window.
    pub fn sample(&mut self, raw: bool, now: Instant) -> Option<Edge> {
        if raw != self.last_raw {
            self.last_change = now;
            self.last_raw = raw;
        }

        if now.duration_since(self.last_change) > self.window && raw != self.stable {
            self.stable = raw;
            return Some(if raw { Edge::Rising } else { Edge::Falling });
        }

        None
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE_WINDOW)
    }
}
