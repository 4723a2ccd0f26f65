//! Independent per-LED blink effect
//!
//! Every channel toggles on its own clock with its own interval.
//! Channels are fully decoupled; there is no shared timer.

use embassy_time::{Duration, Instant};

use super::Mode;
use crate::params::{MIN_INTERVAL_MS, Params};

/// Per-LED blink mode - one on/off flag and toggle clock per channel
#[derive(Debug, Clone)]
pub struct PerLedMode<const N: usize> {
    on: [bool; N],
    last_toggle: [Instant; N],
}

impl<const N: usize> PerLedMode<N> {
    /// Create the mode with every channel off and its clock at `now`.
    pub const fn new(now: Instant) -> Self {
        Self {
            on: [false; N],
            last_toggle: [now; N],
        }
    }
}

impl<const N: usize> Mode<N> for PerLedMode<N> {
    fn render(&mut self, now: Instant, params: &Params<N>, frame: &mut [u8; N]) {
        let floor = Duration::from_millis(MIN_INTERVAL_MS);
        for i in 0..N {
            let interval = params.led_interval(i).max(floor);
            if now.duration_since(self.last_toggle[i]) >= interval {
                self.last_toggle[i] = now;
                self.on[i] = !self.on[i];
                frame[i] = if self.on[i] { params.brightness() } else { 0 };
            }
        }
    }
}
