//! Synchronized blink effect
//!
//! All channels toggle together between the brightness ceiling and off.

use embassy_time::Instant;

use super::Mode;
use crate::params::Params;

/// Blink mode - on/off flag plus the time of the last toggle
#[derive(Debug, Clone)]
pub struct BlinkMode {
    on: bool,
    last_toggle: Instant,
}

impl BlinkMode {
    /// Create the mode in its canonical off phase.
    pub const fn new(now: Instant) -> Self {
        Self {
            on: false,
            last_toggle: now,
        }
    }
}

impl<const N: usize> Mode<N> for BlinkMode {
    fn render(&mut self, now: Instant, params: &Params<N>, frame: &mut [u8; N]) {
        if now.duration_since(self.last_toggle) >= params.blink_interval() {
            self.last_toggle = now;
            self.on = !self.on;
            let level = if self.on { params.brightness() } else { 0 };
            frame.fill(level);
        }
    }
}
