//! Chase (marquee) effect
//!
//! A single lit channel marches across the array, advancing one step
//! per chase interval.

use embassy_time::Instant;

use super::Mode;
use crate::params::Params;

/// Chase mode - current position plus the time of the last advance
#[derive(Debug, Clone)]
pub struct ChaseMode {
    index: usize,
    last_advance: Instant,
}

impl ChaseMode {
    /// Create the mode at position zero.
    ///
    /// The frame stays dark until the first advance fires.
    pub const fn new(now: Instant) -> Self {
        Self {
            index: 0,
            last_advance: now,
        }
    }
}

impl<const N: usize> Mode<N> for ChaseMode {
    fn render(&mut self, now: Instant, params: &Params<N>, frame: &mut [u8; N]) {
        if now.duration_since(self.last_advance) >= params.chase_interval() {
            self.last_advance = now;
            self.index = (self.index + 1) % N;
            for (i, level) in frame.iter_mut().enumerate() {
                *level = if i == self.index { params.brightness() } else { 0 };
            }
        }
    }
}
