//! Breathing fade effect
//!
//! Smooth sine-envelope fade across all channels. The brightness is
//! derived from `now` on every render rather than gated by an interval,
//! so the fade stays smooth at any tick granularity. The envelope is
//! phase-shifted to start each cycle at its minimum.

use core::f64::consts::{FRAC_PI_2, PI};

use embassy_time::Instant;

use super::Mode;
use crate::params::Params;

/// Breath mode - stateless, the phase comes entirely from the clock
#[derive(Debug, Clone)]
pub struct BreathMode;

impl BreathMode {
    /// Envelope value for one point in time, `0..=ceiling`.
    pub fn level(now: Instant, period_ms: u64, ceiling: u8) -> u8 {
        let period = period_ms.max(1);
        let t = now.as_millis() % period;
        #[allow(clippy::cast_precision_loss)]
        let phase = t as f64 / period as f64;
        let v = (libm::sin(phase * 2.0 * PI - FRAC_PI_2) + 1.0) / 2.0;
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let level = (v * f64::from(ceiling) + 0.5) as u8;
        level
    }
}

impl<const N: usize> Mode<N> for BreathMode {
    fn render(&mut self, now: Instant, params: &Params<N>, frame: &mut [u8; N]) {
        let level = Self::level(
            now,
            params.breath_period().as_millis(),
            params.brightness(),
        );
        frame.fill(level);
    }
}
