//! Static level effect
//!
//! Holds every channel at the brightness ceiling. The ceiling is
//! re-applied on every render, so a `brightness` command takes effect
//! on the next tick without re-entering the mode.

use embassy_time::Instant;

use super::Mode;
use crate::params::Params;

/// Static mode - stateless, tracks the ceiling continuously
#[derive(Debug, Clone)]
pub struct StaticMode;

impl<const N: usize> Mode<N> for StaticMode {
    fn render(&mut self, _now: Instant, params: &Params<N>, frame: &mut [u8; N]) {
        frame.fill(params.brightness());
    }
}
