//! Lighting modes with compile-time known variants
//!
//! All modes are stored in an enum to avoid heap allocations, each
//! variant carrying its own transient timing state inline. Switching
//! modes rebuilds the variant, so stale state from a previous
//! activation can never leak into the next one.

mod blink;
mod breath;
mod chase;
mod per_led;
mod static_level;

use embassy_time::Instant;

pub use blink::BlinkMode;
pub use breath::BreathMode;
pub use chase::ChaseMode;
pub use per_led::PerLedMode;
pub use static_level::StaticMode;

use crate::params::Params;

const MODE_NAME_OFF: &str = "off";
const MODE_NAME_STATIC: &str = "static";
const MODE_NAME_BLINK: &str = "blink";
const MODE_NAME_BREATH: &str = "breath";
const MODE_NAME_CHASE: &str = "chase";
const MODE_NAME_PER_LED: &str = "perled";

const MODE_ID_OFF: u8 = 0;
const MODE_ID_STATIC: u8 = 1;
const MODE_ID_BLINK: u8 = 2;
const MODE_ID_BREATH: u8 = 3;
const MODE_ID_CHASE: u8 = 4;
const MODE_ID_PER_LED: u8 = 5;

pub trait Mode<const N: usize> {
    /// Advance the animation and write into the retained frame.
    ///
    /// Channels are only touched when the mode's own timing rule fires,
    /// so untouched channels keep their last written level.
    fn render(&mut self, now: Instant, params: &Params<N>, frame: &mut [u8; N]);
}

/// Known mode ids that can be requested.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum ModeId {
    Off = MODE_ID_OFF,
    Static = MODE_ID_STATIC,
    Blink = MODE_ID_BLINK,
    Breath = MODE_ID_BREATH,
    Chase = MODE_ID_CHASE,
    PerLed = MODE_ID_PER_LED,
}

/// Mode slot - enum containing all possible modes
#[derive(Debug, Clone)]
pub enum ModeSlot<const N: usize> {
    /// All channels held dark
    Off,
    /// All channels held at the brightness ceiling
    Static(StaticMode),
    /// All channels toggling together
    Blink(BlinkMode),
    /// Sine-envelope breathing fade
    Breath(BreathMode),
    /// Single lit channel marching across the array
    Chase(ChaseMode),
    /// Each channel toggling on its own clock
    PerLed(PerLedMode<N>),
}

impl ModeId {
    /// Number of modes, for cyclic advance and index validation.
    pub const COUNT: u8 = 6;

    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            MODE_ID_OFF => Self::Off,
            MODE_ID_STATIC => Self::Static,
            MODE_ID_BLINK => Self::Blink,
            MODE_ID_BREATH => Self::Breath,
            MODE_ID_CHASE => Self::Chase,
            MODE_ID_PER_LED => Self::PerLed,
            _ => return None,
        })
    }

    /// The next mode in button-cycling order, wrapping after the last.
    pub const fn next(self) -> Self {
        match self {
            Self::Off => Self::Static,
            Self::Static => Self::Blink,
            Self::Blink => Self::Breath,
            Self::Breath => Self::Chase,
            Self::Chase => Self::PerLed,
            Self::PerLed => Self::Off,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Off => MODE_NAME_OFF,
            Self::Static => MODE_NAME_STATIC,
            Self::Blink => MODE_NAME_BLINK,
            Self::Breath => MODE_NAME_BREATH,
            Self::Chase => MODE_NAME_CHASE,
            Self::PerLed => MODE_NAME_PER_LED,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            MODE_NAME_OFF => Some(Self::Off),
            MODE_NAME_STATIC => Some(Self::Static),
            MODE_NAME_BLINK => Some(Self::Blink),
            MODE_NAME_BREATH => Some(Self::Breath),
            MODE_NAME_CHASE => Some(Self::Chase),
            MODE_NAME_PER_LED => Some(Self::PerLed),
            _ => None,
        }
    }

    /// Build the mode's slot with transient state reset to `now`.
    pub fn to_slot<const N: usize>(self, now: Instant) -> ModeSlot<N> {
        match self {
            Self::Off => ModeSlot::Off,
            Self::Static => ModeSlot::Static(StaticMode),
            Self::Blink => ModeSlot::Blink(BlinkMode::new(now)),
            Self::Breath => ModeSlot::Breath(BreathMode),
            Self::Chase => ModeSlot::Chase(ChaseMode::new(now)),
            Self::PerLed => ModeSlot::PerLed(PerLedMode::new(now)),
        }
    }
}

impl<const N: usize> ModeSlot<N> {
    /// Render the active mode; only its own update runs.
    pub fn render(&mut self, now: Instant, params: &Params<N>, frame: &mut [u8; N]) {
        match self {
            Self::Off => {}
            Self::Static(mode) => mode.render(now, params, frame),
            Self::Blink(mode) => mode.render(now, params, frame),
            Self::Breath(mode) => mode.render(now, params, frame),
            Self::Chase(mode) => mode.render(now, params, frame),
            Self::PerLed(mode) => mode.render(now, params, frame),
        }
    }

    /// Get the mode ID for external observation
    pub const fn id(&self) -> ModeId {
        match self {
            Self::Off => ModeId::Off,
            Self::Static(_) => ModeId::Static,
            Self::Blink(_) => ModeId::Blink,
            Self::Breath(_) => ModeId::Breath,
            Self::Chase(_) => ModeId::Chase,
            Self::PerLed(_) => ModeId::PerLed,
        }
    }
}
