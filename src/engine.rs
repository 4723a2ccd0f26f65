//! Mode engine - the controller aggregate.
//!
//! Owns the active mode slot, the global parameters and the retained
//! frame buffer. All state is held in one place and mutated through an
//! exclusive reference from the tick loop, so single-threaded ordering
//! is the only synchronization needed.

use embassy_time::Instant;

use crate::mode::{ModeId, ModeSlot};
use crate::params::Params;

/// Mode engine over `N` LED channels.
pub struct Engine<const N: usize> {
    mode: ModeSlot<N>,
    params: Params<N>,
    frame: [u8; N],
}

impl<const N: usize> Engine<N> {
    /// Create an engine and enter `initial` at the timestamp origin.
    pub fn new(initial: ModeId) -> Self {
        let mut engine = Self {
            mode: ModeSlot::Off,
            params: Params::new(),
            frame: [0; N],
        };
        engine.enter(initial, Instant::from_millis(0));
        engine
    }

    /// Switch modes.
    ///
    /// The transition is total: the slot is rebuilt with all transient
    /// timers at `now` and canonical off flags, the frame is cleared,
    /// and one entry render pass runs so the new mode's starting state
    /// is immediately observable. Entering the active mode again resets
    /// it the same way.
    pub fn enter(&mut self, id: ModeId, now: Instant) {
        self.mode = id.to_slot(now);
        self.frame = [0; N];
        // Entry pass: Static shows the ceiling at once, everything else
        // starts dark until its own timing rule first fires.
        if let ModeSlot::Static(_) = self.mode {
            self.frame = [self.params.brightness(); N];
        }
    }

    /// Advance to the next mode in cycling order.
    pub fn cycle(&mut self, now: Instant) -> ModeId {
        let next = self.mode.id().next();
        self.enter(next, now);
        next
    }

    /// Advance the active mode's animation by one tick.
    ///
    /// Dispatches purely on the active variant; all other modes are
    /// no-ops. Returns the frame to push to the output driver.
    pub fn tick(&mut self, now: Instant) -> &[u8; N] {
        self.mode.render(now, &self.params, &mut self.frame);
        &self.frame
    }

    /// The currently active mode.
    pub const fn mode_id(&self) -> ModeId {
        self.mode.id()
    }

    /// The last rendered frame.
    pub const fn frame(&self) -> &[u8; N] {
        &self.frame
    }

    /// Read access to the global parameters.
    pub const fn params(&self) -> &Params<N> {
        &self.params
    }

    /// Mutable access for the command interpreter.
    pub const fn params_mut(&mut self) -> &mut Params<N> {
        &mut self.params
    }
}
