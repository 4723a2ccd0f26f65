//! Tick loop and scheduling.
//!
//! One controller object owns the capability implementations and all
//! state, and `tick` runs one iteration of the control loop: button,
//! command input, mode update, output write. The caller is responsible
//! for sleeping until the returned deadline; timing works from the
//! `now` it passes in, so there is no platform timer dependency here.

use embassy_time::{Duration, Instant};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::debounce::{DEFAULT_DEBOUNCE_WINDOW, Debouncer, Edge};
use crate::engine::Engine;
use crate::mode::ModeId;
use crate::{ButtonInput, CommandPort, Console, OutputDriver};

/// Default tick period for soft millisecond scheduling.
pub const DEFAULT_TICK_DURATION: Duration = Duration::from_millis(1);

/// Result of one tick.
#[derive(Debug, Clone, Copy)]
pub struct TickResult {
    /// The deadline for the next tick.
    pub next_deadline: Instant,
    /// How long to wait until the next tick (zero if behind schedule).
    pub sleep_duration: Duration,
}

/// Startup configuration for the controller.
#[derive(Debug, Clone, Copy)]
pub struct ControllerConfig {
    /// Mode entered at startup.
    pub initial_mode: ModeId,
    /// Target tick period.
    pub tick_duration: Duration,
    /// Button settle window.
    pub debounce_window: Duration,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            initial_mode: ModeId::Static,
            tick_duration: DEFAULT_TICK_DURATION,
            debounce_window: DEFAULT_DEBOUNCE_WINDOW,
        }
    }
}

/// The top-level tick-driven controller.
///
/// Single-threaded by construction: everything is mutated through one
/// exclusive reference, so per-tick ordering is the only locking.
pub struct Controller<O, B, P, const N: usize>
where
    O: OutputDriver,
    B: ButtonInput,
    P: CommandPort,
{
    output: O,
    button: B,
    port: P,
    engine: Engine<N>,
    console: Console<N>,
    debouncer: Debouncer,
    next_tick: Instant,
    tick_duration: Duration,
}

impl<O, B, P, const N: usize> Controller<O, B, P, N>
where
    O: OutputDriver,
    B: ButtonInput,
    P: CommandPort,
{
    /// Create a controller and render the initial mode's entry state.
    pub fn new(output: O, button: B, port: P, config: &ControllerConfig) -> Self {
        let mut controller = Self {
            output,
            button,
            port,
            engine: Engine::new(config.initial_mode),
            console: Console::new(),
            debouncer: Debouncer::new(config.debounce_window),
            next_tick: Instant::from_millis(0),
            tick_duration: config.tick_duration,
        };
        controller.push_frame();
        controller
    }

    /// Run one iteration of the control loop.
    ///
    /// In order: sample the button and cycle modes on a confirmed press,
    /// drain and dispatch available command input, advance the active
    /// mode, write the frame to the output driver.
    pub fn tick(&mut self, now: Instant) -> TickResult {
        // If we've fallen too far behind, reset the schedule instead of
        // bursting to catch up.
        let max_drift_ms = self.tick_duration.as_millis() * 2;
        if now.as_millis() > self.next_tick.as_millis() + max_drift_ms {
            self.next_tick = now;
        }

        let raw = self.button.read_button();
        if let Some(Edge::Rising) = self.debouncer.sample(raw, now) {
            let next = self.engine.cycle(now);
            #[cfg(feature = "esp32-log")]
            println!("button: mode -> {}", next.as_str());
            let _ = writeln!(self.port, "Button: mode -> {}", next.as_str());
        }

        let _ = self.console.poll(&mut self.engine, &mut self.port, now);

        self.engine.tick(now);
        self.push_frame();

        self.next_tick += self.tick_duration;
        let sleep_duration = if self.next_tick.as_millis() > now.as_millis() {
            Duration::from_millis(self.next_tick.as_millis() - now.as_millis())
        } else {
            Duration::from_millis(0)
        };

        TickResult {
            next_deadline: self.next_tick,
            sleep_duration,
        }
    }

    /// One render pass: every channel written once.
    fn push_frame(&mut self) {
        let frame = self.engine.frame();
        for (index, &level) in frame.iter().enumerate() {
            self.output.set_channel_brightness(index, level);
        }
    }

    /// Get a reference to the engine.
    pub fn engine(&self) -> &Engine<N> {
        &self.engine
    }

    /// Get a mutable reference to the engine.
    pub fn engine_mut(&mut self) -> &mut Engine<N> {
        &mut self.engine
    }

    /// Get a reference to the command port.
    pub fn port(&self) -> &P {
        &self.port
    }

    /// Get a mutable reference to the button input.
    pub fn button_mut(&mut self) -> &mut B {
        &mut self.button
    }
}
