//! Line-oriented command console.
//!
//! Assembles bytes from a [`CommandPort`](crate::CommandPort) into
//! bounded lines, parses them with [`Command::parse`] and applies the
//! result to the engine, writing one acknowledgment or error line per
//! command. Everything is applied synchronously before the next tick's
//! render.

use core::fmt::{self, Write};

use embassy_time::Instant;
use heapless::{String, Vec};

use crate::CommandPort;
use crate::command::{Command, ParseError, Pattern};
use crate::engine::Engine;

/// Maximum buffered line length. Overflow drops the oldest bytes so the
/// most recent window is kept.
pub const MAX_LINE_LEN: usize = 200;

const PATTERN_PRESET1_MS: [u64; 3] = [150, 300, 450];
const PATTERN_PRESET2_MS: [u64; 3] = [80, 160, 320];

/// Random toggle intervals are drawn from [50, 850) ms.
const RANDOM_INTERVAL_BASE_MS: u64 = 50;
const RANDOM_INTERVAL_SPAN_MS: u64 = 800;

const DEFAULT_RNG_SEED: u64 = 0x9E37_79B9_7F4A_7C15;

/// xorshift64 - small deterministic generator for `pattern random`.
///
/// The seed must be nonzero.
#[derive(Debug, Clone)]
struct XorShift64 {
    state: u64,
}

impl XorShift64 {
    const fn new(seed: u64) -> Self {
        Self {
            state: if seed == 0 { DEFAULT_RNG_SEED } else { seed },
        }
    }

    fn next(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }
}

/// Command interpreter over `N` LED channels.
pub struct Console<const N: usize> {
    line: Vec<u8, MAX_LINE_LEN>,
    rng: XorShift64,
}

impl<const N: usize> Console<N> {
    pub fn new() -> Self {
        Self::with_seed(DEFAULT_RNG_SEED)
    }

    /// Create a console with a fixed RNG seed, for deterministic
    /// `pattern random` results.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            line: Vec::new(),
            rng: XorShift64::new(seed),
        }
    }

    /// Drain all currently available bytes from the port and dispatch
    /// every completed line. Never blocks; partial lines stay buffered
    /// for the next poll.
    pub fn poll<P: CommandPort>(
        &mut self,
        engine: &mut Engine<N>,
        port: &mut P,
        now: Instant,
    ) -> fmt::Result {
        while let Some(byte) = port.read_byte() {
            if byte == b'\n' || byte == b'\r' {
                if self.line.is_empty() {
                    continue;
                }
                let line = core::mem::take(&mut self.line);
                self.dispatch_bytes(engine, &line, port, now)?;
            } else {
                if self.line.is_full() {
                    self.line.remove(0);
                }
                let _ = self.line.push(byte);
            }
        }
        Ok(())
    }

    fn dispatch_bytes<W: Write>(
        &mut self,
        engine: &mut Engine<N>,
        bytes: &[u8],
        out: &mut W,
        now: Instant,
    ) -> fmt::Result {
        let Ok(text) = core::str::from_utf8(bytes) else {
            return writeln!(out, "Unknown command. Type 'help'");
        };
        self.handle_line(engine, text, out, now)
    }

    /// Trim, case-fold and dispatch one line. Empty lines are ignored.
    pub fn handle_line<W: Write>(
        &mut self,
        engine: &mut Engine<N>,
        line: &str,
        out: &mut W,
        now: Instant,
    ) -> fmt::Result {
        let mut folded: String<MAX_LINE_LEN> = String::new();
        for c in line.trim().chars() {
            let _ = folded.push(c.to_ascii_lowercase());
        }
        if folded.is_empty() {
            return Ok(());
        }

        match Command::parse(&folded, N) {
            Ok(command) => self.apply(engine, command, out, now),
            Err(error) => report_error(error, out),
        }
    }

    /// Apply one parsed command and write its reply.
    fn apply<W: Write>(
        &mut self,
        engine: &mut Engine<N>,
        command: Command,
        out: &mut W,
        now: Instant,
    ) -> fmt::Result {
        match command {
            Command::Help => write_help(out),
            Command::QueryMode => {
                writeln!(out, "Current mode: {}", engine.mode_id().as_str())
            }
            Command::SetMode(id) => {
                engine.enter(id, now);
                writeln!(out, "Mode set to {}", id.as_str())
            }
            Command::SetBrightness(raw) => {
                let value = engine.params_mut().set_brightness(raw);
                writeln!(out, "Brightness set to {value}")
            }
            Command::SetBlinkInterval(raw) => {
                let value = engine.params_mut().set_blink_interval(raw);
                writeln!(out, "Blink interval set to {value}")
            }
            Command::SetBreathPeriod(raw) => {
                let value = engine.params_mut().set_breath_period(raw);
                writeln!(out, "Breath period set to {value}")
            }
            Command::SetChaseInterval(raw) => {
                let value = engine.params_mut().set_chase_interval(raw);
                writeln!(out, "Chase interval set to {value}")
            }
            Command::SetLedInterval { index, millis } => {
                let value = engine.params_mut().set_led_interval(index, millis);
                writeln!(out, "LED frequency set: index {index} -> {value} ms")
            }
            Command::SetPattern(pattern) => self.apply_pattern(engine, pattern, out),
        }
    }

    fn apply_pattern<W: Write>(
        &mut self,
        engine: &mut Engine<N>,
        pattern: Pattern,
        out: &mut W,
    ) -> fmt::Result {
        match pattern {
            Pattern::Preset1 => {
                engine.params_mut().assign_led_intervals(&PATTERN_PRESET1_MS);
                writeln!(out, "Pattern preset1 applied")
            }
            Pattern::Preset2 => {
                engine.params_mut().assign_led_intervals(&PATTERN_PRESET2_MS);
                writeln!(out, "Pattern preset2 applied")
            }
            Pattern::Random => {
                for index in 0..N {
                    let millis =
                        RANDOM_INTERVAL_BASE_MS + self.rng.next() % RANDOM_INTERVAL_SPAN_MS;
                    #[allow(clippy::cast_possible_wrap)]
                    engine.params_mut().set_led_interval(index, millis as i64);
                }
                writeln!(out, "Random pattern applied")
            }
        }
    }
}

impl<const N: usize> Default for Console<N> {
    fn default() -> Self {
        Self::new()
    }
}

fn report_error<W: Write>(error: ParseError, out: &mut W) -> fmt::Result {
    match error {
        ParseError::UnknownCommand => writeln!(out, "Unknown command. Type 'help'"),
        ParseError::UnknownModeName => writeln!(out, "Unknown mode name"),
        ParseError::ModeIndexOutOfRange => writeln!(out, "Mode index out of range"),
        ParseError::Usage(usage) => writeln!(out, "Usage: {usage}"),
    }
}

fn write_help<W: Write>(out: &mut W) -> fmt::Result {
    writeln!(out, "Commands:")?;
    writeln!(
        out,
        "  mode <name|index>  - set mode (off, static, blink, breath, chase, perled)"
    )?;
    writeln!(out, "  brightness <0-255> - set global brightness")?;
    writeln!(out, "  blink <ms> - set blink interval")?;
    writeln!(out, "  breath <ms> - set breath period")?;
    writeln!(out, "  chase <ms> - set chase interval")?;
    writeln!(out, "  ledfreq <index> <ms> - set one LED's toggle interval")?;
    writeln!(out, "  pattern <preset1|preset2|random> - assign all toggle intervals")
}
