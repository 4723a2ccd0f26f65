//! Command tokenizer.
//!
//! Parses one line of text into a structured [`Command`], validating
//! everything up front: verbs, mode names and indices, the `ledfreq`
//! argument shape and channel range, numeric syntax. Side effects happen
//! later in the console, so a line is either fully understood or fully
//! rejected.

use crate::mode::ModeId;

const USAGE_MODE: &str = "mode <name|index>";
const USAGE_BRIGHTNESS: &str = "brightness <0-255>";
const USAGE_BLINK: &str = "blink <ms>";
const USAGE_BREATH: &str = "breath <ms>";
const USAGE_CHASE: &str = "chase <ms>";
const USAGE_LEDFREQ: &str = "ledfreq <index> <ms>";
const USAGE_PATTERN: &str = "pattern <preset1|preset2|random>";

/// Bulk per-LED interval assignment source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    /// Fixed table {150, 300, 450} ms.
    Preset1,
    /// Fixed table {80, 160, 320} ms.
    Preset2,
    /// Independent uniform draws in [50, 850) ms.
    Random,
}

/// A fully parsed and validated command.
///
/// Numeric payloads are raw: clamping to legal ranges happens when the
/// command is applied, and the reply reports the clamped value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Emit the command summary.
    Help,
    /// Report the current mode name.
    QueryMode,
    /// Enter a mode.
    SetMode(ModeId),
    /// Set the brightness ceiling (clamped to 0-255 on apply).
    SetBrightness(i64),
    /// Set the blink interval in ms (floored at 10 on apply).
    SetBlinkInterval(i64),
    /// Set the breath period in ms (floored at 100 on apply).
    SetBreathPeriod(i64),
    /// Set the chase interval in ms (floored at 10 on apply).
    SetChaseInterval(i64),
    /// Set one channel's toggle interval in ms (floored at 10 on apply).
    SetLedInterval { index: usize, millis: i64 },
    /// Bulk-assign all per-LED toggle intervals.
    SetPattern(Pattern),
}

/// Why a line was rejected. Nothing is mutated on rejection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// The verb is not recognized.
    UnknownCommand,
    /// `mode <name>` with a name that matches no mode.
    UnknownModeName,
    /// `mode <index>` outside `0..ModeId::COUNT`.
    ModeIndexOutOfRange,
    /// A recognized verb with a missing or malformed argument;
    /// carries the usage line to report.
    Usage(&'static str),
}

impl Command {
    /// Parse one trimmed, case-folded line.
    ///
    /// `led_count` bounds the `ledfreq` channel index.
    pub fn parse(line: &str, led_count: usize) -> Result<Self, ParseError> {
        let (verb, arg) = match line.split_once(' ') {
            Some((verb, arg)) => (verb, arg.trim()),
            None => (line, ""),
        };

        match verb {
            "help" => Ok(Self::Help),
            "mode" => parse_mode(arg),
            "brightness" => parse_int(arg, USAGE_BRIGHTNESS).map(Self::SetBrightness),
            "blink" => parse_int(arg, USAGE_BLINK).map(Self::SetBlinkInterval),
            "breath" => parse_int(arg, USAGE_BREATH).map(Self::SetBreathPeriod),
            "chase" => parse_int(arg, USAGE_CHASE).map(Self::SetChaseInterval),
            "ledfreq" => parse_ledfreq(arg, led_count),
            "pattern" => parse_pattern(arg),
            _ => Err(ParseError::UnknownCommand),
        }
    }
}

fn parse_int(arg: &str, usage: &'static str) -> Result<i64, ParseError> {
    arg.parse::<i64>().map_err(|_| ParseError::Usage(usage))
}

fn parse_mode(arg: &str) -> Result<Command, ParseError> {
    if arg.is_empty() {
        return Ok(Command::QueryMode);
    }

    // A leading digit selects by index, anything else by name.
    if arg.starts_with(|c: char| c.is_ascii_digit()) {
        return arg
            .parse::<u8>()
            .ok()
            .and_then(ModeId::from_raw)
            .map(Command::SetMode)
            .ok_or(ParseError::ModeIndexOutOfRange);
    }

    if arg.starts_with('-') {
        return Err(ParseError::Usage(USAGE_MODE));
    }

    ModeId::parse_from_str(arg)
        .map(Command::SetMode)
        .ok_or(ParseError::UnknownModeName)
}

fn parse_ledfreq(arg: &str, led_count: usize) -> Result<Command, ParseError> {
    let usage = ParseError::Usage(USAGE_LEDFREQ);
    let (index, millis) = arg.split_once(' ').ok_or(usage)?;

    let index = index.trim().parse::<usize>().map_err(|_| usage)?;
    let millis = millis.trim().parse::<i64>().map_err(|_| usage)?;
    if index >= led_count {
        return Err(usage);
    }

    Ok(Command::SetLedInterval { index, millis })
}

fn parse_pattern(arg: &str) -> Result<Command, ParseError> {
    let pattern = match arg {
        "preset1" => Pattern::Preset1,
        "preset2" => Pattern::Preset2,
        "random" => Pattern::Random,
        _ => return Err(ParseError::Usage(USAGE_PATTERN)),
    };
    Ok(Command::SetPattern(pattern))
}
