#![no_std]

pub mod channel;
pub mod command;
pub mod console;
pub mod debounce;
pub mod engine;
pub mod mode;
pub mod params;
pub mod scheduler;

pub use channel::{ByteQueue, ByteReceiver, ByteSender, QueueFull};
pub use command::{Command, ParseError, Pattern};
pub use console::Console;
pub use debounce::{Debouncer, Edge};
pub use engine::Engine;
pub use mode::{Mode, ModeId, ModeSlot};
pub use params::Params;
pub use scheduler::{Controller, ControllerConfig, TickResult};

pub use embassy_time::{Duration, Instant};

/// Abstract LED driver trait
///
/// Implement this trait to support different hardware platforms.
/// The controller is generic over this trait and issues one call per
/// channel per render pass.
pub trait OutputDriver {
    /// Set the brightness (0-255) of a single LED channel
    fn set_channel_brightness(&mut self, index: usize, value: u8);
}

/// Abstract push-button input, polled once per tick
///
/// Returns `true` while the button is pressed. Pull-up/pull-down
/// polarity is the implementor's concern.
pub trait ButtonInput {
    fn read_button(&mut self) -> bool;
}

/// Byte-oriented command channel: a non-blocking input source plus a
/// text sink for acknowledgments.
///
/// `read_byte` must never block; return `None` when no data is
/// available. Replies are written through the `core::fmt::Write`
/// supertrait.
pub trait CommandPort: core::fmt::Write {
    fn read_byte(&mut self) -> Option<u8>;
}
