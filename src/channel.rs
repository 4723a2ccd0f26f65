//! Interrupt-safe byte queue for command input.
//!
//! A serial receive interrupt pushes raw bytes in; the tick loop drains
//! them through a [`CommandPort`](crate::CommandPort) implementation.
//! Built on `critical-section` and a fixed-size `heapless::Deque`, so it
//! works the same on bare metal and on the host.

use core::cell::RefCell;

use critical_section::Mutex;
use heapless::Deque;

/// Error returned when pushing into a full queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueueFull;

/// A bounded, interrupt-safe queue of raw command bytes.
pub struct ByteQueue<const SIZE: usize> {
    inner: Mutex<RefCell<Deque<u8, SIZE>>>,
}

impl<const SIZE: usize> ByteQueue<SIZE> {
    /// Create a new empty queue.
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    /// Get a sender handle for this queue.
    ///
    /// Multiple senders can coexist; they share access to the same queue.
    pub const fn sender(&self) -> ByteSender<'_, SIZE> {
        ByteSender { queue: self }
    }

    /// Get a receiver handle for this queue.
    pub const fn receiver(&self) -> ByteReceiver<'_, SIZE> {
        ByteReceiver { queue: self }
    }

    /// Try to push a byte; `Err(QueueFull)` when there is no room.
    pub fn try_send(&self, byte: u8) -> Result<(), QueueFull> {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            queue.push_back(byte).map_err(|_| QueueFull)
        })
    }

    /// Pop the oldest byte, or `None` when the queue is empty.
    pub fn try_receive(&self) -> Option<u8> {
        critical_section::with(|cs| self.inner.borrow(cs).borrow_mut().pop_front())
    }
}

impl<const SIZE: usize> Default for ByteQueue<SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

/// The interrupt side of a [`ByteQueue`].
#[derive(Clone, Copy)]
pub struct ByteSender<'a, const SIZE: usize> {
    queue: &'a ByteQueue<SIZE>,
}

impl<const SIZE: usize> ByteSender<'_, SIZE> {
    /// Try to push a byte; `Err(QueueFull)` when there is no room.
    pub fn try_send(&self, byte: u8) -> Result<(), QueueFull> {
        self.queue.try_send(byte)
    }
}

/// The loop side of a [`ByteQueue`].
#[derive(Clone, Copy)]
pub struct ByteReceiver<'a, const SIZE: usize> {
    queue: &'a ByteQueue<SIZE>,
}

impl<const SIZE: usize> ByteReceiver<'_, SIZE> {
    /// Pop the oldest byte, or `None` when the queue is empty.
    pub fn try_receive(&self) -> Option<u8> {
        self.queue.try_receive()
    }
}
