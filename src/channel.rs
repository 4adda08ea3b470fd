//! Pulse handoff between the capture interrupt and the scheduling loop
//!
//! A fixed-capacity queue guarded by `critical-section`. Every operation runs
//! inside one critical section, so a width taken by the loop can never be
//! half-written by the interrupt.

use core::cell::RefCell;

use critical_section::Mutex;
use embassy_time::Duration;
use heapless::Deque;

/// The queue was full; the rejected value is handed back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrySendError<T>(pub T);

/// Nothing was queued.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TryReceiveError;

/// Bounded interrupt-safe queue.
///
/// With `SIZE == 1` this is a single-slot mailbox: the producer overwrites
/// with [`Channel::send_overwrite`] and the consumer takes and clears the
/// slot in one step.
pub struct Channel<T, const SIZE: usize> {
    queue: Mutex<RefCell<Deque<T, SIZE>>>,
}

impl<T, const SIZE: usize> Channel<T, SIZE> {
    pub const fn new() -> Self {
        Self {
            queue: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    pub const fn sender(&self) -> Sender<'_, T, SIZE> {
        Sender { channel: self }
    }

    pub const fn receiver(&self) -> Receiver<'_, T, SIZE> {
        Receiver { channel: self }
    }

    fn with_queue<R>(&self, f: impl FnOnce(&mut Deque<T, SIZE>) -> R) -> R {
        critical_section::with(|cs| f(&mut self.queue.borrow(cs).borrow_mut()))
    }

    /// Queue `value`, or hand it back if there is no room.
    pub fn try_send(&self, value: T) -> Result<(), TrySendError<T>> {
        self.with_queue(|queue| queue.push_back(value).map_err(TrySendError))
    }

    /// Queue `value`, evicting the oldest entry when full.
    ///
    /// Returns the evicted entry.
    pub fn send_overwrite(&self, value: T) -> Option<T> {
        self.with_queue(|queue| {
            let evicted = if queue.is_full() {
                queue.pop_front()
            } else {
                None
            };
            // A slot is free at this point
            let _ = queue.push_back(value);
            evicted
        })
    }

    /// Take the oldest entry.
    pub fn try_receive(&self) -> Result<T, TryReceiveError> {
        self.with_queue(|queue| queue.pop_front().ok_or(TryReceiveError))
    }

    pub fn clear(&self) {
        self.with_queue(|queue| queue.clear());
    }

    pub fn len(&self) -> usize {
        self.with_queue(|queue| queue.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T, const SIZE: usize> Default for Channel<T, SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

/// Producer handle
#[derive(Clone, Copy)]
pub struct Sender<'a, T, const SIZE: usize> {
    channel: &'a Channel<T, SIZE>,
}

impl<T, const SIZE: usize> Sender<'_, T, SIZE> {
    pub fn try_send(&self, value: T) -> Result<(), TrySendError<T>> {
        self.channel.try_send(value)
    }

    pub fn send_overwrite(&self, value: T) -> Option<T> {
        self.channel.send_overwrite(value)
    }
}

/// Consumer handle
#[derive(Clone, Copy)]
pub struct Receiver<'a, T, const SIZE: usize> {
    channel: &'a Channel<T, SIZE>,
}

impl<T, const SIZE: usize> Receiver<'_, T, SIZE> {
    pub fn try_receive(&self) -> Result<T, TryReceiveError> {
        self.channel.try_receive()
    }
}

/// Channel of measured LOW-period widths
pub type PulseChannel<const SIZE: usize> = Channel<Duration, SIZE>;

/// Producer side of a [`PulseChannel`], owned by the capture context
pub type PulseSender<'a, const SIZE: usize> = Sender<'a, Duration, SIZE>;

/// Consumer side of a [`PulseChannel`], owned by the scheduling loop
pub type PulseReceiver<'a, const SIZE: usize> = Receiver<'a, Duration, SIZE>;
