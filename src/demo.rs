//! Bench demo
//!
//! Replays a fixed command list so a blade can be tested with nothing but
//! power and ground connected. One command every five seconds, forever.

use embassy_time::{Duration, Instant};

/// Commands replayed by [`DemoSequence::default`]: off, then ignite and
/// extinguish each of the first eight savi crystals.
pub const DEMO_COMMANDS: &[u8] = &[
    0x80, 0x20, 0x40, 0x21, 0x41, 0x22, 0x42, 0x23, 0x43, 0x24, 0x44, 0x25, 0x45, 0x26, 0x46, 0x27,
    0x47,
];

/// Time between demo commands
pub const DEMO_INTERVAL: Duration = Duration::from_millis(5000);

#[derive(Debug, Clone)]
pub struct DemoSequence<'a> {
    commands: &'a [u8],
    interval: Duration,
    index: usize,
    next_at: Option<Instant>,
}

impl<'a> DemoSequence<'a> {
    pub const fn new(commands: &'a [u8], interval: Duration) -> Self {
        Self {
            commands,
            interval,
            index: 0,
            next_at: None,
        }
    }

    /// Next command byte, if one is due at `now`.
    ///
    /// The first command is due immediately.
    pub fn poll(&mut self, now: Instant) -> Option<u8> {
        if self.commands.is_empty() {
            return None;
        }
        if self.next_at.is_some_and(|at| now < at) {
            return None;
        }

        let command = self.commands[self.index];
        self.index = (self.index + 1) % self.commands.len();
        self.next_at = Some(now + self.interval);
        Some(command)
    }

    /// True when the next command to be played is the first in the list
    pub const fn at_start(&self) -> bool {
        self.index == 0
    }
}

impl Default for DemoSequence<'static> {
    fn default() -> Self {
        Self::new(DEMO_COMMANDS, DEMO_INTERVAL)
    }
}
