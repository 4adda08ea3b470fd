//! Pin-change pulse capture
//!
//! The hilt idles its data line HIGH and signals each bit as a LOW period.
//! Platforms with a pulse-width capture timer can push widths straight into a
//! [`PulseChannel`](crate::channel::PulseChannel); everything else calls
//! [`EdgeCapture::on_edge`] from a pin-change interrupt.

use embassy_time::{Duration, Instant};

/// Logic level of the data line after an edge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Low,
    High,
}

/// Measures LOW periods on the data line from pin-change events
#[derive(Debug, Clone, Default)]
pub struct EdgeCapture {
    last_change: Option<Instant>,
}

impl EdgeCapture {
    pub const fn new() -> Self {
        Self { last_change: None }
    }

    /// Record an edge and return the width of the LOW period it ends, if any.
    ///
    /// `level` is the line level after the edge. Only rising edges produce a
    /// width; the first edge ever seen only starts the clock.
    pub fn on_edge(&mut self, level: Level, now: Instant) -> Option<Duration> {
        let width = match (level, self.last_change) {
            (Level::High, Some(last)) => Some(now.saturating_duration_since(last)),
            _ => None,
        };
        self.last_change = Some(now);
        width
    }

    /// Forget the last edge, e.g. after waking from sleep.
    pub fn reset(&mut self) {
        self.last_change = None;
    }
}
