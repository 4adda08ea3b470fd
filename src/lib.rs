#![no_std]

pub mod blade;
pub mod capture;
pub mod channel;
pub mod color;
pub mod command;
pub mod controller;
pub mod decoder;
pub mod demo;
pub mod math8;
pub mod output;
pub mod profile;

pub use blade::{Blade, BladeConfig, BladeState, ColorMode, CommandRejected};
pub use capture::{EdgeCapture, Level};
pub use channel::{PulseChannel, PulseReceiver, PulseSender};
pub use color::{BladeColor, Rgb, color_wheel};
pub use command::{HiltCommand, HiltFamily, UnknownCommand};
pub use controller::{BladeController, TickReport};
pub use decoder::{BitPolarity, DecoderConfig, HiltDecoder};
pub use demo::DemoSequence;
pub use output::FrameBuffer;
pub use profile::{LightsaberProfile, lookup};
pub use embassy_time::{Duration, Instant};

/// LED strip the blade draws into
///
/// Drawing calls only touch a frame buffer; nothing reaches the pixels until
/// [`LedOutput::present`]. Presenting costs time proportional to the strip
/// length and may mask interrupts while it runs.
pub trait LedOutput {
    type Error;

    /// Number of pixels in the strip
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Set one pixel; out-of-range indices are ignored
    fn set_pixel(&mut self, index: usize, color: Rgb);

    /// Set `count` pixels starting at `start`, clamped to the strip
    fn fill_range(&mut self, color: Rgb, start: usize, count: usize) {
        let end = start.saturating_add(count).min(self.len());
        for index in start..end {
            self.set_pixel(index, color);
        }
    }

    fn fill_all(&mut self, color: Rgb) {
        self.fill_range(color, 0, self.len());
    }

    fn clear(&mut self) {
        self.fill_all(color::OFF);
    }

    /// Global brightness applied when presenting
    fn set_brightness(&mut self, level: u8);

    /// Push the frame to the hardware
    fn present(&mut self) -> Result<(), Self::Error>;
}

/// Power management around the blade
pub trait PowerControl {
    /// Switch the LED supply, if the install has a power gate
    fn led_power(&mut self, on: bool);

    /// Enter low-power sleep until the data line wakes the device.
    ///
    /// Returns the instant the device woke up. The edge that caused the wake
    /// must still reach the pulse capture.
    fn request_sleep(&mut self, now: Instant) -> Instant;
}

/// Installs without a power gate or sleep support
impl PowerControl for () {
    fn led_power(&mut self, _on: bool) {}

    fn request_sleep(&mut self, now: Instant) -> Instant {
        now
    }
}
