//! Frame buffer backed LED output
//!
//! Bridges [`LedOutput`] onto any `smart-leds` writer (WS2812 over SPI, RMT,
//! PIO, PWM...). Brightness is applied on the way out so the buffer always
//! holds the unscaled blade colors.

use smart_leds::{RGB8, SmartLedsWrite, brightness};

use crate::LedOutput;
use crate::color::{OFF, Rgb};

pub struct FrameBuffer<W, const N: usize> {
    writer: W,
    pixels: [Rgb; N],
    brightness: u8,
}

impl<W, const N: usize> FrameBuffer<W, N>
where
    W: SmartLedsWrite<Color = RGB8>,
{
    pub const fn new(writer: W) -> Self {
        Self {
            writer,
            pixels: [OFF; N],
            brightness: 255,
        }
    }

    /// Current (unscaled) frame contents
    pub const fn pixels(&self) -> &[Rgb; N] {
        &self.pixels
    }

    pub const fn brightness(&self) -> u8 {
        self.brightness
    }

    pub const fn writer(&self) -> &W {
        &self.writer
    }

    pub fn writer_mut(&mut self) -> &mut W {
        &mut self.writer
    }
}

impl<W, const N: usize> LedOutput for FrameBuffer<W, N>
where
    W: SmartLedsWrite<Color = RGB8>,
{
    type Error = W::Error;

    fn len(&self) -> usize {
        N
    }

    fn set_pixel(&mut self, index: usize, color: Rgb) {
        if let Some(pixel) = self.pixels.get_mut(index) {
            *pixel = color;
        }
    }

    fn fill_range(&mut self, color: Rgb, start: usize, count: usize) {
        let end = start.saturating_add(count).min(N);
        if start < end {
            self.pixels[start..end].fill(color);
        }
    }

    fn set_brightness(&mut self, level: u8) {
        self.brightness = level;
    }

    fn present(&mut self) -> Result<(), Self::Error> {
        self.writer
            .write(brightness(self.pixels.iter().copied(), self.brightness))
    }
}
