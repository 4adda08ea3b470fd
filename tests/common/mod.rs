//! Shared test infrastructure

#![allow(dead_code)] // Each test file uses a different subset

use myrtio_blade::{
    Blade, BladeConfig, Duration, FrameBuffer, Instant, PowerControl, Rgb, color::OFF,
};
use smart_leds::{RGB8, SmartLedsWrite};

/// Writer that records every frame it is asked to latch
#[derive(Default)]
pub struct MockWriter {
    pub frames: Vec<Vec<RGB8>>,
    pub fail: bool,
}

impl SmartLedsWrite for MockWriter {
    type Error = ();
    type Color = RGB8;

    fn write<T, I>(&mut self, iterator: T) -> Result<(), Self::Error>
    where
        T: IntoIterator<Item = I>,
        I: Into<Self::Color>,
    {
        if self.fail {
            return Err(());
        }
        self.frames.push(iterator.into_iter().map(Into::into).collect());
        Ok(())
    }
}

/// Power controller that records what the blade asked for
pub struct MockPower {
    pub led_on: bool,
    pub sleeps: u32,
    pub sleep_for: Duration,
}

impl Default for MockPower {
    fn default() -> Self {
        Self {
            led_on: false,
            sleeps: 0,
            sleep_for: Duration::from_millis(5_000),
        }
    }
}

impl PowerControl for MockPower {
    fn led_power(&mut self, on: bool) {
        self.led_on = on;
    }

    fn request_sleep(&mut self, now: Instant) -> Instant {
        self.sleeps += 1;
        now + self.sleep_for
    }
}

pub type Strip<const N: usize> = FrameBuffer<MockWriter, N>;

pub fn ms(value: u64) -> Instant {
    Instant::from_millis(value)
}

pub fn us(value: u64) -> Duration {
    Duration::from_micros(value)
}

/// A blade started at t=0 on a fresh strip
pub fn started<const N: usize>(config: BladeConfig) -> (Blade, Strip<N>, MockPower) {
    let mut blade = Blade::new(config);
    let mut strip = Strip::<N>::new(MockWriter::default());
    let mut power = MockPower::default();
    blade.start(ms(0), &mut strip, &mut power);
    (blade, strip, power)
}

pub fn lit(pixels: &[Rgb]) -> usize {
    pixels.iter().filter(|pixel| **pixel != OFF).count()
}

/// Bit pulses for one command byte, most significant bit first
pub fn pulses_for(byte: u8) -> [Duration; 8] {
    let mut pulses = [us(1200); 8];
    for (bit, pulse) in pulses.iter_mut().enumerate() {
        if byte & (0x80 >> bit) != 0 {
            *pulse = us(2400);
        }
    }
    pulses
}
