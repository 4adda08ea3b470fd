//! Hilt protocol decoder
//!
//! Turns LOW-period widths into 8-bit command bytes. Every command is eight
//! bit pulses, preceded by a preamble of ~16.4 ms pulses that are far longer
//! than any bit and therefore reset the accumulator.
//!
//! While a command is being received the decoder reports
//! [`HiltDecoder::is_decoding`]. Presenting a frame to the LED strip is slow
//! and on some platforms masks interrupts, so the scheduling loop skips it
//! while this flag is up. A strip of 250 pixels takes ~7.5 ms to latch, long
//! enough to swallow three bits of a command.

use embassy_time::{Duration, Instant};

#[cfg(feature = "esp32-log")]
use esp_println::println;

/// Default width at or above which a pulse is a resync marker, not a bit
pub const DEFAULT_CUTOFF: Duration = Duration::from_micros(4000);

/// Default width separating the two bit values
///
/// Typical bits are ~1200 µs and ~2000 µs (legacy) or ~2400 µs (savi).
pub const DEFAULT_SPLIT: Duration = Duration::from_micros(1600);

/// Default upper bound of the preamble band
///
/// Hilts send ~16.4 ms preamble pulses; this leaves about 2 ms of slack.
pub const DEFAULT_PREAMBLE_MAX: Duration = Duration::from_micros(18_750);

/// Which side of the split threshold encodes a one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BitPolarity {
    /// Pulses at or above the split are ones
    #[default]
    LongIsOne,
    /// Pulses below the split are ones
    ShortIsOne,
}

/// Decoder thresholds
#[derive(Debug, Clone)]
pub struct DecoderConfig {
    /// Pulses at least this long reset the accumulator
    pub cutoff: Duration,
    /// Bit value boundary
    pub split: Duration,
    /// Pulses from `cutoff` up to (not including) this width are preambles
    pub preamble_max: Duration,
    /// Bit value convention, applied to both hilt families
    pub polarity: BitPolarity,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            cutoff: DEFAULT_CUTOFF,
            split: DEFAULT_SPLIT,
            preamble_max: DEFAULT_PREAMBLE_MAX,
            polarity: BitPolarity::default(),
        }
    }
}

impl DecoderConfig {
    /// How long the line may stay quiet before a half-received command is
    /// abandoned: ten splits.
    pub fn resync_timeout(&self) -> Duration {
        self.split * 10
    }

    fn is_preamble(&self, width: Duration) -> bool {
        width >= self.cutoff && width < self.preamble_max
    }

    fn bit(&self, width: Duration) -> u8 {
        let long = width >= self.split;
        match self.polarity {
            BitPolarity::LongIsOne => u8::from(long),
            BitPolarity::ShortIsOne => u8::from(!long),
        }
    }
}

/// Accumulates bit pulses into command bytes
#[derive(Debug, Clone)]
pub struct HiltDecoder {
    config: DecoderConfig,
    partial: u8,
    bits: u8,
    last_pulse: Option<Instant>,
    decoding: bool,
}

impl HiltDecoder {
    pub fn new(config: DecoderConfig) -> Self {
        Self {
            config,
            partial: 0,
            bits: 0,
            last_pulse: None,
            decoding: false,
        }
    }

    /// Feed one pulse width measured at `now`.
    ///
    /// Returns the completed command on the eighth consecutive bit.
    pub fn push_pulse(&mut self, width: Duration, now: Instant) -> Option<u8> {
        self.last_pulse = Some(now);

        if width >= self.config.cutoff {
            self.reset();
            // Most likely a preamble; raise the flag early so the first bits
            // of the command are not lost behind a frame latch.
            if self.config.is_preamble(width) {
                self.decoding = true;
            }
            return None;
        }

        self.partial = (self.partial << 1) | self.config.bit(width);
        self.bits += 1;

        if self.bits < 8 {
            self.decoding = true;
            return None;
        }

        let command = self.partial;
        self.reset();
        self.decoding = false;
        #[cfg(feature = "esp32-log")]
        println!("[HiltDecoder] command 0x{:02X}", command);
        Some(command)
    }

    /// Drop a stalled command once the line has been quiet too long.
    ///
    /// Call on every pass of the scheduling loop.
    pub fn poll(&mut self, now: Instant) {
        if !self.decoding {
            return;
        }
        let quiet = self
            .last_pulse
            .map_or(Duration::MAX, |last| now.saturating_duration_since(last));
        if quiet > self.config.resync_timeout() {
            #[cfg(feature = "esp32-log")]
            println!("[HiltDecoder] timed out after {} bits", self.bits);
            self.reset();
            self.decoding = false;
        }
    }

    /// True while a command is suspected to be in flight
    pub const fn is_decoding(&self) -> bool {
        self.decoding
    }

    /// Bits accumulated since the last reset
    pub const fn bits_collected(&self) -> u8 {
        self.bits
    }

    pub const fn config(&self) -> &DecoderConfig {
        &self.config
    }

    fn reset(&mut self) {
        self.partial = 0;
        self.bits = 0;
    }
}

impl Default for HiltDecoder {
    fn default() -> Self {
        Self::new(DecoderConfig::default())
    }
}
