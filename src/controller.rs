//! Scheduling loop
//!
//! Ties pulse capture, decoding, the blade and the LED strip together without
//! async/await or platform timers. The caller runs [`BladeController::tick`]
//! as often as it can; nothing in a pass blocks except presenting a frame.
//!
//! # Usage
//!
//! ```ignore
//! static PULSES: PulseChannel<4> = PulseChannel::new();
//!
//! // In the data pin interrupt:
//! if let Some(width) = capture.on_edge(level, Instant::now()) {
//!     PULSES.sender().send_overwrite(width);
//! }
//!
//! let mut controller = BladeController::new(
//!     PULSES.receiver(),
//!     HiltDecoder::default(),
//!     Blade::default(),
//!     FrameBuffer::<_, 144>::new(ws2812),
//!     power,
//! );
//! controller.start(Instant::now());
//! loop {
//!     controller.tick(Instant::now());
//! }
//! ```

use embassy_time::Instant;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::blade::{Blade, BladeState, CommandRejected};
use crate::channel::PulseReceiver;
use crate::decoder::HiltDecoder;
use crate::{LedOutput, PowerControl};

/// Outcome of one scheduling pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickReport {
    /// Commands completed and applied during this pass
    pub commands: u8,
    /// A frame was latched to the strip
    pub presented: bool,
    /// A frame is waiting because a command is being received
    pub deferred: bool,
}

pub struct BladeController<'a, O: LedOutput, P: PowerControl, const PULSE_QUEUE: usize> {
    pulses: PulseReceiver<'a, PULSE_QUEUE>,
    decoder: HiltDecoder,
    blade: Blade,
    output: O,
    power: P,
    // Survives passes where presenting was suppressed or failed
    frame_pending: bool,
}

impl<'a, O: LedOutput, P: PowerControl, const PULSE_QUEUE: usize>
    BladeController<'a, O, P, PULSE_QUEUE>
{
    pub fn new(
        pulses: PulseReceiver<'a, PULSE_QUEUE>,
        decoder: HiltDecoder,
        blade: Blade,
        output: O,
        power: P,
    ) -> Self {
        Self {
            pulses,
            decoder,
            blade,
            output,
            power,
            frame_pending: false,
        }
    }

    /// Bring the blade to rest in `Off` and latch the dark strip.
    pub fn start(&mut self, now: Instant) {
        self.blade.start(now, &mut self.output, &mut self.power);
        self.present(&mut TickReport::default());
    }

    /// Run one pass of the loop.
    ///
    /// 1. Decodes every pending pulse; each completed command is applied to
    ///    the blade before the next pulse is looked at
    /// 2. Abandons a stalled command reception
    /// 3. Runs the blade's timed step
    /// 4. Presents the frame unless a command is in flight
    pub fn tick(&mut self, now: Instant) -> TickReport {
        let mut report = TickReport::default();

        while let Ok(width) = self.pulses.try_receive() {
            if let Some(raw) = self.decoder.push_pulse(width, now) {
                report.commands = report.commands.saturating_add(1);
                let _ = self.apply(raw, now);
            }
        }
        self.decoder.poll(now);

        self.blade.tick(now, &mut self.output, &mut self.power);

        self.present(&mut report);
        report
    }

    /// Apply a command byte that did not come over the wire.
    pub fn inject_command(&mut self, raw: u8, now: Instant) -> Result<BladeState, CommandRejected> {
        self.apply(raw, now)
    }

    fn apply(&mut self, raw: u8, now: Instant) -> Result<BladeState, CommandRejected> {
        let result = self
            .blade
            .handle_command(raw, now, &mut self.output, &mut self.power);
        #[cfg(feature = "esp32-log")]
        if let Err(rejected) = result {
            println!("[BladeController] dropped: {}", rejected);
        }
        result
    }

    fn present(&mut self, report: &mut TickReport) {
        if self.blade.take_dirty() {
            self.frame_pending = true;
        }
        if !self.frame_pending {
            return;
        }
        if self.decoder.is_decoding() {
            report.deferred = true;
            return;
        }
        if self.output.present().is_ok() {
            self.frame_pending = false;
            report.presented = true;
        }
    }

    pub fn blade(&self) -> &Blade {
        &self.blade
    }

    pub fn decoder(&self) -> &HiltDecoder {
        &self.decoder
    }

    pub fn output(&self) -> &O {
        &self.output
    }

    pub fn output_mut(&mut self) -> &mut O {
        &mut self.output
    }

    pub fn power(&self) -> &P {
        &self.power
    }

    /// True while a drawn frame is waiting to be presented
    pub const fn frame_pending(&self) -> bool {
        self.frame_pending
    }
}
