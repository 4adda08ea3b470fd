//! Blade state machine
//!
//! Maps hilt commands onto blade states and drives the animations for each
//! state. Two orthogonal machines live here: [`BladeState`], changed by
//! commands and timers, and [`ColorMode`], changed only on ignition and by
//! clashes while cycling the color wheel.
//!
//! The blade never presents a frame itself. Drawing marks the frame dirty and
//! the caller decides when the strip can afford to latch it.

mod animation;
mod color_mode;
mod state;

use core::fmt;

use embassy_time::{Duration, Instant};

#[cfg(feature = "esp32-log")]
use esp_println::println;

pub use color_mode::ColorMode;
pub use state::BladeState;

use crate::color::{BladeColor, CLASH_WHITE, CLASH_YELLOW, OFF, Rgb, color_wheel};
use crate::command::HiltCommand;
use crate::math8::{fade8, nibble_level, progress_steps};
use crate::profile::{LightsaberProfile, lookup};
use crate::{LedOutput, PowerControl};

/// Blade behavior settings
#[derive(Debug, Clone)]
pub struct BladeConfig {
    /// Brightness used while lit; lower means less current draw
    pub max_brightness: u8,
    /// Strip folded in half, both ends at the hilt
    pub mirrored: bool,
    /// Time spent off before requesting sleep
    pub sleep_after: Duration,
    /// Re-igniting within this time of an extinguish switches color mode
    pub color_mode_change_time: Duration,
    /// How long each wheel color is held while cycling
    pub wheel_pause_time: Duration,
    /// Wheel phase advance per cycle step
    pub wheel_step: u8,
    /// Length of the clash flash
    pub clash_duration: Duration,
    /// Time before a flicker decays
    pub flicker_duration: Duration,
}

impl Default for BladeConfig {
    fn default() -> Self {
        Self {
            max_brightness: 64,
            mirrored: false,
            sleep_after: Duration::from_millis(60_000),
            color_mode_change_time: Duration::from_millis(1500),
            wheel_pause_time: Duration::from_millis(2000),
            wheel_step: 16,
            clash_duration: Duration::from_millis(40),
            flicker_duration: Duration::from_millis(40),
        }
    }
}

/// Reason a command was not applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandRejected {
    /// High nibble is not a known command
    Unknown(u8),
    /// Set-color outside `Idle` or `Off`
    Blocked {
        command: HiltCommand,
        state: BladeState,
    },
    /// Command needs a profile, but nothing has been ignited yet
    NoProfile(HiltCommand),
}

impl fmt::Display for CommandRejected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown(raw) => write!(f, "unknown command 0x{:02X}", raw),
            Self::Blocked { command, state } => {
                write!(f, "{:?} blocked in state {:?}", command, state)
            }
            Self::NoProfile(command) => write!(f, "{:?} before any profile was selected", command),
        }
    }
}

/// Blade session state
#[derive(Debug, Clone)]
pub struct Blade {
    config: BladeConfig,

    state: BladeState,
    last_command: Option<u8>,
    profile: Option<&'static LightsaberProfile>,
    color_mode: ColorMode,
    primary_color: Rgb,
    clash_color: Rgb,
    wheel_index: u8,
    brightness: u8,
    flicker_level: u8,

    // Deadline of the current state's next step. For ignition and extinguish
    // it is also the instant the animation starts.
    timer: Option<Instant>,
    // Sweep steps already drawn
    animate_step: usize,
    last_extinguish: Option<Instant>,
    dirty: bool,
}

impl Blade {
    pub fn new(config: BladeConfig) -> Self {
        Self {
            config,
            state: BladeState::Uninitialized,
            last_command: None,
            profile: None,
            color_mode: ColorMode::Stock,
            primary_color: OFF,
            clash_color: OFF,
            wheel_index: 0,
            brightness: 0,
            flicker_level: 0,
            timer: None,
            animate_step: 0,
            last_extinguish: None,
            dirty: false,
        }
    }

    /// Leave `Uninitialized` and rest in `Off`
    pub fn start<O: LedOutput, P: PowerControl>(&mut self, now: Instant, output: &mut O, power: &mut P) {
        if self.state == BladeState::Uninitialized {
            self.enter(BladeState::Off, now, output, power);
        }
    }

    /// Apply a command byte from the hilt.
    ///
    /// The transition and its on-entry effects are complete when this
    /// returns. A command that resolves to the current state changes the
    /// profile where applicable but does not re-run the on-entry effects.
    pub fn handle_command<O: LedOutput, P: PowerControl>(
        &mut self,
        raw: u8,
        now: Instant,
        output: &mut O,
        power: &mut P,
    ) -> Result<BladeState, CommandRejected> {
        let command = HiltCommand::from_raw(raw).map_err(|err| CommandRejected::Unknown(err.0))?;

        let next = match command {
            HiltCommand::Ignite { family, profile } => {
                self.profile = Some(lookup(family, profile));
                BladeState::Igniting
            }
            HiltCommand::SetColor { family, profile } => {
                if !matches!(self.state, BladeState::Idle | BladeState::Off) {
                    return Err(CommandRejected::Blocked {
                        command,
                        state: self.state,
                    });
                }
                self.profile = Some(lookup(family, profile));
                BladeState::Refresh
            }
            HiltCommand::Off => BladeState::Off,
            HiltCommand::Extinguish => {
                self.require_profile(command)?;
                BladeState::Extinguishing
            }
            HiltCommand::Clash => {
                self.require_profile(command)?;
                BladeState::Clash
            }
            HiltCommand::FlickerLow(level) => {
                self.require_profile(command)?;
                self.flicker_level = level;
                BladeState::FlickerLow
            }
            HiltCommand::FlickerHigh(level) => {
                self.require_profile(command)?;
                self.flicker_level = level;
                BladeState::FlickerHigh
            }
        };

        self.last_command = Some(raw);
        if next != self.state {
            self.enter(next, now, output, power);
        }
        Ok(self.state)
    }

    /// Run the current state's timed step, if its timer has elapsed.
    ///
    /// Call on every pass of the scheduling loop.
    pub fn tick<O: LedOutput, P: PowerControl>(&mut self, now: Instant, output: &mut O, power: &mut P) {
        let Some(deadline) = self.timer else {
            return;
        };
        if now < deadline {
            return;
        }

        match self.state {
            BladeState::Igniting => {
                let Some(profile) = self.profile else {
                    return;
                };
                let span = animation::span(output.len(), self.config.mirrored);
                let elapsed = now.saturating_duration_since(deadline);
                let target = progress_steps(elapsed, profile.ignition_time, span);
                if self.animate_step < target {
                    animation::reveal(
                        output,
                        self.primary_color,
                        self.animate_step,
                        target,
                        self.config.mirrored,
                    );
                    self.animate_step = target;
                    self.dirty = true;
                }
                if target >= span {
                    self.timer = None;
                    self.enter(BladeState::On, now, output, power);
                }
            }
            BladeState::Extinguishing => {
                let Some(profile) = self.profile else {
                    return;
                };
                let span = animation::span(output.len(), self.config.mirrored);
                let elapsed = now.saturating_duration_since(deadline);
                let target = progress_steps(elapsed, profile.extinguish_time, span);
                if self.animate_step < target {
                    animation::conceal(output, self.animate_step, target, self.config.mirrored);
                    self.animate_step = target;
                    self.dirty = true;
                }
                if self.animate_step >= span {
                    self.timer = None;
                    self.enter(BladeState::Off, now, output, power);
                }
            }
            BladeState::Clash => {
                match self.color_mode {
                    ColorMode::WheelCycle => {
                        self.color_mode = ColorMode::WheelCycleWhite;
                        self.primary_color = BladeColor::White.color();
                        self.clash_color = CLASH_YELLOW;
                    }
                    ColorMode::WheelCycleWhite => {
                        self.color_mode = ColorMode::WheelCycle;
                        self.primary_color = color_wheel(self.wheel_index);
                        self.clash_color = CLASH_WHITE;
                    }
                    _ => {}
                }
                self.timer = None;
                output.fill_all(self.primary_color);
                self.dirty = true;
                self.enter(BladeState::Idle, now, output, power);
            }
            BladeState::FlickerLow | BladeState::FlickerHigh => {
                self.set_brightness(output, fade8(self.brightness));
                self.dirty = true;
                self.timer = None;
                self.enter(BladeState::Idle, now, output, power);
            }
            BladeState::Off => {
                #[cfg(feature = "esp32-log")]
                println!("[Blade] sleeping");
                let woke = power.request_sleep(now);
                self.timer = Some(woke + self.config.sleep_after);
            }
            BladeState::Idle => match self.color_mode {
                ColorMode::WheelCycleWhite => {
                    // White has been held long enough; resume the wheel
                    self.color_mode = ColorMode::WheelCycle;
                    self.clash_color = CLASH_WHITE;
                    self.advance_wheel(now, output);
                }
                ColorMode::WheelCycle => self.advance_wheel(now, output),
                _ => self.timer = None,
            },
            BladeState::Uninitialized | BladeState::On | BladeState::Refresh => {
                self.timer = None;
            }
        }
    }

    fn enter<O: LedOutput, P: PowerControl>(
        &mut self,
        state: BladeState,
        now: Instant,
        output: &mut O,
        power: &mut P,
    ) {
        // Only the idle color-cycle timer may carry across a transition
        if !(state.is_settled() && self.state.is_settled()) {
            self.timer = None;
            self.animate_step = 0;
        }
        #[cfg(feature = "esp32-log")]
        println!("[Blade] {:?} -> {:?}", self.state, state);
        self.state = state;

        match state {
            BladeState::Uninitialized => {}
            BladeState::Off => {
                self.timer = Some(now + self.config.sleep_after);
                output.clear();
                self.dirty = true;
                power.led_power(false);
            }
            BladeState::Igniting => {
                let quick = self.last_extinguish.is_some_and(|at| {
                    now.saturating_duration_since(at) < self.config.color_mode_change_time
                });
                if quick {
                    self.color_mode = self.color_mode.next();
                    #[cfg(feature = "esp32-log")]
                    println!("[Blade] color mode {:?}", self.color_mode);
                }
                self.apply_color_mode();
                power.led_power(true);
                output.clear();
                self.set_brightness(output, self.config.max_brightness);
                self.dirty = true;
                self.timer = Some(now);
            }
            BladeState::On => self.enter(BladeState::Idle, now, output, power),
            BladeState::Idle => {
                let pending = self.timer.is_some_and(|deadline| deadline >= now);
                if self.color_mode.is_cycling() && !pending {
                    let mut period = self.config.wheel_pause_time;
                    // Hold the clash white a little longer
                    if self.color_mode == ColorMode::WheelCycleWhite {
                        period += self.config.wheel_pause_time;
                    }
                    self.timer = Some(now + period);
                }
            }
            BladeState::Clash => {
                output.fill_all(self.clash_color);
                self.dirty = true;
                self.timer = Some(now + self.config.clash_duration);
            }
            BladeState::Extinguishing => {
                self.last_extinguish = Some(now);
                let delay = self
                    .profile
                    .map_or(Duration::from_millis(0), |profile| profile.extinguish_delay);
                self.timer = Some(now + delay);
            }
            BladeState::Refresh => {
                // Legacy hilts may change color without re-igniting
                if self.color_mode == ColorMode::Stock {
                    self.apply_color_mode();
                }
                power.led_power(true);
                output.fill_all(self.primary_color);
                self.set_brightness(output, self.config.max_brightness);
                self.dirty = true;
                self.enter(BladeState::On, now, output, power);
            }
            BladeState::FlickerLow => {
                let half = self.config.max_brightness >> 1;
                self.set_brightness(output, nibble_level(self.flicker_level, half));
                self.dirty = true;
                self.timer = Some(now + self.config.flicker_duration);
            }
            BladeState::FlickerHigh => {
                let half = self.config.max_brightness >> 1;
                let level = half.saturating_add(nibble_level(self.flicker_level, half));
                self.set_brightness(output, level);
                self.dirty = true;
                self.timer = Some(now + self.config.flicker_duration);
            }
        }
    }

    fn advance_wheel<O: LedOutput>(&mut self, now: Instant, output: &mut O) {
        self.wheel_index = self.wheel_index.wrapping_add(self.config.wheel_step);
        self.primary_color = color_wheel(self.wheel_index);
        output.fill_all(self.primary_color);
        self.dirty = true;
        self.timer = Some(now + self.config.wheel_pause_time);
    }

    fn apply_color_mode(&mut self) {
        if let Some(profile) = self.profile {
            let (primary, clash) = self.color_mode.colors(self.wheel_index, profile);
            self.primary_color = primary;
            self.clash_color = clash;
        }
    }

    fn set_brightness<O: LedOutput>(&mut self, output: &mut O, level: u8) {
        self.brightness = level;
        output.set_brightness(level);
    }

    fn require_profile(&self, command: HiltCommand) -> Result<(), CommandRejected> {
        if self.profile.is_none() {
            return Err(CommandRejected::NoProfile(command));
        }
        Ok(())
    }

    /// Clear and return the "frame needs presenting" flag
    pub fn take_dirty(&mut self) -> bool {
        core::mem::take(&mut self.dirty)
    }

    pub const fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub const fn state(&self) -> BladeState {
        self.state
    }

    pub const fn color_mode(&self) -> ColorMode {
        self.color_mode
    }

    pub const fn primary_color(&self) -> Rgb {
        self.primary_color
    }

    pub const fn clash_color(&self) -> Rgb {
        self.clash_color
    }

    pub const fn wheel_index(&self) -> u8 {
        self.wheel_index
    }

    /// Brightness last handed to the LED output
    pub const fn brightness(&self) -> u8 {
        self.brightness
    }

    pub const fn profile(&self) -> Option<&'static LightsaberProfile> {
        self.profile
    }

    /// Most recently applied command byte
    pub const fn last_command(&self) -> Option<u8> {
        self.last_command
    }

    /// Deadline of the current state's next timed step
    pub const fn next_step(&self) -> Option<Instant> {
        self.timer
    }

    pub const fn config(&self) -> &BladeConfig {
        &self.config
    }
}

impl Default for Blade {
    fn default() -> Self {
        Self::new(BladeConfig::default())
    }
}
