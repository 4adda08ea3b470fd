use embassy_time::Duration;

/// Scale an 8-bit value by a factor (0-255 = 0.0-1.0)
///
/// Uses integer math for efficiency on embedded systems.
#[inline]
#[allow(clippy::cast_lossless, clippy::cast_possible_truncation)]
pub const fn scale8(value: u8, scale: u8) -> u8 {
    ((value as u16 * (1 + scale as u16)) >> 8) as u8
}

/// 80% of `value`, rounded down
#[inline]
pub const fn fade8(value: u8) -> u8 {
    scale8(value, 204)
}

/// Map a 4-bit level onto `0..=max`
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub const fn nibble_level(level: u8, max: u8) -> u8 {
    let level = if level > 0x0F { 0x0F } else { level };
    ((level as u16 * max as u16) / 0x0F) as u8
}

/// Number of steps out of `total_steps` that should be done after `elapsed`
/// of `duration`, rounded to the nearest step and clamped to `total_steps`.
///
/// A zero-length duration is complete immediately.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss
)]
pub fn progress_steps(elapsed: Duration, duration: Duration, total_steps: usize) -> usize {
    if duration.as_micros() == 0 || elapsed >= duration {
        return total_steps;
    }
    let fraction = elapsed.as_micros() as f32 / duration.as_micros() as f32;
    let steps = libm::roundf(fraction * total_steps as f32) as usize;
    steps.min(total_steps)
}
