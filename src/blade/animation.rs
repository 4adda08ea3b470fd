//! Reveal and conceal sweeps
//!
//! A mirrored install folds one strip in half to form the blade: both strip
//! ends sit at the hilt and the middle pixel is the tip.

use crate::LedOutput;
use crate::color::{OFF, Rgb};

/// Number of sweep steps for a strip of `len` pixels
pub(crate) const fn span(len: usize, mirrored: bool) -> usize {
    if !mirrored {
        return len;
    }
    let mut half = len / 2;
    if !len.is_multiple_of(2) {
        half += 1;
    }
    half
}

/// Light steps `from..to`, counted from the hilt
pub(crate) fn reveal<O: LedOutput>(output: &mut O, color: Rgb, from: usize, to: usize, mirrored: bool) {
    if from >= to {
        return;
    }
    output.fill_range(color, from, to - from);
    if mirrored {
        let len = output.len();
        output.fill_range(color, len - to, to - from);
    }
}

/// Darken steps `from..to`, counted from the tip
pub(crate) fn conceal<O: LedOutput>(output: &mut O, from: usize, to: usize, mirrored: bool) {
    if from >= to {
        return;
    }
    let len = output.len();
    if mirrored {
        let span = span(len, true);
        // Steps grow outward from the middle on both halves
        output.fill_range(OFF, span - to, to - from);
        output.fill_range(OFF, len - span + from, to - from);
    } else {
        output.fill_range(OFF, len - to, to - from);
    }
}
