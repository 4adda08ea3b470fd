use crate::color::Rgb;

/// Map an 8-bit phase onto a fully saturated hue
///
/// The phase is inverted first, so increasing phase walks the wheel
/// red → blue → green → red in three 85-step segments.
pub const fn color_wheel(phase: u8) -> Rgb {
    let pos = 255 - phase;
    if pos < 85 {
        Rgb {
            r: 255 - pos * 3,
            g: 0,
            b: pos * 3,
        }
    } else if pos < 170 {
        let pos = pos - 85;
        Rgb {
            r: 0,
            g: pos * 3,
            b: 255 - pos * 3,
        }
    } else {
        let pos = pos - 170;
        Rgb {
            r: pos * 3,
            g: 255 - pos * 3,
            b: 0,
        }
    }
}
