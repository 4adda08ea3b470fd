mod palette;
mod wheel;

use smart_leds::RGB8;

pub use palette::{BladeColor, CLASH_ORANGE, CLASH_WHITE, CLASH_YELLOW, OFF};
pub use wheel::color_wheel;

pub type Rgb = RGB8;
