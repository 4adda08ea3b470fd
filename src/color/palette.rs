//! Stock blade colors
//!
//! Values follow the PWM duty cycles measured on a stock blade controller.
//! The clash color belongs to the blade color, not to the hilt.

use crate::color::Rgb;

pub const OFF: Rgb = Rgb { r: 0, g: 0, b: 0 };

pub const CLASH_WHITE: Rgb = Rgb {
    r: 128,
    g: 128,
    b: 128,
};
pub const CLASH_YELLOW: Rgb = Rgb {
    r: 255,
    g: 255,
    b: 0,
};
pub const CLASH_ORANGE: Rgb = Rgb {
    r: 255,
    g: 64,
    b: 0,
};

/// Colors a stock blade can produce
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BladeColor {
    White,
    Red,
    Orange,
    Yellow,
    Green,
    Cyan,
    Blue,
    Purple,
    /// Present in stock controllers but never selected by a known hilt
    DarkPurple,
    /// Baylan Skoll and Shin Hati legacy hilts
    OrangeRed,
}

impl BladeColor {
    /// Blade fill color
    pub const fn color(self) -> Rgb {
        let (r, g, b) = match self {
            Self::White => (112, 112, 112),
            Self::Red => (255, 0, 0),
            Self::Orange => (255, 102, 0),
            Self::Yellow => (152, 152, 0),
            Self::Green => (0, 255, 0),
            Self::Cyan => (0, 152, 152),
            Self::Blue => (0, 0, 255),
            Self::Purple => (152, 0, 152),
            Self::DarkPurple => (16, 0, 32),
            Self::OrangeRed => (192, 32, 0),
        };
        Rgb { r, g, b }
    }

    /// Color flashed on clash
    pub const fn clash_color(self) -> Rgb {
        match self {
            Self::Red | Self::DarkPurple => CLASH_ORANGE,
            Self::Orange | Self::Yellow => CLASH_WHITE,
            Self::White
            | Self::Green
            | Self::Cyan
            | Self::Blue
            | Self::Purple
            | Self::OrangeRed => CLASH_YELLOW,
        }
    }
}
