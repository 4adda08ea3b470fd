use crate::color::{BladeColor, CLASH_WHITE, CLASH_YELLOW, Rgb, color_wheel};
use crate::profile::LightsaberProfile;

/// Cosmetic color behavior, switched by quickly re-igniting the blade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Profile colors
    #[default]
    Stock,
    /// Walk the color wheel while idle
    WheelCycle,
    /// `WheelCycle` showing white after a clash
    WheelCycleWhite,
    /// Freeze the current wheel color
    WheelHold,
    /// Freeze on white
    WheelHoldWhite,
}

impl ColorMode {
    /// Mode selected by a quick re-ignite
    pub const fn next(self) -> Self {
        match self {
            Self::Stock => Self::WheelCycle,
            Self::WheelCycle => Self::WheelHold,
            Self::WheelCycleWhite => Self::WheelHoldWhite,
            Self::WheelHold | Self::WheelHoldWhite => Self::Stock,
        }
    }

    /// True for the modes that advance the wheel while idle
    pub const fn is_cycling(self) -> bool {
        matches!(self, Self::WheelCycle | Self::WheelCycleWhite)
    }

    /// Primary and clash colors for this mode
    pub(crate) fn colors(self, wheel_index: u8, profile: &LightsaberProfile) -> (Rgb, Rgb) {
        match self {
            Self::WheelCycle | Self::WheelHold => (color_wheel(wheel_index), CLASH_WHITE),
            Self::WheelCycleWhite | Self::WheelHoldWhite => {
                (BladeColor::White.color(), CLASH_YELLOW)
            }
            Self::Stock => (profile.color.color(), profile.color.clash_color()),
        }
    }
}
