/// Position of the blade in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BladeState {
    /// Before [`Blade::start`](super::Blade::start)
    #[default]
    Uninitialized,
    /// Dark, LED power cut; sleeps after a while
    Off,
    /// Reveal animation running
    Igniting,
    /// Ignition just completed; passes straight through to `Idle`
    On,
    /// Fully lit and settled
    Idle,
    /// Impact flash
    Clash,
    /// Extinguish delay, then conceal animation
    Extinguishing,
    /// Color refresh sent by the hilt; passes through `On` to `Idle`
    Refresh,
    /// Dimmed by a low flicker command
    FlickerLow,
    /// Brightened by a high flicker command
    FlickerHigh,
}

impl BladeState {
    /// States in which no profile has necessarily been selected yet
    pub const fn is_pre_ignition(self) -> bool {
        matches!(self, Self::Uninitialized | Self::Off)
    }

    /// States that may keep the idle color-cycle timer running across
    /// transitions between them
    pub(crate) const fn is_settled(self) -> bool {
        matches!(self, Self::Idle | Self::Refresh | Self::On)
    }
}
