//! Shared types used across the firmware
//!
//! Small domain enums that give meaning to raw line levels and
//! boot-time decisions.

use embedded_hal::digital::PinState;

/// Indicator LED level
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LedState {
    /// LED is off
    #[default]
    Off,
    /// LED is on
    On,
}

impl LedState {
    /// Toggle the LED state
    #[must_use]
    pub const fn toggle(self) -> Self {
        match self {
            Self::Off => Self::On,
            Self::On => Self::Off,
        }
    }

    /// Check if lit
    #[must_use]
    pub const fn is_on(self) -> bool {
        matches!(self, Self::On)
    }

    /// Electrical level driving this state (indicators are active high)
    #[must_use]
    pub const fn pin_state(self) -> PinState {
        match self {
            Self::Off => PinState::Low,
            Self::On => PinState::High,
        }
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for LedState {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::Off => defmt::write!(f, "OFF"),
            Self::On => defmt::write!(f, "ON"),
        }
    }
}

/// Physical RF route selected by the antenna switch
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AntennaPath {
    /// First antenna: control line low, complementary line high
    A,
    /// Second antenna: control line high, complementary line low
    B,
}

impl AntennaPath {
    /// Level of the control line for this path
    #[must_use]
    pub const fn ctrl_level(self) -> PinState {
        match self {
            Self::A => PinState::Low,
            Self::B => PinState::High,
        }
    }

    /// Level of the complementary control line for this path
    #[must_use]
    pub const fn ctrl_n_level(self) -> PinState {
        match self {
            Self::A => PinState::High,
            Self::B => PinState::Low,
        }
    }

    /// The other path
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::A => Self::B,
            Self::B => Self::A,
        }
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for AntennaPath {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::A => defmt::write!(f, "ANT-A"),
            Self::B => defmt::write!(f, "ANT-B"),
        }
    }
}

/// Supervisory flavour chosen once at boot
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum OperatingMode {
    /// Operator-driven demo (menu/input flow)
    #[default]
    Manual,
    /// Self-running demo sequence
    Automatic,
}

impl OperatingMode {
    /// Decode the mode-select input level
    #[must_use]
    pub fn from_level(level: PinState) -> Self {
        if level == crate::config::AUTOMATIC_MODE_LEVEL {
            Self::Automatic
        } else {
            Self::Manual
        }
    }

    /// Check for automatic mode
    #[must_use]
    pub const fn is_automatic(self) -> bool {
        matches!(self, Self::Automatic)
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for OperatingMode {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::Manual => defmt::write!(f, "manual"),
            Self::Automatic => defmt::write!(f, "automatic"),
        }
    }
}

/// Timed activity indicator channel
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Channel {
    /// Transmit indicator
    Tx,
    /// Receive indicator
    Rx,
}

#[cfg(feature = "embedded")]
impl defmt::Format for Channel {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::Tx => defmt::write!(f, "TX"),
            Self::Rx => defmt::write!(f, "RX"),
        }
    }
}
