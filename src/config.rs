//! System configuration and hardware constants
//!
//! Compile-time constants for the radio demo board. Pin mappings, timing
//! thresholds and boot parameters are centralized here.

use embedded_hal::digital::PinState;

/// Transmit indicator on-time after a single `tx()` event
pub const TX_INDICATOR_ON_MS: u32 = 100;

/// Receive indicator on-time after a single `rx()` event
pub const RX_INDICATOR_ON_MS: u32 = 100;

/// Blocking delay between peripheral init and collaborator bring-up
pub const STARTUP_DELAY_MS: u32 = 500;

/// Mode-select input level that selects the automatic demo
pub const AUTOMATIC_MODE_LEVEL: PinState = PinState::Low;

/// Heartbeat period of the automatic boot supervisor
pub const AUTO_HEARTBEAT_MS: u32 = 1_000;

/// Heartbeat period of the manual boot supervisor
pub const MANUAL_HEARTBEAT_MS: u32 = 2_000;

/// Pin assignments for GPIO
pub mod pins {
    //! GPIO pin assignments matching the schematic

    /// Scan activity indicator
    pub const LED_SCAN: &str = "PB5";

    /// Transmit activity indicator
    pub const LED_TX: &str = "PC1";

    /// Receive activity indicator
    pub const LED_RX: &str = "PC0";

    /// Antenna switch control line
    pub const ANT_SW_CTRL: &str = "PC8";

    /// Antenna switch complementary control line
    pub const ANT_SW_CTRL_N: &str = "PC6";

    /// Boot mode-select input (user button, low selects automatic)
    pub const MODE_SELECT: &str = "PC13";
}
