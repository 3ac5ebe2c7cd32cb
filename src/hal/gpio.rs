//! GPIO Abstractions
//!
//! Board-side implementations of the line traits used by the core.

use embassy_stm32::gpio::{Flex, Level, Speed};
use embedded_hal::digital::PinState;

use crate::line::ConfigurableLine;

/// Convert an `embedded-hal` level to an embassy level
#[must_use]
pub fn level(state: PinState) -> Level {
    Level::from(bool::from(state))
}

/// Flex pins start disconnected and become push-pull outputs on demand
impl ConfigurableLine for Flex<'_> {
    fn configure_output(&mut self, initial: PinState) {
        // Latch the level before enabling the driver so the line never glitches
        self.set_level(level(initial));
        self.set_as_output(Speed::Low);
    }
}
