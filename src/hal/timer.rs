//! Timer Abstractions
//!
//! System time base backed by the embassy time driver.

use embassy_time::Instant;

use crate::time::TimeSource;

/// Millisecond clock read from the free-running embassy time driver
///
/// Zero-sized; copies all read the same counter.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl SystemClock {
    /// Create a handle to the system clock
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl TimeSource for SystemClock {
    // Truncation to 32 bits is the wrap the rest of the firmware expects
    #[allow(clippy::cast_possible_truncation)]
    fn now_ms(&self) -> u32 {
        Instant::now().as_millis() as u32
    }
}

impl defmt::Format for SystemClock {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "SystemClock({}ms)", self.now_ms());
    }
}
