//! Time Base
//!
//! Millisecond readings from the free-running system ticker and the
//! wrap-tolerant arithmetic every timeout in the firmware relies on.

/// Monotonic clock capability
///
/// Readings are non-decreasing until the 32-bit millisecond counter wraps
/// (about 49.7 days). Never compare two readings with `<`; go through
/// [`elapsed_ms`] instead.
pub trait TimeSource {
    /// Milliseconds since boot, modulo 2^32
    fn now_ms(&self) -> u32;

    /// Seconds since boot, derived from the same millisecond ticker
    fn now_s(&self) -> u32 {
        self.now_ms() / 1000
    }
}

impl<T: TimeSource + ?Sized> TimeSource for &T {
    fn now_ms(&self) -> u32 {
        (**self).now_ms()
    }

    fn now_s(&self) -> u32 {
        (**self).now_s()
    }
}

/// Milliseconds from `since` to `now`, correct across one counter wrap
#[must_use]
pub const fn elapsed_ms(now: u32, since: u32) -> u32 {
    now.wrapping_sub(since)
}

/// Rate limiter for periodic operations
///
/// Driven by explicit clock readings so it can run inside the polling
/// loop without owning a clock.
#[derive(Clone, Copy, Debug)]
pub struct Interval {
    period_ms: u32,
    last: Option<u32>,
}

impl Interval {
    /// Create an interval from its period
    #[must_use]
    pub const fn new(period_ms: u32) -> Self {
        Self {
            period_ms,
            last: None,
        }
    }

    /// Period in milliseconds
    #[must_use]
    pub const fn period_ms(&self) -> u32 {
        self.period_ms
    }

    /// Check if a period has passed (and restart it if so)
    ///
    /// The first call always fires.
    pub fn check(&mut self, now_ms: u32) -> bool {
        match self.last {
            Some(last) if elapsed_ms(now_ms, last) < self.period_ms => false,
            _ => {
                self.last = Some(now_ms);
                true
            }
        }
    }

    /// Time until the next period fires
    #[must_use]
    pub fn remaining_ms(&self, now_ms: u32) -> u32 {
        self.last.map_or(0, |last| {
            self.period_ms.saturating_sub(elapsed_ms(now_ms, last))
        })
    }

    /// Forget the last firing so the next check fires immediately
    pub fn reset(&mut self) {
        self.last = None;
    }
}
