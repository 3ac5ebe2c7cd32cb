//! Output line helpers
//!
//! Board lines are driven through the fallible `embedded-hal` traits.
//! Write failures are not actionable in this firmware, so they are logged
//! and dropped here rather than threaded through every caller.

use embedded_hal::digital::{OutputPin, PinState};

/// Output line whose direction is configured at runtime
///
/// Implemented by pins that start life unconfigured (e.g. a flex pin) and
/// are switched to push-pull output on first use.
pub trait ConfigurableLine: OutputPin {
    /// Switch the line to output mode, driving `initial` immediately
    fn configure_output(&mut self, initial: PinState);
}

/// Drive `pin` to `state`, logging instead of propagating a failure
pub(crate) fn drive<P: OutputPin>(pin: &mut P, state: PinState, line: &'static str) {
    if pin.set_state(state).is_err() {
        warn!("gpio write to {} failed", line);
    }
}
