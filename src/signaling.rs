//! Activity Signaling
//!
//! Visual feedback for radio activity. The transmit and receive LEDs are
//! pulse indicators: each event lights the LED and [`ActivitySignaling::runtime`]
//! turns it off once the hold time has strictly elapsed since the most
//! recent event. The scan LED is a plain level with no timer.
//!
//! Worst-case on-time of a pulse is the hold time plus one loop period,
//! so `runtime()` must be polled every control-loop iteration.

use embedded_hal::digital::OutputPin;

use crate::config::{RX_INDICATOR_ON_MS, TX_INDICATOR_ON_MS};
use crate::line::drive;
use crate::time::{elapsed_ms, TimeSource};
use crate::types::{Channel, LedState};

/// Signaling capability used by the supervisory logic
pub trait ActivitySignaling {
    /// Light the scan indicator
    fn start_capture(&mut self);

    /// Clear the scan indicator
    fn stop_capture(&mut self);

    /// Pulse the transmit indicator
    fn tx(&mut self);

    /// Pulse the receive indicator
    fn rx(&mut self);

    /// Hold the transmit indicator on for a continuous-wave transmission
    fn start_continuous_tx(&mut self);

    /// End a continuous-wave transmission
    fn stop_continuous_tx(&mut self);

    /// Expire pulses whose hold time has passed
    fn runtime(&mut self);
}

/// State of a pulse indicator
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum IndicatorState {
    /// Dark, nothing pending
    #[default]
    Off,
    /// Lit, expires after the hold time measured from `since_ms`
    TimedOn {
        /// Clock reading at the last event
        since_ms: u32,
    },
    /// Lit with no pending expiry
    Held,
}

impl IndicatorState {
    /// Check if an expiry is pending
    #[must_use]
    pub const fn is_pending(self) -> bool {
        matches!(self, Self::TimedOn { .. })
    }

    /// Check if the indicator is lit
    #[must_use]
    pub const fn is_lit(self) -> bool {
        !matches!(self, Self::Off)
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for IndicatorState {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::Off => defmt::write!(f, "Off"),
            Self::TimedOn { since_ms } => defmt::write!(f, "TimedOn({}ms)", since_ms),
            Self::Held => defmt::write!(f, "Held"),
        }
    }
}

/// One LED with a self-clearing pulse timer
pub struct PulseIndicator<P> {
    pin: P,
    hold_ms: u32,
    state: IndicatorState,
    line: &'static str,
}

impl<P: OutputPin> PulseIndicator<P> {
    /// Wrap an output line already driven low
    #[must_use]
    pub const fn new(pin: P, hold_ms: u32, line: &'static str) -> Self {
        Self {
            pin,
            hold_ms,
            state: IndicatorState::Off,
            line,
        }
    }

    /// Current state
    #[must_use]
    pub const fn state(&self) -> IndicatorState {
        self.state
    }

    /// Hold time in milliseconds
    #[must_use]
    pub const fn hold_ms(&self) -> u32 {
        self.hold_ms
    }

    /// Borrow the output line
    #[must_use]
    pub const fn pin(&self) -> &P {
        &self.pin
    }

    /// Light and (re)start the hold timer
    pub fn trigger(&mut self, now_ms: u32) {
        self.state = IndicatorState::TimedOn { since_ms: now_ms };
        drive(&mut self.pin, LedState::On.pin_state(), self.line);
    }

    /// Light with no expiry
    pub fn hold(&mut self) {
        self.state = IndicatorState::Held;
        drive(&mut self.pin, LedState::On.pin_state(), self.line);
    }

    /// Go dark and drop any pending expiry
    pub fn clear(&mut self) {
        self.state = IndicatorState::Off;
        drive(&mut self.pin, LedState::Off.pin_state(), self.line);
    }

    /// Drop a pending expiry, leaving the LED level as it is
    pub fn cancel_expiry(&mut self) {
        if self.state.is_pending() {
            self.state = IndicatorState::Held;
        }
    }

    /// Turn off if the hold time has strictly elapsed
    ///
    /// Returns `true` when this call expired the pulse.
    pub fn poll(&mut self, now_ms: u32) -> bool {
        match self.state {
            IndicatorState::TimedOn { since_ms } if elapsed_ms(now_ms, since_ms) > self.hold_ms => {
                self.clear();
                true
            }
            _ => false,
        }
    }
}

/// The board's three activity LEDs
pub struct Signaling<C, P> {
    clock: C,
    scan: P,
    scan_state: LedState,
    tx: PulseIndicator<P>,
    rx: PulseIndicator<P>,
}

impl<C: TimeSource, P: OutputPin> Signaling<C, P> {
    /// Create signaling with the default hold times
    #[must_use]
    pub const fn new(clock: C, scan: P, tx: P, rx: P) -> Self {
        Self::with_hold_times(clock, scan, tx, rx, TX_INDICATOR_ON_MS, RX_INDICATOR_ON_MS)
    }

    /// Create signaling with explicit per-channel hold times
    #[must_use]
    pub const fn with_hold_times(
        clock: C,
        scan: P,
        tx: P,
        rx: P,
        tx_hold_ms: u32,
        rx_hold_ms: u32,
    ) -> Self {
        Self {
            clock,
            scan,
            scan_state: LedState::Off,
            tx: PulseIndicator::new(tx, tx_hold_ms, "LED_TX"),
            rx: PulseIndicator::new(rx, rx_hold_ms, "LED_RX"),
        }
    }

    /// State of a pulse channel
    #[must_use]
    pub const fn channel(&self, channel: Channel) -> IndicatorState {
        match channel {
            Channel::Tx => self.tx.state(),
            Channel::Rx => self.rx.state(),
        }
    }

    /// Borrow a pulse channel
    #[must_use]
    pub const fn indicator(&self, channel: Channel) -> &PulseIndicator<P> {
        match channel {
            Channel::Tx => &self.tx,
            Channel::Rx => &self.rx,
        }
    }

    /// Scan LED level
    #[must_use]
    pub const fn scan(&self) -> LedState {
        self.scan_state
    }

    /// Borrow the scan LED line
    #[must_use]
    pub const fn scan_pin(&self) -> &P {
        &self.scan
    }

    fn set_scan(&mut self, state: LedState) {
        self.scan_state = state;
        drive(&mut self.scan, state.pin_state(), "LED_SCAN");
    }
}

impl<C: TimeSource, P: OutputPin> ActivitySignaling for Signaling<C, P> {
    fn start_capture(&mut self) {
        self.set_scan(LedState::On);
    }

    fn stop_capture(&mut self) {
        self.set_scan(LedState::Off);
    }

    fn tx(&mut self) {
        let now = self.clock.now_ms();
        self.tx.trigger(now);
    }

    fn rx(&mut self) {
        let now = self.clock.now_ms();
        self.rx.trigger(now);
    }

    fn start_continuous_tx(&mut self) {
        self.rx.cancel_expiry();
        self.tx.hold();
        debug!("continuous tx indicator on");
    }

    fn stop_continuous_tx(&mut self) {
        self.rx.cancel_expiry();
        self.tx.clear();
        debug!("continuous tx indicator off");
    }

    fn runtime(&mut self) {
        let now = self.clock.now_ms();
        if self.tx.poll(now) {
            trace!("{} indicator expired at {}ms", Channel::Tx, now);
        }
        if self.rx.poll(now) {
            trace!("{} indicator expired at {}ms", Channel::Rx, now);
        }
    }
}
