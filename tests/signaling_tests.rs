//! Activity Signaling Tests
//!
//! Pulse expiry, retriggering, continuous-wave override and the scan level.
//! Run with: cargo test --target x86_64-unknown-linux-gnu --no-default-features --features std --test signaling_tests

mod common;

use common::{MockClock, MockPin};
use rf_demo_firmware::signaling::{ActivitySignaling, IndicatorState, PulseIndicator, Signaling};
use rf_demo_firmware::types::{Channel, LedState};

struct Board {
    clock: MockClock,
    scan: MockPin,
    tx: MockPin,
    rx: MockPin,
    signaling: Signaling<MockClock, MockPin>,
}

fn board() -> Board {
    board_with(100, 100)
}

fn board_with(tx_hold_ms: u32, rx_hold_ms: u32) -> Board {
    let clock = MockClock::new();
    let (scan, tx, rx) = (MockPin::new(), MockPin::new(), MockPin::new());
    let signaling = Signaling::with_hold_times(
        clock.clone(),
        scan.clone(),
        tx.clone(),
        rx.clone(),
        tx_hold_ms,
        rx_hold_ms,
    );
    Board {
        clock,
        scan,
        tx,
        rx,
        signaling,
    }
}

// =============================================================================
// Pulse Tests
// =============================================================================

#[test]
fn starts_dark() {
    let b = board();
    assert_eq!(b.signaling.channel(Channel::Tx), IndicatorState::Off);
    assert_eq!(b.signaling.channel(Channel::Rx), IndicatorState::Off);
    assert_eq!(b.signaling.scan(), LedState::Off);
    assert_eq!(b.tx.writes(), 0);
}

#[test]
fn default_hold_times_are_100ms() {
    let signaling = Signaling::new(MockClock::new(), MockPin::new(), MockPin::new(), MockPin::new());
    assert_eq!(signaling.indicator(Channel::Tx).hold_ms(), 100);
    assert_eq!(signaling.indicator(Channel::Rx).hold_ms(), 100);
}

#[test]
fn tx_lights_and_records_start() {
    let mut b = board();
    b.clock.set(42);
    b.signaling.tx();

    assert!(b.tx.is_set_high());
    assert!(!b.rx.is_set_high());
    assert_eq!(
        b.signaling.channel(Channel::Tx),
        IndicatorState::TimedOn { since_ms: 42 }
    );
}

#[test]
fn rx_scenario_off_after_threshold() {
    let mut b = board();
    b.signaling.rx();
    assert!(b.rx.is_set_high());

    b.clock.set(50);
    b.signaling.runtime();
    assert!(b.rx.is_set_high());
    assert!(b.signaling.channel(Channel::Rx).is_pending());

    b.clock.set(101);
    b.signaling.runtime();
    assert!(!b.rx.is_set_high());
    assert_eq!(b.signaling.channel(Channel::Rx), IndicatorState::Off);
}

#[test]
fn expiry_needs_strictly_more_than_hold() {
    let mut b = board();
    b.signaling.tx();

    b.clock.set(100);
    b.signaling.runtime();
    assert!(b.tx.is_set_high());

    b.clock.set(101);
    b.signaling.runtime();
    assert!(!b.tx.is_set_high());
}

#[test]
fn retrigger_keeps_indicator_on() {
    let mut b = board();
    for t in (0..2_000).step_by(60) {
        b.clock.set(t);
        b.signaling.tx();
        b.clock.set(t + 59);
        b.signaling.runtime();
        assert!(b.tx.is_set_high(), "tx dropped at {t}ms");
    }
}

#[test]
fn retrigger_restarts_hold_time() {
    let mut b = board();
    b.signaling.tx();
    b.clock.set(80);
    b.signaling.tx();

    b.clock.set(150);
    b.signaling.runtime();
    assert!(b.tx.is_set_high());

    b.clock.set(181);
    b.signaling.runtime();
    assert!(!b.tx.is_set_high());
}

#[test]
fn channels_expire_independently() {
    let mut b = board_with(50, 200);
    b.signaling.tx();
    b.signaling.rx();

    b.clock.set(51);
    b.signaling.runtime();
    assert!(!b.tx.is_set_high());
    assert!(b.rx.is_set_high());

    b.clock.set(201);
    b.signaling.runtime();
    assert!(!b.rx.is_set_high());
}

#[test]
fn expiry_survives_counter_wrap() {
    let mut b = board();
    b.clock.set(u32::MAX - 10);
    b.signaling.rx();

    b.clock.advance(60);
    b.signaling.runtime();
    assert!(b.rx.is_set_high());

    b.clock.advance(41);
    b.signaling.runtime();
    assert!(!b.rx.is_set_high());
}

#[test]
fn runtime_without_pending_pulses_writes_nothing() {
    let mut b = board();
    b.clock.set(5_000);
    b.signaling.runtime();
    b.signaling.runtime();
    assert_eq!(b.tx.writes(), 0);
    assert_eq!(b.rx.writes(), 0);
}

#[test]
fn expired_pulse_is_cleared_once() {
    let mut b = board();
    b.signaling.tx();
    b.clock.set(500);
    b.signaling.runtime();
    let writes = b.tx.writes();
    b.signaling.runtime();
    assert_eq!(b.tx.writes(), writes);
}

// =============================================================================
// Continuous Transmit Tests
// =============================================================================

#[test]
fn continuous_tx_holds_past_threshold() {
    let mut b = board();
    b.signaling.start_continuous_tx();
    assert!(b.tx.is_set_high());

    b.clock.set(10_000);
    b.signaling.runtime();
    assert!(b.tx.is_set_high());
    assert_eq!(b.signaling.channel(Channel::Tx), IndicatorState::Held);
}

#[test]
fn continuous_start_stop_leaves_tx_off() {
    let mut b = board();
    b.signaling.tx();
    b.clock.set(20);
    b.signaling.tx();
    b.signaling.start_continuous_tx();
    b.signaling.stop_continuous_tx();

    assert!(!b.tx.is_set_high());
    assert_eq!(b.signaling.channel(Channel::Tx), IndicatorState::Off);

    b.clock.set(1_000);
    b.signaling.runtime();
    assert!(!b.tx.is_set_high());
}

#[test]
fn continuous_tx_cancels_rx_expiry() {
    let mut b = board();
    b.signaling.rx();
    b.signaling.start_continuous_tx();

    assert!(!b.signaling.channel(Channel::Rx).is_pending());

    b.clock.set(1_000);
    b.signaling.runtime();
    // Expiry was cancelled, so the level is left as it was
    assert!(b.rx.is_set_high());
    assert_eq!(b.signaling.channel(Channel::Rx), IndicatorState::Held);
}

#[test]
fn continuous_tx_stop_cancels_rx_expiry() {
    let mut b = board();
    b.signaling.rx();
    b.signaling.stop_continuous_tx();

    assert_eq!(b.signaling.channel(Channel::Rx), IndicatorState::Held);

    b.clock.set(1_000);
    b.signaling.runtime();
    assert!(b.rx.is_set_high());
    assert_eq!(b.signaling.channel(Channel::Rx), IndicatorState::Held);
}

#[test]
fn tx_after_continuous_stop_pulses_again() {
    let mut b = board();
    b.signaling.start_continuous_tx();
    b.signaling.stop_continuous_tx();

    b.clock.set(300);
    b.signaling.tx();
    assert!(b.tx.is_set_high());
    b.clock.set(401);
    b.signaling.runtime();
    assert!(!b.tx.is_set_high());
}

// =============================================================================
// Scan Indicator Tests
// =============================================================================

#[test]
fn capture_drives_scan_level() {
    let mut b = board();
    b.signaling.start_capture();
    assert!(b.scan.is_set_high());
    assert_eq!(b.signaling.scan(), LedState::On);
    assert!(b.signaling.scan().is_on());

    b.clock.set(10_000);
    b.signaling.runtime();
    assert!(b.scan.is_set_high());

    b.signaling.stop_capture();
    assert!(!b.scan.is_set_high());
    assert_eq!(b.signaling.scan(), LedState::Off);
    assert!(!b.signaling.scan().is_on());
}

#[test]
fn scan_is_independent_of_pulses() {
    let mut b = board();
    b.signaling.start_capture();
    b.signaling.tx();
    b.signaling.stop_continuous_tx();
    assert!(b.scan.is_set_high());
}

// =============================================================================
// Fault Tolerance Tests
// =============================================================================

#[test]
fn failing_line_does_not_stop_state_machine() {
    let clock = MockClock::new();
    let tx = MockPin::failing();
    let mut signaling = Signaling::new(clock.clone(), MockPin::new(), tx, MockPin::new());

    signaling.tx();
    assert!(signaling.channel(Channel::Tx).is_pending());

    clock.set(101);
    signaling.runtime();
    assert_eq!(signaling.channel(Channel::Tx), IndicatorState::Off);
}

// =============================================================================
// PulseIndicator Tests
// =============================================================================

#[test]
fn pulse_indicator_poll_reports_expiry() {
    let pin = MockPin::new();
    let mut led = PulseIndicator::new(pin.clone(), 10, "TEST");

    assert!(!led.poll(0));
    led.trigger(0);
    assert!(!led.poll(10));
    assert!(led.poll(11));
    assert!(!led.poll(12));
    assert!(!pin.is_set_high());
}

#[test]
fn cancel_expiry_only_affects_pending_pulses() {
    let mut led = PulseIndicator::new(MockPin::new(), 10, "TEST");
    led.cancel_expiry();
    assert_eq!(led.state(), IndicatorState::Off);

    led.trigger(0);
    led.cancel_expiry();
    assert_eq!(led.state(), IndicatorState::Held);
    assert!(led.state().is_lit());
}
