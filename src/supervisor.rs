//! Heartbeat Supervisor
//!
//! Minimal supervisory routine used by the board binary when no radio
//! demo is attached. It only exercises the feedback hardware: automatic
//! mode alternates antenna paths and pulses the transmit LED, manual mode
//! pulses the receive LED.

use crate::antenna::AntennaSelector;
use crate::config::{AUTO_HEARTBEAT_MS, MANUAL_HEARTBEAT_MS};
use crate::dispatch::{Services, Supervisor};
use crate::signaling::ActivitySignaling;
use crate::time::{Interval, TimeSource};
use crate::types::AntennaPath;

/// Blink-only supervisor
#[derive(Clone, Copy, Debug)]
pub struct HeartbeatSupervisor {
    auto_beat: Interval,
    manual_beat: Interval,
    next_path: AntennaPath,
    beats: u32,
}

impl HeartbeatSupervisor {
    /// Create with the configured heartbeat periods
    #[must_use]
    pub const fn new() -> Self {
        Self::with_periods(AUTO_HEARTBEAT_MS, MANUAL_HEARTBEAT_MS)
    }

    /// Create with explicit periods
    #[must_use]
    pub const fn with_periods(auto_ms: u32, manual_ms: u32) -> Self {
        Self {
            auto_beat: Interval::new(auto_ms),
            manual_beat: Interval::new(manual_ms),
            next_path: AntennaPath::A,
            beats: 0,
        }
    }

    /// Heartbeats emitted so far
    #[must_use]
    pub const fn beats(&self) -> u32 {
        self.beats
    }

    /// Path the next automatic heartbeat will select
    #[must_use]
    pub const fn next_path(&self) -> AntennaPath {
        self.next_path
    }
}

impl Default for HeartbeatSupervisor {
    fn default() -> Self {
        Self::new()
    }
}

impl<C, S, A> Supervisor<C, S, A> for HeartbeatSupervisor
where
    C: TimeSource,
    S: ActivitySignaling,
    A: AntennaSelector,
{
    fn init(&mut self, services: &mut Services<C, S, A>) {
        services.signaling.stop_capture();
        services.signaling.stop_continuous_tx();
        services.antenna.select(self.next_path);
        self.next_path = self.next_path.other();
    }

    fn runtime(&mut self, services: &mut Services<C, S, A>) {
        if self.manual_beat.check(services.clock.now_ms()) {
            services.signaling.rx();
            self.beats = self.beats.wrapping_add(1);
        }
    }

    fn runtime_auto(&mut self, services: &mut Services<C, S, A>) {
        if self.auto_beat.check(services.clock.now_ms()) {
            services.antenna.select(self.next_path);
            self.next_path = self.next_path.other();
            services.signaling.tx();
            self.beats = self.beats.wrapping_add(1);
        }
    }
}
