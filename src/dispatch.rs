//! Mode Dispatch Loop
//!
//! Single-threaded scheduler for the whole front end. The operating mode
//! is sampled once at start; afterwards every iteration polls the
//! indicator timers first and then hands control to the supervisor
//! routine for that mode. Nothing here blocks; the loop is the schedule.

use embedded_hal::digital::{InputPin, PinState};

use crate::antenna::AntennaSelector;
use crate::signaling::ActivitySignaling;
use crate::time::TimeSource;
use crate::types::OperatingMode;

/// Collaborators the supervisory logic acts through
pub struct Services<C, S, A> {
    /// Board time base
    pub clock: C,
    /// Activity indicators
    pub signaling: S,
    /// RF path switch
    pub antenna: A,
}

impl<C, S, A> Services<C, S, A>
where
    C: TimeSource,
    S: ActivitySignaling,
    A: AntennaSelector,
{
    /// Bundle the collaborators
    #[must_use]
    pub const fn new(clock: C, signaling: S, antenna: A) -> Self {
        Self {
            clock,
            signaling,
            antenna,
        }
    }
}

/// Menu/demo state machine driven by the dispatch loop
///
/// Each routine is one non-blocking step; the loop calls it again on the
/// next iteration.
pub trait Supervisor<C, S, A> {
    /// One-time setup before the loop starts
    fn init(&mut self, _services: &mut Services<C, S, A>) {}

    /// One step of the operator-driven flow
    fn runtime(&mut self, services: &mut Services<C, S, A>);

    /// One step of the self-running demo
    fn runtime_auto(&mut self, services: &mut Services<C, S, A>);
}

/// Sample the mode-select input
///
/// An unreadable input counts as manual mode.
#[must_use]
pub fn sample_mode<I: InputPin>(input: &mut I) -> OperatingMode {
    match input.is_low() {
        Ok(low) => OperatingMode::from_level(PinState::from(!low)),
        Err(_) => {
            warn!("mode-select input unreadable, using manual mode");
            OperatingMode::Manual
        }
    }
}

/// The boot-time polling loop
pub struct Dispatcher<C, S, A, V> {
    mode: OperatingMode,
    services: Services<C, S, A>,
    supervisor: V,
    iterations: u32,
}

impl<C, S, A, V> Dispatcher<C, S, A, V>
where
    C: TimeSource,
    S: ActivitySignaling,
    A: AntennaSelector,
    V: Supervisor<C, S, A>,
{
    /// Initialize the supervisor, then latch the operating mode from `mode_input`
    #[must_use]
    pub fn start<I: InputPin>(
        mode_input: &mut I,
        services: Services<C, S, A>,
        supervisor: V,
    ) -> Self {
        let mut dispatcher = Self::new(OperatingMode::Manual, services, supervisor);
        dispatcher.supervisor.init(&mut dispatcher.services);
        dispatcher.mode = sample_mode(mode_input);
        info!("operating mode: {}", dispatcher.mode);
        dispatcher
    }

    /// Build a dispatcher for an already-known mode
    #[must_use]
    pub const fn new(mode: OperatingMode, services: Services<C, S, A>, supervisor: V) -> Self {
        Self {
            mode,
            services,
            supervisor,
            iterations: 0,
        }
    }

    /// Latched operating mode
    #[must_use]
    pub const fn mode(&self) -> OperatingMode {
        self.mode
    }

    /// Loop iterations completed (wraps)
    #[must_use]
    pub const fn iterations(&self) -> u32 {
        self.iterations
    }

    /// Borrow the collaborators
    #[must_use]
    pub const fn services(&self) -> &Services<C, S, A> {
        &self.services
    }

    /// Mutably borrow the collaborators
    pub fn services_mut(&mut self) -> &mut Services<C, S, A> {
        &mut self.services
    }

    /// Borrow the supervisor
    #[must_use]
    pub const fn supervisor(&self) -> &V {
        &self.supervisor
    }

    /// Run one loop iteration
    pub fn poll(&mut self) {
        self.services.signaling.runtime();
        if self.mode.is_automatic() {
            self.supervisor.runtime_auto(&mut self.services);
        } else {
            self.supervisor.runtime(&mut self.services);
        }
        self.iterations = self.iterations.wrapping_add(1);
    }

    /// Poll forever; only a reset leaves this
    pub fn run(mut self) -> ! {
        info!("entering dispatch loop");
        loop {
            self.poll();
        }
    }
}
