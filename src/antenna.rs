//! Antenna Path Selector
//!
//! The RF switch has two complementary control lines; exactly one is
//! driven high once a path has been selected. Lines are left untouched
//! until the first selection, at which point both are configured as
//! low outputs before the requested pair is applied.

use embedded_hal::digital::PinState;

use crate::line::{drive, ConfigurableLine};
use crate::types::AntennaPath;

/// Antenna routing capability used by the supervisory logic
pub trait AntennaSelector {
    /// Route RF to the first antenna
    fn select_path_a(&mut self);

    /// Route RF to the second antenna
    fn select_path_b(&mut self);

    /// Route RF to `path`
    fn select(&mut self, path: AntennaPath) {
        match path {
            AntennaPath::A => self.select_path_a(),
            AntennaPath::B => self.select_path_b(),
        }
    }
}

/// Dual-line RF switch driver with lazy line configuration
pub struct AntennaSwitch<P> {
    ctrl: P,
    ctrl_n: P,
    initialized: bool,
    current: Option<AntennaPath>,
}

impl<P: ConfigurableLine> AntennaSwitch<P> {
    /// Take ownership of the two control lines without touching them
    #[must_use]
    pub const fn new(ctrl: P, ctrl_n: P) -> Self {
        Self {
            ctrl,
            ctrl_n,
            initialized: false,
            current: None,
        }
    }

    /// Whether the lines have been configured as outputs
    #[must_use]
    pub const fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Last selected path (`None` before the first selection)
    #[must_use]
    pub const fn current(&self) -> Option<AntennaPath> {
        self.current
    }

    /// Borrow the control and complementary lines
    #[must_use]
    pub const fn lines(&self) -> (&P, &P) {
        (&self.ctrl, &self.ctrl_n)
    }

    /// Release the control lines
    pub fn release(self) -> (P, P) {
        (self.ctrl, self.ctrl_n)
    }

    fn init_if_needed(&mut self) {
        if self.initialized {
            return;
        }
        self.ctrl.configure_output(PinState::Low);
        self.ctrl_n.configure_output(PinState::Low);
        self.initialized = true;
        debug!("antenna switch lines configured");
    }

    fn apply(&mut self, path: AntennaPath) {
        self.init_if_needed();

        drive(&mut self.ctrl, path.ctrl_level(), "ANT_SW_CTRL");
        drive(&mut self.ctrl_n, path.ctrl_n_level(), "ANT_SW_CTRL_N");

        if self.current != Some(path) {
            info!("antenna path -> {}", path);
        }
        self.current = Some(path);
    }
}

impl<P: ConfigurableLine> AntennaSelector for AntennaSwitch<P> {
    fn select_path_a(&mut self) {
        self.apply(AntennaPath::A);
    }

    fn select_path_b(&mut self) {
        self.apply(AntennaPath::B);
    }
}
