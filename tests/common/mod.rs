//! Host-side test doubles for GPIO lines and the system clock.
//!
//! Handles are cheap clones sharing one record, so a test can keep a copy
//! after moving the line into the component under test.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use embedded_hal::digital::{Error, ErrorKind, ErrorType, InputPin, OutputPin, PinState};
use rf_demo_firmware::line::ConfigurableLine;
use rf_demo_firmware::time::TimeSource;

/// Everything observed on one mock line
#[derive(Debug, Default)]
pub struct LineRecord {
    pub high: bool,
    pub configured: u32,
    pub configured_level: Option<PinState>,
    pub writes: u32,
    pub reads: u32,
    pub fail: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockError;

impl Error for MockError {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}

#[derive(Debug, Clone, Default)]
pub struct MockPin {
    record: Rc<RefCell<LineRecord>>,
}

impl MockPin {
    pub fn new() -> Self {
        Self::default()
    }

    /// Input line sitting at `state`
    pub fn input(state: PinState) -> Self {
        let pin = Self::new();
        pin.record.borrow_mut().high = state == PinState::High;
        pin
    }

    /// Line whose every access fails
    pub fn failing() -> Self {
        let pin = Self::new();
        pin.record.borrow_mut().fail = true;
        pin
    }

    pub fn is_set_high(&self) -> bool {
        self.record.borrow().high
    }

    pub fn configured(&self) -> u32 {
        self.record.borrow().configured
    }

    /// Level requested by the most recent `configure_output`
    pub fn configured_level(&self) -> Option<PinState> {
        self.record.borrow().configured_level
    }

    pub fn writes(&self) -> u32 {
        self.record.borrow().writes
    }

    pub fn reads(&self) -> u32 {
        self.record.borrow().reads
    }
}

impl ErrorType for MockPin {
    type Error = MockError;
}

impl OutputPin for MockPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        let mut record = self.record.borrow_mut();
        if record.fail {
            return Err(MockError);
        }
        record.high = false;
        record.writes += 1;
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        let mut record = self.record.borrow_mut();
        if record.fail {
            return Err(MockError);
        }
        record.high = true;
        record.writes += 1;
        Ok(())
    }
}

impl InputPin for MockPin {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        let mut record = self.record.borrow_mut();
        record.reads += 1;
        if record.fail {
            return Err(MockError);
        }
        Ok(record.high)
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        self.is_high().map(|high| !high)
    }
}

impl ConfigurableLine for MockPin {
    fn configure_output(&mut self, initial: PinState) {
        let mut record = self.record.borrow_mut();
        record.configured += 1;
        record.configured_level = Some(initial);
        record.high = initial == PinState::High;
    }
}

/// Manually advanced millisecond clock
#[derive(Debug, Clone, Default)]
pub struct MockClock {
    now: Rc<Cell<u32>>,
}

impl MockClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn at(ms: u32) -> Self {
        let clock = Self::new();
        clock.set(ms);
        clock
    }

    pub fn set(&self, ms: u32) {
        self.now.set(ms);
    }

    pub fn advance(&self, ms: u32) {
        self.now.set(self.now.get().wrapping_add(ms));
    }
}

impl TimeSource for MockClock {
    fn now_ms(&self) -> u32 {
        self.now.get()
    }
}
