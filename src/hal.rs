//! Hardware Abstraction Layer
//!
//! Binds the portable core to STM32G474 peripherals through embassy.
//! Everything target-specific lives below this module.

pub mod gpio;
pub mod timer;
