//! Radio Demo Front-End Firmware Library
//!
//! Runtime core of an STM32-based radio demonstration board: activity
//! indicators for transmit, receive and scan, the dual-line RF antenna
//! switch, and the boot-time mode dispatch loop that polls them.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    DISPATCH LOOP                             │
//! │   mode sampled once  →  signaling.runtime()  →  supervisor   │
//! ├─────────────────────────────────────────────────────────────┤
//! │                     CAPABILITIES                             │
//! │  TimeSource  │  ActivitySignaling  │  AntennaSelector         │
//! ├─────────────────────────────────────────────────────────────┤
//! │                   HAL / BOARD LAYER                          │
//! │  embassy-stm32 GPIO  │  embassy-time driver                  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Design Principles
//!
//! - **Static wiring**: capabilities are traits, composed through generics
//! - **Single-threaded polling**: no interrupts or tasks touch the core state
//! - **Owned lines**: every GPIO is owned by exactly one component
//! - **Wrap-safe time**: all timeouts use wrapping millisecond arithmetic
//! - **Portable core**: everything outside `hal` builds and tests on the host

#![cfg_attr(feature = "embedded", no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

// Must come first so the logging macros are visible to every module below
#[macro_use]
mod log;

// Re-export dependencies needed by applications (only in embedded mode)
#[cfg(feature = "embedded")]
pub use embassy_executor;
#[cfg(feature = "embedded")]
pub use embassy_stm32;
#[cfg(feature = "embedded")]
pub use embassy_time;

/// Hardware Abstraction Layer
///
/// Board implementations of the core's line and clock traits.
#[cfg(feature = "embedded")]
pub mod hal;

/// Time base and wrap-safe interval helpers
pub mod time;

/// GPIO line traits shared by the drivers
pub mod line;

/// Antenna path selector
pub mod antenna;

/// Activity indicator state machines
pub mod signaling;

/// Boot-time mode dispatch loop
pub mod dispatch;

/// Blink-only supervisory routine for the board binary
pub mod supervisor;

/// Shared types used across modules
pub mod types;

/// System configuration and constants
pub mod config;

/// Prelude module for common imports
pub mod prelude {
    //! Convenient re-exports for common types and traits.

    pub use crate::antenna::{AntennaSelector, AntennaSwitch};
    pub use crate::config::*;
    pub use crate::dispatch::{Dispatcher, Services, Supervisor};
    pub use crate::signaling::{ActivitySignaling, IndicatorState, Signaling};
    pub use crate::time::TimeSource;
    pub use crate::types::*;

    // Common traits
    pub use embedded_hal::delay::DelayNs;
    pub use embedded_hal::digital::{InputPin, OutputPin, PinState};

    #[cfg(feature = "embedded")]
    pub use crate::hal::timer::SystemClock;
}
