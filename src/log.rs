//! Logging shims
//!
//! Forward to `defmt` on target. Host builds have no logger, so the macros
//! only evaluate their arguments to keep them "used".

#![allow(unused_macros)]

#[cfg(feature = "embedded")]
macro_rules! trace {
    ($($arg:tt)*) => { ::defmt::trace!($($arg)*) };
}

#[cfg(feature = "embedded")]
macro_rules! debug {
    ($($arg:tt)*) => { ::defmt::debug!($($arg)*) };
}

#[cfg(feature = "embedded")]
macro_rules! info {
    ($($arg:tt)*) => { ::defmt::info!($($arg)*) };
}

#[cfg(feature = "embedded")]
macro_rules! warn {
    ($($arg:tt)*) => { ::defmt::warn!($($arg)*) };
}

// Stub macros when defmt is not available
#[cfg(not(feature = "embedded"))]
macro_rules! trace {
    ($($arg:tt)*) => {{
        #[allow(unused_parens)]
        let _ = ($($arg)*);
    }};
}

#[cfg(not(feature = "embedded"))]
macro_rules! debug {
    ($($arg:tt)*) => {{
        #[allow(unused_parens)]
        let _ = ($($arg)*);
    }};
}

#[cfg(not(feature = "embedded"))]
macro_rules! info {
    ($($arg:tt)*) => {{
        #[allow(unused_parens)]
        let _ = ($($arg)*);
    }};
}

#[cfg(not(feature = "embedded"))]
macro_rules! warn {
    ($($arg:tt)*) => {{
        #[allow(unused_parens)]
        let _ = ($($arg)*);
    }};
}
