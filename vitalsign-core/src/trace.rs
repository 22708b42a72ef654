//! Optional logging
//!
//! Routes to `defmt` on embedded targets and to the `log` facade on hosts.
//! With neither feature enabled the macros expand to nothing.

macro_rules! trace_debug {
    ($($arg:tt)*) => {{
        #[cfg(feature = "defmt")]
        ::defmt::debug!($($arg)*);
        #[cfg(feature = "log")]
        ::log::debug!($($arg)*);
    }};
}

macro_rules! trace_warn {
    ($($arg:tt)*) => {{
        #[cfg(feature = "defmt")]
        ::defmt::warn!($($arg)*);
        #[cfg(feature = "log")]
        ::log::warn!($($arg)*);
    }};
}

pub(crate) use trace_debug;
pub(crate) use trace_warn;
