//! Sensor alarm input
//!
//! The controller never samples hardware itself; callers hand it
//! pre-digitized alarm flags as a [`SensorFrame`].

pub mod frame;

pub use frame::{SensorFrame, SensorKind, SENSOR_COUNT, SENSOR_MASK};
