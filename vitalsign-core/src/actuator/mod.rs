//! Actuator derivation

pub mod report;

pub use report::{Actuator, ActuatorReport, ACTUATOR_COUNT};
