//! Hardware abstraction traits
//!
//! These traits define the interface between the monitor logic and the
//! actuator drivers that sit outside this crate.

pub mod actuator;

pub use actuator::{ActuatorBank, ActuatorOutput};
