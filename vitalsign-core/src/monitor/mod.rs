//! Vital-sign monitor
//!
//! Couples the state machine with actuator derivation into one cycle.

pub mod fsm;

pub use fsm::{StepReport, VitalSignFsm};
