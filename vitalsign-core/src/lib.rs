//! Board-agnostic core logic for the vital-sign safety controller
//!
//! This crate contains all monitoring logic that does not depend on
//! specific hardware implementations:
//!
//! - Sensor alarm frames and their register encoding
//! - Aggregate risk signals (any alarm / every alarm)
//! - The Normal / Warning / Critical state machine
//! - Actuator derivation (buzzer, visual alert, fan, valve, pump)
//! - The monitor that ties one evaluation cycle together
//! - Actuator output traits implemented by external drivers
//!
//! # Example
//!
//! ```
//! use vitalsign_core::{SensorFrame, State, VitalSignFsm};
//!
//! let mut fsm = VitalSignFsm::new();
//! fsm.update(SensorFrame::new(true, false, false, false, false, false));
//!
//! let report = fsm.step();
//! assert_eq!(report.previous, State::Normal);
//! assert_eq!(report.next, State::Warning);
//! assert!(report.actuators.visual_alert);
//! assert!(!report.actuators.buzzer);
//! ```

#![no_std]
#![deny(unsafe_code)]

mod trace;

pub mod actuator;
pub mod error;
pub mod monitor;
pub mod sensor;
pub mod state;
pub mod traits;

pub use actuator::{Actuator, ActuatorReport};
pub use error::DecodeError;
pub use monitor::{StepReport, VitalSignFsm};
pub use sensor::{SensorFrame, SensorKind};
pub use state::{RiskSignals, State};
