//! Scenario files and replay for the vital-sign monitor
//!
//! Scenarios are the monitor's configuration surface on the host: a TOML
//! list of sensor frames, each optionally paired with the state and
//! actuator outputs it must produce. [`replay`] drives a fresh
//! [`vitalsign_core::VitalSignFsm`] through them and returns a
//! [`Transcript`].
//!
//! ```
//! use vitalsign_scenario::{replay, Scenario};
//!
//! let scenario = Scenario::bedside_demo()?;
//! let transcript = replay(&scenario)?;
//! for line in transcript.lines() {
//!     println!("{line}");
//! }
//! # Ok::<(), vitalsign_scenario::ScenarioError>(())
//! ```

pub mod config;
pub mod error;
pub mod runner;

pub use config::{CycleSpec, InitialState, Scenario};
pub use error::{Result, ScenarioError};
pub use runner::{replay, CycleOutcome, Transcript};

/// The bundled bedside walkthrough scenario
pub const BEDSIDE_DEMO: &str = include_str!("../scenarios/bedside_demo.toml");
