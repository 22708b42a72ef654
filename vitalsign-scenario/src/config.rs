//! Scenario configuration
//!
//! A scenario is a TOML script of sensor frames fed to a fresh monitor one
//! cycle at a time, with optional expectations per cycle:
//!
//! ```toml
//! name = "oxygen drop"
//! initial_state = "normal"
//!
//! [[cycle]]
//! label = "desaturation"
//! alarms = ["oxygen"]
//! expect_state = "warning"
//! expect_actuators = ["visual_alert", "solenoid_valve"]
//! ```
//!
//! Flags not listed in `alarms` are false for that cycle; nothing carries
//! over from the previous one. `"all"` sets every flag.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use vitalsign_core::{Actuator, ActuatorReport, SensorFrame, SensorKind, State};

use crate::error::{Result, ScenarioError};

/// Shorthand alarm name that sets every flag
pub const ALL_ALARMS: &str = "all";

/// State a scenario starts from
///
/// Only reachable states can be named. Non-normal starts are reached by
/// evaluating a priming frame, never by setting the state directly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InitialState {
    #[default]
    Normal,
    Warning,
    Critical,
}

impl InitialState {
    /// The monitor state this start corresponds to
    pub fn state(self) -> State {
        match self {
            InitialState::Normal => State::Normal,
            InitialState::Warning => State::Warning,
            InitialState::Critical => State::Critical,
        }
    }

    /// Frame that drives a fresh monitor into this state
    pub fn priming_frame(self) -> Option<SensorFrame> {
        match self {
            InitialState::Normal => None,
            InitialState::Warning => Some(SensorFrame::clear().with(SensorKind::HeartRate, true)),
            InitialState::Critical => Some(SensorFrame::all()),
        }
    }
}

/// One evaluation cycle in a scenario file
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CycleSpec {
    /// Display label
    #[serde(default)]
    pub label: Option<String>,
    /// Alarm channels active this cycle
    #[serde(default)]
    pub alarms: Vec<String>,
    /// State the cycle must end in
    #[serde(default)]
    pub expect_state: Option<State>,
    /// Exact set of actuators that must be on
    #[serde(default)]
    pub expect_actuators: Option<Vec<String>>,
}

impl CycleSpec {
    /// Label, falling back to the 1-based cycle number
    pub fn label_or(&self, number: usize) -> String {
        self.label
            .clone()
            .unwrap_or_else(|| format!("cycle {number}"))
    }

    /// Resolve the alarm names into a frame
    pub fn frame(&self, number: usize) -> Result<SensorFrame> {
        let mut frame = SensorFrame::clear();
        for name in &self.alarms {
            if name == ALL_ALARMS {
                frame = SensorFrame::all();
                continue;
            }
            let kind = SensorKind::from_name(name).ok_or_else(|| ScenarioError::UnknownSensor {
                cycle: number,
                name: name.clone(),
            })?;
            frame = frame.with(kind, true);
        }
        Ok(frame)
    }

    /// Resolve the expected actuator names, if any were given
    pub fn expected_actuators(&self, number: usize) -> Result<Option<ActuatorReport>> {
        let Some(names) = &self.expect_actuators else {
            return Ok(None);
        };

        let mut report = ActuatorReport::OFF;
        for name in names {
            let actuator =
                Actuator::from_name(name).ok_or_else(|| ScenarioError::UnknownActuator {
                    cycle: number,
                    name: name.clone(),
                })?;
            report = report.with(actuator, true);
        }
        Ok(Some(report))
    }
}

/// A complete scenario file
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Scenario {
    /// Scenario name
    pub name: String,
    /// Free-form description
    #[serde(default)]
    pub description: Option<String>,
    /// State the monitor is driven into before the first cycle
    #[serde(default)]
    pub initial_state: InitialState,
    /// Cycles, in order
    #[serde(rename = "cycle", default)]
    pub cycles: Vec<CycleSpec>,
}

impl Scenario {
    /// Parse and validate a scenario from TOML text
    pub fn from_toml_str(input: &str) -> Result<Self> {
        let scenario: Scenario = toml::from_str(input)?;
        scenario.validate()?;
        Ok(scenario)
    }

    /// Load and validate a scenario file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let input = fs::read_to_string(path).map_err(|source| ScenarioError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&input)
    }

    /// The bundled bedside walkthrough
    pub fn bedside_demo() -> Result<Self> {
        Self::from_toml_str(crate::BEDSIDE_DEMO)
    }

    /// Check that the scenario has cycles and every name resolves
    pub fn validate(&self) -> Result<()> {
        if self.cycles.is_empty() {
            return Err(ScenarioError::Empty {
                name: self.name.clone(),
            });
        }

        for (index, cycle) in self.cycles.iter().enumerate() {
            let number = index + 1;
            cycle.frame(number)?;
            cycle.expected_actuators(number)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal() {
        let scenario = Scenario::from_toml_str(
            r#"
            name = "minimal"

            [[cycle]]
            alarms = ["heart_rate"]
            "#,
        )
        .unwrap();

        assert_eq!(scenario.name, "minimal");
        assert_eq!(scenario.initial_state, InitialState::Normal);
        assert_eq!(scenario.cycles.len(), 1);
        assert_eq!(scenario.cycles[0].label_or(1), "cycle 1");
        assert_eq!(
            scenario.cycles[0].frame(1).unwrap(),
            SensorFrame::clear().with(SensorKind::HeartRate, true)
        );
    }

    #[test]
    fn test_parse_expectations() {
        let scenario = Scenario::from_toml_str(
            r#"
            name = "expectations"
            initial_state = "critical"

            [[cycle]]
            label = "recovering"
            alarms = ["oxygen", "temperature"]
            expect_state = "warning"
            expect_actuators = ["visual_alert", "fan", "solenoid_valve"]
            "#,
        )
        .unwrap();

        let cycle = &scenario.cycles[0];
        assert_eq!(scenario.initial_state, InitialState::Critical);
        assert_eq!(cycle.expect_state, Some(State::Warning));
        let expected = cycle.expected_actuators(1).unwrap().unwrap();
        assert!(expected.visual_alert && expected.fan && expected.solenoid_valve);
        assert!(!expected.buzzer && !expected.infusion_pump);
    }

    #[test]
    fn test_all_shorthand() {
        let cycle = CycleSpec {
            alarms: vec![ALL_ALARMS.to_string()],
            ..CycleSpec::default()
        };
        assert_eq!(cycle.frame(1).unwrap(), SensorFrame::all());
    }

    #[test]
    fn test_empty_alarms_is_clear_frame() {
        assert_eq!(CycleSpec::default().frame(1).unwrap(), SensorFrame::clear());
        assert_eq!(CycleSpec::default().expected_actuators(1).unwrap(), None);
    }

    #[test]
    fn test_unknown_sensor_rejected() {
        let err = Scenario::from_toml_str(
            r#"
            name = "bad sensor"

            [[cycle]]
            alarms = ["heart_rate"]

            [[cycle]]
            alarms = ["glucose"]
            "#,
        )
        .unwrap_err();

        assert!(matches!(
            err,
            ScenarioError::UnknownSensor { cycle: 2, ref name } if name == "glucose"
        ));
    }

    #[test]
    fn test_unknown_actuator_rejected() {
        let err = Scenario::from_toml_str(
            r#"
            name = "bad actuator"

            [[cycle]]
            alarms = []
            expect_actuators = ["siren"]
            "#,
        )
        .unwrap_err();

        assert!(matches!(err, ScenarioError::UnknownActuator { cycle: 1, .. }));
    }

    #[test]
    fn test_empty_scenario_rejected() {
        let err = Scenario::from_toml_str(r#"name = "nothing""#).unwrap_err();
        assert!(matches!(err, ScenarioError::Empty { .. }));
    }

    #[test]
    fn test_unused_state_not_nameable() {
        let err = Scenario::from_toml_str(
            r#"
            name = "reserved"

            [[cycle]]
            expect_state = "unused"
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, ScenarioError::Parse(_)));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = Scenario::from_toml_str(
            r#"
            name = "typo"

            [[cycle]]
            alarm = ["oxygen"]
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, ScenarioError::Parse(_)));
    }

    #[test]
    fn test_initial_state_priming() {
        assert_eq!(InitialState::Normal.priming_frame(), None);
        for start in [InitialState::Warning, InitialState::Critical] {
            let frame = start.priming_frame().unwrap();
            let next = State::Normal.transition(vitalsign_core::RiskSignals::from_frame(&frame));
            assert_eq!(next, start.state());
        }
    }
}
