//! Scenario replay
//!
//! Runs a scenario through a fresh monitor and records every cycle. The
//! first failed expectation stops the replay.

use log::{debug, info, warn};
use vitalsign_core::{ActuatorReport, SensorFrame, State, StepReport, VitalSignFsm};

use crate::config::Scenario;
use crate::error::{Result, ScenarioError};

/// Render a flag the way the bedside panel shows it
fn bit(value: bool) -> char {
    if value {
        '1'
    } else {
        '0'
    }
}

/// Record of one replayed cycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CycleOutcome {
    /// 1-based cycle number
    pub number: usize,
    /// Display label
    pub label: String,
    /// Frame fed to the monitor
    pub frame: SensorFrame,
    /// What the monitor reported
    pub report: StepReport,
}

impl CycleOutcome {
    /// One-line summary, e.g.
    /// `heart-rate alarm: A/C=1/0 Normal -> Warning | buzzer=0 visual=1 fan=0 valve=0 pump=0`
    pub fn render(&self) -> String {
        let StepReport {
            previous,
            next,
            signals,
            actuators,
        } = self.report;

        format!(
            "{}: A/C={}/{} {} -> {} | buzzer={} visual={} fan={} valve={} pump={}",
            self.label,
            bit(signals.any()),
            bit(signals.total()),
            previous,
            next,
            bit(actuators.buzzer),
            bit(actuators.visual_alert),
            bit(actuators.fan),
            bit(actuators.solenoid_valve),
            bit(actuators.infusion_pump),
        )
    }
}

/// Everything a replay produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transcript {
    /// Scenario name
    pub scenario: String,
    /// Per-cycle results, in order
    pub outcomes: Vec<CycleOutcome>,
}

impl Transcript {
    /// State the monitor ended in
    pub fn final_state(&self) -> Option<State> {
        self.outcomes.last().map(|outcome| outcome.report.next)
    }

    /// Rendered lines, one per cycle
    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        self.outcomes.iter().map(CycleOutcome::render)
    }

    /// Number of cycles where the state changed
    pub fn transitions(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|outcome| outcome.report.changed())
            .count()
    }
}

fn describe_actuators(report: &ActuatorReport) -> String {
    let names: Vec<&str> = report.active().iter().map(|actuator| actuator.name()).collect();
    if names.is_empty() {
        "none".to_string()
    } else {
        names.join(", ")
    }
}

/// Replay a scenario on a fresh monitor
pub fn replay(scenario: &Scenario) -> Result<Transcript> {
    info!(
        "replaying scenario '{}' ({} cycles)",
        scenario.name,
        scenario.cycles.len()
    );

    let mut fsm = VitalSignFsm::new();
    if let Some(frame) = scenario.initial_state.priming_frame() {
        fsm.evaluate(frame);
        debug!("primed monitor into {}", fsm.current_state());
    }

    let mut outcomes = Vec::with_capacity(scenario.cycles.len());
    for (index, cycle) in scenario.cycles.iter().enumerate() {
        let number = index + 1;
        let label = cycle.label_or(number);
        let frame = cycle.frame(number)?;
        let report = fsm.evaluate(frame);

        let outcome = CycleOutcome {
            number,
            label,
            frame,
            report,
        };
        debug!("{}", outcome.render());

        let mismatch = |detail: String| {
            warn!("scenario '{}' cycle {}: {}", scenario.name, number, detail);
            ScenarioError::Mismatch {
                scenario: scenario.name.clone(),
                cycle: number,
                label: outcome.label.clone(),
                detail,
            }
        };

        if let Some(expected) = cycle.expect_state {
            if report.next != expected {
                return Err(mismatch(format!(
                    "expected state {}, got {}",
                    expected, report.next
                )));
            }
        }

        if let Some(expected) = cycle.expected_actuators(number)? {
            if report.actuators != expected {
                return Err(mismatch(format!(
                    "expected actuators [{}], got [{}]",
                    describe_actuators(&expected),
                    describe_actuators(&report.actuators)
                )));
            }
        }

        outcomes.push(outcome);
    }

    Ok(Transcript {
        scenario: scenario.name.clone(),
        outcomes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_line() {
        let scenario = Scenario::from_toml_str(
            r#"
            name = "render"

            [[cycle]]
            label = "heart-rate alarm"
            alarms = ["heart_rate"]
            "#,
        )
        .unwrap();

        let transcript = replay(&scenario).unwrap();
        assert_eq!(
            transcript.lines().collect::<Vec<_>>(),
            vec![
                "heart-rate alarm: A/C=1/0 Normal -> Warning | buzzer=0 visual=1 fan=0 valve=0 pump=0"
                    .to_string()
            ]
        );
    }

    #[test]
    fn test_initial_state_is_primed() {
        let scenario = Scenario::from_toml_str(
            r#"
            name = "primed"
            initial_state = "critical"

            [[cycle]]
            alarms = ["oxygen"]
            "#,
        )
        .unwrap();

        let transcript = replay(&scenario).unwrap();
        let outcome = &transcript.outcomes[0];
        assert_eq!(outcome.report.previous, State::Critical);
        assert_eq!(outcome.report.next, State::Warning);
        // Priming cycle is not part of the transcript
        assert_eq!(transcript.outcomes.len(), 1);
    }

    #[test]
    fn test_state_mismatch_reported() {
        let scenario = Scenario::from_toml_str(
            r#"
            name = "wrong state"

            [[cycle]]
            label = "single alarm"
            alarms = ["respiration"]
            expect_state = "critical"
            "#,
        )
        .unwrap();

        match replay(&scenario) {
            Err(ScenarioError::Mismatch {
                cycle,
                label,
                detail,
                ..
            }) => {
                assert_eq!(cycle, 1);
                assert_eq!(label, "single alarm");
                assert_eq!(detail, "expected state Critical, got Warning");
            }
            other => panic!("expected mismatch, got {other:?}"),
        }
    }

    #[test]
    fn test_actuator_mismatch_reported() {
        let scenario = Scenario::from_toml_str(
            r#"
            name = "wrong outputs"

            [[cycle]]
            alarms = ["blood_pressure"]
            expect_actuators = ["visual_alert"]
            "#,
        )
        .unwrap();

        match replay(&scenario) {
            Err(ScenarioError::Mismatch { detail, .. }) => {
                assert_eq!(
                    detail,
                    "expected actuators [visual_alert], got [visual_alert, infusion_pump]"
                );
            }
            other => panic!("expected mismatch, got {other:?}"),
        }
    }

    #[test]
    fn test_transition_count() {
        let scenario = Scenario::from_toml_str(
            r#"
            name = "count"

            [[cycle]]
            alarms = ["oxygen"]

            [[cycle]]
            alarms = ["oxygen"]

            [[cycle]]
            alarms = []
            "#,
        )
        .unwrap();

        let transcript = replay(&scenario).unwrap();
        assert_eq!(transcript.transitions(), 2);
        assert_eq!(transcript.final_state(), Some(State::Normal));
    }
}
