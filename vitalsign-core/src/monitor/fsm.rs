//! Vital-sign monitor
//!
//! Holds the current state and the most recent sensor frame. Each call to
//! [`VitalSignFsm::step`] is one evaluation cycle:
//!
//! 1. derive A/C from the held frame
//! 2. look up the next state
//! 3. derive actuator outputs from the same A/C
//! 4. commit the next state
//!
//! The monitor is not internally synchronized. `update` and `step` both take
//! `&mut self`; callers that share an instance across threads must wrap the
//! update/step pair in their own lock.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::actuator::ActuatorReport;
use crate::sensor::SensorFrame;
use crate::state::{RiskSignals, State};
use crate::trace::{trace_debug, trace_warn};

/// Outcome of one evaluation cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StepReport {
    /// State before the cycle
    pub previous: State,
    /// State after the cycle
    pub next: State,
    /// A/C signals the cycle was evaluated with
    pub signals: RiskSignals,
    /// Commanded actuator outputs
    pub actuators: ActuatorReport,
}

impl StepReport {
    /// Split into `(previous, next, actuators)`
    pub fn into_parts(self) -> (State, State, ActuatorReport) {
        (self.previous, self.next, self.actuators)
    }

    /// Check if the state changed this cycle
    pub fn changed(&self) -> bool {
        self.previous != self.next
    }

    /// Check if the cycle moved to a more severe state
    pub fn escalated(&self) -> bool {
        self.next.severity() > self.previous.severity()
    }

    /// Check if the cycle moved to a less severe state
    pub fn de_escalated(&self) -> bool {
        self.next.severity() < self.previous.severity()
    }
}

/// Safety state machine driving the actuator outputs
///
/// One instance covers one monitoring session. It always starts in
/// [`State::Normal`] with a cleared frame.
#[derive(Debug, Clone)]
pub struct VitalSignFsm {
    /// Current safety state
    state: State,
    /// Frame evaluated by the next step
    frame: SensorFrame,
    /// Completed evaluation cycles
    cycle: u32,
}

impl Default for VitalSignFsm {
    fn default() -> Self {
        Self::new()
    }
}

impl VitalSignFsm {
    /// Create a monitor in the Normal state
    pub const fn new() -> Self {
        Self {
            state: State::Normal,
            frame: SensorFrame::clear(),
            cycle: 0,
        }
    }

    /// Replace the held sensor frame
    pub fn update(&mut self, frame: SensorFrame) {
        self.frame = frame;
    }

    /// Run one evaluation cycle on the held frame
    pub fn step(&mut self) -> StepReport {
        let signals = RiskSignals::from_frame(&self.frame);
        let previous = self.state;
        let next = previous.transition(signals);
        let actuators = ActuatorReport::derive(signals, &self.frame);

        self.state = next;
        self.cycle = self.cycle.wrapping_add(1);

        let report = StepReport {
            previous,
            next,
            signals,
            actuators,
        };

        trace_debug!(
            "cycle {}: {} -> {} (A={}, C={})",
            self.cycle,
            previous,
            next,
            signals.any(),
            signals.total()
        );
        if report.escalated() && next == State::Critical {
            trace_warn!("total alarm: all vital-sign alarms active");
        }

        report
    }

    /// Update with a new frame and evaluate it immediately
    pub fn evaluate(&mut self, frame: SensorFrame) -> StepReport {
        self.update(frame);
        self.step()
    }

    /// Get current state
    pub fn current_state(&self) -> State {
        self.state
    }

    /// Get the held sensor frame
    pub fn frame(&self) -> SensorFrame {
        self.frame
    }

    /// Number of completed evaluation cycles (wraps at `u32::MAX`)
    pub fn cycle(&self) -> u32 {
        self.cycle
    }

    /// Start a new monitoring session
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}
