//! Actuator outputs for one evaluation cycle
//!
//! Recomputed from scratch every step. Never stored, never fed back.

use heapless::Vec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::sensor::{SensorFrame, SensorKind};
use crate::state::RiskSignals;

/// Number of actuator outputs
pub const ACTUATOR_COUNT: usize = 5;

/// Physical outputs driven by the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Actuator {
    /// Audible alarm
    Buzzer,
    /// LED and vibration alert
    VisualAlert,
    /// Cooling fan
    Fan,
    /// Oxygen solenoid valve
    SolenoidValve,
    /// Infusion pump
    InfusionPump,
}

impl Actuator {
    /// All outputs, in register bit order
    pub const ALL: [Actuator; ACTUATOR_COUNT] = [
        Actuator::Buzzer,
        Actuator::VisualAlert,
        Actuator::Fan,
        Actuator::SolenoidValve,
        Actuator::InfusionPump,
    ];

    /// Bit position in the output register
    pub const fn bit(self) -> u8 {
        match self {
            Actuator::Buzzer => 0,
            Actuator::VisualAlert => 1,
            Actuator::Fan => 2,
            Actuator::SolenoidValve => 3,
            Actuator::InfusionPump => 4,
        }
    }

    /// Sensor that must be in alarm for this output to fire
    ///
    /// `None` for the global alert outputs, which follow the risk signals
    /// alone.
    pub const fn gating_sensor(self) -> Option<SensorKind> {
        match self {
            Actuator::Buzzer | Actuator::VisualAlert => None,
            Actuator::Fan => Some(SensorKind::Temperature),
            Actuator::SolenoidValve => Some(SensorKind::Oxygen),
            Actuator::InfusionPump => Some(SensorKind::BloodPressure),
        }
    }

    /// Check if this is a mitigation output (gated by its own sensor)
    pub const fn is_mitigation(self) -> bool {
        self.gating_sensor().is_some()
    }

    /// Configuration name (snake_case)
    pub const fn name(self) -> &'static str {
        match self {
            Actuator::Buzzer => "buzzer",
            Actuator::VisualAlert => "visual_alert",
            Actuator::Fan => "fan",
            Actuator::SolenoidValve => "solenoid_valve",
            Actuator::InfusionPump => "infusion_pump",
        }
    }

    /// Look up an output by its configuration name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|actuator| actuator.name() == name)
    }
}

/// Commanded state of every actuator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ActuatorReport {
    /// Audible alarm
    pub buzzer: bool,
    /// LED / vibrator
    pub visual_alert: bool,
    /// Cooling fan
    pub fan: bool,
    /// Oxygen solenoid valve
    pub solenoid_valve: bool,
    /// Infusion pump
    pub infusion_pump: bool,
}

impl ActuatorReport {
    /// Every output off
    pub const OFF: ActuatorReport = ActuatorReport {
        buzzer: false,
        visual_alert: false,
        fan: false,
        solenoid_valve: false,
        infusion_pump: false,
    };

    /// Derive outputs from the risk signals and the frame they came from
    ///
    /// The buzzer follows total risk and the visual alert follows any risk.
    /// Each mitigation output needs any risk *and* its own sensor.
    pub const fn derive(signals: RiskSignals, frame: &SensorFrame) -> Self {
        let any = signals.any();

        Self {
            buzzer: signals.total(),
            visual_alert: any,
            fan: any && frame.temperature,
            solenoid_valve: any && frame.oxygen,
            infusion_pump: any && frame.blood_pressure,
        }
    }

    /// Read a single output
    pub const fn is_on(&self, actuator: Actuator) -> bool {
        match actuator {
            Actuator::Buzzer => self.buzzer,
            Actuator::VisualAlert => self.visual_alert,
            Actuator::Fan => self.fan,
            Actuator::SolenoidValve => self.solenoid_valve,
            Actuator::InfusionPump => self.infusion_pump,
        }
    }

    /// Copy of this report with one output changed
    #[must_use]
    pub fn with(mut self, actuator: Actuator, on: bool) -> Self {
        match actuator {
            Actuator::Buzzer => self.buzzer = on,
            Actuator::VisualAlert => self.visual_alert = on,
            Actuator::Fan => self.fan = on,
            Actuator::SolenoidValve => self.solenoid_valve = on,
            Actuator::InfusionPump => self.infusion_pump = on,
        }
        self
    }

    /// Check if every output is off
    pub fn all_off(&self) -> bool {
        *self == Self::OFF
    }

    /// Outputs that are on, in register order
    pub fn active(&self) -> Vec<Actuator, ACTUATOR_COUNT> {
        let mut out = Vec::new();
        for actuator in Actuator::ALL {
            if self.is_on(actuator) {
                // Capacity equals the number of outputs
                let _ = out.push(actuator);
            }
        }
        out
    }

    /// Pack into the 5-bit output register (bit n = `Actuator::ALL[n]`)
    pub fn bits(&self) -> u8 {
        Actuator::ALL
            .iter()
            .filter(|&&actuator| self.is_on(actuator))
            .fold(0, |acc, actuator| acc | (1 << actuator.bit()))
    }
}
