//! Actuator output traits
//!
//! Hardware drivers implement [`ActuatorOutput`]; the monitor's reports are
//! pushed to them through an [`ActuatorBank`].

use crate::actuator::ActuatorReport;

/// Trait for a single on/off actuator output
///
/// Implementations drive the output via GPIO, relay, or a driver IC.
pub trait ActuatorOutput {
    /// Turn the output on or off
    fn set_on(&mut self, on: bool);

    /// Check if the output is currently on
    fn is_on(&self) -> bool;
}

/// The full set of actuator outputs wired to the controller
pub struct ActuatorBank<'a> {
    buzzer: &'a mut dyn ActuatorOutput,
    visual_alert: &'a mut dyn ActuatorOutput,
    fan: &'a mut dyn ActuatorOutput,
    solenoid_valve: &'a mut dyn ActuatorOutput,
    infusion_pump: &'a mut dyn ActuatorOutput,
}

impl<'a> ActuatorBank<'a> {
    /// Bind one output per actuator
    pub fn new(
        buzzer: &'a mut dyn ActuatorOutput,
        visual_alert: &'a mut dyn ActuatorOutput,
        fan: &'a mut dyn ActuatorOutput,
        solenoid_valve: &'a mut dyn ActuatorOutput,
        infusion_pump: &'a mut dyn ActuatorOutput,
    ) -> Self {
        Self {
            buzzer,
            visual_alert,
            fan,
            solenoid_valve,
            infusion_pump,
        }
    }

    /// Drive every output to match a report
    ///
    /// Outputs that should be off are written too, so a stale "on" cannot
    /// survive a cycle.
    pub fn apply(&mut self, report: &ActuatorReport) {
        self.buzzer.set_on(report.buzzer);
        self.visual_alert.set_on(report.visual_alert);
        self.fan.set_on(report.fan);
        self.solenoid_valve.set_on(report.solenoid_valve);
        self.infusion_pump.set_on(report.infusion_pump);
    }

    /// Force every output off
    pub fn all_off(&mut self) {
        self.apply(&ActuatorReport::OFF);
    }

    /// Read back what the outputs currently hold
    pub fn snapshot(&self) -> ActuatorReport {
        ActuatorReport {
            buzzer: self.buzzer.is_on(),
            visual_alert: self.visual_alert.is_on(),
            fan: self.fan.is_on(),
            solenoid_valve: self.solenoid_valve.is_on(),
            infusion_pump: self.infusion_pump.is_on(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Mock output for testing
    struct MockOutput {
        on: bool,
        writes: u32,
    }

    impl MockOutput {
        fn new() -> Self {
            Self { on: false, writes: 0 }
        }
    }

    impl ActuatorOutput for MockOutput {
        fn set_on(&mut self, on: bool) {
            self.on = on;
            self.writes += 1;
        }

        fn is_on(&self) -> bool {
            self.on
        }
    }

    #[test]
    fn test_apply_drives_every_output() {
        let mut buzzer = MockOutput::new();
        let mut visual = MockOutput::new();
        let mut fan = MockOutput::new();
        let mut valve = MockOutput::new();
        let mut pump = MockOutput::new();

        let report = ActuatorReport {
            buzzer: false,
            visual_alert: true,
            fan: true,
            solenoid_valve: false,
            infusion_pump: true,
        };

        {
            let mut bank =
                ActuatorBank::new(&mut buzzer, &mut visual, &mut fan, &mut valve, &mut pump);
            bank.apply(&report);
            assert_eq!(bank.snapshot(), report);
        }

        assert!(!buzzer.is_on());
        assert!(visual.is_on());
        assert!(fan.is_on());
        assert!(!valve.is_on());
        assert!(pump.is_on());
        assert_eq!(buzzer.writes, 1);
    }

    #[test]
    fn test_all_off() {
        let mut outputs = [
            MockOutput::new(),
            MockOutput::new(),
            MockOutput::new(),
            MockOutput::new(),
            MockOutput::new(),
        ];
        let [a, b, c, d, e] = &mut outputs;

        let mut bank = ActuatorBank::new(a, b, c, d, e);
        bank.apply(&ActuatorReport {
            buzzer: true,
            visual_alert: true,
            fan: true,
            solenoid_valve: true,
            infusion_pump: true,
        });
        bank.all_off();
        assert!(bank.snapshot().all_off());
    }
}
