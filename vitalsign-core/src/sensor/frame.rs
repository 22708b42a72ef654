//! Sensor alarm frame
//!
//! One evaluation cycle's worth of pre-digitized alarm flags. A frame is
//! replaced wholesale on every update; nothing is merged with history.

use core::fmt;

use heapless::Vec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::DecodeError;

/// Number of alarm channels in a frame
pub const SENSOR_COUNT: usize = 6;

/// Mask covering every valid bit of the frame register encoding
pub const SENSOR_MASK: u8 = (1 << SENSOR_COUNT) - 1;

/// Alarm channels monitored by the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SensorKind {
    HeartRate,
    PulseRate,
    Oxygen,
    Temperature,
    Respiration,
    BloodPressure,
}

impl SensorKind {
    /// All channels, in register bit order
    pub const ALL: [SensorKind; SENSOR_COUNT] = [
        SensorKind::HeartRate,
        SensorKind::PulseRate,
        SensorKind::Oxygen,
        SensorKind::Temperature,
        SensorKind::Respiration,
        SensorKind::BloodPressure,
    ];

    /// Bit position in the frame register
    pub const fn bit(self) -> u8 {
        match self {
            SensorKind::HeartRate => 0,
            SensorKind::PulseRate => 1,
            SensorKind::Oxygen => 2,
            SensorKind::Temperature => 3,
            SensorKind::Respiration => 4,
            SensorKind::BloodPressure => 5,
        }
    }

    /// Short panel label
    pub const fn label(self) -> &'static str {
        match self {
            SensorKind::HeartRate => "HR",
            SensorKind::PulseRate => "PR",
            SensorKind::Oxygen => "O2",
            SensorKind::Temperature => "TEMP",
            SensorKind::Respiration => "RESP",
            SensorKind::BloodPressure => "BP",
        }
    }

    /// Configuration name (snake_case)
    pub const fn name(self) -> &'static str {
        match self {
            SensorKind::HeartRate => "heart_rate",
            SensorKind::PulseRate => "pulse_rate",
            SensorKind::Oxygen => "oxygen",
            SensorKind::Temperature => "temperature",
            SensorKind::Respiration => "respiration",
            SensorKind::BloodPressure => "blood_pressure",
        }
    }

    /// Look up a channel by its configuration name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }
}

impl fmt::Display for SensorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Snapshot of the six alarm flags for one evaluation cycle
///
/// There is no `Default` impl: every flag must be stated by the
/// caller. Use [`SensorFrame::clear`] when "no alarms" is what you mean.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SensorFrame {
    /// Heart-rate alarm active
    pub heart_rate: bool,
    /// Pulse-rate alarm active
    pub pulse_rate: bool,
    /// Blood-oxygen alarm active
    pub oxygen: bool,
    /// Body-temperature alarm active
    pub temperature: bool,
    /// Respiration alarm active
    pub respiration: bool,
    /// Blood-pressure alarm active
    pub blood_pressure: bool,
}

impl SensorFrame {
    /// Create a frame with every flag given explicitly
    pub const fn new(
        heart_rate: bool,
        pulse_rate: bool,
        oxygen: bool,
        temperature: bool,
        respiration: bool,
        blood_pressure: bool,
    ) -> Self {
        Self {
            heart_rate,
            pulse_rate,
            oxygen,
            temperature,
            respiration,
            blood_pressure,
        }
    }

    /// Frame with no alarm active
    pub const fn clear() -> Self {
        Self::new(false, false, false, false, false, false)
    }

    /// Frame with every alarm active
    pub const fn all() -> Self {
        Self::new(true, true, true, true, true, true)
    }

    /// Build a frame where exactly the listed channels are active
    pub fn from_active(active: &[SensorKind]) -> Self {
        active
            .iter()
            .fold(Self::clear(), |frame, &kind| frame.with(kind, true))
    }

    /// Read a single channel
    pub const fn is_active(&self, kind: SensorKind) -> bool {
        match kind {
            SensorKind::HeartRate => self.heart_rate,
            SensorKind::PulseRate => self.pulse_rate,
            SensorKind::Oxygen => self.oxygen,
            SensorKind::Temperature => self.temperature,
            SensorKind::Respiration => self.respiration,
            SensorKind::BloodPressure => self.blood_pressure,
        }
    }

    /// Copy of this frame with one channel changed
    #[must_use]
    pub fn with(mut self, kind: SensorKind, active: bool) -> Self {
        match kind {
            SensorKind::HeartRate => self.heart_rate = active,
            SensorKind::PulseRate => self.pulse_rate = active,
            SensorKind::Oxygen => self.oxygen = active,
            SensorKind::Temperature => self.temperature = active,
            SensorKind::Respiration => self.respiration = active,
            SensorKind::BloodPressure => self.blood_pressure = active,
        }
        self
    }

    /// At least one alarm is active
    pub const fn any_active(&self) -> bool {
        self.heart_rate
            || self.pulse_rate
            || self.oxygen
            || self.temperature
            || self.respiration
            || self.blood_pressure
    }

    /// Every alarm is active
    pub const fn all_active(&self) -> bool {
        self.heart_rate
            && self.pulse_rate
            && self.oxygen
            && self.temperature
            && self.respiration
            && self.blood_pressure
    }

    /// Active channels in register order
    pub fn active(&self) -> Vec<SensorKind, SENSOR_COUNT> {
        let mut out = Vec::new();
        for kind in SensorKind::ALL {
            if self.is_active(kind) {
                // Capacity equals the number of channels
                let _ = out.push(kind);
            }
        }
        out
    }

    /// Number of active channels
    pub fn active_count(&self) -> usize {
        SensorKind::ALL
            .iter()
            .filter(|&&kind| self.is_active(kind))
            .count()
    }

    /// Pack into the 6-bit register layout (bit n = `SensorKind::ALL[n]`)
    pub fn bits(&self) -> u8 {
        SensorKind::ALL
            .iter()
            .filter(|&&kind| self.is_active(kind))
            .fold(0, |acc, kind| acc | (1 << kind.bit()))
    }

    /// Unpack from the 6-bit register layout
    ///
    /// Bits above bit 5 do not belong to any channel and are rejected.
    pub fn from_bits(bits: u8) -> Result<Self, DecodeError> {
        if bits & !SENSOR_MASK != 0 {
            return Err(DecodeError::SensorBitsOutOfRange(bits));
        }

        Ok(SensorKind::ALL
            .iter()
            .fold(Self::clear(), |frame, &kind| {
                frame.with(kind, bits & (1 << kind.bit()) != 0)
            }))
    }
}
