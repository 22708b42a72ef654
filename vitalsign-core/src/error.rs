//! Decode errors for the register encodings

use core::fmt;

/// Errors from decoding packed state or sensor bits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DecodeError {
    /// The reserved fourth state code (`0b11`)
    ReservedState,
    /// State code wider than two bits
    StateBitsOutOfRange(u8),
    /// Sensor register with bits above the six alarm channels
    SensorBitsOutOfRange(u8),
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::ReservedState => f.write_str("reserved state code 0b11"),
            DecodeError::StateBitsOutOfRange(bits) => {
                write!(f, "state code {bits:#04b} is wider than two bits")
            }
            DecodeError::SensorBitsOutOfRange(bits) => {
                write!(f, "sensor register {bits:#010b} has bits above channel 5")
            }
        }
    }
}
