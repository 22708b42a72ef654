//! State machine definition
//!
//! The next state is a function of the current state and the risk signals
//! of the current frame only. There is no hysteresis and no dwell time.

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::signals::RiskSignals;
use crate::DecodeError;

/// Payload of [`State::Unused`]
///
/// Has no variants, so `State::Unused` can never be constructed. Matches on
/// [`State`] still have to name the variant and discharge it with
/// `match reserved {}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Reserved {}

#[cfg(feature = "defmt")]
impl defmt::Format for Reserved {
    fn format(&self, _fmt: defmt::Formatter) {
        match *self {}
    }
}

/// Safety states
///
/// Encoded in two bits. Three codes are operating modes; the fourth is
/// reserved and structurally unreachable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum State {
    /// No alarm active
    #[default]
    Normal,
    /// Some, but not all, alarms active
    Warning,
    /// Every alarm active
    Critical,
    /// Fourth code of the 2-bit encoding (`0b11`), never entered
    #[cfg_attr(feature = "serde", serde(skip))]
    Unused(Reserved),
}

impl State {
    /// States the machine can actually occupy
    pub const REACHABLE: [State; 3] = [State::Normal, State::Warning, State::Critical];

    /// Process the risk signals of one frame and return the next state
    ///
    /// Total risk is checked before any risk in every state, so a total alarm
    /// jumps straight to `Critical` from anywhere.
    pub fn transition(self, signals: RiskSignals) -> Self {
        use State::*;

        match self {
            Normal | Warning => {
                if signals.total() {
                    Critical
                } else if signals.any() {
                    Warning
                } else {
                    Normal
                }
            }
            Critical => {
                if !signals.any() {
                    Normal
                } else if !signals.total() {
                    Warning
                } else {
                    Critical
                }
            }
            Unused(reserved) => match reserved {},
        }
    }

    /// 2-bit register code
    pub const fn bits(self) -> u8 {
        match self {
            State::Normal => 0b00,
            State::Warning => 0b01,
            State::Critical => 0b10,
            State::Unused(reserved) => match reserved {},
        }
    }

    /// Decode a 2-bit register code
    pub const fn from_bits(bits: u8) -> Result<Self, DecodeError> {
        match bits {
            0b00 => Ok(State::Normal),
            0b01 => Ok(State::Warning),
            0b10 => Ok(State::Critical),
            0b11 => Err(DecodeError::ReservedState),
            other => Err(DecodeError::StateBitsOutOfRange(other)),
        }
    }

    /// Escalation level: 0 = normal, 1 = warning, 2 = critical
    pub const fn severity(self) -> u8 {
        match self {
            State::Normal => 0,
            State::Warning => 1,
            State::Critical => 2,
            State::Unused(reserved) => match reserved {},
        }
    }

    /// Check if any alarm condition holds in this state
    pub const fn is_alarm(self) -> bool {
        matches!(self, State::Warning | State::Critical)
    }

    /// Human-readable name
    pub const fn name(self) -> &'static str {
        match self {
            State::Normal => "Normal",
            State::Warning => "Warning",
            State::Critical => "Critical",
            State::Unused(reserved) => match reserved {},
        }
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
