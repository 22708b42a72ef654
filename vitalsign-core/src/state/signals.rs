//! Aggregate risk signals derived from a sensor frame

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::sensor::SensorFrame;

/// The two aggregate signals that drive transitions and actuators
///
/// Built by [`RiskSignals::from_frame`], or by deserializing a pair that
/// already satisfies `total` implies `any`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct RiskSignals {
    any: bool,
    total: bool,
}

impl RiskSignals {
    /// No alarm active
    pub const CLEAR: RiskSignals = RiskSignals {
        any: false,
        total: false,
    };

    /// Derive A (any alarm) and C (every alarm) from a frame
    pub const fn from_frame(frame: &SensorFrame) -> Self {
        Self {
            any: frame.any_active(),
            total: frame.all_active(),
        }
    }

    /// A: at least one alarm flag is active
    pub const fn any(&self) -> bool {
        self.any
    }

    /// C: all six alarm flags are active
    pub const fn total(&self) -> bool {
        self.total
    }
}

// Rejects total risk without any risk.
#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for RiskSignals {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            any: bool,
            total: bool,
        }

        let raw = Raw::deserialize(deserializer)?;
        if raw.total && !raw.any {
            return Err(serde::de::Error::custom("total risk without any risk"));
        }
        Ok(Self {
            any: raw.any,
            total: raw.total,
        })
    }
}
