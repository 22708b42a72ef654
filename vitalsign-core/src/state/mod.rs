//! Safety state machine
//!
//! Explicit, finite, and deterministic. Every (state, frame) pair has
//! exactly one successor.

pub mod machine;
pub mod signals;

pub use machine::{Reserved, State};
pub use signals::RiskSignals;
