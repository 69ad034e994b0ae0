//! Memoisation of derived unit attributes

pub mod compute_once;
pub mod unit_state;

pub use compute_once::ComputeOnce;
pub use unit_state::{CachedUnitState, UnitSnapshot};
