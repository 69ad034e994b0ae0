//! Mech Verifier - BattleMech construction legality checks
//!
//! A design is plain data (`unit::UnitDesign`). `verifier::Verifier` resolves
//! it against a `catalog::EquipmentCatalog` and reports every construction
//! rule it breaks. `cache::CachedUnitState` memoises the derived movement
//! values that the checks and other hot paths read repeatedly.

pub mod cache;
pub mod catalog;
pub mod core;
pub mod unit;
pub mod verifier;

pub use crate::catalog::EquipmentCatalog;
pub use crate::core::{Result, VerifierConfig, VerifierError};
pub use crate::unit::{DesignBuilder, UnitDesign};
pub use crate::verifier::{VerificationReport, Verifier};
