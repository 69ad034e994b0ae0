pub mod config;
pub mod error;
pub mod types;

pub use config::{config, set_config, VerifierConfig, WeightCeiling};
pub use error::{InputDefect, Result, VerifierError};
pub use types::{EquipmentId, MountId, Year};
