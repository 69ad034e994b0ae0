use thiserror::Error;

use crate::core::types::{EquipmentId, MountId};
use crate::unit::Location;
use crate::verifier::Diagnostic;

/// A defect in the object model handed to the verifier.
///
/// These mean the data is corrupt, not that the unit is illegal.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputDefect {
    #[error("mount {mount} references unknown equipment kind {id}")]
    UnknownEquipment { mount: MountId, id: EquipmentId },

    #[error("mount {mount} is placed in {location}, which this chassis does not have")]
    LocationNotOnChassis { mount: MountId, location: Location },

    #[error("slot {slot} of {location} references mount {mount}, which does not exist")]
    DanglingSlot {
        location: Location,
        slot: usize,
        mount: MountId,
    },

    #[error("{0} is listed more than once")]
    DuplicateLocation(Location),

    #[error("location {0} is not part of this chassis")]
    UnexpectedLocation(Location),

    #[error("{location} lists {count} slots but only has room for {capacity}")]
    SlotOverflow {
        location: Location,
        count: usize,
        capacity: usize,
    },
}

#[derive(Error, Debug)]
pub enum VerifierError {
    #[error("Unknown equipment kind: {0}")]
    UnknownEquipment(EquipmentId),

    #[error("Invalid design input ({} defect(s))", defects.len())]
    InvalidInput {
        defects: Vec<InputDefect>,
        /// Findings from the checks that do not depend on equipment lookups
        partial: Vec<Diagnostic>,
    },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Design construction failed: {0}")]
    Construction(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    TomlError(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, VerifierError>;
