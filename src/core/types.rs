//! Core type definitions used throughout the codebase

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Catalog key for an equipment kind (the catalog's internal name)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Display, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EquipmentId(pub String);

impl EquipmentId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for EquipmentId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Index of a mounted item in a design's equipment list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, Serialize, Deserialize)]
#[display(fmt = "#{}", _0)]
#[serde(transparent)]
pub struct MountId(pub usize);

/// In-universe calendar year used for tech availability
pub type Year = u16;

/// Tonnage comparisons tolerate float noise below this
pub const WEIGHT_EPSILON: f64 = 1e-6;
