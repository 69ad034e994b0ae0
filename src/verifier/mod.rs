//! Design legality checks
//!
//! Every sub-check is a unit struct whose associated functions return the
//! messages they found. `Verifier` runs them in a fixed order and merges the
//! results into a `VerificationReport`.

mod armor;
mod compatibility;
mod composite;
mod criticals;
mod gates;
mod movement;
pub mod placement;
mod printout;
mod report;
mod spread;
mod tech;
mod weight;

pub use armor::ArmorValidator;
pub use compatibility::CompatibilityValidator;
pub use composite::Verifier;
pub use criticals::CriticalsValidator;
pub use gates::ChassisGateValidator;
pub use movement::MovementValidator;
pub use placement::{check_location, PlacementError};
pub use printout::full_report;
pub use report::VerificationReport;
pub use spread::SpreadValidator;
pub use tech::TechValidator;
pub use weight::{WeightBreakdown, WeightValidator};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which check produced a diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckCategory {
    /// Explanatory lines around a failure; never affects the verdict
    Context,
    Weight,
    Engine,
    HeatSinks,
    Armor,
    Criticals,
    FailedEquipment,
    TechLevel,
    IntroYear,
    Compatibility,
    SpreadAllocation,
    Movement,
}

impl fmt::Display for CheckCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CheckCategory::Context => "context",
            CheckCategory::Weight => "weight",
            CheckCategory::Engine => "engine",
            CheckCategory::HeatSinks => "heat sinks",
            CheckCategory::Armor => "armor",
            CheckCategory::Criticals => "critical slots",
            CheckCategory::FailedEquipment => "failed equipment",
            CheckCategory::TechLevel => "tech level",
            CheckCategory::IntroYear => "intro year",
            CheckCategory::Compatibility => "compatibility",
            CheckCategory::SpreadAllocation => "spread allocation",
            CheckCategory::Movement => "movement",
        };
        f.write_str(name)
    }
}

/// One finding, tagged with the check that produced it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub category: CheckCategory,
    pub message: String,
}

impl Diagnostic {
    pub fn new(category: CheckCategory, message: impl Into<String>) -> Self {
        Self {
            category,
            message: message.into(),
        }
    }

    pub fn is_context(&self) -> bool {
        self.category == CheckCategory::Context
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}
