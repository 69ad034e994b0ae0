//! Chassis kinds and the location layout each one implies

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::unit::location::Location;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LamKind {
    Standard,
    Bimodal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuadVeeMotive {
    Tracks,
    Wheels,
}

/// Closed set of locomotion variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChassisKind {
    Biped,
    Quad,
    Tripod,
    LandAir(LamKind),
    QuadVee(QuadVeeMotive),
}

/// Which locations carry the unit's weight
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegLayout {
    TwoLegs,
    ThreeLegs,
    FourLegs,
    /// Not a legged unit
    None,
}

impl LegLayout {
    pub fn locations(self) -> &'static [Location] {
        match self {
            LegLayout::FourLegs => &[
                Location::LeftLeg,
                Location::LeftArm,
                Location::RightLeg,
                Location::RightArm,
            ],
            LegLayout::ThreeLegs => &[Location::LeftLeg, Location::CenterLeg, Location::RightLeg],
            LegLayout::TwoLegs => &[Location::LeftLeg, Location::RightLeg],
            LegLayout::None => &[],
        }
    }
}

impl ChassisKind {
    /// Four legs, front legs in the arm positions
    pub fn is_quad(self) -> bool {
        matches!(self, ChassisKind::Quad | ChassisKind::QuadVee(_))
    }

    pub fn is_biped(self) -> bool {
        self == ChassisKind::Biped
    }

    pub fn is_lam(self) -> bool {
        matches!(self, ChassisKind::LandAir(_))
    }

    pub fn is_quadvee(self) -> bool {
        matches!(self, ChassisKind::QuadVee(_))
    }

    pub fn is_tripod(self) -> bool {
        self == ChassisKind::Tripod
    }

    pub fn locations(self) -> &'static [Location] {
        if self.is_tripod() {
            &Location::ALL
        } else {
            &Location::STANDARD
        }
    }

    pub fn has_location(self, location: Location) -> bool {
        self.locations().contains(&location)
    }

    pub fn leg_layout(self) -> LegLayout {
        match self {
            ChassisKind::Quad | ChassisKind::QuadVee(_) => LegLayout::FourLegs,
            ChassisKind::Tripod => LegLayout::ThreeLegs,
            ChassisKind::Biped | ChassisKind::LandAir(_) => LegLayout::TwoLegs,
        }
    }

    pub fn is_leg(self, location: Location) -> bool {
        self.has_location(location)
            && (location.is_leg_position() || (self.is_quad() && location.is_arm_position()))
    }

    pub fn is_arm(self, location: Location) -> bool {
        !self.is_quad() && location.is_arm_position()
    }

    pub fn is_torso(self, location: Location) -> bool {
        location.is_torso()
    }

    /// Number of critical slots a location provides
    pub fn slot_capacity(self, location: Location) -> usize {
        if !self.has_location(location) {
            return 0;
        }
        match location {
            Location::Head => 6,
            Location::CenterTorso | Location::LeftTorso | Location::RightTorso => 12,
            loc if self.is_leg(loc) => 6,
            _ => 12,
        }
    }

    /// Location name as printed for this chassis
    pub fn location_name(self, location: Location) -> String {
        if self.is_quad() {
            match location {
                Location::LeftArm => return "Front Left Leg".to_string(),
                Location::RightArm => return "Front Right Leg".to_string(),
                Location::LeftLeg => return "Rear Left Leg".to_string(),
                Location::RightLeg => return "Rear Right Leg".to_string(),
                _ => {}
            }
        }
        location.to_string()
    }
}

impl fmt::Display for ChassisKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChassisKind::Biped => f.write_str("Biped"),
            ChassisKind::Quad => f.write_str("Quad"),
            ChassisKind::Tripod => f.write_str("Tripod"),
            ChassisKind::LandAir(LamKind::Standard) => f.write_str("LAM"),
            ChassisKind::LandAir(LamKind::Bimodal) => f.write_str("Bimodal LAM"),
            ChassisKind::QuadVee(QuadVeeMotive::Tracks) => f.write_str("QuadVee (tracked)"),
            ChassisKind::QuadVee(QuadVeeMotive::Wheels) => f.write_str("QuadVee (wheeled)"),
        }
    }
}
