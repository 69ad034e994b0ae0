//! Body locations and the precedence used to settle split mounts

use serde::{Deserialize, Serialize};
use std::fmt;

/// A body location of a mech
///
/// Quad and QuadVee chassis reuse the arm locations as front legs; only the
/// tripod has a centre leg.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Location {
    Head,
    CenterTorso,
    RightTorso,
    LeftTorso,
    RightArm,
    LeftArm,
    RightLeg,
    LeftLeg,
    CenterLeg,
}

impl Location {
    pub const ALL: [Location; 9] = [
        Location::Head,
        Location::CenterTorso,
        Location::RightTorso,
        Location::LeftTorso,
        Location::RightArm,
        Location::LeftArm,
        Location::RightLeg,
        Location::LeftLeg,
        Location::CenterLeg,
    ];

    /// The eight locations every non-tripod mech has
    pub const STANDARD: [Location; 8] = [
        Location::Head,
        Location::CenterTorso,
        Location::RightTorso,
        Location::LeftTorso,
        Location::RightArm,
        Location::LeftArm,
        Location::RightLeg,
        Location::LeftLeg,
    ];

    pub fn is_torso(self) -> bool {
        matches!(
            self,
            Location::CenterTorso | Location::LeftTorso | Location::RightTorso
        )
    }

    pub fn is_side_torso(self) -> bool {
        matches!(self, Location::LeftTorso | Location::RightTorso)
    }

    /// Arm position, regardless of whether the chassis uses it as a leg
    pub fn is_arm_position(self) -> bool {
        matches!(self, Location::LeftArm | Location::RightArm)
    }

    /// Leg position proper (front legs of a quad are arm positions)
    pub fn is_leg_position(self) -> bool {
        matches!(
            self,
            Location::LeftLeg | Location::RightLeg | Location::CenterLeg
        )
    }

    /// Score used by the split-mount tie-break; higher is more restrictive
    pub fn restriction_score(self) -> u8 {
        match self {
            Location::LeftArm | Location::RightArm => 3,
            Location::LeftTorso | Location::RightTorso => 2,
            Location::CenterTorso => 1,
            _ => 0,
        }
    }

    /// The more restrictive of two locations; `a` wins ties
    pub fn most_restrictive(a: Location, b: Location) -> Location {
        if b.restriction_score() > a.restriction_score() {
            b
        } else {
            a
        }
    }

    pub fn abbreviation(self) -> &'static str {
        match self {
            Location::Head => "HD",
            Location::CenterTorso => "CT",
            Location::RightTorso => "RT",
            Location::LeftTorso => "LT",
            Location::RightArm => "RA",
            Location::LeftArm => "LA",
            Location::RightLeg => "RL",
            Location::LeftLeg => "LL",
            Location::CenterLeg => "CL",
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Location::Head => "Head",
            Location::CenterTorso => "Center Torso",
            Location::RightTorso => "Right Torso",
            Location::LeftTorso => "Left Torso",
            Location::RightArm => "Right Arm",
            Location::LeftArm => "Left Arm",
            Location::RightLeg => "Right Leg",
            Location::LeftLeg => "Left Leg",
            Location::CenterLeg => "Center Leg",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arm_beats_torso() {
        assert_eq!(
            Location::most_restrictive(Location::LeftTorso, Location::LeftArm),
            Location::LeftArm
        );
        assert_eq!(
            Location::most_restrictive(Location::RightArm, Location::RightTorso),
            Location::RightArm
        );
    }

    #[test]
    fn test_tie_returns_first() {
        assert_eq!(
            Location::most_restrictive(Location::LeftLeg, Location::Head),
            Location::LeftLeg
        );
        assert_eq!(
            Location::most_restrictive(Location::Head, Location::LeftLeg),
            Location::Head
        );
    }

    #[test]
    fn test_location_serde_names() {
        let json = serde_json::to_string(&Location::CenterTorso).unwrap();
        assert_eq!(json, "\"center_torso\"");
    }
}
