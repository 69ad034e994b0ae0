//! The unit design data model
//!
//! A `UnitDesign` is plain data: whatever a loader or construction tool
//! produced. Nothing here assumes the data is consistent; `Mech::resolve`
//! and the verifier decide that.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::catalog::tech::TechSetting;
use crate::core::types::{EquipmentId, MountId};
use crate::unit::chassis::ChassisKind;
use crate::unit::components::{
    internal_structure, ArmorType, CockpitType, Engine, GyroType, StructureType,
};
use crate::unit::location::Location;

/// Fixed system components that occupy critical slots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SystemSlot {
    LifeSupport,
    Sensors,
    Cockpit,
    Engine,
    Gyro,
    Shoulder,
    UpperArm,
    LowerArm,
    Hand,
    Hip,
    UpperLeg,
    LowerLeg,
    Foot,
}

impl fmt::Display for SystemSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SystemSlot::LifeSupport => "Life Support",
            SystemSlot::Sensors => "Sensors",
            SystemSlot::Cockpit => "Cockpit",
            SystemSlot::Engine => "Engine",
            SystemSlot::Gyro => "Gyro",
            SystemSlot::Shoulder => "Shoulder",
            SystemSlot::UpperArm => "Upper Arm Actuator",
            SystemSlot::LowerArm => "Lower Arm Actuator",
            SystemSlot::Hand => "Hand Actuator",
            SystemSlot::Hip => "Hip",
            SystemSlot::UpperLeg => "Upper Leg Actuator",
            SystemSlot::LowerLeg => "Lower Leg Actuator",
            SystemSlot::Foot => "Foot Actuator",
        };
        f.write_str(name)
    }
}

/// One critical slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CriticalSlot {
    Empty,
    System {
        system: SystemSlot,
        #[serde(default)]
        armored: bool,
    },
    /// Occupied by the mount at this index of the equipment list
    Equipment { mount: MountId },
}

impl CriticalSlot {
    pub fn system(system: SystemSlot) -> Self {
        CriticalSlot::System {
            system,
            armored: false,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, CriticalSlot::Empty)
    }

    pub fn is_system(&self, wanted: SystemSlot) -> bool {
        matches!(self, CriticalSlot::System { system, .. } if *system == wanted)
    }

    pub fn mount(&self) -> Option<MountId> {
        match self {
            CriticalSlot::Equipment { mount } => Some(*mount),
            _ => None,
        }
    }
}

/// An equipment instance placed on the design
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MountedEquipment {
    pub id: EquipmentId,
    /// `None` for unallocated items and engine-internal heat sinks
    #[serde(default)]
    pub location: Option<Location>,
    /// Second location for items split across two locations
    #[serde(default)]
    pub second_location: Option<Location>,
    #[serde(default)]
    pub rear: bool,
    /// Critically hardened; every slot it occupies weighs an extra half ton
    #[serde(default)]
    pub armored: bool,
    #[serde(default)]
    pub turret: bool,
    #[serde(default)]
    pub destroyed: bool,
    /// Remaining shots; `None` means a full bin
    #[serde(default)]
    pub shots: Option<u16>,
}

impl MountedEquipment {
    pub fn new(id: impl Into<String>, location: Option<Location>) -> Self {
        Self {
            id: EquipmentId::new(id),
            location,
            second_location: None,
            rear: false,
            armored: false,
            turret: false,
            destroyed: false,
            shots: None,
        }
    }

    pub fn is_split(&self) -> bool {
        self.second_location.is_some()
    }
}

/// Slots and armor of one body location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationData {
    pub location: Location,
    #[serde(default)]
    pub slots: Vec<CriticalSlot>,
    #[serde(default)]
    pub armor: u16,
    #[serde(default)]
    pub rear_armor: u16,
    /// Overrides the design's armor type (patchwork armor)
    #[serde(default)]
    pub armor_type: Option<ArmorType>,
    /// Overrides the internal structure table
    #[serde(default)]
    pub internal: Option<u16>,
}

impl LocationData {
    pub fn new(location: Location, slots: Vec<CriticalSlot>) -> Self {
        Self {
            location,
            slots,
            armor: 0,
            rear_armor: 0,
            armor_type: None,
            internal: None,
        }
    }

    pub fn count_system(&self, system: SystemSlot) -> usize {
        self.slots.iter().filter(|slot| slot.is_system(system)).count()
    }

    pub fn count_mount(&self, mount: MountId) -> usize {
        self.slots
            .iter()
            .filter(|slot| slot.mount() == Some(mount))
            .count()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesignFlags {
    pub industrial: bool,
    pub primitive: bool,
    pub omni: bool,
}

/// Where the unit is operating; only movement reads this
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Environment {
    pub gravity: f64,
    pub underwater: bool,
}

impl Default for Environment {
    fn default() -> Self {
        Self {
            gravity: 1.0,
            underwater: false,
        }
    }
}

/// A complete mech design as handed to the verifier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitDesign {
    pub name: String,
    pub tonnage: f64,
    pub chassis: ChassisKind,
    #[serde(default)]
    pub flags: DesignFlags,
    #[serde(default)]
    pub tech: TechSetting,
    pub engine: Engine,
    pub structure: StructureType,
    pub gyro: GyroType,
    pub cockpit: CockpitType,
    pub armor_type: ArmorType,
    pub armor_tonnage: f64,
    pub locations: Vec<LocationData>,
    #[serde(default)]
    pub equipment: Vec<MountedEquipment>,
    /// Heat sinks fixed to an omni's base chassis
    #[serde(default)]
    pub base_chassis_heat_sinks: Option<u16>,
    #[serde(default)]
    pub jump_booster_mp: u16,
    /// Industrial designs retrofitted with advanced fire control
    #[serde(default)]
    pub advanced_fire_control: bool,
    /// Names the loader could not resolve
    #[serde(default)]
    pub failed_equipment: Vec<String>,
    /// Scenario escape hatch: always report the design as legal
    #[serde(default)]
    pub ignore_illegal: bool,
    /// Abstract units that are not subject to construction rules
    #[serde(default)]
    pub skip_verification: bool,
    #[serde(default)]
    pub environment: Environment,
}

impl UnitDesign {
    pub fn is_superheavy(&self) -> bool {
        self.tonnage > 100.0
    }

    pub fn is_clan(&self) -> bool {
        self.tech.base.is_clan()
    }

    pub fn location(&self, location: Location) -> Option<&LocationData> {
        self.locations.iter().find(|data| data.location == location)
    }

    pub fn slots(&self, location: Location) -> &[CriticalSlot] {
        self.location(location)
            .map_or(&[][..], |data| data.slots.as_slice())
    }

    pub fn has_system(&self, system: SystemSlot, location: Location) -> bool {
        self.slots(location).iter().any(|slot| slot.is_system(system))
    }

    pub fn count_system(&self, system: SystemSlot, location: Location) -> usize {
        self.location(location)
            .map_or(0, |data| data.count_system(system))
    }

    /// Number of slots in `location` holding the given mount
    pub fn count_mount_in(&self, mount: MountId, location: Location) -> usize {
        self.location(location).map_or(0, |data| data.count_mount(mount))
    }

    pub fn count_mount_everywhere(&self, mount: MountId) -> usize {
        self.locations.iter().map(|data| data.count_mount(mount)).sum()
    }

    /// Locations whose slots hold the given mount
    pub fn locations_of(&self, mount: MountId) -> Vec<Location> {
        self.locations
            .iter()
            .filter(|data| data.count_mount(mount) > 0)
            .map(|data| data.location)
            .collect()
    }

    /// Internal structure of a location; legs in arm positions use the leg row
    pub fn internal_points(&self, location: Location) -> u16 {
        let row = if self.chassis.is_leg(location) {
            Location::LeftLeg
        } else {
            location
        };
        self.location(location)
            .and_then(|data| data.internal)
            .unwrap_or_else(|| internal_structure(self.tonnage, row))
    }

    pub fn front_armor(&self, location: Location) -> u16 {
        self.location(location).map_or(0, |data| data.armor)
    }

    pub fn armor_type_at(&self, location: Location) -> ArmorType {
        self.location(location)
            .and_then(|data| data.armor_type)
            .unwrap_or(self.armor_type)
    }

    /// Different armor types in different locations
    pub fn is_patchwork(&self) -> bool {
        self.locations
            .iter()
            .any(|data| data.armor_type.map_or(false, |armor| armor != self.armor_type))
    }

    pub fn total_armor_points(&self) -> u32 {
        self.locations
            .iter()
            .map(|data| data.armor as u32 + data.rear_armor as u32)
            .sum()
    }

    pub fn has_stealth_armor(&self) -> bool {
        self.chassis
            .locations()
            .iter()
            .any(|&loc| self.armor_type_at(loc) == ArmorType::Stealth)
    }

    pub fn is_cockpit_location(&self, location: Location) -> bool {
        self.cockpit.location() == location
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_serde_shape() {
        let slots = vec![
            CriticalSlot::Empty,
            CriticalSlot::system(SystemSlot::Engine),
            CriticalSlot::Equipment { mount: MountId(2) },
        ];
        let json = serde_json::to_string(&slots).unwrap();
        assert!(json.contains("\"kind\":\"equipment\""));
        let back: Vec<CriticalSlot> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, slots);
    }

    #[test]
    fn test_location_counts() {
        let mut data = LocationData::new(
            Location::LeftTorso,
            vec![
                CriticalSlot::system(SystemSlot::Engine),
                CriticalSlot::Equipment { mount: MountId(0) },
                CriticalSlot::Equipment { mount: MountId(0) },
                CriticalSlot::Empty,
            ],
        );
        data.armor = 10;
        assert_eq!(data.count_system(SystemSlot::Engine), 1);
        assert_eq!(data.count_mount(MountId(0)), 2);
        assert_eq!(data.count_mount(MountId(1)), 0);
    }

    #[test]
    fn test_environment_defaults() {
        let env: Environment = serde_json::from_str("{}").unwrap();
        assert_eq!(env.gravity, 1.0);
        assert!(!env.underwater);
    }
}
