//! Builder for designs with the standard system layout
//!
//! Construction tools and tests describe a design by what is mounted where;
//! the builder lays out system slots and places each item into free slots.

use crate::catalog::equipment::WeaponKind;
use crate::catalog::registry::EquipmentCatalog;
use crate::catalog::tech::TechSetting;
use crate::core::error::{Result, VerifierError};
use crate::core::types::MountId;
use crate::unit::chassis::ChassisKind;
use crate::unit::components::{ArmorType, CockpitType, Engine, GyroType, StructureType};
use crate::unit::design::{
    CriticalSlot, DesignFlags, Environment, LocationData, MountedEquipment, SystemSlot, UnitDesign,
};
use crate::unit::location::Location;
use crate::unit::mech::derived_size;

#[derive(Debug, Clone)]
enum Placement {
    /// All slots in the mount's own location, or none when unallocated
    Whole,
    /// Explicit slot counts per location
    Spread(Vec<(Location, usize)>),
    /// `primary` slots in the primary location, the rest in the second
    Split { primary: usize },
}

#[derive(Debug, Clone)]
pub struct DesignBuilder {
    design: UnitDesign,
    mounts: Vec<(MountedEquipment, Placement)>,
    removed_systems: Vec<(Location, SystemSlot)>,
    armored_systems: Vec<(Location, SystemSlot)>,
}

impl DesignBuilder {
    pub fn new(name: impl Into<String>, tonnage: f64, chassis: ChassisKind) -> Self {
        let rating = ((tonnage * 4.0) as u16 / 5 * 5).clamp(10, 400);
        Self {
            design: UnitDesign {
                name: name.into(),
                tonnage,
                chassis,
                flags: DesignFlags::default(),
                tech: TechSetting::default(),
                engine: Engine::fusion(rating),
                structure: StructureType::Standard,
                gyro: GyroType::Standard,
                cockpit: CockpitType::Standard,
                armor_type: ArmorType::Standard,
                armor_tonnage: 0.0,
                locations: Vec::new(),
                equipment: Vec::new(),
                base_chassis_heat_sinks: None,
                jump_booster_mp: 0,
                advanced_fire_control: false,
                failed_equipment: Vec::new(),
                ignore_illegal: false,
                skip_verification: false,
                environment: Environment::default(),
            },
            mounts: Vec::new(),
            removed_systems: Vec::new(),
            armored_systems: Vec::new(),
        }
    }

    pub fn engine(mut self, engine: Engine) -> Self {
        self.design.engine = engine;
        self
    }

    pub fn gyro(mut self, gyro: GyroType) -> Self {
        self.design.gyro = gyro;
        self
    }

    pub fn cockpit(mut self, cockpit: CockpitType) -> Self {
        self.design.cockpit = cockpit;
        self
    }

    pub fn structure(mut self, structure: StructureType) -> Self {
        self.design.structure = structure;
        self
    }

    pub fn armor(mut self, armor_type: ArmorType, tonnage: f64) -> Self {
        self.design.armor_type = armor_type;
        self.design.armor_tonnage = tonnage;
        self
    }

    pub fn tech(mut self, tech: TechSetting) -> Self {
        self.design.tech = tech;
        self
    }

    pub fn industrial(mut self) -> Self {
        self.design.flags.industrial = true;
        self
    }

    pub fn primitive(mut self) -> Self {
        self.design.flags.primitive = true;
        self
    }

    pub fn omni(mut self, base_chassis_heat_sinks: u16) -> Self {
        self.design.flags.omni = true;
        self.design.base_chassis_heat_sinks = Some(base_chassis_heat_sinks);
        self
    }

    pub fn environment(mut self, environment: Environment) -> Self {
        self.design.environment = environment;
        self
    }

    pub fn jump_booster_mp(mut self, mp: u16) -> Self {
        self.design.jump_booster_mp = mp;
        self
    }

    pub fn advanced_fire_control(mut self) -> Self {
        self.design.advanced_fire_control = true;
        self
    }

    pub fn failed_equipment(mut self, name: impl Into<String>) -> Self {
        self.design.failed_equipment.push(name.into());
        self
    }

    pub fn ignore_illegal(mut self) -> Self {
        self.design.ignore_illegal = true;
        self
    }

    pub fn skip_verification(mut self) -> Self {
        self.design.skip_verification = true;
        self
    }

    /// Front and rear armor points of a location
    pub fn armor_at(mut self, location: Location, front: u16, rear: u16) -> Self {
        let data = self.location_mut(location);
        data.armor = front;
        data.rear_armor = rear;
        self
    }

    pub fn armor_type_at(mut self, location: Location, armor_type: ArmorType) -> Self {
        self.location_mut(location).armor_type = Some(armor_type);
        self
    }

    /// Mount an item in one location
    pub fn mount(self, id: &str, location: Location) -> Self {
        self.mount_with(MountedEquipment::new(id, Some(location)))
    }

    /// Mount a prepared instance (armored, turret, rear-facing, ...)
    pub fn mount_with(mut self, mount: MountedEquipment) -> Self {
        self.mounts.push((mount, Placement::Whole));
        self
    }

    /// Add an item without a location: engine heat sinks or unallocated gear
    pub fn mount_internal(self, id: &str) -> Self {
        self.mount_with(MountedEquipment::new(id, None))
    }

    /// Mount a spreadable item with an explicit slot count per location
    ///
    /// The first entry becomes the item's nominal location.
    pub fn spread(mut self, id: &str, slots: &[(Location, usize)]) -> Self {
        let location = slots.first().map(|(loc, _)| *loc);
        self.mounts.push((
            MountedEquipment::new(id, location),
            Placement::Spread(slots.to_vec()),
        ));
        self
    }

    /// Mount an item split between two locations
    pub fn split(mut self, id: &str, primary: Location, secondary: Location, primary_slots: usize) -> Self {
        let mut mount = MountedEquipment::new(id, Some(primary));
        mount.second_location = Some(secondary);
        self.mounts.push((
            mount,
            Placement::Split {
                primary: primary_slots,
            },
        ));
        self
    }

    /// Leave an actuator out of the standard layout
    pub fn remove_system(mut self, location: Location, system: SystemSlot) -> Self {
        self.removed_systems.push((location, system));
        self
    }

    pub fn armored_system(mut self, location: Location, system: SystemSlot) -> Self {
        self.armored_systems.push((location, system));
        self
    }

    fn location_mut(&mut self, location: Location) -> &mut LocationData {
        let index = match self
            .design
            .locations
            .iter()
            .position(|data| data.location == location)
        {
            Some(index) => index,
            None => {
                self.design
                    .locations
                    .push(LocationData::new(location, Vec::new()));
                self.design.locations.len() - 1
            }
        };
        &mut self.design.locations[index]
    }

    /// Lay out system slots and place every mount
    pub fn build(mut self, catalog: &EquipmentCatalog) -> Result<UnitDesign> {
        let chassis = self.design.chassis;
        for &location in chassis.locations() {
            let mut slots = standard_layout(&self.design, location);
            for (loc, system) in &self.removed_systems {
                if *loc == location {
                    if let Some(slot) = slots.iter_mut().find(|slot| slot.is_system(*system)) {
                        *slot = CriticalSlot::Empty;
                    }
                }
            }
            for (loc, wanted) in &self.armored_systems {
                if *loc == location {
                    for slot in slots.iter_mut() {
                        if let CriticalSlot::System { system, armored } = slot {
                            if system == wanted {
                                *armored = true;
                            }
                        }
                    }
                }
            }
            self.location_mut(location).slots = slots;
        }
        self.design
            .locations
            .sort_by_key(|data| Location::ALL.iter().position(|loc| *loc == data.location));

        let mut kinds = Vec::with_capacity(self.mounts.len());
        for (mount, _) in &self.mounts {
            kinds.push(catalog.get(&mount.id)?);
        }
        let direct_fire_tons: f64 = kinds
            .iter()
            .filter(|kind| kind.weapon().map_or(false, WeaponKind::is_direct_fire))
            .map(|kind| kind.tonnage)
            .sum();

        let mounts = std::mem::take(&mut self.mounts);
        for (index, ((mount, placement), kind)) in mounts.into_iter().zip(kinds).enumerate() {
            let id = MountId(index);
            let (criticals, _) = derived_size(&self.design, kind, direct_fire_tons);
            match (&placement, mount.location) {
                (Placement::Whole, Some(location)) => {
                    self.fill(location, id, criticals, &kind.name)?;
                }
                (Placement::Whole, None) => {}
                (Placement::Spread(slots), _) => {
                    for (location, count) in slots {
                        self.fill(*location, id, *count, &kind.name)?;
                    }
                }
                (Placement::Split { primary }, Some(location)) => {
                    let first = (*primary).min(criticals);
                    self.fill(location, id, first, &kind.name)?;
                    if let Some(second) = mount.second_location {
                        self.fill(second, id, criticals - first, &kind.name)?;
                    }
                }
                (Placement::Split { .. }, None) => {
                    return Err(VerifierError::Construction(format!(
                        "{} is split but has no primary location",
                        kind.name
                    )));
                }
            }
            self.design.equipment.push(mount);
        }

        Ok(self.design)
    }

    fn fill(&mut self, location: Location, mount: MountId, count: usize, name: &str) -> Result<()> {
        let data = self.location_mut(location);
        let free: Vec<usize> = data
            .slots
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.is_empty())
            .map(|(index, _)| index)
            .take(count)
            .collect();
        if free.len() < count {
            return Err(VerifierError::Construction(format!(
                "no room for {} ({} slots) in {}",
                name, count, location
            )));
        }
        for index in free {
            data.slots[index] = CriticalSlot::Equipment { mount };
        }
        Ok(())
    }
}

/// System slots of a freshly built location, padded with empty slots
fn standard_layout(design: &UnitDesign, location: Location) -> Vec<CriticalSlot> {
    use SystemSlot::*;
    let chassis = design.chassis;
    let capacity = chassis.slot_capacity(location);
    let engine = design.engine;
    let cockpit_in_torso = design.cockpit.location() == Location::CenterTorso;

    // `None` keeps a slot free inside the fixed pattern
    let systems: Vec<Option<SystemSlot>> = match location {
        Location::Head if cockpit_in_torso => vec![Some(Sensors)],
        Location::Head => match design.cockpit {
            CockpitType::Small => vec![Some(LifeSupport), Some(Sensors), Some(Cockpit), Some(Sensors)],
            CockpitType::CommandConsole
            | CockpitType::SuperheavyCommandConsole
            | CockpitType::Dual => vec![
                Some(LifeSupport),
                Some(Sensors),
                Some(Cockpit),
                Some(Cockpit),
                Some(Sensors),
                Some(LifeSupport),
            ],
            _ => vec![
                Some(LifeSupport),
                Some(Sensors),
                Some(Cockpit),
                None,
                Some(Sensors),
                Some(LifeSupport),
            ],
        },
        Location::CenterTorso => {
            let total = engine.center_torso_slots();
            let first = total.min(3);
            let mut systems = vec![Some(Engine); first];
            systems.extend(std::iter::repeat(Some(Gyro)).take(design.gyro.slots()));
            systems.extend(std::iter::repeat(Some(Engine)).take(total - first));
            if cockpit_in_torso {
                systems.push(Some(Cockpit));
                systems.push(Some(Sensors));
            }
            systems
        }
        Location::LeftTorso | Location::RightTorso => {
            let mut systems = Vec::new();
            if cockpit_in_torso {
                systems.push(Some(LifeSupport));
            }
            systems.extend(std::iter::repeat(Some(Engine)).take(engine.side_torso_slots()));
            systems
        }
        loc if chassis.is_leg(loc) => vec![Some(Hip), Some(UpperLeg), Some(LowerLeg), Some(Foot)],
        _ => vec![Some(Shoulder), Some(UpperArm), Some(LowerArm), Some(Hand)],
    };

    let mut slots: Vec<CriticalSlot> = systems
        .into_iter()
        .map(|system| system.map_or(CriticalSlot::Empty, CriticalSlot::system))
        .collect();
    slots.truncate(capacity);
    slots.resize(capacity, CriticalSlot::Empty);
    slots
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::unit::components::EngineType;

    #[test]
    fn test_standard_biped_layout() {
        let catalog = EquipmentCatalog::standard();
        let design = DesignBuilder::new("Layout", 50.0, ChassisKind::Biped)
            .engine(Engine::fusion(250))
            .build(&catalog)
            .unwrap();
        assert_eq!(design.locations.len(), 8);
        assert_eq!(design.count_system(SystemSlot::Engine, Location::CenterTorso), 6);
        assert_eq!(design.count_system(SystemSlot::Gyro, Location::CenterTorso), 4);
        assert_eq!(design.count_system(SystemSlot::Cockpit, Location::Head), 1);
        assert!(design.has_system(SystemSlot::Hand, Location::LeftArm));
        assert!(design.has_system(SystemSlot::Foot, Location::RightLeg));
        assert_eq!(design.slots(Location::Head).len(), 6);
        assert_eq!(design.slots(Location::LeftLeg).len(), 6);
    }

    #[test]
    fn test_xl_engine_side_torsos() {
        let catalog = EquipmentCatalog::standard();
        let design = DesignBuilder::new("XL", 60.0, ChassisKind::Biped)
            .engine(Engine::new(EngineType::Xl, 300))
            .build(&catalog)
            .unwrap();
        assert_eq!(design.count_system(SystemSlot::Engine, Location::LeftTorso), 3);
        assert_eq!(design.count_system(SystemSlot::Engine, Location::RightTorso), 3);
    }

    #[test]
    fn test_quad_front_legs_get_leg_actuators() {
        let catalog = EquipmentCatalog::standard();
        let design = DesignBuilder::new("Quad", 50.0, ChassisKind::Quad)
            .build(&catalog)
            .unwrap();
        assert!(design.has_system(SystemSlot::Hip, Location::LeftArm));
        assert!(!design.has_system(SystemSlot::Hand, Location::LeftArm));
    }

    #[test]
    fn test_mounts_fill_free_slots() {
        let catalog = EquipmentCatalog::standard();
        let design = DesignBuilder::new("Mounts", 50.0, ChassisKind::Biped)
            .mount("ISLargeLaser", Location::RightArm)
            .mount_internal("Heat Sink")
            .remove_system(Location::LeftArm, SystemSlot::Hand)
            .build(&catalog)
            .unwrap();
        assert_eq!(design.count_mount_in(MountId(0), Location::RightArm), 2);
        assert_eq!(design.equipment[1].location, None);
        assert!(!design.has_system(SystemSlot::Hand, Location::LeftArm));
    }

    #[test]
    fn test_split_and_spread_placement() {
        let catalog = EquipmentCatalog::standard();
        let design = DesignBuilder::new("Split", 70.0, ChassisKind::Biped)
            .split("ISAC20", Location::RightArm, Location::RightTorso, 6)
            .spread("ISFerroFibrous", &[(Location::LeftTorso, 7), (Location::RightTorso, 6)])
            .build(&catalog)
            .unwrap();
        assert_eq!(design.count_mount_in(MountId(0), Location::RightArm), 6);
        assert_eq!(design.count_mount_in(MountId(0), Location::RightTorso), 4);
        assert_eq!(design.count_mount_everywhere(MountId(1)), 13);
    }

    #[test]
    fn test_no_room_is_a_construction_error() {
        let catalog = EquipmentCatalog::standard();
        let result = DesignBuilder::new("Crowded", 50.0, ChassisKind::Biped)
            .mount("ISAC20", Location::Head)
            .build(&catalog);
        assert!(matches!(result, Err(VerifierError::Construction(_))));
    }

    #[test]
    fn test_unknown_equipment_rejected() {
        let catalog = EquipmentCatalog::standard();
        let result = DesignBuilder::new("Unknown", 50.0, ChassisKind::Biped)
            .mount("NoSuchThing", Location::LeftArm)
            .build(&catalog);
        assert!(matches!(result, Err(VerifierError::UnknownEquipment(_))));
    }
}
