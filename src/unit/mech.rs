//! Resolved view of a design: every mount joined to its catalog entry

use tracing::warn;

use crate::catalog::equipment::{
    Capability, EquipmentKind, HeatSinkKind, JumpJetKind, MiscKind, WeaponKind,
};
use crate::catalog::registry::EquipmentCatalog;
use crate::core::error::{InputDefect, Result, VerifierError};
use crate::core::types::MountId;
use crate::unit::design::{MountedEquipment, UnitDesign};
use crate::unit::location::Location;

/// How the design jumps, derived from its mounted equipment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpType {
    None,
    Jets(JumpJetKind),
    Booster,
}

/// A mount together with its catalog entry and derived size
#[derive(Debug, Clone)]
pub struct ResolvedMount<'a> {
    pub id: MountId,
    pub mount: &'a MountedEquipment,
    pub kind: &'a EquipmentKind,
    /// Slots the item needs, after chassis-dependent sizing
    pub criticals: usize,
    /// Tonnage after chassis-dependent sizing
    pub tonnage: f64,
}

impl<'a> ResolvedMount<'a> {
    pub fn name(&self) -> &str {
        &self.kind.name
    }

    pub fn location(&self) -> Option<Location> {
        self.mount.location
    }

    pub fn misc(&self) -> Option<MiscKind> {
        self.kind.misc()
    }

    pub fn weapon(&self) -> Option<WeaponKind> {
        self.kind.weapon()
    }

    pub fn is_working(&self) -> bool {
        !self.mount.destroyed
    }

    pub fn has(&self, capability: Capability) -> bool {
        self.kind.has(capability)
    }

    pub fn misc_is(&self, predicate: impl Fn(MiscKind) -> bool) -> bool {
        self.kind.misc_is(predicate)
    }
}

/// A design whose equipment has been looked up and range checked
#[derive(Debug, Clone)]
pub struct Mech<'a> {
    design: &'a UnitDesign,
    mounts: Vec<ResolvedMount<'a>>,
}

impl<'a> Mech<'a> {
    /// Look up every mount and check every location and slot reference
    ///
    /// This is the only place an input defect is detected. On failure the
    /// error carries every defect found, not just the first.
    pub fn resolve(design: &'a UnitDesign, catalog: &'a EquipmentCatalog) -> Result<Self> {
        let mut defects = Vec::new();
        let chassis = design.chassis;

        let mut seen = Vec::with_capacity(design.locations.len());
        for data in &design.locations {
            if seen.contains(&data.location) {
                defects.push(InputDefect::DuplicateLocation(data.location));
            }
            seen.push(data.location);
            if !chassis.has_location(data.location) {
                defects.push(InputDefect::UnexpectedLocation(data.location));
                continue;
            }
            let capacity = chassis.slot_capacity(data.location);
            if data.slots.len() > capacity {
                defects.push(InputDefect::SlotOverflow {
                    location: data.location,
                    count: data.slots.len(),
                    capacity,
                });
            }
            for (slot, critical) in data.slots.iter().enumerate() {
                if let Some(mount) = critical.mount() {
                    if mount.0 >= design.equipment.len() {
                        defects.push(InputDefect::DanglingSlot {
                            location: data.location,
                            slot,
                            mount,
                        });
                    }
                }
            }
        }

        let mut kinds = Vec::with_capacity(design.equipment.len());
        for (index, mount) in design.equipment.iter().enumerate() {
            let id = MountId(index);
            for location in mount.location.iter().chain(mount.second_location.iter()) {
                if !chassis.has_location(*location) {
                    defects.push(InputDefect::LocationNotOnChassis {
                        mount: id,
                        location: *location,
                    });
                }
            }
            match catalog.get(&mount.id) {
                Ok(kind) => kinds.push((id, mount, kind)),
                Err(_) => defects.push(InputDefect::UnknownEquipment {
                    mount: id,
                    id: mount.id.clone(),
                }),
            }
        }

        if !defects.is_empty() {
            for defect in &defects {
                warn!("{}: {}", design.name, defect);
            }
            return Err(VerifierError::InvalidInput {
                defects,
                partial: Vec::new(),
            });
        }

        let direct_fire_tons: f64 = kinds
            .iter()
            .filter(|(_, _, kind)| kind.weapon().map_or(false, WeaponKind::is_direct_fire))
            .map(|(_, _, kind)| kind.tonnage)
            .sum();

        let mounts = kinds
            .into_iter()
            .map(|(id, mount, kind)| {
                let (criticals, tonnage) = derived_size(design, kind, direct_fire_tons);
                ResolvedMount {
                    id,
                    mount,
                    kind,
                    criticals,
                    tonnage,
                }
            })
            .collect();

        Ok(Self { design, mounts })
    }

    pub fn design(&self) -> &'a UnitDesign {
        self.design
    }

    pub fn mounts(&self) -> &[ResolvedMount<'a>] {
        &self.mounts
    }

    pub fn mount(&self, id: MountId) -> Option<&ResolvedMount<'a>> {
        self.mounts.get(id.0)
    }

    pub fn misc(&self) -> impl Iterator<Item = (&ResolvedMount<'a>, MiscKind)> + '_ {
        self.mounts
            .iter()
            .filter_map(|mount| mount.misc().map(|kind| (mount, kind)))
    }

    pub fn weapons(&self) -> impl Iterator<Item = (&ResolvedMount<'a>, WeaponKind)> + '_ {
        self.mounts
            .iter()
            .filter_map(|mount| mount.weapon().map(|kind| (mount, kind)))
    }

    pub fn is_superheavy(&self) -> bool {
        self.design.is_superheavy()
    }

    /// Any mount, working or not, with the capability
    pub fn has(&self, capability: Capability) -> bool {
        self.mounts.iter().any(|mount| mount.has(capability))
    }

    pub fn has_working(&self, capability: Capability) -> bool {
        self.mounts
            .iter()
            .any(|mount| mount.is_working() && mount.has(capability))
    }

    pub fn count_working(&self, capability: Capability) -> usize {
        self.mounts
            .iter()
            .filter(|mount| mount.is_working() && mount.has(capability))
            .count()
    }

    /// Working mounts with the capability placed in `location`
    pub fn count_working_in(&self, capability: Capability, location: Location) -> usize {
        self.mounts
            .iter()
            .filter(|mount| {
                mount.is_working() && mount.location() == Some(location) && mount.has(capability)
            })
            .count()
    }

    pub fn heat_sink_count(&self) -> usize {
        self.misc().filter(|(_, kind)| kind.is_heat_sink()).count()
    }

    pub fn has_compact_heat_sinks(&self) -> bool {
        self.has(Capability::CompactHeatSink)
    }

    pub fn has_double_heat_sinks(&self) -> bool {
        self.has(Capability::DoubleHeatSink)
    }

    pub fn has_c3(&self) -> bool {
        self.has(Capability::C3)
    }

    pub fn has_advanced_fire_control(&self) -> bool {
        self.design.advanced_fire_control || !self.design.cockpit.is_industrial()
    }

    pub fn jump_type(&self) -> JumpType {
        if self.has(Capability::JumpBooster) {
            return JumpType::Booster;
        }
        self.misc()
            .find_map(|(_, kind)| match kind {
                MiscKind::JumpJet(jets) => Some(JumpType::Jets(jets)),
                _ => None,
            })
            .unwrap_or(JumpType::None)
    }

    /// Tonnage of everything that is neither a heat sink nor a structural filler
    pub fn equipment_tonnage(&self) -> f64 {
        self.mounts
            .iter()
            .filter(|mount| !mount.kind.is_structural())
            .filter(|mount| !mount.misc_is(MiscKind::is_heat_sink))
            .map(|mount| mount.tonnage)
            .sum()
    }

    pub fn compact_heat_sink_tonnage(&self) -> f64 {
        self.misc()
            .filter(|(_, kind)| *kind == MiscKind::HeatSink(HeatSinkKind::Compact))
            .map(|(mount, _)| mount.tonnage)
            .sum()
    }
}

/// Slots and tonnage for items sized by the chassis carrying them
pub(crate) fn derived_size(design: &UnitDesign, kind: &EquipmentKind, direct_fire_tons: f64) -> (usize, f64) {
    match kind.misc() {
        Some(MiscKind::JumpJet(jets)) => {
            let base = if design.tonnage <= 55.0 {
                0.5
            } else if design.tonnage <= 85.0 {
                1.0
            } else {
                2.0
            };
            let tonnage = if jets.is_improved() { base * 2.0 } else { base };
            (kind.criticals as usize, tonnage)
        }
        Some(MiscKind::TargetingComputer) => {
            let divisor = if kind.tech.is_clan() { 5.0 } else { 4.0 };
            let size = (direct_fire_tons / divisor).ceil().max(1.0);
            (size as usize, size)
        }
        _ => (kind.criticals as usize, kind.tonnage),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::tech::TechSetting;
    use crate::unit::chassis::ChassisKind;
    use crate::unit::components::{ArmorType, CockpitType, Engine, GyroType, StructureType};
    use crate::unit::design::{
        CriticalSlot, DesignFlags, Environment, LocationData, MountedEquipment,
    };

    fn bare_design(tonnage: f64) -> UnitDesign {
        UnitDesign {
            name: "Test".to_string(),
            tonnage,
            chassis: ChassisKind::Biped,
            flags: DesignFlags::default(),
            tech: TechSetting::default(),
            engine: Engine::fusion(200),
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
        }
    }

    #[test]
    fn test_resolve_collects_every_defect() {
        let catalog = EquipmentCatalog::standard();
        let mut design = bare_design(50.0);
        design.equipment.push(MountedEquipment::new("NoSuchLaser", Some(Location::LeftArm)));
        design
            .equipment
            .push(MountedEquipment::new("ISMediumLaser", Some(Location::CenterLeg)));
        design.locations.push(LocationData::new(
            Location::LeftArm,
            vec![CriticalSlot::Equipment { mount: MountId(7) }],
        ));
        design.locations.push(LocationData::new(Location::LeftArm, Vec::new()));

        match Mech::resolve(&design, &catalog) {
            Err(VerifierError::InvalidInput { defects, .. }) => {
                assert!(defects.contains(&InputDefect::DuplicateLocation(Location::LeftArm)));
                assert!(defects.iter().any(|d| matches!(d, InputDefect::DanglingSlot { .. })));
                assert!(defects.iter().any(|d| matches!(d, InputDefect::UnknownEquipment { .. })));
                assert!(defects
                    .iter()
                    .any(|d| matches!(d, InputDefect::LocationNotOnChassis { .. })));
            }
            other => panic!("expected invalid input, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_jump_jet_tonnage_by_weight_class() {
        let catalog = EquipmentCatalog::standard();
        for (tonnage, expected) in [(50.0, 0.5), (70.0, 1.0), (90.0, 2.0)] {
            let mut design = bare_design(tonnage);
            design.equipment.push(MountedEquipment::new("JumpJet", None));
            let mech = Mech::resolve(&design, &catalog).unwrap();
            assert_eq!(mech.mounts()[0].tonnage, expected);
        }
        let mut design = bare_design(70.0);
        design.equipment.push(MountedEquipment::new("ImprovedJump Jet", None));
        let mech = Mech::resolve(&design, &catalog).unwrap();
        assert_eq!(mech.mounts()[0].tonnage, 2.0);
        assert_eq!(mech.mounts()[0].criticals, 2);
        assert_eq!(mech.jump_type(), JumpType::Jets(JumpJetKind::Improved));
    }

    #[test]
    fn test_targeting_computer_sized_from_weapons() {
        let catalog = EquipmentCatalog::standard();
        let mut design = bare_design(70.0);
        for id in ["ISLargeLaser", "ISLargeLaser", "ISMediumLaser", "ISLRM10"] {
            design.equipment.push(MountedEquipment::new(id, None));
        }
        design
            .equipment
            .push(MountedEquipment::new("ISTargeting Computer", None));
        let mech = Mech::resolve(&design, &catalog).unwrap();
        let tc = &mech.mounts()[4];
        // 11 tons of direct-fire weapons; the LRM does not count
        assert_eq!(tc.criticals, 3);
        assert_eq!(tc.tonnage, 3.0);
    }

    #[test]
    fn test_advanced_fire_control_follows_cockpit() {
        let catalog = EquipmentCatalog::standard();
        let mut design = bare_design(50.0);
        design.cockpit = CockpitType::Industrial;
        assert!(!Mech::resolve(&design, &catalog).unwrap().has_advanced_fire_control());
        design.advanced_fire_control = true;
        assert!(Mech::resolve(&design, &catalog).unwrap().has_advanced_fire_control());
    }
}
