//! Critical slot allocation: mounted items, engine heat sinks, system slots

use crate::catalog::equipment::MiscKind;
use crate::unit::components::{CockpitType, GyroType};
use crate::unit::design::{SystemSlot, UnitDesign};
use crate::unit::location::Location;
use crate::unit::mech::{Mech, ResolvedMount};

pub struct CriticalsValidator;

impl CriticalsValidator {
    pub fn validate(mech: &Mech<'_>) -> Vec<String> {
        let mut errors = Vec::new();
        errors.extend(Self::validate_unallocated(mech));
        errors.extend(Self::validate_allocation(mech));
        errors.extend(Self::validate_stray_slots(mech));
        errors.extend(Self::validate_internal_heat_sinks(mech));
        errors.extend(Self::validate_omni_arm_weapons(mech));
        errors.extend(Self::validate_system_slots(mech.design()));
        errors
    }

    /// Nearly empty bins may be dangling after being shot dry
    fn is_exempt(mount: &ResolvedMount<'_>) -> bool {
        mount.kind.is_ammo() && mount.mount.shots.map_or(false, |shots| shots <= 1)
    }

    /// Slots in the design that count toward this mount's requirement
    ///
    /// Spreadable items count every location, except the targeting computer
    /// which counts only its own. A split item adds its second location only
    /// when it holds slots in its primary location and that primary is the
    /// more restrictive of the pair.
    pub fn allocated_slots(mech: &Mech<'_>, mount: &ResolvedMount<'_>) -> usize {
        let design = mech.design();
        let Some(primary) = mount.location() else {
            return 0;
        };

        if mount.kind.spreadable && !mount.misc_is(|kind| kind == MiscKind::TargetingComputer) {
            return design.count_mount_everywhere(mount.id);
        }

        let mut count = design.count_mount_in(mount.id, primary);
        if let Some(secondary) = mount.mount.second_location {
            if count > 0 && Location::most_restrictive(primary, secondary) == primary {
                count += design.count_mount_in(mount.id, secondary);
            }
        }
        count
    }

    pub fn validate_unallocated(mech: &Mech<'_>) -> Vec<String> {
        let mut errors = Vec::new();

        for mount in mech.mounts() {
            if mount.location().is_some()
                || mount.criticals == 0
                || mount.misc_is(MiscKind::is_heat_sink)
                || Self::is_exempt(mount)
            {
                continue;
            }
            errors.push(format!("Unallocated Equipment: {}", mount.name()));
        }

        errors
    }

    pub fn validate_allocation(mech: &Mech<'_>) -> Vec<String> {
        let mut errors = Vec::new();

        for mount in mech.mounts() {
            // Structure and armor fillers are checked against their slot demand
            if mount.location().is_none() || mount.kind.is_structural() || Self::is_exempt(mount) {
                continue;
            }
            let allocated = Self::allocated_slots(mech, mount);
            if allocated != mount.criticals {
                errors.push(format!(
                    "{} has {} Slots, but {} Slots are allocated!",
                    mount.name(),
                    mount.criticals,
                    allocated
                ));
            }
        }

        errors
    }

    /// Locations holding slots of a non-spreadable mount besides its own
    pub fn stray_locations(mech: &Mech<'_>, mount: &ResolvedMount<'_>) -> Vec<Location> {
        let Some(primary) = mount.location() else {
            return Vec::new();
        };
        if mount.kind.spreadable {
            return Vec::new();
        }
        mech.design()
            .locations_of(mount.id)
            .into_iter()
            .filter(|&location| location != primary && Some(location) != mount.mount.second_location)
            .collect()
    }

    pub fn validate_stray_slots(mech: &Mech<'_>) -> Vec<String> {
        let mut errors = Vec::new();
        let chassis = mech.design().chassis;

        for mount in mech.mounts() {
            if mount.kind.is_structural() || Self::is_exempt(mount) {
                continue;
            }
            let Some(primary) = mount.location() else {
                continue;
            };
            for location in Self::stray_locations(mech, mount) {
                errors.push(format!(
                    "{} is mounted in the {} but also occupies Slots in the {}!",
                    mount.name(),
                    chassis.location_name(primary),
                    chassis.location_name(location)
                ));
            }
        }

        errors
    }

    /// Heat sinks without a location live inside the engine
    pub fn validate_internal_heat_sinks(mech: &Mech<'_>) -> Vec<String> {
        let mut errors = Vec::new();
        let design = mech.design();

        let internal = mech
            .misc()
            .filter(|(mount, kind)| kind.is_heat_sink() && mount.location().is_none())
            .count();
        let total = mech.heat_sink_count();
        let capacity = design
            .engine
            .integral_heat_sink_capacity(mech.has_compact_heat_sinks()) as usize;

        if internal > capacity {
            errors.push(format!(
                "Engine: can hold {} heat sinks internally, but {} are assigned to it",
                capacity, internal
            ));
        } else if internal < capacity && internal != total && !design.flags.omni {
            errors.push(format!(
                "Engine: only {} of {} internal heat sink slots are used, but {} heat sinks take critical slots",
                internal,
                capacity,
                total - internal
            ));
        }

        errors
    }

    pub fn validate_omni_arm_weapons(mech: &Mech<'_>) -> Vec<String> {
        let mut errors = Vec::new();
        let design = mech.design();
        if !design.flags.omni || !design.chassis.is_biped() {
            return errors;
        }

        let mut reported = Vec::new();
        for arm in [Location::LeftArm, Location::RightArm] {
            if !design.has_system(SystemSlot::LowerArm, arm) && !design.has_system(SystemSlot::Hand, arm) {
                continue;
            }
            for (mount, weapon) in mech.weapons() {
                if mount.location() != Some(arm) {
                    continue;
                }
                if let Some(class) = weapon.omni_arm_class() {
                    if !reported.contains(&class) {
                        reported.push(class);
                        errors.push(format!(
                            "Omni mechs with arm mounted {} cannot have lower arm or hand actuators!",
                            class
                        ));
                    }
                }
            }
        }

        errors
    }

    /// Engine and gyro slot counts; reads only the design
    pub fn validate_system_slots(design: &UnitDesign) -> Vec<String> {
        let mut errors = Vec::new();
        let engine = design.engine;
        let side = engine.side_torso_slots();

        let engine_ok = design.count_system(SystemSlot::Engine, Location::LeftTorso) == side
            && design.count_system(SystemSlot::Engine, Location::RightTorso) == side
            && design.count_system(SystemSlot::Engine, Location::CenterTorso)
                == engine.center_torso_slots();
        if !engine_ok {
            errors.push("Engine: Incorrect number of criticals allocated.".to_string());
        }

        if design.count_system(SystemSlot::Gyro, Location::CenterTorso) != design.gyro.slots() {
            errors.push("Gyro: Incorrect number of criticals allocated.".to_string());
        }

        if design.gyro == GyroType::None && design.cockpit != CockpitType::Interface {
            errors.push("Missing Gyro!".to_string());
        }

        errors
    }
}
