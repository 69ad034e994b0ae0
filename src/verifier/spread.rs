//! Per-location distribution of spreadable items
//!
//! The allocation check only compares slot totals; these rules fix how the
//! total must be divided between locations.

use crate::catalog::equipment::MiscKind;
use crate::unit::components::ArmorType;
use crate::unit::location::Location;
use crate::unit::mech::{Mech, ResolvedMount};

/// Stealth armor pods: two slots in each of these
const STEALTH_LOCATIONS: [Location; 6] = [
    Location::LeftArm,
    Location::RightArm,
    Location::LeftLeg,
    Location::RightLeg,
    Location::LeftTorso,
    Location::RightTorso,
];

pub struct SpreadValidator;

impl SpreadValidator {
    pub fn validate(mech: &Mech<'_>) -> Vec<String> {
        let mut errors = Vec::new();
        errors.extend(Self::validate_stealth(mech));
        for mount in mech.mounts() {
            let Some(kind) = mount.misc() else {
                continue;
            };
            match kind {
                MiscKind::DroneControlConsole => errors.extend(Self::validate_drone_console(mount)),
                MiscKind::MobileHpg => errors.extend(Self::validate_mobile_hpg(mech, mount)),
                MiscKind::EnvironmentalSealing => {
                    errors.extend(Self::validate_one_per_location(mech, mount, false))
                }
                MiscKind::BlueShield => errors.extend(Self::validate_one_per_location(mech, mount, true)),
                MiscKind::PartialWing => errors.extend(Self::validate_partial_wing(mech, mount)),
                _ => {}
            }
        }
        errors
    }

    /// Stealth slots summed over every stealth filler on the design
    pub fn validate_stealth(mech: &Mech<'_>) -> Vec<String> {
        let mut errors = Vec::new();
        let design = mech.design();
        let fillers: Vec<_> = mech
            .mounts()
            .iter()
            .filter(|mount| mount.misc() == Some(MiscKind::ArmorSlot(ArmorType::Stealth)))
            .collect();
        if fillers.is_empty() || design.is_patchwork() {
            return errors;
        }

        for location in STEALTH_LOCATIONS {
            let slots: usize = fillers
                .iter()
                .map(|mount| design.count_mount_in(mount.id, location))
                .sum();
            if slots != 2 {
                errors.push(format!(
                    "Incorrect number of stealth slots in the {}",
                    design.chassis.location_name(location)
                ));
            }
        }

        errors
    }

    pub fn validate_drone_console(mount: &ResolvedMount<'_>) -> Vec<String> {
        let mut errors = Vec::new();
        if mount.location() != Some(Location::Head) {
            errors.push(format!("{} must be mounted in the head", mount.name()));
        }
        errors
    }

    pub fn validate_mobile_hpg(mech: &Mech<'_>, mount: &ResolvedMount<'_>) -> Vec<String> {
        let mut errors = Vec::new();
        let design = mech.design();
        let outside_torso = design
            .locations_of(mount.id)
            .into_iter()
            .any(|location| !location.is_torso());
        if outside_torso {
            errors.push(format!("{} must be mounted in torso locations", mount.name()));
        }
        errors
    }

    /// One slot in every location of the chassis, the head optionally exempt
    pub fn validate_one_per_location(
        mech: &Mech<'_>,
        mount: &ResolvedMount<'_>,
        skip_head: bool,
    ) -> Vec<String> {
        let mut errors = Vec::new();
        let design = mech.design();
        let misplaced = design
            .chassis
            .locations()
            .iter()
            .filter(|&&location| !(skip_head && location == Location::Head))
            .any(|&location| design.count_mount_in(mount.id, location) != 1);
        if misplaced {
            let scope = if skip_head {
                "every location except the head"
            } else {
                "every location"
            };
            errors.push(format!("{} needs one slot in {}", mount.name(), scope));
        }
        errors
    }

    /// Three slots per side torso for Clan wings, four for Inner Sphere
    pub fn validate_partial_wing(mech: &Mech<'_>, mount: &ResolvedMount<'_>) -> Vec<String> {
        let mut errors = Vec::new();
        let design = mech.design();
        let expected = if mount.kind.tech.is_clan() { 3 } else { 4 };
        for location in [Location::LeftTorso, Location::RightTorso] {
            if design.count_mount_in(mount.id, location) != expected {
                errors.push(format!(
                    "Incorrect number of partial wing slots in the {}",
                    design.chassis.location_name(location)
                ));
            }
        }
        errors
    }
}
