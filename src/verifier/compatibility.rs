//! Equipment compatibility: exclusions, co-requisites, cardinality and
//! placement of mounted items

use crate::catalog::equipment::{
    Capability, HarJelGrade, MiscKind, MotiveKind, MyomerKind, WeaponKind,
};
use crate::unit::chassis::{ChassisKind, QuadVeeMotive};
use crate::unit::components::{CockpitType, StructureType};
use crate::unit::design::SystemSlot;
use crate::unit::location::Location;
use crate::unit::mech::{Mech, ResolvedMount};
use crate::verifier::placement::check_location;

pub struct CompatibilityValidator;

impl CompatibilityValidator {
    pub fn validate(mech: &Mech<'_>) -> Vec<String> {
        let mut errors = Vec::new();
        errors.extend(Self::validate_exclusions(mech));
        errors.extend(Self::validate_arm_actuators(mech));
        errors.extend(Self::validate_turrets(mech));
        errors.extend(Self::validate_motive(mech));
        errors.extend(Self::validate_ram_plate(mech));
        errors.extend(Self::validate_actuator_enhancement(mech));
        errors.extend(Self::validate_signature_systems(mech));
        errors.extend(Self::validate_harjel(mech));
        errors.extend(Self::validate_weapons(mech));
        errors.extend(Self::validate_placement(mech));
        errors
    }

    /// Pairs of items that may not share a design
    pub fn validate_exclusions(mech: &Mech<'_>) -> Vec<String> {
        let mut errors = Vec::new();
        let design = mech.design();

        if mech.has(Capability::Umu) && mech.has(Capability::JumpJet) {
            errors.push("UMUs cannot be mounted with jump jets (jump boosters are acceptable)".to_string());
        }

        if design.chassis.is_lam() && mech.has(Capability::Supercharger) {
            errors.push("LAMs may not mount a supercharger".to_string());
        }

        let mut myomers: Vec<MyomerKind> = Vec::new();
        for (_, kind) in mech.misc() {
            if let MiscKind::Myomer(myomer) = kind {
                if !myomers.contains(&myomer) {
                    myomers.push(myomer);
                }
            }
        }
        if myomers.len() > 1 {
            errors.push("Cannot mount more than one type of myomer.".to_string());
        }

        if mech.has(Capability::Masc) {
            if let Some((mount, _)) = mech.misc().find(|(_, kind)| kind.is_advanced_myomer()) {
                errors.push(format!("MASC is incompatible with {}", mount.name()));
            }
        }

        if design.cockpit.is_command_console()
            && mech.misc().any(|(_, kind)| kind == MiscKind::RemoteDroneCommandConsole)
        {
            errors.push(
                "A command console cockpit can't be combined with a remote drone command console".to_string(),
            );
        }

        if mech.has(Capability::ChameleonShield) {
            if design.has_stealth_armor() {
                errors.push("Unit mounts both a chameleon light polarization shield and stealth armor".to_string());
            }
            if mech.has(Capability::VoidSignature) {
                errors.push(
                    "Unit mounts both a void signature system and a chameleon light polarization shield"
                        .to_string(),
                );
            }
        }

        if design.cockpit.location() == Location::Head
            && mech.misc().any(|(_, kind)| kind == MiscKind::HeadTurret)
        {
            errors.push("A head turret requires a torso-mounted cockpit".to_string());
        }

        if mech.misc().any(|(_, kind)| kind == MiscKind::FullHeadEjection)
            && matches!(design.cockpit, CockpitType::TorsoMounted | CockpitType::CommandConsole)
        {
            errors.push(format!(
                "Full head ejection system is incompatible with the {}",
                design.cockpit
            ));
        }

        if mech.has(Capability::PartialWing) && mech.has(Capability::JumpBooster) {
            errors.push("Partial wings cannot be combined with any type of jump booster".to_string());
        }

        if design.has_stealth_armor() && !mech.has(Capability::Ecm) {
            errors.push("Stealth armor requires an ECM suite".to_string());
        }

        errors
    }

    /// Hand and lower arm replacements and requirements, per arm
    pub fn validate_arm_actuators(mech: &Mech<'_>) -> Vec<String> {
        let mut errors = Vec::new();
        let design = mech.design();
        if design.chassis.is_quad() {
            return errors;
        }

        for (mount, kind) in mech.misc() {
            let Some(location) = mount.location() else {
                continue;
            };
            let has_hand = design.has_system(SystemSlot::Hand, location);
            let has_lower_arm = design.has_system(SystemSlot::LowerArm, location);

            if kind.replaces_hand_actuator() && has_hand {
                errors.push(format!(
                    "{} can only be mounted in an arm with no hand actuator",
                    mount.name()
                ));
            } else if kind.replaces_lower_arm() && has_lower_arm {
                errors.push(format!(
                    "{} can only be mounted in an arm with no lower arm actuator",
                    mount.name()
                ));
            } else if kind.requires_hand_actuator() && !has_hand {
                errors.push(format!(
                    "A hand actuator is required in the arm that mounts {}",
                    mount.name()
                ));
            } else if kind.requires_lower_arm() && !has_lower_arm {
                errors.push(format!(
                    "A lower arm actuator is required in the arm that mounts {}",
                    mount.name()
                ));
            }
        }

        for &arm in design.chassis.locations() {
            let replacers = mech
                .misc()
                .filter(|(mount, kind)| mount.location() == Some(arm) && kind.replaces_hand_actuator())
                .count();
            if replacers > 1 {
                errors.push(format!(
                    "Can only mount a single item in the {} that replaces the hand actuator",
                    design.chassis.location_name(arm)
                ));
            }
        }

        errors
    }

    pub fn validate_turrets(mech: &Mech<'_>) -> Vec<String> {
        let mut errors = Vec::new();
        let design = mech.design();

        let shoulder = |location| {
            mech.misc()
                .filter(|(mount, kind)| *kind == MiscKind::ShoulderTurret && mount.location() == Some(location))
                .count()
        };
        if design.chassis.is_quad() && mech.misc().any(|(_, kind)| kind == MiscKind::ShoulderTurret) {
            errors.push("Quad mechs can't mount shoulder turrets".to_string());
        }
        if shoulder(Location::LeftTorso) > 1 || shoulder(Location::RightTorso) > 1 {
            errors.push("Max of one shoulder turret per side torso".to_string());
        }

        errors
    }

    /// Slots an item holds in each leg
    fn per_leg_slots(mech: &Mech<'_>, mount: &ResolvedMount<'_>) -> Vec<usize> {
        let design = mech.design();
        design
            .chassis
            .leg_layout()
            .locations()
            .iter()
            .map(|&leg| design.count_mount_in(mount.id, leg))
            .collect()
    }

    pub fn validate_motive(mech: &Mech<'_>) -> Vec<String> {
        let mut errors = Vec::new();
        let design = mech.design();

        for (mount, kind) in mech.misc() {
            match kind {
                MiscKind::Motive(motive) => {
                    let wheels = motive == MotiveKind::QuadVeeWheels;
                    match design.chassis {
                        ChassisKind::QuadVee(configured) => {
                            if wheels != (configured == QuadVeeMotive::Wheels) {
                                errors.push("Motive equipment does not match QuadVee motive type".to_string());
                            }
                        }
                        _ if wheels => {
                            errors.push("Wheels can only be used on QuadVees".to_string());
                        }
                        _ => {}
                    }
                    if Self::per_leg_slots(mech, mount).iter().any(|&slots| slots != 1) {
                        errors.push(format!("{} require one critical slot in each leg", mount.name()));
                    }
                }
                MiscKind::Talons => {
                    let expected = if design.is_superheavy() { 1 } else { 2 };
                    if Self::per_leg_slots(mech, mount).iter().any(|&slots| slots != expected) {
                        errors.push(format!("Talons require {} critical slots in each leg", expected));
                    }
                }
                _ => {}
            }
        }

        errors
    }

    pub fn validate_ram_plate(mech: &Mech<'_>) -> Vec<String> {
        let mut errors = Vec::new();
        let design = mech.design();

        for (mount, _) in mech.misc().filter(|(_, kind)| *kind == MiscKind::RamPlate) {
            if !design.chassis.is_quad() {
                errors.push(format!("{} can only be mounted on a quad mech", mount.name()));
            }
            if design.structure != StructureType::Reinforced {
                errors.push(format!("{} requires reinforced structure", mount.name()));
            }
            let torsos = [Location::CenterTorso, Location::LeftTorso, Location::RightTorso];
            if torsos.iter().any(|&loc| design.count_mount_in(mount.id, loc) != 1) {
                errors.push(format!(
                    "{} requires one critical slot in each torso location",
                    mount.name()
                ));
            }
        }

        errors
    }

    pub fn validate_actuator_enhancement(mech: &Mech<'_>) -> Vec<String> {
        let mut errors = Vec::new();
        let design = mech.design();
        if !mech.has(Capability::ActuatorEnhancement) {
            return errors;
        }

        if mech.has(Capability::Masc) {
            errors.push("AES is incompatible with MASC".to_string());
        }
        if mech.has(Capability::TargetingComputer) {
            errors.push("AES is incompatible with targeting computers".to_string());
        }
        if mech.has(Capability::AdvancedMyomer) {
            errors.push("AES is incompatible with advanced myomers".to_string());
        }

        let count_in = |location| {
            mech.mounts()
                .iter()
                .filter(|mount| mount.location() == Some(location) && mount.has(Capability::ActuatorEnhancement))
                .count()
        };
        let locations = design.chassis.locations();
        if locations.iter().any(|&loc| count_in(loc) > 1) {
            errors.push("Only one AES can be mounted in a single location".to_string());
        }
        if locations
            .iter()
            .any(|&loc| count_in(loc) > 0 && (loc == Location::Head || design.chassis.is_torso(loc)))
        {
            errors.push("AES can only be mounted in an arm or leg location".to_string());
        }

        let legs = design.chassis.leg_layout().locations();
        let legs_with_aes = legs.iter().filter(|&&leg| count_in(leg) > 0).count();
        if legs_with_aes > 0 && legs_with_aes < legs.len() {
            errors.push("If an AES is mounted in a leg, all legs must mount one".to_string());
        }

        errors
    }

    pub fn validate_signature_systems(mech: &Mech<'_>) -> Vec<String> {
        let mut errors = Vec::new();
        let stealth = mech.design().has_stealth_armor();
        let tc = mech.has(Capability::TargetingComputer);
        let c3 = mech.has_c3();
        let void_sig = mech.has(Capability::VoidSignature);

        if mech.has(Capability::NullSignature) {
            let conflicts = [
                (stealth, "stealth armor"),
                (tc, "a targeting computer"),
                (void_sig, "a void signature system"),
                (c3, "a C3 system"),
            ];
            for (_, what) in conflicts.iter().filter(|(present, _)| *present) {
                errors.push(format!("Unit mounts both a null signature system and {}", what));
            }
        }

        if void_sig {
            let conflicts = [
                (stealth, "stealth armor"),
                (tc, "a targeting computer"),
                (c3, "a C3 system"),
            ];
            for (_, what) in conflicts.iter().filter(|(present, _)| *present) {
                errors.push(format!("Unit mounts both a void signature system and {}", what));
            }
        }

        errors
    }

    pub fn validate_harjel(mech: &Mech<'_>) -> Vec<String> {
        let mut errors = Vec::new();
        let design = mech.design();

        let grade = |wanted| mech.misc().any(|(_, kind)| kind == MiscKind::HarJel(wanted));
        let has_ii = grade(HarJelGrade::II);
        let has_iii = grade(HarJelGrade::III);
        if has_ii && has_iii {
            errors.push("Can't mix HarJel II and HarJel III".to_string());
        }
        if !has_ii && !has_iii {
            return errors;
        }

        if design.flags.industrial {
            errors.push("Cannot mount a HarJel repair system on an IndustrialMek".to_string());
        }

        for &location in design.chassis.locations() {
            let count = mech
                .misc()
                .filter(|(mount, kind)| kind.is_harjel_repair() && mount.location() == Some(location))
                .count();
            if count > 1 {
                errors.push(format!(
                    "Cannot mount multiple HarJel repair systems in the {}",
                    design.chassis.location_name(location)
                ));
            }
            if count > 0 && !design.armor_type_at(location).supports_harjel() {
                errors.push(format!(
                    "Cannot mount a HarJel repair system in the {} with {} armor",
                    design.chassis.location_name(location),
                    design.armor_type_at(location)
                ));
            }
        }

        errors
    }

    pub fn validate_weapons(mech: &Mech<'_>) -> Vec<String> {
        let mut errors = Vec::new();
        let design = mech.design();

        for (mount, weapon) in mech.weapons() {
            if weapon.is_heavy_gauss() && mount.mount.turret {
                errors.push("Heavy gauss rifles cannot be mounted in a turret".to_string());
            }
            if weapon == WeaponKind::Taser && !design.engine.is_fusion() {
                errors.push(format!("{} needs a fusion engine", mount.name()));
            }
        }

        errors
    }

    /// Every located item, and the second half of split items, in a legal place
    pub fn validate_placement(mech: &Mech<'_>) -> Vec<String> {
        let mut errors = Vec::new();
        let design = mech.design();

        for mount in mech.mounts() {
            let locations = mount.location().into_iter().chain(mount.mount.second_location);
            for location in locations {
                if let Err(err) = check_location(design, mount.kind, location) {
                    let message = err.to_string();
                    if !errors.contains(&message) {
                        errors.push(message);
                    }
                }
            }
        }

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::registry::EquipmentCatalog;
    use crate::unit::builder::DesignBuilder;
    use crate::unit::design::UnitDesign;

    fn build(builder: DesignBuilder) -> UnitDesign {
        builder.build(&EquipmentCatalog::standard()).unwrap()
    }

    fn run(design: &UnitDesign, f: fn(&Mech<'_>) -> Vec<String>) -> Vec<String> {
        let catalog = EquipmentCatalog::standard();
        f(&Mech::resolve(design, &catalog).unwrap())
    }

    fn biped() -> DesignBuilder {
        DesignBuilder::new("Matrix", 50.0, ChassisKind::Biped)
    }

    #[test]
    fn test_null_signature_with_targeting_computer() {
        let base = biped()
            .mount("ISLargeLaser", Location::RightArm)
            .spread("ISNullSignatureSystem", &[(Location::LeftTorso, 4), (Location::RightTorso, 3)]);
        let without = build(base.clone());
        assert!(run(&without, CompatibilityValidator::validate_signature_systems).is_empty());

        let with = build(base.mount("ISTargeting Computer", Location::CenterTorso));
        let errors = run(&with, CompatibilityValidator::validate_signature_systems);
        assert_eq!(
            errors,
            vec!["Unit mounts both a null signature system and a targeting computer".to_string()]
        );
    }

    #[test]
    fn test_umu_with_jump_jets() {
        let design = build(
            biped()
                .mount("UMU", Location::LeftLeg)
                .mount("JumpJet", Location::RightLeg),
        );
        let errors = run(&design, CompatibilityValidator::validate_exclusions);
        assert!(errors[0].starts_with("UMUs cannot be mounted with jump jets"));
    }

    #[test]
    fn test_myomer_types_and_masc() {
        let design = build(
            biped()
                .mount("ISMASC", Location::LeftTorso)
                .spread("TSM", &[(Location::LeftTorso, 3), (Location::RightTorso, 3)])
                .spread("SCM", &[(Location::LeftLeg, 2), (Location::RightLeg, 2), (Location::RightTorso, 2)]),
        );
        let errors = run(&design, CompatibilityValidator::validate_exclusions);
        assert!(errors.contains(&"Cannot mount more than one type of myomer.".to_string()));
        assert!(errors.contains(&"MASC is incompatible with Triple Strength Myomer".to_string()));
    }

    #[test]
    fn test_hatchet_needs_hand() {
        let with_hand = build(biped().mount("Hatchet", Location::RightArm));
        assert!(run(&with_hand, CompatibilityValidator::validate_arm_actuators).is_empty());

        let without_hand = build(
            biped()
                .remove_system(Location::RightArm, SystemSlot::Hand)
                .mount("Hatchet", Location::RightArm),
        );
        let errors = run(&without_hand, CompatibilityValidator::validate_arm_actuators);
        assert_eq!(
            errors,
            vec!["A hand actuator is required in the arm that mounts Hatchet".to_string()]
        );
    }

    #[test]
    fn test_one_hand_replacer_per_arm() {
        let design = build(
            biped()
                .remove_system(Location::LeftArm, SystemSlot::Hand)
                .mount("ISSalvageArm", Location::LeftArm)
                .mount("ISSalvageArm", Location::LeftArm),
        );
        let errors = run(&design, CompatibilityValidator::validate_arm_actuators);
        assert_eq!(
            errors,
            vec!["Can only mount a single item in the Left Arm that replaces the hand actuator".to_string()]
        );
    }

    #[test]
    fn test_claws_with_hand_present() {
        let design = build(biped().mount("ISClaw", Location::LeftArm));
        let errors = run(&design, CompatibilityValidator::validate_arm_actuators);
        assert_eq!(
            errors,
            vec!["Claws can only be mounted in an arm with no hand actuator".to_string()]
        );
    }

    #[test]
    fn test_aes_must_be_in_every_leg() {
        let one_leg = build(biped().mount("ISActuatorEnhancementSystem", Location::LeftLeg));
        let errors = run(&one_leg, CompatibilityValidator::validate_actuator_enhancement);
        assert_eq!(
            errors,
            vec!["If an AES is mounted in a leg, all legs must mount one".to_string()]
        );

        let both = build(
            biped()
                .mount("ISActuatorEnhancementSystem", Location::LeftLeg)
                .mount("ISActuatorEnhancementSystem", Location::RightLeg),
        );
        assert!(run(&both, CompatibilityValidator::validate_actuator_enhancement).is_empty());
    }

    #[test]
    fn test_ram_plate_rules() {
        let design = build(biped().spread(
            "RamPlate",
            &[(Location::CenterTorso, 1), (Location::LeftTorso, 1), (Location::RightTorso, 1)],
        ));
        let errors = run(&design, CompatibilityValidator::validate_ram_plate);
        assert_eq!(
            errors,
            vec![
                "Ram Plate can only be mounted on a quad mech".to_string(),
                "Ram Plate requires reinforced structure".to_string(),
            ]
        );
    }

    #[test]
    fn test_taser_needs_fusion() {
        use crate::unit::components::{Engine, EngineType};
        let design = build(
            biped()
                .engine(Engine::new(EngineType::Ice, 200))
                .mount("ISMekTaser", Location::RightTorso),
        );
        let errors = run(&design, CompatibilityValidator::validate_weapons);
        assert_eq!(errors, vec!["Mek Taser needs a fusion engine".to_string()]);
    }

    #[test]
    fn test_placement_reported_once_per_message() {
        let design = build(biped().mount("JumpJet", Location::LeftArm).mount("JumpJet", Location::LeftArm));
        let errors = run(&design, CompatibilityValidator::validate_placement);
        assert_eq!(errors, vec!["Jump Jet must be mounted in a torso or leg".to_string()]);
    }
}
