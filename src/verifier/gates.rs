//! Rules gated on the chassis class: superheavy, industrial, primitive, LAM
//! and omni

use crate::catalog::equipment::{Capability, JumpJetKind, MiscKind, MyomerKind, PhysicalWeaponKind};
use crate::unit::components::{ArmorType, EngineType, GyroType, StructureType};
use crate::unit::design::{CriticalSlot, SystemSlot};
use crate::unit::location::Location;
use crate::unit::mech::{JumpType, Mech};

pub struct ChassisGateValidator;

impl ChassisGateValidator {
    pub fn validate(mech: &Mech<'_>) -> Vec<String> {
        let mut errors = Vec::new();
        errors.extend(Self::validate_superheavy(mech));
        errors.extend(Self::validate_industrial(mech));
        errors.extend(Self::validate_primitive(mech));
        errors.extend(Self::validate_land_air(mech));
        errors.extend(Self::validate_omni_heat_sinks(mech));
        errors.extend(Self::validate_structural_slots(mech));
        errors
    }

    fn forbidden_on_superheavy(kind: MiscKind) -> bool {
        matches!(
            kind,
            MiscKind::Myomer(_)
                | MiscKind::Masc(_)
                | MiscKind::JumpJet(_)
                | MiscKind::JumpBooster
                | MiscKind::Umu
                | MiscKind::ActuatorEnhancement
                | MiscKind::ModularArmor
                | MiscKind::PartialWing
        )
    }

    fn has_armored_components(mech: &Mech<'_>) -> bool {
        let armored_slot = mech.design().locations.iter().any(|data| {
            data.slots
                .iter()
                .any(|slot| matches!(slot, CriticalSlot::System { armored: true, .. }))
        });
        armored_slot || mech.mounts().iter().any(|mount| mount.mount.armored)
    }

    pub fn validate_superheavy(mech: &Mech<'_>) -> Vec<String> {
        let mut errors = Vec::new();
        let design = mech.design();

        if !design.is_superheavy() {
            if design.gyro == GyroType::Superheavy {
                errors.push("Only superheavy Mechs can use a superheavy gyro".to_string());
            }
            return errors;
        }

        for (mount, kind) in mech.misc() {
            if Self::forbidden_on_superheavy(kind) {
                errors.push(format!("Superheavy may not mount {}", mount.name()));
            }
        }
        if design.gyro != GyroType::Superheavy {
            errors.push("Superheavy Mechs must use a superheavy gyro".to_string());
        }
        if Self::has_armored_components(mech) {
            errors.push("Superheavy Mechs cannot have armored components".to_string());
        }
        if design.chassis.is_quadvee() {
            errors.push("QuadVees cannot be constructed as superheavies".to_string());
        }

        errors
    }

    pub fn validate_industrial(mech: &Mech<'_>) -> Vec<String> {
        let mut errors = Vec::new();
        let design = mech.design();

        if !design.flags.industrial {
            for (mount, kind) in mech.misc() {
                match kind {
                    MiscKind::Myomer(MyomerKind::IndustrialTripleStrength)
                    | MiscKind::EnvironmentalSealing
                    | MiscKind::FuelTank => {
                        errors.push(format!("Non-industrial mech can't mount {}", mount.name()));
                    }
                    MiscKind::LightFluidSuction => {
                        errors.push("BattleMechs can't mount a light fluid suction system".to_string());
                    }
                    _ => {}
                }
            }
            return errors;
        }

        let fire_control = mech.has_advanced_fire_control();
        for (mount, kind) in mech.misc() {
            let banned_myomer = matches!(
                kind,
                MiscKind::Myomer(MyomerKind::TripleStrength)
                    | MiscKind::Myomer(MyomerKind::SuperCooled)
            );
            if banned_myomer || kind.is_masc() {
                errors.push(format!("Industrial mech can't mount {}", mount.name()));
            }
            if !fire_control && kind.needs_advanced_fire_control() {
                errors.push(format!(
                    "Industrial mech without advanced fire control can't mount {}",
                    mount.name()
                ));
            }
        }
        if !fire_control && mech.has_c3() {
            errors.push("Industrial mech without advanced fire control can't use a C3 computer".to_string());
        }

        let legal_jump = matches!(
            mech.jump_type(),
            JumpType::None
                | JumpType::Booster
                | JumpType::Jets(JumpJetKind::Standard)
                | JumpType::Jets(JumpJetKind::Prototype)
        );
        if !legal_jump {
            errors.push(
                "Industrial mechs can only mount standard jump jets or mechanical jump boosters".to_string(),
            );
        }

        if !matches!(design.gyro, GyroType::Standard | GyroType::Superheavy) {
            errors.push("Industrial mechs can only mount standard gyros".to_string());
        }

        if mech.has_double_heat_sinks() {
            errors.push("Industrial mechs cannot mount double heat sinks".to_string());
        }

        match design.engine.engine_type {
            EngineType::Fusion => {}
            EngineType::Ice | EngineType::FuelCell | EngineType::Fission => {
                if design.is_superheavy() {
                    errors.push(
                        "Superheavy industrial mechs can only use standard or large fusion engines"
                            .to_string(),
                    );
                }
            }
            _ => errors.push(
                "Industrial mechs can only use standard and large fusion engines, ICEs, fuel cells or fission"
                    .to_string(),
            ),
        }

        errors
    }

    pub fn validate_primitive(mech: &Mech<'_>) -> Vec<String> {
        let mut errors = Vec::new();
        let design = mech.design();
        if !design.flags.primitive {
            return errors;
        }

        if design.flags.omni {
            errors.push("Primitive mechs can't be omnis".to_string());
        }
        if !matches!(design.structure, StructureType::Standard | StructureType::Industrial) {
            errors.push("Primitive mechs can't mount advanced inner structure".to_string());
        }
        let advanced_engine = matches!(
            design.engine.engine_type,
            EngineType::Xl | EngineType::Light | EngineType::Compact | EngineType::Xxl
        );
        if advanced_engine || design.engine.large {
            errors.push("Primitive mechs can't mount XL, Light, Compact, XXL or Large engines".to_string());
        }
        if mech.has(Capability::AdvancedMyomer) {
            errors.push("Primitive mechs can't mount advanced myomers".to_string());
        }

        if design.flags.industrial {
            if design.armor_type != ArmorType::Commercial {
                errors.push("Primitive IndustrialMechs must mount commercial armor".to_string());
            }
        } else if !matches!(design.armor_type, ArmorType::Primitive | ArmorType::Industrial) {
            errors.push("Primitive BattleMechs must mount primitive armor".to_string());
        }

        errors
    }

    fn forbidden_on_land_air(kind: MiscKind) -> bool {
        matches!(
            kind,
            MiscKind::ModularArmor
                | MiscKind::JumpBooster
                | MiscKind::PartialWing
                | MiscKind::Dumper
                | MiscKind::BridgeLayer(_)
                | MiscKind::Physical(PhysicalWeaponKind::Backhoe)
                | MiscKind::Physical(PhysicalWeaponKind::Combine)
        )
    }

    pub fn validate_land_air(mech: &Mech<'_>) -> Vec<String> {
        let mut errors = Vec::new();
        let design = mech.design();
        if !design.chassis.is_lam() {
            return errors;
        }
        let clan = design.is_clan();

        for (mount, kind) in mech.misc() {
            if Self::forbidden_on_land_air(kind) {
                errors.push(format!("LAMs may not mount {}", mount.name()));
            }
        }

        if design.flags.omni {
            errors.push("LAMs may not be constructed as omnis".to_string());
        }
        if design.tonnage > 55.0 {
            errors.push("LAMs cannot be larger than 55 tons".to_string());
        }
        if design.structure.slots(clan) > 0 {
            errors.push(format!("LAMs may not use {} structure", design.structure));
        }

        let mut armor_types: Vec<ArmorType> = Vec::new();
        for &location in design.chassis.locations() {
            let armor = design.armor_type_at(location);
            if !armor_types.contains(&armor) {
                armor_types.push(armor);
            }
        }
        for armor in armor_types {
            if armor == ArmorType::Hardened {
                errors.push("LAMs cannot use hardened armor".to_string());
            } else if armor.slots(clan) > 0 {
                errors.push(format!("LAMs cannot use {} armor", armor));
            }
        }

        if mech.count_working(Capability::BombBay) > 20 {
            errors.push("A LAM has a maximum of 20 bomb bays".to_string());
        }

        if design.cockpit.location() == Location::CenterTorso {
            errors.push("LAMs may not use torso-mounted cockpits".to_string());
        }
        if design.count_system(SystemSlot::Cockpit, Location::Head) > 1 {
            errors.push("LAMs may not use cockpits that require multiple critical slots".to_string());
        }
        if design.cockpit.is_primitive() {
            errors.push("LAMs may not use primitive cockpits".to_string());
        }
        if !matches!(design.gyro, GyroType::Standard | GyroType::Compact | GyroType::HeavyDuty) {
            errors.push(format!("LAMs may not use a {}", design.gyro));
        }
        if !matches!(design.engine.engine_type, EngineType::Fusion | EngineType::Compact) {
            errors.push("LAMs may only use standard or compact fusion engines".to_string());
        }

        let mut spread_names: Vec<&str> = Vec::new();
        for mount in mech.mounts() {
            if mount.mount.is_split() {
                errors.push(format!("Cannot split {} between locations", mount.name()));
            } else if mount.weapon().map_or(false, |weapon| weapon.is_artillery()) {
                errors.push("LAMs cannot mount artillery weapons".to_string());
            } else if mount.weapon().map_or(false, |weapon| weapon.is_heavy_gauss()) {
                errors.push("LAMs cannot mount heavy gauss rifles".to_string());
            } else if mount.misc_is(MiscKind::is_physical_weapon) {
                errors.push("LAMs cannot be constructed with physical weapons".to_string());
            } else if mount.kind.spreadable
                && design.locations_of(mount.id).len() > 1
                && !spread_names.contains(&mount.name())
            {
                spread_names.push(mount.name());
                errors.push(format!("{} must be allocated to a single location", mount.name()));
            }
        }

        let full_arms = [Location::LeftArm, Location::RightArm].iter().all(|&arm| {
            design.has_system(SystemSlot::UpperArm, arm) && design.has_system(SystemSlot::LowerArm, arm)
        });
        if !full_arms {
            errors.push("LAMs require upper and lower arm actuators in both arms".to_string());
        }

        errors
    }

    /// Heat sinks beyond an omni's base chassis allowance must take slots
    pub fn validate_omni_heat_sinks(mech: &Mech<'_>) -> Vec<String> {
        let mut errors = Vec::new();
        let design = mech.design();
        if !design.flags.omni {
            return errors;
        }

        let total = mech.heat_sink_count();
        let allocated = mech
            .misc()
            .filter(|(mount, kind)| kind.is_heat_sink() && mount.location().is_some())
            .count();
        let base = design.base_chassis_heat_sinks.unwrap_or_else(|| {
            design
                .engine
                .integral_heat_sink_capacity(mech.has_compact_heat_sinks())
        }) as usize;
        let required = total.saturating_sub(base);

        if allocated < required {
            errors.push(format!(
                "Only {} of the required {} heat sinks are allocated to critical slots",
                allocated, required
            ));
        }

        errors
    }

    /// Slots filled by structure and armor fillers against the type's demand
    pub fn validate_structural_slots(mech: &Mech<'_>) -> Vec<String> {
        let mut errors = Vec::new();
        let design = mech.design();
        let clan = design.is_clan();

        let mut structure_slots = 0;
        let mut armor_slots = 0;
        for mount in mech.mounts() {
            match mount.misc() {
                Some(MiscKind::StructureSlot(_)) => {
                    structure_slots += design.count_mount_everywhere(mount.id);
                }
                Some(MiscKind::ArmorSlot(_)) => {
                    armor_slots += design.count_mount_everywhere(mount.id);
                }
                _ => {}
            }
        }

        if structure_slots != design.structure.slots(clan) {
            errors.push(
                "The internal structure of this mech is not using the correct number of critical slots"
                    .to_string(),
            );
        }
        // Patchwork armor demand depends on every location's type
        if !design.is_patchwork() && armor_slots != design.armor_type.slots(clan) {
            errors.push("The armor of this mech is not using the correct number of critical slots".to_string());
        }

        errors
    }
}
