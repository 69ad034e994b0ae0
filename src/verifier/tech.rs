//! Tech level and era checks against the design's tech setting
//!
//! Which comparisons apply depends on the item class: weapons and misc
//! equipment are checked for era, rules level and tech base; ammunition only
//! for rules level and tech base; structure and armor fillers not at all
//! (their types are checked as components); the engine, gyro, cockpit,
//! structure and armor types for era and rules level.

use crate::catalog::tech::{RulesLevel, TechInfo};
use crate::unit::components::ArmorType;
use crate::unit::mech::Mech;

pub struct TechValidator;

impl TechValidator {
    /// Construction components with the name they are reported under
    fn components(mech: &Mech<'_>) -> Vec<(String, TechInfo)> {
        let design = mech.design();
        let mut components = vec![
            (format!("{} engine", design.engine.engine_type), design.engine.tech()),
            (design.gyro.to_string(), design.gyro.tech()),
            (design.cockpit.to_string(), design.cockpit.tech()),
            (
                format!("{} structure", design.structure),
                design.structure.tech(),
            ),
        ];
        let mut armor_types: Vec<ArmorType> = Vec::new();
        for &location in design.chassis.locations() {
            let armor = design.armor_type_at(location);
            if !armor_types.contains(&armor) {
                armor_types.push(armor);
            }
        }
        components.extend(
            armor_types
                .into_iter()
                .map(|armor| (format!("{} armor", armor), armor.tech())),
        );
        components
    }

    fn level_message(name: &str, level: RulesLevel, allowed: RulesLevel) -> String {
        format!(
            "{} is {} rules, above the design's {} rules level",
            name, level, allowed
        )
    }

    pub fn validate_rules_level(mech: &Mech<'_>) -> Vec<String> {
        let mut errors = Vec::new();
        let setting = mech.design().tech;

        for mount in mech.mounts() {
            if mount.kind.is_structural() {
                continue;
            }
            let tech = mount.kind.tech;
            let allowed = if mount.kind.is_ammo() {
                setting.ammo_level()
            } else {
                setting.rules_level
            };
            if tech.rules_level > allowed {
                errors.push(Self::level_message(mount.name(), tech.rules_level, allowed));
            }
            if !setting.base.permits(tech.base) {
                errors.push(format!(
                    "{} is {} technology, not available to {} designs",
                    mount.name(),
                    tech.base,
                    setting.base
                ));
            }
        }

        for (name, tech) in Self::components(mech) {
            if tech.rules_level > setting.rules_level {
                errors.push(Self::level_message(&name, tech.rules_level, setting.rules_level));
            }
        }

        errors
    }

    pub fn validate_intro_year(mech: &Mech<'_>) -> Vec<String> {
        let mut errors = Vec::new();
        let year = mech.design().tech.year;

        let items = mech
            .mounts()
            .iter()
            .filter(|mount| !mount.kind.is_structural() && !mount.kind.is_ammo())
            .map(|mount| (mount.name().to_string(), mount.kind.tech));
        for (name, tech) in items.chain(Self::components(mech)) {
            if tech.intro_year > year {
                errors.push(format!(
                    "{} is not available until {} (design year {})",
                    name, tech.intro_year, year
                ));
            }
        }

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::registry::EquipmentCatalog;
    use crate::catalog::tech::{DesignTechBase, TechSetting};
    use crate::unit::builder::DesignBuilder;
    use crate::unit::chassis::ChassisKind;
    use crate::unit::components::{Engine, EngineType};
    use crate::unit::design::UnitDesign;
    use crate::unit::location::Location;

    fn run(design: &UnitDesign, f: fn(&Mech<'_>) -> Vec<String>) -> Vec<String> {
        let catalog = EquipmentCatalog::standard();
        f(&Mech::resolve(design, &catalog).unwrap())
    }

    fn setting(year: u16, level: RulesLevel) -> TechSetting {
        TechSetting::new(year, DesignTechBase::InnerSphere, level)
    }

    #[test]
    fn test_clan_weapon_on_inner_sphere_design() {
        let design = DesignBuilder::new("Mixed Bag", 50.0, ChassisKind::Biped)
            .tech(setting(3060, RulesLevel::Standard))
            .mount("CLERMediumLaser", Location::RightArm)
            .build(&EquipmentCatalog::standard())
            .unwrap();
        let errors = run(&design, TechValidator::validate_rules_level);
        assert_eq!(
            errors,
            vec!["ER Medium Laser is Clan technology, not available to Inner Sphere designs".to_string()]
        );
    }

    #[test]
    fn test_ammo_uses_its_own_level() {
        let mut tech = setting(3060, RulesLevel::Standard);
        let build = |tech| {
            DesignBuilder::new("Artillery", 70.0, ChassisKind::Biped)
                .tech(tech)
                .mount("ISArrowIV Ammo", Location::LeftTorso)
                .build(&EquipmentCatalog::standard())
                .unwrap()
        };
        assert_eq!(run(&build(tech), TechValidator::validate_rules_level).len(), 1);
        tech.ammo_rules_level = Some(RulesLevel::Advanced);
        assert!(run(&build(tech), TechValidator::validate_rules_level).is_empty());
    }

    #[test]
    fn test_components_checked_for_era() {
        let design = DesignBuilder::new("Early", 50.0, ChassisKind::Biped)
            .tech(setting(2500, RulesLevel::Standard))
            .engine(Engine::new(EngineType::Xl, 250))
            .build(&EquipmentCatalog::standard())
            .unwrap();
        let errors = run(&design, TechValidator::validate_intro_year);
        assert_eq!(
            errors,
            vec!["XL Fusion engine is not available until 2579 (design year 2500)".to_string()]
        );
    }

    #[test]
    fn test_ammo_skips_era() {
        let design = DesignBuilder::new("Early", 50.0, ChassisKind::Biped)
            .tech(setting(2400, RulesLevel::Experimental))
            .mount("ISGauss Ammo", Location::LeftTorso)
            .build(&EquipmentCatalog::standard())
            .unwrap();
        assert!(run(&design, TechValidator::validate_intro_year).is_empty());
    }
}
