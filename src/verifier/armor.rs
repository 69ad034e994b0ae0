//! Armor allocation against structure and purchased tonnage

use crate::core::config::VerifierConfig;
use crate::unit::design::UnitDesign;
use crate::unit::location::Location;

pub struct ArmorValidator;

impl ArmorValidator {
    /// Per-location bounds and the total bought by the armor tonnage
    ///
    /// Reads only the design, so it can run before equipment is resolved.
    pub fn validate(design: &UnitDesign, config: &VerifierConfig) -> Vec<String> {
        let mut errors = Vec::new();
        errors.extend(Self::validate_locations(design, config));
        errors.extend(Self::validate_total(design));
        errors
    }

    pub fn validate_locations(design: &UnitDesign, config: &VerifierConfig) -> Vec<String> {
        let mut errors = Vec::new();

        for data in &design.locations {
            let name = design.chassis.location_name(data.location);
            let points = data.armor as u32 + data.rear_armor as u32;

            if data.location == Location::Head {
                let cap = if design.is_superheavy() {
                    config.superheavy_head_armor_cap
                } else {
                    config.head_armor_cap
                } as u32;
                if points > cap {
                    errors.push(format!("{} armor ({}) is greater than {}!", name, points, cap));
                }
                continue;
            }

            let limit = 2 * design.internal_points(data.location) as u32;
            if points > limit {
                errors.push(format!(
                    "{} armor ({}) is greater than twice its internal structure ({})!",
                    name, points, limit
                ));
            }
        }

        errors
    }

    /// Patchwork armor yields different points per location, so it is exempt
    pub fn validate_total(design: &UnitDesign) -> Vec<String> {
        let mut errors = Vec::new();
        if design.is_patchwork() {
            return errors;
        }

        let per_ton = design.armor_type.points_per_ton(design.is_clan());
        let available = (design.armor_tonnage * per_ton).floor() as u32;
        let placed = design.total_armor_points();
        if placed > available {
            errors.push(format!(
                "Too many armor points allocated: {} placed, but {} t of {} armor provides {}",
                placed, design.armor_tonnage, design.armor_type, available
            ));
        }

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::registry::EquipmentCatalog;
    use crate::unit::builder::DesignBuilder;
    use crate::unit::chassis::ChassisKind;
    use crate::unit::components::ArmorType;

    fn armored(head: u16, left_arm: u16, tons: f64) -> UnitDesign {
        DesignBuilder::new("Armor Test", 50.0, ChassisKind::Biped)
            .armor(ArmorType::Standard, tons)
            .armor_at(Location::Head, head, 0)
            .armor_at(Location::LeftArm, left_arm, 0)
            .build(&EquipmentCatalog::standard())
            .unwrap()
    }

    #[test]
    fn test_head_cap() {
        let config = VerifierConfig::default();
        assert!(ArmorValidator::validate(&armored(9, 10, 2.0), &config).is_empty());
        let errors = ArmorValidator::validate(&armored(10, 10, 2.0), &config);
        assert_eq!(errors, vec!["Head armor (10) is greater than 9!".to_string()]);
    }

    #[test]
    fn test_twice_internal_structure() {
        let config = VerifierConfig::default();
        // A 50 t arm has 8 internal points
        assert!(ArmorValidator::validate_locations(&armored(0, 16, 2.0), &config).is_empty());
        let errors = ArmorValidator::validate_locations(&armored(0, 17, 2.0), &config);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].starts_with("Left Arm armor (17)"));
    }

    #[test]
    fn test_quad_front_legs_use_leg_structure() {
        let config = VerifierConfig::default();
        // A 50 t leg has 12 internal points, front or rear
        let quad = |front: u16| {
            DesignBuilder::new("Quad Armor", 50.0, ChassisKind::Quad)
                .armor(ArmorType::Standard, 4.0)
                .armor_at(Location::LeftArm, front, 0)
                .armor_at(Location::LeftLeg, 24, 0)
                .build(&EquipmentCatalog::standard())
                .unwrap()
        };
        let design = quad(24);
        assert_eq!(design.internal_points(Location::LeftArm), 12);
        assert!(ArmorValidator::validate_locations(&design, &config).is_empty());

        let errors = ArmorValidator::validate_locations(&quad(25), &config);
        assert_eq!(
            errors,
            vec!["Front Left Leg armor (25) is greater than twice its internal structure (24)!".to_string()]
        );
    }

    #[test]
    fn test_tripod_center_leg_uses_leg_structure() {
        let design = DesignBuilder::new("Tripod Armor", 50.0, ChassisKind::Tripod)
            .armor(ArmorType::Standard, 2.0)
            .armor_at(Location::CenterLeg, 24, 0)
            .build(&EquipmentCatalog::standard())
            .unwrap();
        assert_eq!(design.internal_points(Location::CenterLeg), 12);
        assert_eq!(design.internal_points(Location::LeftArm), 8);
        assert!(ArmorValidator::validate_locations(&design, &VerifierConfig::default()).is_empty());
    }

    #[test]
    fn test_total_bounded_by_tonnage() {
        // 25 points: two tons buy 32, a ton and a half only 24
        let design = armored(9, 16, 2.0);
        assert!(ArmorValidator::validate_total(&design).is_empty());
        let design = armored(9, 16, 1.5);
        let errors = ArmorValidator::validate_total(&design);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].starts_with("Too many armor points allocated"));
    }

    #[test]
    fn test_patchwork_exempt_from_total() {
        let design = DesignBuilder::new("Patchwork", 50.0, ChassisKind::Biped)
            .armor(ArmorType::Standard, 0.5)
            .armor_at(Location::LeftArm, 16, 0)
            .armor_type_at(Location::LeftArm, ArmorType::FerroFibrous)
            .build(&EquipmentCatalog::standard())
            .unwrap();
        assert!(design.is_patchwork());
        assert!(ArmorValidator::validate_total(&design).is_empty());
    }
}
