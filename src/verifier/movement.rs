//! Jump movement against ground movement, compared without gravity

use crate::cache::CachedUnitState;
use crate::catalog::equipment::Capability;
use crate::unit::mech::{JumpType, Mech};

/// Minimum jump MP a LAM needs to take off
const LAM_MIN_JUMP_MP: u32 = 3;

pub struct MovementValidator;

impl MovementValidator {
    pub fn validate(mech: &Mech<'_>, cache: &CachedUnitState<'_, Mech<'_>>) -> Vec<String> {
        let mut errors = Vec::new();

        let jump = cache.jump_mp_ignoring_gravity();
        let boosted = mech.has(Capability::JumpBooster);
        let winged = cache.has_working(Capability::PartialWing);
        let improved = matches!(mech.jump_type(), JumpType::Jets(kind) if kind.is_improved());

        if jump > cache.run_mp_ignoring_gravity() && !boosted && !winged {
            errors.push(format!(
                "Jump MP ({}) exceeds run MP ({})",
                jump,
                cache.run_mp_ignoring_gravity()
            ));
        }

        if jump > cache.walk_mp_ignoring_gravity() && !improved && !boosted && !winged {
            errors.push(format!(
                "Jump MP ({}) exceeds walk MP ({}) without improved jump jets",
                jump,
                cache.walk_mp_ignoring_gravity()
            ));
        }

        if mech.design().chassis.is_lam() && jump < LAM_MIN_JUMP_MP {
            errors.push(format!("LAMs must have at least {} jump MP", LAM_MIN_JUMP_MP));
        }

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::registry::EquipmentCatalog;
    use crate::unit::builder::DesignBuilder;
    use crate::unit::chassis::{ChassisKind, LamKind};
    use crate::unit::components::Engine;
    use crate::unit::design::UnitDesign;
    use crate::unit::location::Location;

    fn run(design: &UnitDesign) -> Vec<String> {
        let catalog = EquipmentCatalog::standard();
        let mech = Mech::resolve(design, &catalog).unwrap();
        let cache = CachedUnitState::new(&mech);
        MovementValidator::validate(&mech, &cache)
    }

    fn jumper(jets: &str, count: usize) -> DesignBuilder {
        // 50 t with a 200 engine walks 4 and runs 6
        let mut builder = DesignBuilder::new("Jumper", 50.0, ChassisKind::Biped).engine(Engine::fusion(200));
        let torsos = [Location::LeftTorso, Location::RightTorso];
        for index in 0..count {
            builder = builder.mount(jets, torsos[index % torsos.len()]);
        }
        builder
    }

    #[test]
    fn test_jump_equal_to_walk_passes() {
        let design = jumper("JumpJet", 4).build(&EquipmentCatalog::standard()).unwrap();
        assert!(run(&design).is_empty());
    }

    #[test]
    fn test_jump_above_walk_needs_improved_jets() {
        let design = jumper("JumpJet", 5).build(&EquipmentCatalog::standard()).unwrap();
        assert_eq!(
            run(&design),
            vec!["Jump MP (5) exceeds walk MP (4) without improved jump jets".to_string()]
        );

        let design = jumper("ImprovedJump Jet", 5).build(&EquipmentCatalog::standard()).unwrap();
        assert!(run(&design).is_empty());
    }

    #[test]
    fn test_jump_above_run() {
        let design = jumper("ImprovedJump Jet", 7).build(&EquipmentCatalog::standard()).unwrap();
        assert_eq!(run(&design), vec!["Jump MP (7) exceeds run MP (6)".to_string()]);
    }

    #[test]
    fn test_lam_minimum_jump() {
        let design = DesignBuilder::new("Stinger LAM", 30.0, ChassisKind::LandAir(LamKind::Standard))
            .mount("JumpJet", Location::LeftLeg)
            .mount("JumpJet", Location::RightLeg)
            .build(&EquipmentCatalog::standard())
            .unwrap();
        assert_eq!(run(&design), vec!["LAMs must have at least 3 jump MP".to_string()]);
    }
}
