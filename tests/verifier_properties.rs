//! Determinism properties of the verifier over generated designs

mod common;

use proptest::prelude::*;

use common::verify;
use mech_verifier::catalog::EquipmentCatalog;
use mech_verifier::unit::{ArmorType, ChassisKind, DesignBuilder, Engine, Location, UnitDesign};

const WEAPONS: [&str; 5] = [
    "ISSmallLaser",
    "ISMediumLaser",
    "ISLargeLaser",
    "ISPPC",
    "ISMachineGun",
];

const CHASSIS: [ChassisKind; 3] = [ChassisKind::Biped, ChassisKind::Quad, ChassisKind::Tripod];

/// Designs that build cleanly but are legal or illegal in varied ways
fn arb_design() -> impl Strategy<Value = UnitDesign> {
    (
        4u16..=20,
        0usize..CHASSIS.len(),
        prop::collection::vec((0usize..WEAPONS.len(), any::<bool>()), 0..4),
        0u16..=12,
        0u8..=6,
        0usize..=4,
    )
        .prop_map(|(tons_step, chassis, weapons, head_armor, armor_tons, jets)| {
            let tonnage = tons_step as f64 * 5.0;
            let chassis = CHASSIS[chassis];
            let rating = (tonnage as u16 * 4).clamp(10, 400) / 5 * 5;
            let mut builder = DesignBuilder::new("Generated", tonnage, chassis)
                .engine(Engine::fusion(rating))
                .armor(ArmorType::Standard, armor_tons as f64)
                .armor_at(Location::Head, head_armor, 0);
            for (index, in_left) in weapons {
                let torso = if in_left {
                    Location::LeftTorso
                } else {
                    Location::RightTorso
                };
                builder = builder.mount(WEAPONS[index], torso);
            }
            for jet in 0..jets {
                let torso = if jet % 2 == 0 {
                    Location::LeftTorso
                } else {
                    Location::RightTorso
                };
                builder = builder.mount("JumpJet", torso);
            }
            builder
                .build(&EquipmentCatalog::standard())
                .expect("generated design fits its torsos")
        })
}

proptest! {
    #[test]
    fn prop_verification_is_idempotent(design in arb_design()) {
        let first = verify(&design);
        let second = verify(&design);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_verification_survives_serialization(design in arb_design()) {
        let json = serde_json::to_string(&design).unwrap();
        let reloaded: UnitDesign = serde_json::from_str(&json).unwrap();
        let original = verify(&design);
        let restored = verify(&reloaded);
        prop_assert_eq!(original.messages(), restored.messages());
    }

    #[test]
    fn prop_verdict_matches_violations(design in arb_design()) {
        let report = verify(&design);
        prop_assert_eq!(report.is_legal, report.violation_count() == 0);
    }
}
