//! Derived-attribute cache over real designs

mod common;

use common::{build, hunter};
use mech_verifier::cache::CachedUnitState;
use mech_verifier::catalog::{Capability, EquipmentCatalog};
use mech_verifier::unit::{ChassisKind, DesignBuilder, Engine, Environment, Location, Mech};

#[test]
fn test_reference_movement() {
    let catalog = EquipmentCatalog::standard();
    let design = build(hunter());
    let mech = Mech::resolve(&design, &catalog).unwrap();
    let cache = CachedUnitState::new(&mech);

    assert_eq!(cache.walk_mp(), 5);
    assert_eq!(cache.run_mp(), 8);
    assert_eq!(cache.sprint_mp(), 10);
    assert_eq!(cache.jump_mp(), 4);
    assert_eq!(cache.jump_mp_under_terrain(), 4);
    assert_eq!(cache.torso_jump_jets(), 4);
    assert_eq!(cache.breached_leg_count(), 0);
    assert!(!cache.has_working(Capability::Masc));
}

#[test]
fn test_low_gravity_rounds_down_but_ignoring_gravity_does_not() {
    let catalog = EquipmentCatalog::standard();
    let design = build(hunter().environment(Environment {
        gravity: 1.5,
        underwater: false,
    }));
    let mech = Mech::resolve(&design, &catalog).unwrap();
    let cache = CachedUnitState::new(&mech);

    // 5 / 1.5 and 4 / 1.5, rounded down
    assert_eq!(cache.walk_mp(), 3);
    assert_eq!(cache.jump_mp(), 2);
    assert_eq!(cache.walk_mp_ignoring_gravity(), 5);
    assert_eq!(cache.run_mp_ignoring_gravity(), 8);
    assert_eq!(cache.jump_mp_ignoring_gravity(), 4);
}

#[test]
fn test_masc_boosts_run() {
    let catalog = EquipmentCatalog::standard();
    let design = build(
        DesignBuilder::new("Sprinter", 50.0, ChassisKind::Biped)
            .engine(Engine::fusion(300))
            .mount("ISMASC", Location::LeftTorso),
    );
    let mech = Mech::resolve(&design, &catalog).unwrap();
    let cache = CachedUnitState::new(&mech);

    assert!(cache.has_working(Capability::Masc));
    assert_eq!(cache.walk_mp(), 6);
    assert_eq!(cache.run_mp(), 12);
    assert_eq!(cache.run_mp_with_one_booster(), 12);
    assert_eq!(cache.run_mp_without_boosters(), 9);
    assert_eq!(cache.sprint_mp_without_boosters(), 12);
}

#[test]
fn test_breached_legs_per_chassis() {
    let catalog = EquipmentCatalog::standard();
    let breached = |chassis: ChassisKind, legs: &[Location]| {
        let mut builder = DesignBuilder::new("Walker", 60.0, chassis);
        for &location in chassis.locations() {
            if !legs.contains(&location) {
                builder = builder.armor_at(location, 5, 0);
            }
        }
        build(builder)
    };

    let biped = breached(ChassisKind::Biped, &[Location::LeftLeg]);
    let mech = Mech::resolve(&biped, &catalog).unwrap();
    assert_eq!(CachedUnitState::new(&mech).breached_leg_count(), 1);

    // Front legs of a quad sit in the arm positions
    let quad = breached(ChassisKind::Quad, &[Location::LeftArm, Location::RightLeg]);
    let mech = Mech::resolve(&quad, &catalog).unwrap();
    assert_eq!(CachedUnitState::new(&mech).breached_leg_count(), 2);

    let tripod = breached(ChassisKind::Tripod, &[Location::CenterLeg]);
    let mech = Mech::resolve(&tripod, &catalog).unwrap();
    assert_eq!(CachedUnitState::new(&mech).breached_leg_count(), 1);
}

#[test]
fn test_underwater_jumping_uses_umus() {
    let catalog = EquipmentCatalog::standard();
    let design = build(
        DesignBuilder::new("Diver", 50.0, ChassisKind::Biped)
            .environment(Environment {
                gravity: 1.0,
                underwater: true,
            })
            .mount("UMU", Location::LeftLeg)
            .mount("UMU", Location::RightLeg)
            .mount("UMU", Location::CenterTorso),
    );
    let mech = Mech::resolve(&design, &catalog).unwrap();
    let cache = CachedUnitState::new(&mech);
    assert_eq!(cache.jump_mp_under_terrain(), 3);
    assert_eq!(cache.jump_mp(), 0);
}

#[test]
fn test_cache_is_stable_across_reads() {
    let catalog = EquipmentCatalog::standard();
    let design = build(hunter());
    let mech = Mech::resolve(&design, &catalog).unwrap();
    let cache = CachedUnitState::new(&mech);
    let first = (cache.walk_mp(), cache.run_mp(), cache.jump_mp());
    for _ in 0..10 {
        assert_eq!((cache.walk_mp(), cache.run_mp(), cache.jump_mp()), first);
    }
}
