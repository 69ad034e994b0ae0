//! Shared designs for the integration tests

#![allow(dead_code)]

use mech_verifier::catalog::EquipmentCatalog;
use mech_verifier::core::VerifierConfig;
use mech_verifier::unit::{ArmorType, ChassisKind, DesignBuilder, Engine, Location, UnitDesign};
use mech_verifier::verifier::{VerificationReport, Verifier};

/// A legal 50 t biped weighing exactly 50 t: walks 5, runs 8, jumps 4
pub fn hunter() -> DesignBuilder {
    let mut builder = DesignBuilder::new("Hunter HNT-1A", 50.0, ChassisKind::Biped)
        .engine(Engine::fusion(250))
        .armor(ArmorType::Standard, 8.0)
        .armor_at(Location::Head, 9, 0)
        .armor_at(Location::CenterTorso, 20, 6)
        .armor_at(Location::LeftTorso, 16, 4)
        .armor_at(Location::RightTorso, 16, 4)
        .armor_at(Location::LeftArm, 12, 0)
        .armor_at(Location::RightArm, 12, 0)
        .armor_at(Location::LeftLeg, 14, 0)
        .armor_at(Location::RightLeg, 15, 0)
        .mount("ISSmallLaser", Location::Head)
        .mount("ISMediumLaser", Location::CenterTorso)
        .mount("ISMediumLaser", Location::LeftArm)
        .mount("ISMediumLaser", Location::RightArm)
        .mount("ISLargeLaser", Location::RightTorso)
        .mount("ISLRM10", Location::LeftTorso)
        .mount("ISLRM10 Ammo", Location::LeftTorso)
        .mount("JumpJet", Location::LeftTorso)
        .mount("JumpJet", Location::LeftTorso)
        .mount("JumpJet", Location::RightTorso)
        .mount("JumpJet", Location::RightTorso)
        .mount("Heat Sink", Location::LeftLeg)
        .mount("Heat Sink", Location::RightLeg);
    for _ in 0..10 {
        builder = builder.mount_internal("Heat Sink");
    }
    builder
}

pub fn build(builder: DesignBuilder) -> UnitDesign {
    builder
        .build(&EquipmentCatalog::standard())
        .expect("fixture design builds")
}

pub fn verify(design: &UnitDesign) -> VerificationReport {
    let catalog = EquipmentCatalog::standard();
    Verifier::with_config(&catalog, VerifierConfig::default())
        .verify(design)
        .expect("fixture design is well formed")
}
