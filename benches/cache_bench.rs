//! Criterion benchmarks for the derived-attribute cache.
//!
//! Benchmarks:
//!   - movement reads straight from the unit, recomputed every time
//!   - the same reads through a warm `CachedUnitState`
//!   - building a fresh cache and reading each value once
//!
//! Run with: cargo bench --bench cache_bench

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use mech_verifier::cache::CachedUnitState;
use mech_verifier::catalog::{Capability, EquipmentCatalog};
use mech_verifier::unit::movement::{self, MpSetting};
use mech_verifier::unit::{ChassisKind, DesignBuilder, Engine, Location, Mech, UnitDesign};

fn jumping_design(catalog: &EquipmentCatalog) -> UnitDesign {
    let mut builder = DesignBuilder::new("Bench Jumper", 55.0, ChassisKind::Biped)
        .engine(Engine::fusion(275))
        .mount("ISMASC", Location::LeftTorso)
        .mount("ISMediumLaser", Location::RightArm);
    for location in [
        Location::LeftTorso,
        Location::RightTorso,
        Location::LeftLeg,
        Location::RightLeg,
    ] {
        builder = builder.mount("JumpJet", location);
    }
    builder.build(catalog).expect("bench design builds")
}

/// The reads a movement search makes for one unit per step
fn probe_uncached(mech: &Mech<'_>) -> u32 {
    movement::walk_mp(mech, MpSetting::Standard)
        + movement::run_mp(mech, MpSetting::Standard)
        + movement::run_mp(mech, MpSetting::NoBoosters)
        + movement::jump_mp(mech, MpSetting::Standard)
        + u32::from(mech.has_working(Capability::Masc))
}

fn probe_cached(cache: &CachedUnitState<'_, Mech<'_>>) -> u32 {
    cache.walk_mp()
        + cache.run_mp()
        + cache.run_mp_without_boosters()
        + cache.jump_mp()
        + u32::from(cache.has_working(Capability::Masc))
}

fn bench_movement_reads(c: &mut Criterion) {
    let catalog = EquipmentCatalog::standard();
    let design = jumping_design(&catalog);
    let mech = Mech::resolve(&design, &catalog).expect("bench design resolves");

    let mut group = c.benchmark_group("movement_reads");

    group.bench_function("uncached", |b| {
        b.iter(|| black_box(probe_uncached(black_box(&mech))));
    });

    let warm = CachedUnitState::new(&mech);
    probe_cached(&warm);
    group.bench_function("cached_warm", |b| {
        b.iter(|| black_box(probe_cached(black_box(&warm))));
    });

    group.bench_function("cached_cold", |b| {
        b.iter(|| {
            let cache = CachedUnitState::new(black_box(&mech));
            black_box(probe_cached(&cache))
        });
    });

    group.finish();
}

criterion_group!(benches, bench_movement_reads);
criterion_main!(benches);
