//! Derived-attribute cache over one unit snapshot
//!
//! Pathfinding asks for the same movement values many times per turn. The
//! cache computes each on first request and never again; a caller that
//! changes the unit must build a new cache.

use ahash::AHashMap;
use std::cell::RefCell;
use tracing::trace;

use crate::cache::compute_once::ComputeOnce;
use crate::catalog::equipment::Capability;
use crate::unit::chassis::LegLayout;
use crate::unit::location::Location;
use crate::unit::mech::Mech;
use crate::unit::movement::{self, MpSetting};

/// The reads the cache makes against the unit it wraps
pub trait UnitSnapshot {
    fn walk_mp(&self, setting: MpSetting) -> u32;
    fn run_mp(&self, setting: MpSetting) -> u32;
    fn sprint_mp(&self, setting: MpSetting) -> u32;
    fn jump_mp(&self, setting: MpSetting) -> u32;
    fn jump_mp_under_terrain(&self) -> u32;
    fn has_working(&self, capability: Capability) -> bool;
    fn torso_jump_jets(&self) -> u32;
    fn leg_layout(&self) -> LegLayout;
    fn front_armor(&self, location: Location) -> u16;
}

impl UnitSnapshot for Mech<'_> {
    fn walk_mp(&self, setting: MpSetting) -> u32 {
        movement::walk_mp(self, setting)
    }

    fn run_mp(&self, setting: MpSetting) -> u32 {
        movement::run_mp(self, setting)
    }

    fn sprint_mp(&self, setting: MpSetting) -> u32 {
        movement::sprint_mp(self, setting)
    }

    fn jump_mp(&self, setting: MpSetting) -> u32 {
        movement::jump_mp(self, setting)
    }

    fn jump_mp_under_terrain(&self) -> u32 {
        movement::jump_mp_under_terrain(self)
    }

    fn has_working(&self, capability: Capability) -> bool {
        Mech::has_working(self, capability)
    }

    fn torso_jump_jets(&self) -> u32 {
        movement::torso_jump_jets(self)
    }

    fn leg_layout(&self) -> LegLayout {
        self.design().chassis.leg_layout()
    }

    fn front_armor(&self, location: Location) -> u16 {
        self.design().front_armor(location)
    }
}

/// Memoised derived attributes of one unit
pub struct CachedUnitState<'a, S: UnitSnapshot + ?Sized> {
    unit: &'a S,
    walk_mp: ComputeOnce<u32>,
    walk_mp_ignoring_gravity: ComputeOnce<u32>,
    run_mp: ComputeOnce<u32>,
    run_mp_with_one_booster: ComputeOnce<u32>,
    run_mp_without_boosters: ComputeOnce<u32>,
    run_mp_ignoring_gravity: ComputeOnce<u32>,
    sprint_mp: ComputeOnce<u32>,
    sprint_mp_with_one_booster: ComputeOnce<u32>,
    sprint_mp_without_boosters: ComputeOnce<u32>,
    jump_mp: ComputeOnce<u32>,
    jump_mp_under_terrain: ComputeOnce<u32>,
    jump_mp_ignoring_gravity: ComputeOnce<u32>,
    torso_jump_jets: ComputeOnce<u32>,
    breached_leg_count: ComputeOnce<u32>,
    has_working: RefCell<AHashMap<Capability, bool>>,
}

impl<'a, S: UnitSnapshot + ?Sized> CachedUnitState<'a, S> {
    pub fn new(unit: &'a S) -> Self {
        Self {
            unit,
            walk_mp: ComputeOnce::new(),
            walk_mp_ignoring_gravity: ComputeOnce::new(),
            run_mp: ComputeOnce::new(),
            run_mp_with_one_booster: ComputeOnce::new(),
            run_mp_without_boosters: ComputeOnce::new(),
            run_mp_ignoring_gravity: ComputeOnce::new(),
            sprint_mp: ComputeOnce::new(),
            sprint_mp_with_one_booster: ComputeOnce::new(),
            sprint_mp_without_boosters: ComputeOnce::new(),
            jump_mp: ComputeOnce::new(),
            jump_mp_under_terrain: ComputeOnce::new(),
            jump_mp_ignoring_gravity: ComputeOnce::new(),
            torso_jump_jets: ComputeOnce::new(),
            breached_leg_count: ComputeOnce::new(),
            has_working: RefCell::new(AHashMap::new()),
        }
    }

    pub fn unit(&self) -> &'a S {
        self.unit
    }

    fn cached(&self, cell: &ComputeOnce<u32>, field: &'static str, compute: impl FnOnce() -> u32) -> u32 {
        cell.get_or_compute(|| {
            let value = compute();
            trace!(field, value, "derived attribute computed");
            value
        })
    }

    pub fn walk_mp(&self) -> u32 {
        self.cached(&self.walk_mp, "walk_mp", || self.unit.walk_mp(MpSetting::Standard))
    }

    pub fn walk_mp_ignoring_gravity(&self) -> u32 {
        self.cached(&self.walk_mp_ignoring_gravity, "walk_mp_ignoring_gravity", || {
            self.unit.walk_mp(MpSetting::Base)
        })
    }

    pub fn run_mp(&self) -> u32 {
        self.cached(&self.run_mp, "run_mp", || self.unit.run_mp(MpSetting::Standard))
    }

    pub fn run_mp_with_one_booster(&self) -> u32 {
        self.cached(&self.run_mp_with_one_booster, "run_mp_with_one_booster", || {
            self.unit.run_mp(MpSetting::OneBooster)
        })
    }

    pub fn run_mp_without_boosters(&self) -> u32 {
        self.cached(&self.run_mp_without_boosters, "run_mp_without_boosters", || {
            self.unit.run_mp(MpSetting::NoBoosters)
        })
    }

    /// Printed run value: no gravity and no boosters
    pub fn run_mp_ignoring_gravity(&self) -> u32 {
        self.cached(&self.run_mp_ignoring_gravity, "run_mp_ignoring_gravity", || {
            self.unit.run_mp(MpSetting::Base)
        })
    }

    pub fn sprint_mp(&self) -> u32 {
        self.cached(&self.sprint_mp, "sprint_mp", || self.unit.sprint_mp(MpSetting::Standard))
    }

    pub fn sprint_mp_with_one_booster(&self) -> u32 {
        self.cached(&self.sprint_mp_with_one_booster, "sprint_mp_with_one_booster", || {
            self.unit.sprint_mp(MpSetting::OneBooster)
        })
    }

    pub fn sprint_mp_without_boosters(&self) -> u32 {
        self.cached(&self.sprint_mp_without_boosters, "sprint_mp_without_boosters", || {
            self.unit.sprint_mp(MpSetting::NoBoosters)
        })
    }

    pub fn jump_mp(&self) -> u32 {
        self.cached(&self.jump_mp, "jump_mp", || self.unit.jump_mp(MpSetting::Standard))
    }

    pub fn jump_mp_under_terrain(&self) -> u32 {
        self.cached(&self.jump_mp_under_terrain, "jump_mp_under_terrain", || {
            self.unit.jump_mp_under_terrain()
        })
    }

    pub fn jump_mp_ignoring_gravity(&self) -> u32 {
        self.cached(&self.jump_mp_ignoring_gravity, "jump_mp_ignoring_gravity", || {
            self.unit.jump_mp(MpSetting::IgnoreGravity)
        })
    }

    pub fn torso_jump_jets(&self) -> u32 {
        self.cached(&self.torso_jump_jets, "torso_jump_jets", || self.unit.torso_jump_jets())
    }

    /// Legs whose front armor is gone
    pub fn breached_leg_count(&self) -> u32 {
        self.cached(&self.breached_leg_count, "breached_leg_count", || {
            self.unit
                .leg_layout()
                .locations()
                .iter()
                .filter(|&&leg| self.unit.front_armor(leg) == 0)
                .count() as u32
        })
    }

    /// Memoised per capability key
    pub fn has_working(&self, capability: Capability) -> bool {
        if let Some(&known) = self.has_working.borrow().get(&capability) {
            return known;
        }
        let value = self.unit.has_working(capability);
        trace!(?capability, value, "capability probe computed");
        self.has_working.borrow_mut().insert(capability, value);
        value
    }

    pub fn is_amphibious(&self) -> bool {
        self.has_working(Capability::FullyAmphibious)
            || self.has_working(Capability::Amphibious)
            || self.has_working(Capability::LimitedAmphibious)
    }
}
