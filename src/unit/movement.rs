//! Movement point formulas
//!
//! Every value is computed fresh from the resolved design. The derived
//! attribute cache sits on top of these for hot callers.

use crate::catalog::equipment::Capability;
use crate::unit::mech::Mech;

/// Which modifiers apply to a movement value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MpSetting {
    /// Gravity and all working boosters
    Standard,
    /// Only one of MASC and supercharger engaged
    OneBooster,
    /// No MASC or supercharger
    NoBoosters,
    /// Gravity ignored, boosters applied
    IgnoreGravity,
    /// Neither gravity nor boosters: the design's printed values
    Base,
}

impl MpSetting {
    fn applies_gravity(self) -> bool {
        matches!(
            self,
            MpSetting::Standard | MpSetting::OneBooster | MpSetting::NoBoosters
        )
    }

    /// Number of speed boosters this setting allows to engage
    fn booster_limit(self) -> usize {
        match self {
            MpSetting::Standard | MpSetting::IgnoreGravity => 2,
            MpSetting::OneBooster => 1,
            MpSetting::NoBoosters | MpSetting::Base => 0,
        }
    }
}

/// Movement under gravity other than 1g, rounded down
pub fn apply_gravity(mp: u32, gravity: f64) -> u32 {
    if gravity <= 0.0 || (gravity - 1.0).abs() < f64::EPSILON {
        return mp;
    }
    (mp as f64 / gravity).floor() as u32
}

fn gravity_for(mech: &Mech<'_>, setting: MpSetting) -> f64 {
    if setting.applies_gravity() {
        mech.design().environment.gravity
    } else {
        1.0
    }
}

fn engaged_boosters(mech: &Mech<'_>, setting: MpSetting) -> usize {
    let fitted = mech.has_working(Capability::Masc) as usize
        + mech.has_working(Capability::Supercharger) as usize;
    fitted.min(setting.booster_limit())
}

/// Engine rating divided by tonnage, with gravity when the setting applies
pub fn walk_mp(mech: &Mech<'_>, setting: MpSetting) -> u32 {
    let design = mech.design();
    if design.tonnage <= 0.0 {
        return 0;
    }
    let base = (design.engine.rating as f64 / design.tonnage).floor() as u32;
    apply_gravity(base, gravity_for(mech, setting))
}

pub fn run_mp(mech: &Mech<'_>, setting: MpSetting) -> u32 {
    let walk = walk_mp(mech, setting);
    match engaged_boosters(mech, setting) {
        0 => (walk as f64 * 1.5).ceil() as u32,
        1 => walk * 2,
        _ => (walk as f64 * 2.5).ceil() as u32,
    }
}

pub fn sprint_mp(mech: &Mech<'_>, setting: MpSetting) -> u32 {
    let walk = walk_mp(mech, setting);
    match engaged_boosters(mech, setting) {
        0 => walk * 2,
        1 => (walk as f64 * 2.5).ceil() as u32,
        _ => walk * 3,
    }
}

/// Jump movement from working jets, a jump booster, and a partial wing
///
/// Boosters do not affect jumping, so only gravity matters here.
pub fn jump_mp(mech: &Mech<'_>, setting: MpSetting) -> u32 {
    if mech.is_superheavy() {
        return 0;
    }
    let design = mech.design();
    let base = if mech.has_working(Capability::JumpBooster) {
        design.jump_booster_mp as u32
    } else {
        let jets = mech
            .mounts()
            .iter()
            .filter(|mount| {
                mount.is_working() && mount.location().is_some() && mount.has(Capability::JumpJet)
            })
            .count() as u32;
        if jets > 0 && mech.has_working(Capability::PartialWing) {
            jets + 2
        } else {
            jets
        }
    };
    apply_gravity(base, gravity_for(mech, setting))
}

/// Jump movement in the current terrain: underwater only UMUs propel the unit
pub fn jump_mp_under_terrain(mech: &Mech<'_>) -> u32 {
    if mech.design().environment.underwater {
        mech.count_working(Capability::Umu) as u32
    } else {
        jump_mp(mech, MpSetting::Standard)
    }
}

/// Working jump jets mounted in a torso location
pub fn torso_jump_jets(mech: &Mech<'_>) -> u32 {
    mech.mounts()
        .iter()
        .filter(|mount| {
            mount.is_working()
                && mount.has(Capability::JumpJet)
                && mount.location().map_or(false, |loc| loc.is_torso())
        })
        .count() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gravity_rounds_down() {
        assert_eq!(apply_gravity(5, 1.0), 5);
        assert_eq!(apply_gravity(5, 1.5), 3);
        assert_eq!(apply_gravity(5, 0.5), 10);
        assert_eq!(apply_gravity(5, 0.0), 5);
    }

    #[test]
    fn test_setting_booster_limits() {
        assert_eq!(MpSetting::Standard.booster_limit(), 2);
        assert_eq!(MpSetting::OneBooster.booster_limit(), 1);
        assert_eq!(MpSetting::Base.booster_limit(), 0);
        assert!(!MpSetting::Base.applies_gravity());
        assert!(!MpSetting::IgnoreGravity.applies_gravity());
    }
}
