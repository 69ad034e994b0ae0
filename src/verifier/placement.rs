//! Location-shape rules for a single item
//!
//! `check_location` answers "may this kind go in that location" without the
//! item being on the design yet, so construction tools can grey out illegal
//! choices. The compatibility check runs it for every mounted item.

use thiserror::Error;

use crate::catalog::equipment::{EquipmentKind, MiscKind, WeaponKind};
use crate::unit::design::{SystemSlot, UnitDesign};
use crate::unit::location::Location;

/// Why an item may not be placed in a location
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlacementError {
    #[error("{location} is not part of this chassis")]
    NotOnChassis { location: String },

    #[error("{item} must be mounted in {allowed}")]
    WrongLocation { item: String, allowed: &'static str },

    #[error("{item} cannot be mounted in the {location}")]
    Forbidden { item: String, location: String },

    #[error("{item} cannot be mounted on a four-legged chassis")]
    NotOnQuad { item: String },

    #[error("{item} must be mounted in a location with engine critical slots")]
    NeedsEngineSlot { item: String },
}

/// Check whether `kind` may be mounted in `location` of `design`
pub fn check_location(
    design: &UnitDesign,
    kind: &EquipmentKind,
    location: Location,
) -> Result<(), PlacementError> {
    let chassis = design.chassis;
    let item = || kind.name.clone();
    let here = || chassis.location_name(location);
    let wrong = |allowed| PlacementError::WrongLocation {
        item: item(),
        allowed,
    };
    let forbidden = || PlacementError::Forbidden {
        item: item(),
        location: here(),
    };

    if !chassis.has_location(location) {
        return Err(PlacementError::NotOnChassis { location: here() });
    }

    let is_torso = chassis.is_torso(location);
    let is_leg = chassis.is_leg(location);

    if let Some(weapon) = kind.weapon() {
        return match weapon {
            WeaponKind::VehicleGrenadeLauncher if !is_torso => Err(wrong("a torso")),
            w if w.is_heavy_gauss() && !is_torso && !design.is_superheavy() => {
                Err(wrong("a torso"))
            }
            _ => Ok(()),
        };
    }

    let Some(misc) = kind.misc() else {
        return Ok(());
    };

    match misc {
        MiscKind::Physical(tool) if tool.is_arm_or_side_torso_tool() => {
            if chassis.is_quad() {
                if !location.is_side_torso() {
                    return Err(wrong("a side torso"));
                }
            } else if !chassis.is_arm(location) {
                return Err(wrong("an arm"));
            }
        }
        MiscKind::Physical(weapon) if weapon.is_arm_only() => {
            arm_only(design, location, item())?;
        }
        MiscKind::Claws | MiscKind::SalvageArm => {
            arm_only(design, location, item())?;
        }
        MiscKind::ActuatorEnhancement => {
            if location == Location::Head || is_torso {
                return Err(forbidden());
            }
        }
        MiscKind::HeadTurret => {
            if location != Location::CenterTorso {
                return Err(wrong("the center torso"));
            }
        }
        MiscKind::ShoulderTurret | MiscKind::QuadTurret => {
            if !location.is_side_torso() {
                return Err(wrong("a side torso"));
            }
        }
        MiscKind::HarJel(_) => {
            if design.is_cockpit_location(location) {
                return Err(forbidden());
            }
        }
        MiscKind::RemoteDroneCommandConsole | MiscKind::Mash => {
            if !design.is_cockpit_location(location) {
                return Err(wrong("the cockpit location"));
            }
        }
        MiscKind::EmergencyCoolant => {
            if !design.has_system(SystemSlot::Engine, location) {
                return Err(PlacementError::NeedsEngineSlot { item: item() });
            }
        }
        m if m.is_supercharger() => {
            if !design.has_system(SystemSlot::Engine, location) {
                return Err(PlacementError::NeedsEngineSlot { item: item() });
            }
        }
        MiscKind::Case if kind.tech.is_clan() => {}
        MiscKind::FuelTank | MiscKind::Case | MiscKind::Ladder | MiscKind::BridgeLayer(_) => {
            if !is_torso {
                return Err(wrong("a torso"));
            }
        }
        MiscKind::LiftHoist => {
            if location == Location::Head || is_leg {
                return Err(forbidden());
            }
        }
        MiscKind::JumpJet(_) => {
            if !is_torso && !is_leg {
                return Err(wrong("a torso or leg"));
            }
        }
        MiscKind::ApPod | MiscKind::Motive(_) | MiscKind::Talons => {
            if !is_leg {
                return Err(wrong("a leg"));
            }
        }
        MiscKind::ModularArmor => {
            if location == Location::Head {
                return Err(forbidden());
            }
        }
        MiscKind::EjectionSeat => {
            if location != Location::Head {
                return Err(wrong("the head"));
            }
        }
        _ => {}
    }

    Ok(())
}

/// Hand-held items need a real arm
fn arm_only(design: &UnitDesign, location: Location, item: String) -> Result<(), PlacementError> {
    if design.chassis.is_quad() {
        return Err(PlacementError::NotOnQuad { item });
    }
    if !design.chassis.is_arm(location) {
        return Err(PlacementError::WrongLocation {
            item,
            allowed: "an arm",
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::registry::EquipmentCatalog;
    use crate::unit::builder::DesignBuilder;
    use crate::unit::chassis::ChassisKind;
    use crate::unit::components::{CockpitType, Engine, EngineType};

    fn design(chassis: ChassisKind, tonnage: f64) -> UnitDesign {
        DesignBuilder::new("Placement", tonnage, chassis)
            .build(&EquipmentCatalog::standard())
            .unwrap()
    }

    fn check(design: &UnitDesign, id: &str, location: Location) -> Result<(), PlacementError> {
        let catalog = EquipmentCatalog::standard();
        let kind = catalog.find(id).unwrap();
        check_location(design, kind, location)
    }

    #[test]
    fn test_hatchet_arm_only() {
        let biped = design(ChassisKind::Biped, 50.0);
        assert!(check(&biped, "Hatchet", Location::RightArm).is_ok());
        assert_eq!(
            check(&biped, "Hatchet", Location::RightTorso),
            Err(PlacementError::WrongLocation {
                item: "Hatchet".into(),
                allowed: "an arm"
            })
        );
        let quad = design(ChassisKind::Quad, 50.0);
        assert!(matches!(
            check(&quad, "Hatchet", Location::RightArm),
            Err(PlacementError::NotOnQuad { .. })
        ));
    }

    #[test]
    fn test_tools_follow_chassis() {
        let biped = design(ChassisKind::Biped, 50.0);
        assert!(check(&biped, "ISChainsaw", Location::LeftArm).is_ok());
        assert!(check(&biped, "ISChainsaw", Location::LeftTorso).is_err());
        let quad = design(ChassisKind::Quad, 50.0);
        assert!(check(&quad, "ISChainsaw", Location::LeftTorso).is_ok());
        assert!(check(&quad, "ISChainsaw", Location::LeftArm).is_err());
    }

    #[test]
    fn test_jump_jets_not_in_arms_or_head() {
        let biped = design(ChassisKind::Biped, 50.0);
        assert!(check(&biped, "JumpJet", Location::LeftLeg).is_ok());
        assert!(check(&biped, "JumpJet", Location::CenterTorso).is_ok());
        assert!(check(&biped, "JumpJet", Location::LeftArm).is_err());
        assert!(check(&biped, "JumpJet", Location::Head).is_err());
        // Front legs of a quad are legs
        let quad = design(ChassisKind::Quad, 50.0);
        assert!(check(&quad, "JumpJet", Location::LeftArm).is_ok());
    }

    #[test]
    fn test_location_not_on_chassis() {
        let biped = design(ChassisKind::Biped, 50.0);
        assert!(matches!(
            check(&biped, "ISMediumLaser", Location::CenterLeg),
            Err(PlacementError::NotOnChassis { .. })
        ));
    }

    #[test]
    fn test_supercharger_needs_engine_slot() {
        let xl = DesignBuilder::new("XL", 50.0, ChassisKind::Biped)
            .engine(Engine::new(EngineType::Xl, 250))
            .build(&EquipmentCatalog::standard())
            .unwrap();
        assert!(check(&xl, "Supercharger", Location::LeftTorso).is_ok());
        let standard = design(ChassisKind::Biped, 50.0);
        assert!(matches!(
            check(&standard, "Supercharger", Location::LeftTorso),
            Err(PlacementError::NeedsEngineSlot { .. })
        ));
    }

    #[test]
    fn test_heavy_gauss_torso_unless_superheavy() {
        let normal = design(ChassisKind::Biped, 90.0);
        assert!(check(&normal, "ISHeavyGaussRifle", Location::RightArm).is_err());
        assert!(check(&normal, "ISHeavyGaussRifle", Location::RightTorso).is_ok());
        let superheavy = design(ChassisKind::Biped, 150.0);
        assert!(check(&superheavy, "ISHeavyGaussRifle", Location::RightArm).is_ok());
    }

    #[test]
    fn test_head_only_and_not_head() {
        let biped = design(ChassisKind::Biped, 50.0);
        assert!(check(&biped, "EjectionSeat", Location::Head).is_ok());
        assert!(check(&biped, "EjectionSeat", Location::CenterTorso).is_err());
        assert!(check(&biped, "ISModularArmor", Location::Head).is_err());
        assert!(check(&biped, "ISActuatorEnhancementSystem", Location::LeftTorso).is_err());
        assert!(check(&biped, "ISActuatorEnhancementSystem", Location::LeftArm).is_ok());
    }

    #[test]
    fn test_mash_follows_cockpit() {
        let biped = design(ChassisKind::Biped, 50.0);
        assert!(check(&biped, "MASH", Location::Head).is_ok());
        assert_eq!(
            check(&biped, "MASH", Location::CenterTorso),
            Err(PlacementError::WrongLocation {
                item: "MASH Core Component".into(),
                allowed: "the cockpit location"
            })
        );
        let torso_cockpit = DesignBuilder::new("Torso Cockpit", 50.0, ChassisKind::Biped)
            .cockpit(CockpitType::TorsoMounted)
            .build(&EquipmentCatalog::standard())
            .unwrap();
        assert!(check(&torso_cockpit, "MASH", Location::CenterTorso).is_ok());
        assert!(check(&torso_cockpit, "MASH", Location::Head).is_err());
    }
}
