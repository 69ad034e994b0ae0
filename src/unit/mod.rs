//! The unit being verified: locations, components, design data and movement

pub mod builder;
pub mod chassis;
pub mod components;
pub mod design;
pub mod location;
pub mod mech;
pub mod movement;

pub use builder::DesignBuilder;
pub use chassis::{ChassisKind, LamKind, LegLayout, QuadVeeMotive};
pub use components::{
    internal_structure, ArmorType, CockpitType, Engine, EngineProblem, EngineType, GyroType,
    StructureType,
};
pub use design::{
    CriticalSlot, DesignFlags, Environment, LocationData, MountedEquipment, SystemSlot, UnitDesign,
};
pub use location::Location;
pub use mech::{JumpType, Mech, ResolvedMount};
pub use movement::MpSetting;
