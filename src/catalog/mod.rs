//! Equipment catalog: kinds, capabilities, tech metadata and lookup

pub mod equipment;
pub mod registry;
pub mod tech;

pub use equipment::{
    AmphibiousKind, ArtemisKind, C3Kind, Capability, EquipmentCategory, EquipmentKind,
    HarJelGrade, HeatSinkKind, ItemSize, JumpJetKind, MascKind, MiscKind, MotiveKind,
    MyomerKind, PhysicalWeaponKind, WeaponKind,
};
pub use registry::EquipmentCatalog;
pub use tech::{DesignTechBase, RulesLevel, TechBase, TechInfo, TechSetting};
