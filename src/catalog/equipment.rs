//! Equipment kinds as tagged variants
//!
//! Rules never test raw flag bits. Each category has its own enum and every
//! capability the rules care about is a pure predicate over those variants,
//! so adding a variant forces every exhaustive match to be revisited.

use serde::{Deserialize, Serialize};

use crate::catalog::tech::TechInfo;
use crate::core::types::EquipmentId;
use crate::unit::components::{ArmorType, StructureType};

/// Ranged weapon families
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeaponKind {
    Laser,
    PulseLaser,
    Ppc,
    Flamer,
    MachineGun,
    Autocannon,
    UltraAutocannon,
    LbxAutocannon,
    RotaryAutocannon,
    LightGauss,
    Gauss,
    HeavyGauss,
    ImprovedHeavyGauss,
    Lrm,
    Srm,
    Mrm,
    Atm,
    Artillery,
    Taser,
    VehicleGrenadeLauncher,
}

impl WeaponKind {
    /// Draws on the engine for power (needs amplifiers on non-fusion engines)
    pub fn is_energy(self) -> bool {
        matches!(
            self,
            WeaponKind::Laser | WeaponKind::PulseLaser | WeaponKind::Ppc | WeaponKind::Flamer
        )
    }

    pub fn is_gauss(self) -> bool {
        matches!(
            self,
            WeaponKind::LightGauss
                | WeaponKind::Gauss
                | WeaponKind::HeavyGauss
                | WeaponKind::ImprovedHeavyGauss
        )
    }

    pub fn is_heavy_gauss(self) -> bool {
        matches!(self, WeaponKind::HeavyGauss | WeaponKind::ImprovedHeavyGauss)
    }

    pub fn is_autocannon(self) -> bool {
        matches!(
            self,
            WeaponKind::Autocannon
                | WeaponKind::UltraAutocannon
                | WeaponKind::LbxAutocannon
                | WeaponKind::RotaryAutocannon
        )
    }

    pub fn is_ppc(self) -> bool {
        self == WeaponKind::Ppc
    }

    pub fn is_artillery(self) -> bool {
        self == WeaponKind::Artillery
    }

    /// Weapons a targeting computer can assist
    pub fn is_direct_fire(self) -> bool {
        self.is_energy() || self.is_gauss() || self.is_autocannon() || self == WeaponKind::MachineGun
    }

    /// Heavy weapons an omni biped may only arm-mount without lower arm and hand
    pub fn omni_arm_class(self) -> Option<&'static str> {
        if self.is_gauss() {
            Some("gauss rifles")
        } else if self.is_autocannon() {
            Some("autocannons")
        } else if self.is_ppc() {
            Some("PPCs")
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeatSinkKind {
    Single,
    Double,
    PrototypeDouble,
    Compact,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JumpJetKind {
    Standard,
    Improved,
    Prototype,
    PrototypeImproved,
}

impl JumpJetKind {
    /// Improved jets may push jump MP past walk MP
    pub fn is_improved(self) -> bool {
        matches!(self, JumpJetKind::Improved | JumpJetKind::PrototypeImproved)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MascKind {
    Standard,
    Supercharger,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MyomerKind {
    TripleStrength,
    IndustrialTripleStrength,
    SuperCooled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArtemisKind {
    Iv,
    Prototype,
    V,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum C3Kind {
    Master,
    Slave,
    Improved,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HarJelGrade {
    I,
    II,
    III,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemSize {
    Small,
    Medium,
    Large,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MotiveKind {
    Tracks,
    QuadVeeTracks,
    QuadVeeWheels,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AmphibiousKind {
    Limited,
    Standard,
    Fully,
}

/// Physical (melee) weapon sub-kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhysicalWeaponKind {
    Hatchet,
    Sword,
    Mace,
    ChainWhip,
    Lance,
    RetractableBlade,
    PileDriver,
    Chainsaw,
    Backhoe,
    DualSaw,
    MiningDrill,
    RockCutter,
    SpotWelder,
    WreckingBall,
    Flail,
    Combine,
    Buzzsaw,
    Vibroblade(ItemSize),
    Shield(ItemSize),
}

impl PhysicalWeaponKind {
    /// Industrial tools that take the place of the hand
    fn replaces_hand(self) -> bool {
        matches!(
            self,
            PhysicalWeaponKind::Chainsaw
                | PhysicalWeaponKind::Backhoe
                | PhysicalWeaponKind::DualSaw
                | PhysicalWeaponKind::MiningDrill
                | PhysicalWeaponKind::RockCutter
                | PhysicalWeaponKind::SpotWelder
                | PhysicalWeaponKind::WreckingBall
                | PhysicalWeaponKind::Flail
        )
    }

    fn needs_hand(self) -> bool {
        matches!(
            self,
            PhysicalWeaponKind::ChainWhip
                | PhysicalWeaponKind::Hatchet
                | PhysicalWeaponKind::Mace
                | PhysicalWeaponKind::Sword
                | PhysicalWeaponKind::Vibroblade(_)
        )
    }

    /// Tools that go in an arm, or a side torso on four-legged chassis
    pub fn is_arm_or_side_torso_tool(self) -> bool {
        matches!(
            self,
            PhysicalWeaponKind::DualSaw
                | PhysicalWeaponKind::PileDriver
                | PhysicalWeaponKind::Backhoe
                | PhysicalWeaponKind::MiningDrill
                | PhysicalWeaponKind::Combine
                | PhysicalWeaponKind::Chainsaw
                | PhysicalWeaponKind::RockCutter
                | PhysicalWeaponKind::Buzzsaw
                | PhysicalWeaponKind::SpotWelder
        )
    }

    /// Hand-held weapons that only an arm can wield
    pub fn is_arm_only(self) -> bool {
        matches!(
            self,
            PhysicalWeaponKind::Hatchet
                | PhysicalWeaponKind::Sword
                | PhysicalWeaponKind::ChainWhip
                | PhysicalWeaponKind::Flail
                | PhysicalWeaponKind::Lance
                | PhysicalWeaponKind::WreckingBall
                | PhysicalWeaponKind::Mace
                | PhysicalWeaponKind::RetractableBlade
                | PhysicalWeaponKind::Vibroblade(_)
                | PhysicalWeaponKind::Shield(_)
        )
    }
}

/// Everything that is neither a ranged weapon nor ammunition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MiscKind {
    HeatSink(HeatSinkKind),
    JumpJet(JumpJetKind),
    /// Mechanical jump booster
    JumpBooster,
    Umu,
    PartialWing,
    Masc(MascKind),
    Myomer(MyomerKind),
    ActuatorEnhancement,
    TargetingComputer,
    Artemis(ArtemisKind),
    ActiveProbe,
    C3(C3Kind),
    Ecm,
    NullSignature,
    VoidSignature,
    ChameleonShield,
    HarJel(HarJelGrade),
    ModularArmor,
    Physical(PhysicalWeaponKind),
    Claws,
    SalvageArm,
    HeadTurret,
    ShoulderTurret,
    QuadTurret,
    Motive(MotiveKind),
    Talons,
    RamPlate,
    EnvironmentalSealing,
    BlueShield,
    DroneControlConsole,
    RemoteDroneCommandConsole,
    /// Mobile army surgical hospital core
    Mash,
    MobileHpg,
    LightFluidSuction,
    FuelTank,
    Case,
    Ladder,
    BridgeLayer(ItemSize),
    LiftHoist,
    ApPod,
    EjectionSeat,
    FullHeadEjection,
    EmergencyCoolant,
    Dumper,
    BombBay,
    Amphibious(AmphibiousKind),
    /// Slots consumed by an advanced internal structure
    StructureSlot(StructureType),
    /// Slots consumed by a bulky armor type
    ArmorSlot(ArmorType),
}

impl MiscKind {
    pub fn is_heat_sink(self) -> bool {
        matches!(self, MiscKind::HeatSink(_))
    }

    pub fn is_double_heat_sink(self) -> bool {
        matches!(
            self,
            MiscKind::HeatSink(HeatSinkKind::Double)
                | MiscKind::HeatSink(HeatSinkKind::PrototypeDouble)
        )
    }

    pub fn is_jump_jet(self) -> bool {
        matches!(self, MiscKind::JumpJet(_))
    }

    pub fn is_advanced_myomer(self) -> bool {
        matches!(self, MiscKind::Myomer(_))
    }

    /// MASC proper; the supercharger is a different booster
    pub fn is_masc(self) -> bool {
        self == MiscKind::Masc(MascKind::Standard)
    }

    pub fn is_supercharger(self) -> bool {
        self == MiscKind::Masc(MascKind::Supercharger)
    }

    pub fn is_harjel_repair(self) -> bool {
        matches!(self, MiscKind::HarJel(HarJelGrade::II) | MiscKind::HarJel(HarJelGrade::III))
    }

    pub fn is_physical_weapon(self) -> bool {
        matches!(self, MiscKind::Physical(_))
    }

    pub fn is_bridge_layer(self) -> bool {
        matches!(self, MiscKind::BridgeLayer(_))
    }

    /// Occupies the hand actuator position when mounted in an arm
    pub fn replaces_hand_actuator(self) -> bool {
        match self {
            MiscKind::SalvageArm | MiscKind::Claws => true,
            MiscKind::Physical(kind) => kind.replaces_hand(),
            _ => false,
        }
    }

    /// Occupies both the lower arm and hand positions
    pub fn replaces_lower_arm(self) -> bool {
        self == MiscKind::Physical(PhysicalWeaponKind::PileDriver)
    }

    /// Must be gripped by a hand actuator
    pub fn requires_hand_actuator(self) -> bool {
        matches!(self, MiscKind::Physical(kind) if kind.needs_hand())
    }

    pub fn requires_lower_arm(self) -> bool {
        self.replaces_hand_actuator()
            || matches!(
                self,
                MiscKind::Physical(PhysicalWeaponKind::Lance)
                    | MiscKind::Physical(PhysicalWeaponKind::RetractableBlade)
            )
    }

    /// Needs the advanced fire control an industrial chassis usually lacks
    pub fn needs_advanced_fire_control(self) -> bool {
        matches!(
            self,
            MiscKind::TargetingComputer | MiscKind::Artemis(_) | MiscKind::ActiveProbe
        )
    }

    pub fn is_turret(self) -> bool {
        matches!(
            self,
            MiscKind::HeadTurret | MiscKind::ShoulderTurret | MiscKind::QuadTurret
        )
    }
}

/// Open set of capabilities callers may probe on a unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    JumpJet,
    ImprovedJumpJet,
    JumpBooster,
    Umu,
    PartialWing,
    Masc,
    Supercharger,
    AdvancedMyomer,
    ActuatorEnhancement,
    TargetingComputer,
    Ecm,
    C3,
    Artemis,
    ActiveProbe,
    NullSignature,
    VoidSignature,
    ChameleonShield,
    HarJel,
    ModularArmor,
    HeatSink,
    DoubleHeatSink,
    CompactHeatSink,
    PhysicalWeapon,
    Turret,
    Tracks,
    Talons,
    Case,
    EnvironmentalSealing,
    BombBay,
    EjectionSeat,
    LimitedAmphibious,
    Amphibious,
    FullyAmphibious,
}

impl MiscKind {
    pub fn has(self, capability: Capability) -> bool {
        match capability {
            Capability::JumpJet => self.is_jump_jet(),
            Capability::ImprovedJumpJet => {
                matches!(self, MiscKind::JumpJet(kind) if kind.is_improved())
            }
            Capability::JumpBooster => self == MiscKind::JumpBooster,
            Capability::Umu => self == MiscKind::Umu,
            Capability::PartialWing => self == MiscKind::PartialWing,
            Capability::Masc => self.is_masc(),
            Capability::Supercharger => self.is_supercharger(),
            Capability::AdvancedMyomer => self.is_advanced_myomer(),
            Capability::ActuatorEnhancement => self == MiscKind::ActuatorEnhancement,
            Capability::TargetingComputer => self == MiscKind::TargetingComputer,
            Capability::Ecm => self == MiscKind::Ecm,
            Capability::C3 => matches!(self, MiscKind::C3(_)),
            Capability::Artemis => matches!(self, MiscKind::Artemis(_)),
            Capability::ActiveProbe => self == MiscKind::ActiveProbe,
            Capability::NullSignature => self == MiscKind::NullSignature,
            Capability::VoidSignature => self == MiscKind::VoidSignature,
            Capability::ChameleonShield => self == MiscKind::ChameleonShield,
            Capability::HarJel => matches!(self, MiscKind::HarJel(_)),
            Capability::ModularArmor => self == MiscKind::ModularArmor,
            Capability::HeatSink => self.is_heat_sink(),
            Capability::DoubleHeatSink => self.is_double_heat_sink(),
            Capability::CompactHeatSink => self == MiscKind::HeatSink(HeatSinkKind::Compact),
            Capability::PhysicalWeapon => self.is_physical_weapon(),
            Capability::Turret => self.is_turret(),
            Capability::Tracks => matches!(self, MiscKind::Motive(_)),
            Capability::Talons => self == MiscKind::Talons,
            Capability::Case => self == MiscKind::Case,
            Capability::EnvironmentalSealing => self == MiscKind::EnvironmentalSealing,
            Capability::BombBay => self == MiscKind::BombBay,
            Capability::EjectionSeat => self == MiscKind::EjectionSeat,
            Capability::LimitedAmphibious => {
                self == MiscKind::Amphibious(AmphibiousKind::Limited)
            }
            Capability::Amphibious => self == MiscKind::Amphibious(AmphibiousKind::Standard),
            Capability::FullyAmphibious => self == MiscKind::Amphibious(AmphibiousKind::Fully),
        }
    }
}

/// Top-level equipment category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EquipmentCategory {
    Weapon(WeaponKind),
    /// Ammunition for the given weapon family
    Ammo(WeaponKind),
    Misc(MiscKind),
}

/// Immutable catalog entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquipmentKind {
    pub id: EquipmentId,
    pub name: String,
    pub category: EquipmentCategory,
    pub tonnage: f64,
    pub criticals: u8,
    /// Slot demand may be spread across several locations
    #[serde(default)]
    pub spreadable: bool,
    #[serde(default)]
    pub tech: TechInfo,
}

impl EquipmentKind {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: EquipmentCategory,
        tonnage: f64,
        criticals: u8,
    ) -> Self {
        Self {
            id: EquipmentId::new(id),
            name: name.into(),
            category,
            tonnage,
            criticals,
            spreadable: false,
            tech: TechInfo::universal(),
        }
    }

    pub fn spreadable(mut self) -> Self {
        self.spreadable = true;
        self
    }

    pub fn with_tech(mut self, tech: TechInfo) -> Self {
        self.tech = tech;
        self
    }

    pub fn weapon(&self) -> Option<WeaponKind> {
        match self.category {
            EquipmentCategory::Weapon(kind) => Some(kind),
            _ => None,
        }
    }

    pub fn misc(&self) -> Option<MiscKind> {
        match self.category {
            EquipmentCategory::Misc(kind) => Some(kind),
            _ => None,
        }
    }

    pub fn is_ammo(&self) -> bool {
        matches!(self.category, EquipmentCategory::Ammo(_))
    }

    pub fn is_weapon(&self) -> bool {
        matches!(self.category, EquipmentCategory::Weapon(_))
    }

    /// Structure and armor slot fillers, which are not real equipment
    pub fn is_structural(&self) -> bool {
        matches!(
            self.category,
            EquipmentCategory::Misc(MiscKind::StructureSlot(_))
                | EquipmentCategory::Misc(MiscKind::ArmorSlot(_))
        )
    }

    pub fn has(&self, capability: Capability) -> bool {
        self.misc().map_or(false, |kind| kind.has(capability))
    }

    /// True when the misc variant satisfies `predicate`
    pub fn misc_is(&self, predicate: impl Fn(MiscKind) -> bool) -> bool {
        self.misc().map_or(false, predicate)
    }
}
