//! The equipment catalog: read-only lookup keyed by equipment id
//!
//! A built-in set covers the items the construction rules reference; scenario
//! packs can extend or override it from TOML.

use ahash::AHashMap;
use serde::Deserialize;
use std::path::Path;

use crate::catalog::equipment::*;
use crate::catalog::tech::{RulesLevel, TechBase, TechInfo};
use crate::core::error::{Result, VerifierError};
use crate::core::types::EquipmentId;
use crate::unit::components::{ArmorType, StructureType};

/// Catalog of every known equipment kind
#[derive(Debug, Clone, Default)]
pub struct EquipmentCatalog {
    kinds: AHashMap<EquipmentId, EquipmentKind>,
}

impl EquipmentCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace an entry
    pub fn add(&mut self, kind: EquipmentKind) {
        self.kinds.insert(kind.id.clone(), kind);
    }

    pub fn get(&self, id: &EquipmentId) -> Result<&EquipmentKind> {
        self.kinds
            .get(id)
            .ok_or_else(|| VerifierError::UnknownEquipment(id.clone()))
    }

    pub fn find(&self, id: &str) -> Option<&EquipmentKind> {
        self.kinds.get(&EquipmentId::new(id))
    }

    pub fn contains(&self, id: &EquipmentId) -> bool {
        self.kinds.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &EquipmentKind> {
        self.kinds.values()
    }

    /// Load a catalog from a TOML file
    pub fn load_from_toml(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse_toml(&content)
    }

    /// Parse a catalog from a TOML string
    pub fn parse_toml(content: &str) -> Result<Self> {
        let mut catalog = Self::new();
        catalog.extend_from_toml(content)?;
        Ok(catalog)
    }

    /// Merge TOML entries into this catalog, replacing entries with equal ids
    pub fn extend_from_toml(&mut self, content: &str) -> Result<usize> {
        let file: TomlCatalog = toml::from_str(content)?;
        let count = file.equipment.len();
        for kind in file.equipment {
            if kind.tonnage < 0.0 {
                return Err(VerifierError::InvalidConfig(format!(
                    "{} has negative tonnage {}",
                    kind.id, kind.tonnage
                )));
            }
            self.add(kind);
        }
        tracing::debug!("Loaded {} equipment kinds from TOML", count);
        Ok(count)
    }

    /// The built-in catalog
    pub fn standard() -> Self {
        let mut catalog = Self::new();
        for kind in standard_weapons()
            .into_iter()
            .chain(standard_ammo())
            .chain(standard_misc())
            .chain(standard_structural())
        {
            catalog.add(kind);
        }
        catalog
    }
}

/// TOML representation of a catalog file
#[derive(Debug, Deserialize)]
struct TomlCatalog {
    #[serde(default)]
    equipment: Vec<EquipmentKind>,
}

const IS_STANDARD: TechInfo = TechInfo::new(TechBase::InnerSphere, 2300, RulesLevel::Introductory);
const CLAN_STANDARD: TechInfo = TechInfo::new(TechBase::Clan, 2824, RulesLevel::Standard);

fn tech(base: TechBase, year: u16, level: RulesLevel) -> TechInfo {
    TechInfo::new(base, year, level)
}

fn weapon(id: &str, name: &str, kind: WeaponKind, tons: f64, crits: u8) -> EquipmentKind {
    EquipmentKind::new(id, name, EquipmentCategory::Weapon(kind), tons, crits)
}

fn ammo(id: &str, name: &str, kind: WeaponKind) -> EquipmentKind {
    EquipmentKind::new(id, name, EquipmentCategory::Ammo(kind), 1.0, 1)
}

fn misc(id: &str, name: &str, kind: MiscKind, tons: f64, crits: u8) -> EquipmentKind {
    EquipmentKind::new(id, name, EquipmentCategory::Misc(kind), tons, crits)
}

fn standard_weapons() -> Vec<EquipmentKind> {
    use WeaponKind::*;
    vec![
        weapon("ISSmallLaser", "Small Laser", Laser, 0.5, 1).with_tech(IS_STANDARD),
        weapon("ISMediumLaser", "Medium Laser", Laser, 1.0, 1).with_tech(IS_STANDARD),
        weapon("ISLargeLaser", "Large Laser", Laser, 5.0, 2).with_tech(IS_STANDARD),
        weapon("ISMediumPulseLaser", "Medium Pulse Laser", PulseLaser, 2.0, 1)
            .with_tech(tech(TechBase::InnerSphere, 2609, RulesLevel::Standard)),
        weapon("CLERMediumLaser", "ER Medium Laser", Laser, 1.0, 1).with_tech(CLAN_STANDARD),
        weapon("ISPPC", "PPC", Ppc, 7.0, 3).with_tech(IS_STANDARD),
        weapon("ISFlamer", "Flamer", Flamer, 1.0, 1).with_tech(IS_STANDARD),
        weapon("ISMachineGun", "Machine Gun", MachineGun, 0.5, 1).with_tech(IS_STANDARD),
        weapon("ISAC5", "AC/5", Autocannon, 8.0, 4).with_tech(IS_STANDARD),
        weapon("ISAC10", "AC/10", Autocannon, 12.0, 7).with_tech(IS_STANDARD),
        weapon("ISAC20", "AC/20", Autocannon, 14.0, 10).with_tech(IS_STANDARD),
        weapon("ISUltraAC5", "Ultra AC/5", UltraAutocannon, 9.0, 5)
            .with_tech(tech(TechBase::InnerSphere, 2640, RulesLevel::Standard)),
        weapon("ISLBXAC10", "LB 10-X AC", LbxAutocannon, 11.0, 6)
            .with_tech(tech(TechBase::InnerSphere, 2595, RulesLevel::Standard)),
        weapon("ISGaussRifle", "Gauss Rifle", Gauss, 15.0, 7)
            .with_tech(tech(TechBase::InnerSphere, 2590, RulesLevel::Standard)),
        weapon("ISHeavyGaussRifle", "Heavy Gauss Rifle", HeavyGauss, 18.0, 11)
            .with_tech(tech(TechBase::InnerSphere, 3061, RulesLevel::Advanced)),
        weapon("ISLRM10", "LRM 10", Lrm, 5.0, 2).with_tech(IS_STANDARD),
        weapon("ISLRM20", "LRM 20", Lrm, 10.0, 5).with_tech(IS_STANDARD),
        weapon("ISSRM4", "SRM 4", Srm, 2.0, 1).with_tech(IS_STANDARD),
        weapon("ISArrowIV", "Arrow IV", Artillery, 15.0, 15)
            .with_tech(tech(TechBase::InnerSphere, 2600, RulesLevel::Advanced)),
        weapon("ISMekTaser", "Mek Taser", Taser, 4.0, 3)
            .with_tech(tech(TechBase::InnerSphere, 3067, RulesLevel::Advanced)),
        weapon("ISVehicularGrenadeLauncher", "Vehicular Grenade Launcher", VehicleGrenadeLauncher, 0.5, 1)
            .with_tech(tech(TechBase::All, 3054, RulesLevel::Advanced)),
    ]
}

fn standard_ammo() -> Vec<EquipmentKind> {
    use WeaponKind::*;
    vec![
        ammo("ISMG Ammo", "MG Ammo", MachineGun).with_tech(IS_STANDARD),
        ammo("ISAC5 Ammo", "AC/5 Ammo", Autocannon).with_tech(IS_STANDARD),
        ammo("ISAC10 Ammo", "AC/10 Ammo", Autocannon).with_tech(IS_STANDARD),
        ammo("ISAC20 Ammo", "AC/20 Ammo", Autocannon).with_tech(IS_STANDARD),
        ammo("ISGauss Ammo", "Gauss Ammo", Gauss)
            .with_tech(tech(TechBase::InnerSphere, 2590, RulesLevel::Standard)),
        ammo("ISLRM10 Ammo", "LRM 10 Ammo", Lrm).with_tech(IS_STANDARD),
        ammo("ISLRM20 Ammo", "LRM 20 Ammo", Lrm).with_tech(IS_STANDARD),
        ammo("ISSRM4 Ammo", "SRM 4 Ammo", Srm).with_tech(IS_STANDARD),
        ammo("ISArrowIV Ammo", "Arrow IV Ammo", Artillery)
            .with_tech(tech(TechBase::InnerSphere, 2600, RulesLevel::Advanced)),
    ]
}

fn standard_misc() -> Vec<EquipmentKind> {
    use MiscKind::*;
    let advanced = |year| tech(TechBase::InnerSphere, year, RulesLevel::Advanced);
    let experimental = |year| tech(TechBase::InnerSphere, year, RulesLevel::Experimental);
    let is_standard = |year| tech(TechBase::InnerSphere, year, RulesLevel::Standard);
    vec![
        misc("Heat Sink", "Heat Sink", HeatSink(HeatSinkKind::Single), 1.0, 1)
            .with_tech(TechInfo::universal()),
        misc("ISDoubleHeatSink", "Double Heat Sink", HeatSink(HeatSinkKind::Double), 1.0, 3)
            .with_tech(is_standard(2567)),
        misc("ISDoubleHeatSinkPrototype", "Double Heat Sink (Freezer)", HeatSink(HeatSinkKind::PrototypeDouble), 1.0, 3)
            .with_tech(experimental(3022)),
        misc("IS1 Compact Heat Sink", "1 Compact Heat Sink", HeatSink(HeatSinkKind::Compact), 1.5, 1)
            .with_tech(experimental(3058)),
        misc("JumpJet", "Jump Jet", JumpJet(JumpJetKind::Standard), 0.5, 1)
            .with_tech(TechInfo::universal()),
        misc("ImprovedJump Jet", "Improved Jump Jet", JumpJet(JumpJetKind::Improved), 1.0, 2)
            .with_tech(is_standard(3069)),
        misc("PrototypeJumpJet", "Primitive Prototype Jump Jet", JumpJet(JumpJetKind::Prototype), 0.5, 1)
            .with_tech(tech(TechBase::InnerSphere, 2464, RulesLevel::Advanced)),
        misc("MechanicalJumpBooster", "Mechanical Jump Booster", JumpBooster, 0.0, 0)
            .with_tech(experimental(3060)),
        misc("UMU", "UMU", Umu, 0.5, 1).with_tech(advanced(3066)),
        misc("ISPartialWing", "Partial Wing", PartialWing, 4.0, 8)
            .spreadable()
            .with_tech(experimental(3067)),
        misc("ISMASC", "MASC", Masc(MascKind::Standard), 2.0, 2).with_tech(is_standard(2740)),
        misc("Supercharger", "Supercharger", Masc(MascKind::Supercharger), 1.0, 1)
            .with_tech(advanced(3068)),
        misc("TSM", "Triple Strength Myomer", Myomer(MyomerKind::TripleStrength), 0.0, 6)
            .spreadable()
            .with_tech(is_standard(3050)),
        misc("Industrial TSM", "Industrial Triple Strength Myomer", Myomer(MyomerKind::IndustrialTripleStrength), 0.0, 12)
            .spreadable()
            .with_tech(experimental(3035)),
        misc("SCM", "Super-Cooled Myomer", Myomer(MyomerKind::SuperCooled), 0.0, 6)
            .spreadable()
            .with_tech(experimental(3092)),
        misc("ISActuatorEnhancementSystem", "Actuator Enhancement System", ActuatorEnhancement, 1.0, 1)
            .with_tech(advanced(3070)),
        misc("ISTargeting Computer", "Targeting Computer", TargetingComputer, 1.0, 1)
            .spreadable()
            .with_tech(is_standard(3062)),
        misc("ISArtemisIV", "Artemis IV FCS", Artemis(ArtemisKind::Iv), 1.0, 1)
            .with_tech(is_standard(2598)),
        misc("BeagleActiveProbe", "Beagle Active Probe", ActiveProbe, 1.5, 2)
            .with_tech(is_standard(2576)),
        misc("ISC3MasterUnit", "C3 Master Computer", C3(C3Kind::Master), 5.0, 5)
            .with_tech(is_standard(3050)),
        misc("ISC3SlaveUnit", "C3 Slave", C3(C3Kind::Slave), 1.0, 1).with_tech(is_standard(3050)),
        misc("ISGuardianECMSuite", "Guardian ECM Suite", Ecm, 1.5, 2).with_tech(is_standard(2597)),
        misc("ISNullSignatureSystem", "Null Signature System", NullSignature, 0.0, 7)
            .spreadable()
            .with_tech(advanced(2630)),
        misc("ISVoidSignatureSystem", "Void Signature System", VoidSignature, 0.0, 0)
            .with_tech(advanced(3070)),
        misc("ChameleonLightPolarizationShield", "Chameleon Light Polarization Shield", ChameleonShield, 0.0, 6)
            .spreadable()
            .with_tech(advanced(2630)),
        misc("ISHarJelII", "HarJel II Self-Repair System", HarJel(HarJelGrade::II), 2.0, 1)
            .with_tech(advanced(3136)),
        misc("ISHarJelIII", "HarJel III Self-Repair System", HarJel(HarJelGrade::III), 4.0, 2)
            .with_tech(advanced(3137)),
        misc("ISModularArmor", "Modular Armor", ModularArmor, 1.0, 1).with_tech(advanced(3072)),
        misc("Hatchet", "Hatchet", Physical(PhysicalWeaponKind::Hatchet), 4.0, 4)
            .with_tech(is_standard(3022)),
        misc("ISSword", "Sword", Physical(PhysicalWeaponKind::Sword), 3.0, 3)
            .with_tech(is_standard(3058)),
        misc("ISLance", "Lance", Physical(PhysicalWeaponKind::Lance), 3.0, 5)
            .with_tech(advanced(3064)),
        misc("ISPileDriver", "Pile Driver", Physical(PhysicalWeaponKind::PileDriver), 10.0, 8)
            .with_tech(tech(TechBase::All, 2100, RulesLevel::Advanced)),
        misc("ISChainsaw", "Chainsaw", Physical(PhysicalWeaponKind::Chainsaw), 5.0, 5)
            .with_tech(tech(TechBase::All, 2100, RulesLevel::Advanced)),
        misc("ISMediumShield", "Medium Shield", Physical(PhysicalWeaponKind::Shield(ItemSize::Medium)), 5.0, 5)
            .with_tech(advanced(3067)),
        misc("ISClaw", "Claws", Claws, 4.0, 4).with_tech(advanced(3060)),
        misc("ISSalvageArm", "Salvage Arm", SalvageArm, 3.0, 2)
            .with_tech(tech(TechBase::All, 2400, RulesLevel::Standard)),
        misc("ISHeadTurret", "Head Turret", HeadTurret, 0.5, 1).with_tech(advanced(3055)),
        misc("ISShoulderTurret", "Shoulder Turret", ShoulderTurret, 0.5, 1).with_tech(advanced(3055)),
        misc("ISQuadTurret", "Quad Turret", QuadTurret, 0.5, 1).with_tech(advanced(3055)),
        misc("Tracks", "Tracks", Motive(MotiveKind::Tracks), 5.0, 4)
            .spreadable()
            .with_tech(tech(TechBase::All, 2440, RulesLevel::Advanced)),
        misc("QuadVeeWheels", "QuadVee Wheels", Motive(MotiveKind::QuadVeeWheels), 5.0, 4)
            .spreadable()
            .with_tech(tech(TechBase::Clan, 3130, RulesLevel::Standard)),
        misc("Talons", "Talons", Talons, 5.0, 4).spreadable().with_tech(advanced(3072)),
        misc("RamPlate", "Ram Plate", RamPlate, 10.0, 3).spreadable().with_tech(advanced(3070)),
        misc("Environmental Sealing", "Environmental Sealing", EnvironmentalSealing, 5.0, 8)
            .spreadable()
            .with_tech(tech(TechBase::All, 2350, RulesLevel::Standard)),
        misc("BlueShield", "Blue Shield Particle Field Damper", BlueShield, 3.0, 7)
            .spreadable()
            .with_tech(experimental(3053)),
        misc("ISDroneControlConsole", "Drone Control Console", DroneControlConsole, 1.0, 1)
            .with_tech(experimental(2520)),
        misc("RemoteDroneCommandConsole", "Remote Drone Command Console", RemoteDroneCommandConsole, 1.0, 1)
            .with_tech(experimental(3071)),
        misc("MASH", "MASH Core Component", Mash, 3.5, 1)
            .with_tech(tech(TechBase::All, 2300, RulesLevel::Advanced)),
        misc("ISMobileHPG", "Ground-Mobile HPG", MobileHpg, 10.0, 12)
            .spreadable()
            .with_tech(advanced(2751)),
        misc("LightFluidSuctionSystem", "Light Fluid Suction System", LightFluidSuction, 0.5, 1)
            .with_tech(tech(TechBase::All, 2400, RulesLevel::Standard)),
        misc("FuelTank", "Fuel Tank", FuelTank, 1.0, 1)
            .with_tech(tech(TechBase::All, 2300, RulesLevel::Standard)),
        misc("ISCASE", "CASE", Case, 0.5, 1).with_tech(is_standard(2476)),
        misc("Ladder", "Ladder", Ladder, 0.0, 1).with_tech(tech(TechBase::All, 2300, RulesLevel::Standard)),
        misc("LightBridgeLayer", "Light Bridgelayer", BridgeLayer(ItemSize::Small), 1.0, 2)
            .with_tech(tech(TechBase::All, 2300, RulesLevel::Standard)),
        misc("LiftHoist", "Lift Hoist", LiftHoist, 3.0, 3)
            .with_tech(tech(TechBase::All, 2300, RulesLevel::Standard)),
        misc("ISAntiPersonnelPod", "A-Pod", ApPod, 0.5, 1).with_tech(is_standard(3055)),
        misc("EjectionSeat", "Ejection Seat", EjectionSeat, 0.5, 1)
            .with_tech(tech(TechBase::All, 2300, RulesLevel::Standard)),
        misc("FullHeadEjectionSystem", "Full-Head Ejection System", FullHeadEjection, 0.5, 1)
            .with_tech(advanced(3023)),
        misc("EmergencyCoolantSystem", "Emergency Coolant System", EmergencyCoolant, 3.0, 3)
            .with_tech(experimental(3049)),
        misc("Dumper", "Dumper", Dumper, 1.0, 1).with_tech(tech(TechBase::All, 2300, RulesLevel::Standard)),
        misc("BombBay", "Bomb Bay", BombBay, 1.0, 1).with_tech(experimental(2500)),
        misc("ISLimitedAmphibiousChassis", "Limited Amphibious Chassis", Amphibious(AmphibiousKind::Limited), 0.0, 0)
            .with_tech(tech(TechBase::All, 2300, RulesLevel::Standard)),
    ]
}

fn standard_structural() -> Vec<EquipmentKind> {
    use MiscKind::*;
    vec![
        misc("ISEndoSteel", "Endo Steel", StructureSlot(StructureType::EndoSteel), 0.0, 1)
            .spreadable()
            .with_tech(tech(TechBase::InnerSphere, 2487, RulesLevel::Standard)),
        misc("ISEndoComposite", "Endo-Composite", StructureSlot(StructureType::EndoComposite), 0.0, 1)
            .spreadable()
            .with_tech(tech(TechBase::InnerSphere, 3067, RulesLevel::Advanced)),
        misc("ISFerroFibrous", "Ferro-Fibrous", ArmorSlot(ArmorType::FerroFibrous), 0.0, 1)
            .spreadable()
            .with_tech(tech(TechBase::InnerSphere, 2571, RulesLevel::Standard)),
        misc("ISStealth", "Stealth Armor", ArmorSlot(ArmorType::Stealth), 0.0, 1)
            .spreadable()
            .with_tech(tech(TechBase::InnerSphere, 3063, RulesLevel::Standard)),
    ]
}
