//! Construction components and their weight and slot formulas
//!
//! All tonnages are returned already rounded the way the construction rules
//! round them; callers only add them up.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::catalog::tech::{RulesLevel, TechBase, TechInfo};
use crate::core::config::WeightCeiling;
use crate::unit::location::Location;

/// Standard fusion engine tonnage for ratings 10 through 500, step 5
const FUSION_WEIGHT: [f64; 99] = [
    0.5, 0.5, 0.5, 0.5, 1.0, 1.0, 1.0, 1.0, 1.5, 1.5, // 10-55
    1.5, 2.0, 2.0, 2.0, 2.5, 2.5, 3.0, 3.0, 3.0, 3.5, // 60-105
    3.5, 4.0, 4.0, 4.0, 4.5, 4.5, 5.0, 5.0, 5.5, 5.5, // 110-155
    6.0, 6.0, 6.0, 7.0, 7.0, 7.5, 7.5, 8.0, 8.5, 8.5, // 160-205
    9.0, 9.5, 10.0, 10.0, 10.5, 11.0, 11.5, 12.0, 12.5, 13.0, // 210-255
    13.5, 14.0, 14.5, 15.5, 16.0, 16.5, 17.5, 18.0, 19.0, 19.5, // 260-305
    20.5, 21.5, 22.5, 23.5, 24.5, 25.5, 27.0, 28.5, 29.5, 31.5, // 310-355
    33.0, 34.5, 36.5, 38.5, 41.0, 43.5, 46.0, 49.0, 52.5, 56.5, // 360-405
    61.0, 66.5, 72.5, 79.5, 87.5, 97.0, 107.5, 119.5, 133.5, 150.0, // 410-455
    168.5, 190.0, 214.5, 243.0, 275.5, 313.0, 356.0, 405.5, 462.5, // 460-500
];

/// Internal structure points (centre torso, side torso, arm, leg), 10-100 t
const STANDARD_STRUCTURE: [[u16; 4]; 19] = [
    [4, 3, 1, 2],
    [5, 4, 2, 3],
    [6, 5, 3, 4],
    [8, 6, 4, 6],
    [10, 7, 5, 7],
    [11, 8, 6, 8],
    [12, 10, 6, 10],
    [14, 11, 7, 11],
    [16, 12, 8, 12],
    [18, 13, 9, 13],
    [20, 14, 10, 14],
    [21, 15, 10, 15],
    [22, 15, 11, 15],
    [23, 16, 12, 16],
    [25, 17, 13, 17],
    [27, 18, 14, 18],
    [29, 19, 15, 19],
    [30, 20, 16, 20],
    [31, 21, 17, 21],
];

/// Internal structure points for superheavy chassis, 105-200 t
const SUPERHEAVY_STRUCTURE: [[u16; 4]; 20] = [
    [32, 22, 17, 22],
    [33, 23, 18, 23],
    [35, 24, 19, 24],
    [36, 25, 20, 25],
    [38, 26, 21, 26],
    [39, 27, 21, 27],
    [41, 28, 22, 28],
    [42, 29, 23, 29],
    [44, 31, 24, 31],
    [45, 32, 25, 32],
    [47, 33, 26, 33],
    [48, 34, 26, 34],
    [50, 35, 27, 35],
    [51, 36, 28, 36],
    [53, 37, 29, 37],
    [54, 38, 30, 38],
    [56, 39, 31, 39],
    [57, 40, 31, 40],
    [59, 41, 32, 41],
    [60, 42, 33, 42],
];

/// Internal structure points of a location for the given tonnage
///
/// Tonnage is rounded down to a multiple of five and clamped into the table.
pub fn internal_structure(tonnage: f64, location: Location) -> u16 {
    let tons = (tonnage.max(10.0) as u32 / 5) * 5;
    let row = if tons > 100 {
        let index = ((tons.min(200) - 105) / 5) as usize;
        SUPERHEAVY_STRUCTURE[index]
    } else {
        let index = ((tons - 10) / 5) as usize;
        STANDARD_STRUCTURE[index]
    };
    match location {
        Location::Head => {
            if tons > 100 {
                4
            } else {
                3
            }
        }
        Location::CenterTorso => row[0],
        Location::LeftTorso | Location::RightTorso => row[1],
        Location::LeftArm | Location::RightArm => row[2],
        Location::LeftLeg | Location::RightLeg | Location::CenterLeg => row[3],
    }
}

// ============================================================================
// ENGINE
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EngineType {
    Fusion,
    Xl,
    Light,
    Xxl,
    Compact,
    Ice,
    FuelCell,
    Fission,
    None,
}

impl EngineType {
    fn weight_multiplier(self) -> f64 {
        match self {
            EngineType::Fusion => 1.0,
            EngineType::Xl => 0.5,
            EngineType::Light => 0.75,
            EngineType::Xxl => 1.0 / 3.0,
            EngineType::Compact => 1.5,
            EngineType::Ice => 2.0,
            EngineType::FuelCell => 1.2,
            EngineType::Fission => 1.75,
            EngineType::None => 0.0,
        }
    }

    pub fn is_fusion(self) -> bool {
        matches!(
            self,
            EngineType::Fusion
                | EngineType::Xl
                | EngineType::Light
                | EngineType::Xxl
                | EngineType::Compact
        )
    }

    /// Engines that can power energy weapons without amplifiers
    pub fn needs_power_amplifiers(self) -> bool {
        matches!(self, EngineType::Ice | EngineType::FuelCell | EngineType::None)
    }
}

impl fmt::Display for EngineType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EngineType::Fusion => "Fusion",
            EngineType::Xl => "XL Fusion",
            EngineType::Light => "Light Fusion",
            EngineType::Xxl => "XXL Fusion",
            EngineType::Compact => "Compact Fusion",
            EngineType::Ice => "I.C.E.",
            EngineType::FuelCell => "Fuel Cell",
            EngineType::Fission => "Fission",
            EngineType::None => "No Engine",
        };
        f.write_str(name)
    }
}

/// Why an engine cannot be built as declared
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineProblem {
    RatingNotMultipleOfFive(u16),
    RatingOutOfRange(u16),
    LargeFlagMismatch { rating: u16, large: bool },
}

impl fmt::Display for EngineProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineProblem::RatingNotMultipleOfFive(rating) => {
                write!(f, "Engine: rating {} is not a multiple of 5", rating)
            }
            EngineProblem::RatingOutOfRange(rating) => {
                write!(f, "Engine: rating {} is outside 10-500", rating)
            }
            EngineProblem::LargeFlagMismatch { rating, large: true } => {
                write!(f, "Engine: rating {} is too small for a large engine", rating)
            }
            EngineProblem::LargeFlagMismatch { rating, large: false } => {
                write!(f, "Engine: rating {} requires a large engine", rating)
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Engine {
    #[serde(rename = "type")]
    pub engine_type: EngineType,
    pub rating: u16,
    #[serde(default)]
    pub large: bool,
    /// Clan construction (fewer side torso slots for XL and XXL)
    #[serde(default)]
    pub clan: bool,
}

impl Engine {
    pub fn new(engine_type: EngineType, rating: u16) -> Self {
        Self {
            engine_type,
            rating,
            large: rating > 400,
            clan: false,
        }
    }

    pub fn fusion(rating: u16) -> Self {
        Self::new(EngineType::Fusion, rating)
    }

    pub fn clan(mut self) -> Self {
        self.clan = true;
        self
    }

    pub fn is_fusion(&self) -> bool {
        self.engine_type.is_fusion()
    }

    pub fn problems(&self) -> Vec<EngineProblem> {
        let mut problems = Vec::new();
        if self.engine_type == EngineType::None {
            return problems;
        }
        if self.rating % 5 != 0 {
            problems.push(EngineProblem::RatingNotMultipleOfFive(self.rating));
        }
        if !(10..=500).contains(&self.rating) {
            problems.push(EngineProblem::RatingOutOfRange(self.rating));
        } else if (self.rating > 400) != self.large {
            problems.push(EngineProblem::LargeFlagMismatch {
                rating: self.rating,
                large: self.large,
            });
        }
        problems
    }

    pub fn is_valid(&self) -> bool {
        self.problems().is_empty()
    }

    fn base_weight(&self) -> f64 {
        let clamped = self.rating.clamp(10, 500);
        let index = ((clamped.div_ceil(5) * 5 - 10) / 5) as usize;
        FUSION_WEIGHT[index.min(FUSION_WEIGHT.len() - 1)]
    }

    pub fn weight(&self) -> f64 {
        if self.engine_type == EngineType::None {
            return 0.0;
        }
        WeightCeiling::HalfTon.round_up(self.base_weight() * self.engine_type.weight_multiplier())
    }

    /// Engine slots required in each side torso
    pub fn side_torso_slots(&self) -> usize {
        let base = match (self.engine_type, self.clan) {
            (EngineType::Xl, false) => 3,
            (EngineType::Xl, true) => 2,
            (EngineType::Light, _) => 2,
            (EngineType::Xxl, false) => 6,
            (EngineType::Xxl, true) => 4,
            _ => 0,
        };
        match (self.large, base) {
            (false, _) => base,
            (true, 0) => 2,
            (true, base) => base + 1,
        }
    }

    /// Engine slots required in the centre torso
    pub fn center_torso_slots(&self) -> usize {
        match self.engine_type {
            EngineType::None => 0,
            EngineType::Compact => 3,
            _ => 6,
        }
    }

    /// Heat sinks the engine provides without charging their tonnage
    pub fn weight_free_heat_sinks(&self) -> u16 {
        match self.engine_type {
            EngineType::Ice | EngineType::FuelCell | EngineType::None => 0,
            _ => 10,
        }
    }

    /// Heat sinks the engine can hold internally without taking slots
    pub fn integral_heat_sink_capacity(&self, compact: bool) -> u16 {
        if self.engine_type == EngineType::None {
            return 0;
        }
        let capacity = self.rating / 25;
        if compact {
            capacity * 2
        } else {
            capacity
        }
    }

    pub fn tech(&self) -> TechInfo {
        match (self.engine_type, self.clan) {
            (EngineType::Fusion, _) | (EngineType::None, _) => TechInfo::universal(),
            (EngineType::Xl, false) => TechInfo::new(TechBase::InnerSphere, 2579, RulesLevel::Standard),
            (EngineType::Xl, true) => TechInfo::new(TechBase::Clan, 2827, RulesLevel::Standard),
            (EngineType::Light, _) => TechInfo::new(TechBase::InnerSphere, 3062, RulesLevel::Standard),
            (EngineType::Xxl, false) => TechInfo::new(TechBase::InnerSphere, 3055, RulesLevel::Experimental),
            (EngineType::Xxl, true) => TechInfo::new(TechBase::Clan, 3055, RulesLevel::Experimental),
            (EngineType::Compact, _) => TechInfo::new(TechBase::InnerSphere, 3068, RulesLevel::Standard),
            (EngineType::Ice, _) => TechInfo::new(TechBase::All, 2300, RulesLevel::Standard),
            (EngineType::FuelCell, _) => TechInfo::new(TechBase::All, 2300, RulesLevel::Standard),
            (EngineType::Fission, _) => TechInfo::new(TechBase::All, 2470, RulesLevel::Standard),
        }
    }
}

impl fmt::Display for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.large {
            write!(f, "{} Large {}", self.rating, self.engine_type)
        } else {
            write!(f, "{} {}", self.rating, self.engine_type)
        }
    }
}

// ============================================================================
// GYRO
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GyroType {
    Standard,
    Xl,
    Compact,
    HeavyDuty,
    Superheavy,
    None,
}

impl GyroType {
    pub fn weight(self, engine_rating: u16) -> f64 {
        let base = (engine_rating as f64 / 100.0).ceil();
        let raw = match self {
            GyroType::Standard => base,
            GyroType::Xl => base / 2.0,
            GyroType::Compact => base * 1.5,
            GyroType::HeavyDuty | GyroType::Superheavy => base * 2.0,
            GyroType::None => 0.0,
        };
        WeightCeiling::HalfTon.round_up(raw)
    }

    /// Gyro slots in the centre torso
    pub fn slots(self) -> usize {
        match self {
            GyroType::Standard | GyroType::HeavyDuty => 4,
            GyroType::Xl => 6,
            GyroType::Compact | GyroType::Superheavy => 2,
            GyroType::None => 0,
        }
    }

    pub fn tech(self) -> TechInfo {
        match self {
            GyroType::Standard => TechInfo::universal(),
            GyroType::Xl | GyroType::HeavyDuty => {
                TechInfo::new(TechBase::InnerSphere, 3067, RulesLevel::Standard)
            }
            GyroType::Compact => TechInfo::new(TechBase::InnerSphere, 3068, RulesLevel::Standard),
            GyroType::Superheavy => TechInfo::new(TechBase::All, 3076, RulesLevel::Advanced),
            GyroType::None => TechInfo::new(TechBase::All, 3076, RulesLevel::Experimental),
        }
    }
}

impl fmt::Display for GyroType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GyroType::Standard => "Standard Gyro",
            GyroType::Xl => "XL Gyro",
            GyroType::Compact => "Compact Gyro",
            GyroType::HeavyDuty => "Heavy Duty Gyro",
            GyroType::Superheavy => "Superheavy Gyro",
            GyroType::None => "None",
        };
        f.write_str(name)
    }
}

// ============================================================================
// COCKPIT
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CockpitType {
    Standard,
    Small,
    TorsoMounted,
    Dual,
    CommandConsole,
    SmallCommandConsole,
    Industrial,
    Primitive,
    PrimitiveIndustrial,
    Superheavy,
    SuperheavyIndustrial,
    SuperheavyCommandConsole,
    Tripod,
    TripodIndustrial,
    SuperheavyTripod,
    SuperheavyTripodIndustrial,
    Interface,
    QuadVee,
    Vrrp,
}

impl CockpitType {
    pub fn weight(self) -> f64 {
        match self {
            CockpitType::Small => 2.0,
            CockpitType::TorsoMounted
            | CockpitType::Dual
            | CockpitType::Superheavy
            | CockpitType::SuperheavyIndustrial
            | CockpitType::Tripod
            | CockpitType::TripodIndustrial
            | CockpitType::Interface
            | CockpitType::QuadVee => 4.0,
            CockpitType::Primitive
            | CockpitType::PrimitiveIndustrial
            | CockpitType::SuperheavyTripod
            | CockpitType::SuperheavyTripodIndustrial
            | CockpitType::SmallCommandConsole => 5.0,
            CockpitType::CommandConsole => 6.0,
            CockpitType::SuperheavyCommandConsole => 7.0,
            CockpitType::Standard | CockpitType::Industrial | CockpitType::Vrrp => 3.0,
        }
    }

    /// Where the cockpit system slot lives
    pub fn location(self) -> Location {
        match self {
            CockpitType::TorsoMounted | CockpitType::Vrrp => Location::CenterTorso,
            _ => Location::Head,
        }
    }

    /// Industrial cockpits lack advanced fire control
    pub fn is_industrial(self) -> bool {
        matches!(
            self,
            CockpitType::Industrial
                | CockpitType::PrimitiveIndustrial
                | CockpitType::SuperheavyIndustrial
                | CockpitType::TripodIndustrial
                | CockpitType::SuperheavyTripodIndustrial
        )
    }

    pub fn is_primitive(self) -> bool {
        matches!(self, CockpitType::Primitive | CockpitType::PrimitiveIndustrial)
    }

    pub fn is_command_console(self) -> bool {
        matches!(
            self,
            CockpitType::CommandConsole
                | CockpitType::SmallCommandConsole
                | CockpitType::SuperheavyCommandConsole
        )
    }

    pub fn tech(self) -> TechInfo {
        let all = |year, level| TechInfo::new(TechBase::All, year, level);
        let is = |year, level| TechInfo::new(TechBase::InnerSphere, year, level);
        match self {
            CockpitType::Standard => TechInfo::universal(),
            CockpitType::Small => is(3067, RulesLevel::Standard),
            CockpitType::TorsoMounted => is(3053, RulesLevel::Advanced),
            CockpitType::Dual => all(3074, RulesLevel::Experimental),
            CockpitType::CommandConsole => is(2625, RulesLevel::Advanced),
            CockpitType::SmallCommandConsole => all(3130, RulesLevel::Advanced),
            CockpitType::Industrial => all(2300, RulesLevel::Standard),
            CockpitType::Primitive => all(2430, RulesLevel::Standard),
            CockpitType::PrimitiveIndustrial => all(2300, RulesLevel::Standard),
            CockpitType::Superheavy | CockpitType::SuperheavyIndustrial => {
                all(3060, RulesLevel::Advanced)
            }
            CockpitType::SuperheavyCommandConsole => all(3130, RulesLevel::Advanced),
            CockpitType::Tripod | CockpitType::TripodIndustrial => all(2590, RulesLevel::Advanced),
            CockpitType::SuperheavyTripod | CockpitType::SuperheavyTripodIndustrial => {
                all(3135, RulesLevel::Advanced)
            }
            CockpitType::Interface => all(3074, RulesLevel::Experimental),
            CockpitType::QuadVee => TechInfo::new(TechBase::Clan, 3130, RulesLevel::Standard),
            CockpitType::Vrrp => is(3052, RulesLevel::Experimental),
        }
    }
}

impl fmt::Display for CockpitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CockpitType::Standard => "Standard Cockpit",
            CockpitType::Small => "Small Cockpit",
            CockpitType::TorsoMounted => "Torso-Mounted Cockpit",
            CockpitType::Dual => "Dual Cockpit",
            CockpitType::CommandConsole => "Command Console",
            CockpitType::SmallCommandConsole => "Small Command Console",
            CockpitType::Industrial => "Industrial Cockpit",
            CockpitType::Primitive => "Primitive Cockpit",
            CockpitType::PrimitiveIndustrial => "Primitive Industrial Cockpit",
            CockpitType::Superheavy => "Superheavy Cockpit",
            CockpitType::SuperheavyIndustrial => "Superheavy Industrial Cockpit",
            CockpitType::SuperheavyCommandConsole => "Superheavy Command Console",
            CockpitType::Tripod => "Tripod Cockpit",
            CockpitType::TripodIndustrial => "Tripod Industrial Cockpit",
            CockpitType::SuperheavyTripod => "Superheavy Tripod Cockpit",
            CockpitType::SuperheavyTripodIndustrial => "Superheavy Tripod Industrial Cockpit",
            CockpitType::Interface => "Interface Cockpit",
            CockpitType::QuadVee => "QuadVee Cockpit",
            CockpitType::Vrrp => "VRRP Cockpit",
        };
        f.write_str(name)
    }
}

// ============================================================================
// STRUCTURE
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StructureType {
    Standard,
    EndoSteel,
    EndoSteelPrototype,
    EndoComposite,
    Composite,
    Reinforced,
    Industrial,
}

impl StructureType {
    pub fn weight(self, tonnage: f64) -> f64 {
        let factor = match self {
            StructureType::Standard => 0.1,
            StructureType::EndoSteel | StructureType::EndoSteelPrototype => 0.05,
            StructureType::EndoComposite => 0.075,
            StructureType::Composite => 0.05,
            StructureType::Reinforced | StructureType::Industrial => 0.2,
        };
        WeightCeiling::HalfTon.round_up(tonnage * factor)
    }

    /// Critical slots the structure consumes
    pub fn slots(self, clan: bool) -> usize {
        match (self, clan) {
            (StructureType::EndoSteel, false) => 14,
            (StructureType::EndoSteel, true) => 7,
            (StructureType::EndoSteelPrototype, _) => 16,
            (StructureType::EndoComposite, false) => 7,
            (StructureType::EndoComposite, true) => 4,
            _ => 0,
        }
    }

    pub fn tech(self) -> TechInfo {
        let is = |year, level| TechInfo::new(TechBase::InnerSphere, year, level);
        match self {
            StructureType::Standard => TechInfo::universal(),
            StructureType::EndoSteel => is(2487, RulesLevel::Standard),
            StructureType::EndoSteelPrototype => is(2471, RulesLevel::Experimental),
            StructureType::EndoComposite => is(3067, RulesLevel::Advanced),
            StructureType::Composite => is(3061, RulesLevel::Advanced),
            StructureType::Reinforced => is(3057, RulesLevel::Advanced),
            StructureType::Industrial => TechInfo::new(TechBase::All, 2350, RulesLevel::Standard),
        }
    }
}

impl fmt::Display for StructureType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StructureType::Standard => "Standard",
            StructureType::EndoSteel => "Endo Steel",
            StructureType::EndoSteelPrototype => "Endo Steel Prototype",
            StructureType::EndoComposite => "Endo-Composite",
            StructureType::Composite => "Composite",
            StructureType::Reinforced => "Reinforced",
            StructureType::Industrial => "Industrial",
        };
        f.write_str(name)
    }
}

// ============================================================================
// ARMOR
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArmorType {
    Standard,
    FerroFibrous,
    LightFerro,
    HeavyFerro,
    Stealth,
    Reactive,
    Reflective,
    Hardened,
    Primitive,
    Industrial,
    HeavyIndustrial,
    Commercial,
}

impl ArmorType {
    pub fn points_per_ton(self, clan: bool) -> f64 {
        match (self, clan) {
            (ArmorType::FerroFibrous, false) => 17.92,
            (ArmorType::FerroFibrous, true) => 19.2,
            (ArmorType::LightFerro, _) => 16.96,
            (ArmorType::HeavyFerro, _) => 19.84,
            (ArmorType::Hardened, _) => 8.0,
            (ArmorType::Primitive, _) => 10.72,
            (ArmorType::Commercial, _) => 24.0,
            _ => 16.0,
        }
    }

    /// Critical slots the armor consumes
    pub fn slots(self, clan: bool) -> usize {
        match (self, clan) {
            (ArmorType::FerroFibrous, false) => 14,
            (ArmorType::FerroFibrous, true) => 7,
            (ArmorType::LightFerro, _) => 7,
            (ArmorType::HeavyFerro, _) => 21,
            (ArmorType::Stealth, _) => 12,
            (ArmorType::Reactive, false) => 14,
            (ArmorType::Reactive, true) => 7,
            (ArmorType::Reflective, false) => 10,
            (ArmorType::Reflective, true) => 5,
            _ => 0,
        }
    }

    /// Armor types a HarJel repair system can work with
    pub fn supports_harjel(self) -> bool {
        matches!(
            self,
            ArmorType::Standard
                | ArmorType::FerroFibrous
                | ArmorType::LightFerro
                | ArmorType::HeavyFerro
                | ArmorType::HeavyIndustrial
        )
    }

    pub fn tech(self) -> TechInfo {
        let is = |year, level| TechInfo::new(TechBase::InnerSphere, year, level);
        let all = |year, level| TechInfo::new(TechBase::All, year, level);
        match self {
            ArmorType::Standard => TechInfo::universal(),
            ArmorType::FerroFibrous => all(2571, RulesLevel::Standard),
            ArmorType::LightFerro => is(3067, RulesLevel::Standard),
            ArmorType::HeavyFerro => is(3069, RulesLevel::Standard),
            ArmorType::Stealth => is(3063, RulesLevel::Standard),
            ArmorType::Reactive => all(3063, RulesLevel::Advanced),
            ArmorType::Reflective => all(3058, RulesLevel::Advanced),
            ArmorType::Hardened => all(3047, RulesLevel::Advanced),
            ArmorType::Primitive => all(2300, RulesLevel::Standard),
            ArmorType::Industrial | ArmorType::HeavyIndustrial => all(2350, RulesLevel::Standard),
            ArmorType::Commercial => all(2300, RulesLevel::Standard),
        }
    }
}

impl fmt::Display for ArmorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ArmorType::Standard => "Standard",
            ArmorType::FerroFibrous => "Ferro-Fibrous",
            ArmorType::LightFerro => "Light Ferro-Fibrous",
            ArmorType::HeavyFerro => "Heavy Ferro-Fibrous",
            ArmorType::Stealth => "Stealth",
            ArmorType::Reactive => "Reactive",
            ArmorType::Reflective => "Reflective",
            ArmorType::Hardened => "Hardened",
            ArmorType::Primitive => "Primitive",
            ArmorType::Industrial => "Industrial",
            ArmorType::HeavyIndustrial => "Heavy Industrial",
            ArmorType::Commercial => "Commercial",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fusion_weights() {
        assert_eq!(Engine::fusion(250).weight(), 12.5);
        assert_eq!(Engine::fusion(100).weight(), 3.0);
        assert_eq!(Engine::fusion(400).weight(), 52.5);
        assert_eq!(Engine::new(EngineType::Xl, 300).weight(), 9.5);
        assert_eq!(Engine::new(EngineType::Light, 200).weight(), 6.5);
    }

    #[test]
    fn test_engine_slots() {
        assert_eq!(Engine::new(EngineType::Xl, 300).side_torso_slots(), 3);
        assert_eq!(Engine::new(EngineType::Xl, 300).clan().side_torso_slots(), 2);
        assert_eq!(Engine::new(EngineType::Xxl, 300).side_torso_slots(), 6);
        assert_eq!(Engine::fusion(300).side_torso_slots(), 0);
        assert_eq!(Engine::fusion(450).side_torso_slots(), 2);
        assert_eq!(Engine::new(EngineType::Xl, 450).side_torso_slots(), 4);
        assert_eq!(Engine::new(EngineType::Compact, 200).center_torso_slots(), 3);
        assert_eq!(Engine::fusion(200).center_torso_slots(), 6);
    }

    #[test]
    fn test_engine_validity() {
        assert!(Engine::fusion(250).is_valid());
        assert_eq!(
            Engine::fusion(253).problems(),
            vec![EngineProblem::RatingNotMultipleOfFive(253)]
        );
        let mut big = Engine::fusion(420);
        assert!(big.is_valid());
        big.large = false;
        assert!(!big.is_valid());
        assert!(!Engine::fusion(505).is_valid());
    }

    #[test]
    fn test_heat_sink_capacity() {
        assert_eq!(Engine::fusion(250).integral_heat_sink_capacity(false), 10);
        assert_eq!(Engine::fusion(250).integral_heat_sink_capacity(true), 20);
        assert_eq!(Engine::new(EngineType::Ice, 250).weight_free_heat_sinks(), 0);
        assert_eq!(Engine::new(EngineType::Fission, 250).weight_free_heat_sinks(), 10);
    }

    #[test]
    fn test_gyro_weights() {
        assert_eq!(GyroType::Standard.weight(250), 3.0);
        assert_eq!(GyroType::Xl.weight(250), 1.5);
        assert_eq!(GyroType::Compact.weight(250), 4.5);
        assert_eq!(GyroType::HeavyDuty.weight(250), 6.0);
        assert_eq!(GyroType::None.weight(250), 0.0);
    }

    #[test]
    fn test_structure_weight_and_slots() {
        assert_eq!(StructureType::Standard.weight(50.0), 5.0);
        assert_eq!(StructureType::EndoSteel.weight(55.0), 3.0);
        assert_eq!(StructureType::EndoSteel.slots(false), 14);
        assert_eq!(StructureType::EndoSteel.slots(true), 7);
    }

    #[test]
    fn test_internal_structure_tables() {
        assert_eq!(internal_structure(50.0, Location::CenterTorso), 16);
        assert_eq!(internal_structure(50.0, Location::LeftArm), 8);
        assert_eq!(internal_structure(100.0, Location::RightLeg), 21);
        assert_eq!(internal_structure(100.0, Location::Head), 3);
        assert_eq!(internal_structure(150.0, Location::CenterTorso), 45);
        assert_eq!(internal_structure(200.0, Location::Head), 4);
    }

    #[test]
    fn test_cockpit_locations() {
        assert_eq!(CockpitType::TorsoMounted.location(), Location::CenterTorso);
        assert_eq!(CockpitType::Standard.location(), Location::Head);
        assert_eq!(CockpitType::SuperheavyCommandConsole.weight(), 7.0);
    }
}
