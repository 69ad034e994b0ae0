//! Tech metadata: who can build an item, from when, under which rules

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::types::Year;

/// Which tech tree an item belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TechBase {
    /// Available to both tech trees
    All,
    InnerSphere,
    Clan,
}

/// Tech tree a design is built under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DesignTechBase {
    InnerSphere,
    Clan,
    /// May freely combine both trees
    Mixed,
}

impl DesignTechBase {
    pub fn permits(self, base: TechBase) -> bool {
        match (self, base) {
            (_, TechBase::All) | (DesignTechBase::Mixed, _) => true,
            (DesignTechBase::InnerSphere, TechBase::InnerSphere) => true,
            (DesignTechBase::Clan, TechBase::Clan) => true,
            _ => false,
        }
    }

    pub fn is_clan(self) -> bool {
        self == DesignTechBase::Clan
    }
}

/// Rules level, ordered from most to least restrictive setting
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RulesLevel {
    Introductory,
    Standard,
    Advanced,
    Experimental,
    Unofficial,
}

impl fmt::Display for RulesLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RulesLevel::Introductory => "Introductory",
            RulesLevel::Standard => "Standard",
            RulesLevel::Advanced => "Advanced",
            RulesLevel::Experimental => "Experimental",
            RulesLevel::Unofficial => "Unofficial",
        };
        f.write_str(name)
    }
}

impl fmt::Display for TechBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TechBase::All => "All",
            TechBase::InnerSphere => "Inner Sphere",
            TechBase::Clan => "Clan",
        };
        f.write_str(name)
    }
}

impl fmt::Display for DesignTechBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DesignTechBase::InnerSphere => "Inner Sphere",
            DesignTechBase::Clan => "Clan",
            DesignTechBase::Mixed => "Mixed",
        };
        f.write_str(name)
    }
}

/// Availability metadata carried by every catalog entry and component type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TechInfo {
    pub base: TechBase,
    pub intro_year: Year,
    pub rules_level: RulesLevel,
}

impl TechInfo {
    pub const fn new(base: TechBase, intro_year: Year, rules_level: RulesLevel) -> Self {
        Self {
            base,
            intro_year,
            rules_level,
        }
    }

    /// Available to everyone since the dawn of the era
    pub const fn universal() -> Self {
        Self::new(TechBase::All, 2300, RulesLevel::Introductory)
    }

    pub fn is_clan(&self) -> bool {
        self.base == TechBase::Clan
    }
}

impl Default for TechInfo {
    fn default() -> Self {
        Self::universal()
    }
}

/// The era and rules a design is built under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TechSetting {
    pub year: Year,
    pub base: DesignTechBase,
    pub rules_level: RulesLevel,
    /// Separate ceiling for ammunition; falls back to `rules_level`
    #[serde(default)]
    pub ammo_rules_level: Option<RulesLevel>,
}

impl TechSetting {
    pub fn new(year: Year, base: DesignTechBase, rules_level: RulesLevel) -> Self {
        Self {
            year,
            base,
            rules_level,
            ammo_rules_level: None,
        }
    }

    pub fn ammo_level(&self) -> RulesLevel {
        self.ammo_rules_level.unwrap_or(self.rules_level)
    }
}

impl Default for TechSetting {
    fn default() -> Self {
        Self::new(3050, DesignTechBase::InnerSphere, RulesLevel::Standard)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rules_level_ordering() {
        assert!(RulesLevel::Introductory < RulesLevel::Standard);
        assert!(RulesLevel::Advanced < RulesLevel::Experimental);
        assert!(RulesLevel::Experimental < RulesLevel::Unofficial);
    }

    #[test]
    fn test_tech_base_permits() {
        assert!(DesignTechBase::InnerSphere.permits(TechBase::All));
        assert!(DesignTechBase::InnerSphere.permits(TechBase::InnerSphere));
        assert!(!DesignTechBase::InnerSphere.permits(TechBase::Clan));
        assert!(!DesignTechBase::Clan.permits(TechBase::InnerSphere));
        assert!(DesignTechBase::Mixed.permits(TechBase::Clan));
    }

    #[test]
    fn test_ammo_level_falls_back() {
        let mut setting = TechSetting::default();
        assert_eq!(setting.ammo_level(), RulesLevel::Standard);
        setting.ammo_rules_level = Some(RulesLevel::Advanced);
        assert_eq!(setting.ammo_level(), RulesLevel::Advanced);
    }
}
