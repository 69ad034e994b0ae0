//! Verifier configuration with documented defaults
//!
//! Every threshold the rule checks read lives here so a scenario designer can
//! relax or tighten the verifier from a TOML file without touching code.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::core::error::{Result, VerifierError};
use crate::core::types::WEIGHT_EPSILON;

/// Increment that computed weights are rounded up to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeightCeiling {
    Ton,
    HalfTon,
    QuarterTon,
    Kilo,
}

impl WeightCeiling {
    pub fn increment(self) -> f64 {
        match self {
            WeightCeiling::Ton => 1.0,
            WeightCeiling::HalfTon => 0.5,
            WeightCeiling::QuarterTon => 0.25,
            WeightCeiling::Kilo => 0.001,
        }
    }

    /// Round `value` up to the next multiple of this increment
    pub fn round_up(self, value: f64) -> f64 {
        let step = self.increment();
        // Values already on a step boundary must not be bumped by float noise
        (value / step - WEIGHT_EPSILON).ceil().max(0.0) * step
    }
}

/// Configuration for the verifier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VerifierConfig {
    // === WEIGHT ===
    /// Rounding increment for the weight budget of ordinary designs
    pub weight_ceiling: WeightCeiling,

    /// Rounding increment for very light designs
    ///
    /// Designs lighter than `fine_ceiling_below_tons` round to this instead.
    pub fine_weight_ceiling: WeightCeiling,

    /// Tonnage below which `fine_weight_ceiling` applies
    pub fine_ceiling_below_tons: f64,

    /// Report designs that weigh less than their declared tonnage
    pub show_underweight: bool,

    /// Report designs that weigh more than their declared tonnage
    pub show_overweight: bool,

    // === CHECK TOGGLES ===
    pub check_armor: bool,
    pub check_criticals: bool,
    pub check_failed_equipment: bool,
    pub check_intro_year: bool,

    // === ARMOR ===
    /// Absolute armor cap for the head of a normal design
    pub head_armor_cap: u16,

    /// Absolute armor cap for the head of a superheavy design
    pub superheavy_head_armor_cap: u16,

    // === PRINTOUT ===
    /// Column width of labels in the full-unit printout
    pub print_label_width: usize,
}

impl Default for VerifierConfig {
    fn default() -> Self {
        Self {
            weight_ceiling: WeightCeiling::HalfTon,
            fine_weight_ceiling: WeightCeiling::Kilo,
            fine_ceiling_below_tons: 10.0,
            show_underweight: false,
            show_overweight: true,

            check_armor: true,
            check_criticals: true,
            check_failed_equipment: true,
            check_intro_year: true,

            head_armor_cap: 9,
            superheavy_head_armor_cap: 12,

            print_label_width: 30,
        }
    }
}

impl VerifierConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Weight rounding increment for a design of the given tonnage
    pub fn ceiling_for(&self, tonnage: f64) -> WeightCeiling {
        if tonnage < self.fine_ceiling_below_tons {
            self.fine_weight_ceiling
        } else {
            self.weight_ceiling
        }
    }

    /// Parse a config from TOML; missing keys take their defaults
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: VerifierConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if self.fine_weight_ceiling.increment() > self.weight_ceiling.increment() {
            return Err(VerifierError::InvalidConfig(format!(
                "fine_weight_ceiling ({:?}) is coarser than weight_ceiling ({:?})",
                self.fine_weight_ceiling, self.weight_ceiling
            )));
        }

        if self.fine_ceiling_below_tons < 0.0 {
            return Err(VerifierError::InvalidConfig(
                "fine_ceiling_below_tons must not be negative".into(),
            ));
        }

        if self.superheavy_head_armor_cap < self.head_armor_cap {
            return Err(VerifierError::InvalidConfig(format!(
                "superheavy_head_armor_cap ({}) should be >= head_armor_cap ({})",
                self.superheavy_head_armor_cap, self.head_armor_cap
            )));
        }

        Ok(())
    }
}

// === GLOBAL CONFIG ACCESS ===

use std::sync::OnceLock;

static CONFIG: OnceLock<VerifierConfig> = OnceLock::new();

/// Get the global verifier config (initializes with defaults if not set)
pub fn config() -> &'static VerifierConfig {
    CONFIG.get_or_init(VerifierConfig::default)
}

/// Set the global verifier config (can only be called once)
///
/// Returns Err if config was already set.
pub fn set_config(config: VerifierConfig) -> std::result::Result<(), VerifierConfig> {
    CONFIG.set(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_half_ton_rounding() {
        assert_eq!(WeightCeiling::HalfTon.round_up(12.5), 12.5);
        assert_eq!(WeightCeiling::HalfTon.round_up(12.51), 13.0);
        assert_eq!(WeightCeiling::HalfTon.round_up(0.1), 0.5);
        assert_eq!(WeightCeiling::HalfTon.round_up(0.0), 0.0);
    }

    #[test]
    fn test_rounding_tolerates_float_noise() {
        // 0.1 * 3 is 0.30000000000000004
        let noisy = 0.1 * 3.0 + 4.7;
        assert_eq!(WeightCeiling::HalfTon.round_up(noisy), 5.0);
        assert_eq!(WeightCeiling::Ton.round_up(3.0000000001), 3.0);
    }

    #[test]
    fn test_fine_ceiling_for_light_designs() {
        let config = VerifierConfig::default();
        assert_eq!(config.ceiling_for(5.0), WeightCeiling::Kilo);
        assert_eq!(config.ceiling_for(20.0), WeightCeiling::HalfTon);
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(VerifierConfig::default().validate().is_ok());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = VerifierConfig::from_toml_str("show_underweight = true\n").unwrap();
        assert!(config.show_underweight);
        assert_eq!(config.head_armor_cap, 9);
        assert_eq!(config.weight_ceiling, WeightCeiling::HalfTon);
    }

    #[test]
    fn test_inconsistent_ceiling_rejected() {
        let content = "weight_ceiling = \"kilo\"\nfine_weight_ceiling = \"ton\"\n";
        assert!(VerifierConfig::from_toml_str(content).is_err());
    }
}
