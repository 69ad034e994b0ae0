//! Weight budget: every component's tonnage against the declared tonnage

use serde::{Deserialize, Serialize};

use crate::cache::CachedUnitState;
use crate::core::config::{VerifierConfig, WeightCeiling};
use crate::core::types::WEIGHT_EPSILON;
use crate::unit::chassis::{ChassisKind, LamKind};
use crate::unit::design::{CriticalSlot, SystemSlot, UnitDesign};
use crate::unit::mech::Mech;

/// Itemised tonnage of a design
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct WeightBreakdown {
    pub structure: f64,
    pub engine: f64,
    pub gyro: f64,
    pub cockpit: f64,
    pub armor: f64,
    pub heat_sinks: f64,
    pub power_amplifiers: f64,
    pub conversion_equipment: f64,
    pub armored_components: f64,
    pub equipment: f64,
    /// Sum of the above, rounded up to the design's weight increment
    pub total: f64,
}

impl WeightBreakdown {
    pub fn compute(mech: &Mech<'_>, config: &VerifierConfig) -> Self {
        let design = mech.design();
        let mut breakdown = Self {
            structure: design.structure.weight(design.tonnage),
            engine: design.engine.weight(),
            gyro: design.gyro.weight(design.engine.rating),
            cockpit: design.cockpit.weight(),
            armor: WeightCeiling::HalfTon.round_up(design.armor_tonnage),
            heat_sinks: heat_sink_weight(mech),
            power_amplifiers: power_amplifier_weight(mech),
            conversion_equipment: conversion_equipment_weight(design),
            armored_components: armored_component_weight(mech),
            equipment: mech.equipment_tonnage(),
            total: 0.0,
        };
        let sum = breakdown.structure
            + breakdown.engine
            + breakdown.gyro
            + breakdown.cockpit
            + breakdown.armor
            + breakdown.heat_sinks
            + breakdown.power_amplifiers
            + breakdown.conversion_equipment
            + breakdown.armored_components
            + breakdown.equipment;
        breakdown.total = config.ceiling_for(design.tonnage).round_up(sum);
        breakdown
    }

    /// Labelled rows for printing; zero rows for optional parts are left out
    pub fn rows(&self) -> Vec<(&'static str, f64)> {
        let mut rows = vec![
            ("Internal Structure", self.structure),
            ("Engine", self.engine),
            ("Gyro", self.gyro),
            ("Cockpit", self.cockpit),
            ("Armor", self.armor),
            ("Heat Sinks", self.heat_sinks),
        ];
        let optional = [
            ("Power Amplifiers", self.power_amplifiers),
            ("Conversion Equipment", self.conversion_equipment),
            ("Armored Components", self.armored_components),
        ];
        rows.extend(optional.into_iter().filter(|(_, tons)| *tons > 0.0));
        rows.push(("Equipment", self.equipment));
        rows
    }

    pub fn lines(&self, label_width: usize) -> Vec<String> {
        let mut lines: Vec<String> = self
            .rows()
            .into_iter()
            .map(|(label, tons)| format!("{:<width$}{}", label, tons, width = label_width))
            .collect();
        lines.push(format!("{:<width$}{}", "Total", self.total, width = label_width));
        lines
    }
}

/// Heat sinks beyond the engine's weight-free allowance
fn heat_sink_weight(mech: &Mech<'_>) -> f64 {
    let free = mech.design().engine.weight_free_heat_sinks() as f64;
    if mech.has_compact_heat_sinks() {
        (mech.compact_heat_sink_tonnage() - free * 1.5).max(0.0)
    } else {
        (mech.heat_sink_count() as f64 - free).max(0.0)
    }
}

/// Non-fusion engines need amplifiers to feed energy weapons
fn power_amplifier_weight(mech: &Mech<'_>) -> f64 {
    if !mech.design().engine.engine_type.needs_power_amplifiers() {
        return 0.0;
    }
    let energy_tons: f64 = mech
        .weapons()
        .filter(|(_, kind)| kind.is_energy())
        .map(|(mount, _)| mount.tonnage)
        .sum();
    WeightCeiling::HalfTon.round_up(energy_tons / 10.0)
}

fn conversion_equipment_weight(design: &UnitDesign) -> f64 {
    let fraction = match design.chassis {
        ChassisKind::LandAir(LamKind::Bimodal) => 0.15,
        ChassisKind::LandAir(LamKind::Standard) | ChassisKind::QuadVee(_) => 0.1,
        _ => return 0.0,
    };
    WeightCeiling::Ton.round_up(design.tonnage * fraction)
}

/// Half a ton per armored slot; an armored cockpit is a flat ton
fn armored_component_weight(mech: &Mech<'_>) -> f64 {
    let design = mech.design();
    let mut weight = 0.0;
    let mut cockpit_armored = false;
    for data in &design.locations {
        for slot in &data.slots {
            if let CriticalSlot::System {
                system,
                armored: true,
            } = slot
            {
                if *system == SystemSlot::Cockpit {
                    cockpit_armored = true;
                } else {
                    weight += 0.5;
                }
            }
        }
    }
    if cockpit_armored {
        weight += 1.0;
    }
    for mount in mech.mounts().iter().filter(|mount| mount.mount.armored) {
        weight += 0.5 * design.count_mount_everywhere(mount.id) as f64;
    }
    weight
}

pub struct WeightValidator;

impl WeightValidator {
    /// Computed tonnage against declared tonnage
    pub fn validate(breakdown: &WeightBreakdown, tonnage: f64, config: &VerifierConfig) -> Vec<String> {
        let mut errors = Vec::new();

        if config.show_overweight && breakdown.total > tonnage + WEIGHT_EPSILON {
            errors.push(format!(
                "Weight: {} t is greater than the declared {} t",
                breakdown.total, tonnage
            ));
        }

        if config.show_underweight && breakdown.total < tonnage - WEIGHT_EPSILON {
            errors.push(format!(
                "Weight: {} t is less than the declared {} t",
                breakdown.total, tonnage
            ));
        }

        errors
    }

    /// Identification lines printed above a weight failure
    pub fn header(mech: &Mech<'_>, cache: &CachedUnitState<'_, Mech<'_>>) -> Vec<String> {
        let design = mech.design();
        vec![
            format!("{} ({} t {})", design.name, design.tonnage, design.chassis),
            format!(
                "Tech: {} {}, {}",
                design.tech.base, design.tech.rules_level, design.tech.year
            ),
            format!(
                "Movement: {}/{}/{}",
                cache.walk_mp_ignoring_gravity(),
                cache.run_mp_ignoring_gravity(),
                cache.jump_mp_ignoring_gravity()
            ),
            format!("Engine: {}", design.engine),
        ]
    }

    /// The engine must carry at least its weight-free heat sinks
    pub fn heat_sink_minimum(mech: &Mech<'_>) -> Vec<String> {
        let mut errors = Vec::new();
        let engine = &mech.design().engine;
        let required = engine.weight_free_heat_sinks() as usize;
        let total = mech.heat_sink_count();

        if total < required {
            let capacity = engine.integral_heat_sink_capacity(mech.has_compact_heat_sinks());
            errors.push(format!(
                "Heat Sinks:\n  Engine    {}\n  Total     {}\n  Required  {}",
                capacity, total, required
            ));
        }

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_weight_passes() {
        let config = VerifierConfig::default();
        let breakdown = WeightBreakdown {
            total: 50.0,
            ..Default::default()
        };
        assert!(WeightValidator::validate(&breakdown, 50.0, &config).is_empty());
    }

    #[test]
    fn test_overweight_names_both_values() {
        let config = VerifierConfig::default();
        let breakdown = WeightBreakdown {
            total: 51.0,
            ..Default::default()
        };
        let errors = WeightValidator::validate(&breakdown, 50.0, &config);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("51"));
        assert!(errors[0].contains("50"));
    }

    #[test]
    fn test_underweight_only_when_enabled() {
        let mut config = VerifierConfig::default();
        let breakdown = WeightBreakdown {
            total: 48.0,
            ..Default::default()
        };
        assert!(WeightValidator::validate(&breakdown, 50.0, &config).is_empty());
        config.show_underweight = true;
        assert_eq!(WeightValidator::validate(&breakdown, 50.0, &config).len(), 1);
    }

    #[test]
    fn test_rows_skip_empty_optional_parts() {
        let breakdown = WeightBreakdown {
            power_amplifiers: 1.0,
            ..Default::default()
        };
        let labels: Vec<_> = breakdown.rows().into_iter().map(|(label, _)| label).collect();
        assert!(labels.contains(&"Power Amplifiers"));
        assert!(!labels.contains(&"Armored Components"));
    }
}
