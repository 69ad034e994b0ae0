//! The full verification pipeline for one design

use tracing::{debug, warn};

use crate::cache::CachedUnitState;
use crate::catalog::registry::EquipmentCatalog;
use crate::core::config::{config, VerifierConfig};
use crate::core::error::{Result, VerifierError};
use crate::unit::design::UnitDesign;
use crate::unit::mech::Mech;

use super::{
    ArmorValidator, ChassisGateValidator, CheckCategory, CompatibilityValidator, CriticalsValidator,
    Diagnostic, MovementValidator, SpreadValidator, TechValidator, VerificationReport,
    WeightBreakdown, WeightValidator,
};

/// Runs every legality check against designs drawn from one catalog
pub struct Verifier<'c> {
    catalog: &'c EquipmentCatalog,
    config: VerifierConfig,
}

impl<'c> Verifier<'c> {
    /// Verifier using the process-wide configuration
    pub fn new(catalog: &'c EquipmentCatalog) -> Self {
        Self::with_config(catalog, config().clone())
    }

    pub fn with_config(catalog: &'c EquipmentCatalog, config: VerifierConfig) -> Self {
        Self { catalog, config }
    }

    pub fn config(&self) -> &VerifierConfig {
        &self.config
    }

    pub fn catalog(&self) -> &'c EquipmentCatalog {
        self.catalog
    }

    /// Check a design and report every violation found.
    ///
    /// Errors only when the design itself is malformed; an illegal design is
    /// a successful verification with `is_legal == false`.
    pub fn verify(&self, design: &UnitDesign) -> Result<VerificationReport> {
        if design.skip_verification {
            debug!(unit = %design.name, "verification skipped");
            return Ok(VerificationReport::skipped(design.name.clone()));
        }

        let mech = match Mech::resolve(design, self.catalog) {
            Ok(mech) => mech,
            Err(VerifierError::InvalidInput { defects, .. }) => {
                warn!(unit = %design.name, defects = defects.len(), "design input is malformed");
                return Err(VerifierError::InvalidInput {
                    defects,
                    partial: self.design_only_findings(design),
                });
            }
            Err(err) => return Err(err),
        };

        let report = self.run_checks(&mech);
        debug!(
            unit = %design.name,
            legal = report.is_legal,
            violations = report.violation_count(),
            "verification finished"
        );
        Ok(report)
    }

    /// Checks that read only the design, for reporting alongside input defects
    fn design_only_findings(&self, design: &UnitDesign) -> Vec<Diagnostic> {
        let mut findings = Vec::new();
        if self.config.check_armor {
            findings.extend(
                ArmorValidator::validate(design, &self.config)
                    .into_iter()
                    .map(|message| Diagnostic::new(CheckCategory::Armor, message)),
            );
        }
        if self.config.check_criticals {
            findings.extend(
                CriticalsValidator::validate_system_slots(design)
                    .into_iter()
                    .map(|message| Diagnostic::new(CheckCategory::Criticals, message)),
            );
        }
        findings
    }

    fn run_checks(&self, mech: &Mech<'_>) -> VerificationReport {
        let design = mech.design();
        let cache = CachedUnitState::new(mech);
        let mut report = VerificationReport::new(design.name.clone());

        let breakdown = WeightBreakdown::compute(mech, &self.config);
        let weight = WeightValidator::validate(&breakdown, design.tonnage, &self.config);
        if !weight.is_empty() {
            let mut context = WeightValidator::header(mech, &cache);
            context.extend(breakdown.lines(self.config.print_label_width));
            report.add_context(context);
        }
        report.add_errors(CheckCategory::Weight, weight);

        report.add_errors(
            CheckCategory::Engine,
            design.engine.problems().iter().map(ToString::to_string).collect(),
        );
        report.add_errors(CheckCategory::HeatSinks, WeightValidator::heat_sink_minimum(mech));

        if self.config.check_armor {
            report.add_errors(CheckCategory::Armor, ArmorValidator::validate(design, &self.config));
        }
        if self.config.check_criticals {
            report.add_errors(CheckCategory::Criticals, CriticalsValidator::validate(mech));
        }
        if self.config.check_failed_equipment {
            report.add_errors(
                CheckCategory::FailedEquipment,
                design
                    .failed_equipment
                    .iter()
                    .map(|name| format!("Failed to load equipment: {}", name))
                    .collect(),
            );
        }

        report.add_errors(CheckCategory::TechLevel, TechValidator::validate_rules_level(mech));
        if self.config.check_intro_year {
            report.add_errors(CheckCategory::IntroYear, TechValidator::validate_intro_year(mech));
        }

        report.add_errors(CheckCategory::Compatibility, CompatibilityValidator::validate(mech));
        report.add_errors(CheckCategory::Compatibility, ChassisGateValidator::validate(mech));
        report.add_errors(CheckCategory::SpreadAllocation, SpreadValidator::validate(mech));
        report.add_errors(CheckCategory::Movement, MovementValidator::validate(mech, &cache));

        if design.ignore_illegal {
            report.override_verdict();
        }
        report
    }
}
