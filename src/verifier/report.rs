//! Aggregated verdict and diagnostics for one design

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{CheckCategory, Diagnostic};

/// Result of running every check against one design
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerificationReport {
    pub unit: String,
    pub is_legal: bool,
    /// The design asked to be treated as legal whatever was found
    pub overridden: bool,
    /// The design is exempt from verification; no checks ran
    pub skipped: bool,
    pub diagnostics: Vec<Diagnostic>,
    pub passed_weight: bool,
    pub passed_engine: bool,
    pub passed_heat_sinks: bool,
    pub passed_armor: bool,
    pub passed_criticals: bool,
    pub passed_failed_equipment: bool,
    pub passed_tech_level: bool,
    pub passed_intro_year: bool,
    pub passed_compatibility: bool,
    pub passed_spread_allocation: bool,
    pub passed_movement: bool,
}

impl VerificationReport {
    pub fn new(unit: impl Into<String>) -> Self {
        Self {
            unit: unit.into(),
            is_legal: true,
            overridden: false,
            skipped: false,
            diagnostics: Vec::new(),
            passed_weight: true,
            passed_engine: true,
            passed_heat_sinks: true,
            passed_armor: true,
            passed_criticals: true,
            passed_failed_equipment: true,
            passed_tech_level: true,
            passed_intro_year: true,
            passed_compatibility: true,
            passed_spread_allocation: true,
            passed_movement: true,
        }
    }

    pub fn skipped(unit: impl Into<String>) -> Self {
        Self {
            skipped: true,
            ..Self::new(unit)
        }
    }

    fn passed_flag(&mut self, category: CheckCategory) -> Option<&mut bool> {
        match category {
            CheckCategory::Context => None,
            CheckCategory::Weight => Some(&mut self.passed_weight),
            CheckCategory::Engine => Some(&mut self.passed_engine),
            CheckCategory::HeatSinks => Some(&mut self.passed_heat_sinks),
            CheckCategory::Armor => Some(&mut self.passed_armor),
            CheckCategory::Criticals => Some(&mut self.passed_criticals),
            CheckCategory::FailedEquipment => Some(&mut self.passed_failed_equipment),
            CheckCategory::TechLevel => Some(&mut self.passed_tech_level),
            CheckCategory::IntroYear => Some(&mut self.passed_intro_year),
            CheckCategory::Compatibility => Some(&mut self.passed_compatibility),
            CheckCategory::SpreadAllocation => Some(&mut self.passed_spread_allocation),
            CheckCategory::Movement => Some(&mut self.passed_movement),
        }
    }

    pub fn passed(&self, category: CheckCategory) -> bool {
        match category {
            CheckCategory::Context => true,
            CheckCategory::Weight => self.passed_weight,
            CheckCategory::Engine => self.passed_engine,
            CheckCategory::HeatSinks => self.passed_heat_sinks,
            CheckCategory::Armor => self.passed_armor,
            CheckCategory::Criticals => self.passed_criticals,
            CheckCategory::FailedEquipment => self.passed_failed_equipment,
            CheckCategory::TechLevel => self.passed_tech_level,
            CheckCategory::IntroYear => self.passed_intro_year,
            CheckCategory::Compatibility => self.passed_compatibility,
            CheckCategory::SpreadAllocation => self.passed_spread_allocation,
            CheckCategory::Movement => self.passed_movement,
        }
    }

    /// Record the findings of one check; an empty list means it passed
    pub fn add_errors(&mut self, category: CheckCategory, errors: Vec<String>) {
        if errors.is_empty() {
            return;
        }
        if let Some(flag) = self.passed_flag(category) {
            *flag = false;
            self.is_legal = false;
        }
        self.diagnostics
            .extend(errors.into_iter().map(|message| Diagnostic::new(category, message)));
    }

    /// Explanatory lines that do not change the verdict
    pub fn add_context(&mut self, lines: Vec<String>) {
        self.add_errors(CheckCategory::Context, lines);
    }

    /// Apply the design's override: keep every message but report legal
    pub fn override_verdict(&mut self) {
        if !self.is_legal {
            self.overridden = true;
            self.is_legal = true;
        }
    }

    /// Every message in check order
    pub fn messages(&self) -> Vec<&str> {
        self.diagnostics.iter().map(|d| d.message.as_str()).collect()
    }

    /// Messages that are actual violations, without context lines
    pub fn violations(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| !d.is_context())
    }

    pub fn violation_count(&self) -> usize {
        self.violations().count()
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.diagnostics.iter().any(|d| d.message.contains(needle))
    }
}

impl fmt::Display for VerificationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verdict = match (self.skipped, self.is_legal, self.overridden) {
            (true, _, _) => "not verified",
            (false, true, true) => "legal (illegal design overridden)",
            (false, true, false) => "legal",
            (false, false, _) => "ILLEGAL",
        };
        writeln!(f, "{}: {}", self.unit, verdict)?;
        for diagnostic in &self.diagnostics {
            writeln!(f, "{}", diagnostic.message)?;
        }
        Ok(())
    }
}
