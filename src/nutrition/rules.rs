//! Quality rules and verdict aggregation
//!
//! Three fixed rules are checked against the quality metrics. Each rule
//! carries the label reported when it passes and the one reported when it
//! fails. The number of passing rules decides the verdict.

use serde::{Deserialize, Serialize};

use super::metrics::QualityMetrics;

// ============================================================================
// Thresholds
// ============================================================================

/// Minimum grams of protein per 100 kcal for a strong protein density
pub const MIN_PROTEIN_PER_100KCAL_G: f64 = 7.0;
/// Maximum share of carbs that may be sugar, in percent
pub const MAX_SUGAR_PCT_OF_CARBS: f64 = 30.0;
/// Maximum share of fat that may be saturated, in percent
pub const MAX_SATFAT_PCT_OF_FAT: f64 = 33.0;
/// kcal/g below which a food is low energy density
pub const LOW_ENERGY_DENSITY: f64 = 0.6;
/// kcal/g above which a food is high energy density
pub const HIGH_ENERGY_DENSITY: f64 = 1.5;

/// Tunable limits used by the rules and the energy density bands
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    pub min_protein_per_100kcal_g: f64,
    pub max_sugar_pct_of_carbs: f64,
    pub max_satfat_pct_of_fat: f64,
    pub low_energy_density: f64,
    pub high_energy_density: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            min_protein_per_100kcal_g: MIN_PROTEIN_PER_100KCAL_G,
            max_sugar_pct_of_carbs: MAX_SUGAR_PCT_OF_CARBS,
            max_satfat_pct_of_fat: MAX_SATFAT_PCT_OF_FAT,
            low_energy_density: LOW_ENERGY_DENSITY,
            high_energy_density: HIGH_ENERGY_DENSITY,
        }
    }
}

// ============================================================================
// Rules
// ============================================================================

/// A pass/fail check with its reason and watchout labels
#[derive(Debug, Clone, Copy)]
pub struct QualityRule {
    pub name: &'static str,
    /// Reported in `reasons` when the rule passes
    pub positive: &'static str,
    /// Reported in `watchouts` when the rule fails
    pub negative: &'static str,
    check: fn(&QualityMetrics, &Thresholds) -> bool,
}

impl QualityRule {
    /// Absent ratios never pass
    pub fn passes(&self, quality: &QualityMetrics, thresholds: &Thresholds) -> bool {
        (self.check)(quality, thresholds)
    }

    /// The label to report for this rule's outcome
    pub fn label(&self, passed: bool) -> &'static str {
        if passed {
            self.positive
        } else {
            self.negative
        }
    }
}

/// Rules in reporting order
pub const QUALITY_RULES: [QualityRule; 3] = [
    QualityRule {
        name: "protein_density",
        positive: "Protein density is strong",
        negative: "Protein density is weak",
        check: |q, t| {
            q.protein_per_100kcal_g
                .is_some_and(|v| v >= t.min_protein_per_100kcal_g)
        },
    },
    QualityRule {
        name: "sugar_share",
        positive: "Sugar share of carbs is controlled",
        negative: "Sugar share of carbs is high",
        check: |q, t| q.sugar_pct_of_carbs.is_some_and(|v| v <= t.max_sugar_pct_of_carbs),
    },
    QualityRule {
        name: "saturated_fat_share",
        positive: "Saturated fat share is controlled",
        negative: "Saturated fat share is high",
        check: |q, t| q.satfat_pct_of_fat.is_some_and(|v| v <= t.max_satfat_pct_of_fat),
    },
];

/// Outcome of running every rule, labels split by result
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RuleOutcome {
    pub reasons: Vec<String>,
    pub watchouts: Vec<String>,
}

impl RuleOutcome {
    pub fn pass_count(&self) -> usize {
        self.reasons.len()
    }
}

/// Check all rules in declaration order
pub fn check_rules(quality: &QualityMetrics, thresholds: &Thresholds) -> RuleOutcome {
    let mut outcome = RuleOutcome::default();
    for rule in &QUALITY_RULES {
        let passed = rule.passes(quality, thresholds);
        tracing::trace!(rule = rule.name, passed, "Quality rule checked");
        let label = rule.label(passed).to_string();
        if passed {
            outcome.reasons.push(label);
        } else {
            outcome.watchouts.push(label);
        }
    }
    outcome
}

// ============================================================================
// Verdict
// ============================================================================

/// Overall judgement of a food label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    Good,
    Okay,
    Limit,
}

impl Verdict {
    /// All rules pass: Good. Two pass: Okay. Otherwise: Limit.
    pub fn from_pass_count(passed: usize) -> Self {
        if passed >= QUALITY_RULES.len() {
            Verdict::Good
        } else if passed == 2 {
            Verdict::Okay
        } else {
            Verdict::Limit
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Good => "Good",
            Verdict::Okay => "Okay",
            Verdict::Limit => "Limit",
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
