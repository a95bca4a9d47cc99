//! Macro evaluator
//!
//! Turns nine label values into a complete [`Report`]. Never fails: bad
//! input becomes zero, undefined ratios become absent, and the report is
//! always fully populated.

use serde::Serialize;

use super::input::{LabelInput, LabelValues};
use super::metrics::{PerGramMetrics, QualityMetrics};
use super::rules::{check_rules, Thresholds, Verdict};

/// Evaluation of one food label
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub per_gram: PerGramMetrics,
    pub quality: QualityMetrics,
    pub verdict: Verdict,
    /// Labels of the rules that passed
    pub reasons: Vec<String>,
    /// Labels of the rules that failed
    pub watchouts: Vec<String>,
}

/// Evaluate raw label values with the default thresholds
pub fn evaluate_macros(input: &LabelInput) -> Report {
    evaluate(&input.normalize())
}

/// Evaluate normalized label values with the default thresholds
pub fn evaluate(values: &LabelValues) -> Report {
    evaluate_with(values, &Thresholds::default())
}

/// Evaluate normalized label values against the given thresholds
pub fn evaluate_with(values: &LabelValues, thresholds: &Thresholds) -> Report {
    let per_gram = PerGramMetrics::from_values(values);
    let quality = QualityMetrics::from_values(values, per_gram.kcal_per_g, thresholds);
    let outcome = check_rules(&quality, thresholds);
    let verdict = Verdict::from_pass_count(outcome.pass_count());

    tracing::debug!(
        %verdict,
        passed = outcome.pass_count(),
        energy_density = %quality.energy_density_flag,
        "Label evaluated"
    );

    Report {
        per_gram,
        quality,
        verdict,
        reasons: outcome.reasons,
        watchouts: outcome.watchouts,
    }
}
