//! Nutrition evaluation module
//!
//! Judges a single food label from its raw values.

pub mod evaluator;
pub mod input;
pub mod metrics;
pub mod render;
pub mod rules;

pub use evaluator::{evaluate, evaluate_macros, evaluate_with, Report};
pub use input::{normalize_measurement, parse_numeric, LabelInput, LabelValues, LABEL_FIELDS};
pub use metrics::{as_percentage, safe_div, EnergyDensity, PerGramMetrics, QualityMetrics, Ratio};
pub use render::render_markdown;
pub use rules::{check_rules, QualityRule, RuleOutcome, Thresholds, Verdict, QUALITY_RULES};
