//! Derived label metrics
//!
//! Per-gram amounts, ratio-based quality metrics and the energy density band.
//! Every quotient is a [`Ratio`]: absent whenever it is undefined.

use serde::{Serialize, Serializer};

use super::input::LabelValues;
use super::rules::Thresholds;

/// Optional quotient; `None` when the denominator is zero or the result is not finite
pub type Ratio = Option<f64>;

/// Divide, yielding `None` instead of an infinity or NaN
pub fn safe_div(numerator: f64, denominator: f64) -> Ratio {
    if denominator == 0.0 {
        return None;
    }
    let quotient = numerator / denominator;
    quotient.is_finite().then_some(quotient)
}

/// Scale a ratio by 100. Absent stays absent.
pub fn as_percentage(ratio: Ratio) -> Ratio {
    ratio.map(|r| r * 100.0).filter(|v| v.is_finite())
}

/// Amount of each nutrient per gram of serving
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct PerGramMetrics {
    pub kcal_per_g: Ratio,
    pub protein_per_g: Ratio,
    pub carbs_per_g: Ratio,
    pub sugars_per_g: Ratio,
    pub fibre_per_g: Ratio,
    pub fat_per_g: Ratio,
    pub satfat_per_g: Ratio,
    pub sodium_mg_per_g: Ratio,
}

impl PerGramMetrics {
    pub fn from_values(values: &LabelValues) -> Self {
        let per_gram = |amount: f64| safe_div(amount, values.serving_g);
        Self {
            kcal_per_g: per_gram(values.calories),
            protein_per_g: per_gram(values.protein),
            carbs_per_g: per_gram(values.carbs),
            sugars_per_g: per_gram(values.sugars),
            fibre_per_g: per_gram(values.fibre),
            fat_per_g: per_gram(values.fat),
            satfat_per_g: per_gram(values.satfat),
            sodium_mg_per_g: per_gram(values.sodium),
        }
    }
}

/// Energy density band of a food, from calories per gram
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EnergyDensity {
    /// Serving size missing or zero
    #[default]
    Unknown,
    Low,
    Moderate,
    High,
}

impl EnergyDensity {
    /// Classify calories per gram. Both band edges belong to `Moderate`.
    pub fn classify(kcal_per_g: Ratio, thresholds: &Thresholds) -> Self {
        match kcal_per_g {
            None => EnergyDensity::Unknown,
            Some(r) if r < thresholds.low_energy_density => EnergyDensity::Low,
            Some(r) if r <= thresholds.high_energy_density => EnergyDensity::Moderate,
            Some(_) => EnergyDensity::High,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EnergyDensity::Unknown => "",
            EnergyDensity::Low => "Low",
            EnergyDensity::Moderate => "Moderate",
            EnergyDensity::High => "High",
        }
    }
}

impl std::fmt::Display for EnergyDensity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// Serialized as the bare label; `Unknown` is the empty string
impl Serialize for EnergyDensity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Ratio-based quality metrics the verdict rules are checked against
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct QualityMetrics {
    pub protein_per_100kcal_g: Ratio,
    pub sugar_pct_of_carbs: Ratio,
    pub satfat_pct_of_fat: Ratio,
    pub energy_density_flag: EnergyDensity,
}

impl QualityMetrics {
    pub fn from_values(values: &LabelValues, kcal_per_g: Ratio, thresholds: &Thresholds) -> Self {
        Self {
            protein_per_100kcal_g: as_percentage(safe_div(values.protein, values.calories)),
            sugar_pct_of_carbs: as_percentage(safe_div(values.sugars, values.carbs)),
            satfat_pct_of_fat: as_percentage(safe_div(values.satfat, values.fat)),
            energy_density_flag: EnergyDensity::classify(kcal_per_g, thresholds),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn label(serving_g: f64, calories: f64) -> LabelValues {
        LabelValues {
            serving_g,
            calories,
            ..LabelValues::default()
        }
    }

    #[test]
    fn test_safe_div() {
        assert_eq!(safe_div(10.0, 4.0), Some(2.5));
        assert_eq!(safe_div(0.0, 4.0), Some(0.0));
        assert_eq!(safe_div(-3.0, 2.0), Some(-1.5));
        assert_eq!(safe_div(10.0, 0.0), None);
        assert_eq!(safe_div(0.0, 0.0), None);
        assert_eq!(safe_div(10.0, -0.0), None);
    }

    #[test]
    fn test_safe_div_overflow_is_absent() {
        assert_eq!(safe_div(f64::MAX, 1e-300), None);
    }

    #[test]
    fn test_as_percentage() {
        assert_eq!(as_percentage(Some(0.25)), Some(25.0));
        assert_eq!(as_percentage(None), None);
    }

    #[test]
    fn test_zero_serving_gives_no_per_gram_metrics() {
        let values = LabelValues {
            serving_g: 0.0,
            calories: 200.0,
            protein: 10.0,
            carbs: 20.0,
            sugars: 5.0,
            fibre: 3.0,
            fat: 8.0,
            satfat: 2.0,
            sodium: 150.0,
        };
        assert_eq!(PerGramMetrics::from_values(&values), PerGramMetrics::default());
    }

    #[test]
    fn test_per_gram_metrics() {
        let values = LabelValues {
            serving_g: 50.0,
            calories: 100.0,
            sodium: 25.0,
            ..LabelValues::default()
        };
        let per_gram = PerGramMetrics::from_values(&values);
        assert_eq!(per_gram.kcal_per_g, Some(2.0));
        assert_eq!(per_gram.sodium_mg_per_g, Some(0.5));
        assert_eq!(per_gram.protein_per_g, Some(0.0));
    }

    #[test]
    fn test_energy_density_boundaries() {
        let t = Thresholds::default();
        assert_eq!(EnergyDensity::classify(None, &t), EnergyDensity::Unknown);
        assert_eq!(EnergyDensity::classify(Some(0.599), &t), EnergyDensity::Low);
        assert_eq!(EnergyDensity::classify(Some(0.6), &t), EnergyDensity::Moderate);
        assert_eq!(EnergyDensity::classify(Some(1.5), &t), EnergyDensity::Moderate);
        assert_eq!(EnergyDensity::classify(Some(1.501), &t), EnergyDensity::High);
    }

    #[test]
    fn test_energy_density_from_label() {
        let t = Thresholds::default();
        let kcal = PerGramMetrics::from_values(&label(100.0, 60.0)).kcal_per_g;
        assert_eq!(EnergyDensity::classify(kcal, &t), EnergyDensity::Moderate);
        let kcal = PerGramMetrics::from_values(&label(100.0, 150.0)).kcal_per_g;
        assert_eq!(EnergyDensity::classify(kcal, &t), EnergyDensity::Moderate);
    }

    #[test]
    fn test_quality_denominators_are_independent() {
        let values = LabelValues {
            serving_g: 100.0,
            calories: 0.0,
            protein: 10.0,
            carbs: 20.0,
            sugars: 5.0,
            fat: 0.0,
            satfat: 1.0,
            ..LabelValues::default()
        };
        let q = QualityMetrics::from_values(&values, Some(0.0), &Thresholds::default());
        assert_eq!(q.protein_per_100kcal_g, None);
        assert_eq!(q.sugar_pct_of_carbs, Some(25.0));
        assert_eq!(q.satfat_pct_of_fat, None);
        assert_eq!(q.energy_density_flag, EnergyDensity::Low);
    }

    #[test]
    fn test_sugar_share_may_exceed_100() {
        let values = LabelValues {
            carbs: 4.0,
            sugars: 5.0,
            ..LabelValues::default()
        };
        let q = QualityMetrics::from_values(&values, None, &Thresholds::default());
        let pct = q.sugar_pct_of_carbs.unwrap();
        assert!((pct - 125.0).abs() < 1e-9);
    }

    #[test]
    fn test_energy_density_serializes_as_label() {
        assert_eq!(serde_json::to_string(&EnergyDensity::Unknown).unwrap(), r#""""#);
        assert_eq!(serde_json::to_string(&EnergyDensity::High).unwrap(), r#""High""#);
    }
}
