//! Runtime configuration
//!
//! Rule thresholds can be overridden through environment variables.
//! Unset variables keep the built-in defaults.

use thiserror::Error;

use crate::nutrition::Thresholds;

pub const MIN_PROTEIN_VAR: &str = "MACROCHECK_MIN_PROTEIN_PER_100KCAL";
pub const MAX_SUGAR_VAR: &str = "MACROCHECK_MAX_SUGAR_PCT_OF_CARBS";
pub const MAX_SATFAT_VAR: &str = "MACROCHECK_MAX_SATFAT_PCT_OF_FAT";
pub const LOW_DENSITY_VAR: &str = "MACROCHECK_LOW_ENERGY_DENSITY";
pub const HIGH_DENSITY_VAR: &str = "MACROCHECK_HIGH_ENERGY_DENSITY";

/// Configuration error types
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{var} must be a finite number, got '{value}'")]
    InvalidNumber { var: &'static str, value: String },

    #[error("MACROCHECK_LOW_ENERGY_DENSITY ({low}) must not exceed MACROCHECK_HIGH_ENERGY_DENSITY ({high})")]
    InvertedEnergyBands { low: f64, high: f64 },
}

/// Result type for configuration loading
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Read thresholds from the process environment
pub fn thresholds_from_env() -> ConfigResult<Thresholds> {
    thresholds_from_lookup(|var| std::env::var(var).ok())
}

/// Read thresholds through an arbitrary variable lookup
pub fn thresholds_from_lookup<F>(lookup: F) -> ConfigResult<Thresholds>
where
    F: Fn(&str) -> Option<String>,
{
    let defaults = Thresholds::default();
    let read = |var: &'static str, default: f64| -> ConfigResult<f64> {
        match lookup(var) {
            None => Ok(default),
            Some(raw) => match raw.trim().parse::<f64>() {
                Ok(value) if value.is_finite() => {
                    tracing::info!(var, value, "Threshold overridden");
                    Ok(value)
                }
                _ => Err(ConfigError::InvalidNumber { var, value: raw }),
            },
        }
    };

    let thresholds = Thresholds {
        min_protein_per_100kcal_g: read(MIN_PROTEIN_VAR, defaults.min_protein_per_100kcal_g)?,
        max_sugar_pct_of_carbs: read(MAX_SUGAR_VAR, defaults.max_sugar_pct_of_carbs)?,
        max_satfat_pct_of_fat: read(MAX_SATFAT_VAR, defaults.max_satfat_pct_of_fat)?,
        low_energy_density: read(LOW_DENSITY_VAR, defaults.low_energy_density)?,
        high_energy_density: read(HIGH_DENSITY_VAR, defaults.high_energy_density)?,
    };

    if thresholds.low_energy_density > thresholds.high_energy_density {
        return Err(ConfigError::InvertedEnergyBands {
            low: thresholds.low_energy_density,
            high: thresholds.high_energy_density,
        });
    }

    Ok(thresholds)
}
