//! Version and compile-time metadata, plus the startup banner.

use serde::Serialize;

use crate::nutrition::Thresholds;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// UTC compile time, stamped by build.rs
pub const COMPILED_AT: &str = match option_env!("MACROCHECK_COMPILED_AT") {
    Some(s) => s,
    None => "unknown",
};

#[derive(Debug, Clone, Serialize)]
pub struct BuildInfo {
    pub version: &'static str,
    pub compiled_at: &'static str,
}

impl BuildInfo {
    pub fn current() -> Self {
        Self {
            version: VERSION,
            compiled_at: COMPILED_AT,
        }
    }
}

/// Banner lines describing this build and the rules it will apply
pub fn startup_banner(thresholds: &Thresholds) -> Vec<String> {
    let info = BuildInfo::current();
    vec![
        format!("macrocheck {} (compiled {})", info.version, info.compiled_at),
        format!(
            "  protein >= {} g/100 kcal | sugar <= {}% of carbs | satfat <= {}% of fat",
            thresholds.min_protein_per_100kcal_g,
            thresholds.max_sugar_pct_of_carbs,
            thresholds.max_satfat_pct_of_fat,
        ),
        format!(
            "  energy density: Low < {} kcal/g <= Moderate <= {} kcal/g < High",
            thresholds.low_energy_density, thresholds.high_energy_density,
        ),
    ]
}

/// Print the startup banner to stderr (stdout belongs to the MCP transport)
pub fn print_startup_banner(thresholds: &Thresholds) {
    for line in startup_banner(thresholds) {
        eprintln!("{}", line);
    }
}
