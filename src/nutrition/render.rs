//! Markdown rendering of an evaluation report

use super::evaluator::Report;
use super::metrics::{EnergyDensity, Ratio};

const MISSING: &str = "n/a";

fn format_ratio(ratio: Ratio, decimals: usize) -> String {
    match ratio {
        Some(value) => format!("{:.*}", decimals, value),
        None => MISSING.to_string(),
    }
}

fn push_labels(markdown: &mut String, heading: &str, labels: &[String]) {
    markdown.push_str(&format!("## {}\n\n", heading));
    if labels.is_empty() {
        markdown.push_str("*None*\n");
    }
    for label in labels {
        markdown.push_str(&format!("- {}\n", label));
    }
    markdown.push('\n');
}

/// Render a report as a markdown document
pub fn render_markdown(report: &Report) -> String {
    let mut markdown = String::new();

    markdown.push_str("# Food Label Check\n\n");
    markdown.push_str(&format!("**Verdict:** {}\n\n", report.verdict));

    push_labels(&mut markdown, "Reasons", &report.reasons);
    push_labels(&mut markdown, "Watchouts", &report.watchouts);

    let q = &report.quality;
    let density = match q.energy_density_flag {
        EnergyDensity::Unknown => MISSING,
        flag => flag.as_str(),
    };
    markdown.push_str("## Quality\n\n");
    markdown.push_str("| Metric | Value |\n|---|---|\n");
    markdown.push_str(&format!(
        "| Protein per 100 kcal (g) | {} |\n",
        format_ratio(q.protein_per_100kcal_g, 1)
    ));
    markdown.push_str(&format!(
        "| Sugar share of carbs (%) | {} |\n",
        format_ratio(q.sugar_pct_of_carbs, 1)
    ));
    markdown.push_str(&format!(
        "| Saturated share of fat (%) | {} |\n",
        format_ratio(q.satfat_pct_of_fat, 1)
    ));
    markdown.push_str(&format!("| Energy density | {} |\n\n", density));

    let p = &report.per_gram;
    let rows = [
        ("kcal", p.kcal_per_g),
        ("Protein (g)", p.protein_per_g),
        ("Carbs (g)", p.carbs_per_g),
        ("Sugars (g)", p.sugars_per_g),
        ("Fibre (g)", p.fibre_per_g),
        ("Fat (g)", p.fat_per_g),
        ("Saturated fat (g)", p.satfat_per_g),
        ("Sodium (mg)", p.sodium_mg_per_g),
    ];
    markdown.push_str("## Per Gram\n\n");
    markdown.push_str("| Nutrient | Per gram |\n|---|---|\n");
    for (name, ratio) in rows {
        markdown.push_str(&format!("| {} | {} |\n", name, format_ratio(ratio, 3)));
    }

    markdown
}
