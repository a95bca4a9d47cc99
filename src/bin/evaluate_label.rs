//! Evaluate a single food label from the command line
//!
//! Usage: evaluate_label [--markdown] serving_g=100 calories=200 protein=10 ...
//!
//! Exits non-zero only when a threshold override in the environment is invalid.

use macrocheck::config;
use macrocheck::nutrition::render_markdown;
use macrocheck::tools::evaluate::{evaluate_label, parse_label_args};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("macrocheck=warn".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let thresholds = config::thresholds_from_env()?;
    let args = parse_label_args(std::env::args().skip(1));

    let report = evaluate_label(&args.input, &thresholds);
    if args.markdown {
        print!("{}", render_markdown(&report));
    } else {
        println!("{}", serde_json::to_string_pretty(&report)?);
    }

    Ok(())
}
