//! Evaluation Tools
//!
//! Label evaluation as served to MCP clients and the command line.

use serde::Serialize;

use crate::nutrition::{
    evaluate_with, render_markdown, LabelInput, Report, Thresholds, Verdict, LABEL_FIELDS,
};

/// Response for evaluate_macros_markdown
#[derive(Debug, Serialize)]
pub struct MarkdownReportResponse {
    pub verdict: Verdict,
    pub markdown: String,
}

/// Command-line request: `[--markdown] field=value ...`
#[derive(Debug, Default)]
pub struct LabelArgs {
    pub input: LabelInput,
    pub markdown: bool,
    /// Arguments that were not `field=value` for a known label field
    pub ignored: Vec<String>,
}

/// Parse command-line arguments into a label, warning about anything skipped
pub fn parse_label_args<I>(args: I) -> LabelArgs
where
    I: IntoIterator<Item = String>,
{
    let mut markdown = false;
    let mut pairs = Vec::new();
    let mut ignored = Vec::new();
    for arg in args {
        if arg == "--markdown" {
            markdown = true;
            continue;
        }
        match arg.split_once('=') {
            Some((name, value)) => pairs.push((name.to_string(), value.to_string())),
            None => {
                tracing::warn!(arg = %arg, "Ignoring argument, expected field=value");
                ignored.push(arg);
            }
        }
    }

    let (input, unknown) = LabelInput::from_pairs(pairs);
    for name in unknown {
        tracing::warn!(field = %name, expected = %LABEL_FIELDS.join(", "), "Ignoring unknown label field");
        ignored.push(name);
    }

    LabelArgs {
        input,
        markdown,
        ignored,
    }
}

/// Evaluate one raw label against the configured thresholds
pub fn evaluate_label(input: &LabelInput, thresholds: &Thresholds) -> Report {
    evaluate_with(&input.normalize(), thresholds)
}

/// Evaluate one raw label and render the report for reading
pub fn evaluate_label_markdown(input: &LabelInput, thresholds: &Thresholds) -> MarkdownReportResponse {
    let report = evaluate_label(input, thresholds);
    MarkdownReportResponse {
        verdict: report.verdict,
        markdown: render_markdown(&report),
    }
}
