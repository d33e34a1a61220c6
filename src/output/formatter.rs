use std::io::IsTerminal;
use owo_colors::OwoColorize;
use serde::{Deserialize, Serialize};

use crate::scoring::{ScoreReport, ScoreValue, Scores};

/// How results are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One labelled line per score string
    #[default]
    Text,
    /// Pretty-printed JSON array
    Json,
    /// Tab-separated values for scripting
    Tsv,
}

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Render results in the requested format.
pub fn format_results(
    reports: &[ScoreReport],
    format: OutputFormat,
    show_diff: bool,
    use_colors: bool,
) -> serde_json::Result<String> {
    match format {
        OutputFormat::Text => Ok(format_table(reports, show_diff, use_colors)),
        OutputFormat::Json => format_json(reports),
        OutputFormat::Tsv => Ok(format_tsv(reports)),
    }
}

/// Format a value, prefixing positive diffs with `+`.
pub fn format_value<T: ScoreValue>(value: T, signed: bool) -> String {
    if signed && value.as_f64() > 0.0 {
        format!("+{}", value)
    } else {
        value.to_string()
    }
}

fn paint<T: ScoreValue>(value: T, signed: bool, use_colors: bool) -> String {
    let text = format_value(value, signed);
    if !(use_colors && signed) {
        return text;
    }
    let n = value.as_f64();
    if n > 0.0 {
        text.green().to_string()
    } else if n < 0.0 {
        text.red().to_string()
    } else {
        text.dimmed().to_string()
    }
}

fn format_row<T: ScoreValue>(scores: &Scores<T>, signed: bool, use_colors: bool) -> String {
    let cell = |value: T| paint(value, signed, use_colors);
    let average = cell(scores.average);
    let average = if use_colors {
        average.bold().to_string()
    } else {
        average
    };

    format!(
        "perf {}  a11y {}  bp {}  seo {}  pwa ({}, {}, {})  avg {}",
        cell(scores.perf),
        cell(scores.a11y),
        cell(scores.bp),
        cell(scores.seo),
        cell(scores.pwa.fnr),
        cell(scores.pwa.ins),
        cell(scores.pwa.po),
        average
    )
}

/// Format results as one line per score string, with a 1-based index.
/// With `show_diff`, rows after the first are signed differences.
pub fn format_table(reports: &[ScoreReport], show_diff: bool, use_colors: bool) -> String {
    if reports.is_empty() {
        return "No scores to average.".to_string();
    }

    reports
        .iter()
        .enumerate()
        .map(|(idx, report)| {
            let index_str = format!("{:>2}.", idx + 1);
            let index_str = if use_colors {
                index_str.dimmed().to_string()
            } else {
                index_str
            };

            let signed = show_diff && idx > 0;
            let row = match report {
                ScoreReport::Numeric(scores) => format_row(scores, signed, use_colors),
                ScoreReport::Percentage(scores) => format_row(scores, signed, use_colors),
            };
            format!("{} {}", index_str, row)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format results as a JSON array.
pub fn format_json(reports: &[ScoreReport]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(reports)
}

/// Format results as tab-separated values for scripting
/// Columns: perf, a11y, bp, seo, fnr, ins, po, average (no headers, no colors)
pub fn format_tsv(reports: &[ScoreReport]) -> String {
    reports
        .iter()
        .map(|report| report.column_strings().join("\t"))
        .collect::<Vec<_>>()
        .join("\n")
}
