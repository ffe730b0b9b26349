//! Output formatting for resolved date ranges.

use colored::Colorize;
use serde_json::json;

use crate::cli::OutputFormat;
use crate::error::DatespanError;
use crate::range::DateRange;

/// Format a resolved range based on the output format.
///
/// # Errors
///
/// Returns `DatespanError::Json` if JSON serialization fails.
pub fn format_range(
    expression: &str,
    range: &DateRange,
    format: OutputFormat,
) -> Result<String, DatespanError> {
    match format {
        OutputFormat::Pretty => Ok(format_range_pretty(range)),
        OutputFormat::Json => format_range_json(expression, range),
    }
}

/// Format a range as a single colored line.
#[must_use]
pub fn format_range_pretty(range: &DateRange) -> String {
    let days = range.num_days();
    let unit = if days == 1 { "day" } else { "days" };
    format!(
        "{} {} {} {}",
        range.start().format("%Y-%m-%d").to_string().green().bold(),
        "→".dimmed(),
        range.end().format("%Y-%m-%d").to_string().green().bold(),
        format!("({days} {unit})").dimmed()
    )
}

/// Format a range as pretty-printed JSON.
///
/// # Errors
///
/// Returns `DatespanError::Json` if serialization fails.
pub fn format_range_json(expression: &str, range: &DateRange) -> Result<String, DatespanError> {
    let output = json!({
        "expression": expression,
        "start": range.start().format("%Y-%m-%d").to_string(),
        "end": range.end().format("%Y-%m-%d").to_string(),
        "days": range.num_days(),
    });
    Ok(serde_json::to_string_pretty(&output)?)
}
