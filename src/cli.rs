//! Command-line argument types for datespan.

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "datespan")]
#[command(about = "Turn natural-language date-range expressions into concrete dates")]
#[command(long_about = "datespan - natural-language date ranges

Resolves short expressions against today's date and prints the
resulting start/end pair.

SUPPORTED EXPRESSIONS:
  today, yesterday
  this week, this month
  last week, last month
  last N days              e.g. \"last 5 days\"
  last N business days     e.g. \"last 3 business days\"
  from X to Y              e.g. \"from 2024-01-01 to 2024-03-15\"

OUTPUT FORMATS:
  --output pretty    Human-readable colored output (default)
  --output json      Machine-readable JSON for scripting")]
#[command(version)]
pub struct Cli {
    /// The date-range expression to resolve, e.g. "last 3 business days"
    pub expression: String,

    /// Output format for the resolved range
    ///
    /// Use 'pretty' for human-readable colored output (default),
    /// or 'json' for machine-readable output suitable for scripting.
    #[arg(short, long, value_enum, default_value = "pretty")]
    pub output: OutputFormat,
}

/// Output format for the resolved range.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}
