//! Error types for datespan.

use thiserror::Error;

/// Errors produced while parsing or formatting a date range.
#[derive(Debug, Error)]
pub enum DatespanError {
    /// Input was empty or contained only whitespace.
    #[error("input is empty or whitespace-only")]
    EmptyInput,

    /// Input was well-formed text but matched no known expression.
    #[error("unsupported date range expression: '{0}'")]
    UnsupportedExpression(String),

    /// An expression requiring a day count contained no integer token.
    #[error("no numeric day count found in '{0}'")]
    NoCount(String),

    /// The extracted day count was zero or negative.
    #[error("day count must be greater than zero, got {0}")]
    CountOutOfRange(i64),

    /// JSON serialization failed while formatting output.
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}
