//! datespan - natural-language date ranges
//!
//! This crate turns short expressions like "today", "last 3 business days",
//! or "from 2024-01-01 to 2024-03-15" into a concrete start/end date pair.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

mod calendar;
pub mod cli;
pub mod error;
pub mod output;
pub mod parser;
pub mod range;

pub use error::DatespanError;
pub use parser::{parse, parse_on, try_parse};
pub use range::DateRange;
