//! Services layer - business operations.
//!
//! - Parsing `YYYY-MM-DD` strings into calendar dates
//! - Calendar day differences

pub mod date_parser;
pub mod day_delta;

pub use date_parser::parse;
pub use day_delta::delta;
