//! Date Difference Calculator.
//!
//! A single-window FLTK utility that reports the number of calendar days
//! between two `YYYY-MM-DD` dates.

pub mod app;
pub mod ui;
