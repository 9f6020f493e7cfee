//! Controllers layer - orchestration and coordination.
//!
//! Controllers sit between the widgets and the services:
//! - Form handling for the date calculator

pub mod form;
