//! Domain layer - core data structures and types.
//!
//! This module contains the fundamental domain models:
//! - CalendarDate and ResultMessage
//! - Application settings
//! - Message types for the event system

pub mod date;
pub mod messages;
pub mod result;
pub mod settings;

pub use date::CalendarDate;
pub use messages::Message;
pub use result::ResultMessage;
pub use settings::{AppSettings, ThemeMode};
