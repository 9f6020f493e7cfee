//! Application layer - organized by Clean Architecture principles.
//!
//! # Structure
//!
//! - `domain/` - Core data structures (CalendarDate, ResultMessage, Messages, Settings)
//! - `services/` - Business operations (date parsing, day delta)
//! - `controllers/` - Orchestration (FormController)
//! - `infrastructure/` - External integrations (platform, error)
//! - `state.rs` - Main application coordinator

pub mod controllers;
pub mod domain;
pub mod infrastructure;
pub mod services;
pub mod state;

// Re-exports for convenient external access
pub use controllers::form::{FormController, FormWidgets};
pub use domain::{AppSettings, CalendarDate, Message, ResultMessage, ThemeMode};
pub use infrastructure::error::{DateError, Result};
pub use infrastructure::platform::detect_system_dark_mode;
pub use state::{AppState, WindowState};
