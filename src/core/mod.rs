//! # Core Module
//!
//! Configuration, error taxonomy and chat response formatting.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.9.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 1.0.0: Initial creation with config, errors and response modules

pub mod config;
pub mod errors;
pub mod response;

// Re-export commonly used items
pub use config::Config;
pub use errors::{CommandError, SelectionError};
pub use response::{error_span, strip_gm_marker, Recipient, GM_RECIPIENT};
