//! HostelMS
//!
//! A hostel management web application: student and admin accounts, room
//! applications, complaints, room allocation and dashboard statistics.

#![allow(non_snake_case)]

pub mod config;
pub mod database;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod state;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use state::AppState;
pub use utils::errors::{HostelError, Result};

// Re-export main components for easy access
pub use database::DatabaseService;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
