//! Database repositories module
//!
//! This module contains all repository implementations for data access

pub mod application;
pub mod complaint;
pub mod room;
pub mod stats;
pub mod user;

// Re-export repositories
pub use application::ApplicationRepository;
pub use complaint::ComplaintRepository;
pub use room::RoomRepository;
pub use stats::StatsRepository;
pub use user::UserRepository;
