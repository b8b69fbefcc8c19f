//! Data models module
//!
//! This module contains all data structures used throughout the application

pub mod application;
pub mod complaint;
pub mod dashboard;
pub mod room;
pub mod user;

// Re-export commonly used models
pub use application::{
    Application, ApplicationRecord, ApplicationStatus, ApplicationSummary, CreateApplicationRequest,
};
pub use complaint::{Complaint, ComplaintRecord, ComplaintStatus, CreateComplaintRequest};
pub use dashboard::DashboardStats;
pub use room::{Floor, Hostel, Room, RoomDetails, RoomStatistics, Wing};
pub use user::{
    Admin, CreateAdminRequest, CreateStudentRequest, CreateUserRequest, Role, Student, User,
};
