//! Error handling for HostelMS
//!
//! This module defines the main error type used throughout the application
//! and the single mapping from internal failures to user-facing messages.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use thiserror::Error;

/// Main error type for the HostelMS application
#[derive(Error, Debug)]
pub enum HostelError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Database migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Session error: {0}")]
    Session(#[from] tower_sessions::session::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Password hashing error: {0}")]
    PasswordHash(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("Student profile not found for user {user_id}")]
    StudentNotFound { user_id: i64 },

    #[error("Application not found: {application_id}")]
    ApplicationNotFound { application_id: i64 },

    #[error("Complaint not found: {complaint_id}")]
    ComplaintNotFound { complaint_id: i64 },

    #[error("Room not found: {room_id}")]
    RoomNotFound { room_id: i64 },

    #[error("Voucher file not found")]
    VoucherNotFound,

    #[error("Student {student_id} has already submitted an application")]
    DuplicateApplication { student_id: i64 },

    #[error("Application {application_id} is already approved")]
    AlreadyApproved { application_id: i64 },

    #[error("Room {room_id} is at full capacity")]
    RoomFull { room_id: i64 },
}

/// Result type alias for HostelMS operations
pub type Result<T> = std::result::Result<T, HostelError>;

/// Closed error taxonomy used to pick status codes and user-facing wording
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    NotFound,
    Authorization,
    Backend,
}

impl HostelError {
    /// Classify the error into the closed taxonomy
    pub fn kind(&self) -> ErrorKind {
        match self {
            HostelError::InvalidInput(_)
            | HostelError::DuplicateApplication { .. }
            | HostelError::AlreadyApproved { .. }
            | HostelError::RoomFull { .. } => ErrorKind::Validation,
            HostelError::StudentNotFound { .. }
            | HostelError::ApplicationNotFound { .. }
            | HostelError::ComplaintNotFound { .. }
            | HostelError::RoomNotFound { .. }
            | HostelError::VoucherNotFound => ErrorKind::NotFound,
            HostelError::PermissionDenied(_) => ErrorKind::Authorization,
            _ => ErrorKind::Backend,
        }
    }

    /// User-safe message for this error
    ///
    /// Backend failures always collapse to a generic message; the detail only
    /// goes to the log.
    pub fn user_message(&self) -> String {
        match self.kind() {
            ErrorKind::Backend => "An error occurred. Please try again.".to_string(),
            ErrorKind::Authorization => {
                "You do not have permission to access this page.".to_string()
            }
            ErrorKind::Validation | ErrorKind::NotFound => match self {
                HostelError::InvalidInput(msg) => msg.clone(),
                HostelError::DuplicateApplication { .. } => {
                    "You have already submitted an application.".to_string()
                }
                HostelError::AlreadyApproved { .. } => {
                    "This application has already been approved.".to_string()
                }
                HostelError::RoomFull { .. } => {
                    "The selected room is already at full capacity.".to_string()
                }
                HostelError::StudentNotFound { .. } => {
                    "Student profile not found. Please contact administrator.".to_string()
                }
                HostelError::VoucherNotFound => {
                    "Fee voucher not available at this time.".to_string()
                }
                HostelError::ApplicationNotFound { .. } => "Application not found.".to_string(),
                HostelError::ComplaintNotFound { .. } => "Complaint not found.".to_string(),
                HostelError::RoomNotFound { .. } => "Room not found.".to_string(),
                _ => "An error occurred. Please try again.".to_string(),
            },
        }
    }
}

impl IntoResponse for HostelError {
    fn into_response(self) -> Response {
        let status = match self.kind() {
            ErrorKind::Validation => StatusCode::BAD_REQUEST,
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::Authorization => StatusCode::FORBIDDEN,
            ErrorKind::Backend => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = %self, "Request failed");
        } else {
            tracing::warn!(error = %self, "Request rejected");
        }

        (status, Html(self.user_message())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        let err = HostelError::InvalidInput("bad form".to_string());
        assert_eq!(err.kind(), ErrorKind::Validation);

        let err = HostelError::StudentNotFound { user_id: 1 };
        assert_eq!(err.kind(), ErrorKind::NotFound);

        let err = HostelError::PermissionDenied("admins only".to_string());
        assert_eq!(err.kind(), ErrorKind::Authorization);

        let err = HostelError::Config("missing database url".to_string());
        assert_eq!(err.kind(), ErrorKind::Backend);
    }

    #[test]
    fn test_backend_detail_is_hidden() {
        let err = HostelError::Config("postgres password was 'hunter2'".to_string());
        assert_eq!(err.user_message(), "An error occurred. Please try again.");
    }

    #[test]
    fn test_validation_message_is_shown() {
        let err = HostelError::InvalidInput("Semester must be between 1 and 8.".to_string());
        assert_eq!(err.user_message(), "Semester must be between 1 and 8.");
    }

    #[test]
    fn test_duplicate_application_message() {
        let err = HostelError::DuplicateApplication { student_id: 7 };
        assert_eq!(err.user_message(), "You have already submitted an application.");
    }
}
