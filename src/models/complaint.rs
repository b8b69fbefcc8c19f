//! Complaint model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Complaint lifecycle status
///
/// The set is closed; anything else is rejected at the parse boundary and
/// never reaches the database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComplaintStatus {
    Pending,
    InProgress,
    Resolved,
}

impl ComplaintStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ComplaintStatus::Pending => "Pending",
            ComplaintStatus::InProgress => "In Progress",
            ComplaintStatus::Resolved => "Resolved",
        }
    }
}

impl std::fmt::Display for ComplaintStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ComplaintStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pending" => Ok(ComplaintStatus::Pending),
            "In Progress" => Ok(ComplaintStatus::InProgress),
            "Resolved" => Ok(ComplaintStatus::Resolved),
            other => Err(format!("unknown complaint status: {other}")),
        }
    }
}

impl TryFrom<String> for ComplaintStatus {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Complaint {
    pub id: i64,
    pub description: String,
    #[sqlx(try_from = "String")]
    pub status: ComplaintStatus,
    pub student_id: i64,
    pub created_at: DateTime<Utc>,
}

/// Complaint joined with the filing student, for the admin listing
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ComplaintRecord {
    pub id: i64,
    pub description: String,
    #[sqlx(try_from = "String")]
    pub status: ComplaintStatus,
    pub student_code: String,
    pub student_name: String,
    pub student_email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateComplaintRequest {
    pub student_id: i64,
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_parse_roundtrip() {
        for status in [
            ComplaintStatus::Pending,
            ComplaintStatus::InProgress,
            ComplaintStatus::Resolved,
        ] {
            assert_eq!(status.as_str().parse::<ComplaintStatus>().unwrap(), status);
        }
    }

    #[test]
    fn test_in_progress_uses_display_form() {
        assert_eq!(ComplaintStatus::InProgress.as_str(), "In Progress");
        assert_eq!(
            "In Progress".parse::<ComplaintStatus>().unwrap(),
            ComplaintStatus::InProgress
        );
    }

    #[test]
    fn test_status_parse_rejects_out_of_range() {
        assert!("Closed".parse::<ComplaintStatus>().is_err());
        assert!("pending".parse::<ComplaintStatus>().is_err());
        assert!("".parse::<ComplaintStatus>().is_err());
    }
}
