//! Room application model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Application status, pending until an admin approves and allocates a room
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    Pending,
    Approved,
}

impl ApplicationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationStatus::Pending => "pending",
            ApplicationStatus::Approved => "approved",
        }
    }
}

impl std::fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ApplicationStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(ApplicationStatus::Pending),
            "approved" => Ok(ApplicationStatus::Approved),
            other => Err(format!("unknown application status: {other}")),
        }
    }
}

impl TryFrom<String> for ApplicationStatus {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Application {
    pub id: i64,
    pub room_type: String,
    pub occupancy: String,
    #[sqlx(try_from = "String")]
    pub status: ApplicationStatus,
    pub student_id: i64,
    pub room_id: Option<i64>,
    pub created_at: DateTime<Utc>,
}

/// Application joined with the applicant, for the admin listings
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ApplicationRecord {
    pub id: i64,
    pub room_type: String,
    pub occupancy: String,
    #[sqlx(try_from = "String")]
    pub status: ApplicationStatus,
    pub applicant_user_id: i64,
    pub student_code: String,
    pub applicant_name: String,
    pub applicant_email: String,
    pub semester: i32,
}

/// Compact per-student view of an application
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ApplicationSummary {
    pub id: i64,
    pub room_type: String,
    pub occupancy: String,
    #[sqlx(try_from = "String")]
    pub status: ApplicationStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateApplicationRequest {
    pub student_id: i64,
    pub room_type: String,
    pub occupancy: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_parse_roundtrip() {
        assert_eq!(
            "pending".parse::<ApplicationStatus>().unwrap(),
            ApplicationStatus::Pending
        );
        assert_eq!(
            "approved".parse::<ApplicationStatus>().unwrap(),
            ApplicationStatus::Approved
        );
    }

    #[test]
    fn test_status_parse_rejects_unknown() {
        assert!("rejected".parse::<ApplicationStatus>().is_err());
        assert!("Approved".parse::<ApplicationStatus>().is_err());
    }
}
