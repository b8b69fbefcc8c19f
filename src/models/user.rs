//! User, student and admin models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Account role, stored as text in the database
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Admin,
    Unassigned,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Admin => "admin",
            Role::Unassigned => "unassigned",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "student" => Ok(Role::Student),
            "admin" => Ok(Role::Admin),
            "unassigned" => Ok(Role::Unassigned),
            other => Err(format!("unknown role: {other}")),
        }
    }
}

impl TryFrom<String> for Role {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    #[sqlx(try_from = "String")]
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Check whether this user holds the given role
    pub fn has_role(&self, role: Role) -> bool {
        self.role == role
    }

    /// Check whether this user holds any of the given roles
    pub fn has_any_role(&self, roles: &[Role]) -> bool {
        roles.contains(&self.role)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Student {
    pub id: i64,
    pub user_id: i64,
    pub student_code: String,
    pub name: String,
    pub semester: i32,
    pub email: String,
    pub application_status: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Admin {
    pub id: i64,
    pub user_id: i64,
    pub admin_code: String,
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUserRequest {
    pub username: String,
    pub password_hash: String,
    pub role: Role,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateStudentRequest {
    pub user_id: i64,
    pub student_code: String,
    pub name: String,
    pub semester: i32,
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAdminRequest {
    pub user_id: i64,
    pub admin_code: String,
    pub name: String,
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_parse_roundtrip() {
        assert_eq!("student".parse::<Role>().unwrap(), Role::Student);
        assert_eq!("admin".parse::<Role>().unwrap(), Role::Admin);
        assert_eq!("unassigned".parse::<Role>().unwrap(), Role::Unassigned);
        assert_eq!(Role::Admin.as_str(), "admin");
    }

    #[test]
    fn test_role_parse_rejects_unknown() {
        assert!("superuser".parse::<Role>().is_err());
        assert!("Student".parse::<Role>().is_err());
    }

    #[test]
    fn test_has_any_role() {
        let user = User {
            id: 1,
            username: "john".to_string(),
            password_hash: String::new(),
            role: Role::Student,
            created_at: Utc::now(),
        };
        assert!(user.has_role(Role::Student));
        assert!(user.has_any_role(&[Role::Student, Role::Admin]));
        assert!(!user.has_any_role(&[Role::Admin]));
    }
}
