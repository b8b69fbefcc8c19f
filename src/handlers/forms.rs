//! Form payloads and validation
//!
//! On validation failure the handler redisplays the form with the collected
//! field errors; nothing is persisted.

use serde::{Deserialize, Serialize};

/// Occupancy categories accepted on a room application
pub const OCCUPANCIES: [&str; 3] = ["Single", "Double", "Triple"];

#[derive(Debug, Clone, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

fn field_error(field: &'static str, message: &str) -> FieldError {
    FieldError {
        field,
        message: message.to_string(),
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ComplaintForm {
    #[serde(default)]
    pub description: String,
}

impl ComplaintForm {
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();
        let description = self.description.trim();

        if description.is_empty() {
            errors.push(field_error("description", "Please describe your complaint."));
        } else if description.len() > 1000 {
            errors.push(field_error(
                "description",
                "Complaint description must be at most 1000 characters.",
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApplicationForm {
    #[serde(default)]
    pub room_type: String,
    #[serde(default)]
    pub occupancy: String,
}

impl ApplicationForm {
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();

        if self.room_type.trim().is_empty() {
            errors.push(field_error("room_type", "Please select a room type."));
        }

        if !OCCUPANCIES.contains(&self.occupancy.as_str()) {
            errors.push(field_error(
                "occupancy",
                "Occupancy must be Single, Double or Triple.",
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SignupForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    pub semester: Option<i32>,
    #[serde(default)]
    pub account_type: String,
}

impl SignupForm {
    pub fn is_admin_signup(&self) -> bool {
        self.account_type == "admin"
    }

    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();

        let username = self.username.trim();
        if username.len() < 3 || username.len() > 32 {
            errors.push(field_error(
                "username",
                "Username must be between 3 and 32 characters.",
            ));
        }

        if self.password.len() < 8 {
            errors.push(field_error(
                "password",
                "Password must be at least 8 characters.",
            ));
        }

        if self.name.trim().is_empty() {
            errors.push(field_error("name", "Please provide your name."));
        }

        if !self.email.contains('@') {
            errors.push(field_error("email", "Please provide a valid email address."));
        }

        if !matches!(self.account_type.as_str(), "student" | "admin") {
            errors.push(field_error(
                "account_type",
                "Please choose a student or admin account.",
            ));
        }

        if self.account_type == "student" {
            match self.semester {
                Some(semester) if (1..=8).contains(&semester) => {}
                _ => errors.push(field_error(
                    "semester",
                    "Semester must be between 1 and 8.",
                )),
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        if self.username.trim().is_empty() || self.password.is_empty() {
            return Err(vec![field_error(
                "username",
                "Please provide both username and password.",
            )]);
        }
        Ok(())
    }
}

/// POST body for the admin complaint status update
#[derive(Debug, Clone, Deserialize)]
pub struct StatusForm {
    #[serde(default)]
    pub status: String,
}

/// POST body for the admin application approval
#[derive(Debug, Clone, Deserialize)]
pub struct ApproveForm {
    pub room_id: i64,
}

/// Query filters for the available rooms listing
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RoomFilter {
    pub room_type: Option<String>,
    pub occupancy: Option<String>,
}

/// Query filter for the admin complaint listing
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ComplaintFilter {
    pub status: Option<String>,
}

/// Treat an absent or blank filter value as "no filter"
pub fn normalize_filter(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complaint_form_requires_description() {
        let form = ComplaintForm {
            description: "   ".to_string(),
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "description");

        let form = ComplaintForm {
            description: "AC not working".to_string(),
        };
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_complaint_form_rejects_oversized_description() {
        let form = ComplaintForm {
            description: "x".repeat(1001),
        };
        assert!(form.validate().is_err());
    }

    #[test]
    fn test_application_form_checks_occupancy_category() {
        let form = ApplicationForm {
            room_type: "Single".to_string(),
            occupancy: "Quad".to_string(),
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors[0].field, "occupancy");

        let form = ApplicationForm {
            room_type: "Single".to_string(),
            occupancy: "Double".to_string(),
        };
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_signup_form_student_requires_semester() {
        let mut form = SignupForm {
            username: "john".to_string(),
            password: "student123".to_string(),
            name: "John Doe".to_string(),
            email: "john@student.com".to_string(),
            semester: None,
            account_type: "student".to_string(),
        };
        assert!(form.validate().is_err());

        form.semester = Some(3);
        assert!(form.validate().is_ok());

        form.semester = Some(12);
        assert!(form.validate().is_err());
    }

    #[test]
    fn test_signup_form_admin_needs_no_semester() {
        let form = SignupForm {
            username: "admin".to_string(),
            password: "admin1234".to_string(),
            name: "Admin User".to_string(),
            email: "admin@hostelms.com".to_string(),
            semester: None,
            account_type: "admin".to_string(),
        };
        assert!(form.validate().is_ok());
        assert!(form.is_admin_signup());
    }

    #[test]
    fn test_login_form_requires_both_fields() {
        let form = LoginForm {
            username: "john".to_string(),
            password: String::new(),
        };
        assert!(form.validate().is_err());

        let form = LoginForm {
            username: "john".to_string(),
            password: "student123".to_string(),
        };
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_normalize_filter_blanks_out_empty_values() {
        assert_eq!(normalize_filter(&None), None);
        assert_eq!(normalize_filter(&Some("  ".to_string())), None);
        assert_eq!(normalize_filter(&Some("Single".to_string())), Some("Single"));
    }
}
