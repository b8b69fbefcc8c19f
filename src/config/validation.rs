//! Configuration validation

use crate::config::Settings;
use crate::utils::errors::HostelError;

/// Validate settings before the application starts
pub fn validate_settings(settings: &Settings) -> Result<(), HostelError> {
    if settings.database.url.is_empty() {
        return Err(HostelError::Config("Database URL is required".to_string()));
    }

    if !settings.database.url.starts_with("postgresql://")
        && !settings.database.url.starts_with("postgres://")
    {
        return Err(HostelError::Config(
            "Database URL must be a postgresql:// URL".to_string(),
        ));
    }

    if settings.database.max_connections == 0 {
        return Err(HostelError::Config(
            "Database max_connections must be greater than 0".to_string(),
        ));
    }

    if settings.database.min_connections > settings.database.max_connections {
        return Err(HostelError::Config(
            "Database min_connections cannot exceed max_connections".to_string(),
        ));
    }

    if settings.server.port == 0 {
        return Err(HostelError::Config("Server port is required".to_string()));
    }

    if settings.files.voucher_path.is_empty() {
        return Err(HostelError::Config(
            "Voucher file path is required".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_are_valid() {
        let settings = Settings::default();
        assert!(validate_settings(&settings).is_ok());
    }

    #[test]
    fn test_empty_database_url_rejected() {
        let mut settings = Settings::default();
        settings.database.url = String::new();
        assert!(validate_settings(&settings).is_err());
    }

    #[test]
    fn test_non_postgres_url_rejected() {
        let mut settings = Settings::default();
        settings.database.url = "mysql://localhost/hostelms".to_string();
        assert!(validate_settings(&settings).is_err());
    }

    #[test]
    fn test_connection_bounds_rejected() {
        let mut settings = Settings::default();
        settings.database.min_connections = 20;
        assert!(validate_settings(&settings).is_err());
    }
}
