//! Dashboard statistics repository implementation

use sqlx::PgPool;
use tracing::{error, info, warn};

use crate::models::dashboard::DashboardStats;
use crate::utils::errors::HostelError;

#[derive(Debug, Clone)]
pub struct StatsRepository {
    pool: PgPool,
}

impl StatsRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Retrieve the admin dashboard counters
    ///
    /// A missing row yields all-zero counters, not an error.
    pub async fn fetch_dashboard(&self) -> Result<DashboardStats, HostelError> {
        let stats = sqlx::query_as::<_, DashboardStats>(
            r#"
            SELECT
                (SELECT COUNT(*) FROM students) AS total_students,
                (SELECT COUNT(*) FROM rooms) AS total_rooms,
                (SELECT COUNT(*) FROM applications WHERE status = 'pending') AS pending_applications,
                (SELECT COUNT(*) FROM complaints WHERE status = 'Pending') AS pending_complaints,
                (SELECT COUNT(*) FROM complaints WHERE status = 'In Progress') AS inprogress_complaints,
                (SELECT COUNT(*) FROM complaints WHERE status = 'Resolved') AS resolved_complaints,
                (SELECT COUNT(*) FROM applications WHERE status = 'approved') AS approved_applications,
                (SELECT COUNT(*) FROM students WHERE application_status = TRUE) AS students_with_rooms
            "#,
        )
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Error fetching dashboard statistics");
            e
        })?;

        match stats {
            Some(stats) => {
                info!("Fetched dashboard statistics");
                Ok(stats)
            }
            None => {
                warn!("No dashboard statistics returned");
                Ok(DashboardStats::default())
            }
        }
    }

    /// Count hostels
    pub async fn count_hostels(&self) -> Result<i64, HostelError> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM hostels")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                error!(error = %e, "Error counting hostels");
                e
            })?;

        Ok(count.0)
    }
}
