//! Room application repository implementation

use sqlx::PgPool;
use tracing::{error, info};

use crate::models::application::{
    Application, ApplicationRecord, ApplicationStatus, ApplicationSummary,
    CreateApplicationRequest,
};
use crate::utils::errors::HostelError;

#[derive(Debug, Clone)]
pub struct ApplicationRepository {
    pool: PgPool,
}

impl ApplicationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new pending application for a student
    pub async fn create(
        &self,
        request: CreateApplicationRequest,
    ) -> Result<Application, HostelError> {
        let application = sqlx::query_as::<_, Application>(
            r#"
            INSERT INTO applications (room_type, occupancy, status, student_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id, room_type, occupancy, status, student_id, room_id, created_at
            "#,
        )
        .bind(request.room_type)
        .bind(request.occupancy)
        .bind(ApplicationStatus::Pending.as_str())
        .bind(request.student_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Error creating application");
            e
        })?;

        Ok(application)
    }

    /// Find an application by ID
    pub async fn find_by_id(&self, id: i64) -> Result<Option<Application>, HostelError> {
        let application = sqlx::query_as::<_, Application>(
            "SELECT id, room_type, occupancy, status, student_id, room_id, created_at FROM applications WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!(application_id = id, error = %e, "Error fetching application by id");
            e
        })?;

        Ok(application)
    }

    /// Whether the student already has an application on file
    pub async fn exists_for_student(&self, student_id: i64) -> Result<bool, HostelError> {
        let exists: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM applications WHERE student_id = $1)")
                .bind(student_id)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| {
                    error!(student_id = student_id, error = %e, "Error checking for existing application");
                    e
                })?;

        Ok(exists.0)
    }

    /// Retrieve all applications with applicant details, newest first
    pub async fn fetch_all(&self) -> Result<Vec<ApplicationRecord>, HostelError> {
        let applications = sqlx::query_as::<_, ApplicationRecord>(
            r#"
            SELECT a.id, a.room_type, a.occupancy, a.status,
                   s.user_id AS applicant_user_id, s.student_code,
                   s.name AS applicant_name, s.email AS applicant_email, s.semester
            FROM applications a
            JOIN students s ON s.id = a.student_id
            ORDER BY a.id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Error fetching applications");
            e
        })?;

        info!("Fetched {} applications from database", applications.len());
        Ok(applications)
    }

    /// Retrieve applications submitted by a specific student
    pub async fn fetch_by_student(
        &self,
        student_id: i64,
    ) -> Result<Vec<ApplicationSummary>, HostelError> {
        let applications = sqlx::query_as::<_, ApplicationSummary>(
            r#"
            SELECT id, room_type, occupancy, status
            FROM applications
            WHERE student_id = $1
            ORDER BY id DESC
            "#,
        )
        .bind(student_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!(student_id = student_id, error = %e, "Error fetching applications by student");
            e
        })?;

        info!(
            "Fetched {} applications for student {}",
            applications.len(),
            student_id
        );
        Ok(applications)
    }

    /// Retrieve all pending (unapproved) applications with applicant details
    pub async fn fetch_pending(&self) -> Result<Vec<ApplicationRecord>, HostelError> {
        let applications = sqlx::query_as::<_, ApplicationRecord>(
            r#"
            SELECT a.id, a.room_type, a.occupancy, a.status,
                   s.user_id AS applicant_user_id, s.student_code,
                   s.name AS applicant_name, s.email AS applicant_email, s.semester
            FROM applications a
            JOIN students s ON s.id = a.student_id
            WHERE a.status = $1
            ORDER BY a.id DESC
            "#,
        )
        .bind(ApplicationStatus::Pending.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Error fetching pending applications");
            e
        })?;

        info!("Fetched {} pending applications", applications.len());
        Ok(applications)
    }

    /// Approve an application and allocate a room
    ///
    /// Single transaction: the application is marked approved and linked to
    /// the room, the room gains an occupant, and the student's allocation
    /// flag is set.
    pub async fn approve(&self, application_id: i64, room_id: i64) -> Result<(), HostelError> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            error!(error = %e, "Error starting approval transaction");
            e
        })?;

        let result = sqlx::query(
            "UPDATE applications SET status = $2, room_id = $3 WHERE id = $1 AND status = $4",
        )
        .bind(application_id)
        .bind(ApplicationStatus::Approved.as_str())
        .bind(room_id)
        .bind(ApplicationStatus::Pending.as_str())
        .execute(&mut *tx)
        .await?;

        if result.rows_affected() == 0 {
            return Err(HostelError::AlreadyApproved { application_id });
        }

        sqlx::query("UPDATE rooms SET current_occupants = current_occupants + 1 WHERE id = $1")
            .bind(room_id)
            .execute(&mut *tx)
            .await?;

        sqlx::query(
            r#"
            UPDATE students SET application_status = TRUE
            WHERE id = (SELECT student_id FROM applications WHERE id = $1)
            "#,
        )
        .bind(application_id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await.map_err(|e| {
            error!(application_id = application_id, error = %e, "Error committing approval");
            e
        })?;

        info!(
            "Approved application {} and allocated room {}",
            application_id, room_id
        );
        Ok(())
    }
}
