//! Complaint repository implementation
//!
//! Every read returns an empty list when nothing matches; database errors
//! are logged and propagated unchanged.

use sqlx::PgPool;
use tracing::{error, info};

use crate::models::complaint::{
    Complaint, ComplaintRecord, ComplaintStatus, CreateComplaintRequest,
};
use crate::utils::errors::HostelError;

#[derive(Debug, Clone)]
pub struct ComplaintRepository {
    pool: PgPool,
}

impl ComplaintRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new complaint, starting in the Pending state
    pub async fn create(&self, request: CreateComplaintRequest) -> Result<Complaint, HostelError> {
        let complaint = sqlx::query_as::<_, Complaint>(
            r#"
            INSERT INTO complaints (description, status, student_id)
            VALUES ($1, $2, $3)
            RETURNING id, description, status, student_id, created_at
            "#,
        )
        .bind(request.description)
        .bind(ComplaintStatus::Pending.as_str())
        .bind(request.student_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Error creating complaint");
            e
        })?;

        Ok(complaint)
    }

    /// Retrieve all complaints with student details, newest first
    pub async fn fetch_all(&self) -> Result<Vec<ComplaintRecord>, HostelError> {
        let complaints = sqlx::query_as::<_, ComplaintRecord>(
            r#"
            SELECT c.id, c.description, c.status,
                   s.student_code, s.name AS student_name, s.email AS student_email
            FROM complaints c
            JOIN students s ON s.id = c.student_id
            ORDER BY c.id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Error fetching complaints");
            e
        })?;

        info!("Fetched {} complaints from database", complaints.len());
        Ok(complaints)
    }

    /// Retrieve complaints filed by a specific student, newest first
    pub async fn fetch_by_student(&self, student_id: i64) -> Result<Vec<Complaint>, HostelError> {
        let complaints = sqlx::query_as::<_, Complaint>(
            r#"
            SELECT id, description, status, student_id, created_at
            FROM complaints
            WHERE student_id = $1
            ORDER BY id DESC
            "#,
        )
        .bind(student_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!(student_id = student_id, error = %e, "Error fetching complaints by student");
            e
        })?;

        info!(
            "Fetched {} complaints for student {}",
            complaints.len(),
            student_id
        );
        Ok(complaints)
    }

    /// Retrieve complaints filtered by status, newest first
    pub async fn fetch_by_status(
        &self,
        status: ComplaintStatus,
    ) -> Result<Vec<ComplaintRecord>, HostelError> {
        let complaints = sqlx::query_as::<_, ComplaintRecord>(
            r#"
            SELECT c.id, c.description, c.status,
                   s.student_code, s.name AS student_name, s.email AS student_email
            FROM complaints c
            JOIN students s ON s.id = c.student_id
            WHERE c.status = $1
            ORDER BY c.id DESC
            "#,
        )
        .bind(status.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!(status = status.as_str(), error = %e, "Error fetching complaints by status");
            e
        })?;

        info!(
            "Fetched {} complaints with status {}",
            complaints.len(),
            status
        );
        Ok(complaints)
    }

    /// Update the status of a complaint
    pub async fn update_status(
        &self,
        complaint_id: i64,
        status: ComplaintStatus,
    ) -> Result<(), HostelError> {
        let result = sqlx::query("UPDATE complaints SET status = $2 WHERE id = $1")
            .bind(complaint_id)
            .bind(status.as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| {
                error!(complaint_id = complaint_id, error = %e, "Error updating complaint status");
                e
            })?;

        if result.rows_affected() == 0 {
            return Err(HostelError::ComplaintNotFound { complaint_id });
        }

        info!("Updated complaint {} status to {}", complaint_id, status);
        Ok(())
    }
}
