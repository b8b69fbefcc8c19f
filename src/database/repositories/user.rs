//! User, student and admin repository implementation

use sqlx::PgPool;
use tracing::error;

use crate::models::user::{
    Admin, CreateAdminRequest, CreateStudentRequest, CreateUserRequest, Student, User,
};
use crate::utils::errors::HostelError;

#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new user account
    pub async fn create(&self, request: CreateUserRequest) -> Result<User, HostelError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (username, password_hash, role)
            VALUES ($1, $2, $3)
            RETURNING id, username, password_hash, role, created_at
            "#,
        )
        .bind(request.username)
        .bind(request.password_hash)
        .bind(request.role.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Error creating user");
            e
        })?;

        Ok(user)
    }

    /// Find user by ID
    pub async fn find_by_id(&self, id: i64) -> Result<Option<User>, HostelError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, username, password_hash, role, created_at FROM users WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!(user_id = id, error = %e, "Error fetching user by id");
            e
        })?;

        Ok(user)
    }

    /// Find user by username
    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>, HostelError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, username, password_hash, role, created_at FROM users WHERE username = $1",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!(username = username, error = %e, "Error fetching user by username");
            e
        })?;

        Ok(user)
    }

    /// Create a student profile for an existing user
    pub async fn create_student(
        &self,
        request: CreateStudentRequest,
    ) -> Result<Student, HostelError> {
        let student = sqlx::query_as::<_, Student>(
            r#"
            INSERT INTO students (user_id, student_code, name, semester, email)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, user_id, student_code, name, semester, email, application_status
            "#,
        )
        .bind(request.user_id)
        .bind(request.student_code)
        .bind(request.name)
        .bind(request.semester)
        .bind(request.email)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Error creating student profile");
            e
        })?;

        Ok(student)
    }

    /// Find the student profile linked to a user
    pub async fn find_student_by_user(&self, user_id: i64) -> Result<Option<Student>, HostelError> {
        let student = sqlx::query_as::<_, Student>(
            "SELECT id, user_id, student_code, name, semester, email, application_status FROM students WHERE user_id = $1",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!(user_id = user_id, error = %e, "Error fetching student by user");
            e
        })?;

        Ok(student)
    }

    /// Find a student by their natural code
    pub async fn find_student_by_code(&self, code: &str) -> Result<Option<Student>, HostelError> {
        let student = sqlx::query_as::<_, Student>(
            "SELECT id, user_id, student_code, name, semester, email, application_status FROM students WHERE student_code = $1",
        )
        .bind(code)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!(student_code = code, error = %e, "Error fetching student by code");
            e
        })?;

        Ok(student)
    }

    /// Flip whether the student currently has an allocated room
    pub async fn set_student_application_status(
        &self,
        student_id: i64,
        allocated: bool,
    ) -> Result<(), HostelError> {
        sqlx::query("UPDATE students SET application_status = $2 WHERE id = $1")
            .bind(student_id)
            .bind(allocated)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                error!(student_id = student_id, error = %e, "Error updating student allocation flag");
                e
            })?;

        Ok(())
    }

    /// Create an admin profile for an existing user
    pub async fn create_admin(&self, request: CreateAdminRequest) -> Result<Admin, HostelError> {
        let admin = sqlx::query_as::<_, Admin>(
            r#"
            INSERT INTO admins (user_id, admin_code, name, email)
            VALUES ($1, $2, $3, $4)
            RETURNING id, user_id, admin_code, name, email
            "#,
        )
        .bind(request.user_id)
        .bind(request.admin_code)
        .bind(request.name)
        .bind(request.email)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Error creating admin profile");
            e
        })?;

        Ok(admin)
    }

    /// Find the admin profile linked to a user
    pub async fn find_admin_by_user(&self, user_id: i64) -> Result<Option<Admin>, HostelError> {
        let admin = sqlx::query_as::<_, Admin>(
            "SELECT id, user_id, admin_code, name, email FROM admins WHERE user_id = $1",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!(user_id = user_id, error = %e, "Error fetching admin by user");
            e
        })?;

        Ok(admin)
    }

    /// Find an admin by their natural code
    pub async fn find_admin_by_code(&self, code: &str) -> Result<Option<Admin>, HostelError> {
        let admin = sqlx::query_as::<_, Admin>(
            "SELECT id, user_id, admin_code, name, email FROM admins WHERE admin_code = $1",
        )
        .bind(code)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!(admin_code = code, error = %e, "Error fetching admin by code");
            e
        })?;

        Ok(admin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_user_repository_creation() {
        // A lazy pool never contacts the server, so this runs anywhere.
        let pool = sqlx::postgres::PgPoolOptions::new()
            .connect_lazy("postgresql://localhost/hostelms_test")
            .unwrap();
        let repo = UserRepository::new(pool);
        assert!(!repo.pool.is_closed());
    }
}
