//! Database service layer
//!
//! This module provides a high-level interface to database operations,
//! bundling the repositories and the operations that span more than one
//! aggregate.

use tracing::{info, warn};

use crate::database::{
    ApplicationRepository, ComplaintRepository, DatabasePool, RoomRepository, StatsRepository,
    UserRepository,
};
use crate::models::application::{Application, CreateApplicationRequest};
use crate::models::complaint::{Complaint, ComplaintStatus, CreateComplaintRequest};
use crate::models::user::{
    Admin, CreateAdminRequest, CreateStudentRequest, CreateUserRequest, Role, Student,
};
use crate::utils::errors::HostelError;

#[derive(Debug, Clone)]
pub struct DatabaseService {
    pub users: UserRepository,
    pub complaints: ComplaintRepository,
    pub applications: ApplicationRepository,
    pub rooms: RoomRepository,
    pub stats: StatsRepository,
}

impl DatabaseService {
    pub fn new(pool: DatabasePool) -> Self {
        Self {
            users: UserRepository::new(pool.clone()),
            complaints: ComplaintRepository::new(pool.clone()),
            applications: ApplicationRepository::new(pool.clone()),
            rooms: RoomRepository::new(pool.clone()),
            stats: StatsRepository::new(pool),
        }
    }

    /// Register a student account: user row plus student profile
    ///
    /// The student code is derived from the username (`STU_<USERNAME>`).
    pub async fn register_student(
        &self,
        username: &str,
        password_hash: &str,
        name: &str,
        email: &str,
        semester: i32,
    ) -> Result<Student, HostelError> {
        if self.users.find_by_username(username).await?.is_some() {
            warn!(username = username, "Signup rejected, username taken");
            return Err(HostelError::InvalidInput(
                "An account with this username already exists.".to_string(),
            ));
        }

        let user = self
            .users
            .create(CreateUserRequest {
                username: username.to_string(),
                password_hash: password_hash.to_string(),
                role: Role::Student,
            })
            .await?;

        let student = self
            .users
            .create_student(CreateStudentRequest {
                user_id: user.id,
                student_code: format!("STU_{}", username.to_uppercase()),
                name: name.to_string(),
                semester,
                email: email.to_string(),
            })
            .await?;

        info!("New student registered: {}", student.student_code);
        Ok(student)
    }

    /// Register an admin account: user row plus admin profile
    pub async fn register_admin(
        &self,
        username: &str,
        password_hash: &str,
        name: &str,
        email: &str,
    ) -> Result<Admin, HostelError> {
        if self.users.find_by_username(username).await?.is_some() {
            warn!(username = username, "Signup rejected, username taken");
            return Err(HostelError::InvalidInput(
                "An account with this username already exists.".to_string(),
            ));
        }

        let user = self
            .users
            .create(CreateUserRequest {
                username: username.to_string(),
                password_hash: password_hash.to_string(),
                role: Role::Admin,
            })
            .await?;

        let admin = self
            .users
            .create_admin(CreateAdminRequest {
                user_id: user.id,
                admin_code: format!("ADM_{}", username.to_uppercase()),
                name: name.to_string(),
                email: email.to_string(),
            })
            .await?;

        info!("New admin registered: {}", admin.admin_code);
        Ok(admin)
    }

    /// Look up the student profile for a user, failing when absent
    pub async fn student_profile(&self, user_id: i64) -> Result<Student, HostelError> {
        self.users
            .find_student_by_user(user_id)
            .await?
            .ok_or(HostelError::StudentNotFound { user_id })
    }

    /// Lodge a new complaint for a student
    pub async fn lodge_complaint(
        &self,
        student_id: i64,
        description: String,
    ) -> Result<Complaint, HostelError> {
        let complaint = self
            .complaints
            .create(CreateComplaintRequest {
                student_id,
                description,
            })
            .await?;

        info!(
            student_id = student_id,
            complaint_id = complaint.id,
            "Complaint lodged"
        );
        Ok(complaint)
    }

    /// Submit a room application for a student
    ///
    /// A student may hold at most one application; a second submission is
    /// rejected without creating a record. Two simultaneous submissions can
    /// both pass this check; the unique index on the applicant backstops
    /// that race at the storage layer.
    pub async fn submit_application(
        &self,
        student_id: i64,
        room_type: String,
        occupancy: String,
    ) -> Result<Application, HostelError> {
        if self.applications.exists_for_student(student_id).await? {
            warn!(
                student_id = student_id,
                "Student attempted duplicate application"
            );
            return Err(HostelError::DuplicateApplication { student_id });
        }

        let application = self
            .applications
            .create(CreateApplicationRequest {
                student_id,
                room_type,
                occupancy,
            })
            .await?;

        info!(
            student_id = student_id,
            application_id = application.id,
            "Application submitted"
        );
        Ok(application)
    }

    /// Approve an application and allocate the given room
    ///
    /// Fails clearly when the application is already approved, and rejects
    /// rooms that are already at full capacity.
    pub async fn approve_application(
        &self,
        application_id: i64,
        room_id: i64,
    ) -> Result<(), HostelError> {
        let application = self
            .applications
            .find_by_id(application_id)
            .await?
            .ok_or(HostelError::ApplicationNotFound { application_id })?;

        if application.status == crate::models::application::ApplicationStatus::Approved {
            warn!(
                application_id = application_id,
                "Refusing to approve an already approved application"
            );
            return Err(HostelError::AlreadyApproved { application_id });
        }

        let room = self
            .rooms
            .find_by_id(room_id)
            .await?
            .ok_or(HostelError::RoomNotFound { room_id })?;

        if !room.has_capacity() {
            warn!(room_id = room_id, "Refusing to allocate a full room");
            return Err(HostelError::RoomFull { room_id });
        }

        self.applications.approve(application_id, room_id).await
    }

    /// Update a complaint's status
    pub async fn update_complaint_status(
        &self,
        complaint_id: i64,
        status: ComplaintStatus,
    ) -> Result<(), HostelError> {
        self.complaints.update_status(complaint_id, status).await
    }
}
