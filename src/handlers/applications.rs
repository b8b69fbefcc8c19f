//! Room application handlers
//!
//! Students submit one application each; admins review the queue and approve
//! with a room allocation.

use axum::extract::{Path, State};
use axum::response::{IntoResponse, Redirect, Response};
use axum::{Extension, Form};
use serde_json::json;
use tower_sessions::Session;
use tracing::{info, warn};

use crate::handlers::forms::{ApplicationForm, ApproveForm};
use crate::handlers::render::render_page;
use crate::middleware::auth::AuthUser;
use crate::models::user::Student;
use crate::state::AppState;
use crate::utils::errors::{ErrorKind, HostelError, Result};
use crate::utils::flash;

/// Resolve the calling student, or the redirect shown when the profile is missing
async fn current_student(
    state: &AppState,
    session: &Session,
    user_id: i64,
) -> Result<std::result::Result<Student, Response>> {
    match state.db.student_profile(user_id).await {
        Ok(student) => Ok(Ok(student)),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            flash::error(session, e.user_message()).await?;
            Ok(Err(Redirect::to("/").into_response()))
        }
        Err(e) => Err(e),
    }
}

/// GET /applications/new (student)
///
/// The duplicate check runs before the form is even shown, matching the
/// submission path.
pub async fn submit_application_form(
    State(state): State<AppState>,
    session: Session,
    Extension(AuthUser(user)): Extension<AuthUser>,
) -> Result<Response> {
    let student = match current_student(&state, &session, user.id).await? {
        Ok(student) => student,
        Err(redirect) => return Ok(redirect),
    };

    if state.db.applications.exists_for_student(student.id).await? {
        warn!(
            "Student {} attempted duplicate application",
            student.student_code
        );
        flash::warning(&session, "You have already submitted an application.").await?;
        return Ok(Redirect::to("/").into_response());
    }

    render_page(&state, &session, "hostel/room_application", json!({})).await
}

/// POST /applications/new (student)
pub async fn submit_application(
    State(state): State<AppState>,
    session: Session,
    Extension(AuthUser(user)): Extension<AuthUser>,
    Form(form): Form<ApplicationForm>,
) -> Result<Response> {
    let student = match current_student(&state, &session, user.id).await? {
        Ok(student) => student,
        Err(redirect) => return Ok(redirect),
    };

    if let Err(errors) = form.validate() {
        return render_page(
            &state,
            &session,
            "hostel/room_application",
            json!({
                "form": { "room_type": form.room_type, "occupancy": form.occupancy },
                "errors": errors,
            }),
        )
        .await;
    }

    match state
        .db
        .submit_application(student.id, form.room_type.clone(), form.occupancy.clone())
        .await
    {
        Ok(application) => {
            info!(
                "Student {} submitted application ID {}",
                student.student_code, application.id
            );
            flash::success(&session, "Room application submitted successfully!").await?;
            Ok(Redirect::to("/").into_response())
        }
        Err(e @ HostelError::DuplicateApplication { .. }) => {
            flash::warning(&session, e.user_message()).await?;
            Ok(Redirect::to("/").into_response())
        }
        Err(e) => Err(e),
    }
}

/// GET /applications (admin)
pub async fn list_applications(
    State(state): State<AppState>,
    session: Session,
    Extension(AuthUser(user)): Extension<AuthUser>,
) -> Result<Response> {
    let applications = state.db.applications.fetch_all().await?;

    info!("Admin {} fetched all applications", user.username);
    render_page(
        &state,
        &session,
        "hostel/applications",
        json!({ "applications": applications }),
    )
    .await
}

/// GET /applications/pending (admin)
pub async fn pending_applications(
    State(state): State<AppState>,
    session: Session,
    Extension(AuthUser(user)): Extension<AuthUser>,
) -> Result<Response> {
    let applications = state.db.applications.fetch_pending().await?;
    let rooms = state.db.rooms.fetch_available(None, None).await?;

    info!("Admin {} fetched pending applications", user.username);
    render_page(
        &state,
        &session,
        "hostel/pending_applications",
        json!({ "applications": applications, "available_rooms": rooms }),
    )
    .await
}

/// POST /applications/{id}/approve (admin)
pub async fn approve_application(
    State(state): State<AppState>,
    session: Session,
    Extension(AuthUser(user)): Extension<AuthUser>,
    Path(application_id): Path<i64>,
    Form(form): Form<ApproveForm>,
) -> Result<Response> {
    match state
        .db
        .approve_application(application_id, form.room_id)
        .await
    {
        Ok(()) => {
            info!(
                "Admin {} approved application {} with room {}",
                user.username, application_id, form.room_id
            );
            flash::success(&session, "Application approved and room allocated.").await?;
            Ok(Redirect::to("/applications/pending").into_response())
        }
        Err(e) if matches!(e.kind(), ErrorKind::Validation | ErrorKind::NotFound) => {
            flash::error(&session, e.user_message()).await?;
            Ok(Redirect::to("/applications/pending").into_response())
        }
        Err(e) => Err(e),
    }
}
