//! Complaint handlers
//!
//! Students lodge complaints; admins list them and move them through the
//! Pending / In Progress / Resolved lifecycle.

use axum::extract::{Path, Query, State};
use axum::response::{IntoResponse, Redirect, Response};
use axum::{Extension, Form};
use serde_json::json;
use tower_sessions::Session;
use tracing::{info, warn};

use crate::handlers::forms::{normalize_filter, ComplaintFilter, ComplaintForm, StatusForm};
use crate::handlers::render::render_page;
use crate::middleware::auth::AuthUser;
use crate::models::complaint::ComplaintStatus;
use crate::state::AppState;
use crate::utils::errors::{ErrorKind, Result};
use crate::utils::flash;

/// GET /complaints/new (student)
pub async fn lodge_complaint_form(
    State(state): State<AppState>,
    session: Session,
) -> Result<Response> {
    render_page(&state, &session, "hostel/lodge_complaint", json!({})).await
}

/// POST /complaints/new (student)
pub async fn lodge_complaint(
    State(state): State<AppState>,
    session: Session,
    Extension(AuthUser(user)): Extension<AuthUser>,
    Form(form): Form<ComplaintForm>,
) -> Result<Response> {
    if let Err(errors) = form.validate() {
        return render_page(
            &state,
            &session,
            "hostel/lodge_complaint",
            json!({ "form": { "description": form.description }, "errors": errors }),
        )
        .await;
    }

    let student = match state.db.student_profile(user.id).await {
        Ok(student) => student,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            flash::error(&session, e.user_message()).await?;
            return Ok(Redirect::to("/").into_response());
        }
        Err(e) => return Err(e),
    };

    let complaint = state
        .db
        .lodge_complaint(student.id, form.description.trim().to_string())
        .await?;

    info!(
        "Student {} lodged complaint ID {}",
        student.student_code, complaint.id
    );
    flash::success(&session, "Complaint lodged successfully!").await?;
    Ok(Redirect::to("/").into_response())
}

/// GET /complaints (admin), with an optional ?status= filter
pub async fn list_complaints(
    State(state): State<AppState>,
    session: Session,
    Extension(AuthUser(user)): Extension<AuthUser>,
    Query(filter): Query<ComplaintFilter>,
) -> Result<Response> {
    let complaints = match normalize_filter(&filter.status) {
        Some(raw) => match raw.parse::<ComplaintStatus>() {
            Ok(status) => state.db.complaints.fetch_by_status(status).await?,
            Err(_) => {
                warn!(status = raw, "Rejected unknown complaint status filter");
                flash::error(&session, "Unknown complaint status filter.").await?;
                return Ok(Redirect::to("/complaints").into_response());
            }
        },
        None => state.db.complaints.fetch_all().await?,
    };

    info!("Admin {} fetched complaints", user.username);
    render_page(
        &state,
        &session,
        "hostel/complaints",
        json!({ "complaints": complaints, "status_filter": filter.status }),
    )
    .await
}

/// POST /complaints/{id}/status (admin)
pub async fn update_complaint_status(
    State(state): State<AppState>,
    session: Session,
    Extension(AuthUser(user)): Extension<AuthUser>,
    Path(complaint_id): Path<i64>,
    Form(form): Form<StatusForm>,
) -> Result<Response> {
    let status = match form.status.parse::<ComplaintStatus>() {
        Ok(status) => status,
        Err(_) => {
            warn!(
                complaint_id = complaint_id,
                status = %form.status,
                "Rejected out-of-range complaint status"
            );
            flash::error(&session, "Invalid complaint status.").await?;
            return Ok(Redirect::to("/complaints").into_response());
        }
    };

    match state.db.update_complaint_status(complaint_id, status).await {
        Ok(()) => {
            info!(
                "Admin {} updated complaint {} to {}",
                user.username, complaint_id, status
            );
            flash::success(&session, "Complaint status updated.").await?;
            Ok(Redirect::to("/complaints").into_response())
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {
            flash::error(&session, e.user_message()).await?;
            Ok(Redirect::to("/complaints").into_response())
        }
        Err(e) => Err(e),
    }
}
