//! Dashboard handlers

use axum::extract::State;
use axum::response::{IntoResponse, Redirect, Response};
use axum::Extension;
use serde_json::json;
use tower_sessions::Session;
use tracing::info;

use crate::handlers::render::render_page;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;
use crate::utils::errors::{ErrorKind, Result};
use crate::utils::flash;

/// GET /dashboard/admin (admin)
pub async fn admin_dashboard(
    State(state): State<AppState>,
    session: Session,
    Extension(AuthUser(user)): Extension<AuthUser>,
) -> Result<Response> {
    let stats = state.db.stats.fetch_dashboard().await?;
    let hostel_count = state.db.stats.count_hostels().await?;
    let room_statistics = state.db.rooms.fetch_statistics().await?;
    let occupancy_rate = occupancy_rate(stats.students_with_rooms, stats.total_rooms);

    info!("Admin {} accessed dashboard", user.username);
    render_page(
        &state,
        &session,
        "hostel/admin_dashboard",
        json!({
            "stats": stats,
            "hostel_count": hostel_count,
            "occupancy_rate": occupancy_rate,
            "room_statistics": room_statistics,
        }),
    )
    .await
}

/// GET /dashboard/student (student)
pub async fn student_dashboard(
    State(state): State<AppState>,
    session: Session,
    Extension(AuthUser(user)): Extension<AuthUser>,
) -> Result<Response> {
    let student = match state.db.student_profile(user.id).await {
        Ok(student) => student,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            flash::error(&session, e.user_message()).await?;
            return Ok(Redirect::to("/").into_response());
        }
        Err(e) => return Err(e),
    };

    let application = state
        .db
        .applications
        .fetch_by_student(student.id)
        .await?
        .into_iter()
        .next();
    let complaints = state.db.complaints.fetch_by_student(student.id).await?;

    let room = if student.application_status {
        state.db.rooms.find_allocated_for_student(student.id).await?
    } else {
        None
    };

    info!("Student {} accessed dashboard", student.student_code);
    render_page(
        &state,
        &session,
        "hostel/student_dashboard",
        json!({
            "student": student,
            "application": application,
            "complaints": complaints,
            "room": room,
        }),
    )
    .await
}

/// Percentage of rooms holding an allocated student, one decimal place
fn occupancy_rate(students_with_rooms: i64, total_rooms: i64) -> f64 {
    if total_rooms > 0 {
        let rate = students_with_rooms as f64 / total_rooms as f64 * 100.0;
        (rate * 10.0).round() / 10.0
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_occupancy_rate_rounds_to_one_decimal() {
        assert_eq!(occupancy_rate(1, 3), 33.3);
        assert_eq!(occupancy_rate(2, 3), 66.7);
        assert_eq!(occupancy_rate(8, 8), 100.0);
    }

    #[test]
    fn test_occupancy_rate_handles_no_rooms() {
        assert_eq!(occupancy_rate(0, 0), 0.0);
        assert_eq!(occupancy_rate(5, 0), 0.0);
    }
}
