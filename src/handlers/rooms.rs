//! Room listing handlers

use axum::extract::{Query, State};
use axum::response::Response;
use axum::Extension;
use serde_json::json;
use tower_sessions::Session;
use tracing::info;

use crate::handlers::forms::{normalize_filter, RoomFilter};
use crate::handlers::render::render_page;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;
use crate::utils::errors::Result;

/// GET /rooms/available (admin), with optional room_type / occupancy filters
pub async fn available_rooms(
    State(state): State<AppState>,
    session: Session,
    Extension(AuthUser(user)): Extension<AuthUser>,
    Query(filter): Query<RoomFilter>,
) -> Result<Response> {
    let rooms = state
        .db
        .rooms
        .fetch_available(
            normalize_filter(&filter.room_type),
            normalize_filter(&filter.occupancy),
        )
        .await?;

    info!("Admin {} fetched available rooms", user.username);
    render_page(
        &state,
        &session,
        "hostel/available_rooms",
        json!({
            "rooms": rooms,
            "filters": { "room_type": filter.room_type, "occupancy": filter.occupancy },
        }),
    )
    .await
}
