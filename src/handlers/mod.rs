//! Request handlers module
//!
//! Handlers orchestrate form validation, data access and the choice between
//! rendering a page and redirecting. Route groups are gated by the
//! authorization middleware before any handler body runs.

pub mod applications;
pub mod auth;
pub mod complaints;
pub mod dashboard;
pub mod forms;
pub mod render;
pub mod rooms;
pub mod voucher;

use axum::routing::{get, post};
use axum::{middleware, Router};
use tower_http::trace::TraceLayer;
use tower_sessions::{MemoryStore, SessionManagerLayer};

use crate::middleware::auth::{require_admin, require_login, require_student};
use crate::state::AppState;

/// Build the application router with its session and tracing layers
pub fn router(state: AppState) -> Router {
    let public = Router::new()
        .route("/signup", get(auth::signup_form).post(auth::signup))
        .route("/login", get(auth::login_form).post(auth::login));

    let authenticated = Router::new()
        .route("/", get(auth::homepage))
        .route("/logout", get(auth::logout))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_login));

    let student = Router::new()
        .route(
            "/complaints/new",
            get(complaints::lodge_complaint_form).post(complaints::lodge_complaint),
        )
        .route(
            "/applications/new",
            get(applications::submit_application_form).post(applications::submit_application),
        )
        .route("/dashboard/student", get(dashboard::student_dashboard))
        .route("/voucher", get(voucher::download_voucher))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_student,
        ));

    let admin = Router::new()
        .route("/complaints", get(complaints::list_complaints))
        .route(
            "/complaints/{id}/status",
            post(complaints::update_complaint_status),
        )
        .route("/applications", get(applications::list_applications))
        .route(
            "/applications/pending",
            get(applications::pending_applications),
        )
        .route(
            "/applications/{id}/approve",
            post(applications::approve_application),
        )
        .route("/rooms/available", get(rooms::available_rooms))
        .route("/dashboard/admin", get(dashboard::admin_dashboard))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_admin));

    let session_layer = SessionManagerLayer::new(MemoryStore::default()).with_secure(false);

    Router::new()
        .merge(public)
        .merge(authenticated)
        .merge(student)
        .merge(admin)
        .layer(session_layer)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
