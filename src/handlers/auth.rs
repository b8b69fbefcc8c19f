//! Account handlers: signup, login, logout and the homepage

use axum::extract::State;
use axum::response::{IntoResponse, Redirect, Response};
use axum::{Extension, Form};
use serde_json::json;
use tower_sessions::Session;
use tracing::{error, info, warn};

use crate::handlers::forms::{LoginForm, SignupForm};
use crate::handlers::render::render_page;
use crate::middleware::auth::{AuthUser, SessionUserId};
use crate::models::user::Role;
use crate::state::AppState;
use crate::utils::errors::{ErrorKind, Result};
use crate::utils::flash;
use crate::utils::password::{hash_password, verify_password};

/// GET /signup
pub async fn signup_form(State(state): State<AppState>, session: Session) -> Result<Response> {
    render_page(&state, &session, "user/signup", json!({})).await
}

/// POST /signup
pub async fn signup(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<SignupForm>,
) -> Result<Response> {
    if let Err(errors) = form.validate() {
        return render_page(
            &state,
            &session,
            "user/signup",
            json!({ "form": form_context(&form), "errors": errors }),
        )
        .await;
    }

    let password_hash = hash_password(&form.password)?;
    let username = form.username.trim();

    let result = if form.is_admin_signup() {
        state
            .db
            .register_admin(username, &password_hash, form.name.trim(), form.email.trim())
            .await
            .map(|_| "Admin account created successfully! Please login.")
    } else {
        state
            .db
            .register_student(
                username,
                &password_hash,
                form.name.trim(),
                form.email.trim(),
                form.semester.unwrap_or(1),
            )
            .await
            .map(|_| "Student account created successfully! Please login.")
    };

    match result {
        Ok(message) => {
            flash::success(&session, message).await?;
            Ok(Redirect::to("/login").into_response())
        }
        Err(e) if e.kind() == ErrorKind::Validation => {
            render_page(
                &state,
                &session,
                "user/signup",
                json!({ "form": form_context(&form), "errors": [{ "field": "username", "message": e.user_message() }] }),
            )
            .await
        }
        Err(e) => Err(e),
    }
}

/// Form values echoed back on a failed signup; the password is never echoed
fn form_context(form: &SignupForm) -> serde_json::Value {
    json!({
        "username": form.username,
        "name": form.name,
        "email": form.email,
        "semester": form.semester,
        "account_type": form.account_type,
    })
}

/// GET /login
pub async fn login_form(State(state): State<AppState>, session: Session) -> Result<Response> {
    render_page(&state, &session, "user/login", json!({})).await
}

/// POST /login
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Result<Response> {
    if let Err(errors) = form.validate() {
        return render_page(&state, &session, "user/login", json!({ "errors": errors })).await;
    }

    let username = form.username.trim();
    let user = state.db.users.find_by_username(username).await?;

    let user = match user {
        Some(user) if verify_password(&user.password_hash, &form.password) => user,
        _ => {
            warn!("Failed login attempt for username: {}", username);
            return render_page(
                &state,
                &session,
                "user/login",
                json!({ "errors": [{ "field": "username", "message": "Invalid username or password." }] }),
            )
            .await;
        }
    };

    SessionUserId::insert(&session, user.id).await?;
    info!("User {} logged in successfully", user.username);

    match user.role {
        Role::Student => {
            flash::success(&session, format!("Welcome back, {}!", user.username)).await?;
            Ok(Redirect::to("/dashboard/student").into_response())
        }
        Role::Admin => {
            flash::success(&session, format!("Welcome back, Admin {}!", user.username)).await?;
            Ok(Redirect::to("/dashboard/admin").into_response())
        }
        Role::Unassigned => {
            flash::warning(
                &session,
                "User role not assigned. Please contact administrator.",
            )
            .await?;
            Ok(Redirect::to("/").into_response())
        }
    }
}

/// GET /logout
pub async fn logout(session: Session, Extension(AuthUser(user)): Extension<AuthUser>) -> Result<Response> {
    session.flush().await?;
    info!("User {} logged out", user.username);
    flash::success(&session, "You have been logged out successfully.").await?;
    Ok(Redirect::to("/login").into_response())
}

/// GET /
pub async fn homepage(
    State(state): State<AppState>,
    session: Session,
    Extension(AuthUser(user)): Extension<AuthUser>,
) -> Result<Response> {
    match user.role {
        Role::Admin => Ok(Redirect::to("/dashboard/admin").into_response()),
        Role::Student => match state.db.users.find_student_by_user(user.id).await? {
            Some(student) => {
                render_page(
                    &state,
                    &session,
                    "homepage",
                    json!({
                        "student": student,
                        "show_buttons": student.application_status,
                    }),
                )
                .await
            }
            None => {
                error!("Student profile not found for user {}", user.username);
                session.flush().await?;
                flash::error(
                    &session,
                    "Student profile not found. Please contact administrator.",
                )
                .await?;
                Ok(Redirect::to("/login").into_response())
            }
        },
        Role::Unassigned => {
            session.flush().await?;
            flash::error(
                &session,
                "User role not assigned. Please contact administrator.",
            )
            .await?;
            Ok(Redirect::to("/login").into_response())
        }
    }
}
