//! Authorization gate middleware
//!
//! Wraps request handlers with session and role checks. An unauthenticated
//! caller is always redirected to the login page before any role check; an
//! authenticated caller with the wrong role is flashed a warning and sent to
//! the home route. The wrapped handler body never executes on failure.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use serde::{Deserialize, Serialize};
use tower_sessions::Session;
use tracing::{debug, warn};

use crate::models::user::{Role, User};
use crate::state::AppState;
use crate::utils::errors::Result;
use crate::utils::flash;

pub const SESSION_USER_KEY: &str = "hostelms:user:id";

/// The logged-in user's ID as stored in the session
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct SessionUserId(pub i64);

impl SessionUserId {
    /// Insert user ID into session
    pub async fn insert(session: &Session, user_id: i64) -> Result<()> {
        session.insert(SESSION_USER_KEY, SessionUserId(user_id)).await?;
        Ok(())
    }

    /// Get user ID from session
    pub async fn get(session: &Session) -> Result<Option<i64>> {
        let id = session.get::<SessionUserId>(SESSION_USER_KEY).await?;
        Ok(id.map(|SessionUserId(id)| id))
    }

    /// Remove user ID from session
    pub async fn clear(session: &Session) -> Result<()> {
        session.remove::<SessionUserId>(SESSION_USER_KEY).await?;
        Ok(())
    }
}

/// The authenticated user, attached to the request by the gate
#[derive(Debug, Clone)]
pub struct AuthUser(pub User);

/// Outcome of the authorization decision
#[derive(Debug, Clone, PartialEq)]
pub enum GateOutcome {
    Allow(User),
    RedirectLogin,
    RedirectHome,
}

/// Decide whether a caller may proceed
///
/// The session check always comes first: without an authenticated user the
/// outcome is a login redirect regardless of the allowed role set.
pub fn authorize(user: Option<User>, allowed: &[Role]) -> GateOutcome {
    match user {
        None => GateOutcome::RedirectLogin,
        Some(user) if user.has_any_role(allowed) => GateOutcome::Allow(user),
        Some(_) => GateOutcome::RedirectHome,
    }
}

/// Roles accepted by `require_login`: any authenticated account
const ANY_ROLE: &[Role] = &[Role::Student, Role::Admin, Role::Unassigned];

/// Require an authenticated session with any role
pub async fn require_login(
    State(state): State<AppState>,
    session: Session,
    req: Request,
    next: Next,
) -> Response {
    gate(
        state,
        session,
        req,
        next,
        ANY_ROLE,
        "You do not have permission to access this page.",
    )
    .await
}

/// Require an authenticated student
pub async fn require_student(
    State(state): State<AppState>,
    session: Session,
    req: Request,
    next: Next,
) -> Response {
    gate(
        state,
        session,
        req,
        next,
        &[Role::Student],
        "This page is only accessible to students.",
    )
    .await
}

/// Require an authenticated administrator
pub async fn require_admin(
    State(state): State<AppState>,
    session: Session,
    req: Request,
    next: Next,
) -> Response {
    gate(
        state,
        session,
        req,
        next,
        &[Role::Admin],
        "This page is only accessible to administrators.",
    )
    .await
}

/// Shared gate over an allowed role set
async fn gate(
    state: AppState,
    session: Session,
    mut req: Request,
    next: Next,
    allowed: &[Role],
    denied_message: &str,
) -> Response {
    let user = match load_session_user(&state, &session).await {
        Ok(user) => user,
        Err(e) => return e.into_response(),
    };

    match authorize(user, allowed) {
        GateOutcome::Allow(user) => {
            debug!(user_id = user.id, role = %user.role, "Authorization successful");
            req.extensions_mut().insert(AuthUser(user));
            next.run(req).await
        }
        GateOutcome::RedirectLogin => Redirect::to("/login").into_response(),
        GateOutcome::RedirectHome => {
            warn!(path = req.uri().path(), "Unauthorized access attempt");
            if let Err(e) = flash::error(&session, denied_message).await {
                return e.into_response();
            }
            Redirect::to("/").into_response()
        }
    }
}

/// Resolve the session's user ID to a user record
async fn load_session_user(state: &AppState, session: &Session) -> Result<Option<User>> {
    match SessionUserId::get(session).await? {
        Some(user_id) => state.db.users.find_by_id(user_id).await,
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn make_user(role: Role) -> User {
        User {
            id: 1,
            username: "test".to_string(),
            password_hash: String::new(),
            role,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_no_session_redirects_to_login_before_role_check() {
        // Even when no role would ever match, the login redirect wins.
        assert_eq!(authorize(None, &[Role::Admin]), GateOutcome::RedirectLogin);
        assert_eq!(authorize(None, &[]), GateOutcome::RedirectLogin);
        assert_eq!(authorize(None, ANY_ROLE), GateOutcome::RedirectLogin);
    }

    #[test]
    fn test_wrong_role_redirects_home() {
        let student = make_user(Role::Student);
        assert_eq!(
            authorize(Some(student), &[Role::Admin]),
            GateOutcome::RedirectHome
        );
    }

    #[test]
    fn test_matching_role_allows() {
        let admin = make_user(Role::Admin);
        match authorize(Some(admin), &[Role::Admin]) {
            GateOutcome::Allow(user) => assert_eq!(user.role, Role::Admin),
            other => panic!("expected Allow, got {:?}", other),
        }
    }

    #[test]
    fn test_role_set_accepts_any_member() {
        let student = make_user(Role::Student);
        match authorize(Some(student), &[Role::Student, Role::Admin]) {
            GateOutcome::Allow(user) => assert_eq!(user.role, Role::Student),
            other => panic!("expected Allow, got {:?}", other),
        }
    }

    #[test]
    fn test_unassigned_role_is_not_student_or_admin() {
        let user = make_user(Role::Unassigned);
        assert_eq!(
            authorize(Some(user.clone()), &[Role::Student]),
            GateOutcome::RedirectHome
        );
        match authorize(Some(user), ANY_ROLE) {
            GateOutcome::Allow(_) => {}
            other => panic!("expected Allow, got {:?}", other),
        }
    }
}
