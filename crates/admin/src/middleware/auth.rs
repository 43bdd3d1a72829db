//! Authentication extractors for admin.
//!
//! The session only holds a [`CurrentUser`] snapshot. Every extractor
//! re-reads the user from the store, so a user who was deactivated, deleted
//! or given a different role is affected on their next request.

use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Redirect, Response},
};
use tower_sessions::Session;

use crate::error::{clear_sentry_user, set_sentry_user};
use crate::models::{CurrentUser, User, session_keys};
use crate::state::AppState;

/// Look up the live, active user behind the session, if any.
async fn session_user(parts: &Parts, state: &AppState) -> Option<User> {
    let session = parts.extensions.get::<Session>()?;
    let current: CurrentUser = session
        .get(session_keys::CURRENT_USER)
        .await
        .ok()
        .flatten()?;

    let user = state
        .users()
        .read()
        .await
        .get(current.id)
        .filter(|u| u.is_active)
        .cloned();

    if user.is_none() {
        tracing::debug!(user_id = %current.id, "Session user no longer active");
    }
    user
}

/// Extractor that optionally gets the current user.
///
/// Never rejects; handlers decide what a guest sees.
pub struct OptionalUser(pub Option<User>);

impl FromRequestParts<AppState> for OptionalUser {
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(Self(session_user(parts, state).await))
    }
}

/// Error returned when a user lacks the required role.
#[derive(Debug)]
pub enum AuthRejection {
    /// Not logged in: send them to the home page.
    RedirectToHome,
    /// Logged in without the required role.
    Forbidden,
}

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        match self {
            Self::RedirectToHome => Redirect::to("/").into_response(),
            Self::Forbidden => (
                StatusCode::FORBIDDEN,
                "You do not have permission to access this resource",
            )
                .into_response(),
        }
    }
}

async fn require_user(
    parts: &Parts,
    state: &AppState,
    allowed: impl FnOnce(&User) -> bool,
) -> Result<User, AuthRejection> {
    let user = session_user(parts, state)
        .await
        .ok_or(AuthRejection::RedirectToHome)?;

    if !allowed(&user) {
        tracing::warn!(
            user_id = %user.id,
            role = %user.role,
            path = %parts.uri.path(),
            "Access denied"
        );
        return Err(AuthRejection::Forbidden);
    }
    Ok(user)
}

/// Extractor that requires the `admin` role.
///
/// Redirects guests to `/`; other roles get 403 Forbidden.
pub struct RequireAdmin(pub User);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AuthRejection;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        require_user(parts, state, |u| u.role.can_manage_users())
            .await
            .map(Self)
    }
}

/// Extractor that requires a role allowed to edit the catalog
/// (`admin` or `editor`).
pub struct RequireCatalogEditor(pub User);

impl FromRequestParts<AppState> for RequireCatalogEditor {
    type Rejection = AuthRejection;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        require_user(parts, state, |u| u.role.can_edit_catalog())
            .await
            .map(Self)
    }
}

/// Helper to set the current user in the session.
///
/// The session ID is cycled to prevent fixation.
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn set_current_user(
    session: &Session,
    user: &CurrentUser,
) -> Result<(), tower_sessions::session::Error> {
    session.cycle_id().await?;
    session.insert(session_keys::CURRENT_USER, user).await?;
    set_sentry_user(user.id.as_u32(), &user.username);
    Ok(())
}

/// Helper to clear the current user from the session (logout).
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn clear_current_user(session: &Session) -> Result<(), tower_sessions::session::Error> {
    session
        .remove::<CurrentUser>(session_keys::CURRENT_USER)
        .await?;
    clear_sentry_user();
    Ok(())
}
