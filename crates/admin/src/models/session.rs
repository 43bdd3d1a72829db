//! Session-related types.
//!
//! Types stored in the session for the logged-in user and UI preferences.

use serde::{Deserialize, Serialize};

use catalog_admin_core::{UserId, UserRole};

use super::user::User;

/// Session-stored user identity.
///
/// Minimal data stored in the session to identify the logged-in user.
/// Handlers re-read the user from the store on every request, so a
/// deactivated or deleted user loses access immediately.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CurrentUser {
    /// User's ID in the store.
    pub id: UserId,
    /// User's display name.
    pub username: String,
    /// User's role at the time of the last request.
    pub role: UserRole,
}

impl From<&User> for CurrentUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            role: user.role,
        }
    }
}

/// Session keys.
pub mod keys {
    /// Key for storing the current logged-in user.
    pub const CURRENT_USER: &str = "current_user";

    /// Key for the language the UI is rendered in.
    pub const LANGUAGE: &str = "language";
}
