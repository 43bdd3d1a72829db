//! Catalog user domain types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use catalog_admin_core::{Email, UserId, UserRole};

/// A user of the admin panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user ID.
    pub id: UserId,
    /// Display name (never blank).
    pub username: String,
    /// Contact email, if one was given.
    #[serde(default)]
    pub email: Option<Email>,
    /// Role/permission level.
    pub role: UserRole,
    /// Inactive users cannot log in.
    #[serde(default = "default_active")]
    pub is_active: bool,
    /// When the user was created.
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    /// When the user last logged in via a special link.
    #[serde(default)]
    pub last_login: Option<DateTime<Utc>>,
    /// Relative auto-login path (`/?auto-login=..&role=..`).
    #[serde(default)]
    pub special_link: Option<String>,
}

const fn default_active() -> bool {
    true
}

/// Data for creating a new user.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: Option<Email>,
    pub role: UserRole,
}

/// Field-level changes to an existing user.
///
/// `None` leaves the field untouched.
#[derive(Debug, Clone, Default)]
pub struct UserUpdate {
    pub username: Option<String>,
    pub role: Option<UserRole>,
    pub is_active: Option<bool>,
}

impl UserUpdate {
    /// Whether this update changes nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.username.is_none() && self.role.is_none() && self.is_active.is_none()
    }
}
