//! Special login links and redirect targets.
//!
//! A special link logs a user in by ID without a password:
//! `{origin}/?auto-login={id}&role={role}`. It is a convenience for sharing
//! access, not a credential.

use catalog_admin_core::{UserId, UserRole};

/// Query parameter carrying the user ID.
pub const AUTO_LOGIN_PARAM: &str = "auto-login";

/// Relative auto-login path stored on the user.
#[must_use]
pub fn special_link_path(user_id: UserId, role: UserRole) -> String {
    format!("/?{AUTO_LOGIN_PARAM}={user_id}&role={role}")
}

/// Absolute special link for the given origin.
///
/// A trailing `/` on the origin is ignored.
#[must_use]
pub fn special_link(origin: &str, user_id: UserId, role: UserRole) -> String {
    format!(
        "{}{}",
        origin.trim_end_matches('/'),
        special_link_path(user_id, role)
    )
}

/// Whether `target` is a path on this site that is safe to redirect to.
///
/// Only absolute, already-encoded paths are accepted; scheme-relative URLs
/// (`//host`) and backslash tricks are rejected.
#[must_use]
pub fn is_local_path(target: &str) -> bool {
    target.is_ascii()
        && target.starts_with('/')
        && !target.starts_with("//")
        && !target.contains('\\')
        && !target.chars().any(char::is_control)
}

/// `target` if it is a local path, otherwise `/`.
#[must_use]
pub fn local_redirect_target(target: Option<&str>) -> &str {
    match target {
        Some(t) if is_local_path(t) => t,
        _ => "/",
    }
}
