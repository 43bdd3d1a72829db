//! Print special login links.

use catalog_admin::links::special_link;
use catalog_admin_core::{UserId, UserRole};

/// Log the special link for `user_id` with `role`.
///
/// The link is not checked against any seed: it is the URL the users page
/// would show for a user with this ID and role.
pub fn print(base_url: &str, user_id: UserId, role: UserRole) {
    let link = special_link(base_url, user_id, role);

    tracing::info!("Special link for user {} ({}):", user_id, role);
    tracing::info!("  {}", link);
    if !role.has_special_link_action() {
        tracing::info!("Note: the users page only shows a copy button for admin and victor users.");
    }
}
