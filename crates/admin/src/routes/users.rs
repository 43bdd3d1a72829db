//! User management (admin only).

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Path, Query, State},
    response::Redirect,
};
use chrono::Utc;
use serde::Deserialize;
use tracing::instrument;

use catalog_admin_core::{Email, Language, UserId, UserRole};

use crate::error::{AppError, Result};
use crate::filters;
use crate::i18n::{UsersText, format_date, format_optional_date, role_label};
use crate::links::special_link;
use crate::middleware::{RequireAdmin, UiLanguage};
use crate::models::{NewUser, User, UserUpdate};
use crate::state::AppState;

use super::layout::Layout;

/// Query string of the user list.
#[derive(Debug, Default, Deserialize)]
pub struct UsersQuery {
    /// Show the "add user" form.
    #[serde(default)]
    pub add: Option<String>,
    /// ID of the user whose edit form is open.
    #[serde(default)]
    pub edit: Option<String>,
    /// Validation message key from a rejected submission.
    #[serde(default)]
    pub error: Option<String>,
}

/// A role in a `<select>`.
#[derive(Debug, Clone)]
pub struct RoleOption {
    pub value: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

/// A user row.
#[derive(Debug, Clone)]
pub struct UserRow {
    pub id: u32,
    pub username: String,
    pub email: String,
    pub role_label: &'static str,
    pub is_admin: bool,
    pub is_active: bool,
    pub created: String,
    pub last_login: String,
    /// Absolute special link, shown in the edit form.
    pub special_link: Option<String>,
    /// Whether the row gets a "copy login link" button.
    pub show_copy_link: bool,
    pub can_delete: bool,
    pub editing: bool,
    pub role_options: Vec<RoleOption>,
}

/// User management page template.
#[derive(Template, WebTemplate)]
#[template(path = "users/index.html")]
pub struct UsersIndexTemplate {
    pub layout: Layout,
    pub t: &'static UsersText,
    pub users: Vec<UserRow>,
    pub show_add_form: bool,
    pub new_user_roles: Vec<RoleOption>,
    pub error: Option<&'static str>,
}

fn role_options(selected: UserRole, language: Language) -> Vec<RoleOption> {
    let mut roles = UserRole::ASSIGNABLE.to_vec();
    if !roles.contains(&selected) {
        roles.push(selected);
    }
    roles
        .into_iter()
        .map(|role| RoleOption {
            value: role.as_str(),
            label: role_label(role, language),
            selected: role == selected,
        })
        .collect()
}

fn user_row(user: &User, language: Language, base_url: &str, editing: Option<UserId>) -> UserRow {
    UserRow {
        id: user.id.as_u32(),
        username: user.username.clone(),
        email: user.email.as_ref().map(ToString::to_string).unwrap_or_default(),
        role_label: role_label(user.role, language),
        is_admin: user.role == UserRole::Admin,
        is_active: user.is_active,
        created: format_date(&user.created_at, language),
        last_login: format_optional_date(user.last_login.as_ref(), language),
        special_link: user
            .special_link
            .as_ref()
            .map(|_| special_link(base_url, user.id, user.role)),
        show_copy_link: user.role.has_special_link_action(),
        can_delete: user.role.can_be_deleted(),
        editing: editing == Some(user.id),
        role_options: role_options(user.role, language),
    }
}

/// User list page.
#[instrument(skip(admin, state))]
pub async fn index(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    UiLanguage(language): UiLanguage,
    Query(query): Query<UsersQuery>,
) -> UsersIndexTemplate {
    let t = UsersText::get(language);
    let editing = query.edit.as_deref().and_then(|id| id.parse::<UserId>().ok());
    let base_url = &state.config().base_url;

    let users = state
        .users()
        .read()
        .await
        .list()
        .iter()
        .map(|u| user_row(u, language, base_url, editing))
        .collect();

    UsersIndexTemplate {
        layout: Layout::new(language, Some(&admin), "/users"),
        t,
        users,
        show_add_form: query.add.is_some() || query.error.is_some(),
        new_user_roles: role_options(UserRole::Viewer, language),
        error: query
            .error
            .as_deref()
            .filter(|e| *e == "username")
            .map(|_| t.username_required),
    }
}

/// "Add user" form.
#[derive(Debug, Deserialize)]
pub struct CreateUserForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    pub role: String,
}

fn parse_assignable_role(raw: &str) -> Result<UserRole> {
    let role = raw
        .parse::<UserRole>()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;
    if !UserRole::ASSIGNABLE.contains(&role) {
        return Err(AppError::BadRequest(format!("role {role} cannot be assigned")));
    }
    Ok(role)
}

/// Create a user.
///
/// A blank username sends the admin back to the form with a message.
#[instrument(skip(admin, state))]
pub async fn create(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Form(form): Form<CreateUserForm>,
) -> Result<Redirect> {
    if form.username.trim().is_empty() {
        return Ok(Redirect::to("/users?add=1&error=username"));
    }
    let role = parse_assignable_role(&form.role)?;
    let email = match form.email.trim() {
        "" => None,
        raw => Some(Email::parse(raw).map_err(|e| AppError::BadRequest(e.to_string()))?),
    };

    let mut users = state.users().write().await;
    let created = users.create(
        NewUser {
            username: form.username,
            email,
            role,
        },
        Utc::now(),
    )?;
    tracing::info!(admin_id = %admin.id, user_id = %created.id, "Admin created user");

    Ok(Redirect::to("/users"))
}

/// "Edit user" form. Absent fields are left unchanged.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateUserForm {
    pub username: Option<String>,
    pub role: Option<String>,
    /// `active` or `inactive`.
    pub status: Option<String>,
}

impl UpdateUserForm {
    fn into_update(self) -> Result<UserUpdate> {
        let role = self
            .role
            .as_deref()
            .map(|raw| {
                raw.parse::<UserRole>()
                    .map_err(|e| AppError::BadRequest(e.to_string()))
            })
            .transpose()?;
        let is_active = match self.status.as_deref() {
            None => None,
            Some("active") => Some(true),
            Some("inactive") => Some(false),
            Some(other) => {
                return Err(AppError::BadRequest(format!("invalid status: {other}")));
            }
        };
        Ok(UserUpdate {
            username: self.username,
            role,
            is_active,
        })
    }
}

/// Apply username, role or status changes.
#[instrument(skip(admin, state))]
pub async fn update(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<UserId>,
    Form(form): Form<UpdateUserForm>,
) -> Result<Redirect> {
    let update = form.into_update()?;
    if update.is_empty() {
        return Ok(Redirect::to("/users"));
    }

    let mut users = state.users().write().await;
    // Unassignable roles may be kept but not given
    if let Some(role) = update.role {
        let current = users.get(id).map(|u| u.role);
        if !UserRole::ASSIGNABLE.contains(&role) && current != Some(role) {
            return Err(AppError::BadRequest(format!("role {role} cannot be assigned")));
        }
    }
    users.update(id, update)?;
    tracing::info!(admin_id = %admin.id, user_id = %id, "Admin updated user");
    Ok(Redirect::to("/users"))
}

/// Delete a user. Administrators cannot be deleted.
#[instrument(skip(admin, state))]
pub async fn delete(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<UserId>,
) -> Result<Redirect> {
    let removed = state.users().write().await.delete(id)?;
    tracing::info!(
        admin_id = %admin.id,
        user_id = %id,
        username = %removed.username,
        "Admin deleted user"
    );
    Ok(Redirect::to("/users"))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_role_options_include_current_unassignable_role() {
        let options = role_options(UserRole::Victor, Language::En);
        assert_eq!(options.len(), 6);
        assert!(options.iter().any(|o| o.value == "victor" && o.selected));

        let options = role_options(UserRole::Viewer, Language::En);
        assert_eq!(options.len(), 5);
        assert_eq!(options.iter().filter(|o| o.selected).count(), 1);
    }

    #[test]
    fn test_update_form_parsing() {
        let update = UpdateUserForm {
            status: Some("inactive".to_string()),
            ..UpdateUserForm::default()
        }
        .into_update()
        .unwrap();
        assert_eq!(update.is_active, Some(false));
        assert!(update.role.is_none());

        let update = UpdateUserForm {
            role: Some("victor".to_string()),
            ..UpdateUserForm::default()
        }
        .into_update()
        .unwrap();
        assert_eq!(update.role, Some(UserRole::Victor));

        assert!(
            UpdateUserForm {
                role: Some("root".to_string()),
                ..UpdateUserForm::default()
            }
            .into_update()
            .is_err()
        );
        assert!(
            UpdateUserForm {
                status: Some("sleeping".to_string()),
                ..UpdateUserForm::default()
            }
            .into_update()
            .is_err()
        );
    }
}
