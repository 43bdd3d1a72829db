//! User store.

use chrono::{DateTime, Utc};

use catalog_admin_core::{UserId, UserRole};

use super::StoreError;
use crate::links::special_link_path;
use crate::models::{NewUser, User, UserUpdate};

/// All users, ordered by ID.
#[derive(Debug, Default)]
pub struct UserStore {
    users: Vec<User>,
}

impl UserStore {
    /// Create a store from seeded users.
    ///
    /// Users are sorted by ID.
    #[must_use]
    pub fn new(mut users: Vec<User>) -> Self {
        users.sort_by_key(|u| u.id);
        Self { users }
    }

    /// All users, ordered by ID.
    #[must_use]
    pub fn list(&self) -> &[User] {
        &self.users
    }

    /// Get a user by ID.
    #[must_use]
    pub fn get(&self, id: UserId) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    fn get_mut(&mut self, id: UserId) -> Result<&mut User, StoreError> {
        self.users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or_else(|| StoreError::not_found("user", id))
    }

    fn next_id(&self) -> UserId {
        self.users
            .iter()
            .map(|u| u.id)
            .max()
            .map_or(UserId::new(1), |id| id.next())
    }

    /// Create a new active user with a special login link.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Invalid` if the username is blank.
    pub fn create(&mut self, new_user: NewUser, now: DateTime<Utc>) -> Result<&User, StoreError> {
        let username = new_user.username.trim();
        if username.is_empty() {
            return Err(StoreError::invalid("username", "cannot be blank"));
        }

        let id = self.next_id();
        self.users.push(User {
            id,
            username: username.to_string(),
            email: new_user.email,
            role: new_user.role,
            is_active: true,
            created_at: now,
            last_login: None,
            special_link: Some(special_link_path(id, new_user.role)),
        });

        tracing::info!(user_id = %id, role = %new_user.role, "User created");
        self.get(id)
            .ok_or_else(|| StoreError::not_found("user", id))
    }

    /// Apply field-level changes.
    ///
    /// A role change regenerates the special link, since the link encodes
    /// the role.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` for an unknown user and
    /// `StoreError::Invalid` for a blank username.
    pub fn update(&mut self, id: UserId, update: UserUpdate) -> Result<&User, StoreError> {
        let user = self.get_mut(id)?;

        if let Some(username) = update.username {
            let username = username.trim();
            if username.is_empty() {
                return Err(StoreError::invalid("username", "cannot be blank"));
            }
            username.clone_into(&mut user.username);
        }
        if let Some(role) = update.role {
            if role != user.role {
                user.role = role;
                user.special_link = Some(special_link_path(id, role));
            }
        }
        if let Some(is_active) = update.is_active {
            user.is_active = is_active;
        }

        tracing::info!(user_id = %id, "User updated");
        Ok(&*user)
    }

    /// Delete a user.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::ProtectedUser` if the user is an administrator and
    /// `StoreError::NotFound` if the user does not exist.
    pub fn delete(&mut self, id: UserId) -> Result<User, StoreError> {
        let index = self
            .users
            .iter()
            .position(|u| u.id == id)
            .ok_or_else(|| StoreError::not_found("user", id))?;

        let role: UserRole = self.users.get(index).map(|u| u.role).unwrap_or_default();
        if !role.can_be_deleted() {
            tracing::warn!(user_id = %id, "Refused to delete administrator");
            return Err(StoreError::ProtectedUser(id));
        }

        tracing::info!(user_id = %id, "User deleted");
        Ok(self.users.remove(index))
    }

    /// Stamp the last login time.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if the user does not exist.
    pub fn record_login(&mut self, id: UserId, now: DateTime<Utc>) -> Result<&User, StoreError> {
        let user = self.get_mut(id)?;
        user.last_login = Some(now);
        Ok(&*user)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use catalog_admin_core::Email;

    use super::*;

    fn user(id: u32, username: &str, role: UserRole) -> User {
        User {
            id: UserId::new(id),
            username: username.to_string(),
            email: None,
            role,
            is_active: true,
            created_at: Utc::now(),
            last_login: None,
            special_link: None,
        }
    }

    fn store() -> UserStore {
        UserStore::new(vec![
            user(3, "viewer", UserRole::Viewer),
            user(1, "admin", UserRole::Admin),
            user(2, "editor", UserRole::Editor),
        ])
    }

    #[test]
    fn test_list_is_ordered_by_id() {
        let ids: Vec<_> = store().list().iter().map(|u| u.id.as_u32()).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_create_assigns_next_id_and_link() {
        let mut store = store();
        let created = store
            .create(
                NewUser {
                    username: "  broker ".to_string(),
                    email: Some(Email::parse("broker@shop.example").unwrap()),
                    role: UserRole::Broker,
                },
                Utc::now(),
            )
            .unwrap();

        assert_eq!(created.id, UserId::new(4));
        assert_eq!(created.username, "broker");
        assert!(created.is_active);
        assert_eq!(
            created.special_link.as_deref(),
            Some("/?auto-login=4&role=broker")
        );
    }

    #[test]
    fn test_create_rejects_blank_username() {
        let mut store = store();
        let result = store.create(
            NewUser {
                username: "   ".to_string(),
                email: None,
                role: UserRole::Viewer,
            },
            Utc::now(),
        );
        assert!(matches!(result, Err(StoreError::Invalid { field: "username", .. })));
        assert_eq!(store.list().len(), 3);
    }

    #[test]
    fn test_create_in_empty_store_starts_at_one() {
        let mut store = UserStore::default();
        let created = store
            .create(
                NewUser {
                    username: "first".to_string(),
                    email: None,
                    role: UserRole::Admin,
                },
                Utc::now(),
            )
            .unwrap();
        assert_eq!(created.id, UserId::new(1));
    }

    #[test]
    fn test_delete_non_admin_removes_user() {
        let mut store = store();
        let removed = store.delete(UserId::new(3)).unwrap();
        assert_eq!(removed.username, "viewer");
        assert!(store.get(UserId::new(3)).is_none());
        assert_eq!(store.list().len(), 2);
    }

    #[test]
    fn test_delete_admin_is_refused() {
        let mut store = store();
        assert_eq!(
            store.delete(UserId::new(1)),
            Err(StoreError::ProtectedUser(UserId::new(1)))
        );
        assert!(store.get(UserId::new(1)).is_some());
    }

    #[test]
    fn test_delete_unknown_user() {
        let mut store = store();
        assert!(matches!(
            store.delete(UserId::new(99)),
            Err(StoreError::NotFound { entity: "user", .. })
        ));
    }

    #[test]
    fn test_update_role_regenerates_link() {
        let mut store = store();
        let updated = store
            .update(
                UserId::new(2),
                UserUpdate {
                    role: Some(UserRole::ChineseOnly),
                    is_active: Some(false),
                    ..UserUpdate::default()
                },
            )
            .unwrap();
        assert_eq!(updated.role, UserRole::ChineseOnly);
        assert!(!updated.is_active);
        assert_eq!(
            updated.special_link.as_deref(),
            Some("/?auto-login=2&role=chinese_only")
        );
    }

    #[test]
    fn test_update_rejects_blank_username() {
        let mut store = store();
        let result = store.update(
            UserId::new(2),
            UserUpdate {
                username: Some(String::new()),
                ..UserUpdate::default()
            },
        );
        assert!(result.is_err());
        assert_eq!(store.get(UserId::new(2)).unwrap().username, "editor");
    }

    #[test]
    fn test_record_login() {
        let mut store = store();
        let now = Utc::now();
        let user = store.record_login(UserId::new(2), now).unwrap();
        assert_eq!(user.last_login, Some(now));
    }
}
