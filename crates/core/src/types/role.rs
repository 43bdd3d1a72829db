//! User roles and the permissions derived from them.

use serde::{Deserialize, Serialize};

/// Error returned when a role name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid user role: {0}")]
pub struct RoleError(pub String);

/// Role of a catalog user.
///
/// Serialized in `snake_case`, which is also the form used in special login
/// links (`role=chinese_only`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    /// Full access, including user management. Cannot be deleted.
    Admin,
    /// Can add and edit products.
    Editor,
    /// Read-only access.
    #[default]
    Viewer,
    /// Sees the Chinese version of the catalog only.
    ChineseOnly,
    /// Trade broker account.
    Broker,
    /// Named partner account with Chinese UI and a special login link.
    Victor,
}

impl UserRole {
    /// Every role, in display order.
    pub const ALL: [Self; 6] = [
        Self::Admin,
        Self::Editor,
        Self::Viewer,
        Self::ChineseOnly,
        Self::Broker,
        Self::Victor,
    ];

    /// Roles offered in the "add user" and "edit user" forms.
    ///
    /// `victor` is a named account that only comes from the seed file.
    pub const ASSIGNABLE: [Self; 5] = [
        Self::Admin,
        Self::Editor,
        Self::Viewer,
        Self::ChineseOnly,
        Self::Broker,
    ];

    /// The `snake_case` name of the role.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Editor => "editor",
            Self::Viewer => "viewer",
            Self::ChineseOnly => "chinese_only",
            Self::Broker => "broker",
            Self::Victor => "victor",
        }
    }

    /// Whether a user with this role may be removed.
    #[must_use]
    pub const fn can_be_deleted(&self) -> bool {
        !matches!(self, Self::Admin)
    }

    /// Whether the user list offers a "copy login link" action for this role.
    #[must_use]
    pub const fn has_special_link_action(&self) -> bool {
        matches!(self, Self::Admin | Self::Victor)
    }

    /// Whether the UI should switch to Chinese when this user logs in.
    #[must_use]
    pub const fn prefers_chinese(&self) -> bool {
        matches!(self, Self::ChineseOnly | Self::Victor)
    }

    /// Whether this role may add and edit products.
    #[must_use]
    pub const fn can_edit_catalog(&self) -> bool {
        matches!(self, Self::Admin | Self::Editor)
    }

    /// Whether this role may manage users.
    #[must_use]
    pub const fn can_manage_users(&self) -> bool {
        matches!(self, Self::Admin)
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for UserRole {
    type Err = RoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| RoleError(s.to_owned()))
    }
}
