//! Shared page chrome: header navigation, language switcher, current user.

use catalog_admin_core::Language;

use crate::i18n::{CatalogText, role_label};
use crate::models::User;

/// Logged-in user as shown in the header.
#[derive(Debug, Clone)]
pub struct NavUser {
    pub username: String,
    pub role_label: &'static str,
    pub can_manage_users: bool,
    pub can_edit_catalog: bool,
}

/// One entry of the language switcher.
#[derive(Debug, Clone)]
pub struct LanguageOption {
    pub code: &'static str,
    pub name: &'static str,
    pub selected: bool,
}

/// Data every page template needs for `base.html`.
#[derive(Debug, Clone)]
pub struct Layout {
    pub html_lang: &'static str,
    pub text: &'static CatalogText,
    pub user: Option<NavUser>,
    pub languages: Vec<LanguageOption>,
    /// Path and query of the page, used as `return_to` in forms.
    pub current_path: String,
}

impl Layout {
    #[must_use]
    pub fn new(language: Language, user: Option<&User>, current_path: impl Into<String>) -> Self {
        Self {
            html_lang: language.html_lang(),
            text: CatalogText::get(language),
            user: user.map(|u| NavUser {
                username: u.username.clone(),
                role_label: role_label(u.role, language),
                can_manage_users: u.role.can_manage_users(),
                can_edit_catalog: u.role.can_edit_catalog(),
            }),
            languages: Language::ALL
                .into_iter()
                .map(|l| LanguageOption {
                    code: l.code(),
                    name: l.native_name(),
                    selected: l == language,
                })
                .collect(),
            current_path: current_path.into(),
        }
    }

    /// Whether the logged-in user may edit products.
    #[must_use]
    pub fn can_edit_catalog(&self) -> bool {
        self.user.as_ref().is_some_and(|u| u.can_edit_catalog)
    }
}
