//! Localized UI strings for Russian, English and Chinese.
//!
//! Each screen has a table of `&'static str` labels, one constant per
//! language. Messages with numbers in them are built by helper functions.

mod catalog;
mod users;

use chrono::{DateTime, Utc};

use catalog_admin_core::{Language, UserRole};

pub use catalog::CatalogText;
pub use users::UsersText;

/// Display name of a role.
#[must_use]
pub const fn role_label(role: UserRole, language: Language) -> &'static str {
    match (language, role) {
        (Language::Ru, UserRole::Admin) => "Администратор",
        (Language::Ru, UserRole::Editor) => "Редактор",
        (Language::Ru, UserRole::Viewer) => "Наблюдатель",
        (Language::Ru, UserRole::ChineseOnly) => "Только китайская версия",
        (Language::Ru, UserRole::Broker) => "Брокер",
        (Language::Ru, UserRole::Victor) => "Виктор",

        (Language::En, UserRole::Admin) => "Administrator",
        (Language::En, UserRole::Editor) => "Editor",
        (Language::En, UserRole::Viewer) => "Viewer",
        (Language::En, UserRole::ChineseOnly) => "Chinese Only",
        (Language::En, UserRole::Broker) => "Broker",
        (Language::En, UserRole::Victor) => "Victor",

        (Language::Cn, UserRole::Admin) => "管理员",
        (Language::Cn, UserRole::Editor) => "编辑者",
        (Language::Cn, UserRole::Viewer) => "查看者",
        (Language::Cn, UserRole::ChineseOnly) => "仅中文版本",
        (Language::Cn, UserRole::Broker) => "经纪人",
        (Language::Cn, UserRole::Victor) => "维克多",
    }
}

/// Short date in the convention of the language's locale.
///
/// `ru` → `16.10.2026`, `en` → `10/16/2026`, `cn` → `2026/10/16`.
#[must_use]
pub fn format_date(date: &DateTime<Utc>, language: Language) -> String {
    let pattern = match language {
        Language::Ru => "%d.%m.%Y",
        Language::En => "%-m/%-d/%Y",
        Language::Cn => "%Y/%-m/%-d",
    };
    date.format(pattern).to_string()
}

/// [`format_date`] for an optional date, `-` when absent.
#[must_use]
pub fn format_optional_date(date: Option<&DateTime<Utc>>, language: Language) -> String {
    date.map_or_else(|| "-".to_string(), |d| format_date(d, language))
}
