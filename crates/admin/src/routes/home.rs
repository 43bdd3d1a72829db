//! Home page and special-link login.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Query, State},
    response::{IntoResponse, Redirect, Response},
};
use chrono::Utc;
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use catalog_admin_core::{Language, UserId, UserRole};

use crate::catalog::{category_href, filter_by_category};
use crate::error::Result;
use crate::filters;
use crate::middleware::{OptionalUser, UiLanguage, set_current_user, set_language};
use crate::models::CurrentUser;
use crate::state::AppState;

use super::layout::Layout;

/// Query string of `/`, including the special-link parameters.
#[derive(Debug, Default, Deserialize)]
pub struct HomeQuery {
    #[serde(rename = "auto-login")]
    pub auto_login: Option<String>,
    pub role: Option<String>,
}

/// A root category tile.
#[derive(Debug, Clone)]
pub struct CategoryTile {
    pub name: String,
    pub icon: Option<String>,
    pub href: String,
    pub product_count: usize,
    pub children: Vec<CategoryLink>,
}

/// A link to a subcategory.
#[derive(Debug, Clone)]
pub struct CategoryLink {
    pub name: String,
    pub href: String,
}

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub layout: Layout,
    pub categories: Vec<CategoryTile>,
}

/// Home page, or a special-link login when `auto-login` is present.
#[instrument(skip(state, session, user))]
pub async fn index(
    State(state): State<AppState>,
    session: Session,
    OptionalUser(user): OptionalUser,
    UiLanguage(language): UiLanguage,
    Query(query): Query<HomeQuery>,
) -> Result<Response> {
    if let Some(raw_id) = query.auto_login.as_deref() {
        auto_login(&state, &session, raw_id, query.role.as_deref()).await?;
        return Ok(Redirect::to("/").into_response());
    }

    let products = state.products().read().await;
    let categories = state
        .categories()
        .iter()
        .map(|root| CategoryTile {
            name: root.name.clone(),
            icon: root.icon.clone(),
            href: category_href(&root.name),
            product_count: filter_by_category(products.list(), &root.name).len(),
            children: root
                .children
                .iter()
                .map(|child| {
                    let path = format!("{}/{}", root.name, child.name);
                    CategoryLink {
                        name: child.name.clone(),
                        href: category_href(&path),
                    }
                })
                .collect(),
        })
        .collect();

    Ok(HomeTemplate {
        layout: Layout::new(language, user.as_ref(), "/"),
        categories,
    }
    .into_response())
}

/// Log in the user named by a special link.
///
/// A link that names an unknown or inactive user, or a role the user no
/// longer has, is ignored. Users whose role prefers Chinese get the UI
/// switched to Chinese.
async fn auto_login(
    state: &AppState,
    session: &Session,
    raw_id: &str,
    raw_role: Option<&str>,
) -> Result<()> {
    let Ok(user_id) = raw_id.parse::<UserId>() else {
        tracing::warn!(auto_login = %raw_id, "Malformed special link");
        return Ok(());
    };

    let current = {
        let mut users = state.users().write().await;
        let Some(user) = users.get(user_id).filter(|u| u.is_active) else {
            tracing::warn!(user_id = %user_id, "Special link for unknown or inactive user");
            return Ok(());
        };
        if let Some(raw_role) = raw_role {
            if raw_role.parse::<UserRole>().ok() != Some(user.role) {
                tracing::warn!(user_id = %user_id, role = %raw_role, "Special link role mismatch");
                return Ok(());
            }
        }
        let current = CurrentUser::from(user);
        users.record_login(user_id, Utc::now())?;
        current
    };

    set_current_user(session, &current).await?;
    if current.role.prefers_chinese() {
        set_language(session, Language::Cn).await?;
    }

    tracing::info!(user_id = %current.id, role = %current.role, "Logged in via special link");
    Ok(())
}
