//! Session actions: language switch and logout.

use axum::{Form, response::Redirect};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use catalog_admin_core::Language;

use crate::error::{AppError, Result};
use crate::links::local_redirect_target;
use crate::middleware::{clear_current_user, set_language};

/// Language switcher form.
#[derive(Debug, Deserialize)]
pub struct LanguageForm {
    pub language: String,
    #[serde(default)]
    pub return_to: Option<String>,
}

/// Store the chosen UI language and go back to the page.
#[instrument(skip(session))]
pub async fn set_ui_language(session: Session, Form(form): Form<LanguageForm>) -> Result<Redirect> {
    let language = form
        .language
        .parse::<Language>()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;
    set_language(&session, language).await?;
    Ok(Redirect::to(local_redirect_target(form.return_to.as_deref())))
}

/// Log out and go to the home page.
#[instrument(skip(session))]
pub async fn logout(session: Session) -> Result<Redirect> {
    clear_current_user(&session).await?;
    tracing::info!("Logged out");
    Ok(Redirect::to("/"))
}
