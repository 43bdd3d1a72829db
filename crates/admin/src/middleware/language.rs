//! UI language stored in the session.

use std::convert::Infallible;

use axum::{extract::FromRequestParts, http::request::Parts};
use tower_sessions::Session;

use catalog_admin_core::Language;

use crate::models::session_keys;

/// Extractor for the language the page should be rendered in.
///
/// Falls back to Russian when the session has no choice yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiLanguage(pub Language);

impl<S> FromRequestParts<S> for UiLanguage
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let language = match parts.extensions.get::<Session>() {
            Some(session) => session
                .get::<Language>(session_keys::LANGUAGE)
                .await
                .ok()
                .flatten()
                .unwrap_or_default(),
            None => Language::default(),
        };

        Ok(Self(language))
    }
}

/// Store the UI language in the session.
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn set_language(
    session: &Session,
    language: Language,
) -> Result<(), tower_sessions::session::Error> {
    session.insert(session_keys::LANGUAGE, language).await
}
