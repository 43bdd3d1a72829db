//! HTTP middleware stack for admin.
//!
//! # Middleware Order (outermost first)
//!
//! 1. Sentry layers (hub per request, HTTP transaction)
//! 2. `TraceLayer` (request span with status and latency)
//! 3. Request ID (recorded in the span, echoed in the response)
//! 4. Session layer (tower-sessions with an in-memory store)
//!
//! Authorization is done per handler with the extractors in [`auth`].

pub mod auth;
pub mod language;
pub mod request_id;
pub mod session;

pub use auth::{
    AuthRejection, OptionalUser, RequireAdmin, RequireCatalogEditor, clear_current_user,
    set_current_user,
};
pub use language::{UiLanguage, set_language};
pub use request_id::{REQUEST_ID_HEADER, request_id_middleware};
pub use session::{SESSION_COOKIE_NAME, create_session_layer};
