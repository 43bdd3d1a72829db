//! HTTP route handlers for the catalog admin.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                              - Health check
//!
//! # Home and session
//! GET  /                                    - Home page (or special-link login)
//! POST /language                            - Set UI language
//! POST /logout                              - Logout
//!
//! # Users (admin only)
//! GET  /users                               - User list
//! POST /users                               - Create user
//! POST /users/{id}                          - Update username, role, status
//! POST /users/{id}/delete                   - Delete user
//!
//! # Catalog
//! GET  /category/{*path}                    - Category page
//!
//! # Products (admin or editor)
//! POST /products                            - Add product
//! POST /products/{id}/field                 - Inline field edit
//! POST /products/{id}/additional-categories - Replace additional categories
//! POST /products/{id}/price-request         - Switch to price on request
//! POST /products/{id}/images                - Add image by URL
//! POST /products/{id}/images/navigate       - Previous / next image
//! POST /products/{id}/images/{index}/current - Show image
//! POST /products/{id}/images/{index}/delete  - Remove image
//! ```

pub mod auth;
pub mod categories;
pub mod home;
pub mod layout;
pub mod products;
pub mod users;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Liveness health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Create the user management router.
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(users::index).post(users::create))
        .route("/{id}", post(users::update))
        .route("/{id}/delete", post(users::delete))
}

/// Create the product mutation router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(products::create))
        .route("/{id}/field", post(products::edit_field))
        .route(
            "/{id}/additional-categories",
            post(products::set_additional_categories),
        )
        .route("/{id}/price-request", post(products::request_price))
        .route("/{id}/images", post(products::add_image))
        .route("/{id}/images/navigate", post(products::navigate_image))
        .route(
            "/{id}/images/{index}/current",
            post(products::set_current_image),
        )
        .route("/{id}/images/{index}/delete", post(products::remove_image))
}

/// Create all routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/", get(home::index))
        .route("/language", post(auth::set_ui_language))
        .route("/logout", post(auth::logout))
        .route("/category/{*path}", get(categories::show))
        .nest("/users", user_routes())
        .nest("/products", product_routes())
}
