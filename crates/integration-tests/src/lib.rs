//! Integration tests for the catalog admin.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p catalog-admin-integration-tests
//! ```
//!
//! Every test spawns its own server on an ephemeral port with the embedded
//! seed, so tests never share users or products.
//!
//! # Test Categories
//!
//! - `users` - user management and special-link login
//! - `categories` - category pages, matching and pagination
//! - `products` - product editing

#![allow(clippy::missing_panics_doc)]

use reqwest::{Client, Response, StatusCode, header::LOCATION, redirect::Policy};

use catalog_admin::config::AdminConfig;
use catalog_admin::state::AppState;
use catalog_admin::store::Seed;

/// A running admin server and a client with its own cookie jar.
pub struct TestApp {
    pub base_url: String,
    pub client: Client,
}

impl TestApp {
    /// Start a server on `127.0.0.1:0` with default config and the embedded seed.
    pub async fn spawn() -> Self {
        let config = AdminConfig::from_lookup(|_| None).expect("Failed to build test config");
        let seed = Seed::embedded().expect("Embedded seed must be valid");
        let app = catalog_admin::app(AppState::new(config, seed));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("Listener has no address");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Test server error");
        });

        Self {
            base_url: format!("http://{addr}"),
            client: build_client(),
        }
    }

    /// A second client with an empty cookie jar against the same server.
    #[must_use]
    pub fn new_session(&self) -> Self {
        Self {
            base_url: self.base_url.clone(),
            client: build_client(),
        }
    }

    /// Start a server and log in through the special link of `user_id`.
    pub async fn logged_in_as(user_id: u32, role: &str) -> Self {
        let app = Self::spawn().await;
        let resp = app
            .get(&format!("/?auto-login={user_id}&role={role}"))
            .await;
        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        app
    }

    pub async fn get(&self, path: &str) -> Response {
        self.client
            .get(format!("{}{path}", self.base_url))
            .send()
            .await
            .expect("GET request failed")
    }

    pub async fn post_form(&self, path: &str, form: &[(&str, &str)]) -> Response {
        self.client
            .post(format!("{}{path}", self.base_url))
            .form(form)
            .send()
            .await
            .expect("POST request failed")
    }

    /// GET a page and return its status and body.
    pub async fn page(&self, path: &str) -> (StatusCode, String) {
        let resp = self.get(path).await;
        let status = resp.status();
        let body = resp.text().await.expect("Failed to read response body");
        (status, body)
    }
}

// Redirects are not followed so tests can assert on them.
fn build_client() -> Client {
    Client::builder()
        .cookie_store(true)
        .redirect(Policy::none())
        .build()
        .expect("Failed to create HTTP client")
}

/// The `Location` header of a redirect.
#[must_use]
pub fn location(resp: &Response) -> &str {
    resp.headers()
        .get(LOCATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
}

/// Percent-encode a category path the way category links do.
#[must_use]
pub fn category_url(path: &str) -> String {
    catalog_admin::catalog::category_href(path)
}
