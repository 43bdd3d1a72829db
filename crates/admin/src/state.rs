//! Application state shared across handlers.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::config::AdminConfig;
use crate::models::Category;
use crate::store::{ProductStore, Seed, UserStore};

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc`. Users and products sit behind
/// their own `RwLock`; the category tree never changes after startup.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: AdminConfig,
    users: RwLock<UserStore>,
    products: RwLock<ProductStore>,
    categories: Vec<Category>,
}

impl AppState {
    /// Create a new application state from a validated seed.
    #[must_use]
    pub fn new(config: AdminConfig, seed: Seed) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                users: RwLock::new(UserStore::new(seed.users)),
                products: RwLock::new(ProductStore::new(seed.products)),
                categories: seed.categories,
            }),
        }
    }

    /// Get a reference to the admin configuration.
    #[must_use]
    pub fn config(&self) -> &AdminConfig {
        &self.inner.config
    }

    /// The user store.
    #[must_use]
    pub fn users(&self) -> &RwLock<UserStore> {
        &self.inner.users
    }

    /// The product store.
    #[must_use]
    pub fn products(&self) -> &RwLock<ProductStore> {
        &self.inner.products
    }

    /// Root categories of the taxonomy.
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.inner.categories
    }
}
