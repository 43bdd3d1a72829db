//! In-memory state for users, products and categories.
//!
//! There is no database: every start loads a [`Seed`] and all edits live
//! in memory until the process exits.
//!
//! The stores are plain structs with synchronous methods. `AppState` wraps
//! each of them in a `tokio::sync::RwLock`; handlers take a read lock to
//! render pages and a write lock to apply a mutation.

pub mod products;
pub mod seed;
pub mod users;

use thiserror::Error;

use catalog_admin_core::UserId;

pub use products::ProductStore;
pub use seed::{Seed, SeedError};
pub use users::UserStore;

/// Errors that can occur during store operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// Requested entity was not found.
    #[error("{entity} {id} not found")]
    NotFound {
        /// Kind of entity (`user`, `product`, `image`).
        entity: &'static str,
        /// Requested ID or index.
        id: String,
    },

    /// Users with the admin role cannot be deleted.
    #[error("user {0} is an administrator and cannot be deleted")]
    ProtectedUser(UserId),

    /// Submitted data failed validation.
    #[error("invalid {field}: {reason}")]
    Invalid {
        /// Name of the offending field.
        field: &'static str,
        /// Human-readable reason.
        reason: String,
    },
}

impl StoreError {
    pub(crate) fn not_found(entity: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            entity,
            id: id.to_string(),
        }
    }

    pub(crate) fn invalid(field: &'static str, reason: impl ToString) -> Self {
        Self::Invalid {
            field,
            reason: reason.to_string(),
        }
    }
}
