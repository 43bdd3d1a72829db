//! Seed data loaded at startup.
//!
//! A seed is a YAML document with three top-level lists:
//!
//! ```yaml
//! users:
//!   - { id: 1, username: admin, role: admin }
//! categories:
//!   - { id: 1, name: Электроника, icon: Smartphone, children: [] }
//! products:
//!   - { id: 1, name_en: Phone, price: "100", category: Электроника }
//! ```
//!
//! The default seed is compiled into the binary; `CATALOG_SEED_FILE` points
//! at a replacement.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use catalog_admin_core::{ProductId, UserId};

use crate::catalog::category_matches;
use crate::links::special_link_path;
use crate::models::{Category, Product, User};

const EMBEDDED_SEED: &str = include_str!("../../data/seed.yaml");

/// Errors loading or validating a seed.
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to read seed file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid seed YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("duplicate {entity} id {id}")]
    DuplicateId { entity: &'static str, id: String },

    #[error("user {0} has a blank username")]
    BlankUsername(UserId),
}

/// Initial in-memory state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Seed {
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub products: Vec<Product>,
}

impl Seed {
    /// Parse and validate a seed document.
    ///
    /// Users without a special link get one generated.
    ///
    /// # Errors
    ///
    /// Returns `SeedError` if the YAML is malformed or fails validation.
    pub fn from_yaml(yaml: &str) -> Result<Self, SeedError> {
        let mut seed: Self = serde_yaml::from_str(yaml)?;
        seed.validate()?;
        for user in &mut seed.users {
            if user.special_link.is_none() {
                user.special_link = Some(special_link_path(user.id, user.role));
            }
        }
        Ok(seed)
    }

    /// Load a seed file from disk.
    ///
    /// # Errors
    ///
    /// Returns `SeedError::Io` if the file cannot be read, or any error from
    /// [`Seed::from_yaml`].
    pub fn load(path: &Path) -> Result<Self, SeedError> {
        let yaml = std::fs::read_to_string(path).map_err(|source| SeedError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let seed = Self::from_yaml(&yaml)?;
        tracing::info!(
            path = %path.display(),
            users = seed.users.len(),
            products = seed.products.len(),
            "Loaded seed file"
        );
        Ok(seed)
    }

    /// The seed compiled into the binary.
    ///
    /// # Errors
    ///
    /// Returns `SeedError` if the embedded document is invalid.
    pub fn embedded() -> Result<Self, SeedError> {
        Self::from_yaml(EMBEDDED_SEED)
    }

    /// Check IDs are unique and usernames are not blank.
    ///
    /// # Errors
    ///
    /// Returns the first problem found.
    pub fn validate(&self) -> Result<(), SeedError> {
        let mut user_ids = HashSet::new();
        for user in &self.users {
            if !user_ids.insert(user.id) {
                return Err(duplicate("user", user.id));
            }
            if user.username.trim().is_empty() {
                return Err(SeedError::BlankUsername(user.id));
            }
        }

        let mut product_ids = HashSet::new();
        for product in &self.products {
            if !product_ids.insert(product.id) {
                return Err(duplicate("product", product.id));
            }
        }

        let mut category_ids = HashSet::new();
        let mut duplicate_category = None;
        for root in &self.categories {
            root.walk("", &mut |category, _| {
                if !category_ids.insert(category.id) && duplicate_category.is_none() {
                    duplicate_category = Some(category.id);
                }
            });
        }
        if let Some(id) = duplicate_category {
            return Err(duplicate("category", id));
        }

        Ok(())
    }

    /// Full paths of every node in the category tree, depth-first.
    #[must_use]
    pub fn category_paths(&self) -> Vec<String> {
        let mut paths = Vec::new();
        for root in &self.categories {
            root.walk("", &mut |_, path| paths.push(path.to_string()));
        }
        paths
    }

    /// Products whose primary category does not match any node of the tree.
    ///
    /// Such products never appear on a category page.
    #[must_use]
    pub fn unreachable_products(&self) -> Vec<(ProductId, &str)> {
        let paths = self.category_paths();
        self.products
            .iter()
            .filter(|product| {
                !paths
                    .iter()
                    .any(|path| product.categories().any(|c| category_matches(c, path)))
            })
            .map(|product| (product.id, product.category.as_str()))
            .collect()
    }
}

fn duplicate(entity: &'static str, id: impl ToString) -> SeedError {
    SeedError::DuplicateId {
        entity,
        id: id.to_string(),
    }
}
