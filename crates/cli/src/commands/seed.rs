//! Seed file validation.

use std::path::Path;

use tracing::{info, warn};

use catalog_admin::store::{Seed, SeedError};

/// Parse a seed file and report what it contains.
///
/// Duplicate IDs and blank usernames are errors. Products whose category no
/// category page can reach are warnings, or errors with `strict`.
///
/// # Errors
///
/// Returns an error if the file cannot be read, does not parse, fails
/// validation, or (with `strict`) contains unreachable products.
pub async fn validate(path: &Path, strict: bool) -> Result<(), Box<dyn std::error::Error>> {
    info!(path = %path.display(), "Validating seed file");

    let yaml = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| SeedError::Io {
            path: path.to_path_buf(),
            source,
        })?;
    let seed = Seed::from_yaml(&yaml)?;

    let unreachable = seed.unreachable_products();
    for (product_id, category) in &unreachable {
        warn!("Product {product_id} has category {category:?}, which matches no category page");
    }

    info!("Seed file is valid");
    info!("  Users: {}", seed.users.len());
    info!("  Categories: {}", seed.category_paths().len());
    info!("  Products: {}", seed.products.len());

    if strict && !unreachable.is_empty() {
        return Err(format!("{} unreachable products found", unreachable.len()).into());
    }
    Ok(())
}
