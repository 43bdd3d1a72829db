//! Inspect what a category page shows.

use std::path::Path;

use tracing::info;

use catalog_admin::catalog::{
    Pagination, breadcrumb, filter_by_category, find_category_by_path, sort_newest_first,
};
use catalog_admin::i18n::CatalogText;
use catalog_admin::store::{Seed, SeedError};
use catalog_admin_core::Language;

/// Log the products on `page` of the category at `path`.
///
/// Uses the same lookup, matching, ordering and paging as the category page.
///
/// # Errors
///
/// Returns an error if the seed cannot be loaded or the category does not
/// exist.
pub async fn show(
    file: &Path,
    path: &str,
    page: usize,
    limit: usize,
    language: Language,
) -> Result<(), Box<dyn std::error::Error>> {
    let yaml = tokio::fs::read_to_string(file)
        .await
        .map_err(|source| SeedError::Io {
            path: file.to_path_buf(),
            source,
        })?;
    let seed = Seed::from_yaml(&yaml)?;

    let path = path.trim_end_matches('/');
    let Some(category) = find_category_by_path(&seed.categories, path) else {
        return Err(format!("category not found: {path}").into());
    };

    let trail: Vec<_> = breadcrumb(&seed.categories, path)
        .into_iter()
        .map(|c| c.name.as_str())
        .collect();

    let mut matched = filter_by_category(&seed.products, path);
    sort_newest_first(&mut matched);
    let pagination = Pagination::new(page, limit, matched.len());
    let shown = pagination.slice(&matched);

    info!("{}", trail.join(" / "));
    if let Some(icon) = &category.icon {
        info!("  Icon: {icon}");
    }
    info!(
        "  {}",
        CatalogText::showing_sorted(language, shown.len(), matched.len())
    );
    info!(
        "  {}",
        CatalogText::page_of(language, pagination.current_page(), pagination.total_pages().max(1))
    );

    for product in shown {
        let price = if product.is_price_on_request() {
            CatalogText::get(language).price_on_request.to_string()
        } else {
            product.price.normalize().to_string()
        };
        info!(
            "  #{} {} [{}] {} ({})",
            product.id,
            product.name(language),
            product.sku,
            price,
            product.category
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seed_file() -> &'static Path {
        Path::new(concat!(env!("CARGO_MANIFEST_DIR"), "/../admin/data/seed.yaml"))
    }

    #[tokio::test]
    async fn test_trailing_slash_is_ignored() {
        let result = show(seed_file(), "Электроника/", 1, 25, Language::Ru).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_leading_slash_is_not_found() {
        let err = show(seed_file(), "/Электроника", 1, 25, Language::Ru)
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "category not found: /Электроника");
    }
}
