//! Matching products against a category path.
//!
//! Product categories are free-form strings that are not always full paths:
//! older products carry only the leaf name (`Чехлы`) instead of
//! `Электроника/Аксессуары/Чехлы`. A candidate category matches a search
//! path when any of these hold:
//!
//! 1. it equals the path exactly;
//! 2. it starts with the path (plain string prefix, so subcategories match);
//! 3. it equals the leaf of the path, or ends with `/` + leaf.

use crate::models::Product;

use super::tree::decode_path;

/// Whether a single category string matches a decoded search path.
#[must_use]
pub fn category_matches(candidate: &str, search_path: &str) -> bool {
    let candidate = candidate.trim();
    let search_path = search_path.trim();
    let leaf = search_path.rsplit('/').next().unwrap_or(search_path);

    candidate == search_path
        || candidate.starts_with(search_path)
        || candidate == leaf
        || candidate
            .strip_suffix(leaf)
            .is_some_and(|rest| rest.ends_with('/'))
}

/// Products whose primary or any additional category matches `raw_path`.
///
/// `raw_path` is the path as it appears in the URL; it is decoded first.
/// An empty path matches nothing.
#[must_use]
pub fn filter_by_category<'a>(products: &'a [Product], raw_path: &str) -> Vec<&'a Product> {
    if raw_path.is_empty() {
        return Vec::new();
    }

    let search_path = decode_path(raw_path);
    let matched: Vec<_> = products
        .iter()
        .filter(|product| {
            product
                .categories()
                .any(|category| category_matches(category, &search_path))
        })
        .collect();

    tracing::debug!(
        search_path = %search_path,
        total = products.len(),
        matched = matched.len(),
        "Filtered products by category"
    );
    matched
}

/// Sort newest first. Higher IDs were created later.
pub fn sort_newest_first(products: &mut [&Product]) {
    products.sort_by(|a, b| b.id.cmp(&a.id));
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use catalog_admin_core::ProductId;

    use super::*;
    use crate::models::NewProduct;

    fn product(id: u32, category: &str, additional: &[&str]) -> Product {
        let mut product = NewProduct {
            name_en: format!("Product {id}"),
            price: "1".to_string(),
            category: category.to_string(),
            ..NewProduct::default()
        }
        .build(ProductId::new(id), 0)
        .unwrap();
        product.additional_categories = additional.iter().map(|s| (*s).to_string()).collect();
        product
    }

    #[test]
    fn test_exact_match() {
        assert!(category_matches(
            "Электроника/Смартфоны",
            "Электроника/Смартфоны"
        ));
    }

    #[test]
    fn test_prefix_match_includes_subcategories() {
        assert!(category_matches(
            "Электроника/Аксессуары/Чехлы",
            "Электроника"
        ));
        // Plain string prefix, not segment-aware
        assert!(category_matches("Электроника2", "Электроника"));
    }

    #[test]
    fn test_leaf_match_for_legacy_categories() {
        assert!(category_matches("Чехлы", "Электроника/Аксессуары/Чехлы"));
        assert!(category_matches("Старое/Чехлы", "Электроника/Аксессуары/Чехлы"));
        assert!(!category_matches("Старые Чехлы", "Электроника/Аксессуары/Чехлы"));
    }

    #[test]
    fn test_whitespace_is_trimmed() {
        assert!(category_matches("  Одежда/Мужская ", " Одежда/Мужская"));
    }

    #[test]
    fn test_unrelated_category_does_not_match() {
        assert!(!category_matches("Одежда/Мужская", "Электроника"));
        assert!(!category_matches("Одежда", "Одежда/Мужская"));
    }

    #[test]
    fn test_filter_checks_additional_categories() {
        let products = vec![
            product(1, "Одежда/Мужская", &[]),
            product(2, "Дом", &["Электроника/Смартфоны"]),
            product(3, "Чехлы", &[]),
        ];

        let ids: Vec<_> = filter_by_category(&products, "Электроника")
            .into_iter()
            .map(|p| p.id.as_u32())
            .collect();
        assert_eq!(ids, vec![2]);

        let ids: Vec<_> = filter_by_category(
            &products,
            "%D0%AD%D0%BB%D0%B5%D0%BA%D1%82%D1%80%D0%BE%D0%BD%D0%B8%D0%BA%D0%B0/%D0%A7%D0%B5%D1%85%D0%BB%D1%8B",
        )
        .into_iter()
        .map(|p| p.id.as_u32())
        .collect();
        assert_eq!(ids, vec![3]);
    }

    #[test]
    fn test_empty_path_matches_nothing() {
        let products = vec![product(1, "Одежда", &[])];
        assert!(filter_by_category(&products, "").is_empty());
    }

    #[test]
    fn test_sort_newest_first() {
        let products = vec![
            product(2, "A", &[]),
            product(10, "A", &[]),
            product(9, "A", &[]),
        ];
        let mut refs: Vec<_> = products.iter().collect();
        sort_newest_first(&mut refs);
        let ids: Vec<_> = refs.iter().map(|p| p.id.as_u32()).collect();
        assert_eq!(ids, vec![10, 9, 2]);
    }
}
