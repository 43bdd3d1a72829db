//! Walking the category tree by path.

use std::borrow::Cow;

use crate::models::Category;

/// Prefix of category page URLs.
pub const CATEGORY_ROUTE_PREFIX: &str = "/category/";

/// Percent-decode each `/` segment of a raw category path.
///
/// Segments that are not valid UTF-8 after decoding are kept as-is.
#[must_use]
pub fn decode_path(raw: &str) -> String {
    raw.split('/')
        .map(decode_segment)
        .collect::<Vec<_>>()
        .join("/")
}

fn decode_segment(segment: &str) -> Cow<'_, str> {
    urlencoding::decode(segment).unwrap_or(Cow::Borrowed(segment))
}

/// Build the category page URL for a decoded path.
#[must_use]
pub fn category_href(path: &str) -> String {
    let encoded: Vec<_> = path.split('/').map(urlencoding::encode).collect();
    format!("{CATEGORY_ROUTE_PREFIX}{}", encoded.join("/"))
}

/// Resolve a raw path to the category it names.
///
/// Every segment must match a child of the previous node; a single missing
/// segment means the category does not exist.
#[must_use]
pub fn find_category_by_path<'a>(tree: &'a [Category], raw_path: &str) -> Option<&'a Category> {
    if raw_path.is_empty() {
        return None;
    }

    let mut level = tree;
    let mut found = None;
    for segment in raw_path.split('/') {
        let name = decode_segment(segment);
        let category = level.iter().find(|c| c.name == name)?;
        level = &category.children;
        found = Some(category);
    }
    found
}

/// Categories along a raw path, root first.
///
/// Unlike [`find_category_by_path`] this is forgiving: a segment that does not
/// match anything at the current level is skipped and the walk continues at
/// the same level.
#[must_use]
pub fn breadcrumb<'a>(tree: &'a [Category], raw_path: &str) -> Vec<&'a Category> {
    if raw_path.is_empty() {
        return Vec::new();
    }

    let mut level = tree;
    let mut trail = Vec::new();
    for segment in raw_path.split('/') {
        let name = decode_segment(segment);
        if let Some(category) = level.iter().find(|c| c.name == name) {
            trail.push(category);
            level = &category.children;
        }
    }
    trail
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use catalog_admin_core::CategoryId;

    use super::*;

    fn node(id: u32, name: &str, children: Vec<Category>) -> Category {
        Category {
            id: CategoryId::new(id),
            name: name.to_string(),
            icon: None,
            children,
        }
    }

    fn tree() -> Vec<Category> {
        vec![
            node(
                1,
                "Электроника",
                vec![
                    node(2, "Смартфоны", vec![]),
                    node(3, "Аксессуары", vec![node(4, "Чехлы", vec![])]),
                ],
            ),
            node(5, "Home & Garden", vec![]),
        ]
    }

    #[test]
    fn test_decode_path() {
        assert_eq!(
            decode_path("%D0%A7%D0%B5%D1%85%D0%BB%D1%8B/Home%20%26%20Garden"),
            "Чехлы/Home & Garden"
        );
        // Invalid UTF-8 is kept verbatim
        assert_eq!(decode_path("a/%FF"), "a/%FF");
    }

    #[test]
    fn test_href_round_trips_through_decode() {
        let href = category_href("Home & Garden");
        assert_eq!(href, "/category/Home%20%26%20Garden");
        let raw = href.strip_prefix(CATEGORY_ROUTE_PREFIX).unwrap();
        assert_eq!(decode_path(raw), "Home & Garden");
    }

    #[test]
    fn test_find_nested() {
        let tree = tree();
        let found = find_category_by_path(&tree, "Электроника/Аксессуары/Чехлы").unwrap();
        assert_eq!(found.id, CategoryId::new(4));
    }

    #[test]
    fn test_find_encoded() {
        let tree = tree();
        let found = find_category_by_path(&tree, "Home%20%26%20Garden").unwrap();
        assert_eq!(found.id, CategoryId::new(5));
    }

    #[test]
    fn test_find_missing_segment() {
        let tree = tree();
        assert!(find_category_by_path(&tree, "Электроника/Планшеты").is_none());
        assert!(find_category_by_path(&tree, "Чехлы").is_none());
        assert!(find_category_by_path(&tree, "").is_none());
    }

    #[test]
    fn test_breadcrumb_full_path() {
        let tree = tree();
        let names: Vec<_> = breadcrumb(&tree, "Электроника/Аксессуары/Чехлы")
            .into_iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(names, vec!["Электроника", "Аксессуары", "Чехлы"]);
    }

    #[test]
    fn test_breadcrumb_skips_unknown_segments() {
        let tree = tree();
        let names: Vec<_> = breadcrumb(&tree, "Электроника/Unknown/Аксессуары")
            .into_iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(names, vec!["Электроника", "Аксессуары"]);
    }
}
