//! Category page: breadcrumb, filtered and paginated product cards.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Query, State},
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use tracing::instrument;

use crate::catalog::{
    DEFAULT_ITEMS_PER_PAGE, ITEMS_PER_PAGE_OPTIONS, PageLink, Pagination, breadcrumb,
    category_href, decode_path, filter_by_category, find_category_by_path, sort_newest_first,
    tree::CATEGORY_ROUTE_PREFIX,
};
use crate::filters;
use crate::i18n::CatalogText;
use crate::middleware::{OptionalUser, UiLanguage};
use crate::state::AppState;

use super::layout::Layout;
use super::products::ProductCard;

/// Query string of a category page.
///
/// Kept as raw strings so that a malformed value falls back to the default
/// instead of rejecting the request.
#[derive(Debug, Default, Deserialize)]
pub struct CategoryQuery {
    pub page: Option<String>,
    pub limit: Option<String>,
}

impl CategoryQuery {
    fn page(&self) -> usize {
        parse_positive(self.page.as_deref()).unwrap_or(1)
    }

    fn limit(&self) -> usize {
        parse_positive(self.limit.as_deref()).unwrap_or(DEFAULT_ITEMS_PER_PAGE)
    }
}

fn parse_positive(raw: Option<&str>) -> Option<usize> {
    raw.and_then(|v| v.trim().parse::<usize>().ok())
        .filter(|v| *v > 0)
}

/// One breadcrumb entry.
#[derive(Debug, Clone)]
pub struct Crumb {
    pub name: String,
    pub href: String,
}

/// One entry in the page-number bar; `number` is `None` for a gap.
#[derive(Debug, Clone)]
pub struct PageLinkView {
    pub number: Option<usize>,
    pub href: String,
    pub is_current: bool,
}

/// An option of the "show per page" select.
#[derive(Debug, Clone)]
pub struct PerPageOption {
    pub value: usize,
    pub selected: bool,
}

/// Category page template.
#[derive(Template, WebTemplate)]
#[template(path = "categories/show.html")]
pub struct CategoryShowTemplate {
    pub layout: Layout,
    pub crumbs: Vec<Crumb>,
    pub name: String,
    pub icon: Option<String>,
    pub category_path: String,
    pub subcategories: Vec<Crumb>,
    pub summary: String,
    pub page_summary: String,
    pub range_summary: String,
    pub show_pagination: bool,
    pub page_links: Vec<PageLinkView>,
    pub prev_href: Option<String>,
    pub next_href: Option<String>,
    pub per_page_options: Vec<PerPageOption>,
    pub products: Vec<ProductCard>,
    pub can_edit: bool,
    /// Path and query of this page, posted back by product forms.
    pub return_to: String,
    pub all_categories: Vec<String>,
}

/// "Category not found" page.
#[derive(Template, WebTemplate)]
#[template(path = "categories/not_found.html")]
pub struct CategoryNotFoundTemplate {
    pub layout: Layout,
}

fn page_href(base: &str, page: usize, limit: usize) -> String {
    format!("{base}?page={page}&limit={limit}")
}

fn page_link_views(pagination: &Pagination, base: &str) -> Vec<PageLinkView> {
    pagination
        .links()
        .into_iter()
        .map(|link| match link {
            PageLink::Page(number) => PageLinkView {
                number: Some(number),
                href: page_href(base, number, pagination.per_page()),
                is_current: number == pagination.current_page(),
            },
            PageLink::Gap => PageLinkView {
                number: None,
                href: String::new(),
                is_current: false,
            },
        })
        .collect()
}

fn per_page_options(limit: usize) -> Vec<PerPageOption> {
    let mut values = ITEMS_PER_PAGE_OPTIONS.to_vec();
    if !values.contains(&limit) {
        values.push(limit);
        values.sort_unstable();
    }
    values
        .into_iter()
        .map(|value| PerPageOption {
            value,
            selected: value == limit,
        })
        .collect()
}

/// Category page at `/category/{*path}`.
///
/// The path is taken from the raw URI so that every segment can be decoded
/// the same way for lookup, breadcrumb and filtering.
#[instrument(skip(state, user))]
pub async fn show(
    State(state): State<AppState>,
    OptionalUser(user): OptionalUser,
    UiLanguage(language): UiLanguage,
    Query(query): Query<CategoryQuery>,
    uri: Uri,
) -> Response {
    let raw_path = uri
        .path()
        .strip_prefix(CATEGORY_ROUTE_PREFIX)
        .unwrap_or_default()
        .trim_end_matches('/');
    let current_path = uri
        .path_and_query()
        .map_or_else(|| uri.path().to_string(), ToString::to_string);
    let layout = Layout::new(language, user.as_ref(), current_path.clone());

    let Some(category) = find_category_by_path(state.categories(), raw_path) else {
        tracing::debug!(path = %raw_path, "Category not found");
        return (StatusCode::NOT_FOUND, CategoryNotFoundTemplate { layout }).into_response();
    };

    let decoded_path = decode_path(raw_path);
    let base_href = category_href(&decoded_path);

    let mut crumbs = Vec::new();
    let mut walked = String::new();
    for node in breadcrumb(state.categories(), raw_path) {
        if !walked.is_empty() {
            walked.push('/');
        }
        walked.push_str(&node.name);
        crumbs.push(Crumb {
            name: node.name.clone(),
            href: category_href(&walked),
        });
    }

    let subcategories = category
        .children
        .iter()
        .map(|child| Crumb {
            name: child.name.clone(),
            href: category_href(&format!("{decoded_path}/{}", child.name)),
        })
        .collect();

    let products = state.products().read().await;
    let mut matched = filter_by_category(products.list(), raw_path);
    sort_newest_first(&mut matched);

    let limit = query.limit();
    let pagination = Pagination::new(query.page(), limit, matched.len());
    let cards: Vec<_> = pagination
        .slice(&matched)
        .iter()
        .map(|product| ProductCard::new(product, language))
        .collect();

    let total_pages = pagination.total_pages();
    let can_edit = layout.can_edit_catalog();
    let all_categories = if can_edit {
        products
            .all_categories()
            .into_iter()
            .map(ToString::to_string)
            .collect()
    } else {
        Vec::new()
    };

    CategoryShowTemplate {
        crumbs,
        name: category.name.clone(),
        icon: category.icon.clone(),
        category_path: decoded_path,
        subcategories,
        summary: CatalogText::showing_sorted(language, cards.len(), matched.len()),
        page_summary: CatalogText::page_of(language, pagination.current_page(), total_pages.max(1)),
        range_summary: CatalogText::showing_range(
            language,
            pagination.first_item(),
            pagination.last_item(),
            matched.len(),
        ),
        show_pagination: total_pages > 1,
        page_links: page_link_views(&pagination, &base_href),
        prev_href: pagination
            .has_prev()
            .then(|| page_href(&base_href, pagination.current_page() - 1, limit)),
        next_href: pagination
            .has_next()
            .then(|| page_href(&base_href, pagination.current_page() + 1, limit)),
        per_page_options: per_page_options(limit),
        products: cards,
        can_edit,
        return_to: current_path,
        all_categories,
        layout,
    }
    .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_falls_back_on_invalid_values() {
        let query = CategoryQuery {
            page: Some("abc".to_string()),
            limit: Some("0".to_string()),
        };
        assert_eq!(query.page(), 1);
        assert_eq!(query.limit(), DEFAULT_ITEMS_PER_PAGE);

        let query = CategoryQuery {
            page: Some("3".to_string()),
            limit: Some("50".to_string()),
        };
        assert_eq!(query.page(), 3);
        assert_eq!(query.limit(), 50);
    }

    #[test]
    fn test_per_page_options_include_custom_limit() {
        let options = per_page_options(10);
        assert_eq!(options.first().map(|o| o.value), Some(10));
        assert_eq!(options.iter().filter(|o| o.selected).count(), 1);
        assert_eq!(per_page_options(25).len(), ITEMS_PER_PAGE_OPTIONS.len());
    }

    #[test]
    fn test_page_links_carry_limit() {
        let pagination = Pagination::new(2, 25, 60);
        let links = page_link_views(&pagination, "/category/a");
        assert_eq!(links.len(), 3);
        assert!(links.iter().any(|l| l.is_current && l.href == "/category/a?page=2&limit=25"));
    }
}
