//! Category resolution, product filtering and pagination.
//!
//! Everything here is a pure function over borrowed data. Route handlers take
//! a read lock on the store, run these functions, and render the result.
//!
//! # Category paths
//!
//! A category path is the `/`-joined names from a root category down to a
//! node, e.g. `Электроника/Аксессуары/Чехлы`. Paths arrive percent-encoded
//! in the URL (`/category/%D0%AD...`) and are decoded segment by segment.

pub mod matching;
pub mod pagination;
pub mod tree;

pub use matching::{category_matches, filter_by_category, sort_newest_first};
pub use pagination::{
    DEFAULT_ITEMS_PER_PAGE, ITEMS_PER_PAGE_OPTIONS, PageLink, Pagination,
};
pub use tree::{breadcrumb, category_href, decode_path, find_category_by_path};
