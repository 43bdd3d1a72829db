//! Domain models for the catalog admin.

pub mod category;
pub mod product;
pub mod session;
pub mod user;

pub use category::Category;
pub use product::{
    DEFAULT_PRODUCT_IMAGE, FieldError, ImageDirection, NewProduct, NewProductError,
    PRICE_REQUEST_CATEGORY, Product, ProductField, UNCATEGORIZED,
};
pub use session::{CurrentUser, keys as session_keys};
pub use user::{NewUser, User, UserUpdate};
