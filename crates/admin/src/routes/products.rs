//! Product mutations and the product card view.
//!
//! Every mutation is a plain form POST that redirects (303) back to the page
//! it came from, named by the `return_to` form field.

use axum::{
    Form,
    extract::{Path, State},
    response::Redirect,
};
use chrono::Utc;
use serde::Deserialize;
use tracing::instrument;

use catalog_admin_core::{Language, ProductId};

use crate::catalog::{category_href, decode_path};
use crate::error::{AppError, Result};
use crate::i18n::CatalogText;
use crate::links::local_redirect_target;
use crate::middleware::RequireCatalogEditor;
use crate::models::{DEFAULT_PRODUCT_IMAGE, ImageDirection, NewProduct, Product, ProductField};
use crate::state::AppState;

// =============================================================================
// Views
// =============================================================================

/// An inline-editable field on a product card.
#[derive(Debug, Clone)]
pub struct EditableField {
    pub key: &'static str,
    pub label: &'static str,
    pub value: String,
    pub multiline: bool,
}

/// A thumbnail in the image manager.
#[derive(Debug, Clone)]
pub struct ImageThumb {
    pub index: usize,
    pub url: String,
    pub is_current: bool,
}

/// A product as rendered on a category page.
#[derive(Debug, Clone)]
pub struct ProductCard {
    pub id: u32,
    pub name: String,
    pub name_en: String,
    pub sku: String,
    pub price: String,
    pub price_on_request: bool,
    pub quantity: u32,
    pub brand: String,
    pub web_link: String,
    pub category: String,
    pub category_href: String,
    pub additional_categories: Vec<String>,
    /// Additional categories one per line, for the textarea.
    pub additional_categories_text: String,
    pub description: String,
    pub image: String,
    /// "2 / 5" style position, empty with fewer than two images.
    pub image_position: String,
    pub images: Vec<ImageThumb>,
    pub fields: Vec<EditableField>,
}

const fn field_label(field: ProductField, text: &'static CatalogText) -> &'static str {
    match field {
        ProductField::NameEn => text.name_en,
        ProductField::NameCn => text.name_cn,
        ProductField::NameRu => text.name_ru,
        ProductField::Price => text.price,
        ProductField::Sku => text.sku,
        ProductField::Quantity => text.quantity,
        ProductField::Brand => text.brand,
        ProductField::WebLink => text.web_link,
        ProductField::Category => text.category,
        ProductField::Description => text.description,
        ProductField::DescriptionEn => text.description_en,
        ProductField::DescriptionCn => text.description_cn,
        ProductField::Tnved => text.tnved,
        ProductField::Material => text.material,
        ProductField::Purpose => text.purpose,
        ProductField::ForWhom => text.for_whom,
    }
}

fn field_value(product: &Product, field: ProductField) -> String {
    match field {
        ProductField::NameEn => product.name_en.clone(),
        ProductField::NameCn => product.name_cn.clone(),
        ProductField::NameRu => product.name_ru.clone(),
        ProductField::Price => product.price.normalize().to_string(),
        ProductField::Sku => product.sku.clone(),
        ProductField::Quantity => product.quantity.to_string(),
        ProductField::Brand => product.brand.clone(),
        ProductField::WebLink => product.web_link.clone(),
        ProductField::Category => product.category.clone(),
        ProductField::Description => product.description.clone(),
        ProductField::DescriptionEn => product.description_en.clone(),
        ProductField::DescriptionCn => product.description_cn.clone(),
        ProductField::Tnved => product.tnved.clone(),
        ProductField::Material => product.material.clone(),
        ProductField::Purpose => product.purpose.clone(),
        ProductField::ForWhom => product.for_whom.clone(),
    }
}

impl ProductCard {
    #[must_use]
    pub fn new(product: &Product, language: Language) -> Self {
        let text = CatalogText::get(language);
        let image_count = product.images.len();
        let current = product.current_image_index.min(image_count.saturating_sub(1));

        Self {
            id: product.id.as_u32(),
            name: product.name(language).to_string(),
            name_en: product.name_en.clone(),
            sku: product.sku.clone(),
            price: product.price.normalize().to_string(),
            price_on_request: product.is_price_on_request(),
            quantity: product.quantity,
            brand: product.brand.clone(),
            web_link: product.web_link.clone(),
            category: product.category.clone(),
            category_href: category_href(product.category.trim()),
            additional_categories: product.additional_categories.clone(),
            additional_categories_text: product.additional_categories.join("\n"),
            description: product.description(language).to_string(),
            image: product
                .current_image()
                .unwrap_or(DEFAULT_PRODUCT_IMAGE)
                .to_string(),
            image_position: if image_count > 1 {
                format!("{} / {image_count}", current + 1)
            } else {
                String::new()
            },
            images: product
                .images
                .iter()
                .enumerate()
                .map(|(index, url)| ImageThumb {
                    index,
                    url: url.clone(),
                    is_current: index == current,
                })
                .collect(),
            fields: ProductField::ALL
                .into_iter()
                .map(|field| EditableField {
                    key: field.key(),
                    label: field_label(field, text),
                    value: field_value(product, field),
                    multiline: matches!(
                        field,
                        ProductField::Description
                            | ProductField::DescriptionEn
                            | ProductField::DescriptionCn
                    ),
                })
                .collect(),
        }
    }
}

// =============================================================================
// Forms
// =============================================================================

/// Hidden `return_to` field carried by every product form.
#[derive(Debug, Default, Deserialize)]
pub struct ReturnTo {
    #[serde(default)]
    pub return_to: Option<String>,
}

/// "Add product" form.
#[derive(Debug, Deserialize)]
pub struct CreateProductForm {
    #[serde(flatten)]
    pub product: NewProduct,
    #[serde(default)]
    pub return_to: Option<String>,
}

/// Inline edit of one field.
#[derive(Debug, Deserialize)]
pub struct FieldForm {
    pub field: String,
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub return_to: Option<String>,
}

/// Additional categories, one per line.
#[derive(Debug, Deserialize)]
pub struct AdditionalCategoriesForm {
    #[serde(default)]
    pub categories: String,
    #[serde(default)]
    pub return_to: Option<String>,
}

/// New image by URL.
#[derive(Debug, Deserialize)]
pub struct ImageUrlForm {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub return_to: Option<String>,
}

/// Carousel step.
#[derive(Debug, Deserialize)]
pub struct NavigateForm {
    pub direction: ImageDirection,
    #[serde(default)]
    pub return_to: Option<String>,
}

/// Redirect to the page a form was posted from, or home for non-local targets.
fn back(return_to: Option<&str>) -> Redirect {
    Redirect::to(local_redirect_target(return_to))
}

/// Split the additional categories textarea into category paths.
///
/// Lines may also be pasted as category URLs; these are decoded.
fn parse_category_lines(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| {
            line.strip_prefix(crate::catalog::tree::CATEGORY_ROUTE_PREFIX)
                .map_or_else(|| line.to_string(), decode_path)
        })
        .collect()
}

// =============================================================================
// Handlers
// =============================================================================

/// Add a product.
#[instrument(skip(editor, state))]
pub async fn create(
    RequireCatalogEditor(editor): RequireCatalogEditor,
    State(state): State<AppState>,
    Form(form): Form<CreateProductForm>,
) -> Result<Redirect> {
    let now_millis = Utc::now().timestamp_millis();
    let mut products = state.products().write().await;
    let created = products.create(form.product, now_millis)?;
    tracing::info!(user_id = %editor.id, product_id = %created.id, "Product added");
    Ok(back(form.return_to.as_deref()))
}

/// Edit a single field.
#[instrument(skip(editor, state))]
pub async fn edit_field(
    RequireCatalogEditor(editor): RequireCatalogEditor,
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
    Form(form): Form<FieldForm>,
) -> Result<Redirect> {
    let field = form
        .field
        .parse::<ProductField>()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;
    state
        .products()
        .write()
        .await
        .edit_field(id, field, &form.value)?;
    tracing::debug!(user_id = %editor.id, product_id = %id, field = field.key(), "Field saved");
    Ok(back(form.return_to.as_deref()))
}

/// Replace the additional categories.
#[instrument(skip(_editor, state))]
pub async fn set_additional_categories(
    RequireCatalogEditor(_editor): RequireCatalogEditor,
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
    Form(form): Form<AdditionalCategoriesForm>,
) -> Result<Redirect> {
    state
        .products()
        .write()
        .await
        .set_additional_categories(id, parse_category_lines(&form.categories))?;
    Ok(back(form.return_to.as_deref()))
}

/// Switch the product to "price on request".
#[instrument(skip(_editor, state))]
pub async fn request_price(
    RequireCatalogEditor(_editor): RequireCatalogEditor,
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
    Form(form): Form<ReturnTo>,
) -> Result<Redirect> {
    state.products().write().await.request_price(id)?;
    Ok(back(form.return_to.as_deref()))
}

/// Add an image by URL.
#[instrument(skip(_editor, state))]
pub async fn add_image(
    RequireCatalogEditor(_editor): RequireCatalogEditor,
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
    Form(form): Form<ImageUrlForm>,
) -> Result<Redirect> {
    state.products().write().await.add_image(id, &form.url)?;
    Ok(back(form.return_to.as_deref()))
}

/// Show the previous or next image.
#[instrument(skip(_editor, state))]
pub async fn navigate_image(
    RequireCatalogEditor(_editor): RequireCatalogEditor,
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
    Form(form): Form<NavigateForm>,
) -> Result<Redirect> {
    state
        .products()
        .write()
        .await
        .navigate_image(id, form.direction)?;
    Ok(back(form.return_to.as_deref()))
}

/// Show the image at `index`.
#[instrument(skip(_editor, state))]
pub async fn set_current_image(
    RequireCatalogEditor(_editor): RequireCatalogEditor,
    State(state): State<AppState>,
    Path((id, index)): Path<(ProductId, usize)>,
    Form(form): Form<ReturnTo>,
) -> Result<Redirect> {
    state
        .products()
        .write()
        .await
        .set_current_image(id, index)?;
    Ok(back(form.return_to.as_deref()))
}

/// Remove the image at `index`.
#[instrument(skip(_editor, state))]
pub async fn remove_image(
    RequireCatalogEditor(_editor): RequireCatalogEditor,
    State(state): State<AppState>,
    Path((id, index)): Path<(ProductId, usize)>,
    Form(form): Form<ReturnTo>,
) -> Result<Redirect> {
    state.products().write().await.remove_image(id, index)?;
    Ok(back(form.return_to.as_deref()))
}
