//! Product domain types and inline field editing.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use catalog_admin_core::{Language, ProductId};

/// Category assigned to products created without one.
pub const UNCATEGORIZED: &str = "Без категории";

/// Additional category marking products whose price is given on request.
pub const PRICE_REQUEST_CATEGORY: &str = "Запрос цены";

/// Image used for new products until real photos are uploaded.
pub const DEFAULT_PRODUCT_IMAGE: &str = "/static/img/placeholder.svg";

/// A catalog product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name_en: String,
    #[serde(default)]
    pub name_cn: String,
    #[serde(default)]
    pub name_ru: String,
    pub price: Decimal,
    #[serde(default)]
    pub sku: String,
    #[serde(default)]
    pub quantity: u32,
    #[serde(default)]
    pub brand: String,
    #[serde(default)]
    pub web_link: String,
    /// Primary category path.
    pub category: String,
    #[serde(default)]
    pub additional_categories: Vec<String>,
    #[serde(default)]
    pub images: Vec<String>,
    /// Index into `images` of the photo currently shown.
    #[serde(default)]
    pub current_image_index: usize,
    /// Russian description.
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub description_en: String,
    #[serde(default)]
    pub description_cn: String,
    /// Customs commodity code.
    #[serde(default)]
    pub tnved: String,
    #[serde(default)]
    pub material: String,
    #[serde(default)]
    pub purpose: String,
    #[serde(default)]
    pub for_whom: String,
}

impl Product {
    /// Name in the given language, falling back to the English name.
    #[must_use]
    pub fn name(&self, language: Language) -> &str {
        let localized = match language {
            Language::Ru => &self.name_ru,
            Language::En => &self.name_en,
            Language::Cn => &self.name_cn,
        };
        if localized.trim().is_empty() {
            &self.name_en
        } else {
            localized
        }
    }

    /// Description in the given language (may be empty).
    #[must_use]
    pub fn description(&self, language: Language) -> &str {
        match language {
            Language::Ru => &self.description,
            Language::En => &self.description_en,
            Language::Cn => &self.description_cn,
        }
    }

    /// URL of the image under the cursor.
    #[must_use]
    pub fn current_image(&self) -> Option<&str> {
        self.images
            .get(self.current_image_index)
            .or_else(|| self.images.first())
            .map(String::as_str)
    }

    /// Primary category followed by the additional ones.
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.category.as_str())
            .chain(self.additional_categories.iter().map(String::as_str))
    }

    /// Whether the price has been replaced by a "price on request" marker.
    #[must_use]
    pub fn is_price_on_request(&self) -> bool {
        self.price.is_zero()
            && self
                .additional_categories
                .iter()
                .any(|c| c == PRICE_REQUEST_CATEGORY)
    }

    /// Move the image cursor one step, wrapping at both ends.
    pub fn navigate_image(&mut self, direction: ImageDirection) {
        let count = self.images.len();
        if count == 0 {
            self.current_image_index = 0;
            return;
        }
        let current = self.current_image_index.min(count - 1);
        self.current_image_index = match direction {
            ImageDirection::Next => (current + 1) % count,
            ImageDirection::Prev => (current + count - 1) % count,
        };
    }

    /// Remove the image at `index`, keeping the cursor on a valid image.
    ///
    /// Returns `false` if the index is out of range.
    pub fn remove_image(&mut self, index: usize) -> bool {
        if index >= self.images.len() {
            return false;
        }
        self.images.remove(index);
        if self.current_image_index > index
            || self.current_image_index >= self.images.len()
        {
            self.current_image_index = self.current_image_index.saturating_sub(1);
        }
        true
    }

    /// Switch the price to "on request": zero the price and tag the product.
    pub fn request_price(&mut self) {
        self.price = Decimal::ZERO;
        if !self
            .additional_categories
            .iter()
            .any(|c| c == PRICE_REQUEST_CATEGORY)
        {
            self.additional_categories
                .push(PRICE_REQUEST_CATEGORY.to_string());
        }
    }
}

/// Direction for the image carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageDirection {
    Prev,
    Next,
}

/// A product field that can be edited inline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductField {
    NameEn,
    NameCn,
    NameRu,
    Price,
    Sku,
    Quantity,
    Brand,
    WebLink,
    Category,
    Description,
    DescriptionEn,
    DescriptionCn,
    Tnved,
    Material,
    Purpose,
    ForWhom,
}

/// Error applying an inline edit.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("unknown product field: {0}")]
    UnknownField(String),
    #[error("{field} must be a non-negative number, got {value:?}")]
    NotANumber { field: &'static str, value: String },
    #[error("{0} cannot be empty")]
    Empty(&'static str),
}

impl ProductField {
    /// Form key of the field.
    #[must_use]
    pub const fn key(&self) -> &'static str {
        match self {
            Self::NameEn => "name_en",
            Self::NameCn => "name_cn",
            Self::NameRu => "name_ru",
            Self::Price => "price",
            Self::Sku => "sku",
            Self::Quantity => "quantity",
            Self::Brand => "brand",
            Self::WebLink => "web_link",
            Self::Category => "category",
            Self::Description => "description",
            Self::DescriptionEn => "description_en",
            Self::DescriptionCn => "description_cn",
            Self::Tnved => "tnved",
            Self::Material => "material",
            Self::Purpose => "purpose",
            Self::ForWhom => "for_whom",
        }
    }

    /// Every field, in form order.
    pub const ALL: [Self; 16] = [
        Self::NameEn,
        Self::NameCn,
        Self::NameRu,
        Self::Price,
        Self::Sku,
        Self::Quantity,
        Self::Brand,
        Self::WebLink,
        Self::Category,
        Self::Description,
        Self::DescriptionEn,
        Self::DescriptionCn,
        Self::Tnved,
        Self::Material,
        Self::Purpose,
        Self::ForWhom,
    ];

    /// Apply a raw form value to the product.
    ///
    /// # Errors
    ///
    /// Returns `FieldError` if a numeric field does not parse, or if the
    /// English name or primary category would become empty.
    pub fn apply(self, product: &mut Product, raw: &str) -> Result<(), FieldError> {
        let value = raw.trim();
        match self {
            Self::Price => {
                product.price = value
                    .replace(',', ".")
                    .parse::<Decimal>()
                    .ok()
                    .filter(|p| !p.is_sign_negative())
                    .ok_or_else(|| FieldError::NotANumber {
                        field: self.key(),
                        value: value.to_string(),
                    })?;
            }
            Self::Quantity => {
                product.quantity = value.parse().map_err(|_| FieldError::NotANumber {
                    field: self.key(),
                    value: value.to_string(),
                })?;
            }
            Self::NameEn | Self::Category if value.is_empty() => {
                return Err(FieldError::Empty(self.key()));
            }
            Self::NameEn => product.name_en = value.to_string(),
            Self::NameCn => product.name_cn = value.to_string(),
            Self::NameRu => product.name_ru = value.to_string(),
            Self::Sku => product.sku = value.to_string(),
            Self::Brand => product.brand = value.to_string(),
            Self::WebLink => product.web_link = value.to_string(),
            Self::Category => product.category = value.to_string(),
            Self::Description => product.description = raw.to_string(),
            Self::DescriptionEn => product.description_en = raw.to_string(),
            Self::DescriptionCn => product.description_cn = raw.to_string(),
            Self::Tnved => product.tnved = value.to_string(),
            Self::Material => product.material = value.to_string(),
            Self::Purpose => product.purpose = value.to_string(),
            Self::ForWhom => product.for_whom = value.to_string(),
        }
        Ok(())
    }
}

impl std::str::FromStr for ProductField {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.key() == s)
            .ok_or_else(|| FieldError::UnknownField(s.to_string()))
    }
}

/// Data submitted by the "add product" form.
///
/// Blank optional fields are filled with defaults when the product is built.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NewProduct {
    pub name_en: String,
    pub name_cn: String,
    pub name_ru: String,
    pub price: String,
    pub sku: String,
    pub quantity: String,
    pub brand: String,
    pub web_link: String,
    pub category: String,
    pub description: String,
    pub description_en: String,
    pub description_cn: String,
    pub tnved: String,
    pub material: String,
    pub purpose: String,
    pub for_whom: String,
}

/// Error building a product from the "add product" form.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NewProductError {
    #[error("English name is required")]
    MissingName,
    #[error("price must be greater than zero")]
    InvalidPrice,
    #[error("quantity must be a non-negative whole number")]
    InvalidQuantity,
}

impl NewProduct {
    /// Build a product with the given ID.
    ///
    /// `now_millis` seeds the generated SKU when none was entered.
    ///
    /// # Errors
    ///
    /// Returns `NewProductError` if the English name is blank, the price is
    /// not a positive number, or the quantity does not parse.
    pub fn build(self, id: ProductId, now_millis: i64) -> Result<Product, NewProductError> {
        let name_en = self.name_en.trim().to_string();
        if name_en.is_empty() {
            return Err(NewProductError::MissingName);
        }
        let price = self
            .price
            .trim()
            .replace(',', ".")
            .parse::<Decimal>()
            .ok()
            .filter(|p| p.is_sign_positive() && !p.is_zero())
            .ok_or(NewProductError::InvalidPrice)?;
        let quantity = match self.quantity.trim() {
            "" => 0,
            q => q.parse().map_err(|_| NewProductError::InvalidQuantity)?,
        };

        Ok(Product {
            id,
            name_ru: or_default(self.name_ru, &name_en),
            name_cn: self.name_cn.trim().to_string(),
            price,
            sku: or_default(self.sku, &format!("SKU-{now_millis}")),
            quantity,
            brand: self.brand.trim().to_string(),
            web_link: self.web_link.trim().to_string(),
            category: or_default(self.category, UNCATEGORIZED),
            additional_categories: Vec::new(),
            images: vec![DEFAULT_PRODUCT_IMAGE.to_string()],
            current_image_index: 0,
            description: self.description,
            description_en: self.description_en,
            description_cn: self.description_cn,
            tnved: self.tnved.trim().to_string(),
            material: self.material.trim().to_string(),
            purpose: self.purpose.trim().to_string(),
            for_whom: self.for_whom.trim().to_string(),
            name_en,
        })
    }
}

fn or_default(value: String, default: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        default.to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn product_with_images(count: usize) -> Product {
        NewProduct {
            name_en: "Phone case".to_string(),
            price: "10".to_string(),
            ..NewProduct::default()
        }
        .build(ProductId::new(1), 0)
        .map(|mut p| {
            p.images = (0..count).map(|i| format!("/img/{i}.jpg")).collect();
            p
        })
        .unwrap()
    }

    #[test]
    fn test_build_fills_defaults() {
        let product = NewProduct {
            name_en: "  Phone case ".to_string(),
            price: "12,50".to_string(),
            ..NewProduct::default()
        }
        .build(ProductId::new(7), 1_700_000_000_000)
        .unwrap();

        assert_eq!(product.name_en, "Phone case");
        assert_eq!(product.name_ru, "Phone case");
        assert_eq!(product.sku, "SKU-1700000000000");
        assert_eq!(product.category, UNCATEGORIZED);
        assert_eq!(product.price, Decimal::new(1250, 2));
        assert_eq!(product.images, vec![DEFAULT_PRODUCT_IMAGE.to_string()]);
    }

    #[test]
    fn test_build_requires_name_and_positive_price() {
        let missing_name = NewProduct {
            price: "5".to_string(),
            ..NewProduct::default()
        };
        assert_eq!(
            missing_name.build(ProductId::new(1), 0),
            Err(NewProductError::MissingName)
        );

        let zero_price = NewProduct {
            name_en: "Cable".to_string(),
            price: "0".to_string(),
            ..NewProduct::default()
        };
        assert_eq!(
            zero_price.build(ProductId::new(1), 0),
            Err(NewProductError::InvalidPrice)
        );
    }

    #[test]
    fn test_navigate_wraps() {
        let mut product = product_with_images(3);
        product.navigate_image(ImageDirection::Prev);
        assert_eq!(product.current_image_index, 2);
        product.navigate_image(ImageDirection::Next);
        assert_eq!(product.current_image_index, 0);
    }

    #[test]
    fn test_navigate_without_images() {
        let mut product = product_with_images(0);
        product.navigate_image(ImageDirection::Next);
        assert_eq!(product.current_image_index, 0);
        assert_eq!(product.current_image(), None);
    }

    #[test]
    fn test_remove_image_keeps_cursor_valid() {
        let mut product = product_with_images(3);
        product.current_image_index = 2;
        assert!(product.remove_image(2));
        assert_eq!(product.current_image_index, 1);

        product.current_image_index = 1;
        assert!(product.remove_image(0));
        assert_eq!(product.current_image_index, 0);
        assert_eq!(product.current_image(), Some("/img/1.jpg"));

        assert!(!product.remove_image(5));
    }

    #[test]
    fn test_request_price_is_idempotent() {
        let mut product = product_with_images(1);
        product.request_price();
        product.request_price();
        assert!(product.price.is_zero());
        assert_eq!(
            product.additional_categories,
            vec![PRICE_REQUEST_CATEGORY.to_string()]
        );
        assert!(product.is_price_on_request());
    }

    #[test]
    fn test_apply_field() {
        let mut product = product_with_images(1);
        "quantity".parse::<ProductField>().unwrap().apply(&mut product, " 12 ").unwrap();
        assert_eq!(product.quantity, 12);

        ProductField::Price.apply(&mut product, "99.90").unwrap();
        assert_eq!(product.price, Decimal::new(9990, 2));

        assert!(ProductField::Price.apply(&mut product, "-1").is_err());
        assert!(ProductField::Quantity.apply(&mut product, "many").is_err());
        assert_eq!(
            ProductField::Category.apply(&mut product, "  "),
            Err(FieldError::Empty("category"))
        );
        assert!("colour".parse::<ProductField>().is_err());
    }

    #[test]
    fn test_name_falls_back_to_english() {
        let product = product_with_images(0);
        assert_eq!(product.name(Language::Cn), "Phone case");
    }
}
