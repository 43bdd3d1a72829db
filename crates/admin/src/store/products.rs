//! Product store.

use std::collections::BTreeSet;

use catalog_admin_core::ProductId;

use super::StoreError;
use crate::models::{ImageDirection, NewProduct, Product, ProductField};

/// All products in insertion order.
#[derive(Debug, Default)]
pub struct ProductStore {
    products: Vec<Product>,
}

impl ProductStore {
    #[must_use]
    pub const fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    #[must_use]
    pub fn list(&self) -> &[Product] {
        &self.products
    }

    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    fn get_mut(&mut self, id: ProductId) -> Result<&mut Product, StoreError> {
        self.products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| StoreError::not_found("product", id))
    }

    fn next_id(&self) -> ProductId {
        self.products
            .iter()
            .map(|p| p.id)
            .max()
            .map_or(ProductId::new(1), |id| id.next())
    }

    /// Add a product from the "add product" form.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Invalid` if the name or price are missing or
    /// malformed.
    pub fn create(&mut self, new_product: NewProduct, now_millis: i64) -> Result<&Product, StoreError> {
        let id = self.next_id();
        let product = new_product
            .build(id, now_millis)
            .map_err(|e| StoreError::invalid("product", e))?;

        tracing::info!(product_id = %id, category = %product.category, "Product created");
        self.products.push(product);
        self.get(id)
            .ok_or_else(|| StoreError::not_found("product", id))
    }

    /// Apply an inline edit to one field.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` for an unknown product and
    /// `StoreError::Invalid` if the value is rejected.
    pub fn edit_field(
        &mut self,
        id: ProductId,
        field: ProductField,
        value: &str,
    ) -> Result<&Product, StoreError> {
        let product = self.get_mut(id)?;
        field
            .apply(product, value)
            .map_err(|e| StoreError::invalid(field.key(), e))?;
        tracing::info!(product_id = %id, field = field.key(), "Product field edited");
        Ok(&*product)
    }

    /// Replace the additional categories, dropping blanks and duplicates
    /// while keeping the submitted order.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` for an unknown product.
    pub fn set_additional_categories(
        &mut self,
        id: ProductId,
        categories: Vec<String>,
    ) -> Result<&Product, StoreError> {
        let product = self.get_mut(id)?;
        let mut seen = BTreeSet::new();
        product.additional_categories = categories
            .into_iter()
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty() && seen.insert(c.clone()))
            .collect();
        Ok(&*product)
    }

    /// Mark a product as "price on request".
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` for an unknown product.
    pub fn request_price(&mut self, id: ProductId) -> Result<&Product, StoreError> {
        let product = self.get_mut(id)?;
        product.request_price();
        tracing::info!(product_id = %id, "Price set to on request");
        Ok(&*product)
    }

    /// Move the image cursor.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` for an unknown product.
    pub fn navigate_image(
        &mut self,
        id: ProductId,
        direction: ImageDirection,
    ) -> Result<&Product, StoreError> {
        let product = self.get_mut(id)?;
        product.navigate_image(direction);
        Ok(&*product)
    }

    /// Append an image by URL and show it.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` for an unknown product and
    /// `StoreError::Invalid` for a blank URL.
    pub fn add_image(&mut self, id: ProductId, url: &str) -> Result<&Product, StoreError> {
        let url = url.trim();
        if url.is_empty() {
            return Err(StoreError::invalid("image_url", "cannot be blank"));
        }
        let product = self.get_mut(id)?;
        product.images.push(url.to_string());
        product.current_image_index = product.images.len() - 1;
        Ok(&*product)
    }

    /// Remove the image at `index`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` for an unknown product or image index.
    pub fn remove_image(&mut self, id: ProductId, index: usize) -> Result<&Product, StoreError> {
        let product = self.get_mut(id)?;
        if !product.remove_image(index) {
            return Err(StoreError::not_found("image", index));
        }
        Ok(&*product)
    }

    /// Show the image at `index`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` for an unknown product or image index.
    pub fn set_current_image(
        &mut self,
        id: ProductId,
        index: usize,
    ) -> Result<&Product, StoreError> {
        let product = self.get_mut(id)?;
        if index >= product.images.len() {
            return Err(StoreError::not_found("image", index));
        }
        product.current_image_index = index;
        Ok(&*product)
    }

    /// Distinct, non-blank primary categories in first-seen order.
    ///
    /// Offered as suggestions in the "add product" form.
    #[must_use]
    pub fn all_categories(&self) -> Vec<&str> {
        let mut seen = BTreeSet::new();
        self.products
            .iter()
            .map(|p| p.category.trim())
            .filter(|c| !c.is_empty() && seen.insert(*c))
            .collect()
    }
}
