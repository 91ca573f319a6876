use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use rackview_core::{DomainError, DomainResult, Entity, ProductId};

/// Product line item inside a pallet.
///
/// Owned exclusively by its parent pallet; list order is insertion order and
/// stays stable across edits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub sku: String,
    pub quantity: u32,
    pub unit_price: f64,
    pub category: String,
    pub description: String,
    pub batch_number: String,
    pub manufacturing_date: Option<NaiveDate>,
    pub expiry_date: Option<NaiveDate>,
}

impl Product {
    /// Value of this line: quantity × unit price.
    pub fn line_value(&self) -> f64 {
        f64::from(self.quantity) * self.unit_price
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Creation input for a product. The id is assigned by the mutation protocol,
/// never supplied by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDraft {
    pub name: String,
    pub sku: String,
    pub quantity: u32,
    pub unit_price: f64,
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub batch_number: String,
    #[serde(default)]
    pub manufacturing_date: Option<NaiveDate>,
    #[serde(default)]
    pub expiry_date: Option<NaiveDate>,
}

impl ProductDraft {
    /// Check required fields before any mutation is attempted.
    pub fn validate(&self) -> DomainResult<()> {
        if self.name.trim().is_empty() {
            return Err(DomainError::validation("product name cannot be empty"));
        }
        if self.sku.trim().is_empty() {
            return Err(DomainError::validation("SKU cannot be empty"));
        }
        if self.category.trim().is_empty() {
            return Err(DomainError::validation("category cannot be empty"));
        }
        if !self.unit_price.is_finite() || self.unit_price < 0.0 {
            return Err(DomainError::validation(format!(
                "unit price must be a non-negative number, got {}",
                self.unit_price
            )));
        }
        Ok(())
    }

    pub fn into_product(self, id: ProductId) -> Product {
        Product {
            id,
            name: self.name,
            sku: self.sku,
            quantity: self.quantity,
            unit_price: self.unit_price,
            category: self.category,
            description: self.description,
            batch_number: self.batch_number,
            manufacturing_date: self.manufacturing_date,
            expiry_date: self.expiry_date,
        }
    }
}

/// Partial update for a product: `Some` overwrites, `None` preserves.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub sku: Option<String>,
    pub quantity: Option<u32>,
    pub unit_price: Option<f64>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub batch_number: Option<String>,
    pub manufacturing_date: Option<NaiveDate>,
    pub expiry_date: Option<NaiveDate>,
}

impl ProductPatch {
    /// Merge this patch into `product`. The id is never patched.
    pub fn apply(&self, product: &mut Product) {
        if let Some(name) = &self.name {
            product.name = name.clone();
        }
        if let Some(sku) = &self.sku {
            product.sku = sku.clone();
        }
        if let Some(quantity) = self.quantity {
            product.quantity = quantity;
        }
        if let Some(unit_price) = self.unit_price {
            product.unit_price = unit_price;
        }
        if let Some(category) = &self.category {
            product.category = category.clone();
        }
        if let Some(description) = &self.description {
            product.description = description.clone();
        }
        if let Some(batch_number) = &self.batch_number {
            product.batch_number = batch_number.clone();
        }
        if let Some(date) = self.manufacturing_date {
            product.manufacturing_date = Some(date);
        }
        if let Some(date) = self.expiry_date {
            product.expiry_date = Some(date);
        }
    }
}
