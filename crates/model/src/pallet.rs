use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use rackview_core::{DomainError, DomainResult, Entity, PalletId, ProductId};

use crate::product::{Product, ProductPatch};
use crate::status::PalletStatus;

/// Pallet dimensions in centimeters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub length: f64,
    pub width: f64,
    pub height: f64,
}

impl Dimensions {
    /// Volume in cubic meters.
    pub fn volume_m3(&self) -> f64 {
        self.length * self.width * self.height / 1_000_000.0
    }
}

impl Default for Dimensions {
    /// Canonical EUR-pallet-ish default: 120 × 100 × 80 cm.
    fn default() -> Self {
        Self {
            length: 120.0,
            width: 100.0,
            height: 80.0,
        }
    }
}

/// Physical unit stored in exactly one slot.
///
/// A pallet exists only while referenced by its slot; clearing that reference
/// is the only destructor. Totals, volume and the display color are derived on
/// demand, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pallet {
    pub id: PalletId,
    pub product_code: String,
    pub quantity: u32,
    pub entry_date: NaiveDate,
    pub expiry_date: Option<NaiveDate>,
    pub status: PalletStatus,
    pub weight: f64,
    pub dimensions: Dimensions,
    pub supplier: String,
    pub notes: String,
    pub products: Vec<Product>,
}

impl Pallet {
    /// Display color, keyed by status.
    pub fn color(&self) -> &'static str {
        self.status.color()
    }

    /// Total quantity across all product lines.
    pub fn total_quantity(&self) -> u32 {
        self.products.iter().map(|p| p.quantity).sum()
    }

    /// Total value across all product lines (Σ quantity × unit price).
    pub fn total_value(&self) -> f64 {
        self.products.iter().map(Product::line_value).sum()
    }

    pub fn volume_m3(&self) -> f64 {
        self.dimensions.volume_m3()
    }

    /// Distinct product categories, in first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for p in &self.products {
            if !seen.contains(&p.category.as_str()) {
                seen.push(p.category.as_str());
            }
        }
        seen
    }

    /// Distinct batch numbers, in first-seen order. Blank batches are skipped.
    pub fn batch_numbers(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for p in &self.products {
            let batch = p.batch_number.as_str();
            if !batch.is_empty() && !seen.contains(&batch) {
                seen.push(batch);
            }
        }
        seen
    }

    pub fn product(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// Append a product line (insertion order is preserved from here on).
    pub fn add_product(&mut self, product: Product) {
        self.products.push(product);
    }

    /// Merge a patch into the product with the given id, in place.
    pub fn update_product(&mut self, id: &ProductId, patch: &ProductPatch) -> DomainResult<()> {
        let product = self
            .products
            .iter_mut()
            .find(|p| &p.id == id)
            .ok_or_else(|| DomainError::not_found(format!("product {id}")))?;
        patch.apply(product);
        Ok(())
    }

    /// Remove the product with the given id. Returns whether anything was
    /// removed; a missing id is a benign no-op.
    pub fn remove_product(&mut self, id: &ProductId) -> bool {
        let before = self.products.len();
        self.products.retain(|p| &p.id != id);
        self.products.len() != before
    }
}

impl Entity for Pallet {
    type Id = PalletId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Creation input for a pallet. The id is assigned by the mutation protocol;
/// unset fields take canonical defaults (no products, zero weight, default
/// dimensions, blank supplier/notes).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PalletDraft {
    pub product_code: String,
    pub quantity: u32,
    pub entry_date: NaiveDate,
    #[serde(default)]
    pub expiry_date: Option<NaiveDate>,
    pub status: PalletStatus,
    #[serde(default)]
    pub weight: Option<f64>,
    #[serde(default)]
    pub dimensions: Option<Dimensions>,
    #[serde(default)]
    pub supplier: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl PalletDraft {
    /// Check required fields before any mutation is attempted.
    pub fn validate(&self) -> DomainResult<()> {
        if self.product_code.trim().is_empty() {
            return Err(DomainError::validation("product code cannot be empty"));
        }
        if let Some(weight) = self.weight {
            if !weight.is_finite() || weight < 0.0 {
                return Err(DomainError::validation(format!(
                    "weight must be a non-negative number, got {weight}"
                )));
            }
        }
        Ok(())
    }

    pub fn into_pallet(self, id: PalletId) -> Pallet {
        Pallet {
            id,
            product_code: self.product_code,
            quantity: self.quantity,
            entry_date: self.entry_date,
            expiry_date: self.expiry_date,
            status: self.status,
            weight: self.weight.unwrap_or(0.0),
            dimensions: self.dimensions.unwrap_or_default(),
            supplier: self.supplier.unwrap_or_default(),
            notes: self.notes.unwrap_or_default(),
            products: Vec::new(),
        }
    }
}

/// Partial update for a pallet: `Some` overwrites, `None` preserves.
///
/// The product list is replaced only when `products` is supplied; every other
/// field merge leaves it untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PalletPatch {
    pub product_code: Option<String>,
    pub quantity: Option<u32>,
    pub entry_date: Option<NaiveDate>,
    pub expiry_date: Option<NaiveDate>,
    pub status: Option<PalletStatus>,
    pub weight: Option<f64>,
    pub dimensions: Option<Dimensions>,
    pub supplier: Option<String>,
    pub notes: Option<String>,
    pub products: Option<Vec<Product>>,
}

impl PalletPatch {
    /// Merge this patch into `pallet`. The id is never patched.
    pub fn apply(&self, pallet: &mut Pallet) {
        if let Some(product_code) = &self.product_code {
            pallet.product_code = product_code.clone();
        }
        if let Some(quantity) = self.quantity {
            pallet.quantity = quantity;
        }
        if let Some(entry_date) = self.entry_date {
            pallet.entry_date = entry_date;
        }
        if let Some(expiry_date) = self.expiry_date {
            pallet.expiry_date = Some(expiry_date);
        }
        if let Some(status) = self.status {
            pallet.status = status;
        }
        if let Some(weight) = self.weight {
            pallet.weight = weight;
        }
        if let Some(dimensions) = self.dimensions {
            pallet.dimensions = dimensions;
        }
        if let Some(supplier) = &self.supplier {
            pallet.supplier = supplier.clone();
        }
        if let Some(notes) = &self.notes {
            pallet.notes = notes.clone();
        }
        if let Some(products) = &self.products {
            pallet.products = products.clone();
        }
    }
}
