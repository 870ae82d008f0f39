//! Catalog entities: products, categories, and units.

use serde::{Deserialize, Serialize};

use super::code::{Barcode, CategoryId, ProductCode, UnitId};
use super::money::Money;
use super::stock::StockStatus;

/// A sellable product, owned by the catalog.
///
/// Immutable from the cart's perspective: cart operations reference a
/// product but never change it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique product code (e.g., `"bev001"`).
    pub prod_code: ProductCode,
    pub barcode: Barcode,
    pub name: String,
    pub description: String,
    /// What the store pays per unit.
    pub cost_price: Money,
    /// What the customer pays per unit.
    pub selling_price: Money,
    /// Unit label (e.g., `"pcs"`, `"kg"`).
    pub unit: String,
    /// On-hand quantity. Non-negative on ingest.
    pub stock: i64,
    pub category_id: CategoryId,
    pub image_url: String,
}

impl Product {
    /// Classify this product's current stock level.
    #[must_use]
    pub const fn stock_status(&self) -> StockStatus {
        StockStatus::classify(self.stock)
    }
}

/// A product category, used only for filtering. No hierarchy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub label: String,
}

/// A unit of measure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unit {
    pub id: UnitId,
    pub label: String,
}
