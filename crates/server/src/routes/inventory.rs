//! Inventory route handlers.

use axum::{
    Json,
    extract::{Query, State},
};
use serde::{Deserialize, Serialize};
use shoplytix_core::{
    Barcode, Category, CategoryId, Money, Product, ProductCode, StockStatus, Unit,
};
use tracing::instrument;

use crate::state::AppState;

/// One product as the inventory and store screens render it.
#[derive(Debug, Serialize)]
pub struct ProductView {
    pub prod_code: ProductCode,
    pub barcode: Barcode,
    pub name: String,
    pub description: String,
    pub cost_price: Money,
    pub cost_display: String,
    pub selling_price: Money,
    pub price_display: String,
    pub unit: String,
    pub stock: i64,
    pub stock_status: StockStatus,
    pub stock_label: &'static str,
    pub category_id: CategoryId,
    pub image_url: String,
}

impl From<&Product> for ProductView {
    fn from(product: &Product) -> Self {
        let status = product.stock_status();
        Self {
            prod_code: product.prod_code.clone(),
            barcode: product.barcode.clone(),
            name: product.name.clone(),
            description: product.description.clone(),
            cost_price: product.cost_price,
            cost_display: product.cost_price.to_string(),
            selling_price: product.selling_price,
            price_display: product.selling_price.to_string(),
            unit: product.unit.clone(),
            stock: product.stock,
            stock_status: status,
            stock_label: status.label(),
            category_id: product.category_id.clone(),
            image_url: product.image_url.clone(),
        }
    }
}

/// Inventory filter query parameters.
///
/// The client sends empty strings for "no filter"; both are treated as
/// absent.
#[derive(Debug, Deserialize)]
pub struct InventoryQuery {
    pub category: Option<CategoryId>,
    pub search: Option<String>,
}

/// Inventory listing response.
#[derive(Debug, Serialize)]
pub struct InventoryView {
    pub products: Vec<ProductView>,
    pub total: usize,
}

/// Category listing response.
#[derive(Debug, Serialize)]
pub struct CategoriesView {
    pub categories: Vec<Category>,
}

/// Unit listing response.
#[derive(Debug, Serialize)]
pub struct UnitsView {
    pub units: Vec<Unit>,
}

/// List products, optionally filtered by category and/or search term.
#[instrument(skip(state))]
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<InventoryQuery>,
) -> Json<InventoryView> {
    let category = query.category.filter(|c| !c.as_str().is_empty());
    let search = query
        .search
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty());

    let products: Vec<ProductView> = state
        .catalog()
        .filter(category.as_ref(), search)
        .into_iter()
        .map(ProductView::from)
        .collect();
    let total = products.len();

    Json(InventoryView { products, total })
}

/// List all categories.
#[instrument(skip(state))]
pub async fn categories(State(state): State<AppState>) -> Json<CategoriesView> {
    Json(CategoriesView {
        categories: state.catalog().categories().to_vec(),
    })
}

/// List all units of measure.
#[instrument(skip(state))]
pub async fn units(State(state): State<AppState>) -> Json<UnitsView> {
    Json(UnitsView {
        units: state.catalog().units().to_vec(),
    })
}
