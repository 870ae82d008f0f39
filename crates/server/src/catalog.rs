//! In-memory catalog store.
//!
//! The catalog owns the products, categories, and units the client browses,
//! plus the synthesized sales figures behind the dashboard. It is read-only
//! after startup and cheaply cloneable via `Arc`.

use std::collections::HashMap;
use std::sync::Arc;

use shoplytix_core::{Category, CategoryId, Product, ProductCode, Unit};

use crate::seed::{self, SalesFigures};

/// Read-only catalog shared across handlers.
#[derive(Clone)]
pub struct CatalogStore {
    inner: Arc<CatalogInner>,
}

struct CatalogInner {
    products: Vec<Product>,
    by_code: HashMap<ProductCode, usize>,
    categories: Vec<Category>,
    units: Vec<Unit>,
    figures: SalesFigures,
}

impl CatalogStore {
    /// Build a catalog from its parts.
    #[must_use]
    pub fn new(
        products: Vec<Product>,
        categories: Vec<Category>,
        units: Vec<Unit>,
        figures: SalesFigures,
    ) -> Self {
        let by_code = products
            .iter()
            .enumerate()
            .map(|(index, product)| (product.prod_code.clone(), index))
            .collect();

        Self {
            inner: Arc::new(CatalogInner {
                products,
                by_code,
                categories,
                units,
                figures,
            }),
        }
    }

    /// Build the demo catalog used until a real ingest source exists.
    #[must_use]
    pub fn demo() -> Self {
        let mut rng = rand::rng();
        Self::new(
            seed::demo_products(),
            seed::demo_categories(),
            seed::demo_units(),
            seed::demo_sales_figures(&mut rng),
        )
    }

    /// Look up one product by code.
    #[must_use]
    pub fn product(&self, code: &ProductCode) -> Option<&Product> {
        self.inner
            .by_code
            .get(code)
            .and_then(|&index| self.inner.products.get(index))
    }

    /// All products in catalog order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.inner.products
    }

    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.inner.categories
    }

    #[must_use]
    pub fn units(&self) -> &[Unit] {
        &self.inner.units
    }

    #[must_use]
    pub fn figures(&self) -> &SalesFigures {
        &self.inner.figures
    }

    /// Filter products by category and/or search term.
    ///
    /// The search term matches case-insensitively against the product name,
    /// or as a substring of the barcode (the client's scanner field feeds
    /// the same box).
    #[must_use]
    pub fn filter(&self, category: Option<&CategoryId>, search: Option<&str>) -> Vec<&Product> {
        let needle = search.map(str::to_lowercase);
        self.inner
            .products
            .iter()
            .filter(|product| category.is_none_or(|wanted| product.category_id == *wanted))
            .filter(|product| {
                needle.as_deref().is_none_or(|term| {
                    product.name.to_lowercase().contains(term)
                        || product.barcode.as_str().contains(term)
                })
            })
            .collect()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn catalog() -> CatalogStore {
        CatalogStore::demo()
    }

    #[test]
    fn test_lookup_by_code() {
        let catalog = catalog();
        let cola = catalog.product(&ProductCode::new("bev001")).unwrap();
        assert_eq!(cola.name, "Cola 1.5L Bottle");
        assert!(catalog.product(&ProductCode::new("nope")).is_none());
    }

    #[test]
    fn test_filter_by_category() {
        let catalog = catalog();
        let beverages = catalog.filter(Some(&CategoryId::new("cat1")), None);
        assert_eq!(beverages.len(), 2);
        assert!(
            beverages
                .iter()
                .all(|p| p.category_id == CategoryId::new("cat1"))
        );
    }

    #[test]
    fn test_filter_by_search_is_case_insensitive() {
        let catalog = catalog();
        let hits = catalog.filter(None, Some("cOLa"));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].prod_code, ProductCode::new("bev001"));
    }

    #[test]
    fn test_filter_matches_barcode() {
        let catalog = catalog();
        let hits = catalog.filter(None, Some("8882345678"));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].prod_code, ProductCode::new("can001"));
    }

    #[test]
    fn test_filter_combines_category_and_search() {
        let catalog = catalog();
        // "beef" appears in both Canned Goods (Corned Beef) and Fresh Meat
        let all_beef = catalog.filter(None, Some("beef"));
        assert_eq!(all_beef.len(), 2);

        let canned_beef = catalog.filter(Some(&CategoryId::new("cat2")), Some("beef"));
        assert_eq!(canned_beef.len(), 1);
        assert_eq!(canned_beef[0].prod_code, ProductCode::new("can002"));
    }

    #[test]
    fn test_filter_without_criteria_returns_everything() {
        let catalog = catalog();
        assert_eq!(catalog.filter(None, None).len(), catalog.products().len());
    }
}
