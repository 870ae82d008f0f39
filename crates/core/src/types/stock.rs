//! Stock level classification.

use serde::{Deserialize, Serialize};

/// Stock quantities at or below this count as low stock.
///
/// Fixed by product decision, not configurable.
pub const LOW_STOCK_THRESHOLD: i64 = 5;

/// Presentation classification of remaining inventory quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockStatus {
    OutOfStock,
    LowStock,
    InStock,
}

impl StockStatus {
    /// Classify an on-hand quantity.
    ///
    /// `<= 0` is out of stock, `1..=5` is low stock, everything above is
    /// in stock.
    #[must_use]
    pub const fn classify(on_hand: i64) -> Self {
        if on_hand <= 0 {
            Self::OutOfStock
        } else if on_hand <= LOW_STOCK_THRESHOLD {
            Self::LowStock
        } else {
            Self::InStock
        }
    }

    /// Badge label shown on product cards.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::OutOfStock => "Out of Stock",
            Self::LowStock => "Low Stock",
            Self::InStock => "In Stock",
        }
    }

    /// Whether a product in this state can be added to a cart.
    #[must_use]
    pub const fn is_sellable(self) -> bool {
        !matches!(self, Self::OutOfStock)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_boundaries() {
        assert_eq!(StockStatus::classify(0), StockStatus::OutOfStock);
        assert_eq!(StockStatus::classify(-3), StockStatus::OutOfStock);
        assert_eq!(StockStatus::classify(1), StockStatus::LowStock);
        assert_eq!(StockStatus::classify(5), StockStatus::LowStock);
        assert_eq!(StockStatus::classify(6), StockStatus::InStock);
        assert_eq!(StockStatus::classify(120), StockStatus::InStock);
    }

    #[test]
    fn test_sellable() {
        assert!(!StockStatus::OutOfStock.is_sellable());
        assert!(StockStatus::LowStock.is_sellable());
        assert!(StockStatus::InStock.is_sellable());
    }

    #[test]
    fn test_labels() {
        assert_eq!(StockStatus::classify(0).label(), "Out of Stock");
        assert_eq!(StockStatus::classify(3).label(), "Low Stock");
        assert_eq!(StockStatus::classify(45).label(), "In Stock");
    }
}
