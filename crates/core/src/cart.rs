//! The point-of-sale cart state container.
//!
//! A [`Cart`] is an explicit state object owned by a single controller
//! (one per client session on the server). All operations are total:
//! updating or removing an unknown product is a silent no-op, and the
//! summary of an empty cart is zeros. Nothing here touches I/O.

use serde::{Deserialize, Serialize};

use crate::types::{Money, Product, ProductCode};

/// One product line in the pending purchase.
///
/// Invariant: `amount == selling_price × quantity`, upheld by recomputing
/// the amount on every mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub product: Product,
    pub quantity: u32,
    pub amount: Money,
}

/// Aggregate totals derived from all cart lines.
///
/// Never stored independently of the lines; recomputed on every read so it
/// cannot drift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CartSummary {
    pub total_quantity: u32,
    pub total_amount: Money,
}

/// The set of products currently selected for purchase.
///
/// Lines keep insertion order. The cart has no cross-session lifetime: it
/// lives and dies with whatever owns it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Add one unit of `product` to the cart.
    ///
    /// An existing line gains one unit; otherwise a new line is appended
    /// with quantity 1. Stock gating is the caller's responsibility.
    pub fn add(&mut self, product: &Product) {
        if let Some(line) = self.line_mut(&product.prod_code) {
            line.quantity += 1;
            line.amount = line.product.selling_price.times(line.quantity);
            return;
        }
        self.lines.push(CartLine {
            quantity: 1,
            amount: product.selling_price,
            product: product.clone(),
        });
    }

    /// Set the quantity of an existing line, recomputing its amount.
    ///
    /// A quantity of zero removes the line. Unknown product codes are a
    /// silent no-op.
    pub fn set_quantity(&mut self, code: &ProductCode, quantity: u32) {
        if quantity == 0 {
            self.remove(code);
            return;
        }
        if let Some(line) = self.line_mut(code) {
            line.quantity = quantity;
            line.amount = line.product.selling_price.times(quantity);
        }
    }

    /// Remove the line for `code` if present. Idempotent.
    pub fn remove(&mut self, code: &ProductCode) {
        self.lines.retain(|line| line.product.prod_code != *code);
    }

    /// Drop all lines.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Current lines in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Quantity currently carted for `code`, zero if absent.
    #[must_use]
    pub fn quantity_of(&self, code: &ProductCode) -> u32 {
        self.line(code).map_or(0, |line| line.quantity)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Compute the aggregate totals over all lines.
    ///
    /// Pure and safe to call at any time; an empty cart yields zeros.
    #[must_use]
    pub fn summary(&self) -> CartSummary {
        CartSummary {
            total_quantity: self.lines.iter().map(|line| line.quantity).sum(),
            total_amount: self.lines.iter().map(|line| line.amount).sum(),
        }
    }

    fn line(&self, code: &ProductCode) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.product.prod_code == *code)
    }

    fn line_mut(&mut self, code: &ProductCode) -> Option<&mut CartLine> {
        self.lines
            .iter_mut()
            .find(|line| line.product.prod_code == *code)
    }
}
