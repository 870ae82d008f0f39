//! Core types for Shoplytix.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod catalog;
pub mod code;
pub mod money;
pub mod stock;

pub use catalog::{Category, Product, Unit};
pub use code::*;
pub use money::Money;
pub use stock::StockStatus;
