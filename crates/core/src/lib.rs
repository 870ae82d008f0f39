//! Shoplytix Core - Shared types library.
//!
//! This crate provides common types used across all Shoplytix components:
//! - `server` - JSON API backend for the mobile storefront client
//! - `integration-tests` - End-to-end tests against the assembled router
//!
//! # Architecture
//!
//! The core crate contains only types and pure logic - no I/O, no HTTP
//! clients, no async. This keeps it lightweight and allows it to be used
//! anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype codes, money, stock status, and catalog entities
//! - [`cart`] - The point-of-sale cart state container
//! - [`format`] - Peso and percentage display formatting

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod format;
pub mod types;

pub use cart::{Cart, CartLine, CartSummary};
pub use types::*;
