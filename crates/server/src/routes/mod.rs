//! HTTP route handlers for the API.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                 - Liveness check
//!
//! # Auth (proxied to the external login endpoint)
//! POST /api/auth/login         - Login action
//! POST /api/auth/logout        - Logout action (drops the session)
//!
//! # Dashboard
//! GET  /api/dashboard          - Sales cards, chart series, analysis rows
//!
//! # Inventory
//! GET  /api/inventory          - Product listing (?category=&search=)
//! GET  /api/categories         - Category list for the filter pills
//! GET  /api/units              - Units of measure
//!
//! # Cart (session-owned)
//! GET  /api/cart               - Lines and summary
//! POST /api/cart/add           - Add one unit of a product
//! POST /api/cart/update        - Set a line quantity (0 removes)
//! POST /api/cart/remove        - Remove a line (idempotent)
//! POST /api/cart/checkout      - Final summary, then clears the cart
//! ```

pub mod auth;
pub mod cart;
pub mod dashboard;
pub mod inventory;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the auth routes router.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(auth::login))
        .route("/logout", post(auth::logout))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add", post(cart::add))
        .route("/update", post(cart::update))
        .route("/remove", post(cart::remove))
        .route("/checkout", post(cart::checkout))
}

/// Create the full API router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .nest("/api/auth", auth_routes())
        .nest("/api/cart", cart_routes())
        .route("/api/dashboard", get(dashboard::show))
        .route("/api/inventory", get(inventory::list))
        .route("/api/categories", get(inventory::categories))
        .route("/api/units", get(inventory::units))
}
