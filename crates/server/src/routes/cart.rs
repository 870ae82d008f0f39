//! Cart route handlers.
//!
//! Each session owns exactly one [`Cart`], serialized into the session
//! store between requests. Cart operations themselves are total; the only
//! route-level gates are the catalog lookup and the out-of-stock check the
//! mobile client used to enforce in its UI.

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use shoplytix_core::{Cart, CartSummary, Money, ProductCode};
use tower_sessions::Session;
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::middleware::session_keys;
use crate::state::AppState;

// =============================================================================
// Views
// =============================================================================

/// One cart line as the client renders it.
#[derive(Debug, Serialize)]
pub struct CartLineView {
    pub prod_code: ProductCode,
    pub name: String,
    pub unit_price: Money,
    pub unit_price_display: String,
    pub quantity: u32,
    pub amount: Money,
    pub amount_display: String,
}

/// Aggregate totals as the client renders them.
#[derive(Debug, Serialize)]
pub struct CartSummaryView {
    pub total_quantity: u32,
    pub total_amount: Money,
    pub total_display: String,
}

/// Full cart display data.
#[derive(Debug, Serialize)]
pub struct CartView {
    pub lines: Vec<CartLineView>,
    pub summary: CartSummaryView,
}

impl From<CartSummary> for CartSummaryView {
    fn from(summary: CartSummary) -> Self {
        Self {
            total_quantity: summary.total_quantity,
            total_amount: summary.total_amount,
            total_display: summary.total_amount.to_string(),
        }
    }
}

impl From<&Cart> for CartView {
    fn from(cart: &Cart) -> Self {
        Self {
            lines: cart
                .lines()
                .iter()
                .map(|line| CartLineView {
                    prod_code: line.product.prod_code.clone(),
                    name: line.product.name.clone(),
                    unit_price: line.product.selling_price,
                    unit_price_display: line.product.selling_price.to_string(),
                    quantity: line.quantity,
                    amount: line.amount,
                    amount_display: line.amount.to_string(),
                })
                .collect(),
            summary: cart.summary().into(),
        }
    }
}

// =============================================================================
// Request Bodies
// =============================================================================

/// Add-to-cart request body.
#[derive(Debug, Deserialize)]
pub struct AddRequest {
    pub prod_code: ProductCode,
}

/// Update-quantity request body.
#[derive(Debug, Deserialize)]
pub struct UpdateRequest {
    pub prod_code: ProductCode,
    pub quantity: u32,
}

/// Remove-line request body.
#[derive(Debug, Deserialize)]
pub struct RemoveRequest {
    pub prod_code: ProductCode,
}

// =============================================================================
// Session Helpers
// =============================================================================

/// Get this session's cart, starting a fresh one if none exists yet.
async fn load_cart(session: &Session) -> Result<Cart> {
    Ok(session
        .get::<Cart>(session_keys::CART)
        .await?
        .unwrap_or_default())
}

/// Write the cart back into the session.
async fn save_cart(session: &Session, cart: &Cart) -> Result<()> {
    session.insert(session_keys::CART, cart).await?;
    Ok(())
}

// =============================================================================
// Handlers
// =============================================================================

/// Display the cart.
#[instrument(skip(session))]
pub async fn show(session: Session) -> Result<Json<CartView>> {
    let cart = load_cart(&session).await?;
    Ok(Json(CartView::from(&cart)))
}

/// Add one unit of a product to the cart.
///
/// Unknown products are 404; out-of-stock products are 409 (the gate the
/// client UI applied by disabling the card).
#[instrument(skip(state, session))]
pub async fn add(
    State(state): State<AppState>,
    session: Session,
    Json(request): Json<AddRequest>,
) -> Result<Json<CartView>> {
    let product = state
        .catalog()
        .product(&request.prod_code)
        .ok_or_else(|| AppError::NotFound(format!("product {}", request.prod_code)))?;

    if !product.stock_status().is_sellable() {
        return Err(AppError::OutOfStock(product.name.clone()));
    }

    let mut cart = load_cart(&session).await?;
    cart.add(product);
    save_cart(&session, &cart).await?;
    Ok(Json(CartView::from(&cart)))
}

/// Set a line's quantity. Zero removes the line; an unknown code is a
/// no-op, mirroring the cart container's semantics.
#[instrument(skip(session))]
pub async fn update(
    session: Session,
    Json(request): Json<UpdateRequest>,
) -> Result<Json<CartView>> {
    let mut cart = load_cart(&session).await?;
    cart.set_quantity(&request.prod_code, request.quantity);
    save_cart(&session, &cart).await?;
    Ok(Json(CartView::from(&cart)))
}

/// Remove a line. Idempotent.
#[instrument(skip(session))]
pub async fn remove(
    session: Session,
    Json(request): Json<RemoveRequest>,
) -> Result<Json<CartView>> {
    let mut cart = load_cart(&session).await?;
    cart.remove(&request.prod_code);
    save_cart(&session, &cart).await?;
    Ok(Json(CartView::from(&cart)))
}

/// Finalize the purchase: return the closing summary and clear the cart.
#[instrument(skip(session))]
pub async fn checkout(session: Session) -> Result<Json<CartSummaryView>> {
    let mut cart = load_cart(&session).await?;
    if cart.is_empty() {
        return Err(AppError::EmptyCart);
    }

    let summary = cart.summary();
    cart.clear();
    save_cart(&session, &cart).await?;

    tracing::info!(
        total_quantity = summary.total_quantity,
        total_amount = %summary.total_amount,
        "checkout completed"
    );
    Ok(Json(summary.into()))
}
