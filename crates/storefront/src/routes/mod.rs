//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Home page
//! GET  /health                 - Health check
//! GET  /contacto               - Contact page
//!
//! # Catalog
//! GET  /{category}             - Category listing (living|cocina|dormitorio)
//!                                with search, sort and filter parameters
//! GET  /producto/{slug}        - Product detail
//!
//! # Cart (HTMX fragments)
//! GET  /carrito                - Cart & checkout page
//! POST /carrito/agregar        - Add to cart (returns count badge, triggers cart-updated)
//! POST /carrito/actualizar     - Update quantity (returns cart_items fragment)
//! POST /carrito/quitar         - Remove item (returns cart_items fragment)
//! POST /carrito/vaciar         - Empty the cart (returns cart_items fragment)
//! GET  /carrito/cantidad       - Cart count badge (fragment)
//! GET  /carrito/resumen        - Order summary for a payment selection (fragment)
//! GET  /carrito/tarjeta        - Card input feedback (fragment)
//!
//! # Checkout
//! POST /carrito/finalizar      - Finalize: card orders get a confirmation page,
//!                                transfer/cash orders redirect to WhatsApp
//! ```

pub mod cart;
pub mod category;
pub mod checkout;
pub mod contact;
pub mod home;
pub mod products;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/agregar", post(cart::add))
        .route("/actualizar", post(cart::update))
        .route("/quitar", post(cart::remove))
        .route("/vaciar", post(cart::clear))
        .route("/cantidad", get(cart::count))
        .route("/resumen", get(cart::summary))
        .route("/tarjeta", get(checkout::card_feedback))
        .route("/finalizar", post(checkout::finalize))
}

/// Create all routes for the storefront.
///
/// Static segments are registered before the `/{category}` capture, so
/// `/producto`, `/carrito` and `/contacto` never fall through to the
/// category handler.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Home page
        .route("/", get(home::home))
        // Health check
        .route("/health", get(health))
        // Contact page
        .route("/contacto", get(contact::show))
        // Product detail
        .route("/producto/{slug}", get(products::show))
        // Cart routes
        .nest("/carrito", cart_routes())
        // Category listings
        .route("/{category}", get(category::show))
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}
