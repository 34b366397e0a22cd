//! Cart route handlers.
//!
//! Cart operations use HTMX for dynamic updates without full page reloads.
//! The session only carries the cart ID; the cart itself lives in the
//! file-backed store and is saved after every mutation.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Query, State},
    response::{AppendHeaders, IntoResponse, Response},
};
use rust_decimal::Decimal;
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;
use uuid::Uuid;

use nordic_home_core::checkout::{Installments, PaymentMethod, price_order};
use nordic_home_core::{Cart, CartLine, format_amount};

use crate::catalog;
use crate::error::AppError;
use crate::filters;
use crate::state::AppState;

/// Session key holding the shopper's cart ID.
pub const CART_ID_KEY: &str = "cart.id";

/// Cart item display data for templates.
#[derive(Clone)]
pub struct CartItemView {
    pub id: String,
    pub slug: String,
    pub name: String,
    pub image: String,
    pub quantity: u32,
    pub unit_price: String,
    pub line_total: String,
}

impl From<&CartLine> for CartItemView {
    fn from(line: &CartLine) -> Self {
        Self {
            id: line.id.clone(),
            slug: line.slug.clone(),
            name: line.name.clone(),
            image: line.image.clone(),
            quantity: line.quantity,
            unit_price: line.effective_price().to_string(),
            line_total: format_amount(line.unit_amount() * Decimal::from(line.quantity)),
        }
    }
}

/// Cart display data for templates.
#[derive(Clone)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub item_count: u32,
    pub subtotal: String,
}

impl CartView {
    /// Create an empty cart.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            item_count: 0,
            subtotal: "$0".to_string(),
        }
    }
}

impl From<&Cart> for CartView {
    fn from(cart: &Cart) -> Self {
        Self {
            items: cart.lines().iter().map(CartItemView::from).collect(),
            item_count: cart.total_items(),
            subtotal: format_amount(cart.total()),
        }
    }
}

/// Order summary display data for templates.
#[derive(Clone)]
pub struct SummaryView {
    pub subtotal: String,
    pub discount: Option<String>,
    pub interest: Option<String>,
    pub discount_percent: String,
    pub interest_percent: String,
    pub total: String,
}

impl SummaryView {
    fn build(state: &AppState, cart: &Cart, payment: PaymentMethod, plan: Installments) -> Self {
        let pricing = &state.config().pricing;
        let totals = price_order(cart, payment, plan, pricing);

        Self {
            subtotal: format_amount(totals.subtotal),
            discount: (totals.discount > Decimal::ZERO).then(|| format_amount(totals.discount)),
            interest: (totals.interest > Decimal::ZERO).then(|| format_amount(totals.interest)),
            discount_percent: pricing.discount_percent().to_string(),
            interest_percent: pricing.surcharge_percent().to_string(),
            total: format_amount(totals.total),
        }
    }
}

// =============================================================================
// Session Helpers
// =============================================================================

/// Get the cart ID from the session, if the shopper has one.
pub async fn get_cart_id(session: &Session) -> Option<Uuid> {
    session.get::<Uuid>(CART_ID_KEY).await.ok().flatten()
}

/// Get the cart ID from the session, minting one on first use.
pub async fn ensure_cart_id(session: &Session) -> Result<Uuid, AppError> {
    if let Some(cart_id) = get_cart_id(session).await {
        return Ok(cart_id);
    }
    let cart_id = Uuid::new_v4();
    session.insert(CART_ID_KEY, cart_id).await?;
    Ok(cart_id)
}

/// Load the session's cart, or an empty cart when there is none yet.
pub async fn load_cart(state: &AppState, session: &Session) -> Cart {
    match get_cart_id(session).await {
        Some(cart_id) => state.carts().load(cart_id).await,
        None => Cart::new(),
    }
}

// =============================================================================
// Forms
// =============================================================================

/// Add to cart form data.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    pub slug: String,
    pub cantidad: Option<u32>,
}

/// Update cart form data.
#[derive(Debug, Deserialize)]
pub struct UpdateCartForm {
    pub id: String,
    pub cantidad: u32,
}

/// Remove from cart form data.
#[derive(Debug, Deserialize)]
pub struct RemoveFromCartForm {
    pub id: String,
}

/// Summary fragment query parameters.
#[derive(Debug, Deserialize)]
pub struct SummaryQuery {
    pub pago: Option<PaymentMethod>,
    pub cuotas: Option<Installments>,
}

// =============================================================================
// Templates
// =============================================================================

/// Cart & checkout page template.
#[derive(Template, WebTemplate)]
#[template(path = "cart/show.html")]
pub struct CartShowTemplate {
    pub cart: CartView,
    pub summary: SummaryView,
}

/// Cart items fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_items.html")]
pub struct CartItemsTemplate {
    pub cart: CartView,
}

/// Cart count badge fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_count.html")]
pub struct CartCountTemplate {
    pub count: u32,
}

/// Order summary fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_summary.html")]
pub struct CartSummaryTemplate {
    pub summary: SummaryView,
}

// =============================================================================
// Handlers
// =============================================================================

/// Display the cart & checkout page.
#[instrument(skip(state, session))]
pub async fn show(State(state): State<AppState>, session: Session) -> CartShowTemplate {
    let cart = load_cart(&state, &session).await;
    // The page opens with transfer selected, same as the summary default.
    let summary = SummaryView::build(
        &state,
        &cart,
        PaymentMethod::Transferencia,
        Installments::One,
    );

    CartShowTemplate {
        cart: CartView::from(&cart),
        summary,
    }
}

/// Add an item to the cart (HTMX).
///
/// Mints a cart on first use. Returns the count badge with an HTMX
/// trigger so other cart elements refresh.
#[instrument(skip(state, session))]
pub async fn add(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<AddToCartForm>,
) -> Result<Response, AppError> {
    let product = catalog::product_by_slug(&form.slug)
        .ok_or_else(|| AppError::BadRequest(format!("unknown product {}", form.slug)))?;

    let cart_id = ensure_cart_id(&session).await?;
    let mut cart = state.carts().load(cart_id).await;
    cart.add(CartLine {
        id: product.slug.to_string(),
        name: product.name.to_string(),
        price: product.price.to_string(),
        cash_price: product.cash_price.map(ToString::to_string),
        image: product.image.to_string(),
        quantity: form.cantidad.unwrap_or(1),
        slug: product.slug.to_string(),
    });
    state.carts().save(cart_id, &cart).await?;

    Ok((
        AppendHeaders([("HX-Trigger", "cart-updated")]),
        CartCountTemplate {
            count: cart.total_items(),
        },
    )
        .into_response())
}

/// Update a cart line's quantity (HTMX). Quantity zero removes the line.
#[instrument(skip(state, session))]
pub async fn update(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<UpdateCartForm>,
) -> Result<Response, AppError> {
    let Some(cart_id) = get_cart_id(&session).await else {
        return Ok(CartItemsTemplate {
            cart: CartView::empty(),
        }
        .into_response());
    };

    let mut cart = state.carts().load(cart_id).await;
    cart.update_quantity(&form.id, form.cantidad);
    state.carts().save(cart_id, &cart).await?;

    Ok((
        AppendHeaders([("HX-Trigger", "cart-updated")]),
        CartItemsTemplate {
            cart: CartView::from(&cart),
        },
    )
        .into_response())
}

/// Remove a cart line (HTMX).
#[instrument(skip(state, session))]
pub async fn remove(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<RemoveFromCartForm>,
) -> Result<Response, AppError> {
    let Some(cart_id) = get_cart_id(&session).await else {
        return Ok(CartItemsTemplate {
            cart: CartView::empty(),
        }
        .into_response());
    };

    let mut cart = state.carts().load(cart_id).await;
    cart.remove(&form.id);
    state.carts().save(cart_id, &cart).await?;

    Ok((
        AppendHeaders([("HX-Trigger", "cart-updated")]),
        CartItemsTemplate {
            cart: CartView::from(&cart),
        },
    )
        .into_response())
}

/// Empty the cart (HTMX).
#[instrument(skip(state, session))]
pub async fn clear(
    State(state): State<AppState>,
    session: Session,
) -> Result<Response, AppError> {
    if let Some(cart_id) = get_cart_id(&session).await {
        let mut cart = state.carts().load(cart_id).await;
        cart.clear();
        state.carts().save(cart_id, &cart).await?;
    }

    Ok((
        AppendHeaders([("HX-Trigger", "cart-updated")]),
        CartItemsTemplate {
            cart: CartView::empty(),
        },
    )
        .into_response())
}

/// Get the cart count badge (HTMX).
#[instrument(skip(state, session))]
pub async fn count(State(state): State<AppState>, session: Session) -> CartCountTemplate {
    let cart = load_cart(&state, &session).await;
    CartCountTemplate {
        count: cart.total_items(),
    }
}

/// Get the order summary for the selected payment method (HTMX).
///
/// The cart page re-requests this fragment whenever the payment or
/// installment selection changes.
#[instrument(skip(state, session))]
pub async fn summary(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<SummaryQuery>,
) -> CartSummaryTemplate {
    let cart = load_cart(&state, &session).await;
    let payment = query.pago.unwrap_or(PaymentMethod::Transferencia);
    let plan = query.cuotas.unwrap_or_default();

    CartSummaryTemplate {
        summary: SummaryView::build(&state, &cart, payment, plan),
    }
}
