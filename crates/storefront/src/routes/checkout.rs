//! Checkout route handlers.
//!
//! Card orders are simulated: the storefront issues a random order number
//! and shows a confirmation page. Transfer and cash orders hand off to
//! WhatsApp with a structured summary; the cart is kept so the shopper
//! can come back if the conversation stalls.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Query, State},
    response::{IntoResponse, Redirect, Response},
};
use rand::Rng;
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use nordic_home_core::checkout::{
    DeliveryOption, Installments, PaymentMethod, ShippingCarrier,
};
use nordic_home_core::{CardBrand, validate_cvv, validate_expiry, validate_number};

use crate::error::AppError;
use crate::filters;
use crate::routes::cart::{get_cart_id, load_cart};
use crate::state::AppState;
use crate::whatsapp::{self, OrderDetails};

/// Document ids (DNI) never exceed eight digits.
const MAX_DNI_DIGITS: usize = 8;

/// Checkout form data.
#[derive(Debug, Deserialize)]
pub struct CheckoutForm {
    #[serde(default)]
    pub nombre: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub direccion: String,
    #[serde(default)]
    pub ciudad: String,
    #[serde(default)]
    pub cp: String,
    pub entrega: Option<DeliveryOption>,
    pub transporte: Option<ShippingCarrier>,
    pub pago: PaymentMethod,
    pub cuotas: Option<Installments>,
    #[serde(default)]
    pub tarjeta_numero: String,
    #[serde(default)]
    pub tarjeta_titular: String,
    #[serde(default)]
    pub tarjeta_dni: String,
    #[serde(default)]
    pub tarjeta_cvv: String,
    pub tarjeta_vencimiento: Option<String>,
}

/// Card input feedback query parameters, named after the form fields.
#[derive(Debug, Deserialize)]
pub struct CardQuery {
    #[serde(default)]
    pub tarjeta_numero: String,
    #[serde(default)]
    pub tarjeta_cvv: String,
    #[serde(default)]
    pub tarjeta_vencimiento: String,
}

/// Order confirmation page template.
#[derive(Template, WebTemplate)]
#[template(path = "cart/confirmation.html")]
pub struct ConfirmationTemplate {
    pub order_number: u32,
}

/// Card input feedback fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/card_feedback.html")]
pub struct CardFeedbackTemplate {
    pub brand: Option<&'static str>,
    pub number_error: Option<String>,
    pub cvv_error: Option<String>,
    pub expiry_error: Option<String>,
}

/// Live feedback for the card form (HTMX).
///
/// Partial input is treated as fine; feedback only appears once the brand
/// is recognizable or a field is complete and wrong. The number and CVV
/// length limits come from the detected brand (15 digits and a 4-digit
/// code for Amex, 16 and 3 otherwise).
#[instrument]
pub async fn card_feedback(Query(query): Query<CardQuery>) -> CardFeedbackTemplate {
    let (brand, number_error) = match validate_number(&query.tarjeta_numero) {
        Ok(brand) => (brand, None),
        Err(e) => (CardBrand::detect(&query.tarjeta_numero), Some(e.to_string())),
    };
    let cvv_error = validate_cvv(&query.tarjeta_cvv, brand)
        .err()
        .map(|e| e.to_string());
    let expiry_error = validate_expiry(&query.tarjeta_vencimiento, today())
        .err()
        .map(|e| e.to_string());

    CardFeedbackTemplate {
        brand: brand.map(CardBrand::label),
        number_error,
        cvv_error,
        expiry_error,
    }
}

/// Finalize the order.
///
/// An empty cart redirects back to the cart page without side effects.
#[instrument(skip(state, session, form))]
pub async fn finalize(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<CheckoutForm>,
) -> Result<Response, AppError> {
    let cart = load_cart(&state, &session).await;
    if cart.is_empty() {
        return Ok(Redirect::to("/carrito").into_response());
    }

    if form.pago == PaymentMethod::Tarjeta {
        let brand = validate_number(&form.tarjeta_numero)
            .map_err(|e| AppError::BadRequest(e.to_string()))?;
        validate_cvv(&form.tarjeta_cvv, brand)
            .map_err(|e| AppError::BadRequest(e.to_string()))?;
        if form.tarjeta_dni.chars().filter(char::is_ascii_digit).count() > MAX_DNI_DIGITS {
            return Err(AppError::BadRequest(format!(
                "El DNI no puede superar los {MAX_DNI_DIGITS} dígitos"
            )));
        }
        if let Some(expiry) = form.tarjeta_vencimiento.as_deref() {
            validate_expiry(expiry, today())
                .map_err(|e| AppError::BadRequest(e.to_string()))?;
        }

        let order_number: u32 = rand::rng().random_range(10_000_000..=99_999_999);
        tracing::info!(order_number, "card order confirmed");

        // The order is settled on this screen, so the cart empties now.
        if let Some(cart_id) = get_cart_id(&session).await {
            state.carts().save(cart_id, &nordic_home_core::Cart::new()).await?;
        }

        return Ok(ConfirmationTemplate { order_number }.into_response());
    }

    let details = OrderDetails {
        customer_name: form.nombre,
        email: form.email,
        address: form.direccion,
        city: form.ciudad,
        postal_code: form.cp,
        delivery: form.entrega.unwrap_or(DeliveryOption::Envio),
        carrier: form.transporte.unwrap_or(ShippingCarrier::ViaCargo),
        payment: form.pago,
        installments: form.cuotas.unwrap_or_default(),
    };

    let message = whatsapp::order_message(&cart, &details, &state.config().pricing);
    let link = whatsapp::deep_link(&state.config().whatsapp_number, &message);
    tracing::info!(payment = ?details.payment, "order handed off to WhatsApp");

    Ok(Redirect::to(&link).into_response())
}

fn today() -> chrono::NaiveDate {
    chrono::Utc::now().date_naive()
}
