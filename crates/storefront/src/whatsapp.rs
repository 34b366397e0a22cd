//! WhatsApp order hand-off.
//!
//! Transfer and cash orders are not charged online; instead the storefront
//! builds a structured order summary and redirects the shopper to a
//! `wa.me` deep link so the conversation continues on WhatsApp.

use nordic_home_core::checkout::{
    DeliveryOption, Installments, PaymentMethod, PricingConfig, ShippingCarrier, price_order,
};
use nordic_home_core::{Cart, format_amount};
use rust_decimal::Decimal;

/// Customer details collected by the checkout form.
#[derive(Debug, Clone)]
pub struct OrderDetails {
    pub customer_name: String,
    pub email: String,
    pub address: String,
    pub city: String,
    pub postal_code: String,
    pub delivery: DeliveryOption,
    pub carrier: ShippingCarrier,
    pub payment: PaymentMethod,
    pub installments: Installments,
}

/// Build the order summary message sent over WhatsApp.
///
/// Empty customer fields are omitted line by line, so a minimal order
/// still reads cleanly.
#[must_use]
pub fn order_message(cart: &Cart, details: &OrderDetails, pricing: &PricingConfig) -> String {
    let mut message = String::from("Hola Nordic Home! Quiero realizar el siguiente pedido:\n\n");

    if !details.customer_name.is_empty() {
        message.push_str(&format!("👤 Cliente: {}\n", details.customer_name));
    }
    if !details.email.is_empty() {
        message.push_str(&format!("📧 Email: {}\n", details.email));
    }
    if let Some(address_line) = address_line(details) {
        message.push_str(&format!("📍 Dirección: {address_line}\n"));
    }

    match details.delivery {
        DeliveryOption::Envio => {
            message.push_str(&format!("🚚 Envío: {}\n", details.carrier.label()));
        }
        DeliveryOption::Retiro => message.push_str("🏪 Retiro en local\n"),
    }
    message.push('\n');

    message.push_str("📦 Productos:\n");
    for (index, line) in cart.lines().iter().enumerate() {
        message.push_str(&format!(
            "{}. {} x{} - {} c/u\n",
            index + 1,
            line.name,
            line.quantity,
            line.effective_price()
        ));
    }
    message.push('\n');

    let mut payment_text = details.payment.label().to_string();
    if details.payment == PaymentMethod::Tarjeta {
        payment_text.push_str(" - ");
        payment_text.push_str(details.installments.label());
    }
    message.push_str(&format!("💳 Método de Pago: {payment_text}\n\n"));

    let totals = price_order(cart, details.payment, details.installments, pricing);
    message.push_str("💰 Resumen:\n");
    message.push_str(&format!("Subtotal: {}\n", format_amount(totals.subtotal)));
    if totals.discount > Decimal::ZERO {
        message.push_str(&format!(
            "Descuento ({}%): -{}\n",
            pricing.discount_percent(),
            format_amount(totals.discount)
        ));
    }
    if totals.interest > Decimal::ZERO {
        message.push_str(&format!(
            "Interés ({}%): +{}\n",
            pricing.surcharge_percent(),
            format_amount(totals.interest)
        ));
    }
    message.push_str(&format!("Total: {}", format_amount(totals.total)));

    message
}

/// Consult link for a product detail page.
#[must_use]
pub fn consult_link(number: &str, product_name: &str) -> String {
    deep_link(
        number,
        &format!("Hola Nordic Home! Quiero consultar por {product_name}."),
    )
}

/// Deep link that opens a WhatsApp chat with the message prefilled.
#[must_use]
pub fn deep_link(number: &str, message: &str) -> String {
    format!("https://wa.me/{number}?text={}", urlencoding::encode(message))
}

fn address_line(details: &OrderDetails) -> Option<String> {
    let mut line = details.address.clone();
    if !details.city.is_empty() {
        if !line.is_empty() {
            line.push_str(", ");
        }
        line.push_str(&details.city);
    }
    if !details.postal_code.is_empty() {
        if line.is_empty() {
            line.push_str("CP: ");
        } else {
            line.push_str(", CP: ");
        }
        line.push_str(&details.postal_code);
    }
    if line.is_empty() { None } else { Some(line) }
}
