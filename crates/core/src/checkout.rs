//! Payment options and order pricing.
//!
//! The pricing engine is a pure function of the cart contents, the chosen
//! payment method and the installment plan. Amounts stay unrounded
//! [`Decimal`]s; rounding happens only at display time via
//! [`crate::price::format_amount`].

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::cart::Cart;

/// How the customer pays. Transfer and cash earn the cash discount; card
/// purchases can be split into installments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Transferencia,
    Efectivo,
    Tarjeta,
}

impl PaymentMethod {
    /// Whether this method earns the transfer/cash discount.
    #[must_use]
    pub const fn earns_cash_discount(self) -> bool {
        matches!(self, Self::Transferencia | Self::Efectivo)
    }

    /// Form label, including the discount annotation shown in the UI.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Transferencia => "Transferencia (15% OFF)",
            Self::Efectivo => "Efectivo contra entrega/retiro en local (15% OFF)",
            Self::Tarjeta => "Tarjeta de Crédito/Débito",
        }
    }
}

/// Ship to the customer or have them pick up at the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryOption {
    Envio,
    Retiro,
}

/// Shipping carrier; only meaningful when the delivery option is
/// [`DeliveryOption::Envio`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ShippingCarrier {
    ViaCargo,
    Andreani,
    FletePrivado,
}

impl ShippingCarrier {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::ViaCargo => "Via Cargo",
            Self::Andreani => "Andreani",
            Self::FletePrivado => "Flete Privado",
        }
    }
}

/// Number of equal card payments; only meaningful for card purchases.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Installments {
    #[default]
    #[serde(rename = "1")]
    One,
    #[serde(rename = "3")]
    Three,
    #[serde(rename = "6")]
    Six,
    #[serde(rename = "12")]
    Twelve,
}

impl Installments {
    #[must_use]
    pub const fn count(self) -> u32 {
        match self {
            Self::One => 1,
            Self::Three => 3,
            Self::Six => 6,
            Self::Twelve => 12,
        }
    }

    /// Form label, matching the storefront's installment annotations.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::One => "1 pago único",
            Self::Three => "3 cuotas sin interés",
            Self::Six => "6 cuotas sin interés",
            Self::Twelve => "12 cuotas con interés",
        }
    }
}

/// Pricing rule constants, in basis points.
///
/// The 60% surcharge on 12 installments is preserved verbatim from the
/// business rules we were given; it is wildly out of line with real
/// financing rates and looks like a placeholder, so it lives here as
/// configuration pending product-owner confirmation rather than as a
/// hardcoded constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingConfig {
    /// Discount for transfer/cash payments (1500 = 15%).
    pub cash_discount_bps: u32,
    /// Surcharge for the surcharged card plan (6000 = 60%).
    pub installment_surcharge_bps: u32,
    /// Which installment plan carries the surcharge.
    pub surcharged_installments: Installments,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            cash_discount_bps: 1500,
            installment_surcharge_bps: 6000,
            surcharged_installments: Installments::Twelve,
        }
    }
}

impl PricingConfig {
    /// Discount percentage for display, e.g. "15".
    #[must_use]
    pub fn discount_percent(&self) -> Decimal {
        Decimal::from(self.cash_discount_bps) / Decimal::from(100)
    }

    /// Surcharge percentage for display, e.g. "60".
    #[must_use]
    pub fn surcharge_percent(&self) -> Decimal {
        Decimal::from(self.installment_surcharge_bps) / Decimal::from(100)
    }
}

/// The derived order totals, unrounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderPricing {
    pub subtotal: Decimal,
    pub discount: Decimal,
    pub interest: Decimal,
    pub total: Decimal,
}

/// Price an order.
///
/// - `subtotal`: cart total (cash price preferred per line, malformed
///   prices count as zero).
/// - `discount`: `subtotal x cash_discount` for transfer/cash, else zero.
/// - `interest`: `subtotal x installment_surcharge` for card purchases in
///   the surcharged plan (12 installments by default); shorter plans carry
///   no surcharge.
/// - `total`: `subtotal - discount + interest`.
#[must_use]
pub fn price_order(
    cart: &Cart,
    method: PaymentMethod,
    installments: Installments,
    config: &PricingConfig,
) -> OrderPricing {
    let subtotal = cart.total();
    let bps = Decimal::from(10_000);

    let discount = if method.earns_cash_discount() {
        subtotal * Decimal::from(config.cash_discount_bps) / bps
    } else {
        Decimal::ZERO
    };

    let interest = if method == PaymentMethod::Tarjeta && installments == config.surcharged_installments
    {
        subtotal * Decimal::from(config.installment_surcharge_bps) / bps
    } else {
        Decimal::ZERO
    };

    OrderPricing {
        subtotal,
        discount,
        interest,
        total: subtotal - discount + interest,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::cart::CartLine;
    use crate::price::format_amount;

    fn cart_with(price: &str, quantity: u32) -> Cart {
        let mut cart = Cart::new();
        cart.add(CartLine {
            id: "sofa".to_string(),
            name: "Sofá".to_string(),
            price: price.to_string(),
            cash_price: None,
            image: "/img.jpg".to_string(),
            slug: "sofa".to_string(),
            quantity,
        });
        cart
    }

    #[test]
    fn test_transfer_discount() {
        let cart = cart_with("$10.000", 1);
        let pricing = price_order(
            &cart,
            PaymentMethod::Transferencia,
            Installments::One,
            &PricingConfig::default(),
        );
        assert_eq!(format_amount(pricing.subtotal), "$10.000");
        assert_eq!(format_amount(pricing.discount), "$1.500");
        assert_eq!(pricing.interest, Decimal::ZERO);
        assert_eq!(format_amount(pricing.total), "$8.500");
    }

    #[test]
    fn test_transfer_discount_two_units() {
        let cart = cart_with("$10.000", 2);
        let pricing = price_order(
            &cart,
            PaymentMethod::Transferencia,
            Installments::One,
            &PricingConfig::default(),
        );
        assert_eq!(format_amount(pricing.discount), "$3.000");
        assert_eq!(format_amount(pricing.total), "$17.000");
    }

    #[test]
    fn test_cash_earns_same_discount() {
        let cart = cart_with("$10.000", 1);
        let pricing = price_order(
            &cart,
            PaymentMethod::Efectivo,
            Installments::One,
            &PricingConfig::default(),
        );
        assert_eq!(format_amount(pricing.discount), "$1.500");
    }

    #[test]
    fn test_twelve_installments_surcharge() {
        let cart = cart_with("$10.000", 1);
        let pricing = price_order(
            &cart,
            PaymentMethod::Tarjeta,
            Installments::Twelve,
            &PricingConfig::default(),
        );
        assert_eq!(pricing.discount, Decimal::ZERO);
        assert_eq!(format_amount(pricing.interest), "$6.000");
        assert_eq!(format_amount(pricing.total), "$16.000");
    }

    #[test]
    fn test_short_installment_plans_carry_no_surcharge() {
        let cart = cart_with("$10.000", 1);
        for installments in [Installments::One, Installments::Three, Installments::Six] {
            let pricing = price_order(
                &cart,
                PaymentMethod::Tarjeta,
                installments,
                &PricingConfig::default(),
            );
            assert_eq!(pricing.interest, Decimal::ZERO);
            assert_eq!(pricing.total, pricing.subtotal);
        }
    }

    #[test]
    fn test_surcharged_plan_is_configurable() {
        let cart = cart_with("$10.000", 1);
        let config = PricingConfig {
            surcharged_installments: Installments::Six,
            ..PricingConfig::default()
        };
        let at_six = price_order(&cart, PaymentMethod::Tarjeta, Installments::Six, &config);
        assert_eq!(format_amount(at_six.interest), "$6.000");
        let at_twelve = price_order(&cart, PaymentMethod::Tarjeta, Installments::Twelve, &config);
        assert_eq!(at_twelve.interest, Decimal::ZERO);
    }

    #[test]
    fn test_empty_cart_prices_to_zero() {
        let pricing = price_order(
            &Cart::new(),
            PaymentMethod::Transferencia,
            Installments::One,
            &PricingConfig::default(),
        );
        assert_eq!(pricing.subtotal, Decimal::ZERO);
        assert_eq!(pricing.total, Decimal::ZERO);
    }

    #[test]
    fn test_installments_form_values() {
        let parsed: Installments = serde_json::from_str("\"12\"").unwrap();
        assert_eq!(parsed, Installments::Twelve);
        assert_eq!(parsed.count(), 12);
    }

    #[test]
    fn test_payment_method_form_values() {
        let parsed: PaymentMethod = serde_json::from_str("\"transferencia\"").unwrap();
        assert_eq!(parsed, PaymentMethod::Transferencia);
        assert!(parsed.earns_cash_discount());
        assert!(!PaymentMethod::Tarjeta.earns_cash_discount());
    }
}
