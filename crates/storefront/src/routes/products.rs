//! Product route handlers and the shared product card view.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Path, State};
use rust_decimal::Decimal;

use nordic_home_core::{PriceLabel, Product, format_amount, parse_amount};

use crate::catalog;
use crate::error::AppError;
use crate::filters;
use crate::state::AppState;
use crate::whatsapp;

/// Flattened price lines for a product card.
///
/// Four treatments come out of this: a bare list price, the default
/// cash-discount offer, the credit variant without the discount callout,
/// and the scarce-stock variant with a struck-through reference price.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PriceView {
    /// Struck-through reference price, scarce-stock treatment only.
    pub previous: Option<String>,
    /// List price line, labeled "Tarjeta de Crédito/Débito".
    pub list: Option<String>,
    /// Highlighted selling price line.
    pub cash: Option<String>,
    /// Green callout next to the selling price.
    pub callout: Option<&'static str>,
    /// Muted note next to the selling price (credit variant).
    pub cash_note: Option<&'static str>,
}

/// Product display data for templates.
#[derive(Debug, Clone)]
pub struct ProductCardView {
    pub slug: String,
    pub name: String,
    pub image: String,
    pub price: PriceView,
    pub availability: &'static str,
}

impl From<&Product> for ProductCardView {
    fn from(product: &Product) -> Self {
        Self {
            slug: product.slug.to_string(),
            name: product.name.to_string(),
            image: product.image.to_string(),
            price: price_view(product),
            availability: product.availability.label(),
        }
    }
}

const CASH_CALLOUT: &str = "15% OFF con Transferencia o Efectivo";
const CREDIT_NOTE: &str = "con Transferencia o Efectivo";
const LAST_UNITS_CALLOUT: &str = "Últimas Unidades";

/// Pick the price treatment for a product card.
///
/// Scarce-stock products without a cash price get a synthesized
/// reference price 20% above the selling price, so the strike-through
/// still reads as a markdown.
fn price_view(product: &Product) -> PriceView {
    let list = product.price.to_string();

    if let Some(cash) = product.cash_price {
        let cash = cash.to_string();
        return match product.price_label {
            Some(PriceLabel::Credito) => PriceView {
                list: Some(list),
                cash: Some(cash),
                cash_note: Some(CREDIT_NOTE),
                ..PriceView::default()
            },
            Some(PriceLabel::Oportunidad) => PriceView {
                previous: Some(list),
                cash: Some(cash),
                callout: Some(LAST_UNITS_CALLOUT),
                ..PriceView::default()
            },
            Some(PriceLabel::Transferencia) | None => {
                if product.last_units {
                    PriceView {
                        previous: Some(list),
                        cash: Some(cash),
                        callout: Some(LAST_UNITS_CALLOUT),
                        ..PriceView::default()
                    }
                } else {
                    PriceView {
                        list: Some(list),
                        cash: Some(cash),
                        callout: Some(CASH_CALLOUT),
                        ..PriceView::default()
                    }
                }
            }
        };
    }

    if product.last_units {
        let previous = format_amount(parse_amount(&list) * Decimal::new(12, 1));
        return PriceView {
            previous: Some(previous),
            cash: Some(list),
            callout: Some(LAST_UNITS_CALLOUT),
            ..PriceView::default()
        };
    }

    PriceView {
        list: Some(list),
        ..PriceView::default()
    }
}

/// Product detail page template.
#[derive(Template, WebTemplate)]
#[template(path = "products/show.html")]
pub struct ProductShowTemplate {
    pub product: ProductCardView,
    pub description: String,
    pub category_slug: &'static str,
    pub category_title: &'static str,
    pub attributes: Vec<String>,
    pub consult_link: String,
    pub related: Vec<ProductCardView>,
}

/// Display product detail page.
///
/// # Errors
///
/// Returns [`AppError::NotFound`] for an unknown slug.
pub async fn show(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<ProductShowTemplate, AppError> {
    let product = catalog::product_by_slug(&slug).ok_or(AppError::NotFound)?;

    let related = catalog::PRODUCTS
        .iter()
        .filter(|p| p.category == product.category && p.slug != product.slug)
        .take(3)
        .map(ProductCardView::from)
        .collect();

    Ok(ProductShowTemplate {
        product: ProductCardView::from(product),
        description: product.description.to_string(),
        category_slug: product.category.slug(),
        category_title: product.category.title(),
        attributes: product.attributes.iter().map(ToString::to_string).collect(),
        consult_link: whatsapp::consult_link(&state.config().whatsapp_number, product.name),
        related,
    })
}
