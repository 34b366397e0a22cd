//! Catalog record types.
//!
//! The catalog is a read-only, compiled-in list of [`Product`] records that
//! the core never mutates. Price fields are display strings in the es-AR
//! convention; numeric comparisons go through [`crate::price::parse_amount`].

use serde::{Deserialize, Serialize};

/// Storefront category. Each category has its own listing page and its own
/// filter attribute vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Living,
    Cocina,
    Dormitorio,
}

impl Category {
    /// URL path segment for the category listing page.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Living => "living",
            Self::Cocina => "cocina",
            Self::Dormitorio => "dormitorio",
        }
    }

    /// Parse a URL path segment back into a category.
    #[must_use]
    pub fn from_slug(slug: &str) -> Option<Self> {
        match slug {
            "living" => Some(Self::Living),
            "cocina" => Some(Self::Cocina),
            "dormitorio" => Some(Self::Dormitorio),
            _ => None,
        }
    }

    /// Display name for navigation and headings.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Living => "Living",
            Self::Cocina => "Cocina",
            Self::Dormitorio => "Dormitorio",
        }
    }
}

/// Stock availability, used by the availability filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Availability {
    /// In stock, ships right away ("Entrega Inmediata").
    Immediate,
    /// Made to order, 30-45 day lead time ("Por Encargo").
    MadeToOrder,
}

impl Availability {
    /// Filter-panel label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Immediate => "Entrega Inmediata (Lo tengo ya)",
            Self::MadeToOrder => "Por Encargo / A Fabricación (Demora 30-45 días)",
        }
    }
}

/// Which price-display treatment a product card gets when it carries a cash
/// price alongside the list price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceLabel {
    /// Default treatment: list price for card, cash price "15% OFF".
    Transferencia,
    /// Clearance treatment: struck-through list price, "Últimas Unidades".
    Oportunidad,
    /// Both prices shown plainly, list price labeled credit/debit.
    Credito,
}

/// A catalog product record.
///
/// `slug` doubles as the product identifier and is unique within the catalog.
/// `attributes` carries the category-scoped filter tags ("Sillones",
/// "3 Cuerpos", ...) that the filter panel matches against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Product {
    pub slug: &'static str,
    pub name: &'static str,
    pub category: Category,
    /// List price display string, e.g. "$1.250.000".
    pub price: &'static str,
    /// Discounted price when paying by transfer or cash.
    pub cash_price: Option<&'static str>,
    /// Price-display variant; `None` behaves as [`PriceLabel::Transferencia`].
    pub price_label: Option<PriceLabel>,
    /// Scarce-stock merchandising flag.
    pub last_units: bool,
    pub image: &'static str,
    pub availability: Availability,
    /// Category-scoped filter tags.
    pub attributes: &'static [&'static str],
    pub description: &'static str,
}
