//! Catalog filter predicates.
//!
//! Filtering is a single pass over the category's products: text search
//! (diacritic-folded substring match on name or slug), price range against
//! the parsed list price, availability flags, and category attribute tags.
//! The output preserves the catalog's relative order and never errors.

use rust_decimal::Decimal;

use crate::price::parse_amount;
use crate::product::{Availability, Category, Product};

/// Active filter selections for a category listing.
///
/// The two availability flags are independent toggles, not mutually
/// exclusive; when neither is set the filter is inactive. Attribute
/// selections are scoped by the category vocabulary the panel showed, but
/// nothing structurally prevents applying them elsewhere - tags from another
/// category simply match no products.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterState {
    /// "Entrega Inmediata (Lo tengo ya)".
    pub immediate: bool,
    /// "Por Encargo / A Fabricación (Demora 30-45 días)".
    pub made_to_order: bool,
    pub price_min: Option<Decimal>,
    pub price_max: Option<Decimal>,
    /// Selected attribute tags; a product matches if it shares at least one.
    pub attributes: Vec<String>,
}

impl FilterState {
    /// True when no predicate is active.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        !self.immediate
            && !self.made_to_order
            && self.price_min.is_none()
            && self.price_max.is_none()
            && self.attributes.is_empty()
    }
}

/// Lowercase a string and fold accented letters to their base form.
///
/// Mirrors the Unicode-decomposition normalization the storefront uses for
/// search ("Sillón" and "sillon" compare equal), restricted to the marks that
/// actually occur in the catalog: the Spanish vowels plus the Scandinavian
/// ring in the Nordic product names.
#[must_use]
pub fn normalize(s: &str) -> String {
    s.chars()
        .flat_map(char::to_lowercase)
        .map(|c| match c {
            'á' | 'à' | 'ä' | 'â' | 'å' => 'a',
            'é' | 'è' | 'ë' | 'ê' => 'e',
            'í' | 'ì' | 'ï' | 'î' => 'i',
            'ó' | 'ò' | 'ö' | 'ô' => 'o',
            'ú' | 'ù' | 'ü' | 'û' => 'u',
            'ñ' => 'n',
            other => other,
        })
        .collect()
}

/// Filter a product list down to the given category and active predicates.
///
/// Order of application: category, text query, price minimum, price maximum,
/// availability, attributes. Products whose price string fails to parse are
/// treated as priced at zero, so a price minimum excludes them.
#[must_use]
pub fn filter_products<'a>(
    products: &'a [Product],
    category: Category,
    query: &str,
    filters: &FilterState,
) -> Vec<&'a Product> {
    let query = query.trim();
    let normalized_query = if query.is_empty() {
        None
    } else {
        Some(normalize(query))
    };

    products
        .iter()
        .filter(|p| p.category == category)
        .filter(|p| {
            normalized_query.as_ref().is_none_or(|q| {
                normalize(p.name).contains(q.as_str()) || normalize(p.slug).contains(q.as_str())
            })
        })
        .filter(|p| {
            filters
                .price_min
                .is_none_or(|min| parse_amount(p.price) >= min)
        })
        .filter(|p| {
            filters
                .price_max
                .is_none_or(|max| parse_amount(p.price) <= max)
        })
        .filter(|p| match (filters.immediate, filters.made_to_order) {
            // Neither flag set: availability filter inactive.
            (false, false) | (true, true) => true,
            (true, false) => p.availability == Availability::Immediate,
            (false, true) => p.availability == Availability::MadeToOrder,
        })
        .filter(|p| {
            filters.attributes.is_empty()
                || filters
                    .attributes
                    .iter()
                    .any(|attr| p.attributes.contains(&attr.as_str()))
        })
        .collect()
}
