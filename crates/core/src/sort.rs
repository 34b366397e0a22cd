//! Catalog ordering.

use std::cmp::Ordering;

use crate::filter::normalize;
use crate::price::parse_amount;
use crate::product::Product;

/// Sort key for category listings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortKey {
    /// Catalog order, no reordering.
    #[default]
    Default,
    PriceAsc,
    PriceDesc,
    NameAsc,
    NameDesc,
}

impl SortKey {
    /// Parse the `sort` query parameter; unknown values fall back to
    /// catalog order.
    #[must_use]
    pub fn from_param(param: &str) -> Self {
        match param {
            "price-asc" => Self::PriceAsc,
            "price-desc" => Self::PriceDesc,
            "name-asc" => Self::NameAsc,
            "name-desc" => Self::NameDesc,
            _ => Self::Default,
        }
    }

    /// Query parameter value for this key.
    #[must_use]
    pub const fn as_param(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::PriceAsc => "price-asc",
            Self::PriceDesc => "price-desc",
            Self::NameAsc => "name-asc",
            Self::NameDesc => "name-desc",
        }
    }

    /// Dropdown label for this key.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Default => "Por defecto",
            Self::PriceAsc => "Precio: Menor a Mayor",
            Self::PriceDesc => "Precio: Mayor a Menor",
            Self::NameAsc => "Nombre: A-Z",
            Self::NameDesc => "Nombre: Z-A",
        }
    }

    /// All keys, in dropdown order.
    pub const ALL: [Self; 5] = [
        Self::Default,
        Self::PriceAsc,
        Self::PriceDesc,
        Self::NameAsc,
        Self::NameDesc,
    ];
}

/// Return a newly ordered sequence; the input is never reordered in place.
///
/// Price keys compare the parsed list price; name keys compare
/// case-insensitively with diacritics folded, so accented names sort next to
/// their unaccented neighbors rather than after 'z'. The underlying sort is
/// stable: ties keep their input order.
#[must_use]
pub fn sort_products<'a>(products: &[&'a Product], key: SortKey) -> Vec<&'a Product> {
    let mut sorted: Vec<&Product> = products.to_vec();
    match key {
        SortKey::Default => {}
        SortKey::PriceAsc => {
            sorted.sort_by(|a, b| compare_price(a, b));
        }
        SortKey::PriceDesc => {
            sorted.sort_by(|a, b| compare_price(b, a));
        }
        SortKey::NameAsc => {
            sorted.sort_by(|a, b| compare_name(a, b));
        }
        SortKey::NameDesc => {
            sorted.sort_by(|a, b| compare_name(b, a));
        }
    }
    sorted
}

fn compare_price(a: &Product, b: &Product) -> Ordering {
    parse_amount(a.price).cmp(&parse_amount(b.price))
}

fn compare_name(a: &Product, b: &Product) -> Ordering {
    normalize(a.name).cmp(&normalize(b.name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::{Availability, Category};

    const fn product(slug: &'static str, name: &'static str, price: &'static str) -> Product {
        Product {
            slug,
            name,
            category: Category::Living,
            price,
            cash_price: None,
            price_label: None,
            last_units: false,
            image: "/static/images/test.jpg",
            availability: Availability::Immediate,
            attributes: &[],
            description: "",
        }
    }

    fn catalog() -> Vec<Product> {
        vec![
            product("sofa-bergen", "Sofá Bergen", "$900.000"),
            product("mesa-arhus", "Mesa Århus", "$150.000"),
            product("banqueta-umea", "Banqueta Umeå", "$450.000"),
        ]
    }

    #[test]
    fn test_default_is_identity() {
        let products = catalog();
        let refs: Vec<&Product> = products.iter().collect();
        let sorted = sort_products(&refs, SortKey::Default);
        let slugs: Vec<_> = sorted.iter().map(|p| p.slug).collect();
        assert_eq!(slugs, vec!["sofa-bergen", "mesa-arhus", "banqueta-umea"]);
    }

    #[test]
    fn test_price_ascending() {
        let products = catalog();
        let refs: Vec<&Product> = products.iter().collect();
        let sorted = sort_products(&refs, SortKey::PriceAsc);
        let slugs: Vec<_> = sorted.iter().map(|p| p.slug).collect();
        assert_eq!(slugs, vec!["mesa-arhus", "banqueta-umea", "sofa-bergen"]);
    }

    #[test]
    fn test_name_desc_reverses_name_asc_without_ties() {
        let products = catalog();
        let refs: Vec<&Product> = products.iter().collect();
        let asc: Vec<_> = sort_products(&refs, SortKey::NameAsc)
            .iter()
            .map(|p| p.slug)
            .collect();
        let mut desc: Vec<_> = sort_products(&refs, SortKey::NameDesc)
            .iter()
            .map(|p| p.slug)
            .collect();
        desc.reverse();
        assert_eq!(asc, desc);
    }

    #[test]
    fn test_accented_names_sort_in_locale_order() {
        // "Århus" folds to "arhus" and sorts before "Banqueta", not after "z".
        let products = catalog();
        let refs: Vec<&Product> = products.iter().collect();
        let sorted = sort_products(&refs, SortKey::NameAsc);
        assert_eq!(sorted.first().map(|p| p.slug), Some("mesa-arhus"));
    }

    #[test]
    fn test_price_ties_keep_input_order() {
        let products = vec![
            product("a", "A", "$100"),
            product("b", "B", "$100"),
            product("c", "C", "$50"),
        ];
        let refs: Vec<&Product> = products.iter().collect();
        let sorted = sort_products(&refs, SortKey::PriceAsc);
        let slugs: Vec<_> = sorted.iter().map(|p| p.slug).collect();
        assert_eq!(slugs, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_input_not_mutated() {
        let products = catalog();
        let refs: Vec<&Product> = products.iter().collect();
        let _ = sort_products(&refs, SortKey::PriceAsc);
        assert_eq!(refs.first().map(|p| p.slug), Some("sofa-bergen"));
    }
}
