//! Category listing route handler.
//!
//! One handler serves `/living`, `/cocina` and `/dormitorio`. Search,
//! sort and filter state all travel in the query string so listings stay
//! bookmarkable. Attribute tags are rendered as toggle links with
//! prebuilt URLs; the other controls submit as a GET form that carries
//! the current tags in a hidden `attrs` field.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Path, Query};
use serde::Deserialize;

use nordic_home_core::{
    Availability, Category, FilterState, SortKey, filter_products, parse_amount, sort_products,
};

use crate::catalog::{self, FilterGroup};
use crate::error::AppError;
use crate::filters;
use crate::routes::products::ProductCardView;

/// Query parameters for a category listing.
///
/// `attrs` is a comma-separated list of attribute tags.
#[derive(Debug, Default, Deserialize)]
pub struct BrowseQuery {
    pub q: Option<String>,
    pub sort: Option<String>,
    pub min: Option<String>,
    pub max: Option<String>,
    pub inmediata: Option<String>,
    pub encargo: Option<String>,
    pub attrs: Option<String>,
}

impl BrowseQuery {
    fn filter_state(&self) -> FilterState {
        let parse_bound = |raw: &Option<String>| {
            raw.as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(parse_amount)
        };

        FilterState {
            immediate: self.inmediata.is_some(),
            made_to_order: self.encargo.is_some(),
            price_min: parse_bound(&self.min),
            price_max: parse_bound(&self.max),
            attributes: self
                .attrs
                .as_deref()
                .unwrap_or("")
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(ToString::to_string)
                .collect(),
        }
    }
}

/// A sort dropdown entry.
pub struct SortOptionView {
    pub value: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

/// An attribute tag rendered as a toggle link.
pub struct FilterOptionView {
    pub value: &'static str,
    pub checked: bool,
    pub toggle_url: String,
}

/// A titled group of attribute toggles.
pub struct FilterGroupView {
    pub title: &'static str,
    pub options: Vec<FilterOptionView>,
}

/// Category listing page template.
#[derive(Template, WebTemplate)]
#[template(path = "category/index.html")]
pub struct CategoryTemplate {
    pub slug: &'static str,
    pub title: &'static str,
    pub tagline: &'static str,
    pub query: String,
    pub min: String,
    pub max: String,
    pub inmediata: bool,
    pub encargo: bool,
    pub inmediata_label: &'static str,
    pub encargo_label: &'static str,
    pub attrs_param: String,
    pub sort_options: Vec<SortOptionView>,
    pub filter_groups: Vec<FilterGroupView>,
    pub products: Vec<ProductCardView>,
    pub result_count: usize,
}

/// Display a category listing.
///
/// # Errors
///
/// Returns [`AppError::NotFound`] for a path segment that is not a
/// category.
pub async fn show(
    Path(slug): Path<String>,
    Query(browse): Query<BrowseQuery>,
) -> Result<CategoryTemplate, AppError> {
    let category = Category::from_slug(&slug).ok_or(AppError::NotFound)?;

    let query = browse.q.clone().unwrap_or_default();
    let state = browse.filter_state();
    let sort = SortKey::from_param(browse.sort.as_deref().unwrap_or_default());

    let matches = filter_products(catalog::PRODUCTS, category, &query, &state);
    let ordered = sort_products(&matches, sort);

    let sort_options = SortKey::ALL
        .into_iter()
        .map(|key| SortOptionView {
            value: key.as_param(),
            label: key.label(),
            selected: key == sort,
        })
        .collect();

    let filter_groups = catalog::filter_groups(category)
        .iter()
        .map(|group| group_view(group, category, &browse, sort, &state))
        .collect();

    Ok(CategoryTemplate {
        slug: category.slug(),
        title: category.title(),
        tagline: catalog::category_tagline(category),
        query,
        min: browse.min.clone().unwrap_or_default(),
        max: browse.max.clone().unwrap_or_default(),
        inmediata: state.immediate,
        encargo: state.made_to_order,
        inmediata_label: Availability::Immediate.label(),
        encargo_label: Availability::MadeToOrder.label(),
        attrs_param: state.attributes.join(","),
        sort_options,
        filter_groups,
        result_count: ordered.len(),
        products: ordered.into_iter().map(ProductCardView::from).collect(),
    })
}

fn group_view(
    group: &FilterGroup,
    category: Category,
    browse: &BrowseQuery,
    sort: SortKey,
    state: &FilterState,
) -> FilterGroupView {
    FilterGroupView {
        title: group.title,
        options: group
            .values
            .iter()
            .map(|value| {
                let checked = state.attributes.iter().any(|a| a == value);
                let toggled: Vec<String> = if checked {
                    state.attributes.iter().filter(|a| a != value).cloned().collect()
                } else {
                    let mut attrs = state.attributes.clone();
                    attrs.push((*value).to_string());
                    attrs
                };
                FilterOptionView {
                    value,
                    checked,
                    toggle_url: browse_url(category, browse, sort, &toggled),
                }
            })
            .collect(),
    }
}

/// Build a listing URL preserving everything but the attribute tags,
/// which are replaced with `attrs`.
fn browse_url(category: Category, browse: &BrowseQuery, sort: SortKey, attrs: &[String]) -> String {
    let mut params: Vec<String> = Vec::new();

    if let Some(q) = browse.q.as_deref().filter(|q| !q.is_empty()) {
        params.push(format!("q={}", urlencoding::encode(q)));
    }
    if sort != SortKey::Default {
        params.push(format!("sort={}", sort.as_param()));
    }
    if let Some(min) = browse.min.as_deref().filter(|m| !m.trim().is_empty()) {
        params.push(format!("min={}", urlencoding::encode(min)));
    }
    if let Some(max) = browse.max.as_deref().filter(|m| !m.trim().is_empty()) {
        params.push(format!("max={}", urlencoding::encode(max)));
    }
    if browse.inmediata.is_some() {
        params.push("inmediata=on".to_string());
    }
    if browse.encargo.is_some() {
        params.push("encargo=on".to_string());
    }
    if !attrs.is_empty() {
        params.push(format!("attrs={}", urlencoding::encode(&attrs.join(","))));
    }

    if params.is_empty() {
        format!("/{}", category.slug())
    } else {
        format!("/{}?{}", category.slug(), params.join("&"))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;

    #[test]
    fn test_filter_state_parses_bounds_and_tags() {
        let browse = BrowseQuery {
            min: Some("500.000".to_string()),
            max: Some(" 900000 ".to_string()),
            attrs: Some("Sillones, 3 Cuerpos,".to_string()),
            inmediata: Some("on".to_string()),
            ..BrowseQuery::default()
        };

        let state = browse.filter_state();
        assert_eq!(state.price_min, Some(Decimal::from(500_000)));
        assert_eq!(state.price_max, Some(Decimal::from(900_000)));
        assert_eq!(state.attributes, vec!["Sillones", "3 Cuerpos"]);
        assert!(state.immediate);
        assert!(!state.made_to_order);
    }

    #[test]
    fn test_blank_bounds_are_ignored() {
        let browse = BrowseQuery {
            min: Some("  ".to_string()),
            ..BrowseQuery::default()
        };
        assert_eq!(browse.filter_state().price_min, None);
    }

    #[test]
    fn test_toggle_url_round_trips_state() {
        let browse = BrowseQuery {
            q: Some("mesa".to_string()),
            inmediata: Some("on".to_string()),
            ..BrowseQuery::default()
        };
        let url = browse_url(
            Category::Cocina,
            &browse,
            SortKey::PriceAsc,
            &["Mesas".to_string()],
        );
        assert_eq!(url, "/cocina?q=mesa&sort=price-asc&inmediata=on&attrs=Mesas");
    }

    #[test]
    fn test_bare_url_has_no_query_string() {
        let url = browse_url(Category::Living, &BrowseQuery::default(), SortKey::Default, &[]);
        assert_eq!(url, "/living");
    }
}
