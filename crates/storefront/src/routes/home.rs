//! Home page route handler.

use askama::Template;
use askama_web::WebTemplate;

use nordic_home_core::Category;

use crate::catalog;
use crate::filters;
use crate::routes::products::ProductCardView;

/// A tile in the category grid.
pub struct CategoryCard {
    pub slug: &'static str,
    pub title: &'static str,
    pub tagline: &'static str,
}

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home/index.html")]
pub struct HomeTemplate {
    pub categories: Vec<CategoryCard>,
    pub featured: Vec<ProductCardView>,
}

/// Display home page.
pub async fn home() -> HomeTemplate {
    let categories = [Category::Living, Category::Cocina, Category::Dormitorio]
        .into_iter()
        .map(|category| CategoryCard {
            slug: category.slug(),
            title: category.title(),
            tagline: catalog::category_tagline(category),
        })
        .collect();

    // Lead with the scarce-stock offers, then fill from the top of the
    // catalog.
    let mut featured: Vec<&_> = catalog::PRODUCTS.iter().filter(|p| p.last_units).collect();
    for product in catalog::PRODUCTS {
        if featured.len() >= 4 {
            break;
        }
        if !featured.contains(&product) {
            featured.push(product);
        }
    }

    HomeTemplate {
        categories,
        featured: featured.into_iter().map(ProductCardView::from).collect(),
    }
}
