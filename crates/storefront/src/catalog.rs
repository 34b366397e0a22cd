//! Compiled-in product catalog and category filter vocabulary.
//!
//! The catalog is a fixed list of records; there is no database behind the
//! storefront. Category pages slice it by [`Category`], and the filter
//! panel is driven by [`filter_groups`], the per-category attribute
//! vocabulary.

use nordic_home_core::{Availability, Category, PriceLabel, Product};

/// A titled group of attribute tags for the filter panel.
#[derive(Debug, Clone, Copy)]
pub struct FilterGroup {
    pub title: &'static str,
    pub values: &'static [&'static str],
}

/// Attribute filter groups for a category, in panel order.
#[must_use]
pub const fn filter_groups(category: Category) -> &'static [FilterGroup] {
    match category {
        Category::Living => &[
            FilterGroup {
                title: "Tipo de Mueble",
                values: &["Sillones", "Mesas Ratonas", "Muebles de TV", "Poltronas"],
            },
            FilterGroup {
                title: "Tamaño del Sofá",
                values: &["2 Cuerpos", "3 Cuerpos", "Esquinero / L"],
            },
            FilterGroup {
                title: "Material / Tela",
                values: &[
                    "Pana (Antimanchas)",
                    "Lino (Fresco/Nórdico)",
                    "Cuero Ecológico",
                ],
            },
        ],
        Category::Cocina => &[
            FilterGroup {
                title: "Tipo de Mueble",
                values: &["Mesas", "Sillas", "Vajilleros", "Barras"],
            },
            FilterGroup {
                title: "Forma de la Mesa",
                values: &[
                    "Rectangular",
                    "Redonda (Muy buscada para dptos chicos)",
                    "Cuadrada",
                ],
            },
            FilterGroup {
                title: "Material",
                values: &[
                    "Madera Maciza (Petiribí/Paraíso)",
                    "Laqueado",
                    "Melamina (Económico)",
                ],
            },
        ],
        Category::Dormitorio => &[
            FilterGroup {
                title: "Tipo de Mueble",
                values: &["Camas", "Respaldos", "Mesas de Luz", "Cómodas"],
            },
            FilterGroup {
                title: "Medida de la Cama",
                values: &[
                    "1 Plaza",
                    "2 Plazas (1.40)",
                    "Queen (1.60)",
                    "King (1.80+)",
                ],
            },
            FilterGroup {
                title: "Funcionalidad",
                values: &[
                    "Con Cajones (Espacio de guardado)",
                    "Con Patas (Visualmente liviano)",
                ],
            },
        ],
    }
}

/// Hero copy for a category listing page.
#[must_use]
pub const fn category_tagline(category: Category) -> &'static str {
    match category {
        Category::Living => {
            "Sillones, mesas ratonas y muebles de TV de diseño nórdico para renovar tu living"
        }
        Category::Cocina => {
            "Diseña una cocina moderna y funcional con nuestros muebles y accesorios de alta calidad"
        }
        Category::Dormitorio => {
            "Camas, respaldos y mesas de luz pensados para un descanso cálido y minimalista"
        }
    }
}

/// Look a product up by its slug.
#[must_use]
pub fn product_by_slug(slug: &str) -> Option<&'static Product> {
    PRODUCTS.iter().find(|p| p.slug == slug)
}

/// The full catalog, in merchandising order.
pub static PRODUCTS: &[Product] = &[
    Product {
        slug: "sillon-copenhague-3-cuerpos",
        name: "Sillón Copenhague 3 Cuerpos",
        category: Category::Living,
        price: "$1.250.000",
        cash_price: Some("$1.062.500"),
        price_label: None,
        last_units: false,
        image: "/static/img/sillon-copenhague-3-cuerpos.jpg",
        availability: Availability::Immediate,
        attributes: &["Sillones", "3 Cuerpos", "Pana (Antimanchas)"],
        description: "Sillón de 3 cuerpos tapizado en pana antimanchas, con patas de madera maciza y almohadones desmontables. El clásico de nuestro showroom.",
    },
    Product {
        slug: "sillon-malmo-2-cuerpos",
        name: "Sillón Malmö 2 Cuerpos",
        category: Category::Living,
        price: "$890.000",
        cash_price: None,
        price_label: None,
        last_units: false,
        image: "/static/img/sillon-malmo-2-cuerpos.jpg",
        availability: Availability::MadeToOrder,
        attributes: &["Sillones", "2 Cuerpos", "Lino (Fresco/Nórdico)"],
        description: "Sillón compacto de 2 cuerpos en lino natural, ideal para departamentos. Se fabrica a pedido en el color que elijas.",
    },
    Product {
        slug: "esquinero-aarhus",
        name: "Esquinero Århus",
        category: Category::Living,
        price: "$1.680.000",
        cash_price: Some("$1.428.000"),
        price_label: Some(PriceLabel::Oportunidad),
        last_units: true,
        image: "/static/img/esquinero-aarhus.jpg",
        availability: Availability::Immediate,
        attributes: &["Sillones", "Esquinero / L", "Cuero Ecológico"],
        description: "Esquinero en L tapizado en cuero ecológico, con chaise longue reversible. Última tanda de esta línea.",
    },
    Product {
        slug: "mesa-ratona-fiordo",
        name: "Mesa Ratona Fiordo",
        category: Category::Living,
        price: "$320.000",
        cash_price: Some("$272.000"),
        price_label: None,
        last_units: false,
        image: "/static/img/mesa-ratona-fiordo.jpg",
        availability: Availability::Immediate,
        attributes: &["Mesas Ratonas"],
        description: "Mesa ratona de petiribí con tapa flotante y estante inferior. Terminación al agua.",
    },
    Product {
        slug: "mueble-tv-bergen",
        name: "Mueble de TV Bergen",
        category: Category::Living,
        price: "$540.000",
        cash_price: None,
        price_label: Some(PriceLabel::Credito),
        last_units: false,
        image: "/static/img/mueble-tv-bergen.jpg",
        availability: Availability::MadeToOrder,
        attributes: &["Muebles de TV"],
        description: "Rack bajo para TV de hasta 65\", con dos módulos de puertas con cierre suave y pasacables oculto.",
    },
    Product {
        slug: "poltrona-lund",
        name: "Poltrona Lund",
        category: Category::Living,
        price: "$460.000",
        cash_price: Some("$391.000"),
        price_label: None,
        last_units: false,
        image: "/static/img/poltrona-lund.jpg",
        availability: Availability::Immediate,
        attributes: &["Poltronas", "Lino (Fresco/Nórdico)"],
        description: "Poltrona de lectura con respaldo alto y butaca giratoria, tapizada en lino nórdico.",
    },
    Product {
        slug: "mesa-comedor-oslo",
        name: "Mesa Comedor Oslo",
        category: Category::Cocina,
        price: "$980.000",
        cash_price: Some("$833.000"),
        price_label: None,
        last_units: false,
        image: "/static/img/mesa-comedor-oslo.jpg",
        availability: Availability::Immediate,
        attributes: &["Mesas", "Rectangular", "Madera Maciza (Petiribí/Paraíso)"],
        description: "Mesa de comedor rectangular de paraíso macizo para 6 personas, con canto redondeado y patas torneadas.",
    },
    Product {
        slug: "mesa-redonda-aalborg",
        name: "Mesa Redonda Aalborg",
        category: Category::Cocina,
        price: "$720.000",
        cash_price: None,
        price_label: None,
        last_units: false,
        image: "/static/img/mesa-redonda-aalborg.jpg",
        availability: Availability::MadeToOrder,
        attributes: &["Mesas", "Redonda (Muy buscada para dptos chicos)", "Laqueado"],
        description: "Mesa redonda laqueada de 1,10 m, pensada para departamentos chicos. Se fabrica a pedido en blanco o tiza.",
    },
    Product {
        slug: "silla-estocolmo-x2",
        name: "Silla Estocolmo (x2)",
        category: Category::Cocina,
        price: "$290.000",
        cash_price: Some("$246.500"),
        price_label: None,
        last_units: false,
        image: "/static/img/silla-estocolmo-x2.jpg",
        availability: Availability::Immediate,
        attributes: &["Sillas", "Madera Maciza (Petiribí/Paraíso)"],
        description: "Set de dos sillas de guatambú con asiento tapizado. Encastre reforzado, sin tornillos a la vista.",
    },
    Product {
        slug: "vajillero-gotemburgo",
        name: "Vajillero Gotemburgo",
        category: Category::Cocina,
        price: "$860.000",
        cash_price: Some("$731.000"),
        price_label: Some(PriceLabel::Oportunidad),
        last_units: true,
        image: "/static/img/vajillero-gotemburgo.jpg",
        availability: Availability::Immediate,
        attributes: &["Vajilleros", "Melamina (Económico)"],
        description: "Vajillero de dos puertas corredizas en melamina símil roble. Quedan las últimas unidades de exposición.",
    },
    Product {
        slug: "barra-desayunadora-umea",
        name: "Barra Desayunadora Umeå",
        category: Category::Cocina,
        price: "$410.000",
        cash_price: None,
        price_label: Some(PriceLabel::Credito),
        last_units: false,
        image: "/static/img/barra-desayunadora-umea.jpg",
        availability: Availability::MadeToOrder,
        attributes: &["Barras", "Laqueado"],
        description: "Barra desayunadora laqueada con estante inferior y apoyapiés de hierro pintado.",
    },
    Product {
        slug: "cama-helsinki-queen",
        name: "Cama Helsinki Queen",
        category: Category::Dormitorio,
        price: "$1.150.000",
        cash_price: Some("$977.500"),
        price_label: None,
        last_units: false,
        image: "/static/img/cama-helsinki-queen.jpg",
        availability: Availability::Immediate,
        attributes: &["Camas", "Queen (1.60)", "Con Patas (Visualmente liviano)"],
        description: "Cama queen de líneas rectas con patas altas de madera clara, para un dormitorio visualmente liviano.",
    },
    Product {
        slug: "cama-tromso-2-plazas",
        name: "Cama Tromsø 2 Plazas con Cajones",
        category: Category::Dormitorio,
        price: "$1.320.000",
        cash_price: Some("$1.122.000"),
        price_label: None,
        last_units: false,
        image: "/static/img/cama-tromso-2-plazas.jpg",
        availability: Availability::MadeToOrder,
        attributes: &["Camas", "2 Plazas (1.40)", "Con Cajones (Espacio de guardado)"],
        description: "Cama de 2 plazas con cuatro cajones de guardado bajo el colchón. Se fabrica a pedido, demora 30-45 días.",
    },
    Product {
        slug: "respaldo-laponia-king",
        name: "Respaldo Laponia King",
        category: Category::Dormitorio,
        price: "$520.000",
        cash_price: None,
        price_label: None,
        last_units: false,
        image: "/static/img/respaldo-laponia-king.jpg",
        availability: Availability::MadeToOrder,
        attributes: &["Respaldos", "King (1.80+)"],
        description: "Respaldo tapizado en pana con costuras verticales, para camas king de 1,80 m o más.",
    },
    Product {
        slug: "mesa-de-luz-nordkapp",
        name: "Mesa de Luz Nordkapp",
        category: Category::Dormitorio,
        price: "$240.000",
        cash_price: Some("$204.000"),
        price_label: None,
        last_units: false,
        image: "/static/img/mesa-de-luz-nordkapp.jpg",
        availability: Availability::Immediate,
        attributes: &["Mesas de Luz", "Con Cajones (Espacio de guardado)"],
        description: "Mesa de luz de un cajón con frente sin tiradores y patas compás.",
    },
    Product {
        slug: "comoda-uppsala",
        name: "Cómoda Uppsala",
        category: Category::Dormitorio,
        price: "$690.000",
        cash_price: Some("$586.500"),
        price_label: Some(PriceLabel::Oportunidad),
        last_units: true,
        image: "/static/img/comoda-uppsala.jpg",
        availability: Availability::Immediate,
        attributes: &["Cómodas", "Con Cajones (Espacio de guardado)"],
        description: "Cómoda de cinco cajones con correderas metálicas. Últimas unidades del color nogal.",
    },
];

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_slugs_are_unique() {
        let slugs: HashSet<_> = PRODUCTS.iter().map(|p| p.slug).collect();
        assert_eq!(slugs.len(), PRODUCTS.len());
    }

    #[test]
    fn test_every_category_has_products() {
        for category in [Category::Living, Category::Cocina, Category::Dormitorio] {
            assert!(PRODUCTS.iter().any(|p| p.category == category));
        }
    }

    #[test]
    fn test_attributes_come_from_the_category_vocabulary() {
        for product in PRODUCTS {
            let groups = filter_groups(product.category);
            for attr in product.attributes {
                assert!(
                    groups.iter().any(|g| g.values.contains(attr)),
                    "{} carries unknown tag {attr:?}",
                    product.slug
                );
            }
        }
    }

    #[test]
    fn test_product_by_slug() {
        assert!(product_by_slug("mesa-comedor-oslo").is_some());
        assert!(product_by_slug("no-such-product").is_none());
    }
}
