//! Nordic Home Core - Domain logic library.
//!
//! This crate holds the storefront's business logic, independent of any web
//! framework or storage backend:
//! - price string parsing and es-AR display formatting
//! - catalog filtering and sorting
//! - the shopping cart collection
//! - checkout pricing (cash discount, installment surcharge)
//! - card brand detection and expiry validation
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no HTTP,
//! no sessions. Everything here is a total function over its inputs; the only
//! fallible operation in the system (loading a persisted cart) lives in the
//! storefront crate.
//!
//! # Modules
//!
//! - [`price`] - Currency string parsing/formatting
//! - [`product`] - Catalog record types
//! - [`filter`] - Catalog filter predicates
//! - [`sort`] - Catalog ordering
//! - [`cart`] - Line items and cart operations
//! - [`checkout`] - Payment options and order pricing
//! - [`card`] - Card brand detection and expiry validation

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod card;
pub mod cart;
pub mod checkout;
pub mod filter;
pub mod price;
pub mod product;
pub mod sort;

pub use card::{
    CardBrand, CardNumberError, CvvError, ExpiryError, validate_cvv, validate_expiry,
    validate_number,
};
pub use cart::{Cart, CartLine};
pub use checkout::{
    DeliveryOption, Installments, OrderPricing, PaymentMethod, PricingConfig, ShippingCarrier,
};
pub use filter::{FilterState, filter_products, normalize};
pub use price::{format_amount, parse_amount};
pub use product::{Availability, Category, PriceLabel, Product};
pub use sort::{SortKey, sort_products};
