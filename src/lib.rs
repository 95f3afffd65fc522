//! In-memory product catalog with reviews, aggregate ratings, and
//! locale-formatted text reports.
//!
//! The catalog holds perishable and non-perishable products, records
//! star-rated reviews against them, recomputes each product's aggregate
//! rating on every new review, and renders reports through a fixed set
//! of locales. Single-process, single-threaded, no persistence.

pub mod catalog;
pub mod decode;
pub mod error;
pub mod locale;
pub mod models;
pub mod validation;

pub use catalog::{average_rating, CatalogConfig, ProductCatalog};
pub use decode::{load_products, load_reviews, parse_product, parse_review, DecodeError};
pub use error::{CatalogError, CatalogResult};
pub use locale::{ReportFormatter, SupportedLocale};
pub use models::{Product, ProductKind, Rating, Review};
