// Flat-file line decoder
// Turns delimited data lines into products and reviews. Decode failure
// never reaches the store: batch loading skips malformed lines
// independently.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;
use validator::Validate;

use crate::error::CatalogError;
use crate::models::{Product, Rating, Review};

/// Decode failures for a single data line
#[derive(Debug, Error)]
pub enum DecodeError {
    /// Wrong number of comma-separated fields
    #[error("expected {expected} fields, got {actual}")]
    FieldCount { expected: usize, actual: usize },

    /// Variant tag other than `D` or `F`
    #[error("unknown product variant `{0}`")]
    UnknownVariant(String),

    /// Perishable product line without a best-before date
    #[error("food line is missing a best-before date")]
    MissingBestBefore,

    /// Malformed integer field
    #[error("malformed number: {0}")]
    InvalidNumber(#[from] std::num::ParseIntError),

    /// Malformed price field
    #[error("malformed price: {0}")]
    InvalidPrice(#[from] rust_decimal::Error),

    /// Malformed best-before date field
    #[error("malformed date: {0}")]
    InvalidDate(#[from] chrono::ParseError),

    /// Rating ordinal outside the defined range
    #[error(transparent)]
    Rating(#[from] CatalogError),

    /// Record failed field validation
    #[error("invalid record: {0}")]
    Invalid(#[from] validator::ValidationErrors),
}

/// Decoded product line before conversion into a domain value
///
/// Line format: `variant,id,name,price,discount-ignored,bestBeforeOrEmpty`
/// with variant `D` (drink) or `F` (food). The discount field is carried
/// by the format but ignored; discounts are always derived from price.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ProductRecord {
    #[validate(custom = "crate::validation::validate_variant_tag")]
    pub variant: String,
    pub id: u32,
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    #[validate(custom = "crate::validation::validate_price")]
    pub price: Decimal,
    pub best_before: Option<NaiveDate>,
}

impl ProductRecord {
    /// Validate and convert into a product with rating `NotRated`
    pub fn into_product(self) -> Result<Product, DecodeError> {
        self.validate()?;
        match self.variant.as_str() {
            "D" => Ok(Product::drink(self.id, self.name, self.price, Rating::NotRated)),
            "F" => {
                let best_before = self.best_before.ok_or(DecodeError::MissingBestBefore)?;
                Ok(Product::food(
                    self.id,
                    self.name,
                    self.price,
                    Rating::NotRated,
                    best_before,
                ))
            }
            other => Err(DecodeError::UnknownVariant(other.to_string())),
        }
    }
}

/// Decoded review line before conversion into a domain value
///
/// Line format: `id,ratingOrdinal,comment`; the comment is free text and
/// may itself contain commas.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ReviewRecord {
    pub product_id: u32,
    pub rating: u8,
    #[validate(length(max = 1000, message = "comment must not exceed 1000 characters"))]
    pub comment: String,
}

impl ReviewRecord {
    /// Validate and convert into the target product id and a review
    pub fn into_review(self) -> Result<(u32, Review), DecodeError> {
        self.validate()?;
        let rating = Rating::from_ordinal(self.rating)?;
        Ok((self.product_id, Review::new(rating, self.comment)))
    }
}

/// Parse one product line
pub fn parse_product(line: &str) -> Result<Product, DecodeError> {
    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() != 6 {
        return Err(DecodeError::FieldCount {
            expected: 6,
            actual: fields.len(),
        });
    }
    let best_before = match fields[5].trim() {
        "" => None,
        text => Some(text.parse::<NaiveDate>()?),
    };
    let record = ProductRecord {
        variant: fields[0].trim().to_string(),
        id: fields[1].trim().parse()?,
        name: fields[2].trim().to_string(),
        price: fields[3].trim().parse::<Decimal>()?,
        best_before,
    };
    record.into_product()
}

/// Parse one review line into the target product id and the review
pub fn parse_review(line: &str) -> Result<(u32, Review), DecodeError> {
    let fields: Vec<&str> = line.splitn(3, ',').collect();
    if fields.len() != 3 {
        return Err(DecodeError::FieldCount {
            expected: 3,
            actual: fields.len(),
        });
    }
    let record = ReviewRecord {
        product_id: fields[0].trim().parse()?,
        rating: fields[1].trim().parse()?,
        comment: fields[2].trim().to_string(),
    };
    record.into_review()
}

/// Parse a batch of product lines, skipping malformed ones
///
/// Blank lines are ignored; every other failure is logged and the line
/// dropped, so one bad line never aborts the batch.
pub fn load_products<'a>(lines: impl IntoIterator<Item = &'a str>) -> Vec<Product> {
    lines
        .into_iter()
        .filter(|line| !line.trim().is_empty())
        .filter_map(|line| match parse_product(line) {
            Ok(product) => Some(product),
            Err(err) => {
                tracing::warn!(%err, line, "skipping malformed product line");
                None
            }
        })
        .collect()
}

/// Parse a batch of review lines, skipping malformed ones
pub fn load_reviews<'a>(lines: impl IntoIterator<Item = &'a str>) -> Vec<(u32, Review)> {
    lines
        .into_iter()
        .filter(|line| !line.trim().is_empty())
        .filter_map(|line| match parse_review(line) {
            Ok(review) => Some(review),
            Err(err) => {
                tracing::warn!(%err, line, "skipping malformed review line");
                None
            }
        })
        .collect()
}
