use std::cmp::Ordering;
use std::collections::{hash_map::Entry, BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::catalog::rating_calculator::average_rating;
use crate::error::{CatalogError, CatalogResult};
use crate::locale::ReportFormatter;
use crate::models::{Product, Rating, Review};

/// Configuration for a [`ProductCatalog`]
///
/// Passed in explicitly at construction; the catalog holds no global
/// state.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Language tag for report rendering; unknown tags fall back to en-GB
    pub locale_tag: String,
    /// Directory that `write_report` places report files in
    pub reports_dir: PathBuf,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            locale_tag: "en-GB".to_string(),
            reports_dir: PathBuf::from("reports"),
        }
    }
}

/// A product together with its recorded reviews
///
/// Every stored entry has a review sequence, possibly empty.
#[derive(Debug, Clone)]
struct CatalogEntry {
    product: Product,
    reviews: Vec<Review>,
}

/// In-memory catalog store
///
/// Owns the mapping from product identity to review history, keyed
/// internally by id. Re-rating a product updates the stored value in
/// place, so there is never a transient duplicate entry for an
/// identity.
#[derive(Debug)]
pub struct ProductCatalog {
    entries: HashMap<u32, CatalogEntry>,
    formatter: ReportFormatter,
    reports_dir: PathBuf,
}

impl Default for ProductCatalog {
    fn default() -> Self {
        Self::with_config(CatalogConfig::default())
    }
}

impl ProductCatalog {
    /// Catalog with default configuration (en-GB, `reports/`)
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: CatalogConfig) -> Self {
        Self {
            entries: HashMap::new(),
            formatter: ReportFormatter::new(&config.locale_tag),
            reports_dir: config.reports_dir,
        }
    }

    /// Switch the locale used by subsequent report rendering
    ///
    /// Unknown tags silently fall back to en-GB. Stored products and
    /// reviews are not affected.
    pub fn change_locale(&mut self, tag: &str) {
        self.formatter.change_locale(tag);
    }

    /// Language tag of the active report locale
    pub fn locale_tag(&self) -> &'static str {
        self.formatter.locale_tag()
    }

    /// Language tags of all registered locales
    pub fn supported_locales() -> &'static [&'static str] {
        ReportFormatter::supported_locales()
    }

    /// Create a non-perishable product
    ///
    /// Idempotent: when an entry with this id already exists it is kept
    /// unchanged, review history included, and returned as-is.
    pub fn create_drink(
        &mut self,
        id: u32,
        name: impl Into<String>,
        price: Decimal,
        rating: Rating,
    ) -> Product {
        self.insert(Product::drink(id, name, price, rating))
    }

    /// Create a perishable product with a best-before date
    ///
    /// Idempotent in the same way as [`create_drink`](Self::create_drink).
    pub fn create_food(
        &mut self,
        id: u32,
        name: impl Into<String>,
        price: Decimal,
        rating: Rating,
        best_before: NaiveDate,
    ) -> Product {
        self.insert(Product::food(id, name, price, rating, best_before))
    }

    fn insert(&mut self, product: Product) -> Product {
        match self.entries.entry(product.id()) {
            Entry::Occupied(existing) => existing.get().product.clone(),
            Entry::Vacant(slot) => {
                tracing::info!(id = product.id(), name = product.name(), "product created");
                slot.insert(CatalogEntry {
                    product: product.clone(),
                    reviews: Vec::new(),
                });
                product
            }
        }
    }

    /// Look up a product by id alone
    pub fn find(&self, id: u32) -> CatalogResult<&Product> {
        self.entries
            .get(&id)
            .map(|entry| &entry.product)
            .ok_or(CatalogError::NotFound(id))
    }

    /// Review sequence recorded for a product, in insertion order
    pub fn reviews(&self, id: u32) -> CatalogResult<&[Review]> {
        self.entries
            .get(&id)
            .map(|entry| entry.reviews.as_slice())
            .ok_or(CatalogError::NotFound(id))
    }

    /// Record a review and recompute the product's aggregate rating
    ///
    /// Appends the review, recomputes the aggregate over the full
    /// sequence, and replaces the stored product with a re-rated value
    /// in the same step. Returns the new product value.
    pub fn review(
        &mut self,
        id: u32,
        rating: Rating,
        comment: impl Into<String>,
    ) -> CatalogResult<Product> {
        let entry = self.entries.get_mut(&id).ok_or(CatalogError::NotFound(id))?;
        entry.reviews.push(Review::new(rating, comment));
        let aggregate = average_rating(&entry.reviews);
        entry.product = entry.product.with_rating(aggregate);
        tracing::info!(
            id,
            rating = rating.ordinal(),
            aggregate = aggregate.ordinal(),
            "review recorded"
        );
        Ok(entry.product.clone())
    }

    /// Render the report for a product: the product line followed by its
    /// reviews sorted by rating, highest first, or the localized
    /// no-reviews placeholder
    pub fn report(&self, id: u32) -> CatalogResult<String> {
        let entry = self.entries.get(&id).ok_or(CatalogError::NotFound(id))?;
        let mut out = String::new();
        out.push_str(&self.formatter.format_product(&entry.product));
        out.push('\n');
        if entry.reviews.is_empty() {
            out.push_str(self.formatter.no_reviews_text());
            out.push('\n');
        } else {
            let mut sorted = entry.reviews.clone();
            // stable sort: ties keep insertion order
            sorted.sort_by(|a, b| b.rating().cmp(&a.rating()));
            for review in &sorted {
                out.push_str(&self.formatter.format_review(review));
                out.push('\n');
            }
        }
        Ok(out)
    }

    /// Render the report and write it to `<reports_dir>/product_<id>.txt`
    ///
    /// Returns the path written. I/O failure surfaces as
    /// [`CatalogError::Report`].
    pub fn write_report(&self, id: u32) -> CatalogResult<PathBuf> {
        let text = self.report(id)?;
        fs::create_dir_all(&self.reports_dir)?;
        let path = self.reports_dir.join(format!("product_{id}.txt"));
        fs::write(&path, text)?;
        tracing::info!(id, path = %path.display(), "report written");
        Ok(path)
    }

    /// Directory report files are written to
    pub fn reports_dir(&self) -> &Path {
        &self.reports_dir
    }

    /// Filtered, sorted view over the full catalog; purely a read
    pub fn products_matching<F, S>(&self, filter: F, sorter: S) -> Vec<Product>
    where
        F: Fn(&Product) -> bool,
        S: Fn(&Product, &Product) -> Ordering,
    {
        let mut products: Vec<Product> = self
            .entries
            .values()
            .map(|entry| entry.product.clone())
            .filter(|product| filter(product))
            .collect();
        products.sort_by(|a, b| sorter(a, b));
        products
    }

    /// Group current products by rating glyph and sum each group's
    /// discount, formatted through the active locale's money formatter
    pub fn discounts_by_rating(&self) -> BTreeMap<&'static str, String> {
        let mut totals: BTreeMap<&'static str, Decimal> = BTreeMap::new();
        for entry in self.entries.values() {
            *totals
                .entry(entry.product.rating().stars())
                .or_insert(Decimal::ZERO) += entry.product.discount();
        }
        totals
            .into_iter()
            .map(|(stars, total)| (stars, self.formatter.format_money(total)))
            .collect()
    }

    /// Number of catalog entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
