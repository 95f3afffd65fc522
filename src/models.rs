use chrono::{Local, NaiveDate};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

use crate::error::CatalogError;

/// Star rating on the fixed 0..=5 scale
///
/// The ordinal doubles as the value used for aggregation and for the
/// compact encoding in data files. `NotRated` is the default for a
/// product that has no reviews yet.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Rating {
    #[default]
    NotRated,
    OneStar,
    TwoStar,
    ThreeStar,
    FourStar,
    FiveStar,
}

impl Rating {
    /// Display glyph for this rating, e.g. "★★★☆☆"
    pub fn stars(&self) -> &'static str {
        match self {
            Rating::NotRated => "☆☆☆☆☆",
            Rating::OneStar => "★☆☆☆☆",
            Rating::TwoStar => "★★☆☆☆",
            Rating::ThreeStar => "★★★☆☆",
            Rating::FourStar => "★★★★☆",
            Rating::FiveStar => "★★★★★",
        }
    }

    /// Position of this rating within the scale (0..=5)
    pub fn ordinal(&self) -> u8 {
        match self {
            Rating::NotRated => 0,
            Rating::OneStar => 1,
            Rating::TwoStar => 2,
            Rating::ThreeStar => 3,
            Rating::FourStar => 4,
            Rating::FiveStar => 5,
        }
    }

    /// Convert an ordinal back into a `Rating`
    ///
    /// Fails with [`CatalogError::InvalidRating`] when `n` is outside 0..=5.
    pub fn from_ordinal(n: u8) -> Result<Rating, CatalogError> {
        match n {
            0 => Ok(Rating::NotRated),
            1 => Ok(Rating::OneStar),
            2 => Ok(Rating::TwoStar),
            3 => Ok(Rating::ThreeStar),
            4 => Ok(Rating::FourStar),
            5 => Ok(Rating::FiveStar),
            _ => Err(CatalogError::InvalidRating(n)),
        }
    }
}

/// Product kind with kind-specific discount and best-before behaviour
///
/// A closed set of two variants:
/// - `Drink` (non-perishable): always discounted at the flat rate
/// - `Food` (perishable): discounted only on its best-before day
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProductKind {
    Drink,
    Food { best_before: NaiveDate },
}

/// Flat discount rate applied to product prices (10%)
fn discount_rate() -> Decimal {
    Decimal::new(10, 2)
}

/// A catalog entry value
///
/// The identity fields (id, name, price, kind) are immutable after
/// creation; re-rating produces a new value via [`Product::with_rating`].
/// Equality and hashing cover the identity fields only — rating is
/// excluded so a re-rated product still denotes the same catalog entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    id: u32,
    name: String,
    price: Decimal,
    rating: Rating,
    kind: ProductKind,
}

impl Product {
    /// Create a non-perishable product
    pub fn drink(id: u32, name: impl Into<String>, price: Decimal, rating: Rating) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            rating,
            kind: ProductKind::Drink,
        }
    }

    /// Create a perishable product with a best-before date
    pub fn food(
        id: u32,
        name: impl Into<String>,
        price: Decimal,
        rating: Rating,
        best_before: NaiveDate,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            rating,
            kind: ProductKind::Food { best_before },
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Decimal {
        self.price
    }

    pub fn rating(&self) -> Rating {
        self.rating
    }

    pub fn kind(&self) -> &ProductKind {
        &self.kind
    }

    /// Best-before date, present only for the perishable variant
    pub fn best_before(&self) -> Option<NaiveDate> {
        match self.kind {
            ProductKind::Drink => None,
            ProductKind::Food { best_before } => Some(best_before),
        }
    }

    /// Discount evaluated against an explicit date
    ///
    /// Drinks are always discounted at the flat rate; food only when
    /// `today` is exactly its best-before day. Rounded half-up to two
    /// decimal places.
    pub fn discount_on(&self, today: NaiveDate) -> Decimal {
        let applies = match self.kind {
            ProductKind::Drink => true,
            ProductKind::Food { best_before } => best_before == today,
        };
        if applies {
            (self.price * discount_rate())
                .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
        } else {
            Decimal::ZERO
        }
    }

    /// Discount evaluated against the current local date
    pub fn discount(&self) -> Decimal {
        self.discount_on(Local::now().date_naive())
    }

    /// New product value with the same identity fields and a replaced rating
    pub fn with_rating(&self, rating: Rating) -> Product {
        Product {
            rating,
            ..self.clone()
        }
    }
}

// Identity fields only: two values with different ratings are still the
// same catalog entry.
impl PartialEq for Product {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.name == other.name
            && self.price == other.price
            && self.kind == other.kind
    }
}

impl Eq for Product {}

impl Hash for Product {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
        self.name.hash(state);
        self.price.hash(state);
        self.kind.hash(state);
    }
}

/// An immutable review: a rating and a free-text comment
///
/// The comment may be empty but is never absent. Ordered by rating
/// first; reports print reviews highest-rated first.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Review {
    rating: Rating,
    comment: String,
}

impl Review {
    pub fn new(rating: Rating, comment: impl Into<String>) -> Self {
        Self {
            rating,
            comment: comment.into(),
        }
    }

    pub fn rating(&self) -> Rating {
        self.rating
    }

    pub fn comment(&self) -> &str {
        &self.comment
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_rating_ordinal_round_trip() {
        for n in 0..=5u8 {
            let rating = Rating::from_ordinal(n).unwrap();
            assert_eq!(rating.ordinal(), n);
        }
    }

    #[test]
    fn test_rating_from_ordinal_out_of_range() {
        let err = Rating::from_ordinal(6).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidRating(6)));
    }

    #[test]
    fn test_rating_order_follows_ordinal() {
        assert!(Rating::NotRated < Rating::OneStar);
        assert!(Rating::FourStar < Rating::FiveStar);
    }

    #[test]
    fn test_drink_discount_rounds_half_up() {
        let tea = Product::drink(101, "Tea", dec!(1.99), Rating::NotRated);
        // 1.99 * 0.10 = 0.199 -> 0.20
        assert_eq!(tea.discount_on(date(2026, 8, 29)), dec!(0.20));
    }

    #[test]
    fn test_drink_has_no_best_before() {
        let tea = Product::drink(101, "Tea", dec!(1.99), Rating::NotRated);
        assert_eq!(tea.best_before(), None);
    }

    #[test]
    fn test_food_discount_only_on_best_before_day() {
        let today = date(2026, 8, 29);
        let cake = Product::food(103, "Cake", dec!(3.99), Rating::NotRated, today);
        assert_eq!(cake.discount_on(today), dec!(0.40));
        assert_eq!(cake.discount_on(date(2026, 8, 28)), Decimal::ZERO);

        let fresh = Product::food(
            104,
            "Cookie",
            dec!(2.99),
            Rating::NotRated,
            date(2026, 8, 30),
        );
        // best-before is tomorrow: no discount yet
        assert_eq!(fresh.discount_on(today), Decimal::ZERO);
    }

    #[test]
    fn test_with_rating_keeps_identity_fields() {
        let tea = Product::drink(101, "Tea", dec!(1.99), Rating::NotRated);
        let rated = tea.with_rating(Rating::FourStar);
        assert_eq!(rated.id(), 101);
        assert_eq!(rated.name(), "Tea");
        assert_eq!(rated.price(), dec!(1.99));
        assert_eq!(rated.rating(), Rating::FourStar);
        // original value untouched
        assert_eq!(tea.rating(), Rating::NotRated);
    }

    #[test]
    fn test_equality_excludes_rating() {
        let tea = Product::drink(101, "Tea", dec!(1.99), Rating::NotRated);
        let rated = tea.with_rating(Rating::FiveStar);
        assert_eq!(tea, rated);

        let other = Product::drink(101, "Coffee", dec!(1.99), Rating::NotRated);
        assert_ne!(tea, other);
    }

    #[test]
    fn test_food_equality_includes_best_before() {
        let a = Product::food(103, "Cake", dec!(3.99), Rating::NotRated, date(2026, 8, 29));
        let b = Product::food(103, "Cake", dec!(3.99), Rating::NotRated, date(2026, 8, 30));
        assert_ne!(a, b);
    }

    #[test]
    fn test_product_serializes() {
        let tea = Product::drink(101, "Tea", dec!(1.99), Rating::FourStar);
        let json = serde_json::to_string(&tea).unwrap();
        let back: Product = serde_json::from_str(&json).unwrap();
        assert_eq!(back, tea);
        assert_eq!(back.rating(), Rating::FourStar);
    }
}
