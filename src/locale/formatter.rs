use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::locale::bundle::{fill, SupportedLocale, SUPPORTED_TAGS};
use crate::models::{Product, Review};

/// Locale-parameterized renderer for products and reviews
///
/// Holds the active locale selection; switching locales affects
/// subsequent calls only — text already produced is never reformatted.
#[derive(Debug, Clone)]
pub struct ReportFormatter {
    locale: SupportedLocale,
}

impl Default for ReportFormatter {
    fn default() -> Self {
        Self {
            locale: SupportedLocale::EnGb,
        }
    }
}

impl ReportFormatter {
    /// Create a formatter for the given language tag
    ///
    /// Unknown tags silently fall back to the default locale (en-GB).
    pub fn new(tag: &str) -> Self {
        let mut formatter = Self::default();
        formatter.change_locale(tag);
        formatter
    }

    /// Switch the active locale; unknown tags fall back to en-GB
    pub fn change_locale(&mut self, tag: &str) {
        self.locale = match SupportedLocale::from_tag(tag) {
            Some(locale) => locale,
            None => {
                tracing::debug!(tag, "unknown locale tag, falling back to en-GB");
                SupportedLocale::EnGb
            }
        };
    }

    /// Language tag of the active locale
    pub fn locale_tag(&self) -> &'static str {
        self.locale.tag()
    }

    /// Language tags of all registered locales
    pub fn supported_locales() -> &'static [&'static str] {
        SUPPORTED_TAGS
    }

    /// Render a product line: name, money-formatted price, rating glyph,
    /// and the best-before date for perishable products
    pub fn format_product(&self, product: &Product) -> String {
        let bundle = self.locale.bundle();
        let price = self.format_money(product.price());
        let mut line = fill(
            bundle.product,
            &[product.name(), &price, product.rating().stars()],
        );
        if let Some(best_before) = product.best_before() {
            line.push_str(", ");
            line.push_str(&fill(bundle.best_before, &[&self.format_date(best_before)]));
        }
        line
    }

    /// Render a review line: rating glyph and comment
    pub fn format_review(&self, review: &Review) -> String {
        let bundle = self.locale.bundle();
        fill(bundle.review, &[review.rating().stars(), review.comment()])
    }

    /// Localized placeholder for a product with zero reviews
    pub fn no_reviews_text(&self) -> &'static str {
        self.locale.bundle().no_reviews
    }

    /// Format a money amount with the locale's currency symbol and
    /// decimal separator, always to two decimal places
    pub fn format_money(&self, amount: Decimal) -> String {
        let bundle = self.locale.bundle();
        let mut rounded =
            amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        rounded.rescale(2);
        let mut digits = rounded.to_string();
        if bundle.decimal_separator != '.' {
            digits = digits.replace('.', &bundle.decimal_separator.to_string());
        }
        if bundle.symbol_first {
            format!("{}{}", bundle.currency_symbol, digits)
        } else {
            format!("{} {}", digits, bundle.currency_symbol)
        }
    }

    /// Format a date using the locale's short date pattern
    pub fn format_date(&self, date: NaiveDate) -> String {
        date.format(self.locale.bundle().date_format).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Rating;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_money_per_locale() {
        assert_eq!(ReportFormatter::new("en-GB").format_money(dec!(1.99)), "£1.99");
        assert_eq!(ReportFormatter::new("en-US").format_money(dec!(1.99)), "$1.99");
        assert_eq!(ReportFormatter::new("fr-FR").format_money(dec!(1.99)), "1,99 €");
        assert_eq!(ReportFormatter::new("ru-RU").format_money(dec!(1.99)), "1,99 ₽");
        assert_eq!(ReportFormatter::new("zh-CN").format_money(dec!(1.99)), "¥1.99");
    }

    #[test]
    fn test_money_always_two_decimals() {
        let formatter = ReportFormatter::new("en-GB");
        assert_eq!(formatter.format_money(dec!(2)), "£2.00");
        assert_eq!(formatter.format_money(dec!(0.5)), "£0.50");
        // half-up at the third decimal
        assert_eq!(formatter.format_money(dec!(0.199)), "£0.20");
    }

    #[test]
    fn test_date_per_locale() {
        let d = date(2026, 8, 29);
        assert_eq!(ReportFormatter::new("en-GB").format_date(d), "29/08/2026");
        assert_eq!(ReportFormatter::new("en-US").format_date(d), "8/29/26");
        assert_eq!(ReportFormatter::new("ru-RU").format_date(d), "29.08.2026");
        assert_eq!(ReportFormatter::new("zh-CN").format_date(d), "2026/8/29");
    }

    #[test]
    fn test_unknown_tag_falls_back_to_default() {
        let formatter = ReportFormatter::new("de-DE");
        assert_eq!(formatter.locale_tag(), "en-GB");
        assert_eq!(formatter.format_money(dec!(1.00)), "£1.00");
    }

    #[test]
    fn test_format_product_drink() {
        let tea = Product::drink(101, "Tea", dec!(1.99), Rating::FourStar);
        let formatter = ReportFormatter::new("en-GB");
        assert_eq!(
            formatter.format_product(&tea),
            "Product: Tea, Price: £1.99, Rating: ★★★★☆"
        );
    }

    #[test]
    fn test_format_product_food_includes_best_before() {
        let cake = Product::food(
            103,
            "Cake",
            dec!(3.99),
            Rating::FiveStar,
            date(2026, 8, 29),
        );
        let formatter = ReportFormatter::new("en-GB");
        assert_eq!(
            formatter.format_product(&cake),
            "Product: Cake, Price: £3.99, Rating: ★★★★★, Best before: 29/08/2026"
        );
    }

    #[test]
    fn test_format_review() {
        let review = Review::new(Rating::ThreeStar, "Just okay");
        let formatter = ReportFormatter::new("en-GB");
        assert_eq!(formatter.format_review(&review), "Review: ★★★☆☆ Just okay");
    }

    #[test]
    fn test_locale_switch_changes_subsequent_output() {
        let tea = Product::drink(101, "Tea", dec!(1.99), Rating::NotRated);
        let mut formatter = ReportFormatter::new("en-GB");
        let before = formatter.format_product(&tea);
        formatter.change_locale("fr-FR");
        let after = formatter.format_product(&tea);
        assert!(before.contains("£1.99"));
        assert!(after.contains("1,99 €"));
        assert!(after.starts_with("Produit"));
    }

    #[test]
    fn test_no_reviews_text_localized() {
        assert_eq!(ReportFormatter::new("en-GB").no_reviews_text(), "Not reviewed");
        assert_eq!(ReportFormatter::new("fr-FR").no_reviews_text(), "Non évalué");
        assert_eq!(ReportFormatter::new("zh-CN").no_reviews_text(), "暂无评论");
    }
}
