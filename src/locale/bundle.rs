// Per-locale resource bundle
// A fixed lookup table of template strings and currency/date rules,
// owned by the formatter rather than any process-wide state

use serde::{Deserialize, Serialize};

/// The closed set of locales the catalog can render reports in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SupportedLocale {
    EnGb,
    EnUs,
    FrFr,
    RuRu,
    ZhCn,
}

/// Language tags accepted by [`SupportedLocale::from_tag`]
pub const SUPPORTED_TAGS: &[&str] = &["en-GB", "en-US", "fr-FR", "ru-RU", "zh-CN"];

impl SupportedLocale {
    /// Resolve a BCP 47 language tag; `None` for anything outside the
    /// registered set
    pub fn from_tag(tag: &str) -> Option<SupportedLocale> {
        match tag {
            "en-GB" => Some(SupportedLocale::EnGb),
            "en-US" => Some(SupportedLocale::EnUs),
            "fr-FR" => Some(SupportedLocale::FrFr),
            "ru-RU" => Some(SupportedLocale::RuRu),
            "zh-CN" => Some(SupportedLocale::ZhCn),
            _ => None,
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            SupportedLocale::EnGb => "en-GB",
            SupportedLocale::EnUs => "en-US",
            SupportedLocale::FrFr => "fr-FR",
            SupportedLocale::RuRu => "ru-RU",
            SupportedLocale::ZhCn => "zh-CN",
        }
    }

    /// Resource bundle for this locale
    pub fn bundle(&self) -> &'static LocaleBundle {
        match self {
            SupportedLocale::EnGb => &EN_GB,
            SupportedLocale::EnUs => &EN_US,
            SupportedLocale::FrFr => &FR_FR,
            SupportedLocale::RuRu => &RU_RU,
            SupportedLocale::ZhCn => &ZH_CN,
        }
    }
}

/// Localized template strings plus currency and date formatting rules
///
/// Templates use positional substitution: `{0}`, `{1}`, ... are replaced
/// in order by the formatter.
#[derive(Debug)]
pub struct LocaleBundle {
    /// Template for a product line: name, price, rating glyph
    pub product: &'static str,
    /// Template for the best-before suffix on perishable products
    pub best_before: &'static str,
    /// Template for a review line: rating glyph, comment
    pub review: &'static str,
    /// Placeholder when a product has no reviews
    pub no_reviews: &'static str,
    /// Currency symbol
    pub currency_symbol: &'static str,
    /// Whether the symbol precedes the amount ("£1.99") or follows it ("1,99 €")
    pub symbol_first: bool,
    /// Decimal separator used in money amounts
    pub decimal_separator: char,
    /// chrono format pattern for short dates
    pub date_format: &'static str,
}

static EN_GB: LocaleBundle = LocaleBundle {
    product: "Product: {0}, Price: {1}, Rating: {2}",
    best_before: "Best before: {0}",
    review: "Review: {0} {1}",
    no_reviews: "Not reviewed",
    currency_symbol: "£",
    symbol_first: true,
    decimal_separator: '.',
    date_format: "%d/%m/%Y",
};

static EN_US: LocaleBundle = LocaleBundle {
    product: "Product: {0}, Price: {1}, Rating: {2}",
    best_before: "Best before: {0}",
    review: "Review: {0} {1}",
    no_reviews: "Not reviewed",
    currency_symbol: "$",
    symbol_first: true,
    decimal_separator: '.',
    date_format: "%-m/%-d/%y",
};

static FR_FR: LocaleBundle = LocaleBundle {
    product: "Produit : {0}, Prix : {1}, Évaluation : {2}",
    best_before: "À consommer avant : {0}",
    review: "Avis : {0} {1}",
    no_reviews: "Non évalué",
    currency_symbol: "€",
    symbol_first: false,
    decimal_separator: ',',
    date_format: "%d/%m/%Y",
};

static RU_RU: LocaleBundle = LocaleBundle {
    product: "Товар: {0}, Цена: {1}, Рейтинг: {2}",
    best_before: "Годен до: {0}",
    review: "Отзыв: {0} {1}",
    no_reviews: "Нет отзывов",
    currency_symbol: "₽",
    symbol_first: false,
    decimal_separator: ',',
    date_format: "%d.%m.%Y",
};

static ZH_CN: LocaleBundle = LocaleBundle {
    product: "产品：{0}，价格：{1}，评分：{2}",
    best_before: "保质期至：{0}",
    review: "评论：{0} {1}",
    no_reviews: "暂无评论",
    currency_symbol: "¥",
    symbol_first: true,
    decimal_separator: '.',
    date_format: "%Y/%-m/%-d",
};

/// Fill a positional template: `{0}`, `{1}`, ... replaced by `args` in order
pub(crate) fn fill(template: &str, args: &[&str]) -> String {
    let mut out = template.to_string();
    for (i, arg) in args.iter().enumerate() {
        out = out.replace(&format!("{{{i}}}"), arg);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_tag_known() {
        assert_eq!(SupportedLocale::from_tag("fr-FR"), Some(SupportedLocale::FrFr));
        assert_eq!(SupportedLocale::from_tag("en-GB"), Some(SupportedLocale::EnGb));
    }

    #[test]
    fn test_from_tag_unknown() {
        assert_eq!(SupportedLocale::from_tag("de-DE"), None);
        assert_eq!(SupportedLocale::from_tag(""), None);
    }

    #[test]
    fn test_tag_round_trip() {
        for tag in SUPPORTED_TAGS {
            let locale = SupportedLocale::from_tag(tag).unwrap();
            assert_eq!(locale.tag(), *tag);
        }
    }

    #[test]
    fn test_fill_positional() {
        assert_eq!(fill("{0} and {1}", &["a", "b"]), "a and b");
        assert_eq!(fill("{1} before {0}", &["a", "b"]), "b before a");
        // unused args are harmless
        assert_eq!(fill("just {0}", &["a", "b"]), "just a");
    }
}
