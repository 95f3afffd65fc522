// Example driver for the product catalog
// Loads sample data, records reviews, and prints reports in several
// locales along with the discount summary.

use product_catalog::{load_products, load_reviews, CatalogResult, ProductCatalog};

const PRODUCT_DATA: &str = "\
D,101,Tea,1.99,0,
D,102,Coffee,2.99,0,
F,103,Cake,3.99,0,2026-08-29
F,104,Cookie,2.99,0,2026-08-30
D,105,Hot Chocolate,2.50,0,
";

const REVIEW_DATA: &str = "\
101,4,Nice hot cup of tea
101,2,Rather weak tea
101,4,Fine tea
101,4,Good tea
101,5,Perfect tea
101,3,Just add some lemon
102,5,Rich and strong
103,5,Very nice cake
103,4,It is a good cake
";

fn main() -> CatalogResult<()> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let mut catalog = ProductCatalog::new();

    for product in load_products(PRODUCT_DATA.lines()) {
        match product.best_before() {
            Some(best_before) => catalog.create_food(
                product.id(),
                product.name(),
                product.price(),
                product.rating(),
                best_before,
            ),
            None => catalog.create_drink(
                product.id(),
                product.name(),
                product.price(),
                product.rating(),
            ),
        };
    }

    for (id, review) in load_reviews(REVIEW_DATA.lines()) {
        catalog.review(id, review.rating(), review.comment())?;
    }

    println!("=== Reports ({}) ===", catalog.locale_tag());
    for id in [101, 102, 103, 104, 105] {
        print!("{}", catalog.report(id)?);
        println!();
    }

    catalog.change_locale("fr-FR");
    println!("=== Reports ({}) ===", catalog.locale_tag());
    print!("{}", catalog.report(101)?);
    println!();

    catalog.change_locale("ru-RU");
    println!("=== Reports ({}) ===", catalog.locale_tag());
    print!("{}", catalog.report(103)?);
    println!();

    catalog.change_locale("en-GB");
    println!("=== Discounts by rating ===");
    for (stars, total) in catalog.discounts_by_rating() {
        println!("{stars} {total}");
    }

    let path = catalog.write_report(101)?;
    println!("\nReport written to {}", path.display());

    Ok(())
}
