#![allow(dead_code)]

use product_manager::{Category, CreateProductRequest, FixedClock, Locale, ProductManager};
use time::{macros::date, Date};

pub const TODAY: Date = date!(2024 - 06 - 15);

/// Manager whose "today" is [`TODAY`].
pub fn manager() -> ProductManager<FixedClock> {
    ProductManager::new(FixedClock(TODAY), Locale::Vi)
}

pub fn manager_with_locale(locale: Locale) -> ProductManager<FixedClock> {
    ProductManager::new(FixedClock(TODAY), locale)
}

/// A draft that passes every check.
pub fn valid_draft(code: &str, name: &str, category: Category) -> CreateProductRequest {
    CreateProductRequest {
        code: code.to_string(),
        name: name.to_string(),
        category,
        quantity: "10".to_string(),
        price: "5.5".to_string(),
        intake_date: "2024-01-01".to_string(),
    }
}

/// Manager pre-filled with three products, one per category.
pub fn seeded_manager() -> ProductManager<FixedClock> {
    let mut mgr = manager();
    for draft in [
        valid_draft("PROD-0001", "Vitamin C", Category::Pharmaceutical),
        valid_draft("PROD-0002", "Blood Pressure Monitor", Category::MedicalDevice),
        valid_draft("PROD-0003", "Omega 3 Fish Oil", Category::FunctionalFood),
    ] {
        mgr.submit(draft).expect("seed product should be valid");
    }
    mgr
}
