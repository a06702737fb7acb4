use chrono::NaiveDate;

use crate::evaluation::{
    Capability, ContactInfo, CostModel, EvaluationCriteria, PerformanceRating, Region, Supplier,
};

pub(super) fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

pub(super) fn rating(quality: f64, timeliness: f64, communication: f64) -> PerformanceRating {
    PerformanceRating::new(
        date(2023, 1, 1),
        date(2023, 12, 31),
        quality,
        timeliness,
        communication,
    )
    .expect("valid rating")
}

pub(super) fn bare_supplier(name: &str) -> Supplier {
    let email = format!("contact@{}.com", name.replace(' ', "").to_lowercase());
    Supplier::new(name, ContactInfo::new(email).expect("valid email")).expect("valid supplier")
}

/// CNC + injection molding shop in California quoting 100 USD per widget, rated 9.0.
pub(super) fn machining_supplier() -> Supplier {
    bare_supplier("Test Supplier")
        .with_capability(Capability::new("Manufacturing", ["CNC", "Injection Molding"]))
        .with_region(Region::with_state("USA", "CA"))
        .with_cost(CostModel::new("Widget", 100.0, "USD", false).expect("valid cost"))
        .with_rating(rating(9.0, 9.0, 9.0))
}

pub(super) fn widget_criteria<const N: usize>(
    capabilities: [&str; N],
    region: Region,
    target_price: f64,
) -> EvaluationCriteria {
    EvaluationCriteria::new(capabilities, region, target_price, "USD", "Widget")
        .expect("valid criteria")
}

/// Supplier offering CNC with `countries` distinct countries and a seeded overall score.
pub(super) fn seeded_supplier(
    name: &str,
    cost: f64,
    home: Region,
    overall_score: f64,
    countries: usize,
) -> Supplier {
    let mut supplier = bare_supplier(name)
        .with_capability(Capability::new("Manufacturing", ["CNC"]))
        .with_region(home)
        .with_cost(CostModel::new("Widget", cost, "USD", false).expect("valid cost"))
        .with_overall_score(overall_score);

    for index in 1..countries {
        supplier = supplier.with_region(Region::country(format!("Country{index}")));
    }
    supplier
}
