use crate::infra::load_catalog;
use chrono::NaiveDate;
use clap::{Args, ValueEnum};
use std::path::PathBuf;
use supplier_eval::catalog::write_rankings_csv;
use supplier_eval::error::AppError;
use supplier_eval::evaluation::{
    Capability, ContactInfo, CostModel, EvaluationCriteria, PerformanceRating, RankedSupplier,
    Region, Supplier, SupplierEvaluator,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    Table,
    Json,
    Csv,
}

#[derive(Args, Debug)]
pub(crate) struct RankArgs {
    /// Component or service required; also the item whose cost is evaluated
    #[arg(long)]
    pub(crate) component: String,
    /// Target country
    #[arg(long)]
    pub(crate) country: String,
    /// Target state or province
    #[arg(long)]
    pub(crate) state: Option<String>,
    /// Target unit cost
    #[arg(long)]
    pub(crate) target_cost: f64,
    /// Three-letter currency code of the target cost
    #[arg(long, default_value = "USD")]
    pub(crate) currency: String,
    /// Requested volume (reported only; does not affect scoring)
    #[arg(long, default_value_t = 1)]
    pub(crate) volume: u32,
    /// JSON supplier catalog to rank instead of the built-in sample
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub(crate) format: OutputFormat,
}

pub(crate) fn run_rank(args: RankArgs) -> Result<(), AppError> {
    let RankArgs {
        component,
        country,
        state,
        target_cost,
        currency,
        volume,
        catalog,
        format,
    } = args;

    let target_region = Region {
        country,
        state_province: state,
        service_radius_km: None,
    };
    let criteria = EvaluationCriteria::new(
        [component.as_str()],
        target_region,
        target_cost,
        currency,
        component.as_str(),
    )?;

    let suppliers = load_catalog(catalog.as_deref())?;
    let ranked = SupplierEvaluator::default().rank(suppliers, &criteria);

    match format {
        OutputFormat::Table => render_ranking(&criteria, volume, &ranked),
        OutputFormat::Json => match serde_json::to_string_pretty(&ranked) {
            Ok(json) => println!("{json}"),
            Err(err) => println!("Ranking JSON unavailable: {err}"),
        },
        OutputFormat::Csv => write_rankings_csv(std::io::stdout().lock(), &ranked)?,
    }

    Ok(())
}

fn render_ranking(criteria: &EvaluationCriteria, volume: u32, ranked: &[RankedSupplier]) {
    let region = match &criteria.target_region.state_province {
        Some(state) => format!("{}/{}", criteria.target_region.country, state),
        None => criteria.target_region.country.clone(),
    };

    println!("Supplier ranking");
    println!(
        "Requirement: {} x{} in {} at {:.2} {}",
        criteria.required_item, volume, region, criteria.target_price, criteria.target_currency
    );

    if ranked.is_empty() {
        println!("\nNo suppliers in catalog");
        return;
    }

    println!();
    for (index, row) in ranked.iter().enumerate() {
        let overall = row
            .details
            .overall_score
            .map(|score| format!("{score:.2}"))
            .unwrap_or_else(|| "unrated".to_string());
        println!(
            "{:>2}. {} | fit {:.2} | risk {} | cost {} | performance {}",
            index + 1,
            row.supplier_name,
            row.fit_score,
            row.risk_level.label(),
            row.cost_alignment.label(),
            overall
        );
    }
}

fn demo_supplier() -> Result<Supplier, AppError> {
    let period_start = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap_or_default();
    let period_end = NaiveDate::from_ymd_opt(2023, 6, 30).unwrap_or(period_start);

    let mut contact = ContactInfo::new("contact@acmecorp.com")?;
    contact.phone = Some("+1-555-0100".to_string());
    contact.address = Some("123 Industrial Way, Tech City".to_string());

    let supplier = Supplier::new("Acme Corp", contact)?
        .with_capability(
            Capability::new("Manufacturing", ["CNC Machining", "3D Printing"])
                .with_certification("ISO 9001"),
        )
        .with_region(Region {
            country: "USA".to_string(),
            state_province: Some("CA".to_string()),
            service_radius_km: Some(500.0),
        })
        .with_cost(CostModel::new("Widget A", 10.50, "USD", true)?)
        .with_rating(
            PerformanceRating::new(period_start, period_end, 9.5, 8.0, 9.0)?
                .with_comments("Excellent quality, slightly delayed shipment."),
        );

    Ok(supplier)
}

pub(crate) fn run_demo() -> Result<(), AppError> {
    let evaluator = SupplierEvaluator::default();
    let mut supplier = demo_supplier()?;

    println!("Supplier evaluation demo");
    println!("Supplier: {} ({})", supplier.name, supplier.id);

    let before = supplier
        .overall_score
        .map(|score| format!("{score:.2}"))
        .unwrap_or_else(|| "not computed".to_string());
    println!("Initial overall score: {before}");

    let assessment = evaluator.assess(&mut supplier);
    supplier.risk_level = Some(assessment.level);

    match assessment.overall_score {
        Some(score) => println!("Calculated overall score: {score:.2}"),
        None => println!("Calculated overall score: unrated"),
    }
    println!(
        "Risk: {} (performance {}, geographic {} across {} countr{})",
        assessment.level.label(),
        assessment.performance.label(),
        assessment.geographic.label(),
        assessment.distinct_countries,
        if assessment.distinct_countries == 1 { "y" } else { "ies" }
    );

    match serde_json::to_string_pretty(&supplier) {
        Ok(json) => println!("\nSupplier JSON:\n{json}"),
        Err(err) => println!("\nSupplier JSON unavailable: {err}"),
    }

    Ok(())
}
