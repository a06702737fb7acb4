use chrono::NaiveDate;
use metrics_exporter_prometheus::PrometheusHandle;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use supplier_eval::catalog::SupplierCatalog;
use supplier_eval::error::AppError;
use supplier_eval::evaluation::{
    Capability, ContactInfo, CostModel, EvaluationCriteria, PerformanceRating, RankedSupplier,
    Region, Supplier, SupplierEvaluator, ValidationError,
};
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Read-only supplier catalog shared across requests.
///
/// Every evaluation works on a fresh copy of the records, because scoring
/// writes the derived fields back onto the supplier it is handed.
pub(crate) struct SupplierDirectory {
    suppliers: Vec<Supplier>,
    evaluator: SupplierEvaluator,
}

impl SupplierDirectory {
    pub(crate) fn new(suppliers: Vec<Supplier>, evaluator: SupplierEvaluator) -> Self {
        Self {
            suppliers,
            evaluator,
        }
    }

    pub(crate) fn evaluator(&self) -> &SupplierEvaluator {
        &self.evaluator
    }

    pub(crate) fn snapshot(&self) -> Vec<Supplier> {
        self.suppliers.clone()
    }

    pub(crate) fn rank(&self, criteria: &EvaluationCriteria) -> Vec<RankedSupplier> {
        self.evaluator.rank(self.snapshot(), criteria)
    }
}

pub(crate) fn load_catalog(path: Option<&Path>) -> Result<Vec<Supplier>, AppError> {
    match path {
        Some(path) => {
            let suppliers = SupplierCatalog::from_path(path)?;
            info!(path = %path.display(), suppliers = suppliers.len(), "loaded supplier catalog");
            Ok(suppliers)
        }
        None => Ok(sample_catalog()?),
    }
}

fn full_year_rating(
    quality: f64,
    timeliness: f64,
    communication: f64,
) -> Result<PerformanceRating, ValidationError> {
    let start = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap_or_default();
    let end = start + chrono::Duration::days(364);
    PerformanceRating::new(start, end, quality, timeliness, communication)
}

/// Built-in widget catalog used when no catalog file is configured.
pub(crate) fn sample_catalog() -> Result<Vec<Supplier>, ValidationError> {
    let global = Supplier::new(
        "Global Manufacturing Ltd",
        ContactInfo::new("sales@globalmfg.com")?,
    )?
    .with_capability(Capability::new("Manufacturing", ["Widget", "Gadget"]))
    .with_region(Region::country("China"))
    .with_region(Region::country("Vietnam"))
    .with_region(Region::country("India"))
    .with_cost(CostModel::new("Widget", 5.0, "USD", true)?)
    .with_rating(full_year_rating(8.5, 8.0, 7.5)?)
    .with_overall_score(8.0);

    let local = Supplier::new(
        "Local Precision Inc",
        ContactInfo::new("info@localprecision.com")?,
    )?
    .with_capability(Capability::new("Manufacturing", ["Widget"]))
    .with_region(Region::with_state("USA", "CA"))
    .with_cost(CostModel::new("Widget", 8.0, "USD", false)?)
    .with_rating(full_year_rating(9.5, 9.5, 9.0)?)
    .with_overall_score(9.33);

    let budget = Supplier::new(
        "Budget Parts Co",
        ContactInfo::new("sales@budgetparts.com")?,
    )?
    .with_capability(Capability::new("Manufacturing", ["Widget"]))
    .with_region(Region::country("Mexico"))
    .with_cost(CostModel::new("Widget", 4.5, "USD", true)?)
    .with_rating(full_year_rating(6.0, 5.0, 6.0)?)
    .with_overall_score(5.67);

    Ok(vec![global, local, budget])
}
