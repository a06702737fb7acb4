use crate::infra::{AppState, SupplierDirectory};
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;
use supplier_eval::error::AppError;
use supplier_eval::evaluation::{
    validate_supplier, EvaluationCriteria, RankedSupplier, Region, RiskLevel, Supplier,
    ValidationError,
};
use tracing::info;

/// Sourcing request for a single component in a target region.
#[derive(Debug, Deserialize)]
pub(crate) struct SupplierQuery {
    pub(crate) component_type: String,
    pub(crate) volume: u32,
    pub(crate) region_country: String,
    #[serde(default)]
    pub(crate) region_state: Option<String>,
    pub(crate) target_cost: f64,
    #[serde(default = "default_currency")]
    pub(crate) currency: String,
    /// Evaluate these records instead of the configured catalog.
    #[serde(default)]
    pub(crate) suppliers: Option<Vec<Supplier>>,
}

fn default_currency() -> String {
    "USD".to_string()
}

impl SupplierQuery {
    /// The component type doubles as both the required service and the priced item.
    pub(crate) fn criteria(&self) -> Result<EvaluationCriteria, ValidationError> {
        if self.volume == 0 {
            return Err(ValidationError::ZeroVolume);
        }

        let target_region = Region {
            country: self.region_country.clone(),
            state_province: self.region_state.clone(),
            service_radius_km: None,
        };

        EvaluationCriteria::new(
            [self.component_type.as_str()],
            target_region,
            self.target_cost,
            self.currency.as_str(),
            self.component_type.as_str(),
        )
    }
}

/// Catalog listing row; fit and cost alignment need criteria, so they are placeholders.
#[derive(Debug, Serialize)]
pub(crate) struct SupplierListing {
    pub(crate) supplier_name: String,
    pub(crate) fit_score: f64,
    pub(crate) risk_level: RiskLevel,
    pub(crate) cost_alignment: &'static str,
    pub(crate) details: Supplier,
}

pub(crate) fn supplier_router(directory: Arc<SupplierDirectory>) -> Router {
    Router::new()
        .route("/api/v1/suppliers", get(list_suppliers_endpoint))
        .route("/api/v1/suppliers/rank", post(rank_suppliers_endpoint))
        .with_state(directory)
}

pub(crate) fn with_supplier_routes(directory: Arc<SupplierDirectory>) -> Router {
    supplier_router(directory)
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn rank_suppliers_endpoint(
    State(directory): State<Arc<SupplierDirectory>>,
    Json(query): Json<SupplierQuery>,
) -> Result<Json<Vec<RankedSupplier>>, AppError> {
    let criteria = query.criteria()?;

    let ranked = match query.suppliers {
        Some(suppliers) => {
            suppliers.iter().try_for_each(validate_supplier)?;
            directory.evaluator().rank(suppliers, &criteria)
        }
        None => directory.rank(&criteria),
    };

    info!(
        component = %criteria.required_item,
        country = %criteria.target_region.country,
        volume = query.volume,
        suppliers = ranked.len(),
        "ranked suppliers"
    );

    Ok(Json(ranked))
}

pub(crate) async fn list_suppliers_endpoint(
    State(directory): State<Arc<SupplierDirectory>>,
) -> Json<Vec<SupplierListing>> {
    let listings = directory
        .snapshot()
        .into_iter()
        .map(|mut supplier| {
            let risk_level = directory.evaluator().assess_risk(&mut supplier);
            SupplierListing {
                supplier_name: supplier.name.clone(),
                fit_score: 0.0,
                risk_level,
                cost_alignment: "N/A",
                details: supplier,
            }
        })
        .collect();

    Json(listings)
}
