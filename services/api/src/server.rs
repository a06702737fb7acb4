use crate::cli::ServeArgs;
use crate::infra::{load_catalog, AppState, SupplierDirectory};
use crate::routes::with_supplier_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use supplier_eval::config::AppConfig;
use supplier_eval::error::AppError;
use supplier_eval::evaluation::SupplierEvaluator;
use supplier_eval::telemetry;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let suppliers = load_catalog(config.catalog.path.as_deref())?;
    let catalog_size = suppliers.len();
    let directory = Arc::new(SupplierDirectory::new(suppliers, SupplierEvaluator::default()));

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let app = with_supplier_routes(directory)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, catalog_size, "supplier evaluation service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
