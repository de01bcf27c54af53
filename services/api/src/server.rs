use crate::cli::ServeArgs;
use crate::infra::{provisioned_program_store, seeded_scoring_store, AppState};
use crate::routes::governance_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use govdesk::config::AppConfig;
use govdesk::error::AppError;
use govdesk::governance::program::ProgramService;
use govdesk::governance::scoring::{ScoringConfig, ScoringService};
use govdesk::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
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

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let scoring_service = Arc::new(ScoringService::new(
        seeded_scoring_store(),
        ScoringConfig::default(),
    ));
    let program_service = Arc::new(ProgramService::new(provisioned_program_store()));

    let app = governance_routes(scoring_service, program_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "governance portal api ready");

    axum::serve(listener, app).await?;
    Ok(())
}
