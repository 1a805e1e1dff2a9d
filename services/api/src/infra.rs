use lead_iq::config::AppConfig;
use lead_iq::error::AppError;
use lead_iq::leads::{HttpPageFetcher, LeadScoringService};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) fn build_scoring_service(
    config: &AppConfig,
) -> Result<Arc<LeadScoringService<HttpPageFetcher>>, AppError> {
    let fetcher = HttpPageFetcher::from_config(&config.fetch)?;
    Ok(Arc::new(LeadScoringService::new(fetcher)))
}
