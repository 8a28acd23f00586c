//! Application state for the temperature API.

use metrics_exporter_prometheus::PrometheusHandle;
use tavg_sampler::TemperatureSampler;

/// Shared application state.
pub struct AppState {
    pub sampler: TemperatureSampler,

    /// Deployment name reported by `/health`.
    pub app_env: String,

    /// Prometheus recorder handle; `None` when no recorder is installed.
    pub prometheus: Option<PrometheusHandle>,
}

impl AppState {
    pub fn new(sampler: TemperatureSampler, app_env: impl Into<String>) -> Self {
        Self {
            sampler,
            app_env: app_env.into(),
            prometheus: None,
        }
    }

    pub fn with_prometheus(mut self, handle: PrometheusHandle) -> Self {
        self.prometheus = Some(handle);
        self
    }
}
