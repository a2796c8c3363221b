//! Prometheus metrics exporter.
//!
//! Serves metrics recorded through the `metrics` crate in Prometheus text
//! format at `/metrics` using `metrics-exporter-prometheus`.
//!
//! # Example
//!
//! ```rust,ignore
//! use kiosk_tui::metrics_exporter::MetricsExporter;
//!
//! let exporter = MetricsExporter::install("127.0.0.1:9090")?;
//! ```

use std::net::SocketAddr;

use metrics_exporter_prometheus::{Matcher, PrometheusBuilder};
use tracing::info;

use crate::ux_telemetry::METRIC_TUI_FRAME_RENDER_DURATION;

/// Metrics exporter for Prometheus scraping.
///
/// When created, this installs a global PrometheusRecorder and starts
/// an HTTP server on the specified bind address serving `/metrics`.
pub struct MetricsExporter {
    bind_addr: SocketAddr,
}

impl MetricsExporter {
    /// Install the Prometheus exporter as the global metrics recorder.
    ///
    /// Must be called from within a tokio runtime.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The bind address is invalid
    /// - Another recorder is already installed
    pub fn install(bind_addr: &str) -> Result<Self, MetricsExporterError> {
        let addr: SocketAddr = bind_addr
            .parse()
            .map_err(|e| MetricsExporterError::InvalidBindAddress(bind_addr.to_string(), e))?;

        PrometheusBuilder::new()
            .set_buckets_for_metric(
                Matcher::Full(METRIC_TUI_FRAME_RENDER_DURATION.to_string()),
                &[
                    0.0001, 0.0005, 0.001, 0.0025, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5,
                ],
            )?
            .with_http_listener(addr)
            .install()?;

        info!("Prometheus metrics exporter started on http://{}/metrics", addr);

        Ok(Self { bind_addr: addr })
    }

    /// Get the bind address.
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}

/// Errors that can occur when installing the metrics exporter.
#[derive(Debug, thiserror::Error)]
pub enum MetricsExporterError {
    #[error("Invalid bind address '{0}': {1}")]
    InvalidBindAddress(String, std::net::AddrParseError),

    #[error("A metrics recorder is already installed")]
    RecorderAlreadyInstalled,

    #[error("Failed to build Prometheus recorder: {0}")]
    BuildError(String),
}

impl From<metrics_exporter_prometheus::BuildError> for MetricsExporterError {
    fn from(err: metrics_exporter_prometheus::BuildError) -> Self {
        match err {
            metrics_exporter_prometheus::BuildError::FailedToSetGlobalRecorder(_) => {
                MetricsExporterError::RecorderAlreadyInstalled
            }
            other => MetricsExporterError::BuildError(other.to_string()),
        }
    }
}
