//! Tracing setup for the coupon service binaries.
//!
//! Installs a `tracing` subscriber with an env filter and a formatted log
//! layer, bridges `log` records into it, and optionally exports spans
//! through OpenTelemetry.

use opentelemetry::trace::TracerProvider as _;
use opentelemetry_otlp::{Protocol, WithExportConfig};
use opentelemetry_sdk::trace::SdkTracerProvider;
use opentelemetry_sdk::Resource;
use thiserror::Error;
use tracing::warn;
use tracing_log::LogTracer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{EnvFilter, Layer};
use typed_builder::TypedBuilder;

#[derive(Debug, Error)]
pub enum TelemetryError {
    #[error("failed to build span exporter: {0}")]
    Exporter(#[from] opentelemetry_otlp::ExporterBuildError),
    #[error("invalid log filter: {0}")]
    Filter(#[from] tracing_subscriber::filter::ParseError),
    #[error("failed to bridge log records: {0}")]
    LogBridge(#[from] tracing_log::log::SetLoggerError),
    #[error("failed to install subscriber: {0}")]
    Subscriber(#[from] tracing::subscriber::SetGlobalDefaultError),
}

/// Output format of the log layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    Pretty,
    #[default]
    Compact,
    Json,
}

/// Where finished spans are sent.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SpanExport {
    /// Spans only feed the log layer.
    #[default]
    None,
    /// Spans are printed to stdout by the OpenTelemetry stdout exporter.
    Stdout,
    /// Spans are shipped over OTLP (HTTP/JSON). Without an explicit
    /// endpoint the exporter reads the standard `OTEL_EXPORTER_OTLP_*`
    /// environment variables.
    Otlp { endpoint: Option<String> },
}

#[derive(Debug, Clone, TypedBuilder)]
pub struct TelemetryConfig {
    #[builder(setter(into))]
    service_name: String,
    #[builder(default)]
    log_format: LogFormat,
    #[builder(default)]
    span_export: SpanExport,
    /// Filter used when `RUST_LOG` is unset.
    #[builder(default = "info".to_string(), setter(into))]
    default_filter: String,
}

/// Flushes and shuts down the tracer provider when dropped.
#[must_use = "dropping the guard shuts down span export"]
pub struct TelemetryGuard {
    provider: Option<SdkTracerProvider>,
}

impl Drop for TelemetryGuard {
    fn drop(&mut self) {
        if let Some(provider) = self.provider.take() {
            if let Err(err) = provider.shutdown() {
                warn!(error = %err, "failed to shut down tracer provider");
            }
        }
    }
}

fn tracer_provider(
    service_name: &str,
    export: &SpanExport,
) -> Result<Option<SdkTracerProvider>, TelemetryError> {
    let builder = SdkTracerProvider::builder().with_resource(
        Resource::builder()
            .with_service_name(service_name.to_string())
            .build(),
    );

    let provider = match export {
        SpanExport::None => return Ok(None),
        SpanExport::Stdout => builder
            .with_simple_exporter(opentelemetry_stdout::SpanExporter::default())
            .build(),
        SpanExport::Otlp { endpoint } => {
            let mut exporter = opentelemetry_otlp::SpanExporter::builder()
                .with_http()
                .with_protocol(Protocol::HttpJson);
            if let Some(endpoint) = endpoint {
                exporter = exporter.with_endpoint(endpoint.as_str());
            }
            builder.with_batch_exporter(exporter.build()?).build()
        }
    };

    Ok(Some(provider))
}

/// Installs the global subscriber. Call once, early in `main`.
pub fn init(config: TelemetryConfig) -> Result<TelemetryGuard, TelemetryError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.default_filter)?,
    };

    let fmt_layer = match config.log_format {
        LogFormat::Pretty => tracing_subscriber::fmt::layer().pretty().boxed(),
        LogFormat::Compact => tracing_subscriber::fmt::layer().compact().boxed(),
        LogFormat::Json => tracing_subscriber::fmt::layer().json().boxed(),
    };

    let provider = tracer_provider(&config.service_name, &config.span_export)?;
    let otel_layer = provider.as_ref().map(|provider| {
        opentelemetry::global::set_tracer_provider(provider.clone());
        tracing_opentelemetry::layer().with_tracer(provider.tracer(config.service_name.clone()))
    });

    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .with(otel_layer);

    LogTracer::init()?;
    tracing::subscriber::set_global_default(subscriber)?;

    Ok(TelemetryGuard { provider })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults() {
        let config = TelemetryConfig::builder().service_name("coupon").build();

        assert_eq!(config.service_name, "coupon");
        assert_eq!(config.log_format, LogFormat::Compact);
        assert_eq!(config.span_export, SpanExport::None);
        assert_eq!(config.default_filter, "info");
    }

    #[test]
    fn no_exporter_means_no_provider() {
        assert!(tracer_provider("coupon", &SpanExport::None)
            .unwrap()
            .is_none());
    }

    #[test]
    fn stdout_exporter_builds_provider() {
        let provider = tracer_provider("coupon", &SpanExport::Stdout)
            .unwrap()
            .expect("provider");
        provider.shutdown().unwrap();
    }
}
