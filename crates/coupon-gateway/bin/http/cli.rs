use clap::{Parser, ValueEnum};
use coupon_storage::mongo::DEFAULT_COLLECTION;
use coupon_telemetry::{LogFormat, SpanExport, TelemetryConfig};
use std::fmt::{Display, Formatter};
use std::net::SocketAddr;

pub const LISTEN_ADDR_ENV: &str = "COUPON_GATEWAY_LISTEN_ADDR";
pub const STORAGE_BACKEND_ENV: &str = "COUPON_GATEWAY_STORAGE_BACKEND";
pub const MONGODB_URI_ENV: &str = "COUPON_GATEWAY_MONGODB_URI";
pub const MONGODB_DATABASE_ENV: &str = "COUPON_GATEWAY_MONGODB_DATABASE";
pub const MONGODB_COLLECTION_ENV: &str = "COUPON_GATEWAY_MONGODB_COLLECTION";
pub const LOG_FORMAT_ENV: &str = "COUPON_GATEWAY_LOG_FORMAT";
pub const OTEL_EXPORTER_ENV: &str = "COUPON_GATEWAY_OTEL_EXPORTER";
pub const OTEL_ENDPOINT_ENV: &str = "COUPON_GATEWAY_OTEL_ENDPOINT";

pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8080";
pub const SERVICE_NAME: &str = "coupon-gateway";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StorageBackendArg {
    #[value(name = "in-memory")]
    InMemory,
    #[value(name = "mongodb")]
    Mongodb,
}

impl Display for StorageBackendArg {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageBackendArg::InMemory => write!(f, "in-memory"),
            StorageBackendArg::Mongodb => write!(f, "mongodb"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

impl From<LogFormatArg> for LogFormat {
    fn from(value: LogFormatArg) -> Self {
        match value {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Compact => LogFormat::Compact,
            LogFormatArg::Json => LogFormat::Json,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OtelExporterArg {
    None,
    Stdout,
    Otlp,
}

#[derive(Debug, Parser)]
#[command(name = "coupon-gateway")]
pub struct CLI {
    #[arg(long, env = LISTEN_ADDR_ENV, default_value = DEFAULT_LISTEN_ADDR)]
    pub listen_addr: SocketAddr,

    #[arg(
        long,
        env = STORAGE_BACKEND_ENV,
        value_enum,
        default_value_t = StorageBackendArg::InMemory
    )]
    pub storage: StorageBackendArg,

    #[arg(long, env = MONGODB_URI_ENV, required_if_eq("storage", "mongodb"))]
    pub mongodb_uri: Option<String>,

    /// Defaults to the database named in the connection string.
    #[arg(long, env = MONGODB_DATABASE_ENV)]
    pub mongodb_database: Option<String>,

    #[arg(long, env = MONGODB_COLLECTION_ENV, default_value = DEFAULT_COLLECTION)]
    pub mongodb_collection: String,

    #[arg(
        long,
        env = LOG_FORMAT_ENV,
        value_enum,
        default_value_t = LogFormatArg::Compact
    )]
    pub log_format: LogFormatArg,

    #[arg(
        long,
        env = OTEL_EXPORTER_ENV,
        value_enum,
        default_value_t = OtelExporterArg::None
    )]
    pub otel_exporter: OtelExporterArg,

    /// Full OTLP traces URL, e.g. `http://localhost:4318/v1/traces`.
    #[arg(long, env = OTEL_ENDPOINT_ENV)]
    pub otel_endpoint: Option<String>,
}

impl CLI {
    pub fn telemetry(&self) -> TelemetryConfig {
        let span_export = match self.otel_exporter {
            OtelExporterArg::None => SpanExport::None,
            OtelExporterArg::Stdout => SpanExport::Stdout,
            OtelExporterArg::Otlp => SpanExport::Otlp {
                endpoint: self.otel_endpoint.clone(),
            },
        };

        TelemetryConfig::builder()
            .service_name(SERVICE_NAME)
            .log_format(self.log_format.into())
            .span_export(span_export)
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_in_memory_storage() {
        let cli = CLI::try_parse_from(["coupon-gateway"]).unwrap();

        assert_eq!(cli.storage, StorageBackendArg::InMemory);
        assert_eq!(cli.listen_addr, DEFAULT_LISTEN_ADDR.parse::<SocketAddr>().unwrap());
        assert_eq!(cli.mongodb_collection, "coupons");
        assert_eq!(cli.log_format, LogFormatArg::Compact);
        assert_eq!(cli.otel_exporter, OtelExporterArg::None);
    }

    #[test]
    fn mongodb_storage_requires_uri() {
        let result = CLI::try_parse_from(["coupon-gateway", "--storage", "mongodb"]);
        assert!(result.is_err());

        let cli = CLI::try_parse_from([
            "coupon-gateway",
            "--storage",
            "mongodb",
            "--mongodb-uri",
            "mongodb://localhost:27017/coupondb",
        ])
        .unwrap();
        assert_eq!(cli.storage, StorageBackendArg::Mongodb);
        assert_eq!(
            cli.mongodb_uri.as_deref(),
            Some("mongodb://localhost:27017/coupondb")
        );
    }
}
