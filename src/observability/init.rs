//! Subscriber setup.

use super::exporter;
use crate::infrastructure::paths::data_dir;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Trace file name inside the plugin data directory.
pub const TRACE_FILE_NAME: &str = "artscope-otlp.json";

const SERVICE_NAME: &str = "artscope";

/// Installs the global subscriber: an `EnvFilter` at the configured level
/// (default `info`) feeding an OpenTelemetry layer that exports to
/// `<data dir>/artscope-otlp.json`.
///
/// Tracing is optional. If the data directory cannot be created nothing is
/// installed, and calling this twice keeps the first subscriber.
pub fn init_tracing(config: &Config) {
    let level = config.trace_level.as_deref().unwrap_or("info");

    let dir = data_dir();
    if std::fs::create_dir_all(&dir).is_err() {
        return;
    }

    let resource = Resource::new(vec![
        opentelemetry::KeyValue::new("service.name", SERVICE_NAME),
        opentelemetry::KeyValue::new("service.version", env!("CARGO_PKG_VERSION")),
    ]);

    let provider = exporter::create_tracer_provider(dir.join(TRACE_FILE_NAME), resource);
    let otel_layer = OpenTelemetryLayer::new(provider.tracer(SERVICE_NAME));

    let _ = tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(otel_layer)
        .try_init();
}
