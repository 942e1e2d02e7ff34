//! Subscriber setup.

use super::tracer;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry::KeyValue;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// `service.name` resource attribute and instrumentation scope.
pub const SERVICE_NAME: &str = "emotion-quiz";

/// File the spans are appended to, inside the plugin data directory.
pub const TRACE_FILE_NAME: &str = "emotion-quiz-otlp.json";

/// Filter used when `trace_level` is not configured.
pub const DEFAULT_TRACE_LEVEL: &str = "info";

/// Installs the global subscriber that exports spans to the trace file.
///
/// Observability is best effort: if the data directory cannot be created the
/// plugin runs without tracing, and an unparsable `trace_level` falls back
/// to [`DEFAULT_TRACE_LEVEL`]. Only the first call in a process installs a
/// subscriber; later calls are ignored.
pub fn init_tracing(config: &Config) {
    let level = config.trace_level.as_deref().unwrap_or(DEFAULT_TRACE_LEVEL);
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new(DEFAULT_TRACE_LEVEL));

    let data_dir = crate::infrastructure::get_data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let resource = Resource::new(vec![KeyValue::new("service.name", SERVICE_NAME)]);
    let provider = tracer::create_tracer_provider(data_dir.join(TRACE_FILE_NAME), resource);
    let otel_layer = OpenTelemetryLayer::new(provider.tracer(SERVICE_NAME));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(otel_layer)
        .try_init();

    tracing::debug!(level, "tracing initialized");
}
