//! Tracing initialization and subscriber setup.

use super::tracer;
use crate::infrastructure::paths::{get_data_dir, trace_file_path};
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Service and scope name attached to every exported span.
const SERVICE_NAME: &str = "Clapper";

/// Level used when the configuration does not name one.
const DEFAULT_TRACE_LEVEL: &str = "info";

/// Returns the `EnvFilter` directive to use for `config`.
fn filter_directive(config: &Config) -> &str {
    config
        .trace_level
        .as_deref()
        .map(str::trim)
        .filter(|level| !level.is_empty())
        .unwrap_or(DEFAULT_TRACE_LEVEL)
}

/// Installs the global tracing subscriber with file-based OTLP export.
///
/// Traces go to `~/.local/share/zellij/clapper/clapper-otlp.json` (seen as
/// `/host/...` from inside the sandbox). If the data directory cannot be
/// created tracing stays disabled; the plugin works without it. Only the first
/// call installs a subscriber.
pub fn init_tracing(config: &Config) {
    if std::fs::create_dir_all(get_data_dir()).is_err() {
        return;
    }

    let filter = EnvFilter::try_new(filter_directive(config))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_TRACE_LEVEL));

    let resource = Resource::new(vec![opentelemetry::KeyValue::new(
        "service.name",
        SERVICE_NAME,
    )]);
    let provider = tracer::create_tracer_provider(trace_file_path(), resource, SERVICE_NAME);
    let otel_layer = OpenTelemetryLayer::new(provider.tracer(SERVICE_NAME));

    let subscriber = tracing_subscriber::registry().with(filter).with(otel_layer);

    let _ = subscriber.try_init();
}
