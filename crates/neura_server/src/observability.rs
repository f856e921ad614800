//! Tracing subscriber setup with optional OpenTelemetry stdout export.

use crate::LoggingConfig;
use opentelemetry::{KeyValue, global, trace::TracerProvider as _};
use opentelemetry_sdk::{
    Resource,
    trace::{RandomIdGenerator, Sampler, TracerProvider},
};
use opentelemetry_stdout::SpanExporter;
use tracing_subscriber::{
    EnvFilter,
    layer::{Layer, SubscriberExt},
    util::SubscriberInitExt,
};

/// Service name reported on exported spans.
const SERVICE_NAME: &str = "neura-server";

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` wins over `config.level`. Logs are human-readable (target,
/// file and line) unless `config.json` is set. With `config.otel_stdout`,
/// spans are also exported to stdout.
///
/// # Errors
///
/// Returns an error if the log filter does not parse or a subscriber is
/// already installed.
pub fn init_observability(
    config: &LoggingConfig,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let env_filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(config.level()))?;

    let fmt_layer = if *config.json() {
        tracing_subscriber::fmt::layer().json().boxed()
    } else {
        tracing_subscriber::fmt::layer()
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .boxed()
    };

    let otel_layer = if *config.otel_stdout() {
        let provider = TracerProvider::builder()
            .with_simple_exporter(SpanExporter::default())
            .with_id_generator(RandomIdGenerator::default())
            .with_sampler(Sampler::AlwaysOn)
            .with_resource(Resource::new(vec![
                KeyValue::new("service.name", SERVICE_NAME),
                KeyValue::new("service.version", env!("CARGO_PKG_VERSION")),
            ]))
            .build();
        let tracer = provider.tracer(SERVICE_NAME);
        let _ = global::set_tracer_provider(provider);
        Some(tracing_opentelemetry::layer().with_tracer(tracer))
    } else {
        None
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .with(otel_layer)
        .try_init()?;

    Ok(())
}

/// Flushes pending spans and shuts the tracer provider down.
///
/// Call before the process exits.
pub fn shutdown_observability() {
    global::shutdown_tracer_provider();
}
