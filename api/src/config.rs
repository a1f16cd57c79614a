use anyhow::Context;
use bw_core::services::{ClassifierConfig, ErrorPipeline};
use bw_shared::config::{AppConfig, LogFormat, LoggingConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Read `.env` (when present) and the process environment
///
/// Unset or unrecognised `ENVIRONMENT` values resolve to production.
pub fn load_config() -> AppConfig {
    dotenvy::dotenv().ok();
    AppConfig::from_env()
}

/// Classifier settings derived from the deployment configuration
pub fn classifier_config(config: &AppConfig) -> ClassifierConfig {
    ClassifierConfig::for_server(config.disclosure_mode(), &config.server)
}

/// Error pipeline logging through `tracing`
pub fn build_pipeline(config: &AppConfig) -> ErrorPipeline {
    ErrorPipeline::new(classifier_config(config))
}

/// Install the global `tracing` subscriber
///
/// `RUST_LOG` overrides the configured level.
pub fn init_tracing(logging: &LoggingConfig) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&logging.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry().with(filter);
    let result = match logging.format {
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_file(logging.source_location)
                    .with_line_number(logging.source_location),
            )
            .try_init(),
        LogFormat::Pretty => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .pretty()
                    .with_ansi(logging.colored)
                    .with_file(logging.source_location)
                    .with_line_number(logging.source_location),
            )
            .try_init(),
        LogFormat::Compact => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .compact()
                    .with_ansi(logging.colored)
                    .with_target(true),
            )
            .try_init(),
    };
    result.context("failed to install tracing subscriber")
}
