use crate::settings::Settings;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Initializes the stdout tracing subscriber. Returns a guard that must be
/// held for the process lifetime (dropping it stops the non-blocking writer).
pub fn init_logging(settings: &Settings) -> WorkerGuard {
    let (non_blocking, guard) = tracing_appender::non_blocking(std::io::stdout());

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry().with(filter);

    if settings.log_json {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_writer(non_blocking),
            )
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(false).with_writer(non_blocking))
            .init();
    }

    guard
}
