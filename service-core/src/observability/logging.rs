use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global JSON log subscriber.
///
/// `RUST_LOG` takes precedence over `log_level` when set. Calling this twice
/// in one process (e.g. from several tests) is harmless; later calls are ignored.
pub fn init_tracing(service_name: &str, log_level: &str) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level));

    let installed = tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_file(true)
                .with_line_number(true)
                .json()
                .flatten_event(true),
        )
        .try_init();

    if installed.is_ok() {
        tracing::info!(service = %service_name, "Logging initialized");
    }
}
