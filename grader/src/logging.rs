use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Installs the global subscriber. Everything goes to stderr; stdout carries
/// the result line or the report.
///
/// `LOG_LEVEL` follows `EnvFilter` syntax, e.g. `warn` or `marker=debug`.
pub fn init_logging(log_level: &str) {
    let env_filter = EnvFilter::try_new(log_level).unwrap_or_else(|_| EnvFilter::new("warn"));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(true);

    // A second init keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .try_init();
}
