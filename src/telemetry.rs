use tracing_subscriber::{EnvFilter, fmt, prelude::*};

const DEFAULT_LOG_FILTER: &str = "info,actix_web=info";

/// Parses `RUST_LOG`-style directives, falling back to `info` when they
/// don't parse and to [`DEFAULT_LOG_FILTER`] when none are given.
pub fn env_filter(directives: Option<&str>) -> EnvFilter {
    match directives {
        Some(directives) => EnvFilter::try_new(directives).unwrap_or_else(|_| EnvFilter::new("info")),
        None => EnvFilter::new(DEFAULT_LOG_FILTER),
    }
}

/// Installs the global `tracing` subscriber, filtered by `RUST_LOG`.
/// Must run before anything logs, settings parsing included. A second call
/// is a no-op.
pub fn init_tracing() {
    let directives = std::env::var("RUST_LOG").ok();

    let _ = tracing_subscriber::registry()
        .with(env_filter(directives.as_deref()))
        .with(fmt::layer().with_target(true))
        .try_init();
}
