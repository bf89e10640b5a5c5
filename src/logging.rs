use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Log to stderr so stdout carries only the form and the itinerary.
///
/// `RUST_LOG` replaces the `warn` default; `verbose` raises the floor to `debug` either way.
pub fn init(verbose: bool) {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();

    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_env_filter(build_filter(verbose, rust_log.as_deref()))
        .try_init();
}

fn build_filter(verbose: bool, rust_log: Option<&str>) -> EnvFilter {
    match (rust_log, verbose) {
        (Some(directives), false) => EnvFilter::new(directives),
        (Some(directives), true) => EnvFilter::new(directives).add_directive(LevelFilter::DEBUG.into()),
        (None, true) => EnvFilter::new(LevelFilter::DEBUG.to_string()),
        (None, false) => EnvFilter::new(LevelFilter::WARN.to_string()),
    }
}
