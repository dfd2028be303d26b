use tracing_subscriber::EnvFilter;

/// Initialise logging for hosts embedding the engine. The default level is
/// `info`; enabling `debug` turns on per-event stroke tracing. When debug is
/// enabled, `RUST_LOG` may override the filter.
pub fn init(debug: bool) {
    let level = if debug { "debug" } else { "info" };

    let filter = if debug {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
    } else {
        EnvFilter::new(level)
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init();
}
