// Verbosity control for diagnostics; stdout is reserved for the report itself
use tracing_subscriber::EnvFilter;

/// Map a `-v` count to a default filter (0=quiet, 1=basic, 2=full)
pub fn filter_for_level(level: u8) -> &'static str {
    match level {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

/// Install the global subscriber writing to stderr. `RUST_LOG` wins over `-v`.
pub fn init_logging(level: u8) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter_for_level(level)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .try_init();

    if level > 0 {
        tracing::info!("📢 Verbosity level: {} (0=quiet, 1=basic, 2=full)", level);
    }
}
