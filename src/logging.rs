use tracing_subscriber::EnvFilter;

use airac::config::LogConfig;

/// Initialize tracing from CLI verbosity and the logging configuration.
///
/// Mapping:
/// - 0 (none) -> configured level
/// - 1 (-v)   -> info
/// - 2 (-vv)  -> debug
/// - 3+ (-vvv)-> trace
///
/// `RUST_LOG` env var overrides both if set.
pub fn init(verbosity: u8, config: &LogConfig) {
    let default_filter = match verbosity {
        0 => config.level.clone(),
        1 => "airac=info".to_string(),
        2 => "airac=debug".to_string(),
        _ => "airac=trace".to_string(),
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if config.json {
        builder.json().init();
    } else {
        builder.init();
    }
}
