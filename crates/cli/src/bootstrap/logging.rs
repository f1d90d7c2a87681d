use pokedex_domain::{Config, LogFormat};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Logs go to stderr so command output on stdout stays machine-readable.
pub fn init_logging(config: &Config) {
    let filter =
        EnvFilter::try_new(&config.logging.level).unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_level(true)
        .with_writer(std::io::stderr);

    match config.logging.format {
        LogFormat::Pretty => builder.with_ansi(true).init(),
        LogFormat::Json => builder.json().init(),
    }

    info!("Logging initialized at level: {}", config.logging.level);
}
