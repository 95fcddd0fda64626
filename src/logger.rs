use tracing_subscriber::{EnvFilter, FmtSubscriber};

const LOG_ENV_VARS: [&str; 2] = ["BLOODAXE_LOG", "RUST_LOG"];

/// Installs the global subscriber. Logs go to stderr so stdout carries only
/// request lines and the report.
pub fn init_logging(verbose: bool, no_color: bool) {
    let filter = log_filter(verbose, |name| std::env::var(name).ok());

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .finish();

    if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set global default subscriber: {}", err);
    }
}

/// `BLOODAXE_LOG` wins over `RUST_LOG`; without either, `debug` when verbose
/// and `info` otherwise. An unparsable directive falls back to `info`.
fn log_filter<F>(verbose: bool, env: F) -> EnvFilter
where
    F: Fn(&str) -> Option<String>,
{
    LOG_ENV_VARS.iter().find_map(|name| env(name)).map_or_else(
        || {
            if verbose {
                EnvFilter::new("debug")
            } else {
                EnvFilter::new("info")
            }
        },
        |value| EnvFilter::try_new(value).unwrap_or_else(|_| EnvFilter::new("info")),
    )
}
