use tracing::Subscriber;
use tracing_subscriber::EnvFilter;

/// Build the log subscriber for one run.
///
/// `RUST_LOG` takes precedence; otherwise the level is `info`, or `debug` when
/// `verbose` is set. Everything goes to stderr so stdout stays clean for
/// dry-run listings.
pub fn build_subscriber(verbose: bool) -> impl Subscriber + Send + Sync {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .finish()
}
