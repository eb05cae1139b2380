use tracing_subscriber::EnvFilter;

const LOG_ENV_VAR: &str = "PRSUM_LOG";

/// Installs a stderr subscriber. `PRSUM_LOG` takes precedence over `verbose`.
pub fn init(verbose: bool) {
    let default_directive = if verbose { "prsum=debug" } else { "prsum=info" };
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    // Keeps any global subscriber that is already installed.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
