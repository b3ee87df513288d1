use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "PEM_ROUNDTRIP_LOG";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Installs the stderr subscriber. `log` records from the library are bridged
/// into it, so stdout only ever carries command output.
pub fn setup_logger() {
    if let Err(e) = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .try_init()
    {
        eprintln!("logger initialization failed: {e}");
    }
}
