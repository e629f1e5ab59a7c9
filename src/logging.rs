use tracing::subscriber::SetGlobalDefaultError;

/// Installs the process-wide fmt subscriber. Binaries call this once at startup.
pub fn init_logging() -> Result<(), SetGlobalDefaultError> {
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(cfg!(debug_assertions))
        .finish();

    tracing::subscriber::set_global_default(subscriber)
}
