//! Tracing initialization for applications embedding the library.

/// Load `.env` and install the global tracing subscriber.
///
/// The filter comes from `RUST_LOG`, defaulting to `info`. Call once at
/// startup; later calls are ignored so tests can call it freely.
pub fn init_telemetry() {
    let _ = dotenvy::dotenv();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();
}
