// src/utils/logging.rs
use tracing_subscriber::{fmt, EnvFilter};

/// Installs the console subscriber for a batch run.
///
/// `RUST_LOG` overrides the filter. Without it the level is `info`, which
/// shows one notice per blocklisted row, per page without tables and per
/// finished document. Set `RUST_LOG=warn` to keep only failures.
pub fn setup_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    tracing::debug!("Logging ready");
}
