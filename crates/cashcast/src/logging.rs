use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging to `{data_dir}/cashcast.log`.
///
/// The level can be controlled via the `level` parameter or the `RUST_LOG`
/// environment variable. Returns the appender guard; dropping it flushes
/// buffered log lines, so keep it alive for the life of the process.
pub fn init_logging(data_dir: &Path, level: &str) -> color_eyre::Result<WorkerGuard> {
    std::fs::create_dir_all(data_dir)?;

    let appender = tracing_appender::rolling::never(data_dir, "cashcast.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    // RUST_LOG wins over the CLI-provided level
    let default_filter = format!("cashcast={level},cashcast_core=warn");
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&default_filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true),
        )
        .init();

    tracing::info!("cashcast logging initialized");
    Ok(guard)
}
