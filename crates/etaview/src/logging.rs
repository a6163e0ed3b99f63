use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging to write to a file in the data directory.
///
/// Logs go to `{data_dir}/etaview.log` through a non-blocking appender so
/// terminal rendering never waits on disk. The log level can be controlled
/// via the `level` parameter or the `RUST_LOG` environment variable.
///
/// The returned guard must stay alive for the lifetime of the process;
/// dropping it flushes and stops the background writer.
pub fn init_logging(data_dir: &Path, level: &str) -> color_eyre::Result<WorkerGuard> {
    std::fs::create_dir_all(data_dir)?;

    let appender = tracing_appender::rolling::never(data_dir, "etaview.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    // Build filter from RUST_LOG env var or use provided level
    let default_filter = format!("etaview={level},etaview_core=warn");
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&default_filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false),
        )
        .init();

    tracing::info!(
        "etaview logging initialized (log_path={})",
        data_dir.join("etaview.log").display()
    );
    Ok(guard)
}
