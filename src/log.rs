// src/log.rs
//
// Console + file logging. Stamps are elapsed time since start, the file
// sink lives next to the local store.

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::consts::{LOG_FILE, STORE_DIR};

/// Install the global subscriber. Hold on to the returned guard for the
/// lifetime of the program or buffered file lines are lost on exit.
///
/// Calling this again is harmless: the second install is refused and `None`
/// is returned.
pub fn init() -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let stderr = fmt::layer()
        .with_timer(fmt::time::uptime())
        .with_target(false)
        .with_writer(std::io::stderr);

    // Missing store dir is not fatal; we just lose the file sink.
    let (file, guard) = match std::fs::create_dir_all(STORE_DIR) {
        Ok(()) => {
            let appender = tracing_appender::rolling::never(STORE_DIR, LOG_FILE);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer()
                .with_timer(fmt::time::uptime())
                .with_ansi(false)
                .with_writer(writer);
            (Some(layer), Some(guard))
        }
        Err(_) => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr)
        .with(file)
        .try_init()
        .ok()?;

    guard
}
