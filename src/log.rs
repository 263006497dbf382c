// src/log.rs
//
// Logging facade. The `logf!`/`logd!`/`loge!` macros forward to `tracing`;
// `init()` wires a subscriber that appends to `.store/debug.log`.

use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::config::consts::{LOG_FILE, STORE_DIR};

#[doc(hidden)]
pub use tracing;

static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

/// Install the file subscriber. Safe to call more than once; only the first
/// call has any effect.
pub fn init() -> Result<(), String> {
    init_in(Path::new(STORE_DIR))
}

pub fn init_in(dir: &Path) -> Result<(), String> {
    if LOG_GUARD.get().is_some() {
        return Ok(());
    }
    fs::create_dir_all(dir).map_err(|e| e.to_string())?;

    let appender = tracing_appender::rolling::never(dir, LOG_FILE);
    let (writer, guard) = tracing_appender::non_blocking(appender);
    let _ = LOG_GUARD.set(guard);

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_ansi(false)
        .with_target(false)
        .with_writer(writer)
        .try_init()
        .map_err(|e| e.to_string())
}

/// Info-level logging
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        $crate::log::tracing::info!($($arg)*)
    };
}

/// Debug-level logging
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        $crate::log::tracing::debug!($($arg)*)
    };
}

/// Error-level logging
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        $crate::log::tracing::error!($($arg)*)
    };
}
