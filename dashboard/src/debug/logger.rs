//! File-based logging initialization

use std::fs;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use super::config::{LogConfig, LOG_FILE_NAME};

/// Initialize the logging system
///
/// Sets up:
/// - Daily log rotation in `config.log_dir`
/// - `RUST_LOG` override of the default filter
/// - Non-blocking writes
/// - A stderr mirror when debug logging is on
/// - Panic hook integration for crash logging
///
/// Returns the writer guard; logs are flushed when it is dropped, so keep it
/// alive for the lifetime of the program. Returns `None` when the log
/// directory cannot be created, in which case logging stays off.
pub fn init(config: &LogConfig) -> Option<WorkerGuard> {
    if let Err(e) = fs::create_dir_all(&config.log_dir) {
        eprintln!("Warning: Failed to create log directory: {}", e);
        return None;
    }

    let file_appender = tracing_appender::rolling::daily(&config.log_dir, LOG_FILE_NAME);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .with_ansi(false); // No ANSI codes in log files

    let stderr_layer = config.mirror_stderr.then(|| {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .compact()
            .boxed()
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(stderr_layer)
        .init();

    tracing::info!(
        log_file = %config.log_file().display(),
        log_level = %config.log_level,
        mirror_stderr = config.mirror_stderr,
        "Logging initialized"
    );

    setup_panic_hook();

    Some(guard)
}

/// Set up panic hook to log panics before the default handler runs
fn setup_panic_hook() {
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let location = panic_info
            .location()
            .map(|l| format!("{}:{}:{}", l.file(), l.line(), l.column()))
            .unwrap_or_else(|| "unknown location".to_string());

        let message = if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.clone()
        } else {
            "unknown panic payload".to_string()
        };

        tracing::error!(%location, %message, "PANIC");

        default_panic(panic_info);
    }));
}
