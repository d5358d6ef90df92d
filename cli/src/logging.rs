//! Logging configuration with file-based output and size-based rotation.
//!
//! Writes logs to `~/.config/tempo/tempo.log` (or platform equivalent) with
//! 5 MB size-based rotation. The terminal only shows warnings so the timer
//! display stays readable. Set `DEBUG_LOGGING=1` to get debug output for the
//! tempo crates in both places.

use rolling_file::{BasicRollingFileAppender, RollingConditionBasic};
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

const DEBUG_DIRECTIVE: &str = "info,tempo_core=debug,tempo_cli=debug";

/// Initialize logging with dual output (file + stderr).
///
/// Returns a `WorkerGuard` that must be held until exit so buffered lines
/// are flushed. Falls back to stderr-only logging (and returns `None`) if
/// the log directory or file can't be created.
pub fn init() -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let debug_logging = std::env::var("DEBUG_LOGGING").is_ok();

    let log_dir = match dirs::config_dir() {
        Some(config) => config.join("tempo"),
        None => {
            init_terminal_only(debug_logging);
            return None;
        }
    };

    if let Err(e) = std::fs::create_dir_all(&log_dir) {
        // Subscriber isn't installed yet
        eprintln!(
            "Failed to create log directory {:?}: {}, logging to terminal only",
            log_dir, e
        );
        init_terminal_only(debug_logging);
        return None;
    }

    let log_path = log_dir.join("tempo.log");
    let file_appender = match BasicRollingFileAppender::new(
        &log_path,
        RollingConditionBasic::new().max_size(5 * 1024 * 1024),
        1,
    ) {
        Ok(appender) => appender,
        Err(e) => {
            eprintln!("Failed to create log file at {:?}: {}", log_path, e);
            init_terminal_only(debug_logging);
            return None;
        }
    };

    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let file_filter = if debug_logging { DEBUG_DIRECTIVE } else { "info" };
    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true)
        .with_span_events(FmtSpan::NONE)
        .with_filter(EnvFilter::new(file_filter));

    tracing_subscriber::registry()
        .with(file_layer)
        .with(terminal_layer(debug_logging))
        .init();

    tracing::info!(log_file = ?log_path, debug_logging, "TEMPO logging initialized");

    Some(guard)
}

fn terminal_layer<S>(debug_logging: bool) -> impl Layer<S>
where
    S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
{
    let directive = if debug_logging { DEBUG_DIRECTIVE } else { "warn" };
    fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_span_events(FmtSpan::NONE)
        .with_filter(EnvFilter::new(directive))
}

/// Fallback when file logging can't be set up
fn init_terminal_only(debug_logging: bool) {
    tracing_subscriber::registry()
        .with(terminal_layer(debug_logging))
        .init();

    tracing::info!(debug_logging, "TEMPO logging initialized (terminal only)");
}
