//! Logging Infrastructure
//!
//! Structured logging for the CLI: console by default, a daily rolling file
//! when a log directory is configured. Security events (login, logout,
//! permission denials) are emitted on the `security` target.

use std::path::Path;

use tracing_subscriber::EnvFilter;

/// Initialize the logger
pub fn init_logger() {
    init_logger_with_file(None, None, None);
}

/// Initialize the logger with optional file output
///
/// `log_level` accepts a plain level (`"debug"`) or a filter directive
/// (`"front_desk=debug,security=info"`). Calling this twice is a no-op.
pub fn init_logger_with_file(log_level: Option<&str>, json: Option<bool>, log_dir: Option<&str>) {
    let level = log_level.unwrap_or("info");
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(true);

    // Add file output if log_dir is provided
    if let Some(dir) = log_dir {
        let log_path = Path::new(dir);
        if log_path.is_dir()
            && let Some(dir_str) = log_path.to_str()
        {
            let file_appender = tracing_appender::rolling::daily(dir_str, "front-desk");
            let builder = builder.with_writer(file_appender).with_ansi(false);
            let _ = if json.unwrap_or(false) {
                builder.json().try_init()
            } else {
                builder.try_init()
            };
            return;
        }
    }

    let _ = if json.unwrap_or(false) {
        builder.json().try_init()
    } else {
        builder.with_writer(std::io::stderr).try_init()
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_twice_is_harmless() {
        let dir = tempfile::tempdir().unwrap();
        init_logger_with_file(Some("debug"), None, dir.path().to_str());
        init_logger();
        tracing::info!(target: "security", event = "test", "logger ready");
    }
}
