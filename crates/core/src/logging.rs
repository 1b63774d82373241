//! Tracing setup for the `logscope` binaries.

use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

const DEFAULT_FILTER: &str = "info";

/// Directory holding the rolling log files, `~/.logscope/logs`.
pub fn log_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".logscope")
        .join("logs")
}

/// Install the global subscriber. Events always go to
/// `<log_dir>/<component>.log.<date>`; `echo_to_stderr` mirrors them to the
/// terminal as well. Keep the returned guard alive until exit so buffered
/// lines are flushed.
pub fn init_logging(component: &str, echo_to_stderr: bool) -> WorkerGuard {
    let dir = log_dir();
    if let Err(e) = std::fs::create_dir_all(&dir) {
        eprintln!("cannot create log directory {}: {}", dir.display(), e);
    }

    let (writer, guard) = tracing_appender::non_blocking(tracing_appender::rolling::daily(&dir, component));

    let file = fmt::layer().with_writer(writer).with_ansi(false);
    let terminal = echo_to_stderr.then(|| {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .compact()
    });

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)))
        .with(file)
        .with(terminal)
        .init();

    guard
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_dir_is_under_dot_logscope() {
        let dir = log_dir();
        assert!(dir.ends_with(".logscope/logs"));
    }
}
