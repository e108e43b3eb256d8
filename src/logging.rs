use crate::config::LoggingConfig;
use std::path::PathBuf;
use std::sync::OnceLock;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

const LOG_FILE: &str = "raidcalc.log";

/// Where log output goes. The TUI owns the terminal, so it only gets a file.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Sink {
    Stderr,
    FileOnly,
}

pub fn init(cfg: &LoggingConfig, sink: Sink) {
    let env_filter = || {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(format!("raidcalc={}", cfg.level.as_directive())))
    };

    let stderr_layer = (sink == Sink::Stderr).then(|| {
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_filter(env_filter())
    });

    let file_layer = if cfg.to_file {
        match file_writer() {
            Some((writer, guard)) => {
                let _ = LOG_GUARD.set(guard);
                Some(
                    tracing_subscriber::fmt::layer()
                        .with_writer(writer)
                        .with_ansi(false)
                        .with_target(true)
                        .with_filter(env_filter()),
                )
            }
            None => None,
        }
    } else {
        None
    };

    let _ = tracing_subscriber::registry()
        .with(stderr_layer)
        .with(file_layer)
        .try_init();
}

pub fn log_dir() -> Option<PathBuf> {
    dirs::data_local_dir().map(|p| p.join("raidcalc").join("logs"))
}

fn file_writer() -> Option<(tracing_appender::non_blocking::NonBlocking, WorkerGuard)> {
    let dir = log_dir()?;
    std::fs::create_dir_all(&dir).ok()?;
    let appender = tracing_appender::rolling::never(&dir, LOG_FILE);
    Some(tracing_appender::non_blocking(appender))
}
