use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{info, Level};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, EnvFilter};

/// Keeps the file log writer alive, dropping it flushes and disables the
/// writer.
pub struct LogGuard {
    #[allow(dead_code)]
    guard: Option<WorkerGuard>,
}

/// Installs the global tracing subscriber.
///
/// Events go to stderr and, if `log_dir` is given, to a timestamped file in
/// that directory. The level defaults to INFO and can be overridden with the
/// `RUST_LOG` environment variable.
pub fn init(log_dir: Option<&Path>) -> Result<LogGuard> {
    let filter = EnvFilter::builder()
        .with_default_directive(Level::INFO.into())
        .from_env_lossy();
    let console = fmt::layer().with_writer(std::io::stderr);

    let (file, guard) = match log_dir {
        Some(dir) => {
            let path = log_file_name(chrono::Local::now());
            let file_appender = tracing_appender::rolling::never(dir, &path);
            let (non_blocking_log_writer, guard) = tracing_appender::non_blocking(file_appender);
            (
                Some(
                    fmt::layer()
                        .with_ansi(false)
                        .with_writer(non_blocking_log_writer),
                ),
                Some(guard),
            )
        }
        None => (None, None),
    };

    let collector = tracing_subscriber::registry()
        .with(filter)
        .with(console)
        .with(file);
    tracing::subscriber::set_global_default(collector)
        .context("Unable to set a global collector")?;

    if let Some(dir) = log_dir {
        info!("Logging to directory {}", dir.to_string_lossy());
    }

    Ok(LogGuard { guard })
}

fn log_file_name<Tz>(now: chrono::DateTime<Tz>) -> PathBuf
where
    Tz: chrono::TimeZone,
    Tz::Offset: std::fmt::Display,
{
    now.format("%Y-%m-%d_%H-%M-%S.log").to_string().into()
}
