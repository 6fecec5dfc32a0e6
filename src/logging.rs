use crate::utils::paths::ensure_log_dir_exists;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Where log output goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    /// Daily rolling file under `~/.uuid-tui/logs`, keeps the alternate
    /// screen clean while the TUI is up.
    File,
    Stderr,
}

fn build_filter(default_level: &str) -> EnvFilter {
    // RUST_LOG wins over the config file
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("uuid_tui={default_level},uuidtui={default_level}"))
    })
}

/// Install the global subscriber. The returned guard must stay alive for the
/// rest of the program so buffered file output is flushed.
pub fn init(target: LogTarget, default_level: &str) -> Option<WorkerGuard> {
    let filter = build_filter(default_level);

    match target {
        LogTarget::File => match ensure_log_dir_exists() {
            Ok(dir) => {
                let appender = tracing_appender::rolling::daily(dir, "uuidtui.log");
                let (non_blocking, guard) = tracing_appender::non_blocking(appender);
                tracing_subscriber::registry()
                    .with(filter)
                    .with(fmt::layer().with_writer(non_blocking).with_ansi(false))
                    .init();
                Some(guard)
            }
            Err(e) => {
                // No log directory: stay silent rather than draw over the TUI
                eprintln!("Warning: Could not create log directory: {}", e);
                None
            }
        },
        LogTarget::Stderr => {
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().with_writer(std::io::stderr))
                .init();
            None
        }
    }
}
