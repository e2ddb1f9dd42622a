//! File-only diagnostics. Stdout carries the board, so nothing is logged
//! there.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Names the log file prefix. Unset means no logging.
pub const LOG_ENV: &str = "MINESWEEPER_LOG";

/// Install the file subscriber when [`LOG_ENV`] is set.
///
/// `RUST_LOG` takes precedence over `default_level`.
pub fn init_tracing(default_level: &str) {
    let Some(prefix) = std::env::var_os(LOG_ENV) else {
        return;
    };

    let path = session_log_path(PathBuf::from(prefix), std::process::id());
    let file = match std::fs::File::create(&path) {
        Ok(file) => file,
        Err(err) => {
            eprintln!("minesweeper-client: cannot open log file {}: {err}", path.display());
            return;
        }
    };

    let result = tracing_subscriber::registry()
        .with(level_filter(default_level))
        .with(
            fmt::layer()
                .with_writer(file)
                .with_ansi(false)
                .with_target(true),
        )
        .try_init();
    if let Err(err) = result {
        eprintln!("minesweeper-client: logging disabled: {err}");
    }
}

fn level_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// `{prefix}.{unix seconds}.{pid}`: one file per session.
fn session_log_path(prefix: PathBuf, pid: u32) -> PathBuf {
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let mut name = prefix.into_os_string();
    name.push(format!(".{secs}.{pid}"));
    PathBuf::from(name)
}
