//! Tracing subscriber setup
//!
//! Filter comes from `MDTUTOR_LOG` (e.g. `MDTUTOR_LOG=mdtutor_core=trace`),
//! defaulting to `warn`. The full-screen viewer owns the terminal, so it logs
//! to a file under the cache dir instead of stderr.

use std::fs::{self, File, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "MDTUTOR_LOG";
const DEFAULT_FILTER: &str = "warn";

/// Where log output goes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    File,
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// `<cache dir>/mdtutor/mdtutor.log`
pub fn log_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join("mdtutor").join("mdtutor.log"))
}

fn open_log_file() -> Option<File> {
    let path = log_path()?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).ok()?;
    }
    OpenOptions::new().create(true).append(true).open(path).ok()
}

/// Install the global subscriber; later calls are no-ops
pub fn init(target: LogTarget) {
    let builder = tracing_subscriber::fmt().with_env_filter(env_filter());

    let result = match target {
        LogTarget::Stderr => builder.with_writer(std::io::stderr).try_init(),
        LogTarget::File => match open_log_file() {
            Some(file) => builder
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .try_init(),
            // Nowhere safe to write while the alternate screen is up
            None => builder.with_writer(std::io::sink).try_init(),
        },
    };

    if let Err(e) = result {
        eprintln!("Failed to initialize logging: {}", e);
    }
}
