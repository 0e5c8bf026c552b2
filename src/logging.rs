use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter (e.g. `JOT_LOG=debug`)
pub const LOG_ENV: &str = "JOT_LOG";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Log to stderr. Used by CLI commands.
pub fn init_stderr() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}

/// Log to `jot.log` in the data directory so output does not land on the
/// TUI's alternate screen. Falls back to no logging if the file can't be opened.
pub fn init_file(data_dir: &Path) {
    let path = data_dir.join("jot.log");
    let file = match std::fs::create_dir_all(data_dir)
        .and_then(|_| OpenOptions::new().create(true).append(true).open(&path))
    {
        Ok(f) => f,
        Err(_) => return,
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init();
}
