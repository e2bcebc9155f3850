//! File-backed tracing setup.
//!
//! The terminal belongs to the TUI, so log records go to a file instead of
//! stderr.

use anyhow::Context;
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// `<cache_dir>/shopcart/shopcart.log`, or the current directory when no
/// cache dir is known.
pub fn default_log_path() -> PathBuf {
    let cache_dir = dirs::cache_dir().unwrap_or_else(|| PathBuf::from("."));
    cache_dir.join("shopcart").join("shopcart.log")
}

/// Build the filter: `RUST_LOG` when set, else `level`, else `info`.
pub fn build_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

pub fn init_tracing(level: &str, path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating log directory {}", parent.display()))?;
        }
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(build_filter(level))
        .with_target(true)
        .with_level(true)
        .with_ansi(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|err| anyhow::anyhow!(err))
        .context("installing tracing subscriber")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::filter::LevelFilter;

    // One test owns RUST_LOG so parallel tests never race on it.
    #[test]
    fn filter_prefers_env_then_level_then_info() {
        std::env::set_var("RUST_LOG", "debug");
        assert_eq!(build_filter("warn").max_level_hint(), Some(LevelFilter::DEBUG));

        std::env::remove_var("RUST_LOG");
        assert_eq!(build_filter("warn").max_level_hint(), Some(LevelFilter::WARN));
        assert_eq!(
            build_filter("shopcart=loud").max_level_hint(),
            Some(LevelFilter::INFO)
        );
    }
}
