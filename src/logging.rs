use crate::config::{Config, DebugLogRotation};
use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::EnvFilter;

const LOG_FILE_NAME: &str = "gsearch-debug.log";

/// Keeps the non-blocking log writer alive; drop it last.
#[allow(dead_code)]
pub struct LogGuard(Option<WorkerGuard>);

/// Initialize logging.
///
/// Without `debug`, warnings go to stderr (`RUST_LOG` overrides the filter).
/// With `debug`, everything from this crate goes to a log file,
/// `~/.config/gsearch/gsearch-debug.log` by default.
pub fn init(config: &Config) -> Result<LogGuard> {
    if !config.debug {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init()
            .ok(); // Already initialized (e.g. in tests).
        return Ok(LogGuard(None));
    }

    let rotation = config
        .debug_log_rotation
        .unwrap_or(DebugLogRotation::Session);
    let base = resolve_base_log_path(config.debug_log_path.as_deref())?;

    let (writer, log_path, guard): (NonBlocking, PathBuf, WorkerGuard) = match rotation {
        DebugLogRotation::None => {
            let (non_blocking, guard) = tracing_appender::non_blocking(open_append(&base)?);
            (non_blocking, base, guard)
        }
        DebugLogRotation::Daily => {
            let (dir, base_name) = split_dir_and_name(&base)?;
            std::fs::create_dir_all(&dir)
                .with_context(|| format!("Failed to create log directory: {}", dir.display()))?;

            // tracing_appender::rolling::daily names files `{base_name}.{YYYY-MM-DD}`
            cleanup_rotated_logs(&dir, &format!("{base_name}."), config.debug_log_keep.unwrap_or(7))?;

            let appender = tracing_appender::rolling::daily(&dir, &base_name);
            let (non_blocking, guard) = tracing_appender::non_blocking(appender);
            (non_blocking, base, guard)
        }
        DebugLogRotation::Session => {
            let (dir, base_name) = split_dir_and_name(&base)?;
            std::fs::create_dir_all(&dir)
                .with_context(|| format!("Failed to create log directory: {}", dir.display()))?;

            cleanup_rotated_logs(
                &dir,
                &format!("{base_name}.session-"),
                config.debug_log_keep.unwrap_or(20),
            )?;

            let session_path = build_session_log_path(&dir, &base_name);
            let (non_blocking, guard) = tracing_appender::non_blocking(open_append(&session_path)?);
            (non_blocking, session_path, guard)
        }
    };

    let filter =
        EnvFilter::try_new("gsearch=debug,warn").unwrap_or_else(|_| EnvFilter::new("debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_target(true)
        .with_writer(writer)
        .try_init()
        .ok();

    tracing::info!(log_file = %log_path.display(), rotation = ?rotation, "debug logging enabled");

    Ok(LogGuard(Some(guard)))
}

fn open_append(path: &Path) -> Result<std::fs::File> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file: {}", path.display()))
}

fn resolve_base_log_path(config_value: Option<&str>) -> Result<PathBuf> {
    let Some(raw) = config_value else {
        return Ok(crate::config::config_path()?.with_file_name(LOG_FILE_NAME));
    };

    let path = PathBuf::from(expand_tilde(raw));

    // Trailing separator or existing directory: log inside it.
    if raw.ends_with(std::path::MAIN_SEPARATOR) || path.is_dir() {
        return Ok(path.join(LOG_FILE_NAME));
    }

    Ok(path)
}

fn expand_tilde(raw: &str) -> String {
    if raw == "~" || raw.starts_with("~/") {
        if let Some(home) = dirs::home_dir() {
            let suffix = raw.strip_prefix('~').unwrap_or("");
            return format!("{}{}", home.display(), suffix);
        }
    }
    raw.to_string()
}

fn split_dir_and_name(path: &Path) -> Result<(PathBuf, String)> {
    let dir = path
        .parent()
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."));
    let name = path
        .file_name()
        .and_then(|s| s.to_str())
        .context("Invalid debug_log_path: not valid UTF-8")?
        .to_string();
    Ok((dir, name))
}

fn build_session_log_path(dir: &Path, base_name: &str) -> PathBuf {
    let ts = chrono::Local::now().format("%Y%m%d-%H%M%S").to_string();
    dir.join(format!("{base_name}.session-{ts}"))
}

/// Delete all but the newest `keep` files starting with `prefix`. `keep == 0` keeps everything.
fn cleanup_rotated_logs(dir: &Path, prefix: &str, keep: usize) -> Result<()> {
    if keep == 0 {
        return Ok(());
    }

    let mut candidates: Vec<String> = Vec::new();
    for entry in std::fs::read_dir(dir)
        .with_context(|| format!("Failed to read log directory: {}", dir.display()))?
    {
        let entry = entry?;
        let file_name = entry.file_name();
        let Some(name) = file_name.to_str() else { continue };
        if name.starts_with(prefix) {
            candidates.push(name.to_string());
        }
    }

    // Date and timestamp suffixes sort lexicographically; newest first.
    candidates.sort();
    candidates.reverse();

    for name in candidates.iter().skip(keep) {
        let path = dir.join(name);
        if let Err(e) = std::fs::remove_file(&path) {
            tracing::debug!(error = %e, file = %path.display(), "failed to remove old log file");
        }
    }

    Ok(())
}
