use anyhow::Context;
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Send tracing output to `path`, appending.
///
/// The terminal belongs to the UI, so there is no console subscriber; without
/// a log file, events are dropped.
pub fn init(path: &Path, directive: &str) -> anyhow::Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(directive))
        .with_context(|| format!("invalid log filter `{directive}`"))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_target(true)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))
        .context("failed to install tracing subscriber")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn log_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("bubble-sort-{}-{name}.log", std::process::id()))
    }

    #[test]
    fn missing_directory_is_reported() {
        let path = log_path("missing").join("nested").join("x.log");
        let err = init(&path, "info").unwrap_err();
        assert!(err.to_string().starts_with("failed to open log file"));
    }

    #[test]
    fn second_subscriber_is_rejected() {
        let path = log_path("twice");
        let first = init(&path, "debug");
        let second = init(&path, "debug");
        // Only one global subscriber per process.
        assert!(first.is_err() || second.is_err());
        let err = second.err().or(first.err()).unwrap();
        assert_eq!(err.to_string(), "failed to install tracing subscriber");
        assert!(err.chain().count() >= 2);
        let _ = std::fs::remove_file(&path);
    }
}
