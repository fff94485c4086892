use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use thiserror::Error;
use tracing_subscriber::EnvFilter;

use super::config::Config;

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("cannot open log file {path}: {source}")]
    OpenLogFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid log filter: {0}")]
    InvalidFilter(#[from] tracing_subscriber::filter::ParseError),
    #[error("cannot install log subscriber: {0}")]
    Install(String),
}

/// Opens `path` for appending, creating it and missing parent directories.
pub fn open_log_file(path: &Path) -> Result<File, LoggingError> {
    let open_err = |source| LoggingError::OpenLogFile {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(open_err)?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(open_err)
}

/// Installs the global `tracing` subscriber described by `config`.
///
/// Returns `Ok(false)` without installing anything when no log file is
/// configured.
pub fn init_logging(config: &Config) -> Result<bool, LoggingError> {
    let Some(path) = config.log_file.as_deref() else {
        return Ok(false);
    };

    let filter = EnvFilter::try_new(&config.log_filter)?;
    let file = open_log_file(path)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_target(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|e| LoggingError::Install(e.to_string()))?;

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_open_log_file_creates_parents_and_appends() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("todo.log");

        let mut file = open_log_file(&path).unwrap();
        writeln!(file, "first").unwrap();
        drop(file);

        let mut file = open_log_file(&path).unwrap();
        writeln!(file, "second").unwrap();
        drop(file);

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "first\nsecond\n");
    }

    #[test]
    fn test_open_log_file_reports_path() {
        let dir = tempdir().unwrap();
        let err = open_log_file(dir.path()).unwrap_err();

        assert!(matches!(err, LoggingError::OpenLogFile { .. }));
        assert!(err.to_string().contains(&dir.path().display().to_string()));
    }

    #[test]
    fn test_init_logging_disabled_without_file() {
        let config = Config::default();
        assert!(!init_logging(&config).unwrap());
    }

    #[test]
    fn test_init_logging_rejects_bad_filter() {
        let dir = tempdir().unwrap();
        let config = Config {
            log_file: Some(dir.path().join("todo.log")),
            log_filter: "todolist=notalevel".to_string(),
            ..Config::default()
        };

        let err = init_logging(&config).unwrap_err();
        assert!(matches!(err, LoggingError::InvalidFilter(_)));
        assert!(!dir.path().join("todo.log").exists());
    }
}
