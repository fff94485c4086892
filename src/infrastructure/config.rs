use std::path::PathBuf;

use crate::application::DEFAULT_TITLE;

pub const TITLE_VAR: &str = "TODOLIST_TITLE";
pub const LOG_FILE_VAR: &str = "TODOLIST_LOG_FILE";
pub const LOG_FILTER_VAR: &str = "TODOLIST_LOG";

pub const DEFAULT_LOG_FILTER: &str = "info";

/// Runtime settings, read from the environment.
///
/// # Examples
///
/// ```
/// use todolist::infrastructure::Config;
///
/// let config = Config::from_lookup(|name| match name {
///     "TODOLIST_LOG_FILE" => Some("todo.log".to_string()),
///     _ => None,
/// });
/// assert_eq!(config.log_file.unwrap().to_str(), Some("todo.log"));
/// assert_eq!(config.log_filter, "info");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub title: String,
    /// Logging is off when no file is given; the terminal belongs to the UI.
    pub log_file: Option<PathBuf>,
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            log_file: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds a config from an arbitrary variable lookup. Blank values count
    /// as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        let defaults = Self::default();

        Self {
            title: get(TITLE_VAR).unwrap_or(defaults.title),
            log_file: get(LOG_FILE_VAR).map(PathBuf::from),
            log_filter: get(LOG_FILTER_VAR).unwrap_or(defaults.log_filter),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| vars.get(name).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_lookup(lookup_from(&[]));
        assert_eq!(config, Config::default());
        assert_eq!(config.title, "ToDo List Manager");
        assert!(config.log_file.is_none());
    }

    #[test]
    fn test_reads_all_variables() {
        let config = Config::from_lookup(lookup_from(&[
            (TITLE_VAR, "Chores"),
            (LOG_FILE_VAR, "/tmp/todo.log"),
            (LOG_FILTER_VAR, "todolist=debug"),
        ]));

        assert_eq!(config.title, "Chores");
        assert_eq!(config.log_file, Some(PathBuf::from("/tmp/todo.log")));
        assert_eq!(config.log_filter, "todolist=debug");
    }

    #[test]
    fn test_blank_values_fall_back_to_defaults() {
        let config = Config::from_lookup(lookup_from(&[
            (TITLE_VAR, "  "),
            (LOG_FILE_VAR, ""),
        ]));
        assert_eq!(config, Config::default());
    }
}
