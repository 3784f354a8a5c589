//! Environment search-path configuration.
//!
//! The SCSS-family ecosystem lets users extend import search paths through a
//! `SASS_PATH` environment variable. That is process-wide mutable state, so
//! it is captured exactly once at setup into a [`SearchPathConfig`] and
//! treated as read-only by the pipeline — deep components never read the
//! environment themselves.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use regex::Regex;

/// Environment variable naming additional import search paths.
pub const SEARCH_PATH_VAR: &str = "SASS_PATH";

/// The one line of a dotenv file this configuration cares about.
static SASS_PATH_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^SASS_PATH=(.+)").expect("search path pattern"));

/// Read-only snapshot of the environment's extra search paths.
///
/// Relative entries are resolved against the project directory at capture
/// time; resolving them against the process working directory would almost
/// certainly point somewhere wrong.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchPathConfig {
    include_paths: Vec<PathBuf>,
}

impl SearchPathConfig {
    /// No extra search paths.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Captures `SASS_PATH` from the process environment.
    pub fn from_env(project_dir: &Path) -> Self {
        match env::var(SEARCH_PATH_VAR) {
            Ok(raw) => Self::from_raw(&raw, project_dir),
            Err(_) => Self::empty(),
        }
    }

    /// Captures `SASS_PATH` from `<project_dir>/.env`.
    ///
    /// Only the one variable is read; the rest of the file is deliberately
    /// not applied to the process environment.
    pub fn from_dotenv(project_dir: &Path) -> Self {
        let Ok(contents) = fs::read_to_string(project_dir.join(".env")) else {
            return Self::empty();
        };
        match SASS_PATH_LINE.captures(&contents) {
            Some(caps) => Self::from_raw(&caps[1], project_dir),
            None => Self::empty(),
        }
    }

    fn from_raw(raw: &str, project_dir: &Path) -> Self {
        let include_paths = env::split_paths(raw)
            .map(|path| {
                if path.is_absolute() {
                    path
                } else {
                    project_dir.join(path)
                }
            })
            .collect();
        Self { include_paths }
    }

    /// The captured search paths, in declaration order.
    pub fn include_paths(&self) -> &[PathBuf] {
        &self.include_paths
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_from_env_resolves_relative_entries() {
        env::set_var(SEARCH_PATH_VAR, "vendor/styles:/abs/styles");
        let config = SearchPathConfig::from_env(Path::new("/project"));
        env::remove_var(SEARCH_PATH_VAR);

        assert_eq!(
            config.include_paths(),
            &[
                PathBuf::from("/project/vendor/styles"),
                PathBuf::from("/abs/styles"),
            ]
        );
    }

    #[test]
    #[serial]
    fn test_from_env_without_variable_is_empty() {
        env::remove_var(SEARCH_PATH_VAR);
        let config = SearchPathConfig::from_env(Path::new("/project"));
        assert!(config.include_paths().is_empty());
    }

    #[test]
    fn test_from_dotenv_reads_only_the_search_path_line() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(".env"),
            "API_KEY=secret\nSASS_PATH=vendor/styles\nOTHER=1\n",
        )
        .unwrap();

        let config = SearchPathConfig::from_dotenv(dir.path());
        assert_eq!(
            config.include_paths(),
            &[dir.path().join("vendor/styles")]
        );
    }

    #[test]
    fn test_from_dotenv_without_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        assert!(SearchPathConfig::from_dotenv(dir.path())
            .include_paths()
            .is_empty());
    }
}
