//! Denylist management module
//!
//! Handles loading and querying the list of commonly used passwords.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DenylistError {
    #[error("Denylist file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read denylist file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Denylist file is empty")]
    EmptyFile,
}

/// Set of disallowed passwords, matched case-insensitively.
///
/// Built once and read-only afterwards; share a single instance by
/// reference across evaluator calls.
#[derive(Debug, Clone, Default)]
pub struct Denylist {
    words: HashSet<String>,
}

impl Denylist {
    /// Returns the denylist file path.
    ///
    /// Priority:
    /// 1. Environment variable `PWD_DENYLIST_PATH`
    /// 2. Default path `./assets/denylist.txt`
    pub fn default_path() -> PathBuf {
        std::env::var("PWD_DENYLIST_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./assets/denylist.txt"))
    }

    /// Loads a denylist from a newline-delimited word file.
    ///
    /// Each non-empty line becomes one entry, trimmed and lowercased.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File does not exist
    /// - File cannot be read
    /// - File contains no words
    ///
    /// All variants are recoverable at the call site by substituting
    /// [`Denylist::default`].
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Denylist, DenylistError> {
        let path = path.as_ref();

        if !path.exists() {
            #[cfg(feature = "tracing")]
            tracing::error!("Denylist load FAILED: FileNotFound {}", path.display());
            return Err(DenylistError::FileNotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)?;

        if content.trim().is_empty() {
            #[cfg(feature = "tracing")]
            tracing::error!("Denylist load FAILED: Empty file {}", path.display());
            return Err(DenylistError::EmptyFile);
        }

        let words: HashSet<String> = content
            .lines()
            .map(|l| l.trim().to_lowercase())
            .filter(|l| !l.is_empty())
            .collect();

        #[cfg(feature = "tracing")]
        tracing::info!(
            "Denylist loaded: {} passwords from {}",
            words.len(),
            path.display()
        );

        Ok(Denylist { words })
    }

    /// Checks if a password is in the denylist (case-insensitive).
    pub fn contains(&self, password: &str) -> bool {
        self.words.contains(&password.to_lowercase())
    }

    /// Number of entries in the denylist.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` if the denylist holds no entries.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for Denylist {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Denylist {
        let words = iter
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        Denylist { words }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Helper to safely set env var in tests
    fn set_env(key: &str, value: &str) {
        // SAFETY: This is only for testing purposes in single-threaded test context
        unsafe { std::env::set_var(key, value) };
    }

    /// Helper to safely remove env var in tests
    fn remove_env(key: &str) {
        // SAFETY: This is only for testing purposes in single-threaded test context
        unsafe { std::env::remove_var(key) };
    }

    fn file_with_lines(lines: &[&str]) -> NamedTempFile {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        for line in lines {
            writeln!(temp_file, "{}", line).expect("Failed to write");
        }
        temp_file
    }

    #[test]
    #[serial]
    fn test_default_path_fallback() {
        remove_env("PWD_DENYLIST_PATH");

        let path = Denylist::default_path();
        assert_eq!(path, PathBuf::from("./assets/denylist.txt"));
    }

    #[test]
    #[serial]
    fn test_default_path_from_env() {
        let custom_path = "/custom/path/denylist.txt";
        set_env("PWD_DENYLIST_PATH", custom_path);

        let path = Denylist::default_path();
        assert_eq!(path, PathBuf::from(custom_path));

        remove_env("PWD_DENYLIST_PATH");
    }

    #[test]
    fn test_from_file_not_found() {
        let result = Denylist::from_file("/nonexistent/path/denylist.txt");

        match result {
            Err(DenylistError::FileNotFound(_)) => {}
            _ => panic!("Expected FileNotFound error"),
        }
    }

    #[test]
    fn test_from_file_empty() {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        write!(temp_file, "  \n\n  \n").expect("Failed to write whitespace");

        let result = Denylist::from_file(temp_file.path());
        assert!(matches!(result, Err(DenylistError::EmptyFile)));
    }

    #[test]
    fn test_from_file_success() {
        let temp_file = file_with_lines(&["password123", "qwerty"]);

        let denylist = Denylist::from_file(temp_file.path()).expect("Load should succeed");
        assert_eq!(denylist.len(), 2);
        assert!(denylist.contains("password123"));
        assert!(denylist.contains("qwerty"));
    }

    #[test]
    fn test_from_file_trims_and_lowercases() {
        let temp_file = file_with_lines(&["  PassWord  ", "", "LETMEIN", "   "]);

        let denylist = Denylist::from_file(temp_file.path()).expect("Load should succeed");
        assert_eq!(denylist.len(), 2);
        assert!(denylist.contains("password"));
        assert!(denylist.contains("letmein"));
    }

    #[test]
    fn test_contains_case_insensitive() {
        let denylist: Denylist = ["testpassword"].into_iter().collect();

        assert!(denylist.contains("testpassword"));
        assert!(denylist.contains("TESTPASSWORD"));
        assert!(denylist.contains("TestPassword"));
        assert!(!denylist.contains("veryuncommonpassword987"));
    }

    #[test]
    fn test_from_iter_normalizes_entries() {
        let denylist: Denylist = [" Admin ", "", "Qwerty"].into_iter().collect();

        assert_eq!(denylist.len(), 2);
        assert!(denylist.contains("admin"));
        assert!(denylist.contains("qwerty"));
    }

    #[test]
    fn test_default_is_empty() {
        let denylist = Denylist::default();
        assert!(denylist.is_empty());
        assert!(!denylist.contains("anything"));
    }
}
