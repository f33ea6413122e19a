//! Test context and harness
//!
//! Provides a temporary directory with helpers for config and response files.

use anyhow::Result;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test context that manages test resources and provides common utilities
pub struct TestContext {
    /// Temporary directory for test files
    temp_dir: TempDir,
}

impl TestContext {
    /// Create a new test context with a temporary directory
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    /// Get the temporary directory path
    pub fn temp_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Create a subdirectory in the temp dir
    pub fn create_subdir(&self, name: &str) -> PathBuf {
        let path = self.temp_dir.path().join(name);
        std::fs::create_dir_all(&path).expect("Failed to create subdirectory");
        path
    }

    /// Create a file in the temp dir
    pub fn create_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.temp_dir.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Create a response file and return the `@path` argument referring to it
    pub fn create_response_file(&self, name: &str, content: &str) -> String {
        format!("@{}", self.create_file(name, content).display())
    }

    /// Read a file from the temp directory
    pub fn read_file(&self, name: &str) -> Result<String> {
        let path = self.temp_dir.path().join(name);
        Ok(std::fs::read_to_string(path)?)
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Extension trait for assertion helpers
pub trait ResultAssertions<T> {
    /// Assert that the result is Ok and return the value
    fn assert_ok(self) -> T;

    /// Assert that the result is Err
    fn assert_err(self);

    /// Assert that the result is Err and the error message contains the given string
    fn assert_err_contains(self, needle: &str);
}

impl<T: std::fmt::Debug, E: std::fmt::Debug> ResultAssertions<T> for std::result::Result<T, E> {
    fn assert_ok(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => panic!("Expected Ok, got Err: {:?}", e),
        }
    }

    fn assert_err(self) {
        if let Ok(v) = self {
            panic!("Expected Err, got Ok: {:?}", v);
        }
    }

    fn assert_err_contains(self, needle: &str) {
        match self {
            Ok(v) => panic!("Expected Err containing '{}', got Ok: {:?}", needle, v),
            Err(e) => {
                let err_msg = format!("{:?}", e);
                assert!(
                    err_msg.contains(needle),
                    "Error '{}' does not contain '{}'",
                    err_msg,
                    needle
                );
            }
        }
    }
}

/// Extension trait for Option assertions
pub trait OptionAssertions<T> {
    /// Assert that the option is Some and return the value
    fn assert_some(self) -> T;

    /// Assert that the option is None
    fn assert_none(self);
}

impl<T: std::fmt::Debug> OptionAssertions<T> for Option<T> {
    fn assert_some(self) -> T {
        match self {
            Some(v) => v,
            None => panic!("Expected Some, got None"),
        }
    }

    fn assert_none(self) {
        if let Some(v) = self {
            panic!("Expected None, got Some: {:?}", v);
        }
    }
}
