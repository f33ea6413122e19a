//! Archive operations abstraction for testability
//!
//! This module provides a trait-based abstraction over the archive tool,
//! enabling dependency injection and mocking for tests.

use super::executor::{CommandExecutor, RealExecutor};
use super::tarsnap;
use anyhow::{Context, Result};

/// Abstraction for archive tool operations, enabling mocking in tests
pub trait ArchiveOperations {
    /// Create archive `name` from `directory`
    fn create_archive(&self, name: &str, directory: &str) -> Result<()>;

    /// List the names of all archives
    fn list_archives(&self) -> Result<Vec<String>>;

    /// Delete archive `name`
    fn delete_archive(&self, name: &str) -> Result<()>;
}

/// Implementation invoking the tarsnap binary
#[derive(Debug, Clone)]
pub struct TarsnapOps<E: CommandExecutor = RealExecutor> {
    binary: String,
    executor: E,
}

impl TarsnapOps<RealExecutor> {
    pub fn new(binary: impl Into<String>) -> Self {
        Self::with_executor(binary, RealExecutor::new())
    }
}

impl<E: CommandExecutor> TarsnapOps<E> {
    /// Use a custom command executor
    pub fn with_executor(binary: impl Into<String>, executor: E) -> Self {
        Self {
            binary: binary.into(),
            executor,
        }
    }
}

impl<E: CommandExecutor> ArchiveOperations for TarsnapOps<E> {
    fn create_archive(&self, name: &str, directory: &str) -> Result<()> {
        self.executor
            .run_command(&self.binary, &tarsnap::create_args(name, directory))
            .with_context(|| format!("Failed to create archive {} for {}", name, directory))?;
        Ok(())
    }

    fn list_archives(&self) -> Result<Vec<String>> {
        let stdout = self
            .executor
            .run_command_stdout(&self.binary, &tarsnap::list_args())
            .context("Failed to list archives")?;
        Ok(tarsnap::parse_archive_list(&stdout))
    }

    fn delete_archive(&self, name: &str) -> Result<()> {
        self.executor
            .run_command(&self.binary, &tarsnap::delete_args(name))
            .with_context(|| format!("Failed to delete archive {}", name))?;
        Ok(())
    }
}

/// Mock implementation for testing
/// Available for use in external test crates
pub mod mock {
    use super::*;
    use std::collections::BTreeSet;
    use std::sync::{Arc, Mutex};

    /// Recorded operation call
    #[derive(Clone, Debug, PartialEq, Eq)]
    pub enum ArchiveCall {
        Create { name: String, directory: String },
        List,
        Delete { name: String },
    }

    /// When a mocked operation should fail
    #[derive(Clone, Debug, Default)]
    pub enum FailureMode {
        #[default]
        Never,
        Always,
        /// Fail only for this archive name or directory
        On(String),
    }

    impl FailureMode {
        fn applies_to(&self, subject: &str) -> bool {
            match self {
                FailureMode::Never => false,
                FailureMode::Always => true,
                FailureMode::On(target) => target == subject,
            }
        }
    }

    /// Mock archive operations backed by an in-memory archive list
    #[derive(Clone, Default)]
    pub struct MockArchiveOps {
        /// Recorded operation calls
        pub calls: Arc<Mutex<Vec<ArchiveCall>>>,
        /// Archives currently stored; creations and deletions update it
        pub archives: Arc<Mutex<BTreeSet<String>>>,
        /// Extra lines returned by list_archives that are not archives
        pub noise: Arc<Mutex<Vec<String>>>,
        pub fail_create: Arc<Mutex<FailureMode>>,
        pub fail_list: Arc<Mutex<FailureMode>>,
        pub fail_delete: Arc<Mutex<FailureMode>>,
    }

    impl MockArchiveOps {
        pub fn new() -> Self {
            Self::default()
        }

        /// Configure existing archives
        pub fn with_archives<I, S>(self, archives: I) -> Self
        where
            I: IntoIterator<Item = S>,
            S: Into<String>,
        {
            self.archives
                .lock()
                .unwrap()
                .extend(archives.into_iter().map(Into::into));
            self
        }

        /// Configure unrelated lines in the listing output
        pub fn with_noise(self, lines: &[&str]) -> Self {
            self.noise
                .lock()
                .unwrap()
                .extend(lines.iter().map(|l| l.to_string()));
            self
        }

        /// Configure every create to fail
        pub fn with_failing_create(self) -> Self {
            *self.fail_create.lock().unwrap() = FailureMode::Always;
            self
        }

        /// Configure create to fail for one directory
        pub fn with_failing_create_for(self, directory: &str) -> Self {
            *self.fail_create.lock().unwrap() = FailureMode::On(directory.to_string());
            self
        }

        /// Configure list_archives to fail
        pub fn with_failing_list(self) -> Self {
            *self.fail_list.lock().unwrap() = FailureMode::Always;
            self
        }

        /// Configure every delete to fail
        pub fn with_failing_delete(self) -> Self {
            *self.fail_delete.lock().unwrap() = FailureMode::Always;
            self
        }

        /// Configure delete to fail for one archive
        pub fn with_failing_delete_for(self, name: &str) -> Self {
            *self.fail_delete.lock().unwrap() = FailureMode::On(name.to_string());
            self
        }

        /// Get all recorded calls
        pub fn get_calls(&self) -> Vec<ArchiveCall> {
            self.calls.lock().unwrap().clone()
        }

        /// Names of archives passed to create, in call order
        pub fn created(&self) -> Vec<String> {
            self.calls
                .lock()
                .unwrap()
                .iter()
                .filter_map(|c| match c {
                    ArchiveCall::Create { name, .. } => Some(name.clone()),
                    _ => None,
                })
                .collect()
        }

        /// Names of archives passed to delete, in call order
        pub fn deleted(&self) -> Vec<String> {
            self.calls
                .lock()
                .unwrap()
                .iter()
                .filter_map(|c| match c {
                    ArchiveCall::Delete { name } => Some(name.clone()),
                    _ => None,
                })
                .collect()
        }

        /// Check if list_archives was called
        pub fn list_called(&self) -> bool {
            self.calls
                .lock()
                .unwrap()
                .iter()
                .any(|c| matches!(c, ArchiveCall::List))
        }

        /// Archives currently stored
        pub fn stored(&self) -> BTreeSet<String> {
            self.archives.lock().unwrap().clone()
        }

        fn record_call(&self, call: ArchiveCall) {
            self.calls.lock().unwrap().push(call);
        }
    }

    impl ArchiveOperations for MockArchiveOps {
        fn create_archive(&self, name: &str, directory: &str) -> Result<()> {
            self.record_call(ArchiveCall::Create {
                name: name.to_string(),
                directory: directory.to_string(),
            });
            if self.fail_create.lock().unwrap().applies_to(directory) {
                anyhow::bail!("Mock create failure for {}", directory);
            }
            self.archives.lock().unwrap().insert(name.to_string());
            Ok(())
        }

        fn list_archives(&self) -> Result<Vec<String>> {
            self.record_call(ArchiveCall::List);
            if self.fail_list.lock().unwrap().applies_to("") {
                anyhow::bail!("Mock list_archives failure");
            }
            let mut lines: Vec<String> = self.archives.lock().unwrap().iter().cloned().collect();
            lines.extend(self.noise.lock().unwrap().iter().cloned());
            Ok(lines)
        }

        fn delete_archive(&self, name: &str) -> Result<()> {
            self.record_call(ArchiveCall::Delete {
                name: name.to_string(),
            });
            if self.fail_delete.lock().unwrap().applies_to(name) {
                anyhow::bail!("Mock delete failure for {}", name);
            }
            self.archives.lock().unwrap().remove(name);
            Ok(())
        }
    }
}
