//! Test utilities for tarsnap-backup
//!
//! This crate provides shared test utilities, mock implementations,
//! and helper functions for testing the tarsnap-backup application.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use test_utils::{SettingsBuilder, MockArchiveOps, BackupManager};
//!
//! #[test]
//! fn my_test() {
//!     let settings = SettingsBuilder::new().dir("/home").build();
//!     let ops = MockArchiveOps::new();
//!     let report = BackupManager::new(settings, ops.clone()).run(at(2024, 3, 1, 2, 0, 0));
//!     // ... assertions
//! }
//! ```

pub mod fixtures;
pub mod settings_builder;
pub mod test_context;

// Re-export commonly used items
pub use fixtures::*;
pub use settings_builder::SettingsBuilder;
pub use test_context::{OptionAssertions, ResultAssertions, TestContext};

// Re-export types from the main crate for convenience
pub use tarsnap_backup::config::{
    BackupSettings, Config, ConfigError, ConfigOverrides, RetentionConfig, RetentionPolicy,
    ScheduleConfig,
};
pub use tarsnap_backup::managers::backup::{BackupManager, RunReport};
pub use tarsnap_backup::rotation::{ArchiveName, Generation};

// Re-export mock implementations from the main crate
pub use tarsnap_backup::utils::archive_ops::mock::{ArchiveCall, FailureMode, MockArchiveOps};
pub use tarsnap_backup::utils::archive_ops::{ArchiveOperations, TarsnapOps};
pub use tarsnap_backup::utils::executor::mock::{CommandCall, MockExecutor, MockResponse};
pub use tarsnap_backup::utils::executor::CommandExecutor;

/// Common test result type
pub type TestResult<T = ()> = anyhow::Result<T>;
