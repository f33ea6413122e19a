//! Fluent API for building test settings
//!
//! Provides a builder pattern for creating settings with the same defaults as the CLI.

use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;
use tarsnap_backup::config::{
    BackupSettings, Config, RetentionConfig, RetentionPolicy, ScheduleConfig,
};
use tempfile::TempDir;

/// Builder for creating test settings
#[derive(Debug, Clone)]
pub struct SettingsBuilder {
    directories: BTreeSet<String>,
    policy: RetentionPolicy,
    dry_run: bool,
    tarsnap: String,
}

impl SettingsBuilder {
    /// Create a builder with the default policy and no directories
    pub fn new() -> Self {
        Self {
            directories: BTreeSet::new(),
            policy: RetentionPolicy::default(),
            dry_run: false,
            tarsnap: "tarsnap".to_string(),
        }
    }

    /// Add a directory to back up
    pub fn dir(mut self, directory: &str) -> Self {
        self.directories.insert(directory.to_string());
        self
    }

    /// Add several directories
    pub fn dirs(mut self, directories: &[&str]) -> Self {
        self.directories
            .extend(directories.iter().map(|d| d.to_string()));
        self
    }

    /// Set keep counts
    pub fn keep(mut self, daily: u32, weekly: u32, monthly: u32) -> Self {
        self.policy.daily = daily;
        self.policy.weekly = weekly;
        self.policy.monthly = monthly;
        self
    }

    /// Set the weekly and monthly days
    pub fn schedule(mut self, weekly_day: u32, monthly_day: u32) -> Self {
        self.policy.weekly_day = weekly_day;
        self.policy.monthly_day = monthly_day;
        self
    }

    pub fn dry_run(mut self) -> Self {
        self.dry_run = true;
        self
    }

    pub fn tarsnap(mut self, binary: &str) -> Self {
        self.tarsnap = binary.to_string();
        self
    }

    /// Build the settings
    pub fn build(self) -> BackupSettings {
        BackupSettings {
            directories: self.directories,
            policy: self.policy,
            dry_run: self.dry_run,
            tarsnap: self.tarsnap,
            log_directory: None,
            log_max_files: 10,
        }
    }

    /// The equivalent config file contents
    pub fn to_config(&self) -> Config {
        Config {
            directories: self.directories.iter().cloned().collect(),
            tarsnap: Some(self.tarsnap.clone()),
            retention: RetentionConfig {
                daily: Some(self.policy.daily),
                weekly: Some(self.policy.weekly),
                monthly: Some(self.policy.monthly),
            },
            schedule: ScheduleConfig {
                weekly_day: Some(self.policy.weekly_day),
                monthly_day: Some(self.policy.monthly_day),
            },
            ..Default::default()
        }
    }

    /// Write the equivalent config file into a fresh temp directory
    pub fn persist(&self) -> (PathBuf, TempDir) {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("tarsnap-backup.toml");
        let contents = toml::to_string_pretty(&self.to_config()).expect("Failed to serialize config");
        fs::write(&path, contents).expect("Failed to write config");
        (path, temp_dir)
    }
}

impl Default for SettingsBuilder {
    fn default() -> Self {
        Self::new()
    }
}
