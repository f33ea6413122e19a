use crate::rotation::Generation;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::PathBuf;

/// Contents of the optional TOML configuration file
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Directories to back up
    #[serde(default)]
    pub directories: Vec<String>,

    /// Archive tool binary (name on PATH or absolute path)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tarsnap: Option<String>,

    /// Logging configuration
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_directory: Option<PathBuf>,
    #[serde(default = "default_log_max_files")]
    pub log_max_files: u32,

    #[serde(default)]
    pub retention: RetentionConfig,

    #[serde(default)]
    pub schedule: ScheduleConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            directories: Vec::new(),
            tarsnap: None,
            log_directory: None,
            log_max_files: default_log_max_files(),
            retention: RetentionConfig::default(),
            schedule: ScheduleConfig::default(),
        }
    }
}

/// Keep counts per generation
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RetentionConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub daily: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weekly: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monthly: Option<u32>,
}

/// Days on which weekly and monthly archives are taken
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ScheduleConfig {
    /// 0 = Monday, 6 = Sunday
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weekly_day: Option<u32>,
    /// 1-31
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monthly_day: Option<u32>,
}

/// Settings given on the command line, taking precedence over the config file
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub directories: Vec<String>,
    pub daily: Option<u32>,
    pub weekly: Option<u32>,
    pub monthly: Option<u32>,
    pub weekly_day: Option<u32>,
    pub monthly_day: Option<u32>,
    pub dry_run: bool,
    pub tarsnap: Option<String>,
    pub log_directory: Option<PathBuf>,
}

/// Retention policy applied to every directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetentionPolicy {
    pub daily: u32,
    pub weekly: u32,
    pub monthly: u32,
    /// Day of week for weekly archives, 0 = Monday
    pub weekly_day: u32,
    /// Day of month for monthly archives
    pub monthly_day: u32,
}

impl RetentionPolicy {
    /// Number of archives of `generation` to keep per directory
    pub fn keep(&self, generation: Generation) -> u32 {
        match generation {
            Generation::Daily => self.daily,
            Generation::Weekly => self.weekly,
            Generation::Monthly => self.monthly,
        }
    }
}

impl Default for RetentionPolicy {
    fn default() -> Self {
        Self {
            daily: default_retention_daily(),
            weekly: default_retention_weekly(),
            monthly: default_retention_monthly(),
            weekly_day: default_weekly_day(),
            monthly_day: default_monthly_day(),
        }
    }
}

/// Fully resolved settings for one run
#[derive(Debug, Clone)]
pub struct BackupSettings {
    pub directories: BTreeSet<String>,
    pub policy: RetentionPolicy,
    pub dry_run: bool,
    pub tarsnap: String,
    pub log_directory: Option<PathBuf>,
    pub log_max_files: u32,
}

// Default value functions

pub(crate) fn default_retention_daily() -> u32 { 7 }
pub(crate) fn default_retention_weekly() -> u32 { 4 }
pub(crate) fn default_retention_monthly() -> u32 { 2 }
pub(crate) fn default_weekly_day() -> u32 { 0 }
pub(crate) fn default_monthly_day() -> u32 { 1 }
pub(crate) fn default_tarsnap() -> String { "tarsnap".to_string() }
pub(crate) fn default_log_max_files() -> u32 { 10 }
