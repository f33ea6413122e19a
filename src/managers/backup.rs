//! Backup manager - creates today's archives and prunes old ones

use crate::config::BackupSettings;
use crate::rotation::{classify, format_archive_name, plan_deletions, Generation};
use crate::utils::archive_ops::ArchiveOperations;
use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use serde::Serialize;
use std::collections::BTreeSet;
use tracing::{debug, info};

/// Outcome of one run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunReport {
    pub generation: Generation,
    pub dry_run: bool,
    /// Archives created (or that would have been, on a dry run)
    pub created: Vec<String>,
    /// Archives deleted (or that would have been, on a dry run)
    pub deleted: Vec<String>,
}

pub struct BackupManager<O: ArchiveOperations> {
    settings: BackupSettings,
    ops: O,
}

impl<O: ArchiveOperations> BackupManager<O> {
    /// Create new backup manager
    pub fn new(settings: BackupSettings, ops: O) -> Self {
        Self { settings, ops }
    }

    /// Back up every directory and apply the retention policy.
    ///
    /// Stops at the first failing tool invocation; archives created or
    /// deleted before that point are left as they are.
    pub fn run(&self, now: NaiveDateTime) -> Result<RunReport> {
        let policy = &self.settings.policy;
        let dry_run = self.settings.dry_run;

        let generation = classify(now.date(), policy.monthly_day, policy.weekly_day);
        debug!("backup type: {}", generation);

        let created = self.create_archives(now, generation)?;

        let mut archives: BTreeSet<String> = self
            .ops
            .list_archives()
            .context("Failed to retrieve archive list")?
            .into_iter()
            .collect();
        debug!("{} archives listed", archives.len());

        if dry_run {
            // Count the archives this run would have created
            archives.extend(created.iter().cloned());
        }

        let deleted = plan_deletions(&archives, &self.settings.directories, policy);
        self.delete_archives(&deleted)?;

        Ok(RunReport {
            generation,
            dry_run,
            created,
            deleted,
        })
    }

    fn create_archives(&self, now: NaiveDateTime, generation: Generation) -> Result<Vec<String>> {
        let mut created = Vec::with_capacity(self.settings.directories.len());

        for directory in &self.settings.directories {
            let name = format_archive_name(now, generation, directory);
            info!("backing up {}", directory);
            debug!("archive name: {}", name);

            if !self.settings.dry_run {
                self.ops
                    .create_archive(&name, directory)
                    .with_context(|| format!("Backup of {} failed", directory))?;
            }

            created.push(name);
        }

        Ok(created)
    }

    fn delete_archives(&self, names: &[String]) -> Result<()> {
        for name in names {
            info!("deleting archive {}", name);

            if !self.settings.dry_run {
                self.ops
                    .delete_archive(name)
                    .with_context(|| format!("Deleting {} failed", name))?;
            }
        }

        Ok(())
    }
}
