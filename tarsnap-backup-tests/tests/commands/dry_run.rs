//! Tests for dry runs
//!
//! A dry run lists archives but never creates or deletes any, while still
//! reporting what a real run would prune.

use test_utils::{at, daily_archives, BackupManager, MockArchiveOps, SettingsBuilder};

#[test]
fn test_dry_run_makes_no_changes() {
    let existing = daily_archives("/home", 10);
    let ops = MockArchiveOps::new().with_archives(existing.clone());
    let settings = SettingsBuilder::new().dirs(&["/home", "/etc"]).dry_run().build();

    let report = BackupManager::new(settings, ops.clone())
        .run(at(2024, 3, 5, 2, 0, 0))
        .unwrap();

    assert!(report.dry_run);
    assert!(ops.created().is_empty());
    assert!(ops.deleted().is_empty());
    assert!(ops.list_called());
    assert_eq!(ops.stored().len(), existing.len());
    assert_eq!(report.created.len(), 2);
}

#[test]
fn test_dry_run_counts_the_archive_it_would_create() {
    let ops = MockArchiveOps::new().with_archives(daily_archives("/home", 7));
    let settings = SettingsBuilder::new().dir("/home").dry_run().build();

    let report = BackupManager::new(settings, ops)
        .run(at(2024, 3, 5, 2, 0, 0))
        .unwrap();

    // 7 existing + 1 simulated, keep 7
    assert_eq!(report.deleted, vec!["20240101-030000-daily-/home"]);
}

#[test]
fn test_dry_run_matches_real_run() {
    let existing = daily_archives("/home", 9);
    let now = at(2024, 3, 5, 2, 0, 0);

    let dry_ops = MockArchiveOps::new().with_archives(existing.clone());
    let dry = BackupManager::new(SettingsBuilder::new().dir("/home").dry_run().build(), dry_ops)
        .run(now)
        .unwrap();

    let real_ops = MockArchiveOps::new().with_archives(existing);
    let real = BackupManager::new(SettingsBuilder::new().dir("/home").build(), real_ops)
        .run(now)
        .unwrap();

    assert_eq!(dry.created, real.created);
    assert_eq!(dry.deleted, real.deleted);
}
