//! Tests for failing archive tool invocations
//!
//! Any failure ends the run at once; nothing already done is rolled back.

use test_utils::{
    at, daily_archives, BackupManager, MockArchiveOps, ResultAssertions, SettingsBuilder,
};

#[test]
fn test_create_failure_stops_before_listing() {
    let ops = MockArchiveOps::new().with_failing_create();
    let settings = SettingsBuilder::new().dirs(&["/etc", "/home"]).build();

    BackupManager::new(settings, ops.clone())
        .run(at(2024, 3, 5, 2, 0, 0))
        .assert_err_contains("Backup of /etc failed");

    assert_eq!(ops.get_calls().len(), 1);
    assert!(!ops.list_called());
}

#[test]
fn test_create_failure_keeps_earlier_archives() {
    let ops = MockArchiveOps::new().with_failing_create_for("/home");
    let settings = SettingsBuilder::new().dirs(&["/etc", "/home", "/srv"]).build();

    BackupManager::new(settings, ops.clone())
        .run(at(2024, 3, 5, 2, 0, 0))
        .assert_err();

    // "/etc" was created before "/home" failed; "/srv" was never attempted
    assert_eq!(ops.stored().len(), 1);
    assert_eq!(ops.created().len(), 2);
}

#[test]
fn test_list_failure_deletes_nothing() {
    let ops = MockArchiveOps::new()
        .with_archives(daily_archives("/home", 20))
        .with_failing_list();
    let settings = SettingsBuilder::new().dir("/home").build();

    BackupManager::new(settings, ops.clone())
        .run(at(2024, 3, 5, 2, 0, 0))
        .assert_err_contains("Failed to retrieve archive list");

    assert!(ops.deleted().is_empty());
}

#[test]
fn test_delete_failure_stops_remaining_deletions() {
    let ops = MockArchiveOps::new()
        .with_archives(daily_archives("/home", 10))
        .with_failing_delete_for("20240102-030000-daily-/home");
    let settings = SettingsBuilder::new().dir("/home").build();

    BackupManager::new(settings, ops.clone())
        .run(at(2024, 3, 5, 2, 0, 0))
        .assert_err_contains("Deleting 20240102-030000-daily-/home failed");

    // Deletions run newest first and stop at the failing one; 0101 is never attempted
    assert_eq!(
        ops.deleted(),
        vec![
            "20240104-030000-daily-/home",
            "20240103-030000-daily-/home",
            "20240102-030000-daily-/home",
        ]
    );
    assert!(ops.stored().contains("20240101-030000-daily-/home"));
}

#[test]
fn test_dry_run_never_hits_failing_create_or_delete() {
    let ops = MockArchiveOps::new()
        .with_archives(daily_archives("/home", 10))
        .with_failing_create()
        .with_failing_delete();
    let settings = SettingsBuilder::new().dir("/home").dry_run().build();

    let report = BackupManager::new(settings, ops)
        .run(at(2024, 3, 5, 2, 0, 0))
        .assert_ok();

    assert_eq!(report.deleted.len(), 4);
}
