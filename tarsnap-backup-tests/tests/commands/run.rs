//! Tests for a normal backup run

use test_utils::{
    archive, at, daily_archives, monthly_archives, weekly_archives, ArchiveCall, BackupManager,
    Generation, MockArchiveOps, MockExecutor, MockResponse, SettingsBuilder, TarsnapOps,
};

#[test]
fn test_run_creates_one_archive_per_directory() {
    let ops = MockArchiveOps::new();
    let settings = SettingsBuilder::new()
        .dirs(&["/home", "/etc", "/home"])
        .build();

    let report = BackupManager::new(settings, ops.clone())
        .run(at(2024, 3, 5, 2, 0, 0))
        .unwrap();

    assert_eq!(report.generation, Generation::Daily);
    assert_eq!(
        ops.created(),
        vec!["20240305-020000-daily-/etc", "20240305-020000-daily-/home"]
    );
    assert_eq!(report.created, ops.created());
    assert!(report.deleted.is_empty());
}

#[test]
fn test_run_on_monthly_day() {
    let ops = MockArchiveOps::new().with_archives(monthly_archives("/home", 2));

    // 2024-03-01 is a Friday; monthly wins even with Friday as the weekly day
    let settings = SettingsBuilder::new().dir("/home").schedule(4, 1).build();
    let report = BackupManager::new(settings, ops.clone())
        .run(at(2024, 3, 1, 2, 0, 0))
        .unwrap();

    assert_eq!(report.generation, Generation::Monthly);
    assert_eq!(report.created, vec!["20240301-020000-monthly-/home"]);
    // Three monthlies with keep 2: the January 2023 one goes
    assert_eq!(report.deleted, vec!["20230101-030000-monthly-/home"]);
    assert!(!ops.stored().contains("20230101-030000-monthly-/home"));
}

#[test]
fn test_run_prunes_each_directory_separately() {
    let ops = MockArchiveOps::new()
        .with_archives(daily_archives("db", 7))
        .with_archives(daily_archives("db2", 3))
        .with_archives(weekly_archives("db", 4));
    let settings = SettingsBuilder::new().dirs(&["db", "db2"]).build();

    // Monday 2024-03-04 with the default schedule is weekly
    let report = BackupManager::new(settings, ops.clone())
        .run(at(2024, 3, 4, 2, 0, 0))
        .unwrap();

    assert_eq!(report.generation, Generation::Weekly);
    assert_eq!(report.deleted, vec!["20240101-030000-weekly-db"]);
    assert_eq!(ops.deleted(), report.deleted);
}

#[test]
fn test_run_call_sequence() {
    let ops = MockArchiveOps::new().with_archives(daily_archives("/home", 7));
    let settings = SettingsBuilder::new().dir("/home").build();

    BackupManager::new(settings, ops.clone())
        .run(at(2024, 3, 5, 2, 0, 0))
        .unwrap();

    let calls = ops.get_calls();
    assert_eq!(calls.len(), 3);
    assert!(matches!(calls[0], ArchiveCall::Create { .. }));
    assert_eq!(calls[1], ArchiveCall::List);
    assert_eq!(
        calls[2],
        ArchiveCall::Delete {
            name: archive(at(2024, 1, 1, 3, 0, 0), Generation::Daily, "/home"),
        }
    );
}

#[test]
fn test_run_ignores_foreign_listing_lines() {
    let ops = MockArchiveOps::new()
        .with_archives(daily_archives("/home", 3))
        .with_noise(&["", "something else", "20240101-030000-daily-/home2"]);
    let settings = SettingsBuilder::new().dir("/home").keep(1, 4, 2).build();

    let report = BackupManager::new(settings, ops)
        .run(at(2024, 3, 5, 2, 0, 0))
        .unwrap();

    assert_eq!(report.deleted.len(), 3);
    assert!(report.deleted.iter().all(|n| n.ends_with("-daily-/home")));
}

#[test]
fn test_run_through_tarsnap_command_lines() {
    let listing = "20240304-020000-weekly-/home\n20240305-020000-daily-/home\n";
    let executor = MockExecutor::new().expect(
        "--list-archives",
        MockResponse::Success {
            stdout: listing.to_string(),
            stderr: String::new(),
        },
    );
    let ops = TarsnapOps::with_executor("tarsnap", executor.clone());
    let settings = SettingsBuilder::new().dir("/home").keep(0, 4, 2).build();

    let report = BackupManager::new(settings, ops)
        .run(at(2024, 3, 5, 2, 0, 0))
        .unwrap();

    assert_eq!(report.deleted, vec!["20240305-020000-daily-/home"]);

    let args: Vec<Vec<String>> = executor.get_calls().into_iter().map(|c| c.args).collect();
    assert_eq!(
        args,
        vec![
            vec!["-c", "-f", "20240305-020000-daily-/home", "/home"],
            vec!["--list-archives"],
            vec!["-d", "-f", "20240305-020000-daily-/home"],
        ]
    );
}
