//! Test fixtures and sample data
//!
//! Provides pre-built archive names and listings for testing.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use std::collections::BTreeSet;
use tarsnap_backup::rotation::{format_archive_name, Generation};

/// Build a timestamp
pub fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(hour, minute, second))
        .expect("invalid fixture timestamp")
}

/// Name of one archive
pub fn archive(timestamp: NaiveDateTime, generation: Generation, directory: &str) -> String {
    format_archive_name(timestamp, generation, directory)
}

/// `count` archives of one generation, one per `step`, oldest at `start`
pub fn archive_series(
    directory: &str,
    generation: Generation,
    start: NaiveDateTime,
    step: Duration,
    count: usize,
) -> Vec<String> {
    (0..count)
        .map(|i| archive(start + step * i as i32, generation, directory))
        .collect()
}

/// `count` daily archives for `directory`, one per day starting 2024-01-01 03:00
pub fn daily_archives(directory: &str, count: usize) -> Vec<String> {
    archive_series(
        directory,
        Generation::Daily,
        at(2024, 1, 1, 3, 0, 0),
        Duration::days(1),
        count,
    )
}

/// `count` weekly archives for `directory`, one per Monday starting 2024-01-01
pub fn weekly_archives(directory: &str, count: usize) -> Vec<String> {
    archive_series(
        directory,
        Generation::Weekly,
        at(2024, 1, 1, 3, 0, 0),
        Duration::weeks(1),
        count,
    )
}

/// `count` monthly archives for `directory`, on the 1st of each month from January 2023
pub fn monthly_archives(directory: &str, count: usize) -> Vec<String> {
    (0..count)
        .map(|i| {
            let month = (i % 12) as u32 + 1;
            let year = 2023 + (i / 12) as i32;
            archive(at(year, month, 1, 3, 0, 0), Generation::Monthly, directory)
        })
        .collect()
}

/// Collect names into the set the selector expects
pub fn name_set<I, S>(names: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    names.into_iter().map(Into::into).collect()
}

/// Lines found in real listings that are not archives of this tool
pub fn foreign_listing_lines() -> Vec<&'static str> {
    vec![
        "manual-snapshot-2023",
        "20240101-030000-hourly-/home",
        "20240101-030000-daily",
        "2024-01-01-daily-/home",
    ]
}

/// Minimal valid config TOML
pub fn minimal_config_toml() -> &'static str {
    r#"
directories = ["/home"]
"#
}

/// Config exercising every section
pub fn full_config_toml() -> &'static str {
    r#"
directories = ["/home", "/etc", "/var/lib/postgresql"]
tarsnap = "/usr/local/bin/tarsnap"
log_max_files = 3

[retention]
daily = 14
weekly = 8
monthly = 12

[schedule]
weekly_day = 6
monthly_day = 15
"#
}
