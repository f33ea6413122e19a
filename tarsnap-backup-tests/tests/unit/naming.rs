//! Unit tests for archive naming
//!
//! Names must round-trip and must never be attributed to the wrong directory.

use rstest::rstest;
use tarsnap_backup::rotation::{format_archive_name, parse_for_directory, ArchiveName};
use test_utils::{at, foreign_listing_lines, Generation, OptionAssertions};

#[rstest]
#[case(Generation::Daily, "/home")]
#[case(Generation::Weekly, "/var/lib/postgresql")]
#[case(Generation::Monthly, "etc")]
#[case(Generation::Daily, "/srv/with space")]
#[case(Generation::Weekly, "/srv/dash-ed-monthly-name")]
fn test_round_trip(#[case] generation: Generation, #[case] directory: &str) {
    let timestamp = at(2024, 2, 29, 23, 5, 1);
    let name = format_archive_name(timestamp, generation, directory);

    let (parsed_ts, parsed_generation) = parse_for_directory(&name, directory).assert_some();
    assert_eq!(parsed_ts, "20240229-230501");
    assert_eq!(parsed_generation, generation);
}

#[rstest]
#[case("db", "db2")]
#[case("db2", "db")]
#[case("/home", "/home/user")]
#[case("/home/user", "/home")]
#[case("/home", "/home/")]
fn test_prefix_directories_never_cross_match(#[case] archived: &str, #[case] queried: &str) {
    for generation in Generation::ALL {
        let name = format_archive_name(at(2024, 1, 1, 0, 0, 0), generation, archived);
        parse_for_directory(&name, queried).assert_none();
    }
}

#[test]
fn test_structured_parse() {
    let parsed = ArchiveName::parse("20240301-020000-monthly-/home").assert_some();
    assert_eq!(parsed.timestamp, "20240301-020000");
    assert_eq!(parsed.generation, Generation::Monthly);
    assert_eq!(parsed.directory, "/home");
    assert_eq!(parsed.to_string(), "20240301-020000-monthly-/home");
}

#[test]
fn test_foreign_names_ignored() {
    for line in foreign_listing_lines() {
        parse_for_directory(line, "/home").assert_none();
    }
}

#[test]
fn test_timestamps_sort_chronologically() {
    let earlier = format_archive_name(at(2023, 12, 31, 23, 59, 59), Generation::Daily, "d");
    let later = format_archive_name(at(2024, 1, 1, 0, 0, 0), Generation::Daily, "d");
    assert!(earlier < later);
}
