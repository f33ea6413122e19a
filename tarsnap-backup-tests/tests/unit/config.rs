//! Unit tests for configuration loading, merging and response files

use tarsnap_backup::config::{expand_response_files, load_config, resolve_settings};
use test_utils::{
    full_config_toml, minimal_config_toml, ConfigError, ConfigOverrides, ResultAssertions,
    RetentionPolicy, SettingsBuilder, TestContext,
};

#[test]
fn test_minimal_config_uses_defaults() {
    let ctx = TestContext::new();
    let path = ctx.create_file("config.toml", minimal_config_toml());

    let file = load_config(&path).assert_ok();
    let settings = resolve_settings(&ConfigOverrides::default(), Some(&file)).assert_ok();

    assert_eq!(settings.directories.len(), 1);
    assert_eq!(settings.policy, RetentionPolicy::default());
    assert_eq!(settings.tarsnap, "tarsnap");
}

#[test]
fn test_full_config() {
    let ctx = TestContext::new();
    let path = ctx.create_file("config.toml", full_config_toml());

    let file = load_config(&path).assert_ok();
    let settings = resolve_settings(&ConfigOverrides::default(), Some(&file)).assert_ok();

    assert_eq!(settings.directories.len(), 3);
    assert_eq!(settings.policy.daily, 14);
    assert_eq!(settings.policy.weekly, 8);
    assert_eq!(settings.policy.monthly, 12);
    assert_eq!(settings.policy.weekly_day, 6);
    assert_eq!(settings.policy.monthly_day, 15);
    assert_eq!(settings.tarsnap, "/usr/local/bin/tarsnap");
    assert_eq!(settings.log_max_files, 3);
}

#[test]
fn test_command_line_wins_over_file() {
    let (path, _temp_dir) = SettingsBuilder::new()
        .dir("/home")
        .keep(10, 10, 10)
        .schedule(3, 20)
        .persist();
    let file = load_config(&path).assert_ok();

    let overrides = ConfigOverrides {
        directories: vec!["/etc".to_string(), "/home".to_string()],
        weekly: Some(1),
        monthly_day: Some(2),
        dry_run: true,
        ..Default::default()
    };
    let settings = resolve_settings(&overrides, Some(&file)).assert_ok();

    assert_eq!(settings.directories.len(), 2);
    assert_eq!(settings.policy.daily, 10);
    assert_eq!(settings.policy.weekly, 1);
    assert_eq!(settings.policy.weekly_day, 3);
    assert_eq!(settings.policy.monthly_day, 2);
    assert!(settings.dry_run);
}

#[test]
fn test_invalid_day_in_file() {
    let ctx = TestContext::new();
    let path = ctx.create_file(
        "config.toml",
        "directories = [\"/home\"]\n[schedule]\nmonthly_day = 40\n",
    );

    let file = load_config(&path).assert_ok();
    resolve_settings(&ConfigOverrides::default(), Some(&file)).assert_err_contains("monthly day");
}

#[test]
fn test_unknown_field_types_rejected() {
    let ctx = TestContext::new();
    let path = ctx.create_file("config.toml", "directories = \"/home\"\n");

    let result = load_config(&path);
    assert!(matches!(result, Err(ConfigError::ParseError(_))));
}

#[test]
fn test_no_directories_anywhere() {
    resolve_settings(&ConfigOverrides::default(), None).assert_err_contains("No directories");
}

#[test]
fn test_response_file_with_comments() {
    let ctx = TestContext::new();
    let arg = ctx.create_response_file(
        "backup.args",
        "# nightly backup\n--dir /home\n--dir \"/srv/shared data\"  \n\n# keep more dailies\n--daily 14\n",
    );

    let expanded: Vec<String> = expand_response_files(["tarsnap-backup".to_string(), "-v".to_string(), arg])
        .assert_ok()
        .into_iter()
        .map(|a| a.into_string().unwrap())
        .collect();

    assert_eq!(
        expanded,
        vec![
            "tarsnap-backup",
            "-v",
            "--dir",
            "/home",
            "--dir",
            "/srv/shared data",
            "--daily",
            "14",
        ]
    );
}

#[test]
fn test_response_file_errors() {
    let ctx = TestContext::new();
    let arg = ctx.create_response_file("broken.args", "--dir \"/home\n");

    let result = expand_response_files(["tarsnap-backup".to_string(), arg]);
    assert!(matches!(result, Err(ConfigError::ResponseFileError { .. })));
}
