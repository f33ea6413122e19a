use super::expand_tilde;
use super::types::*;
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Invalid response file {path}: {reason}")]
    ResponseFileError { path: String, reason: String },

    #[error("Validation error: {0}")]
    ValidationError(String),
}

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Load configuration from a TOML file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config> {
    let contents = fs::read_to_string(expand_tilde(path.as_ref()))?;
    let config: Config = toml::from_str(&contents)?;
    Ok(config)
}

/// Merge command-line overrides over the config file and built-in defaults,
/// then validate the result
pub fn resolve_settings(overrides: &ConfigOverrides, file: Option<&Config>) -> Result<BackupSettings> {
    let default_file = Config::default();
    let file = file.unwrap_or(&default_file);

    let directories: BTreeSet<String> = file
        .directories
        .iter()
        .chain(overrides.directories.iter())
        .cloned()
        .collect();

    let policy = RetentionPolicy {
        daily: overrides
            .daily
            .or(file.retention.daily)
            .unwrap_or_else(default_retention_daily),
        weekly: overrides
            .weekly
            .or(file.retention.weekly)
            .unwrap_or_else(default_retention_weekly),
        monthly: overrides
            .monthly
            .or(file.retention.monthly)
            .unwrap_or_else(default_retention_monthly),
        weekly_day: overrides
            .weekly_day
            .or(file.schedule.weekly_day)
            .unwrap_or_else(default_weekly_day),
        monthly_day: overrides
            .monthly_day
            .or(file.schedule.monthly_day)
            .unwrap_or_else(default_monthly_day),
    };

    let tarsnap = overrides
        .tarsnap
        .clone()
        .or_else(|| file.tarsnap.clone())
        .unwrap_or_else(default_tarsnap);

    let log_directory = overrides
        .log_directory
        .clone()
        .or_else(|| file.log_directory.clone())
        .map(|dir| expand_tilde(&dir));

    let settings = BackupSettings {
        directories,
        policy,
        dry_run: overrides.dry_run,
        tarsnap,
        log_directory,
        log_max_files: file.log_max_files,
    };

    validate_settings(&settings)?;
    Ok(settings)
}

/// Validate resolved settings
fn validate_settings(settings: &BackupSettings) -> Result<()> {
    if settings.directories.is_empty() {
        return Err(ConfigError::ValidationError(
            "No directories to back up (use --dir or the config file)".to_string(),
        ));
    }

    for directory in &settings.directories {
        validate_directory(directory)?;
    }

    if settings.policy.weekly_day > 6 {
        return Err(ConfigError::ValidationError(format!(
            "weekly day must be between 0 (Monday) and 6 (Sunday), got {}",
            settings.policy.weekly_day
        )));
    }

    if !(1..=31).contains(&settings.policy.monthly_day) {
        return Err(ConfigError::ValidationError(format!(
            "monthly day must be between 1 and 31, got {}",
            settings.policy.monthly_day
        )));
    }

    if settings.tarsnap.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "tarsnap binary must not be empty".to_string(),
        ));
    }

    Ok(())
}

/// Directory strings end up verbatim in archive names, which the archive
/// listing reports one per line
fn validate_directory(directory: &str) -> Result<()> {
    if directory.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "Directory must not be empty".to_string(),
        ));
    }

    // Listing lines are trimmed, so padded names would never match again
    if directory.trim() != directory {
        return Err(ConfigError::ValidationError(format!(
            "Directory has leading or trailing whitespace: {:?}",
            directory
        )));
    }

    if directory.chars().any(char::is_control) {
        return Err(ConfigError::ValidationError(format!(
            "Directory contains control characters: {:?}",
            directory
        )));
    }

    Ok(())
}
