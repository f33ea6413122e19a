use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use std::path::PathBuf;
use tarsnap_backup::config::{self, ConfigOverrides};
use tarsnap_backup::managers::backup::BackupManager;
use tarsnap_backup::managers::logging::{init_logging, LoggingConfig};
use tarsnap_backup::utils::{tarsnap, TarsnapOps};

#[derive(Parser, Debug)]
#[command(name = "tarsnap-backup")]
#[command(
    about = "Create tarsnap archives and rotate them on a daily/weekly/monthly schedule",
    long_about = None,
    after_help = "Arguments can also be read from a file with @FILE, one or more per line; \
                  lines starting with # are ignored."
)]
#[command(version)]
struct Cli {
    /// Produce verbose output (can be specified more than once)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Do not modify anything
    #[arg(short = 'n', long)]
    dry_run: bool,

    /// Directory to back up (can be given multiple times)
    #[arg(short = 'd', long = "dir", value_name = "DIR")]
    dirs: Vec<String>,

    /// Number of daily backups to keep (default: 7)
    #[arg(long, value_name = "N")]
    daily: Option<u32>,

    /// Number of weekly backups to keep (default: 4)
    #[arg(long, value_name = "N")]
    weekly: Option<u32>,

    /// Number of monthly backups to keep (default: 2)
    #[arg(long, value_name = "N")]
    monthly: Option<u32>,

    /// Which day to do weekly backups on (0=monday, 6=sunday; default: 0)
    #[arg(long, value_name = "DAY", value_parser = clap::value_parser!(u32).range(0..=6))]
    weekly_day: Option<u32>,

    /// Which day to do monthly backups on (1-31; default: 1)
    #[arg(long, value_name = "DAY", value_parser = clap::value_parser!(u32).range(1..=31))]
    monthly_day: Option<u32>,

    /// Path to an optional TOML configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Tarsnap binary to run (default: tarsnap from PATH)
    #[arg(long, value_name = "BIN")]
    tarsnap: Option<String>,

    /// Also write logs to a daily-rotated file in this directory
    #[arg(long, value_name = "DIR")]
    log_dir: Option<PathBuf>,

    /// Print a JSON summary of created and deleted archives
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            directories: self.dirs.clone(),
            daily: self.daily,
            weekly: self.weekly,
            monthly: self.monthly,
            weekly_day: self.weekly_day,
            monthly_day: self.monthly_day,
            dry_run: self.dry_run,
            tarsnap: self.tarsnap.clone(),
            log_directory: self.log_dir.clone(),
        }
    }
}

fn main() -> Result<()> {
    let args = config::expand_response_files(std::env::args_os())?;
    let cli = Cli::parse_from(args);

    let file_config = cli
        .config
        .as_deref()
        .map(|path| {
            config::load_config(path)
                .with_context(|| format!("Failed to load configuration from {:?}", path))
        })
        .transpose()?;

    let settings = config::resolve_settings(&cli.overrides(), file_config.as_ref())?;

    // Must stay alive until exit so buffered file output is flushed
    let logging_config = LoggingConfig::from_verbosity(
        cli.verbose,
        settings.log_directory.as_deref(),
        settings.log_max_files,
    );
    let _log_guard = init_logging(&logging_config)?;

    if !tarsnap::tool_exists(&settings.tarsnap) {
        anyhow::bail!(
            "tarsnap binary not found: {} (install tarsnap or pass --tarsnap)",
            settings.tarsnap
        );
    }

    if settings.dry_run {
        tracing::info!("dry run, no archives will be created or deleted");
    }

    let ops = TarsnapOps::new(settings.tarsnap.clone());
    let manager = BackupManager::new(settings, ops);
    let report = manager.run(chrono::Local::now().naive_local())?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    }

    Ok(())
}
