//! Configuration module for tarsnap-backup
//!
//! Settings come from three places, later overriding earlier:
//! 1. Built-in defaults
//! 2. The optional TOML config file (`--config`)
//! 3. Command-line flags, possibly read from `@response-files`
//!
//! Directories are the exception: those from the file and the command line
//! are combined.
//!
//! ## Example Usage
//!
//! ```no_run
//! use tarsnap_backup::config::{self, ConfigOverrides};
//!
//! let file = config::load_config("tarsnap-backup.toml")?;
//! let overrides = ConfigOverrides { dry_run: true, ..Default::default() };
//! let settings = config::resolve_settings(&overrides, Some(&file))?;
//!
//! for directory in &settings.directories {
//!     println!("Directory: {}", directory);
//! }
//! # Ok::<(), config::ConfigError>(())
//! ```

mod argfile;
mod loader;
mod types;

pub use argfile::{expand_response_files, read_response_file};
pub use loader::{load_config, resolve_settings, ConfigError, Result};
pub use types::*;

/// Expand tilde (~) in path
pub fn expand_tilde(path: &std::path::Path) -> std::path::PathBuf {
    if let Ok(stripped) = path.strip_prefix("~") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    path.to_path_buf()
}
