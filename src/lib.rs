//! Tarsnap Backup Library
//!
//! Creates one dated tarsnap archive per directory and prunes old archives
//! on a daily/weekly/monthly rotation.

pub mod config;
pub mod managers;
pub mod rotation;
pub mod utils;

// Re-export commonly used types
pub use config::{load_config, resolve_settings, BackupSettings, RetentionPolicy};
pub use managers::backup::{BackupManager, RunReport};
pub use managers::logging::{init_logging, LogGuard, LoggingConfig};
pub use rotation::{classify, select_for_deletion, Generation};
