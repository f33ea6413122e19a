//! Generational rotation: naming, classification and pruning of archives

pub mod generation;
pub mod naming;
pub mod selector;

pub use generation::{classify, Generation};
pub use naming::{format_archive_name, parse_for_directory, ArchiveName};
pub use selector::{plan_deletions, select_for_deletion};
