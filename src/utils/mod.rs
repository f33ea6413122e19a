pub mod command;
pub mod tarsnap;

// Trait-based abstractions for testability
pub mod archive_ops;
pub mod executor;

// Re-export commonly used types and traits (used by test crate)
pub use archive_ops::{ArchiveOperations, TarsnapOps};
pub use executor::{CommandExecutor, RealExecutor};
