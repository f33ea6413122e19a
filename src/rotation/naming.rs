//! Archive naming scheme
//!
//! Archives are named `<YYYYMMDD>-<HHMMSS>-<generation>-<directory>`. The
//! directory is everything after the generation tag, so two directories only
//! match when they are identical.

use super::generation::Generation;
use chrono::NaiveDateTime;
use std::fmt;

/// Format used for the timestamp portion of archive names
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d-%H%M%S";

/// Length of `YYYYMMDD-HHMMSS`
const TIMESTAMP_LEN: usize = 15;

/// A parsed archive name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveName {
    /// `YYYYMMDD-HHMMSS`, sorts chronologically as a string
    pub timestamp: String,
    pub generation: Generation,
    pub directory: String,
}

impl ArchiveName {
    /// Build the name of a new archive
    pub fn new(timestamp: NaiveDateTime, generation: Generation, directory: &str) -> Self {
        Self {
            timestamp: timestamp.format(TIMESTAMP_FORMAT).to_string(),
            generation,
            directory: directory.to_string(),
        }
    }

    /// Parse an archive name, returning `None` when it does not follow the scheme
    pub fn parse(name: &str) -> Option<Self> {
        let timestamp = name.get(..TIMESTAMP_LEN)?;
        if !is_timestamp(timestamp) {
            return None;
        }

        let rest = name[TIMESTAMP_LEN..].strip_prefix('-')?;
        let (tag, directory) = rest.split_once('-')?;
        let generation = tag.parse::<Generation>().ok()?;

        if directory.is_empty() {
            return None;
        }

        Some(Self {
            timestamp: timestamp.to_string(),
            generation,
            directory: directory.to_string(),
        })
    }
}

impl fmt::Display for ArchiveName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.timestamp, self.generation, self.directory)
    }
}

/// Format the name of the archive for `directory` taken at `timestamp`
pub fn format_archive_name(
    timestamp: NaiveDateTime,
    generation: Generation,
    directory: &str,
) -> String {
    ArchiveName::new(timestamp, generation, directory).to_string()
}

/// Recognise `name` as an archive of `directory`, returning its timestamp and generation
pub fn parse_for_directory(name: &str, directory: &str) -> Option<(String, Generation)> {
    ArchiveName::parse(name)
        .filter(|archive| archive.directory == directory)
        .map(|archive| (archive.timestamp, archive.generation))
}

/// `DDDDDDDD-DDDDDD`
fn is_timestamp(s: &str) -> bool {
    s.bytes().enumerate().all(|(i, b)| {
        if i == 8 {
            b == b'-'
        } else {
            b.is_ascii_digit()
        }
    })
}
