//! Selection of archives to prune

use super::generation::Generation;
use super::naming::parse_for_directory;
use crate::config::RetentionPolicy;
use std::collections::BTreeSet;
use tracing::debug;

/// Select the archives of `directory` that fall outside the retention policy.
///
/// Each generation is handled on its own: its archives are ordered newest
/// first and everything past the configured keep count is returned. Names
/// that do not belong to `directory` are ignored. Deletions are listed
/// daily first, then weekly, then monthly.
pub fn select_for_deletion(
    archive_names: &BTreeSet<String>,
    directory: &str,
    policy: &RetentionPolicy,
) -> Vec<String> {
    let mut to_delete = Vec::new();

    for generation in Generation::ALL {
        let mut archives: Vec<(String, &String)> = archive_names
            .iter()
            .filter_map(|name| match parse_for_directory(name, directory) {
                Some((timestamp, g)) if g == generation => Some((timestamp, name)),
                _ => None,
            })
            .collect();

        // Newest first; identical timestamps fall back to the full name
        archives.sort_by(|a, b| b.cmp(a));

        let keep = policy.keep(generation) as usize;
        debug!(
            "{} {} archives for {}, keeping {}",
            archives.len(),
            generation,
            directory,
            keep.min(archives.len())
        );

        to_delete.extend(archives.into_iter().skip(keep).map(|(_, name)| name.clone()));
    }

    to_delete
}

/// Run [`select_for_deletion`] for every directory and concatenate the results
pub fn plan_deletions(
    archive_names: &BTreeSet<String>,
    directories: &BTreeSet<String>,
    policy: &RetentionPolicy,
) -> Vec<String> {
    directories
        .iter()
        .flat_map(|directory| select_for_deletion(archive_names, directory, policy))
        .collect()
}
