//! Tarsnap command line helpers

use std::path::PathBuf;

/// Arguments creating archive `name` from `directory`
pub fn create_args<'a>(name: &'a str, directory: &'a str) -> [&'a str; 4] {
    ["-c", "-f", name, directory]
}

/// Arguments listing all archives
pub fn list_args() -> [&'static str; 1] {
    ["--list-archives"]
}

/// Arguments deleting archive `name`
pub fn delete_args(name: &str) -> [&str; 3] {
    ["-d", "-f", name]
}

/// Split `--list-archives` output into archive names, one per line
pub fn parse_archive_list(stdout: &str) -> Vec<String> {
    stdout
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Locate the tarsnap binary, either as a path or on PATH
pub fn find_binary(binary: &str) -> Option<PathBuf> {
    which::which(binary).ok()
}

/// Check whether the tarsnap binary can be executed
pub fn tool_exists(binary: &str) -> bool {
    find_binary(binary).is_some()
}
