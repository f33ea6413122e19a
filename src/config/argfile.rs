//! Response files
//!
//! An argument of the form `@path` is replaced by the arguments read from
//! `path`. Every line is split shell-style, so a word starting with `#`
//! comments out the rest of its line. Response files may reference further
//! response files.

use super::loader::{ConfigError, Result};
use std::ffi::OsString;
use std::fs;
use std::path::Path;

const RESPONSE_FILE_PREFIX: char = '@';
const MAX_NESTING: usize = 8;

/// Expand `@file` arguments. The first argument (the program name) is kept as is.
pub fn expand_response_files<I, T>(args: I) -> Result<Vec<OsString>>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut args = args.into_iter().map(Into::into);
    let mut expanded = Vec::new();

    if let Some(program) = args.next() {
        expanded.push(program);
    }

    for arg in args {
        expand_arg(arg, 0, &mut expanded)?;
    }

    Ok(expanded)
}

fn expand_arg(arg: OsString, depth: usize, out: &mut Vec<OsString>) -> Result<()> {
    let path = match arg.to_str().and_then(|s| s.strip_prefix(RESPONSE_FILE_PREFIX)) {
        Some(path) => path.to_string(),
        None => {
            out.push(arg);
            return Ok(());
        }
    };

    if depth >= MAX_NESTING {
        return Err(ConfigError::ResponseFileError {
            path,
            reason: format!("response files nested more than {} deep", MAX_NESTING),
        });
    }

    for token in read_response_file(Path::new(&path))? {
        expand_arg(OsString::from(token), depth + 1, out)?;
    }

    Ok(())
}

/// Read the arguments listed in a response file
pub fn read_response_file(path: &Path) -> Result<Vec<String>> {
    let error = |reason: String| ConfigError::ResponseFileError {
        path: path.display().to_string(),
        reason,
    };

    let contents = fs::read_to_string(path).map_err(|e| error(e.to_string()))?;
    parse_response_file(&contents).map_err(error)
}

fn parse_response_file(contents: &str) -> std::result::Result<Vec<String>, String> {
    let mut tokens = Vec::new();

    for (index, line) in contents.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let words = shlex::split(line)
            .ok_or_else(|| format!("line {}: unterminated quote or escape", index + 1))?;
        tokens.extend(words.into_iter().filter(|word| !word.trim().is_empty()));
    }

    Ok(tokens)
}
