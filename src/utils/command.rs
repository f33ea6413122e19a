//! Utilities for running commands with proper error handling

use anyhow::{Context, Result};
use std::process::{Command, Output, Stdio};
use tracing::{debug, error};

/// Run a command to completion, failing on a nonzero exit status
pub fn run_command(program: &str, args: &[&str]) -> Result<Output> {
    let mut cmd = Command::new(program);
    cmd.args(args);
    cmd.stdin(Stdio::null());
    cmd.stdout(Stdio::piped());
    cmd.stderr(Stdio::piped());

    debug!("executing {} {}", program, args.join(" "));

    let output = cmd
        .output()
        .with_context(|| format!("Failed to execute {}", program))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        error!("Command failed: {} {}", program, args.join(" "));
        error!("Stderr: {}", stderr.trim_end());
        anyhow::bail!(
            "Command failed with exit code {:?}: {}",
            output.status.code(),
            stderr.trim_end()
        );
    }

    Ok(output)
}

/// Run a command and return stdout as string
pub fn run_command_stdout(program: &str, args: &[&str]) -> Result<String> {
    let output = run_command(program, args)?;
    Ok(String::from_utf8_lossy(&output.stdout).to_string())
}
