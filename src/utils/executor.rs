//! Command execution abstraction for testability
//!
//! This module provides a trait-based abstraction for command execution,
//! enabling dependency injection and mocking for tests.

use anyhow::Result;
use std::process::Output;

/// Abstraction for command execution, enabling mocking in tests
pub trait CommandExecutor: Send + Sync {
    /// Run a command, failing on a nonzero exit status
    fn run_command(&self, program: &str, args: &[&str]) -> Result<Output>;

    /// Run a command and return stdout as string
    fn run_command_stdout(&self, program: &str, args: &[&str]) -> Result<String> {
        let output = self.run_command(program, args)?;
        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    }
}

/// Default implementation using real subprocess calls
#[derive(Debug, Clone, Default)]
pub struct RealExecutor;

impl RealExecutor {
    pub fn new() -> Self {
        Self
    }
}

impl CommandExecutor for RealExecutor {
    fn run_command(&self, program: &str, args: &[&str]) -> Result<Output> {
        super::command::run_command(program, args)
    }

    fn run_command_stdout(&self, program: &str, args: &[&str]) -> Result<String> {
        super::command::run_command_stdout(program, args)
    }
}

/// A mock executor for testing that records calls and returns configured responses
/// Available for use in external test crates
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    /// Recorded command invocation
    #[derive(Clone, Debug)]
    pub struct CommandCall {
        pub program: String,
        pub args: Vec<String>,
    }

    /// Response configuration for mock
    #[derive(Clone, Debug)]
    pub enum MockResponse {
        Success { stdout: String, stderr: String },
        Failure { stderr: String, exit_code: i32 },
    }

    impl Default for MockResponse {
        fn default() -> Self {
            MockResponse::Success {
                stdout: String::new(),
                stderr: String::new(),
            }
        }
    }

    /// Mock executor for testing
    #[derive(Clone, Default)]
    pub struct MockExecutor {
        /// Recorded command invocations
        pub calls: Arc<Mutex<Vec<CommandCall>>>,
        /// Pre-configured responses keyed by first argument (e.g. `--list-archives`)
        responses: Arc<Mutex<HashMap<String, MockResponse>>>,
        /// Default response when no specific response is configured
        default_response: Arc<Mutex<MockResponse>>,
    }

    impl MockExecutor {
        pub fn new() -> Self {
            Self::default()
        }

        /// Configure a response for invocations whose first argument is `first_arg`
        pub fn expect(self, first_arg: &str, response: MockResponse) -> Self {
            self.responses
                .lock()
                .unwrap()
                .insert(first_arg.to_string(), response);
            self
        }

        /// Set the default response for unconfigured invocations
        pub fn with_default_response(self, response: MockResponse) -> Self {
            *self.default_response.lock().unwrap() = response;
            self
        }

        /// Get all recorded calls
        pub fn get_calls(&self) -> Vec<CommandCall> {
            self.calls.lock().unwrap().clone()
        }

        /// Check if a program was called
        pub fn was_called(&self, program: &str) -> bool {
            self.calls
                .lock()
                .unwrap()
                .iter()
                .any(|c| c.program == program)
        }

        /// Get number of calls to a specific program
        pub fn call_count(&self, program: &str) -> usize {
            self.calls
                .lock()
                .unwrap()
                .iter()
                .filter(|c| c.program == program)
                .count()
        }

        fn record_call(&self, program: &str, args: &[&str]) {
            self.calls.lock().unwrap().push(CommandCall {
                program: program.to_string(),
                args: args.iter().map(|s| s.to_string()).collect(),
            });
        }

        fn get_response(&self, args: &[&str]) -> MockResponse {
            let configured = args
                .first()
                .and_then(|first| self.responses.lock().unwrap().get(*first).cloned());
            configured.unwrap_or_else(|| self.default_response.lock().unwrap().clone())
        }

        fn execute_response(&self, response: MockResponse) -> Result<Output> {
            match response {
                MockResponse::Success { stdout, stderr } => Ok(Output {
                    status: std::process::ExitStatus::default(),
                    stdout: stdout.into_bytes(),
                    stderr: stderr.into_bytes(),
                }),
                MockResponse::Failure { stderr, exit_code } => {
                    anyhow::bail!("Command failed with exit code {:?}: {}", Some(exit_code), stderr)
                }
            }
        }
    }

    impl CommandExecutor for MockExecutor {
        fn run_command(&self, program: &str, args: &[&str]) -> Result<Output> {
            self.record_call(program, args);
            let response = self.get_response(args);
            self.execute_response(response)
        }
    }
}
