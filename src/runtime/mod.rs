//! Runtime abstraction for system operations.
//!
//! This module provides a trait-based abstraction over the few system calls
//! the crate needs, so package queries can be tested without a real package
//! manager.
//!
//! # Structure
//!
//! - `env` - Environment variables
//! - `process` - Running external programs

mod env;
mod process;

use anyhow::Result;
use std::env as std_env;

/// Captured result of a finished child process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// Exit code, `None` when the process was killed by a signal
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

#[cfg_attr(test, mockall::automock)]
pub trait Runtime: Send + Sync {
    // Environment
    fn env_var(&self, key: &str) -> Result<String, std_env::VarError>;

    // Processes
    /// Run `program` with `args` to completion, capturing its output.
    /// Returns Err only when the program could not be started.
    fn run_command(&self, program: &str, args: &[String]) -> Result<CommandOutput>;
}

pub struct RealRuntime;

impl Runtime for RealRuntime {
    fn env_var(&self, key: &str) -> Result<String, std_env::VarError> {
        self.env_var_impl(key)
    }

    fn run_command(&self, program: &str, args: &[String]) -> Result<CommandOutput> {
        self.run_command_impl(program, args)
    }
}
