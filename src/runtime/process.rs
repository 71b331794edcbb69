//! Child process execution.

use anyhow::{Context, Result};
use log::debug;
use std::process::{Command, Stdio};

use super::{CommandOutput, RealRuntime};

impl RealRuntime {
    #[tracing::instrument(skip(self))]
    pub(crate) fn run_command_impl(&self, program: &str, args: &[String]) -> Result<CommandOutput> {
        let output = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .output()
            .with_context(|| format!("Failed to run '{}'", program))?;

        let result = CommandOutput {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        };
        debug!("'{}' exited with {:?}", program, result.code);
        Ok(result)
    }
}

#[cfg(all(test, unix))]
mod tests {
    use crate::runtime::{RealRuntime, Runtime};

    #[test]
    fn test_run_command_captures_output() {
        let runtime = RealRuntime;
        let output = runtime
            .run_command("sh", &["-c".into(), "echo out; echo err >&2; exit 3".into()])
            .unwrap();

        assert_eq!(output.code, Some(3));
        assert!(!output.success());
        assert_eq!(output.stdout, "out\n");
        assert_eq!(output.stderr, "err\n");
    }

    #[test]
    fn test_run_command_success() {
        let runtime = RealRuntime;
        let output = runtime.run_command("true", &[]).unwrap();
        assert!(output.success());
        assert!(output.stdout.is_empty());
    }

    #[test]
    fn test_run_command_missing_program() {
        let runtime = RealRuntime;
        let err = runtime
            .run_command("/nonexistent/pkgver-test-binary", &[])
            .unwrap_err();
        assert!(err.to_string().contains("Failed to run"));
    }
}
