//! Process runner backed by `std::process::Command`.

use std::path::Path;
use std::process::Command;

use crate::domain::AppError;
use crate::ports::{ExecOutput, ProcessRunner};

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemProcessRunner;

impl SystemProcessRunner {
    pub fn new() -> Self {
        Self
    }
}

impl ProcessRunner for SystemProcessRunner {
    fn run(&self, program: &str, args: &[&str], cwd: &Path) -> Result<ExecOutput, AppError> {
        let output = Command::new(program).args(args).current_dir(cwd).output().map_err(|e| {
            AppError::CommandFailed {
                command: format!("{program} {}", args.join(" ")),
                details: e.to_string(),
            }
        })?;
        Ok(ExecOutput {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}
