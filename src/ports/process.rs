use std::path::Path;

use crate::domain::AppError;

/// Captured output of an external command.
#[derive(Debug, Clone)]
pub struct ExecOutput {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

impl ExecOutput {
    /// Diagnostic text for failures: stderr preferred, stdout as fallback.
    pub fn diagnostic(&self) -> &str {
        let stderr = self.stderr.trim();
        if stderr.is_empty() { self.stdout.trim() } else { stderr }
    }
}

/// Runs external processes, capturing their output.
pub trait ProcessRunner {
    /// Spawn `program` with `args` in `cwd`. `Err` only when the process could
    /// not be spawned; a non-zero exit is a successful call with
    /// `success == false`.
    fn run(&self, program: &str, args: &[&str], cwd: &Path) -> Result<ExecOutput, AppError>;
}
