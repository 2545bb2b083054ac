use std::path::Path;

use crate::domain::AppError;

/// Raw result of a merge attempt; the caller classifies the text.
#[derive(Debug, Clone)]
pub struct MergeAttempt {
    pub succeeded: bool,
    pub stdout: String,
    pub stderr: String,
}

impl MergeAttempt {
    /// Diagnostic text for failures: stderr preferred, stdout as fallback.
    pub fn diagnostic(&self) -> &str {
        let stderr = self.stderr.trim();
        if stderr.is_empty() { self.stdout.trim() } else { stderr }
    }

    /// Combined output for conflict-marker scanning.
    pub fn combined(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Version-control operations the scaffold and update flows need.
pub trait GitPort {
    /// `git clone -b <branch> --single-branch <url> <directory>` under `cwd`.
    fn clone_branch(
        &self,
        cwd: &Path,
        url: &str,
        branch: &str,
        directory: &str,
    ) -> Result<(), AppError>;

    fn init_repository(&self, cwd: &Path) -> Result<(), AppError>;

    fn stage_all(&self, cwd: &Path) -> Result<(), AppError>;

    fn commit(&self, cwd: &Path, message: &str) -> Result<(), AppError>;

    /// URL of the named remote, `None` when the remote does not exist.
    fn remote_url(&self, cwd: &Path, name: &str) -> Result<Option<String>, AppError>;

    fn add_remote(&self, cwd: &Path, name: &str, url: &str) -> Result<(), AppError>;

    fn set_remote_url(&self, cwd: &Path, name: &str, url: &str) -> Result<(), AppError>;

    /// `false` on any pending change: staged, unstaged, or untracked.
    fn is_work_tree_clean(&self, cwd: &Path) -> Result<bool, AppError>;

    fn fetch(&self, cwd: &Path, remote: &str) -> Result<(), AppError>;

    /// Attempt a merge without an interactive editor. `Err` only when git
    /// itself could not run; a failed merge is a returned [`MergeAttempt`].
    fn merge(&self, cwd: &Path, reference: &str) -> Result<MergeAttempt, AppError>;

    /// Paths with unmerged status, in the order the diff reports them.
    fn unmerged_paths(&self, cwd: &Path) -> Result<Vec<String>, AppError>;
}
