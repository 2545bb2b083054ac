//! Git adapter mixing libgit2 state queries with git CLI invocations.
//!
//! Local repository state (status, remotes) goes through `git2`. Anything
//! that needs the system git's credential handling, or whose textual output
//! the caller classifies (clone, fetch, merge, unmerged enumeration), shells
//! out to the `git` binary.

use std::path::Path;
use std::process::{Command, Output};

use git2::{ErrorCode, Repository, StatusOptions};

use crate::domain::AppError;
use crate::ports::{GitPort, MergeAttempt};

#[derive(Debug, Clone, Copy, Default)]
pub struct GitCommandAdapter;

impl GitCommandAdapter {
    pub fn new() -> Self {
        Self
    }

    fn open(cwd: &Path) -> Result<Repository, AppError> {
        Repository::open(cwd).map_err(|e| AppError::Git {
            command: "repository open".to_string(),
            details: e.message().to_string(),
        })
    }

    fn run(&self, args: &[&str], cwd: &Path) -> Result<Output, AppError> {
        Command::new("git").args(args).current_dir(cwd).output().map_err(|e| AppError::Git {
            command: args.join(" "),
            details: e.to_string(),
        })
    }

    fn run_checked(&self, args: &[&str], cwd: &Path) -> Result<String, AppError> {
        let output = self.run(args, cwd)?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            let details = if stderr.is_empty() {
                String::from_utf8_lossy(&output.stdout).trim().to_string()
            } else {
                stderr
            };
            return Err(AppError::Git { command: args.join(" "), details });
        }
        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    }
}

impl GitPort for GitCommandAdapter {
    fn clone_branch(
        &self,
        cwd: &Path,
        url: &str,
        branch: &str,
        directory: &str,
    ) -> Result<(), AppError> {
        self.run_checked(&["clone", "-b", branch, "--single-branch", url, directory], cwd)
            .map(|_| ())
    }

    fn init_repository(&self, cwd: &Path) -> Result<(), AppError> {
        self.run_checked(&["init"], cwd).map(|_| ())
    }

    fn stage_all(&self, cwd: &Path) -> Result<(), AppError> {
        self.run_checked(&["add", "."], cwd).map(|_| ())
    }

    fn commit(&self, cwd: &Path, message: &str) -> Result<(), AppError> {
        self.run_checked(&["commit", "-m", message], cwd).map(|_| ())
    }

    fn remote_url(&self, cwd: &Path, name: &str) -> Result<Option<String>, AppError> {
        let repo = Self::open(cwd)?;
        match repo.find_remote(name) {
            Ok(remote) => Ok(remote.url().map(str::to_string)),
            Err(e) if e.code() == ErrorCode::NotFound => Ok(None),
            Err(e) => Err(AppError::Git {
                command: format!("remote get-url {name}"),
                details: e.message().to_string(),
            }),
        }
    }

    fn add_remote(&self, cwd: &Path, name: &str, url: &str) -> Result<(), AppError> {
        let repo = Self::open(cwd)?;
        repo.remote(name, url).map(|_| ()).map_err(|e| AppError::Git {
            command: format!("remote add {name} {url}"),
            details: e.message().to_string(),
        })
    }

    fn set_remote_url(&self, cwd: &Path, name: &str, url: &str) -> Result<(), AppError> {
        let repo = Self::open(cwd)?;
        repo.remote_set_url(name, url).map_err(|e| AppError::Git {
            command: format!("remote set-url {name} {url}"),
            details: e.message().to_string(),
        })
    }

    fn is_work_tree_clean(&self, cwd: &Path) -> Result<bool, AppError> {
        let repo = Self::open(cwd)?;
        let mut options = StatusOptions::new();
        options.include_untracked(true).recurse_untracked_dirs(true);
        let statuses = repo.statuses(Some(&mut options)).map_err(|e| AppError::Git {
            command: "status".to_string(),
            details: e.message().to_string(),
        })?;
        Ok(statuses.is_empty())
    }

    fn fetch(&self, cwd: &Path, remote: &str) -> Result<(), AppError> {
        self.run_checked(&["fetch", remote], cwd).map(|_| ())
    }

    fn merge(&self, cwd: &Path, reference: &str) -> Result<MergeAttempt, AppError> {
        let output = self.run(&["merge", reference, "--no-edit"], cwd)?;
        Ok(MergeAttempt {
            succeeded: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }

    fn unmerged_paths(&self, cwd: &Path) -> Result<Vec<String>, AppError> {
        let stdout = self.run_checked(&["diff", "--name-only", "--diff-filter=U"], cwd)?;
        Ok(stdout.lines().map(str::trim).filter(|l| !l.is_empty()).map(str::to_string).collect())
    }
}
