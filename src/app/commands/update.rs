//! Upstream update flow: validate, resolve the remote, fetch, merge,
//! classify.
//!
//! Every step gates the next; precondition failures return before any network
//! or mutating operation runs. A conflicted merge is left in place for manual
//! resolution and reported as an outcome, not an error.

use std::path::Path;

use crate::config::{self, TemplateConfig};
use crate::domain::{AccessMode, AppError, UpdateOutcome};
use crate::ports::{AccessProbe, GitPort};

/// Merge output marker meaning upstream had nothing new.
const UP_TO_DATE_MARKER: &str = "Already up to date";

/// Markers distinguishing a conflicted merge from other merge failures.
const CONFLICT_MARKERS: [&str; 2] = ["CONFLICT", "Automatic merge failed"];

/// Every project marker must exist for `cwd` to count as a project root.
pub fn check_is_project(cwd: &Path) -> Result<(), AppError> {
    let complete = config::PROJECT_MARKERS.iter().all(|marker| cwd.join(marker).exists());
    if complete { Ok(()) } else { Err(AppError::NotAProjectRoot) }
}

/// Rewrite the upstream remote's URL if it exists, create it otherwise.
/// Calling twice with the same URL is a no-op after the first call.
pub fn ensure_upstream_remote(
    git: &impl GitPort,
    cwd: &Path,
    url: &str,
) -> Result<(), AppError> {
    match git.remote_url(cwd, config::UPSTREAM_REMOTE)? {
        Some(_) => git.set_remote_url(cwd, config::UPSTREAM_REMOTE, url),
        None => git.add_remote(cwd, config::UPSTREAM_REMOTE, url),
    }
}

/// Run the update flow against `cwd`.
pub fn execute(
    git: &impl GitPort,
    probe: &impl AccessProbe,
    template: &TemplateConfig,
    cwd: &Path,
) -> Result<UpdateOutcome, AppError> {
    check_is_project(cwd)?;
    if !git.is_work_tree_clean(cwd)? {
        return Err(AppError::DirtyWorkTree);
    }

    let spec = &template.repository;
    match git.remote_url(cwd, config::UPSTREAM_REMOTE)? {
        None => {
            let mode = match spec.ssh_host() {
                Some(host) => probe.resolve(host),
                None => AccessMode::Https,
            };
            ensure_upstream_remote(git, cwd, &spec.url(mode))?;
        }
        Some(current) if !spec.matches(&current) => {
            return Err(AppError::UpstreamMismatch {
                expected: spec.expected_for(&current),
                current,
            });
        }
        Some(_) => {}
    }

    git.fetch(cwd, config::UPSTREAM_REMOTE)?;

    let reference = format!("{}/{}", config::UPSTREAM_REMOTE, config::TEMPLATE_BRANCH);
    let attempt = git.merge(cwd, &reference)?;
    if attempt.succeeded {
        return Ok(if attempt.stdout.contains(UP_TO_DATE_MARKER) {
            UpdateOutcome::UpToDate
        } else {
            UpdateOutcome::Merged
        });
    }

    let combined = attempt.combined();
    if CONFLICT_MARKERS.iter().any(|marker| combined.contains(marker)) {
        // Reported in status order; the diff is the sole source of truth.
        let paths = git.unmerged_paths(cwd)?;
        return Ok(UpdateOutcome::Conflicted { paths });
    }

    Err(AppError::MergeFailed(attempt.diagnostic().to_string()))
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::fs;

    use assert_fs::TempDir;

    use super::*;
    use crate::domain::RemoteSpec;
    use crate::ports::MergeAttempt;

    #[derive(Default)]
    struct MockGit {
        calls: RefCell<Vec<String>>,
        clean: bool,
        remote: RefCell<Option<String>>,
        merge: Option<MergeAttempt>,
        unmerged: Vec<String>,
    }

    impl MockGit {
        fn log(&self, call: &str) {
            self.calls.borrow_mut().push(call.to_string());
        }

        fn calls(&self) -> Vec<String> {
            self.calls.borrow().clone()
        }
    }

    impl GitPort for MockGit {
        fn clone_branch(&self, _: &Path, _: &str, _: &str, _: &str) -> Result<(), AppError> {
            self.log("clone");
            Ok(())
        }

        fn init_repository(&self, _: &Path) -> Result<(), AppError> {
            self.log("init");
            Ok(())
        }

        fn stage_all(&self, _: &Path) -> Result<(), AppError> {
            self.log("stage");
            Ok(())
        }

        fn commit(&self, _: &Path, _: &str) -> Result<(), AppError> {
            self.log("commit");
            Ok(())
        }

        fn remote_url(&self, _: &Path, _: &str) -> Result<Option<String>, AppError> {
            self.log("remote_url");
            Ok(self.remote.borrow().clone())
        }

        fn add_remote(&self, _: &Path, _: &str, url: &str) -> Result<(), AppError> {
            self.log(&format!("add_remote {url}"));
            *self.remote.borrow_mut() = Some(url.to_string());
            Ok(())
        }

        fn set_remote_url(&self, _: &Path, _: &str, url: &str) -> Result<(), AppError> {
            self.log(&format!("set_remote_url {url}"));
            *self.remote.borrow_mut() = Some(url.to_string());
            Ok(())
        }

        fn is_work_tree_clean(&self, _: &Path) -> Result<bool, AppError> {
            self.log("status");
            Ok(self.clean)
        }

        fn fetch(&self, _: &Path, _: &str) -> Result<(), AppError> {
            self.log("fetch");
            Ok(())
        }

        fn merge(&self, _: &Path, reference: &str) -> Result<MergeAttempt, AppError> {
            self.log(&format!("merge {reference}"));
            Ok(self.merge.clone().unwrap_or(MergeAttempt {
                succeeded: true,
                stdout: String::new(),
                stderr: String::new(),
            }))
        }

        fn unmerged_paths(&self, _: &Path) -> Result<Vec<String>, AppError> {
            self.log("unmerged");
            Ok(self.unmerged.clone())
        }
    }

    struct FixedProbe(AccessMode);

    impl AccessProbe for FixedProbe {
        fn resolve(&self, _: &str) -> AccessMode {
            self.0
        }
    }

    fn project_dir() -> TempDir {
        let temp = TempDir::new().expect("temp dir");
        for marker in config::PROJECT_MARKERS {
            let path = temp.path().join(marker);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).expect("marker dirs");
            }
            fs::write(path, "{}").expect("marker file");
        }
        temp
    }

    fn template() -> TemplateConfig {
        TemplateConfig {
            repository: RemoteSpec::hosted("https://github.com/boltstack/stack")
                .expect("valid spec"),
        }
    }

    #[test]
    fn missing_marker_fails_before_any_git_call() {
        let temp = TempDir::new().expect("temp dir");
        let git = MockGit { clean: true, ..Default::default() };

        let result = execute(&git, &FixedProbe(AccessMode::Https), &template(), temp.path());

        assert!(matches!(result, Err(AppError::NotAProjectRoot)));
        assert!(git.calls().is_empty());
    }

    #[test]
    fn dirty_tree_fails_before_fetch_or_merge() {
        let temp = project_dir();
        let git = MockGit { clean: false, ..Default::default() };

        let result = execute(&git, &FixedProbe(AccessMode::Https), &template(), temp.path());

        assert!(matches!(result, Err(AppError::DirtyWorkTree)));
        assert_eq!(git.calls(), ["status"]);
    }

    #[test]
    fn missing_remote_is_created_with_probed_mode() {
        let temp = project_dir();
        let git = MockGit { clean: true, ..Default::default() };

        let outcome = execute(&git, &FixedProbe(AccessMode::Ssh), &template(), temp.path())
            .expect("update succeeds");

        assert_eq!(outcome, UpdateOutcome::Merged);
        let calls = git.calls();
        assert!(calls.contains(&"add_remote git@github.com:boltstack/stack".to_string()));
        assert_eq!(calls.last().map(String::as_str), Some("merge upstream/main"));
    }

    #[test]
    fn mismatched_remote_fails_without_fetching() {
        let temp = project_dir();
        let git = MockGit {
            clean: true,
            remote: RefCell::new(Some("git@github.com:someone/fork".to_string())),
            ..Default::default()
        };

        let result = execute(&git, &FixedProbe(AccessMode::Https), &template(), temp.path());

        match result {
            Err(AppError::UpstreamMismatch { current, expected }) => {
                assert_eq!(current, "git@github.com:someone/fork");
                // Expected rendering follows the configured URL's scheme.
                assert_eq!(expected, "git@github.com:boltstack/stack");
            }
            other => panic!("expected mismatch, got {other:?}"),
        }
        assert!(!git.calls().iter().any(|c| c == "fetch"));
    }

    #[test]
    fn valid_remote_with_suffix_passes_validation() {
        let temp = project_dir();
        let git = MockGit {
            clean: true,
            remote: RefCell::new(Some("https://github.com/boltstack/stack.git".to_string())),
            merge: Some(MergeAttempt {
                succeeded: true,
                stdout: "Already up to date.\n".to_string(),
                stderr: String::new(),
            }),
            ..Default::default()
        };

        let outcome = execute(&git, &FixedProbe(AccessMode::Https), &template(), temp.path())
            .expect("update succeeds");

        assert_eq!(outcome, UpdateOutcome::UpToDate);
    }

    #[test]
    fn conflicted_merge_reports_paths_in_status_order() {
        let temp = project_dir();
        let git = MockGit {
            clean: true,
            remote: RefCell::new(Some("https://github.com/boltstack/stack".to_string())),
            merge: Some(MergeAttempt {
                succeeded: false,
                stdout: "CONFLICT (content): Merge conflict in apps/web/app.ts\nAutomatic merge failed; fix conflicts and then commit the result.\n".to_string(),
                stderr: String::new(),
            }),
            unmerged: vec![
                "packages/api/src/env.ts".to_string(),
                "apps/web/app.ts".to_string(),
            ],
            ..Default::default()
        };

        let outcome = execute(&git, &FixedProbe(AccessMode::Https), &template(), temp.path())
            .expect("conflict is an outcome");

        assert_eq!(outcome, UpdateOutcome::Conflicted {
            paths: vec!["packages/api/src/env.ts".to_string(), "apps/web/app.ts".to_string()],
        });
    }

    #[test]
    fn non_conflict_merge_failure_carries_diagnostics() {
        let temp = project_dir();
        let git = MockGit {
            clean: true,
            remote: RefCell::new(Some("https://github.com/boltstack/stack".to_string())),
            merge: Some(MergeAttempt {
                succeeded: false,
                stdout: String::new(),
                stderr: "fatal: refusing to merge unrelated histories".to_string(),
            }),
            ..Default::default()
        };

        let result = execute(&git, &FixedProbe(AccessMode::Https), &template(), temp.path());

        match result {
            Err(AppError::MergeFailed(reason)) => {
                assert!(reason.contains("unrelated histories"));
            }
            other => panic!("expected merge failure, got {other:?}"),
        }
        assert!(!git.calls().iter().any(|c| c == "unmerged"));
    }

    #[test]
    fn ensure_upstream_remote_is_idempotent() {
        let temp = project_dir();
        let git = MockGit { clean: true, ..Default::default() };

        ensure_upstream_remote(&git, temp.path(), "https://github.com/boltstack/stack")
            .expect("create");
        ensure_upstream_remote(&git, temp.path(), "https://github.com/boltstack/stack")
            .expect("rewrite");

        let calls = git.calls();
        assert!(calls.contains(&"add_remote https://github.com/boltstack/stack".to_string()));
        assert!(calls.contains(&"set_remote_url https://github.com/boltstack/stack".to_string()));
    }
}
