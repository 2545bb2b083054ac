use std::path::Path;
use std::process::Command;

/// Run git and assert success, returning stdout.
pub(crate) fn git(repo_dir: &Path, args: &[&str]) -> String {
    let output = Command::new("git")
        .args(args)
        .current_dir(repo_dir)
        .output()
        .unwrap_or_else(|e| panic!("git {args:?} did not run: {e}"));
    assert!(
        output.status.success(),
        "git {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).to_string()
}

pub(crate) fn configure_user(repo_dir: &Path) {
    git(repo_dir, &["config", "user.email", "test@example.com"]);
    git(repo_dir, &["config", "user.name", "Test User"]);
}

/// Initialize a repository on `main` with a test identity.
pub(crate) fn init_repo(repo_dir: &Path) {
    git(repo_dir, &["init", "--initial-branch=main"]);
    configure_user(repo_dir);
}

pub(crate) fn commit_all(repo_dir: &Path, message: &str) {
    git(repo_dir, &["add", "."]);
    git(repo_dir, &["commit", "-m", message]);
}

pub(crate) fn status_porcelain(repo_dir: &Path) -> String {
    git(repo_dir, &["status", "--porcelain"])
}
