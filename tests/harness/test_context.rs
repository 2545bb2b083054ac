//! Isolated environment for CLI exercises: a local template repository acting
//! as upstream, plus a scaffolded project cloned from it.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

use super::{git_repository, template_fixture};

pub(crate) struct TestContext {
    root: TempDir,
    upstream: PathBuf,
    project: PathBuf,
}

impl TestContext {
    /// Create a template repository with an initial commit and clone it into
    /// a project directory.
    pub(crate) fn new() -> Self {
        let root = TempDir::new().expect("temp root");
        let upstream = root.path().join("template");
        fs::create_dir_all(&upstream).expect("upstream dir");
        template_fixture::write_template(&upstream);
        git_repository::init_repo(&upstream);
        git_repository::commit_all(&upstream, "Template");

        let upstream_str = upstream.to_str().expect("utf-8 path").to_string();
        git_repository::git(root.path(), &["clone", upstream_str.as_str(), "project"]);
        let project = root.path().join("project");
        git_repository::configure_user(&project);

        Self { root, upstream, project }
    }

    pub(crate) fn upstream(&self) -> &Path {
        &self.upstream
    }

    pub(crate) fn project(&self) -> &Path {
        &self.project
    }

    pub(crate) fn upstream_url(&self) -> String {
        self.upstream.to_str().expect("utf-8 path").to_string()
    }

    /// Build a command for the compiled binary, pointed at the local template
    /// and run inside the project directory.
    pub(crate) fn cli(&self) -> Command {
        self.cli_in(self.project())
    }

    pub(crate) fn cli_in<P: AsRef<Path>>(&self, dir: P) -> Command {
        let mut cmd = Command::cargo_bin("boltstack").expect("boltstack binary");
        cmd.current_dir(dir);
        cmd.env("BOLTSTACK_TEMPLATE_URL", self.upstream_url());
        cmd.env("HOME", self.root.path());
        cmd
    }

    /// Point the project's `upstream` remote at the local template.
    pub(crate) fn add_upstream_remote(&self) {
        self.add_upstream_remote_url(&self.upstream_url());
    }

    pub(crate) fn add_upstream_remote_url(&self, url: &str) {
        git_repository::git(&self.project, &["remote", "add", "upstream", url]);
    }

    pub(crate) fn upstream_remote_url(&self) -> String {
        git_repository::git(&self.project, &["remote", "get-url", "upstream"])
            .trim()
            .to_string()
    }

    pub(crate) fn commit_upstream_file(&self, rel: &str, content: &str, message: &str) {
        write_file(&self.upstream, rel, content);
        git_repository::commit_all(&self.upstream, message);
    }

    pub(crate) fn commit_project_file(&self, rel: &str, content: &str, message: &str) {
        write_file(&self.project, rel, content);
        git_repository::commit_all(&self.project, message);
    }

    pub(crate) fn write_project_file(&self, rel: &str, content: &str) {
        write_file(&self.project, rel, content);
    }
}

fn write_file(dir: &Path, rel: &str, content: &str) {
    let path = dir.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("dirs");
    }
    fs::write(path, content).expect("write file");
}
