//! Scaffold steps for `boltstack new`. The CLI layer drives these in order,
//! wrapping each one in a progress indicator.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::{self, TemplateConfig};
use crate::domain::{AccessMode, AppError, ProjectPlan};
use crate::ports::{AccessProbe, GitPort, ProcessRunner};
use crate::services::rewrite::SkippedDirective;
use crate::services::{env_file, providers, rewrite};

/// Clone the template's published branch into `cwd/<name>`, picking SSH when
/// the probe says authenticated access is available.
pub fn clone_template(
    git: &impl GitPort,
    probe: &impl AccessProbe,
    template: &TemplateConfig,
    cwd: &Path,
    name: &str,
) -> Result<PathBuf, AppError> {
    let spec = &template.repository;
    let mode = match spec.ssh_host() {
        Some(host) => probe.resolve(host),
        None => AccessMode::Https,
    };
    git.clone_branch(cwd, &spec.url(mode), config::TEMPLATE_BRANCH, name)?;
    Ok(cwd.join(name))
}

/// Remove and unwire everything belonging to apps that were not selected.
pub fn strip_missing_apps(
    project_dir: &Path,
    plan: &ProjectPlan,
) -> Result<Vec<SkippedDirective>, AppError> {
    rewrite::apply_missing_app_directives(project_dir, &plan.apps)
}

/// Create `.env.local` files from their examples.
pub fn prepare_environment(project_dir: &Path) -> Result<(), AppError> {
    env_file::prepare(project_dir)
}

/// Pin the chosen providers into the template sources.
pub fn apply_providers(project_dir: &Path, plan: &ProjectPlan) -> Result<(), AppError> {
    providers::apply(project_dir, &plan.providers, &plan.apps)
}

/// Write the collected env values into their registered files.
pub fn write_environment(project_dir: &Path, plan: &ProjectPlan) -> Result<(), AppError> {
    env_file::write_all(project_dir, &plan.env)
}

/// Detach from the template's history: fresh repository, `upstream` remote
/// for later updates, initial commit.
pub fn configure_git(
    git: &impl GitPort,
    template: &TemplateConfig,
    project_dir: &Path,
) -> Result<(), AppError> {
    let git_dir = project_dir.join(".git");
    if git_dir.exists() {
        fs::remove_dir_all(&git_dir)?;
    }
    git.init_repository(project_dir)?;
    git.add_remote(project_dir, config::UPSTREAM_REMOTE, &template.repository.https_url())?;
    git.stage_all(project_dir)?;
    git.commit(project_dir, "Initial commit")?;
    Ok(())
}

pub fn install_dependencies(
    runner: &impl ProcessRunner,
    project_dir: &Path,
) -> Result<(), AppError> {
    run_tool(runner, "pnpm", &["install"], project_dir)
}

pub(crate) fn run_tool(
    runner: &impl ProcessRunner,
    program: &str,
    args: &[&str],
    cwd: &Path,
) -> Result<(), AppError> {
    let output = runner.run(program, args, cwd)?;
    if !output.success {
        return Err(AppError::CommandFailed {
            command: format!("{program} {}", args.join(" ")),
            details: output.diagnostic().to_string(),
        });
    }
    Ok(())
}
