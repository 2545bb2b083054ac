//! Local service startup: Docker-backed services plus their setup tasks.

use std::path::Path;

use crate::app::commands::{new, prerequisites};
use crate::config;
use crate::domain::AppError;
use crate::ports::ProcessRunner;

/// Start the requested local services and run their one-time setup tasks.
pub fn start(
    runner: &impl ProcessRunner,
    project_dir: &Path,
    services: &[&str],
) -> Result<(), AppError> {
    prerequisites::validate_docker()?;

    let mut start_args = vec!["services:start", "--"];
    start_args.extend_from_slice(services);
    new::run_tool(runner, "pnpm", &start_args, project_dir)?;

    let filters: Vec<String> = services
        .iter()
        .filter_map(|service| config::service_package(service))
        .map(|package| format!("--filter={package}"))
        .collect();
    let mut setup_args = vec!["with-env", "pnpm", "turbo", "setup"];
    setup_args.extend(filters.iter().map(String::as_str));
    new::run_tool(runner, "pnpm", &setup_args, project_dir)
}
