//! Checks for the external tools the scaffold depends on.

use std::path::Path;

use crate::domain::AppError;
use crate::ports::ProcessRunner;

const GIT_URL: &str = "https://git-scm.com/downloads";
const NODE_URL: &str = "https://nodejs.org/en/";
const PNPM_URL: &str = "https://pnpm.io/installation";
const DOCKER_URL: &str = "https://docs.docker.com/get-docker/";

/// Validate that git, node, and pnpm are available. A missing pnpm gets one
/// `npm install -g pnpm` remediation attempt before failing.
pub fn validate(runner: &impl ProcessRunner, cwd: &Path) -> Result<(), AppError> {
    validate_with(|tool| which::which(tool).is_ok(), runner, cwd)
}

/// Docker is only required when local services are requested, so it gets its
/// own check.
pub fn validate_docker() -> Result<(), AppError> {
    if which::which("docker").is_ok() {
        Ok(())
    } else {
        Err(missing("docker", DOCKER_URL))
    }
}

fn validate_with(
    installed: impl Fn(&str) -> bool,
    runner: &impl ProcessRunner,
    cwd: &Path,
) -> Result<(), AppError> {
    if !installed("git") {
        return Err(missing("git", GIT_URL));
    }
    if !installed("node") {
        return Err(missing("node", NODE_URL));
    }
    if !installed("pnpm") {
        let remediated = matches!(
            runner.run("npm", &["install", "-g", "pnpm"], cwd),
            Ok(output) if output.success
        );
        if !remediated || !installed("pnpm") {
            return Err(missing("pnpm", PNPM_URL));
        }
    }
    Ok(())
}

fn missing(tool: &str, url: &str) -> AppError {
    AppError::ToolMissing { tool: tool.to_string(), url: url.to_string() }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::ports::ExecOutput;

    struct ScriptedRunner {
        calls: RefCell<Vec<String>>,
        success: bool,
    }

    impl ProcessRunner for ScriptedRunner {
        fn run(&self, program: &str, args: &[&str], _: &Path) -> Result<ExecOutput, AppError> {
            self.calls.borrow_mut().push(format!("{program} {}", args.join(" ")));
            Ok(ExecOutput {
                success: self.success,
                stdout: String::new(),
                stderr: String::new(),
            })
        }
    }

    fn runner(success: bool) -> ScriptedRunner {
        ScriptedRunner { calls: RefCell::new(Vec::new()), success }
    }

    #[test]
    fn all_tools_present_passes_without_running_anything() {
        let runner = runner(true);
        validate_with(|_| true, &runner, Path::new(".")).expect("valid");
        assert!(runner.calls.borrow().is_empty());
    }

    #[test]
    fn missing_git_names_the_tool_and_an_install_pointer() {
        let runner = runner(true);
        let result = validate_with(|tool| tool != "git", &runner, Path::new("."));
        match result {
            Err(AppError::ToolMissing { tool, url }) => {
                assert_eq!(tool, "git");
                assert!(url.contains("git-scm.com"));
            }
            other => panic!("expected ToolMissing, got {other:?}"),
        }
    }

    #[test]
    fn missing_pnpm_attempts_one_global_install() {
        let runner = runner(false);
        let result = validate_with(|tool| tool != "pnpm", &runner, Path::new("."));
        assert!(matches!(result, Err(AppError::ToolMissing { tool, .. }) if tool == "pnpm"));
        assert_eq!(runner.calls.borrow().as_slice(), ["npm install -g pnpm"]);
    }
}
