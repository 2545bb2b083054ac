//! CLI adapter: argument parsing, prompt driving, progress display, and the
//! single place where failures turn into process exits.

mod progress;
mod prompts;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use dialoguer::console::style;

use crate::app::commands::{local_services, new, prerequisites, update};
use crate::config::{self, TemplateConfig};
use crate::domain::{AppError, DatabaseMode, UpdateOutcome};
use crate::services::{GitCommandAdapter, SshAccessProbe, SystemProcessRunner};

#[derive(Parser)]
#[command(name = "boltstack")]
#[command(version)]
#[command(
    about = "Scaffold BoltStack projects and pull upstream template updates",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new BoltStack project
    New {
        /// The working directory. Defaults to the current directory.
        #[arg(short, long)]
        cwd: Option<PathBuf>,
    },
    /// Manage an existing scaffolded project
    Project {
        #[command(subcommand)]
        command: ProjectCommands,
    },
}

#[derive(Subcommand)]
enum ProjectCommands {
    /// Pull the latest changes from the upstream template repository
    Update {
        /// The working directory. Defaults to the current directory.
        #[arg(short, long)]
        cwd: Option<PathBuf>,
    },
}

/// Entry point for the CLI. Performs the process-exit side effect; everything
/// below it returns `Result`.
pub fn run() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::New { cwd } => run_new(cwd),
        Commands::Project { command: ProjectCommands::Update { cwd } } => run_update(cwd),
    };

    match result {
        Ok(0) => {}
        Ok(code) => std::process::exit(code),
        Err(AppError::Cancelled) => {
            eprintln!("{}", style("Operation cancelled.").red());
            std::process::exit(0);
        }
        Err(error) => {
            eprintln!("{} {error}", style("Error:").red());
            std::process::exit(1);
        }
    }
}

fn run_update(cwd: Option<PathBuf>) -> Result<i32, AppError> {
    let cwd = resolve_cwd(cwd)?;
    let template = TemplateConfig::load()?;
    let git = GitCommandAdapter::new();
    let probe = SshAccessProbe::new();

    let bar = progress::spinner("Pulling latest changes from upstream...");
    let outcome = match update::execute(&git, &probe, &template, &cwd) {
        Ok(outcome) => outcome,
        Err(error) => {
            progress::fail(&bar, "Failed to pull from upstream.");
            return Err(error);
        }
    };

    match outcome {
        UpdateOutcome::UpToDate => {
            progress::succeed(&bar, "Already up to date.");
            Ok(0)
        }
        UpdateOutcome::Merged => {
            progress::succeed(
                &bar,
                &format!(
                    "Successfully pulled latest changes from {}.",
                    style(template.repository.https_url()).cyan()
                ),
            );
            Ok(0)
        }
        UpdateOutcome::Conflicted { paths } => {
            progress::fail(&bar, "Merge conflicts detected.");
            eprintln!("\n{}", style(format!("{} conflicting file(s):", paths.len())).yellow());
            for path in &paths {
                eprintln!("  - {path}");
            }
            eprintln!("\n{}", style("Please resolve them manually:").yellow());
            eprintln!("  1. Fix the conflicting files");
            eprintln!("  2. Run: {}", style("git add .").bold());
            eprintln!("  3. Run: {}", style("git commit").bold());
            Ok(1)
        }
    }
}

fn run_new(cwd: Option<PathBuf>) -> Result<i32, AppError> {
    let cwd = resolve_cwd(cwd)?;
    let template = TemplateConfig::load()?;
    let git = GitCommandAdapter::new();
    let probe = SshAccessProbe::new();
    let runner = SystemProcessRunner::new();

    println!("\n{}\n", style(" BoltStack ").white().on_red());

    step("Checking prerequisites...", "All prerequisites are satisfied, let's start! 🚀", "Failed to check prerequisites.", || {
        prerequisites::validate(&runner, &cwd)
    })?;

    let plan = prompts::collect_plan()?;

    println!(
        "\nCreating a new BoltStack project in {}.\n",
        style(cwd.join(&plan.name).display()).green()
    );

    let project_dir = step(
        &format!("Cloning repository into {}...", plan.name),
        "Repository successfully pulled!",
        "Failed to clone BoltStack! Please try again.",
        || new::clone_template(&git, &probe, &template, &cwd, &plan.name),
    )?;

    let skipped = step(
        "Tailoring template for the selected apps...",
        "Template tailored!",
        "Failed to tailor the template! Please try again.",
        || new::strip_missing_apps(&project_dir, &plan),
    )?;
    for entry in &skipped {
        eprintln!("{} skipped {}: {}", style("⚠").yellow(), entry.path, entry.reason);
    }

    step(
        "Preparing environment files...",
        "Environment files prepared!",
        "Failed to prepare environment!",
        || new::prepare_environment(&project_dir),
    )?;

    step(
        "Updating providers files...",
        "Providers files successfully updated!",
        "Failed to update providers files! Please try again.",
        || new::apply_providers(&project_dir, &plan),
    )?;

    step(
        "Setting environment variables...",
        "Environment variables successfully set!",
        "Failed to set environment variables!",
        || new::write_environment(&project_dir, &plan),
    )?;

    step(
        "Configuring Git...",
        "Git successfully configured!",
        "Failed to configure Git! Please try again.",
        || new::configure_git(&git, &template, &project_dir),
    )?;

    step(
        "Installing dependencies...",
        "Dependencies successfully installed!",
        "Failed to install dependencies! Please try again.",
        || new::install_dependencies(&runner, &project_dir),
    )?;

    if plan.database == DatabaseMode::Local {
        step(
            "Starting Docker services...",
            "Services successfully started!",
            "Failed to start services!",
            || local_services::start(&runner, &project_dir, &["db"]),
        )?;
    }

    println!("\n🎉 You can now get started. Open the project and just ship it! 🎉\n");
    println!("> cd {}\n> pnpm dev\n", plan.name);
    println!("Problems? {}", style(config::DOCS_URL).underlined());
    Ok(0)
}

/// Run one scaffold step behind a spinner, translating the result into
/// success or failure text.
fn step<T>(
    message: &str,
    done: &str,
    failed: &str,
    action: impl FnOnce() -> Result<T, AppError>,
) -> Result<T, AppError> {
    let bar = progress::spinner(message);
    match action() {
        Ok(value) => {
            progress::succeed(&bar, done);
            Ok(value)
        }
        Err(error) => {
            progress::fail(&bar, failed);
            Err(error)
        }
    }
}

fn resolve_cwd(cwd: Option<PathBuf>) -> Result<PathBuf, AppError> {
    match cwd {
        Some(dir) => Ok(std::fs::canonicalize(dir)?),
        None => Ok(std::env::current_dir()?),
    }
}
