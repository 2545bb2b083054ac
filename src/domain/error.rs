use std::io;

use thiserror::Error;

/// Library-wide error type for boltstack operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Target directory does not look like a scaffolded project.
    #[error(
        "This does not appear to be a BoltStack project root. Run the command from your project root or pass --cwd."
    )]
    NotAProjectRoot,

    /// Working tree has local modifications.
    #[error(
        "Git working directory has uncommitted changes. Commit or stash them before pulling upstream updates."
    )]
    DirtyWorkTree,

    /// The upstream remote points at an unexpected repository.
    #[error(
        "Upstream remote points to \"{current}\" but expected \"{expected}\". Run: git remote set-url upstream {expected}"
    )]
    UpstreamMismatch { current: String, expected: String },

    /// A git invocation failed.
    #[error("git {command} failed: {details}")]
    Git { command: String, details: String },

    /// Merge failed for a reason other than conflicts.
    #[error("Merge failed: {0}")]
    MergeFailed(String),

    /// A required external tool is not installed.
    #[error("{tool} is not installed. Please install it and try again.\nTo install {tool}, visit: {url}")]
    ToolMissing { tool: String, url: String },

    /// An external command exited unsuccessfully.
    #[error("{command} failed: {details}")]
    CommandFailed { command: String, details: String },

    /// Interactive prompt failed.
    #[error("{0}")]
    Prompt(String),

    /// User aborted an interactive prompt.
    #[error("Operation cancelled.")]
    Cancelled,
}
