//! Process-wide static configuration: template identity, marker files, env
//! registry, provider file tables, and directive catalog. Constructed once at
//! startup and immutable afterwards.

pub mod directives;
pub mod env_registry;
pub mod provider_files;

use crate::domain::{AppError, RemoteSpec};

/// Name of the git remote tracking the template repository.
pub const UPSTREAM_REMOTE: &str = "upstream";

/// Branch the template publishes on.
pub const TEMPLATE_BRANCH: &str = "main";

/// Hosted template repository.
pub const TEMPLATE_REPOSITORY: &str = "https://github.com/boltstack/stack";

/// Environment override pointing the CLI at a fork or local mirror of the
/// template. The raw value serves as the remote URL for every access mode.
pub const TEMPLATE_URL_OVERRIDE: &str = "BOLTSTACK_TEMPLATE_URL";

/// Documentation pointer printed after scaffolding.
pub const DOCS_URL: &str = "https://boltstack.dev/docs";

/// Marker files whose joint presence certifies a scaffolded project root.
pub const PROJECT_MARKERS: &[&str] = &[
    "package.json",
    "pnpm-workspace.yaml",
    "turbo.json",
    "apps/web/package.json",
    "packages/api/package.json",
];

/// Local services the scaffold can start, with the workspace package that owns
/// each one's setup task.
pub const SERVICE_PACKAGES: &[(&str, &str)] = &[("db", "@boltstack/db")];

/// Workspace package owning a local service's setup task.
pub fn service_package(service: &str) -> Option<&'static str> {
    SERVICE_PACKAGES.iter().find(|(name, _)| *name == service).map(|(_, package)| *package)
}

/// Immutable process configuration, built once at startup.
#[derive(Debug, Clone)]
pub struct TemplateConfig {
    pub repository: RemoteSpec,
}

impl TemplateConfig {
    /// Build the configuration, honoring the template URL override.
    pub fn load() -> Result<Self, AppError> {
        match std::env::var(TEMPLATE_URL_OVERRIDE) {
            Ok(raw) if !raw.trim().is_empty() => {
                Ok(Self { repository: RemoteSpec::custom(raw.trim()) })
            }
            _ => Ok(Self { repository: RemoteSpec::hosted(TEMPLATE_REPOSITORY)? }),
        }
    }
}
