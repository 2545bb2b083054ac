//! Rewrites provider-selection source files to the chosen provider slugs.

use std::fs;
use std::path::Path;

use regex::RegexBuilder;

use crate::config::provider_files::{self, ProviderFileSet};
use crate::domain::{App, AppError, ProviderSelection};

/// Pin every chosen provider into the template sources. Per-app categories
/// only touch files of apps that are part of the scaffold.
pub fn apply(
    project_dir: &Path,
    selection: &ProviderSelection,
    apps: &[App],
) -> Result<(), AppError> {
    rewrite(project_dir, &provider_files::email(), selection.email.slug())?;
    rewrite(project_dir, &provider_files::storage(), selection.storage.slug())?;

    if let Some(set) = provider_files::billing(App::Web) {
        rewrite(project_dir, &set, selection.billing_web.slug())?;
    }
    if let (Some(provider), Some(set)) =
        (selection.billing_mobile, provider_files::billing(App::Mobile))
    {
        if apps.contains(&App::Mobile) {
            rewrite(project_dir, &set, provider.slug())?;
        }
    }

    for (app, provider) in &selection.analytics {
        if apps.contains(app) {
            rewrite(project_dir, &provider_files::analytics(*app), provider.slug())?;
        }
    }
    for (app, provider) in &selection.monitoring {
        if apps.contains(app) {
            rewrite(project_dir, &provider_files::monitoring(*app), provider.slug())?;
        }
    }
    Ok(())
}

/// Case-insensitively replace every known token in the set's files with
/// `slug`.
fn rewrite(project_dir: &Path, set: &ProviderFileSet, slug: &str) -> Result<(), AppError> {
    let pattern = RegexBuilder::new(&set.tokens.join("|"))
        .case_insensitive(true)
        .build()
        .map_err(|e| AppError::Configuration(format!("invalid provider token set: {e}")))?;

    for file in set.files {
        let path = project_dir.join(file);
        let content = fs::read_to_string(&path)?;
        let replaced = pattern.replace_all(&content, regex::NoExpand(slug));
        fs::write(&path, replaced.as_ref())?;
    }
    Ok(())
}
