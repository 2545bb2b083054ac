//! Applies missing-app directive tables to a scaffolded project tree.

use std::fs;
use std::io;
use std::path::Path;

use crate::config::directives;
use crate::domain::source::SourceDocument;
use crate::domain::{App, AppError, Directive, DirectiveAction, json};

/// A directive that could not be applied. The scaffold carries on; the caller
/// decides how loudly to report it.
#[derive(Debug, Clone)]
pub struct SkippedDirective {
    pub path: String,
    pub reason: String,
}

/// Apply every directive belonging to apps absent from `selected`.
///
/// Apps run in declaration order, directives within an app in table order.
/// Removals are idempotent; JSON and source edits skip files that are missing
/// or fail validation instead of corrupting them or aborting the run.
/// Applying the full set twice leaves the tree byte-identical.
pub fn apply_missing_app_directives(
    project_dir: &Path,
    selected: &[App],
) -> Result<Vec<SkippedDirective>, AppError> {
    let mut skipped = Vec::new();
    for app in App::ALL {
        if selected.contains(&app) {
            continue;
        }
        for directive in directives::for_missing_app(app) {
            apply_directive(project_dir, &directive, &mut skipped)?;
        }
    }
    Ok(skipped)
}

fn apply_directive(
    project_dir: &Path,
    directive: &Directive,
    skipped: &mut Vec<SkippedDirective>,
) -> Result<(), AppError> {
    let path = project_dir.join(directive.path);
    let mut skip = |reason: String| {
        skipped.push(SkippedDirective { path: directive.path.to_string(), reason });
    };

    match directive.action {
        DirectiveAction::RemoveDir => ignore_absent(fs::remove_dir_all(&path)),
        DirectiveAction::RemoveFile => ignore_absent(fs::remove_file(&path)),
        DirectiveAction::ModifyJson { schema, transform } => {
            let Some(content) = read_if_present(&path)? else {
                skip("file not present".to_string());
                return Ok(());
            };
            let value: serde_json::Value = match serde_json::from_str(&content) {
                Ok(value) => value,
                Err(e) => {
                    skip(format!("invalid JSON: {e}"));
                    return Ok(());
                }
            };
            if !schema(&value) {
                skip("unexpected document shape".to_string());
                return Ok(());
            }
            let rendered = match json::to_pretty_string(&transform(value)) {
                Ok(rendered) => rendered,
                Err(e) => {
                    skip(format!("could not serialize: {e}"));
                    return Ok(());
                }
            };
            if rendered != content {
                fs::write(&path, rendered)?;
            }
            Ok(())
        }
        DirectiveAction::ModifySource { transform } => {
            let Some(content) = read_if_present(&path)? else {
                skip("file not present".to_string());
                return Ok(());
            };
            let mut document = SourceDocument::new(content.as_str());
            transform(&mut document);
            if document.text() != content {
                fs::write(&path, document.text())?;
            }
            Ok(())
        }
    }
}

fn ignore_absent(result: io::Result<()>) -> Result<(), AppError> {
    match result {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e.into()),
    }
}

fn read_if_present(path: &Path) -> Result<Option<String>, AppError> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}
