//! Environment file preparation and `KEY="value"` upserts.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use regex::Regex;

use crate::config::env_registry::{self, EnvTarget};
use crate::domain::AppError;

pub const ENV_EXAMPLE: &str = ".env.example";
pub const ENV_LOCAL: &str = ".env.local";

/// Copy `.env.example` to `.env.local` for every env target present on disk.
/// Targets whose app directory was stripped from the scaffold are skipped.
pub fn prepare(project_dir: &Path) -> Result<(), AppError> {
    for target in EnvTarget::ALL {
        let dir = project_dir.join(target.dir());
        if !dir.is_dir() {
            continue;
        }
        let example = dir.join(ENV_EXAMPLE);
        if !example.is_file() {
            return Err(AppError::Configuration(format!(
                "Missing {ENV_EXAMPLE} in {}",
                target.dir()
            )));
        }
        fs::copy(&example, dir.join(ENV_LOCAL))?;
    }
    Ok(())
}

/// Upsert every variable into each env file registered for it.
///
/// Writes are grouped per file — one read-modify-write cycle per target — so
/// variables sharing a file can never clobber each other. Files for apps that
/// were not scaffolded are skipped.
pub fn write_all(
    project_dir: &Path,
    variables: &BTreeMap<String, String>,
) -> Result<(), AppError> {
    for target in EnvTarget::ALL {
        let entries: Vec<(&str, &str)> = variables
            .iter()
            .filter(|(key, _)| env_registry::targets_for(key).contains(&target))
            .map(|(key, value)| (key.as_str(), value.as_str()))
            .collect();
        if entries.is_empty() {
            continue;
        }

        let path = project_dir.join(target.dir()).join(ENV_LOCAL);
        if !path.is_file() {
            continue;
        }
        let mut content = fs::read_to_string(&path)?;
        for (key, value) in entries {
            content = upsert(&content, key, value)?;
        }
        fs::write(&path, content)?;
    }
    Ok(())
}

/// Replace every existing `KEY=` line, or append one when absent.
fn upsert(content: &str, key: &str, value: &str) -> Result<String, AppError> {
    let pattern = Regex::new(&format!(r"(?m)^{}=.*$", regex::escape(key)))
        .map_err(|e| AppError::Configuration(format!("invalid env key {key}: {e}")))?;
    let line = format!("{key}=\"{value}\"");
    if pattern.is_match(content) {
        Ok(pattern.replace_all(content, regex::NoExpand(&line)).into_owned())
    } else {
        Ok(format!("{content}\n{line}"))
    }
}
