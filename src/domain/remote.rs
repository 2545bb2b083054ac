//! Canonical identity of the template repository and its URL renderings.

use url::Url;

use crate::domain::AppError;

/// Transport used to reach the template repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessMode {
    Ssh,
    Https,
}

/// Logical repository identity with an SSH and an HTTPS rendering.
///
/// Two remote URLs refer to the same repository when they are equal after
/// normalization (trailing slashes stripped, then a single `.git` suffix).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoteSpec {
    /// Repository hosted on a git forge, reachable over SSH or HTTPS.
    Hosted { host: String, owner: String, name: String },
    /// Explicit URL override; the single rendering serves every access mode.
    Custom { url: String },
}

impl RemoteSpec {
    /// Parse an HTTPS repository URL (`https://host/owner/name[.git]`) into a
    /// hosted identity.
    pub fn hosted(https_url: &str) -> Result<Self, AppError> {
        let parsed = Url::parse(https_url)
            .map_err(|e| AppError::Configuration(format!("invalid repository URL: {e}")))?;
        let host = parsed
            .host_str()
            .ok_or_else(|| AppError::Configuration("repository URL has no host".to_string()))?
            .to_string();
        let segments = parsed
            .path_segments()
            .map(|segments| segments.filter(|s| !s.is_empty()).collect::<Vec<_>>())
            .unwrap_or_default();
        let [owner, name] = segments.as_slice() else {
            return Err(AppError::Configuration(format!(
                "repository URL must be https://host/owner/name, got {https_url}"
            )));
        };
        let name = name.strip_suffix(".git").unwrap_or(name);
        Ok(RemoteSpec::Hosted {
            host,
            owner: (*owner).to_string(),
            name: name.to_string(),
        })
    }

    /// Wrap a raw URL (fork, mirror, local path) used verbatim for every mode.
    pub fn custom(url: impl Into<String>) -> Self {
        RemoteSpec::Custom { url: url.into() }
    }

    /// SSH rendering (`git@host:owner/name`).
    pub fn ssh_url(&self) -> String {
        match self {
            RemoteSpec::Hosted { host, owner, name } => format!("git@{host}:{owner}/{name}"),
            RemoteSpec::Custom { url } => url.clone(),
        }
    }

    /// HTTPS rendering (`https://host/owner/name`).
    pub fn https_url(&self) -> String {
        match self {
            RemoteSpec::Hosted { host, owner, name } => format!("https://{host}/{owner}/{name}"),
            RemoteSpec::Custom { url } => url.clone(),
        }
    }

    /// URL for the given access mode. Pure and total.
    pub fn url(&self, mode: AccessMode) -> String {
        match mode {
            AccessMode::Ssh => self.ssh_url(),
            AccessMode::Https => self.https_url(),
        }
    }

    /// Host to probe for SSH access; `None` when the rendering is fixed and
    /// no probe is meaningful.
    pub fn ssh_host(&self) -> Option<&str> {
        match self {
            RemoteSpec::Hosted { host, .. } => Some(host),
            RemoteSpec::Custom { .. } => None,
        }
    }

    /// Whether `url` refers to this repository, under normalization.
    pub fn matches(&self, url: &str) -> bool {
        let normalized = normalize(url);
        normalized == normalize(&self.ssh_url()) || normalized == normalize(&self.https_url())
    }

    /// Rendering the operator most likely intended, judging by the scheme of
    /// the URL they currently have configured.
    pub fn expected_for(&self, current_url: &str) -> String {
        if current_url.starts_with("git@") {
            self.ssh_url()
        } else {
            self.https_url()
        }
    }
}

/// Strip trailing slashes, then a single `.git` suffix.
fn normalize(url: &str) -> &str {
    let trimmed = url.trim_end_matches('/');
    trimmed.strip_suffix(".git").unwrap_or(trimmed)
}
