use crate::domain::AccessMode;

/// Probes whether authenticated SSH access to a git host is available.
pub trait AccessProbe {
    /// Never fails: any probe error, refusal, or timeout resolves to
    /// [`AccessMode::Https`].
    fn resolve(&self, host: &str) -> AccessMode;
}
