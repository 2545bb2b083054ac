/// Outcome of an update invocation that ran to completion.
///
/// Precondition and unclassified failures surface as [`crate::domain::AppError`]
/// instead; a conflicted merge is an actionable outcome, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// Upstream had nothing new.
    UpToDate,
    /// Upstream changes merged cleanly.
    Merged,
    /// Merge stopped on conflicts, left in place for manual resolution.
    /// Paths appear in the order the status query reported them.
    Conflicted { paths: Vec<String> },
}
