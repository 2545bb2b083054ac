//! Declarative file-edit directives applied when an optional app is missing.

use std::fmt;

use serde_json::Value;

use crate::domain::source::SourceDocument;

/// Validates a parsed JSON document before its transform may run.
pub type JsonSchema = fn(&Value) -> bool;

/// Pure transform from one JSON document to the next.
pub type JsonTransform = fn(Value) -> Value;

/// In-place structural edit of a source document. Must no-op when the
/// constructs it targets are absent.
pub type SourceTransform = fn(&mut SourceDocument);

/// What a directive does to its path.
#[derive(Clone, Copy)]
pub enum DirectiveAction {
    /// Recursive, idempotent directory removal.
    RemoveDir,
    /// Idempotent file removal.
    RemoveFile,
    /// Schema-validated JSON rewrite.
    ModifyJson { schema: JsonSchema, transform: JsonTransform },
    /// Syntax-aware source rewrite.
    ModifySource { transform: SourceTransform },
}

/// A single edit instruction, keyed by a path relative to the project root.
#[derive(Clone, Copy)]
pub struct Directive {
    pub path: &'static str,
    pub action: DirectiveAction,
}

impl Directive {
    pub const fn remove_dir(path: &'static str) -> Self {
        Self { path, action: DirectiveAction::RemoveDir }
    }

    pub const fn remove_file(path: &'static str) -> Self {
        Self { path, action: DirectiveAction::RemoveFile }
    }

    /// Panics when `path` is not a JSON file: directive tables are static, so
    /// a mismatched kind is a programming error, not a runtime condition.
    pub fn modify_json(path: &'static str, schema: JsonSchema, transform: JsonTransform) -> Self {
        assert!(path.ends_with(".json"), "ModifyJson directive on non-JSON path: {path}");
        Self { path, action: DirectiveAction::ModifyJson { schema, transform } }
    }

    /// Panics when `path` is not a recognized source file; see `modify_json`.
    pub fn modify_source(path: &'static str, transform: SourceTransform) -> Self {
        assert!(
            path.ends_with(".ts") || path.ends_with(".tsx"),
            "ModifySource directive on non-source path: {path}"
        );
        Self { path, action: DirectiveAction::ModifySource { transform } }
    }
}

impl fmt::Debug for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.action {
            DirectiveAction::RemoveDir => "RemoveDir",
            DirectiveAction::RemoveFile => "RemoveFile",
            DirectiveAction::ModifyJson { .. } => "ModifyJson",
            DirectiveAction::ModifySource { .. } => "ModifySource",
        };
        write!(f, "{kind}({})", self.path)
    }
}
