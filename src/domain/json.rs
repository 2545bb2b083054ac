//! Pure JSON document transforms for package manifests.

use serde_json::Value;

/// Drop `dependency` from the `dependencies` and `devDependencies` maps,
/// leaving every other field — and the order of all remaining keys — intact.
///
/// Removing an absent dependency is a no-op, so the transform can be applied
/// repeatedly.
pub fn remove_dependency(value: Value, dependency: &str) -> Value {
    let Value::Object(map) = value else {
        return value;
    };
    let rebuilt = map
        .into_iter()
        .map(|(key, entry)| {
            let entry = match (key.as_str(), entry) {
                ("dependencies" | "devDependencies", Value::Object(deps)) => Value::Object(
                    deps.into_iter().filter(|(name, _)| name != dependency).collect(),
                ),
                (_, entry) => entry,
            };
            (key, entry)
        })
        .collect();
    Value::Object(rebuilt)
}

/// Serialize with the template convention: 2-space indent, trailing newline.
pub fn to_pretty_string(value: &Value) -> Result<String, serde_json::Error> {
    let mut rendered = serde_json::to_string_pretty(value)?;
    rendered.push('\n');
    Ok(rendered)
}
