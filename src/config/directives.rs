//! Edit directives applied when an optional app is left out of a scaffold.
//!
//! Each missing app removes its own directories and workflows, then surgically
//! unwires itself from the shared packages: manifest dependencies, env preset
//! composition, webhook routes, and auth configuration.

use serde::Deserialize;
use serde_json::Value;

use crate::domain::source::SourceDocument;
use crate::domain::{App, Directive, json};

/// Directives for a single missing app, in application order.
pub fn for_missing_app(app: App) -> Vec<Directive> {
    match app {
        App::Web => Vec::new(),
        App::Mobile => mobile(),
        App::Extension => extension(),
    }
}

fn mobile() -> Vec<Directive> {
    let mut directives: Vec<Directive> = [
        "apps/mobile",
        "packages/analytics/mobile",
        "packages/billing/mobile",
        "packages/monitoring/mobile",
        "packages/ui/mobile",
    ]
    .into_iter()
    .map(Directive::remove_dir)
    .collect();

    directives.extend(
        [
            "packages/auth/src/client/mobile.ts",
            "packages/auth/src/server/mobile.ts",
            ".github/workflows/publish-mobile.yml",
        ]
        .into_iter()
        .map(Directive::remove_file),
    );

    directives.push(Directive::modify_json(
        "packages/api/package.json",
        package_manifest,
        drop_billing_mobile_dependency,
    ));
    directives.push(Directive::modify_json(
        "packages/auth/package.json",
        package_manifest,
        drop_expo_auth_dependency,
    ));
    directives.push(Directive::modify_source("packages/api/src/env.ts", strip_billing_mobile_env));
    directives.push(Directive::modify_source(
        "packages/api/src/modules/billing/router.ts",
        strip_billing_mobile_route,
    ));
    directives.push(Directive::modify_source("packages/auth/src/server.ts", strip_mobile_auth));
    directives
}

fn extension() -> Vec<Directive> {
    let mut directives: Vec<Directive> =
        ["apps/extension", "packages/analytics/extension", "packages/monitoring/extension"]
            .into_iter()
            .map(Directive::remove_dir)
            .collect();
    directives.push(Directive::remove_file(".github/workflows/publish-extension.yml"));
    directives.push(Directive::modify_source("packages/auth/src/server.ts", strip_extension_auth));
    directives
}

/// Loose package-manifest shape: any object carrying a `dependencies` string
/// map. Unknown fields are fine; a missing or malformed map is not.
#[derive(Deserialize)]
struct PackageManifest {
    #[allow(dead_code)]
    dependencies: std::collections::BTreeMap<String, String>,
}

fn package_manifest(value: &Value) -> bool {
    PackageManifest::deserialize(value).is_ok()
}

fn drop_billing_mobile_dependency(value: Value) -> Value {
    json::remove_dependency(value, "@boltstack/billing-mobile")
}

fn drop_expo_auth_dependency(value: Value) -> Value {
    json::remove_dependency(value, "@better-auth/expo")
}

fn strip_billing_mobile_env(document: &mut SourceDocument) {
    document.remove_import_starting_with("@boltstack/billing-mobile");
    document.remove_array_elements("extends", |element| element == "billingMobile");
}

fn strip_billing_mobile_route(document: &mut SourceDocument) {
    document.remove_import_starting_with("@boltstack/billing-mobile");
    document.collapse_member_call("post", "mobile.provider");
}

fn strip_mobile_auth(document: &mut SourceDocument) {
    document.remove_import("@better-auth/expo");
    document.remove_array_elements("plugins", |element| element.starts_with("expo("));
    document.remove_array_elements("trustedOrigins", |element| element == "\"boltstack://\"");
}

fn strip_extension_auth(document: &mut SourceDocument) {
    document
        .remove_array_elements("trustedOrigins", |element| element == "\"chrome-extension://\"");
}
