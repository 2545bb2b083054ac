//! Library-level exercises of the missing-app directive engine against the
//! on-disk template fixture.

mod harness;

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use assert_fs::TempDir;

use boltstack::domain::App;
use boltstack::services::rewrite;
use harness::template_fixture;

/// Relative path → content for every file under `dir`, git metadata excluded.
fn snapshot(dir: &Path) -> BTreeMap<String, Vec<u8>> {
    let mut entries = BTreeMap::new();
    collect(dir, dir, &mut entries);
    entries
}

fn collect(root: &Path, dir: &Path, entries: &mut BTreeMap<String, Vec<u8>>) {
    for entry in fs::read_dir(dir).expect("read_dir") {
        let entry = entry.expect("dir entry");
        let path = entry.path();
        let name = entry.file_name();
        if name == ".git" {
            continue;
        }
        if path.is_dir() {
            collect(root, &path, entries);
        } else {
            let rel = path.strip_prefix(root).expect("under root").to_string_lossy().into_owned();
            entries.insert(rel, fs::read(&path).expect("read file"));
        }
    }
}

fn template_dir() -> TempDir {
    let temp = TempDir::new().expect("temp dir");
    template_fixture::write_template(temp.path());
    temp
}

fn read(dir: &Path, rel: &str) -> String {
    fs::read_to_string(dir.join(rel)).expect("readable file")
}

#[test]
fn web_only_scaffold_strips_both_optional_apps() {
    let temp = template_dir();

    let skipped =
        rewrite::apply_missing_app_directives(temp.path(), &[App::Web]).expect("directives apply");
    assert!(skipped.is_empty(), "unexpected skips: {skipped:?}");

    // Directories and files belonging to the optional apps are gone.
    for gone in [
        "apps/mobile",
        "apps/extension",
        "packages/analytics/mobile",
        "packages/analytics/extension",
        "packages/billing/mobile",
        "packages/monitoring/mobile",
        "packages/monitoring/extension",
        "packages/ui/mobile",
        "packages/auth/src/client/mobile.ts",
        "packages/auth/src/server/mobile.ts",
        ".github/workflows/publish-mobile.yml",
        ".github/workflows/publish-extension.yml",
    ] {
        assert!(!temp.path().join(gone).exists(), "{gone} should be removed");
    }

    // Shared web-side surface is untouched.
    assert!(temp.path().join("apps/web/package.json").is_file());
    assert!(temp.path().join("packages/api/src/modules/billing").is_dir());
}

#[test]
fn web_only_scaffold_rewrites_shared_sources() {
    let temp = template_dir();

    rewrite::apply_missing_app_directives(temp.path(), &[App::Web]).expect("directives apply");

    assert_eq!(
        read(temp.path(), "packages/api/package.json"),
        template_fixture::API_MANIFEST_WITHOUT_MOBILE
    );
    assert_eq!(read(temp.path(), "packages/api/src/env.ts"), template_fixture::API_ENV_WITHOUT_MOBILE);
    assert_eq!(
        read(temp.path(), "packages/api/src/modules/billing/router.ts"),
        template_fixture::BILLING_ROUTER_WITHOUT_MOBILE
    );
    assert_eq!(
        read(temp.path(), "packages/auth/src/server.ts"),
        template_fixture::AUTH_SERVER_WEB_ONLY
    );

    let auth_manifest = read(temp.path(), "packages/auth/package.json");
    assert!(!auth_manifest.contains("@better-auth/expo"));
    assert!(auth_manifest.contains("better-auth"));
}

#[test]
fn applying_the_directive_set_twice_is_byte_identical() {
    let temp = template_dir();

    rewrite::apply_missing_app_directives(temp.path(), &[App::Web]).expect("first application");
    let once = snapshot(temp.path());

    rewrite::apply_missing_app_directives(temp.path(), &[App::Web]).expect("second application");
    let twice = snapshot(temp.path());

    assert_eq!(once, twice);
}

#[test]
fn keeping_mobile_only_strips_the_extension() {
    let temp = template_dir();

    rewrite::apply_missing_app_directives(temp.path(), &[App::Web, App::Mobile])
        .expect("directives apply");

    assert!(temp.path().join("apps/mobile").is_dir());
    assert!(!temp.path().join("apps/extension").exists());

    // Mobile wiring survives; only the extension origin is dropped.
    let server = read(temp.path(), "packages/auth/src/server.ts");
    assert!(server.contains("expo()"));
    assert!(server.contains("\"boltstack://\""));
    assert!(!server.contains("\"chrome-extension://\""));

    let manifest = read(temp.path(), "packages/api/package.json");
    assert!(manifest.contains("@boltstack/billing-mobile"));
}

#[test]
fn full_selection_leaves_the_tree_untouched() {
    let temp = template_dir();
    let before = snapshot(temp.path());

    rewrite::apply_missing_app_directives(temp.path(), &[App::Web, App::Mobile, App::Extension])
        .expect("directives apply");

    assert_eq!(before, snapshot(temp.path()));
}
