//! A minimal on-disk replica of the template monorepo: the marker files, the
//! optional-app trees, and the shared sources the missing-app directives
//! rewrite.

use std::fs;
use std::path::Path;

pub(crate) const API_MANIFEST: &str = r#"{
  "name": "@boltstack/api",
  "version": "0.1.0",
  "private": true,
  "dependencies": {
    "@boltstack/auth": "workspace:*",
    "@boltstack/billing-mobile": "workspace:*",
    "@boltstack/db": "workspace:*"
  },
  "devDependencies": {
    "typescript": "^5.5.4"
  }
}
"#;

pub(crate) const API_MANIFEST_WITHOUT_MOBILE: &str = r#"{
  "name": "@boltstack/api",
  "version": "0.1.0",
  "private": true,
  "dependencies": {
    "@boltstack/auth": "workspace:*",
    "@boltstack/db": "workspace:*"
  },
  "devDependencies": {
    "typescript": "^5.5.4"
  }
}
"#;

pub(crate) const AUTH_MANIFEST: &str = r#"{
  "name": "@boltstack/auth",
  "version": "0.1.0",
  "private": true,
  "dependencies": {
    "@better-auth/expo": "^1.2.0",
    "better-auth": "^1.2.0"
  }
}
"#;

pub(crate) const API_ENV: &str = r#"import { createEnv } from "@t3-oss/env-nextjs";

import { billingMobile } from "@boltstack/billing-mobile/env";
import { billingWeb } from "@boltstack/billing-web/env";

export const preset = createEnv({
  extends: [billingWeb, billingMobile],
  server: {},
  runtimeEnv: process.env,
});
"#;

pub(crate) const API_ENV_WITHOUT_MOBILE: &str = r#"import { createEnv } from "@t3-oss/env-nextjs";

import { billingWeb } from "@boltstack/billing-web/env";

export const preset = createEnv({
  extends: [billingWeb],
  server: {},
  runtimeEnv: process.env,
});
"#;

pub(crate) const BILLING_ROUTER: &str = r#"import { webhooks } from "@boltstack/billing-mobile/server";

import { audit, router } from "../../trpc";
import { checkout } from "./checkout";

export const billingRouter = router({
  checkout,
})
  .post("/webhooks/mobile.provider", webhooks)
  .use(audit);
"#;

pub(crate) const BILLING_ROUTER_WITHOUT_MOBILE: &str = r#"import { audit, router } from "../../trpc";
import { checkout } from "./checkout";

export const billingRouter = router({
  checkout,
})
  .use(audit);
"#;

pub(crate) const AUTH_SERVER: &str = r#"import { expo } from "@better-auth/expo";
import { betterAuth } from "better-auth";

import { db } from "@boltstack/db";

export const auth = betterAuth({
  database: db,
  plugins: [expo(), passkey()],
  trustedOrigins: ["boltstack://", "chrome-extension://", env.APP_URL],
});
"#;

pub(crate) const AUTH_SERVER_WEB_ONLY: &str = r#"import { betterAuth } from "better-auth";

import { db } from "@boltstack/db";

export const auth = betterAuth({
  database: db,
  plugins: [passkey()],
  trustedOrigins: [env.APP_URL],
});
"#;

/// Write the fixture tree under `dir`.
pub(crate) fn write_template(dir: &Path) {
    let files: &[(&str, &str)] = &[
        // Project markers
        ("package.json", "{\n  \"name\": \"boltstack-template\",\n  \"private\": true\n}\n"),
        ("pnpm-workspace.yaml", "packages:\n  - \"apps/*\"\n  - \"packages/*\"\n"),
        ("turbo.json", "{\n  \"tasks\": {}\n}\n"),
        ("README.md", "# BoltStack\n"),
        (".env.example", "DATABASE_URL=\"\"\n"),
        // Web app
        ("apps/web/package.json", "{\n  \"name\": \"@boltstack/web\"\n}\n"),
        ("apps/web/.env.example", "STRIPE_SECRET_KEY=\"\"\nNEXT_PUBLIC_POSTHOG_KEY=\"\"\n"),
        // Optional apps
        ("apps/mobile/package.json", "{\n  \"name\": \"@boltstack/mobile\"\n}\n"),
        ("apps/mobile/.env.example", "EXPO_PUBLIC_POSTHOG_KEY=\"\"\n"),
        ("apps/extension/package.json", "{\n  \"name\": \"@boltstack/extension\"\n}\n"),
        ("apps/extension/.env.example", "VITE_POSTHOG_KEY=\"\"\n"),
        // App-specific packages
        ("packages/analytics/mobile/src/providers/index.ts", "export {};\n"),
        ("packages/analytics/extension/src/providers/index.ts", "export {};\n"),
        ("packages/billing/mobile/src/providers/index.ts", "export {};\n"),
        ("packages/monitoring/mobile/src/providers/index.ts", "export {};\n"),
        ("packages/monitoring/extension/src/providers/index.ts", "export {};\n"),
        ("packages/ui/mobile/src/index.ts", "export {};\n"),
        ("packages/auth/src/client/mobile.ts", "export {};\n"),
        ("packages/auth/src/server/mobile.ts", "export {};\n"),
        (".github/workflows/publish-mobile.yml", "name: publish-mobile\n"),
        (".github/workflows/publish-extension.yml", "name: publish-extension\n"),
        // Shared sources the directives rewrite
        ("packages/api/package.json", API_MANIFEST),
        ("packages/auth/package.json", AUTH_MANIFEST),
        ("packages/api/src/env.ts", API_ENV),
        ("packages/api/src/modules/billing/router.ts", BILLING_ROUTER),
        ("packages/auth/src/server.ts", AUTH_SERVER),
    ];

    for (rel, content) in files {
        let path = dir.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("fixture dirs");
        }
        fs::write(path, content).expect("fixture file");
    }
}
