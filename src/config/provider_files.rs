//! Template files that pin each provider selection, plus the token set the
//! rewrite replaces. Tokens are derived from the provider catalogs so the two
//! can never drift apart.

use crate::domain::{
    AnalyticsProvider, App, EmailProvider, MobileBillingProvider, MonitoringProvider,
    StorageProvider, WebBillingProvider,
};

/// Files referencing a provider by slug, and every slug that may appear there.
#[derive(Debug, Clone)]
pub struct ProviderFileSet {
    pub files: &'static [&'static str],
    pub tokens: Vec<&'static str>,
}

pub fn email() -> ProviderFileSet {
    ProviderFileSet {
        files: &["packages/email/src/providers/index.ts", "packages/email/src/providers/env.ts"],
        tokens: EmailProvider::ALL.iter().map(|p| p.slug()).collect(),
    }
}

pub fn storage() -> ProviderFileSet {
    ProviderFileSet {
        files: &[
            "packages/storage/src/providers/index.ts",
            "packages/storage/src/providers/env.ts",
        ],
        tokens: StorageProvider::ALL.iter().map(|p| p.slug()).collect(),
    }
}

/// Billing files for the given app; the extension has no billing surface.
pub fn billing(app: App) -> Option<ProviderFileSet> {
    match app {
        App::Web => Some(ProviderFileSet {
            files: &[
                "packages/billing/web/src/providers/index.ts",
                "packages/billing/web/src/providers/env.ts",
            ],
            tokens: WebBillingProvider::ALL.iter().map(|p| p.slug()).collect(),
        }),
        App::Mobile => Some(ProviderFileSet {
            files: &["packages/billing/mobile/src/providers/index.ts"],
            tokens: MobileBillingProvider::ALL.iter().map(|p| p.slug()).collect(),
        }),
        App::Extension => None,
    }
}

pub fn analytics(app: App) -> ProviderFileSet {
    let files: &'static [&'static str] = match app {
        App::Web => &[
            "packages/analytics/web/src/providers/index.tsx",
            "packages/analytics/web/src/providers/server.ts",
            "packages/analytics/web/src/providers/env.ts",
        ],
        App::Mobile => &["packages/analytics/mobile/src/providers/index.ts"],
        App::Extension => &["packages/analytics/extension/src/providers/index.ts"],
    };
    ProviderFileSet {
        files,
        tokens: AnalyticsProvider::available_for(app).iter().map(|p| p.slug()).collect(),
    }
}

pub fn monitoring(app: App) -> ProviderFileSet {
    let files: &'static [&'static str] = match app {
        App::Web => &["packages/monitoring/web/src/providers/index.ts"],
        App::Mobile => &["packages/monitoring/mobile/src/providers/index.ts"],
        App::Extension => &["packages/monitoring/extension/src/providers/index.ts"],
    };
    ProviderFileSet { files, tokens: MonitoringProvider::ALL.iter().map(|p| p.slug()).collect() }
}
