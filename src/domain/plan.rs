//! The answers collected by the interactive prompts, ready to scaffold.

use std::collections::BTreeMap;

use crate::domain::{
    AnalyticsProvider, App, DatabaseMode, EmailProvider, MobileBillingProvider,
    MonitoringProvider, StorageProvider, WebBillingProvider,
};

/// Everything `boltstack new` needs once the operator has answered the
/// prompts. Immutable from then on.
#[derive(Debug, Clone)]
pub struct ProjectPlan {
    pub name: String,
    /// Selected apps; always contains [`App::Web`].
    pub apps: Vec<App>,
    pub database: DatabaseMode,
    pub providers: ProviderSelection,
    /// Flattened env map, written into the registered env files.
    pub env: BTreeMap<String, String>,
}

/// One provider per category; per-app categories carry an entry for each
/// selected app only.
#[derive(Debug, Clone)]
pub struct ProviderSelection {
    pub email: EmailProvider,
    pub storage: StorageProvider,
    pub billing_web: WebBillingProvider,
    pub billing_mobile: Option<MobileBillingProvider>,
    pub analytics: BTreeMap<App, AnalyticsProvider>,
    pub monitoring: BTreeMap<App, MonitoringProvider>,
}
