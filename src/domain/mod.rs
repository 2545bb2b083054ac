//! Core domain types: errors, app/provider catalogs, remote identity, edit
//! directives, and the source document model.

mod apps;
mod directive;
mod error;
pub mod json;
mod plan;
mod providers;
mod remote;
pub mod source;
mod update;

pub use apps::App;
pub use directive::{Directive, DirectiveAction, JsonSchema, JsonTransform, SourceTransform};
pub use error::AppError;
pub use plan::{ProjectPlan, ProviderSelection};
pub use providers::{
    AnalyticsProvider, DatabaseMode, EmailProvider, MobileBillingProvider, MonitoringProvider,
    StorageProvider, WebBillingProvider,
};
pub use remote::{AccessMode, RemoteSpec};
pub use update::UpdateOutcome;
