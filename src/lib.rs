//! boltstack: scaffold BoltStack projects and pull upstream template updates.
//!
//! The library is organized hexagonally: `domain` holds pure types and the
//! source-document model, `ports` the traits commands depend on, `services`
//! the adapters over git and external processes, `config` the immutable
//! template registries, and `app` the command orchestration plus the CLI
//! boundary.

pub mod app;
pub mod config;
pub mod domain;
pub mod ports;
pub mod services;

pub use domain::{AppError, UpdateOutcome};
