//! Command orchestration, kept free of terminal I/O so every flow is
//! exercisable with mock ports.

pub mod local_services;
pub mod new;
pub mod prerequisites;
pub mod update;
