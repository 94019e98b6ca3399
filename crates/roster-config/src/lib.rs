//! # Roster Config
//!
//! Configuration management for Roster.
//! Supports layered configuration from files, environment variables,
//! and runtime refresh.

mod app_config;
mod backend;
mod loader;

pub use app_config::*;
pub use backend::*;
pub use loader::*;
