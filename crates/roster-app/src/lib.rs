//! # Roster App
//!
//! Wires configuration, logging and a [`roster_service::UserService`]
//! backend into the demo scenario run by the `roster` binary.

pub mod app;
pub mod startup;

pub use app::*;
