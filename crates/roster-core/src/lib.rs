//! # Roster Core
//!
//! Core types, traits, and error definitions for Roster.
//! This crate provides the user entity and the error type shared by the
//! service implementations and the application.

pub mod domain;
pub mod error;
pub mod id;
pub mod result;
pub mod telemetry;
pub mod traits;

pub use domain::*;
pub use error::*;
pub use id::*;
pub use result::*;
pub use telemetry::*;
pub use traits::*;
