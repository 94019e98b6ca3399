//! Domain layer.

pub mod entities;

pub use entities::*;
