//! Service backend selection.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which `UserService` implementation the application runs against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ServiceBackend {
    /// In-memory store with full validation.
    #[default]
    Store,
    /// Permissive stand-in returning canned responses.
    Mock,
}

impl fmt::Display for ServiceBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Store => write!(f, "store"),
            Self::Mock => write!(f, "mock"),
        }
    }
}
