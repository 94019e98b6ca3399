//! Application configuration structures.

use crate::ServiceBackend;
use roster_core::{TelemetryConfig, User};
use serde::{Deserialize, Serialize};

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application name and metadata.
    #[serde(default)]
    pub app: AppMetadata,

    /// User service configuration.
    #[serde(default)]
    pub service: ServiceConfig,

    /// Record used by the demo scenario.
    #[serde(default)]
    pub demo: DemoConfig,

    /// Observability configuration.
    #[serde(default)]
    pub observability: TelemetryConfig,
}

impl AppConfig {
    /// Returns advisories about settings that are valid but risky.
    #[must_use]
    pub fn warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();

        if self.app.is_production() && self.service.backend == ServiceBackend::Mock {
            warnings.push(
                "Mock user service selected in production; all operations will succeed without storing data."
                    .to_string(),
            );
        }

        warnings
    }
}

/// Application metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppMetadata {
    /// Application name.
    pub name: String,
    /// Application version.
    pub version: String,
    /// Environment (development, staging, production).
    pub environment: String,
}

impl Default for AppMetadata {
    fn default() -> Self {
        Self {
            name: "roster".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            environment: "development".to_string(),
        }
    }
}

impl AppMetadata {
    /// Returns true when running in production.
    #[must_use]
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

/// User service configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Backend implementation.
    #[serde(default)]
    pub backend: ServiceBackend,
}

/// Demo record configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub id: i64,
    pub name: String,
    pub email: String,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            id: 1,
            name: "Zhang San".to_string(),
            email: "zhangsan@example.com".to_string(),
        }
    }
}

impl DemoConfig {
    /// Builds the user record this configuration describes.
    #[must_use]
    pub fn to_user(&self) -> User {
        User::new(self.id, self.name.clone(), self.email.clone())
    }
}
