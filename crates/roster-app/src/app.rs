//! Application builder and demo scenario.

use roster_config::AppConfig;
use roster_core::{RosterResult, User};
use roster_service::{create_user_service, UserService};
use tracing::{debug, info};

/// Creates `user`, then reads it back by ID.
///
/// Returns the record the service hands back, which for the mock backend is
/// not the record that was created.
pub fn run_scenario(service: &mut dyn UserService, user: User) -> RosterResult<User> {
    let id = user.id;
    debug!("Running scenario for user: {}", id);

    service.create_user(Some(user))?;
    let found = service.get_user(id)?;

    info!("Found user: {}", found);
    Ok(found)
}

/// Application builder for running the demo.
#[derive(Debug, Default)]
pub struct AppBuilder {
    config: Option<AppConfig>,
}

impl AppBuilder {
    /// Creates a new application builder.
    #[must_use]
    pub fn new() -> Self {
        Self { config: None }
    }

    /// Sets the configuration.
    #[must_use]
    pub fn with_config(mut self, config: AppConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Builds the configured service and runs the scenario against it.
    pub fn run(self) -> RosterResult<User> {
        let config = self.config.unwrap_or_default();
        let mut service = create_user_service(config.service.backend);
        run_scenario(service.as_mut(), config.demo.to_user())
    }
}
