//! Startup logging.

use roster_config::AppConfig;
use tracing::{info, warn};

/// Prints the startup banner.
pub fn print_banner() {
    info!(r#"
    ____             __
   / __ \____  _____/ /____  _____
  / /_/ / __ \/ ___/ __/ _ \/ ___/
 / _, _/ /_/ (__  ) /_/  __/ /
/_/ |_|\____/____/\__/\___/_/
    "#);
}

/// Prints the resolved runtime settings.
pub fn print_startup_info(config: &AppConfig) {
    let separator = "=".repeat(60);
    info!("{}", separator);
    info!("Application: {} v{}", config.app.name, config.app.version);
    info!("Environment: {}", config.app.environment);
    info!("Backend:     {}", config.service.backend);
    info!("{}", separator);
}

/// Logs the configuration advisories, once a subscriber is installed.
pub fn log_config_warnings(config: &AppConfig) {
    for warning in config.warnings() {
        warn!("{}", warning);
    }
}
