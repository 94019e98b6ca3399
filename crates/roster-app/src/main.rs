//! # Roster
//!
//! Creates the configured demo user through a user service, reads it back
//! and prints it.

use roster_app::{startup, AppBuilder};
use roster_config::{AppConfig, ConfigLoader};
use roster_core::{init_logging, RosterResult, TelemetryConfig};
use tracing::{error, info};

fn main() {
    let config = match ConfigLoader::from_default_location() {
        Ok(loader) => loader.get(),
        Err(e) => {
            // No usable observability settings; report through the defaults.
            let _ = init_logging(&TelemetryConfig::default());
            fail(&e);
        }
    };

    if let Err(e) = init_logging(&config.observability) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    if let Err(e) = run(config) {
        fail(&e);
    }
}

fn run(config: AppConfig) -> RosterResult<()> {
    startup::print_banner();
    startup::print_startup_info(&config);
    startup::log_config_warnings(&config);

    let user = AppBuilder::new().with_config(config).run()?;

    println!("Found user: {}", user);
    println!("{}", user.to_json()?);

    info!("Done");
    Ok(())
}

fn fail(e: &roster_core::RosterError) -> ! {
    error!("Application error: {}", e);
    std::process::exit(1);
}
