//! Configuration loader with layered sources.

use crate::AppConfig;
use config::{Config, ConfigError, Environment, File};
use parking_lot::RwLock;
use roster_core::RosterError;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Environment variable selecting the environment-specific config file.
pub const ENVIRONMENT_VAR: &str = "ROSTER_ENVIRONMENT";

/// Prefix for environment variable overrides (`ROSTER__SERVICE__BACKEND=mock`).
pub const ENV_PREFIX: &str = "ROSTER";

/// Configuration loader with runtime refresh support.
#[derive(Clone)]
pub struct ConfigLoader {
    config: Arc<RwLock<AppConfig>>,
    config_dir: PathBuf,
    environment: String,
}

impl ConfigLoader {
    /// Creates a new configuration loader.
    ///
    /// Configuration is loaded from multiple sources in order:
    /// 1. `{config_dir}/default.toml` - Default values
    /// 2. `{config_dir}/{environment}.toml` - Environment-specific overrides
    /// 3. `{config_dir}/local.toml` - Local overrides
    /// 4. Environment variables with `ROSTER__` prefix
    ///
    /// The environment is read from `ROSTER_ENVIRONMENT`, defaulting to
    /// `development`.
    pub fn new(config_dir: impl Into<PathBuf>) -> Result<Self, RosterError> {
        // Load .env file if present
        if let Err(e) = dotenvy::dotenv() {
            debug!("No .env file found or error loading it: {}", e);
        }

        let environment = std::env::var(ENVIRONMENT_VAR).unwrap_or_else(|_| "development".to_string());
        Self::with_environment(config_dir, environment)
    }

    /// Creates a loader for an explicit environment name.
    pub fn with_environment(
        config_dir: impl Into<PathBuf>,
        environment: impl Into<String>,
    ) -> Result<Self, RosterError> {
        let config_dir = config_dir.into();
        let environment = environment.into();
        let config = Self::load_config(&config_dir, &environment)?;

        Ok(Self {
            config: Arc::new(RwLock::new(config)),
            config_dir,
            environment,
        })
    }

    /// Loads configuration from the default location (`./config`).
    pub fn from_default_location() -> Result<Self, RosterError> {
        Self::new("./config")
    }

    /// Returns the current configuration.
    #[must_use]
    pub fn get(&self) -> AppConfig {
        self.config.read().clone()
    }

    /// Reloads the configuration from disk.
    ///
    /// On failure the previous configuration stays in place.
    pub fn reload(&self) -> Result<(), RosterError> {
        let new_config = Self::load_config(&self.config_dir, &self.environment)?;
        *self.config.write() = new_config;
        info!("Configuration reloaded successfully");
        Ok(())
    }

    fn load_config(config_dir: &Path, environment: &str) -> Result<AppConfig, RosterError> {
        info!("Loading configuration for environment: {}", environment);

        let mut builder = Config::builder()
            .set_default("app.environment", environment)
            .map_err(config_error_to_roster_error)?;

        let candidates = [
            config_dir.join("default.toml"),
            config_dir.join(format!("{}.toml", environment)),
            config_dir.join("local.toml"),
        ];

        for path in candidates.iter().filter(|p| p.exists()) {
            debug!("Loading config from: {}", path.display());
            builder = builder.add_source(File::from(path.as_path()).required(false));
        }

        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        );

        let app_config: AppConfig = builder
            .build()
            .and_then(|config| config.try_deserialize())
            .map_err(config_error_to_roster_error)?;

        Self::validate_config(&app_config)?;

        Ok(app_config)
    }

    fn validate_config(config: &AppConfig) -> Result<(), RosterError> {
        if config.observability.log_filter.trim().is_empty() {
            return Err(RosterError::configuration(
                "observability.log_filter must not be empty",
            ));
        }

        for warning in config.warnings() {
            warn!("{}", warning);
        }

        Ok(())
    }
}

impl std::fmt::Debug for ConfigLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfigLoader")
            .field("config_dir", &self.config_dir)
            .field("environment", &self.environment)
            .finish_non_exhaustive()
    }
}

fn config_error_to_roster_error(err: ConfigError) -> RosterError {
    RosterError::configuration(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ServiceBackend;
    use std::fs;
    use std::io;
    use std::sync::Mutex;
    use tempfile::TempDir;

    // Serializes tests that set process environment variables.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn write(dir: &TempDir, name: &str, contents: &str) {
        fs::write(dir.path().join(name), contents).unwrap();
    }

    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl CapturedLogs {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn with_captured_logs<T>(f: impl FnOnce() -> T) -> (T, String) {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        let result = tracing::subscriber::with_default(subscriber, f);
        (result, logs.contents())
    }

    #[test]
    fn test_missing_directory_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let loader = ConfigLoader::with_environment(dir.path().join("absent"), "development").unwrap();
        let config = loader.get();

        assert_eq!(config.app.name, "roster");
        assert_eq!(config.app.environment, "development");
        assert_eq!(config.service.backend, ServiceBackend::Store);
        assert_eq!(config.demo.name, "Zhang San");
    }

    #[test]
    fn test_environment_name_is_recorded() {
        let dir = TempDir::new().unwrap();
        let loader = ConfigLoader::with_environment(dir.path(), "staging").unwrap();
        assert_eq!(loader.get().app.environment, "staging");
    }

    #[test]
    fn test_layered_files_override_in_order() {
        let dir = TempDir::new().unwrap();
        write(
            &dir,
            "default.toml",
            r#"
            [service]
            backend = "store"

            [demo]
            id = 10
            name = "Default Name"
            "#,
        );
        write(
            &dir,
            "staging.toml",
            r#"
            [demo]
            name = "Staging Name"
            "#,
        );
        write(
            &dir,
            "local.toml",
            r#"
            [service]
            backend = "mock"
            "#,
        );

        let config = ConfigLoader::with_environment(dir.path(), "staging").unwrap().get();

        assert_eq!(config.service.backend, ServiceBackend::Mock);
        assert_eq!(config.demo.id, 10);
        assert_eq!(config.demo.name, "Staging Name");
        assert_eq!(config.demo.email, "zhangsan@example.com");
    }

    #[test]
    fn test_other_environment_file_is_ignored() {
        let dir = TempDir::new().unwrap();
        write(
            &dir,
            "production.toml",
            r#"
            [service]
            backend = "mock"
            "#,
        );

        let config = ConfigLoader::with_environment(dir.path(), "development").unwrap().get();
        assert_eq!(config.service.backend, ServiceBackend::Store);
    }

    #[test]
    fn test_empty_log_filter_is_rejected() {
        let dir = TempDir::new().unwrap();
        write(
            &dir,
            "default.toml",
            r#"
            [observability]
            log_filter = "  "
            "#,
        );

        let err = ConfigLoader::with_environment(dir.path(), "development").unwrap_err();
        assert_eq!(err.error_code(), "CONFIGURATION_ERROR");
    }

    #[test]
    fn test_invalid_backend_is_rejected() {
        let dir = TempDir::new().unwrap();
        write(
            &dir,
            "default.toml",
            r#"
            [service]
            backend = "postgres"
            "#,
        );

        let err = ConfigLoader::with_environment(dir.path(), "development").unwrap_err();
        assert!(matches!(err, RosterError::Configuration(_)));
    }

    #[test]
    fn test_reload_picks_up_changes() {
        let dir = TempDir::new().unwrap();
        write(&dir, "default.toml", "[demo]\nid = 1\n");
        let loader = ConfigLoader::with_environment(dir.path(), "development").unwrap();
        assert_eq!(loader.get().demo.id, 1);

        write(&dir, "default.toml", "[demo]\nid = 2\n");
        loader.reload().unwrap();
        assert_eq!(loader.get().demo.id, 2);
    }

    #[test]
    fn test_failed_reload_keeps_previous_config() {
        let dir = TempDir::new().unwrap();
        write(&dir, "default.toml", "[demo]\nid = 3\n");
        let loader = ConfigLoader::with_environment(dir.path(), "development").unwrap();

        write(&dir, "default.toml", "[observability]\nlog_filter = \"\"\n");
        assert!(loader.reload().is_err());
        assert_eq!(loader.get().demo.id, 3);
    }

    #[test]
    fn test_mock_in_production_logs_warning() {
        let dir = TempDir::new().unwrap();
        write(&dir, "production.toml", "[service]\nbackend = \"mock\"\n");

        let (loader, logs) = with_captured_logs(|| ConfigLoader::with_environment(dir.path(), "production"));

        assert_eq!(loader.unwrap().get().service.backend, ServiceBackend::Mock);
        assert!(logs.contains("WARN"));
        assert!(logs.contains("Mock user service selected in production"));
    }

    #[test]
    fn test_store_in_production_logs_no_warning() {
        let dir = TempDir::new().unwrap();

        let (loader, logs) = with_captured_logs(|| ConfigLoader::with_environment(dir.path(), "production"));

        assert!(loader.is_ok());
        assert!(!logs.contains("WARN"));
    }

    #[test]
    fn test_environment_variables_override_local_file() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        let dir = TempDir::new().unwrap();
        write(&dir, "local.toml", "[app]\nversion = \"from-local-file\"\n");

        std::env::set_var("ROSTER__APP__VERSION", "from-env-override");
        let result = ConfigLoader::with_environment(dir.path(), "development");
        std::env::remove_var("ROSTER__APP__VERSION");

        assert_eq!(result.unwrap().get().app.version, "from-env-override");
    }

    #[test]
    fn test_new_reads_environment_name_from_env() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        let dir = TempDir::new().unwrap();
        write(&dir, "loadtest.toml", "[demo]\nname = \"Load Test\"\n");

        std::env::set_var(ENVIRONMENT_VAR, "loadtest");
        let result = ConfigLoader::new(dir.path());
        std::env::remove_var(ENVIRONMENT_VAR);

        let config = result.unwrap().get();
        assert_eq!(config.app.environment, "loadtest");
        assert_eq!(config.demo.name, "Load Test");
    }
}
